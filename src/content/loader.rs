//! Content loader - builds page contexts from the source directory

use anyhow::{Context, Result};
use chrono::{DateTime, Local};
use std::fs;
use std::path::Path;
use walkdir::WalkDir;

use super::{wikilinks, FrontMatter, MarkdownRenderer, PageContext, PageDates};
use crate::helpers::slugify_path;
use crate::Site;

/// Loads pages from the source directory
pub struct ContentLoader<'a> {
    site: &'a Site,
    renderer: MarkdownRenderer,
}

impl<'a> ContentLoader<'a> {
    /// Create a new content loader
    pub fn new(site: &'a Site) -> Self {
        Self {
            site,
            renderer: MarkdownRenderer::new(),
        }
    }

    /// Load every published markdown page below the source directory
    ///
    /// Drafts are excluded, and so are pages without `publish: true` when the
    /// site sets `explicit_publish`. Pages that fail to load are logged and
    /// skipped. The result is sorted by slug.
    pub fn load_pages(&self) -> Result<Vec<PageContext>> {
        let source_dir = &self.site.source_dir;
        if !source_dir.exists() {
            tracing::warn!("Source directory {:?} does not exist", source_dir);
            return Ok(Vec::new());
        }

        let explicit_publish = self.site.config.explicit_publish;
        let mut pages = Vec::new();

        for entry in WalkDir::new(source_dir)
            .follow_links(true)
            .into_iter()
            .filter_entry(|e| e.depth() == 0 || !is_hidden(e.path()))
            .filter_map(|e| e.ok())
        {
            let path = entry.path();
            if !path.is_file() || !is_markdown_file(path) {
                continue;
            }

            match self.load_page(path) {
                Ok(page) if page.is_draft() => {
                    tracing::debug!("Skipping draft {:?}", path);
                }
                Ok(page) if !page.is_published(explicit_publish) => {
                    tracing::debug!("Skipping unpublished {:?}", path);
                }
                Ok(page) => pages.push(page),
                Err(e) => {
                    tracing::warn!("Failed to load page {:?}: {:#}", path, e);
                }
            }
        }

        pages.sort_by(|a, b| a.slug.cmp(&b.slug));
        Ok(pages)
    }

    /// Load a single page from a file
    pub fn load_page(&self, path: &Path) -> Result<PageContext> {
        let content =
            fs::read_to_string(path).with_context(|| format!("Failed to read {:?}", path))?;

        let file_modified = fs::metadata(path)
            .and_then(|m| m.modified())
            .ok()
            .map(DateTime::<Local>::from);

        let relative = path
            .strip_prefix(&self.site.source_dir)
            .unwrap_or(path)
            .to_string_lossy()
            .to_string();

        self.parse_page(&content, &relative, file_modified)
    }

    /// Build a page context from source text
    ///
    /// `relative_path` is the path below the source directory and becomes the
    /// slug; `file_modified` backs up missing creation/modification dates.
    pub fn parse_page(
        &self,
        content: &str,
        relative_path: &str,
        file_modified: Option<DateTime<Local>>,
    ) -> Result<PageContext> {
        let (frontmatter, body) = FrontMatter::parse(content)?;

        let dates = PageDates {
            created: frontmatter
                .as_ref()
                .and_then(FrontMatter::created_date)
                .or(file_modified),
            modified: frontmatter
                .as_ref()
                .and_then(FrontMatter::modified_date)
                .or(file_modified),
            published: frontmatter.as_ref().and_then(FrontMatter::published_date),
        };

        let text = self.renderer.plain_text(body);

        Ok(PageContext {
            slug: slugify_path(relative_path),
            frontmatter,
            dates: (!dates.is_empty()).then_some(dates),
            text: (!text.is_empty()).then_some(text),
            html: self.renderer.render(body),
            links: wikilinks(body),
            source: relative_path.into(),
        })
    }
}

/// Check if a file is a markdown file
fn is_markdown_file(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| e == "md" || e == "markdown")
        .unwrap_or(false)
}

/// Dot-files and `_`-prefixed entries are not content
fn is_hidden(path: &Path) -> bool {
    path.file_name()
        .and_then(|n| n.to_str())
        .map(|n| n.starts_with('.') || n.starts_with('_'))
        .unwrap_or(false)
}

//! Generator module - lays components around each page and writes the site

use anyhow::{Context, Result};
use chrono::{DateTime, Local};
use indexmap::IndexMap;
use maud::{html, Markup, PreEscaped, DOCTYPE};
use std::collections::HashSet;
use std::fs;
use std::path::Path;

use crate::components::{
    Component, ComponentProps, FeedbackLink, MetadataPanel, StyleSheet, TopNav,
};
use crate::content::PageContext;
use crate::helpers::{format_date, path_to_root, resolve_date, slug_to_file};
use crate::Site;

/// Page skeleton and the colour variables the component sheets refer to
const BASE_CSS: &str = r#"
:root {
  --light: #faf8f8;
  --lightgray: #e5e5e5;
  --gray: #b8b8b8;
  --darkgray: #4e4e4e;
  --dark: #2b2b2b;
  --secondary: #284b63;
  --tertiary: #84a59d;
  --highlight: rgba(143, 159, 169, 0.15);
}

body {
  margin: 0;
  background-color: var(--light);
  color: var(--darkgray);
  font-family: system-ui, -apple-system, "Segoe UI", Roboto, sans-serif;
  line-height: 1.6;
}

.page {
  max-width: 1400px;
  margin: 0 auto;
  padding: 2rem 1rem;
  display: grid;
  grid-template-columns: minmax(0, 1fr) 18rem;
  gap: 2rem;
}

.page-listing {
  list-style: none;
  padding: 0;
}

.page-listing li {
  display: flex;
  gap: 1rem;
  margin-bottom: 0.5rem;
}

.page-listing time {
  min-width: 7rem;
  color: var(--gray);
}

@media (max-width: 800px) {
  .page {
    grid-template-columns: minmax(0, 1fr);
  }
}
"#;

/// Slug of the generated archive page
const ARCHIVE_SLUG: &str = "archive";

/// Advertised in `<meta name="generator">`
const GENERATOR: &str = concat!("quire ", env!("CARGO_PKG_VERSION"));

/// Number of files written by a generation run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GenerateStats {
    pub pages: usize,
    pub tags: usize,
}

/// Static site generator
pub struct Generator {
    site: Site,
    top_nav: TopNav,
    metadata: MetadataPanel,
    feedback: FeedbackLink,
}

impl Generator {
    /// Create a new generator
    pub fn new(site: &Site) -> Self {
        Self {
            site: site.clone(),
            top_nav: TopNav,
            metadata: MetadataPanel,
            feedback: FeedbackLink::new(site.config.feedback_options()),
        }
    }

    /// Components in page order
    fn components(&self) -> [&dyn Component; 3] {
        [&self.top_nav, &self.metadata, &self.feedback]
    }

    /// Stylesheet shared by every generated page
    pub fn stylesheet(&self) -> StyleSheet {
        let mut sheet = StyleSheet::with_base(BASE_CSS);
        for component in self.components() {
            sheet.add(component);
        }
        sheet
    }

    /// Generate the entire site
    ///
    /// Content pages own their slugs: a page at `archive` or `tags/<tag>`
    /// suppresses the generated listing of the same name.
    pub fn generate(&self, pages: &[PageContext]) -> Result<GenerateStats> {
        let public_dir = &self.site.public_dir;
        fs::create_dir_all(public_dir)
            .with_context(|| format!("Failed to create {:?}", public_dir))?;

        let taken: HashSet<&str> = pages.iter().map(|p| p.slug.as_str()).collect();

        for page in pages {
            self.write(&page.slug, &self.render_page(page))?;
        }

        if taken.contains(ARCHIVE_SLUG) {
            tracing::warn!(
                "A content page already uses {:?}; the archive page is not generated",
                ARCHIVE_SLUG
            );
        } else {
            self.write(ARCHIVE_SLUG, &self.render_archive(pages))?;
        }

        let mut tag_pages = 0;
        for (tag, tagged) in &group_by_tag(pages) {
            if !is_safe_tag(tag) {
                tracing::warn!("Skipping tag page for {:?}: not a safe path", tag);
                continue;
            }
            let slug = format!("tags/{}", tag);
            if taken.contains(slug.as_str()) {
                tracing::warn!(
                    "A content page already uses {:?}; its tag page is not generated",
                    slug
                );
                continue;
            }
            self.write(&slug, &self.render_tag_page(&slug, tag, tagged))?;
            tag_pages += 1;
        }

        let css_path = public_dir.join("index.css");
        fs::write(&css_path, self.stylesheet().render())
            .with_context(|| format!("Failed to write {:?}", css_path))?;

        Ok(GenerateStats {
            pages: pages.len(),
            tags: tag_pages,
        })
    }

    /// Render a content page with navigation, sidebar and feedback link
    pub fn render_page(&self, page: &PageContext) -> String {
        let props = ComponentProps::new(page, &self.site.config);

        let body = html! {
            article {
                h1 { (page.display_title()) }
                (PreEscaped(&page.html))
                (PreEscaped(self.feedback.render(&props)))
            }
            aside { (PreEscaped(self.metadata.render(&props))) }
        };

        self.layout(page, body)
    }

    /// Every dated page, newest first
    fn render_archive(&self, pages: &[PageContext]) -> String {
        let listing_page = PageContext::new(ARCHIVE_SLUG);
        let cfg = &self.site.config;

        let mut dated: Vec<(DateTime<Local>, &PageContext)> = pages
            .iter()
            .filter_map(|p| resolve_date(cfg, p).map(|d| (d, p)))
            .collect();
        dated.sort_by(|a, b| b.0.cmp(&a.0));

        let body = html! {
            article {
                h1 { "Archive" }
                ul class="page-listing" {
                    @for (date, page) in &dated {
                        li {
                            time { (format_date(date, &cfg.locale)) }
                            (self.page_link(ARCHIVE_SLUG, page))
                        }
                    }
                }
            }
        };
        self.layout(&listing_page, body)
    }

    fn render_tag_page(&self, slug: &str, tag: &str, pages: &[&PageContext]) -> String {
        let listing_page = PageContext::new(slug);

        let body = html! {
            article {
                h1 { "Tag: " (tag) }
                ul class="page-listing" {
                    @for page in pages {
                        li { (self.page_link(slug, page)) }
                    }
                }
            }
        };
        self.layout(&listing_page, body)
    }

    fn page_link(&self, from_slug: &str, page: &PageContext) -> Markup {
        let href = format!("{}{}", path_to_root(from_slug), page.slug);
        html! {
            a href=(href) { (page.display_title()) }
        }
    }

    /// Wrap a body in the document shell shared by every page
    fn layout(&self, page: &PageContext, body: Markup) -> String {
        let props = ComponentProps::new(page, &self.site.config);
        let cfg = &self.site.config;

        let title = match &cfg.page_title {
            Some(site_title) => format!("{} | {}", page.display_title(), site_title),
            None => page.display_title().to_string(),
        };
        let stylesheet = format!("{}index.css", path_to_root(&page.slug));
        let lang = cfg.locale.split(['-', '_']).next().unwrap_or("en");
        let canonical = cfg
            .base_url
            .as_deref()
            .map(|base| canonical_url(base, &page.slug));

        html! {
            (DOCTYPE)
            html lang=(lang) {
                head {
                    meta charset="utf-8";
                    meta name="viewport" content="width=device-width, initial-scale=1";
                    title { (title) }
                    meta name="generator" content=(GENERATOR);
                    link rel="stylesheet" href=(stylesheet);
                    @if let Some(href) = canonical {
                        link rel="canonical" href=(href);
                    }
                }
                body {
                    (PreEscaped(self.top_nav.render(&props)))
                    main class="page" { (body) }
                }
            }
        }
        .into_string()
    }

    fn write(&self, slug: &str, html: &str) -> Result<()> {
        let path = self.site.public_dir.join(slug_to_file(slug));
        write_file(&path, html)?;
        tracing::debug!("Generated: {:?}", path);
        Ok(())
    }
}

/// Absolute URL of `slug`; a `base_url` without a scheme is served over https
fn canonical_url(base_url: &str, slug: &str) -> String {
    let base = base_url.trim_end_matches('/');
    if base.contains("://") {
        format!("{}/{}", base, slug)
    } else {
        format!("https://{}/{}", base, slug)
    }
}

/// Pages per tag, tags in order of first appearance
fn group_by_tag(pages: &[PageContext]) -> IndexMap<&str, Vec<&PageContext>> {
    let mut tags: IndexMap<&str, Vec<&PageContext>> = IndexMap::new();
    for page in pages {
        for tag in page.tags() {
            let tagged = tags.entry(tag.as_str()).or_default();
            // A page lists a duplicated tag twice; its tag page lists it once
            if !tagged.iter().any(|p| std::ptr::eq(*p, page)) {
                tagged.push(page);
            }
        }
    }
    tags
}

/// Tag names become file paths below `tags/`
fn is_safe_tag(tag: &str) -> bool {
    !tag.starts_with('/')
        && tag
            .split('/')
            .all(|segment| !segment.is_empty() && segment != "." && segment != "..")
}

fn write_file(path: &Path, contents: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).with_context(|| format!("Failed to create {:?}", parent))?;
    }
    fs::write(path, contents).with_context(|| format!("Failed to write {:?}", path))
}

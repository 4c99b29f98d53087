//! Page context handed to components

use chrono::{DateTime, Local};
use serde::Serialize;
use std::path::PathBuf;

use super::FrontMatter;
use crate::config::DateType;

/// The dates known about a page
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PageDates {
    pub created: Option<DateTime<Local>>,
    pub modified: Option<DateTime<Local>>,
    pub published: Option<DateTime<Local>>,
}

impl PageDates {
    /// Pick one of the dates
    pub fn get(&self, kind: DateType) -> Option<DateTime<Local>> {
        match kind {
            DateType::Created => self.created,
            DateType::Modified => self.modified,
            DateType::Published => self.published,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.created.is_none() && self.modified.is_none() && self.published.is_none()
    }
}

/// Read-only per-page record that components render from
#[derive(Debug, Clone, Default, Serialize)]
pub struct PageContext {
    /// Path identifier within the generated site, e.g. `notes/rust/ownership`
    pub slug: String,

    /// Parsed front-matter, absent when the source has none
    pub frontmatter: Option<FrontMatter>,

    /// Date information, absent when nothing could be resolved
    pub dates: Option<PageDates>,

    /// Plain text of the body, absent for empty pages
    pub text: Option<String>,

    /// Rendered HTML body
    pub html: String,

    /// `[[wikilink]]` targets found in the body, in order of appearance
    pub links: Vec<String>,

    /// Source file path below the source directory
    pub source: PathBuf,
}

impl PageContext {
    /// Create an empty page at `slug`
    pub fn new(slug: impl Into<String>) -> Self {
        Self {
            slug: slug.into(),
            ..Default::default()
        }
    }

    /// Front-matter title, if any
    pub fn title(&self) -> Option<&str> {
        self.frontmatter.as_ref()?.title.as_deref()
    }

    /// Title shown in page headings and listings
    pub fn display_title(&self) -> &str {
        match self.title() {
            Some(title) => title,
            None => self.slug.rsplit('/').next().unwrap_or(&self.slug),
        }
    }

    /// Front-matter tags; empty when there is no front-matter
    pub fn tags(&self) -> &[String] {
        match &self.frontmatter {
            Some(fm) => &fm.tags,
            None => &[],
        }
    }

    pub fn is_draft(&self) -> bool {
        self.frontmatter.as_ref().is_some_and(|fm| fm.draft)
    }

    /// Whether the front-matter carries `publish: true`
    pub fn is_marked_publish(&self) -> bool {
        self.frontmatter.as_ref().is_some_and(|fm| fm.publish)
    }

    /// Whether the page belongs in the generated site
    ///
    /// Drafts never do. With `explicit_publish` only pages marked
    /// `publish: true` are included.
    pub fn is_published(&self, explicit_publish: bool) -> bool {
        !self.is_draft() && (!explicit_publish || self.is_marked_publish())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_frontmatter_has_no_title_or_tags() {
        let page = PageContext::new("notes/first");
        assert_eq!(page.title(), None);
        assert!(page.tags().is_empty());
        assert_eq!(page.display_title(), "first");
    }

    #[test]
    fn test_publish_gating() {
        let marked = |publish: bool, draft: bool| PageContext {
            frontmatter: Some(FrontMatter {
                publish,
                draft,
                ..Default::default()
            }),
            ..PageContext::new("note")
        };

        assert!(marked(true, false).is_published(true));
        assert!(!marked(false, false).is_published(true));
        assert!(!PageContext::new("bare").is_published(true));
        assert!(PageContext::new("bare").is_published(false));
        assert!(!marked(true, true).is_published(true));
        assert!(!marked(false, true).is_published(false));
    }

    #[test]
    fn test_dates_get() {
        let created = Local::now();
        let dates = PageDates {
            created: Some(created),
            ..Default::default()
        };
        assert_eq!(dates.get(DateType::Created), Some(created));
        assert_eq!(dates.get(DateType::Published), None);
        assert!(!dates.is_empty());
        assert!(PageDates::default().is_empty());
    }
}

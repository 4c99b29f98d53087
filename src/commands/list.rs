//! List site content

use anyhow::Result;
use indexmap::IndexMap;
use serde::Serialize;

use crate::content::loader::ContentLoader;
use crate::content::{find_orphans, PageContext};
use crate::helpers::{format_date, reading_time, resolve_date};
use crate::Site;

/// What `list metadata` reports for each published page
#[derive(Debug, Serialize)]
struct PageMetadata<'a> {
    title: &'a str,
    tags: &'a [String],
    date: Option<String>,
}

/// List site content by type
pub fn run(site: &Site, content_type: &str) -> Result<()> {
    let pages = ContentLoader::new(site).load_pages()?;

    let lines = match content_type {
        "page" | "pages" => page_lines(site, &pages),
        "tag" | "tags" => tag_lines(&pages),
        "orphan" | "orphans" => orphan_lines(&pages),
        "metadata" => vec![metadata_json(site, &pages)?],
        _ => {
            anyhow::bail!(
                "Unknown type: {}. Available: page, tag, orphan, metadata",
                content_type
            );
        }
    };

    for line in lines {
        println!("{}", line);
    }

    Ok(())
}

fn page_lines(site: &Site, pages: &[PageContext]) -> Vec<String> {
    let cfg = &site.config;
    let mut lines = vec![format!("Pages ({}):", pages.len())];

    for page in pages {
        let date = resolve_date(cfg, page)
            .map(|d| format_date(&d, &cfg.locale))
            .unwrap_or_else(|| "-".to_string());
        let minutes = page
            .text
            .as_deref()
            .map(|t| reading_time::estimate_with(t, cfg.words_per_minute).display_minutes())
            .unwrap_or(0);
        lines.push(format!(
            "  {} - {} [{}] ({} min)",
            date,
            page.display_title(),
            page.slug,
            minutes
        ));
    }

    lines
}

fn tag_lines(pages: &[PageContext]) -> Vec<String> {
    let mut tags: IndexMap<&str, usize> = IndexMap::new();
    for page in pages {
        for tag in page.tags() {
            *tags.entry(tag.as_str()).or_insert(0) += 1;
        }
    }

    // Most used first; ties keep first-seen order
    tags.sort_by(|_, a, _, b| b.cmp(a));

    let mut lines = vec![format!("Tags ({}):", tags.len())];
    lines.extend(tags.iter().map(|(tag, count)| format!("  {} ({})", tag, count)));
    lines
}

/// Published pages nothing links to, by source path
fn orphan_lines(pages: &[PageContext]) -> Vec<String> {
    let orphans = find_orphans(pages);
    let mut lines = vec![format!("Orphans ({}):", orphans.len())];
    lines.extend(
        orphans
            .iter()
            .map(|page| format!("  {}", page.source.display())),
    );
    lines
}

/// Title, tags and date of every page keyed by source path, as JSON
fn metadata_json(site: &Site, pages: &[PageContext]) -> Result<String> {
    let cfg = &site.config;
    let listing: IndexMap<String, PageMetadata> = pages
        .iter()
        .map(|page| {
            let metadata = PageMetadata {
                title: page.display_title(),
                tags: page.tags(),
                date: resolve_date(cfg, page).map(|d| d.format("%Y-%m-%d").to_string()),
            };
            (page.source.to_string_lossy().to_string(), metadata)
        })
        .collect();
    Ok(serde_json::to_string_pretty(&listing)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SiteConfig;
    use crate::content::{FrontMatter, PageDates};
    use chrono::{Local, TimeZone};

    fn tagged(slug: &str, tags: &[&str]) -> PageContext {
        PageContext {
            frontmatter: Some(FrontMatter {
                tags: tags.iter().map(|t| t.to_string()).collect(),
                ..Default::default()
            }),
            ..PageContext::new(slug)
        }
    }

    #[test]
    fn test_tag_lines() {
        let pages = vec![tagged("a", &["web", "rust"]), tagged("b", &["rust"])];
        assert_eq!(
            tag_lines(&pages),
            vec!["Tags (2):", "  rust (2)", "  web (1)"]
        );
    }

    #[test]
    fn test_page_lines() {
        let dir = tempfile::tempdir().unwrap();
        let site = Site::with_config(dir.path(), SiteConfig::default());
        let mut page = tagged("notes/x", &[]);
        page.text = Some("one two three".to_string());

        let lines = page_lines(&site, &[page]);
        assert_eq!(lines, vec!["Pages (1):", "  - - x [notes/x] (1 min)"]);
    }

    #[test]
    fn test_orphan_lines() {
        let mut index = tagged("index", &[]);
        index.source = "index.md".into();
        index.links = vec!["linked".to_string()];
        let mut linked = tagged("linked", &[]);
        linked.source = "linked.md".into();
        let mut lonely = tagged("notes/lonely", &[]);
        lonely.source = "notes/lonely.md".into();

        assert_eq!(
            orphan_lines(&[index, linked, lonely]),
            vec!["Orphans (1):", "  notes/lonely.md"]
        );
    }

    #[test]
    fn test_metadata_json() {
        let dir = tempfile::tempdir().unwrap();
        let site = Site::with_config(dir.path(), SiteConfig::default());
        let mut page = tagged("page-a", &["foo", "bar"]);
        page.source = "page-a.md".into();
        page.frontmatter.as_mut().unwrap().title = Some("Page A".to_string());
        page.dates = Some(PageDates {
            created: Some(Local.with_ymd_and_hms(2024, 1, 1, 9, 0, 0).unwrap()),
            ..Default::default()
        });
        let mut bare = tagged("page-b", &[]);
        bare.source = "page-b.md".into();

        let json = metadata_json(&site, &[page, bare]).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["page-a.md"]["title"], "Page A");
        assert_eq!(value["page-a.md"]["tags"], serde_json::json!(["foo", "bar"]));
        assert_eq!(value["page-a.md"]["date"], "2024-01-01");
        assert_eq!(value["page-b.md"]["title"], "page-b");
        assert_eq!(value["page-b.md"]["tags"], serde_json::json!([]));
        assert!(value["page-b.md"]["date"].is_null());
    }

    #[test]
    fn test_unknown_type() {
        let dir = tempfile::tempdir().unwrap();
        let site = Site::with_config(dir.path(), SiteConfig::default());
        assert!(run(&site, "widgets").is_err());
    }
}

//! Wikilinks between pages and orphan discovery

use lazy_static::lazy_static;
use regex::Regex;
use std::collections::{HashMap, HashSet};

use super::PageContext;

lazy_static! {
    static ref WIKILINK: Regex = Regex::new(r"\[\[([^\]]+)\]\]").expect("wikilink pattern");
}

/// Targets of the `[[wikilinks]]` in `text`
///
/// `[[Page#heading]]` and `[[Page|label]]` both target `Page`. Links that
/// only name an anchor are dropped.
pub fn wikilinks(text: &str) -> Vec<String> {
    WIKILINK
        .captures_iter(text)
        .filter_map(|cap| {
            let target = cap[1].split(['|', '#']).next().unwrap_or_default().trim();
            (!target.is_empty()).then(|| target.to_string())
        })
        .collect()
}

/// Pages that no other page links to, sorted by source path
///
/// A link resolves to the page with exactly that title, otherwise to the
/// first page whose file name matches case-insensitively. Links from a page
/// to itself do not count and `index` pages are never orphans.
pub fn find_orphans(pages: &[PageContext]) -> Vec<&PageContext> {
    let by_title: HashMap<&str, usize> = pages
        .iter()
        .enumerate()
        .filter_map(|(i, page)| page.title().map(|title| (title, i)))
        .collect();

    let resolve = |link: &str| {
        by_title.get(link).copied().or_else(|| {
            let link = link.to_lowercase();
            pages.iter().position(|page| file_stem(page).to_lowercase() == link)
        })
    };

    let mut linked = HashSet::new();
    for (from, page) in pages.iter().enumerate() {
        for target in page.links.iter().filter_map(|link| resolve(link)) {
            if target != from {
                linked.insert(target);
            }
        }
    }

    let mut orphans: Vec<&PageContext> = pages
        .iter()
        .enumerate()
        .filter(|(i, page)| !linked.contains(i) && file_stem(page) != "index")
        .map(|(_, page)| page)
        .collect();
    orphans.sort_by(|a, b| a.source.cmp(&b.source));
    orphans
}

/// Source file name without extension; pages built in memory use the slug
fn file_stem(page: &PageContext) -> &str {
    page.source
        .file_stem()
        .and_then(|stem| stem.to_str())
        .unwrap_or_else(|| page.slug.rsplit('/').next().unwrap_or(&page.slug))
}

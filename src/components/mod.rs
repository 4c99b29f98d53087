//! Page components
//!
//! Each component renders an HTML fragment from the page context and the
//! site configuration and carries a static stylesheet. Components are pure:
//! they never touch the filesystem and never fail, so pages can be rendered
//! in any order.

mod feedback;
mod metadata;
mod top_nav;

use indexmap::IndexMap;

use crate::config::SiteConfig;
use crate::content::PageContext;

pub use feedback::FeedbackLink;
pub use metadata::MetadataPanel;
pub use top_nav::TopNav;

/// Everything a component may read while rendering
#[derive(Debug, Clone, Copy)]
pub struct ComponentProps<'a> {
    pub page: &'a PageContext,
    pub cfg: &'a SiteConfig,
}

impl<'a> ComponentProps<'a> {
    pub fn new(page: &'a PageContext, cfg: &'a SiteConfig) -> Self {
        Self { page, cfg }
    }
}

/// A render function paired with its stylesheet
pub trait Component: Send + Sync {
    /// Stable name, used to deduplicate stylesheets
    fn name(&self) -> &'static str;

    /// Stylesheet included once per site
    fn css(&self) -> &'static str;

    /// Render the HTML fragment for one page
    fn render(&self, props: &ComponentProps<'_>) -> String;
}

/// Collects component stylesheets for global inclusion
///
/// Stylesheets keep registration order; registering the same component twice
/// contributes its CSS once.
#[derive(Debug, Default)]
pub struct StyleSheet {
    base: Option<&'static str>,
    sheets: IndexMap<&'static str, &'static str>,
}

impl StyleSheet {
    /// Stylesheet emitted ahead of every component sheet
    pub fn with_base(base: &'static str) -> Self {
        Self {
            base: Some(base),
            sheets: IndexMap::new(),
        }
    }

    /// Register a component's stylesheet
    pub fn add(&mut self, component: &dyn Component) {
        self.sheets
            .entry(component.name())
            .or_insert_with(|| component.css());
    }

    /// Concatenate everything into one stylesheet
    pub fn render(&self) -> String {
        let mut css = String::new();
        let parts = self.base.into_iter().chain(self.sheets.values().copied());
        for part in parts {
            css.push_str(part.trim());
            css.push_str("\n\n");
        }
        css
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Top-level rules only; media queries repeat selectors indented
    fn rule_count(css: &str, selector: &str) -> usize {
        css.lines().filter(|line| *line == selector).count()
    }

    #[test]
    fn test_stylesheet_deduplicates_by_component() {
        let mut twice = StyleSheet::default();
        twice.add(&TopNav);
        twice.add(&MetadataPanel);
        twice.add(&TopNav);

        let mut once = StyleSheet::default();
        once.add(&TopNav);
        once.add(&MetadataPanel);

        let css = twice.render();
        assert_eq!(css, once.render());
        assert_eq!(rule_count(&css, ".top-nav {"), 1);
        assert_eq!(rule_count(&css, ".metadata-sidebar {"), 1);
    }

    #[test]
    fn test_media_queries_survive_dedup() {
        let mut sheet = StyleSheet::default();
        sheet.add(&MetadataPanel);
        sheet.add(&MetadataPanel);

        let css = sheet.render();
        assert_eq!(css.matches("@media (max-width: 600px)").count(), 1);
        assert_eq!(rule_count(&css, "  .metadata-sidebar {"), 1);
    }

    #[test]
    fn test_stylesheet_keeps_registration_order() {
        let mut sheet = StyleSheet::with_base("body { margin: 0; }");
        sheet.add(&MetadataPanel);
        sheet.add(&TopNav);

        let css = sheet.render();
        let base = css.find("body {").unwrap();
        let metadata = css.find(".metadata-sidebar").unwrap();
        let nav = css.find(".top-nav").unwrap();
        assert!(base < metadata && metadata < nav);
    }

    #[test]
    fn test_components_are_object_safe() {
        let components: Vec<Box<dyn Component>> = vec![
            Box::new(TopNav),
            Box::new(MetadataPanel),
            Box::new(FeedbackLink::default()),
        ];
        let names: Vec<_> = components.iter().map(|c| c.name()).collect();
        assert_eq!(names, vec!["top-nav", "metadata-panel", "feedback-link"]);
    }
}

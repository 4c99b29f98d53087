//! Top navigation bar

use maud::html;

use super::{Component, ComponentProps};
use crate::helpers::path_to_root;

/// Home link label when the site has no title
const FALLBACK_TITLE: &str = "Home";

const CSS: &str = r#"
.top-nav {
  background-color: var(--light);
  border-bottom: 1px solid var(--lightgray);
  position: sticky;
  top: 0;
  z-index: 100;
  padding: 1rem 0;
}

.nav-content {
  max-width: 1400px;
  margin: 0 auto;
  padding: 0 1rem;
  display: flex;
  justify-content: space-between;
  align-items: center;
}

.nav-home {
  font-size: 1.25rem;
  font-weight: 600;
  color: var(--dark);
  text-decoration: none;
}

.nav-home:hover {
  color: var(--secondary);
}

.nav-links {
  display: flex;
  gap: 2rem;
}

.nav-links a {
  color: var(--darkgray);
  text-decoration: none;
  font-size: 0.95rem;
}

.nav-links a:hover {
  color: var(--secondary);
}

@media (max-width: 600px) {
  .nav-content {
    flex-direction: column;
    gap: 0.5rem;
  }

  .nav-links {
    gap: 1rem;
    font-size: 0.85rem;
  }
}
"#;

/// Sticky header with the site title and fixed Home / Archive links
#[derive(Debug, Clone, Copy, Default)]
pub struct TopNav;

impl TopNav {
    /// The fixed navigation entries for a page at `slug`
    pub fn links(slug: &str) -> [(&'static str, String); 2] {
        let base = path_to_root(slug);
        let archive = format!("{}archive", base);
        [("Home", base), ("Archive", archive)]
    }
}

impl Component for TopNav {
    fn name(&self) -> &'static str {
        "top-nav"
    }

    fn css(&self) -> &'static str {
        CSS
    }

    fn render(&self, props: &ComponentProps<'_>) -> String {
        let base = path_to_root(&props.page.slug);
        let title = props.cfg.page_title.as_deref().unwrap_or(FALLBACK_TITLE);

        html! {
            nav class="top-nav" {
                div class="nav-content" {
                    a href=(base) class="nav-home" { (title) }
                    div class="nav-links" {
                        @for (label, href) in Self::links(&props.page.slug) {
                            a href=(href) { (label) }
                        }
                    }
                }
            }
        }
        .into_string()
    }
}

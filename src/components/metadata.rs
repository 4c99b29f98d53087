//! Metadata sidebar: publish date, reading time and tags

use maud::{html, Markup};

use super::{Component, ComponentProps};
use crate::helpers::{reading_time, resolve_date, tag_url, time_tag};

const CSS: &str = r#"
.metadata-sidebar {
  font-size: 0.85rem;
  color: var(--darkgray);
  background-color: var(--lightgray);
  padding: 1rem;
  border-radius: 0.5rem;
  margin-bottom: 1.5rem;
}

.metadata-item {
  margin-bottom: 1rem;
  display: flex;
  flex-direction: column;
  gap: 0.25rem;
}

.metadata-item:last-child {
  margin-bottom: 0;
}

.metadata-label {
  font-weight: 600;
  color: var(--dark);
  text-transform: uppercase;
  font-size: 0.7rem;
  letter-spacing: 0.05em;
}

.reading-time {
  color: var(--darkgray);
}

.tags-list {
  display: flex;
  flex-wrap: wrap;
  gap: 0.5rem;
  margin-top: 0.25rem;
}

.tag {
  display: inline-block;
  background-color: var(--highlight);
  color: var(--dark);
  padding: 0.25rem 0.6rem;
  border-radius: 0.3rem;
  text-decoration: none;
  font-size: 0.8rem;
  transition: background-color 0.2s;
}

.tag:hover {
  background-color: var(--secondary);
  color: var(--light);
}

@media (max-width: 600px) {
  .metadata-sidebar {
    margin-bottom: 1rem;
    padding: 0.75rem;
  }

  .metadata-item {
    margin-bottom: 0.75rem;
  }
}
"#;

/// Sidebar listing the facts known about a page
///
/// Each section is rendered only when its input is present; a missing date
/// never hides the tags and so on.
#[derive(Debug, Clone, Copy, Default)]
pub struct MetadataPanel;

impl MetadataPanel {
    fn date_section(props: &ComponentProps<'_>) -> Option<Markup> {
        let date = resolve_date(props.cfg, props.page)?;
        Some(item("Published", time_tag(&date, &props.cfg.locale)))
    }

    fn reading_time_section(props: &ComponentProps<'_>) -> Option<Markup> {
        let text = props.page.text.as_deref().filter(|t| !t.is_empty())?;
        let estimate = reading_time::estimate_with(text, props.cfg.words_per_minute);
        Some(item(
            "Reading time",
            html! {
                span class="reading-time" { (estimate.display_minutes()) " min" }
            },
        ))
    }

    fn tag_section(props: &ComponentProps<'_>) -> Option<Markup> {
        let tags = props.page.tags();
        if tags.is_empty() {
            return None;
        }

        Some(item(
            "Tags",
            html! {
                div class="tags-list" {
                    @for tag in tags {
                        a href=(tag_url(tag)) class="tag" { (tag) }
                    }
                }
            },
        ))
    }
}

fn item(label: &str, body: Markup) -> Markup {
    html! {
        div class="metadata-item" {
            span class="metadata-label" { (label) }
            (body)
        }
    }
}

impl Component for MetadataPanel {
    fn name(&self) -> &'static str {
        "metadata-panel"
    }

    fn css(&self) -> &'static str {
        CSS
    }

    fn render(&self, props: &ComponentProps<'_>) -> String {
        let sections = [
            Self::date_section(props),
            Self::reading_time_section(props),
            Self::tag_section(props),
        ];

        html! {
            div class="metadata-sidebar" {
                @for section in sections.into_iter().flatten() {
                    (section)
                }
            }
        }
        .into_string()
    }
}

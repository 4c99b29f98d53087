//! Email feedback link

use maud::html;

use super::{Component, ComponentProps};
use crate::config::{FeedbackOptions, PartialFeedbackOptions};
use crate::helpers::mailto;

/// Subject title used when the page has none
const FALLBACK_TITLE: &str = "Feedback";

const CSS: &str = r#"
.email-feedback {
  margin-top: 2rem;
  padding-top: 1.5rem;
  border-top: 1px solid var(--lightgray);
  font-size: 0.9rem;
  color: var(--darkgray);
}

.email-feedback p {
  margin: 0;
}

.feedback-link {
  color: var(--secondary);
  text-decoration: none;
  font-weight: 500;
  transition: color 0.2s;
}

.feedback-link:hover {
  color: var(--tertiary);
  text-decoration: underline;
}

@media (max-width: 600px) {
  .email-feedback {
    margin-top: 1.5rem;
    padding-top: 1rem;
  }
}
"#;

/// "Send feedback via email" link whose subject quotes the page title
#[derive(Debug, Clone, Default)]
pub struct FeedbackLink {
    options: FeedbackOptions,
}

impl FeedbackLink {
    pub fn new(options: FeedbackOptions) -> Self {
        Self { options }
    }

    /// Build from sparse options, filling gaps from the defaults
    pub fn from_partial(overrides: &PartialFeedbackOptions) -> Self {
        Self::new(FeedbackOptions::merge(FeedbackOptions::default(), overrides))
    }

    pub fn options(&self) -> &FeedbackOptions {
        &self.options
    }

    /// The `mailto:` target for a page titled `title`
    pub fn href(&self, title: Option<&str>) -> String {
        let title = title.unwrap_or(FALLBACK_TITLE);
        mailto(&self.options.email, &format!("Re: {}", title))
    }
}

impl Component for FeedbackLink {
    fn name(&self) -> &'static str {
        "feedback-link"
    }

    fn css(&self) -> &'static str {
        CSS
    }

    fn render(&self, props: &ComponentProps<'_>) -> String {
        let href = self.href(props.page.title());
        html! {
            div class="email-feedback" {
                p {
                    a href=(href) class="feedback-link" { "✉️ Send feedback via email" }
                }
            }
        }
        .into_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SiteConfig;
    use crate::content::{FrontMatter, PageContext};
    use crate::helpers::encode_uri_component;

    fn titled(title: &str) -> PageContext {
        PageContext {
            frontmatter: Some(FrontMatter {
                title: Some(title.to_string()),
                ..Default::default()
            }),
            ..PageContext::new("post")
        }
    }

    #[test]
    fn test_subject_quotes_title() {
        let link = FeedbackLink::default();
        assert_eq!(
            link.href(Some("Hello")),
            "mailto:contact@example.com?subject=Re%3A%20Hello"
        );
    }

    #[test]
    fn test_missing_title_falls_back_to_feedback() {
        let link = FeedbackLink::default();
        let expected = format!(
            "mailto:contact@example.com?subject={}",
            encode_uri_component("Re: Feedback")
        );
        assert_eq!(link.href(None), expected);

        // No front-matter at all behaves the same
        let cfg = SiteConfig::default();
        let page = PageContext::new("post");
        let html = link.render(&ComponentProps::new(&page, &cfg));
        assert!(html.contains("subject=Re%3A%20Feedback"));
    }

    #[test]
    fn test_default_email() {
        let cfg = SiteConfig::default();
        for page in [PageContext::new("a"), titled("Anything & more")] {
            let html = FeedbackLink::from_partial(&PartialFeedbackOptions::default())
                .render(&ComponentProps::new(&page, &cfg));
            assert!(html.contains(r#"href="mailto:contact@example.com?subject="#));
        }
    }

    #[test]
    fn test_configured_email() {
        let link = FeedbackLink::from_partial(&PartialFeedbackOptions {
            email: Some("editor@example.org".to_string()),
        });
        assert!(link
            .href(Some("x"))
            .starts_with("mailto:editor@example.org?subject="));
    }

    #[test]
    fn test_render_markup() {
        let cfg = SiteConfig::default();
        let page = titled("Hello");
        let html = FeedbackLink::default().render(&ComponentProps::new(&page, &cfg));
        assert_eq!(
            html,
            concat!(
                r#"<div class="email-feedback"><p>"#,
                r#"<a href="mailto:contact@example.com?subject=Re%3A%20Hello" class="feedback-link">"#,
                "✉️ Send feedback via email</a></p></div>"
            )
        );
    }

    #[test]
    fn test_title_with_special_characters_is_encoded() {
        let link = FeedbackLink::default();
        assert_eq!(
            link.href(Some("Q&A: <tips>")),
            "mailto:contact@example.com?subject=Re%3A%20Q%26A%3A%20%3Ctips%3E"
        );
    }
}

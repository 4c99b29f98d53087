//! Content module - handles pages, front-matter and body processing

mod frontmatter;
mod links;
pub mod loader;
mod markdown;
mod page;

use thiserror::Error;

pub use frontmatter::{normalize_tags, FrontMatter};
pub use links::{find_orphans, wikilinks};
pub use markdown::MarkdownRenderer;
pub use page::{PageContext, PageDates};

/// Errors raised while reading page sources
#[derive(Error, Debug)]
pub enum ContentError {
    #[error("Failed to parse JSON front-matter: {0}")]
    InvalidJson(#[from] serde_json::Error),

    #[error("JSON front-matter is missing its closing `;;;`")]
    UnterminatedJson,
}

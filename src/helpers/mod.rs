//! Helper functions for components and page layout
//!
//! Date resolution and formatting, reading-time estimation, slug/relative
//! path arithmetic and URL encoding.

mod date;
mod path;
pub mod reading_time;
mod url;

pub use date::*;
pub use path::*;
pub use reading_time::{estimate, ReadingTime};
pub use url::*;

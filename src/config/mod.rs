//! Configuration module

mod site;

pub use site::DateType;
pub use site::FeedbackOptions;
pub use site::PartialFeedbackOptions;
pub use site::SiteConfig;

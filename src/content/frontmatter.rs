//! Front-matter parsing

use chrono::{DateTime, Local, NaiveDateTime};
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::HashMap;

use super::ContentError;

/// Custom deserializer that handles both a single string and a list of strings
fn string_or_vec<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::{self, SeqAccess, Visitor};
    use std::fmt;

    struct StringOrVec;

    impl<'de> Visitor<'de> for StringOrVec {
        type Value = Vec<String>;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("a string or a list of strings")
        }

        fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            // `tags: a, b` is a single YAML string
            Ok(value.split(',').map(str::to_string).collect())
        }

        fn visit_seq<S>(self, mut seq: S) -> Result<Self::Value, S::Error>
        where
            S: SeqAccess<'de>,
        {
            let mut vec = Vec::new();
            while let Some(item) = seq.next_element::<String>()? {
                vec.push(item);
            }
            Ok(vec)
        }

        fn visit_none<E>(self) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(Vec::new())
        }

        fn visit_unit<E>(self) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(Vec::new())
        }
    }

    deserializer.deserialize_any(StringOrVec)
}

/// Date-ish scalar: YAML may hand us a string, a bare number or a boolean
/// (`published: true`). Only strings and numbers are kept.
fn date_scalar<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::{self, Visitor};
    use std::fmt;

    struct DateScalar;

    impl<'de> Visitor<'de> for DateScalar {
        type Value = Option<String>;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("a date string")
        }

        fn visit_str<E: de::Error>(self, value: &str) -> Result<Self::Value, E> {
            Ok(Some(value.to_string()))
        }

        fn visit_i64<E: de::Error>(self, value: i64) -> Result<Self::Value, E> {
            Ok(Some(value.to_string()))
        }

        fn visit_u64<E: de::Error>(self, value: u64) -> Result<Self::Value, E> {
            Ok(Some(value.to_string()))
        }

        fn visit_bool<E: de::Error>(self, _value: bool) -> Result<Self::Value, E> {
            Ok(None)
        }

        fn visit_none<E: de::Error>(self) -> Result<Self::Value, E> {
            Ok(None)
        }

        fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> {
            Ok(None)
        }
    }

    deserializer.deserialize_any(DateScalar)
}

/// Front-matter data from a page
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FrontMatter {
    pub title: Option<String>,
    #[serde(deserialize_with = "string_or_vec", alias = "tag")]
    pub tags: Vec<String>,
    pub draft: bool,
    /// Opt-in flag for sites that only publish marked notes
    pub publish: bool,

    #[serde(deserialize_with = "date_scalar")]
    pub date: Option<String>,
    #[serde(deserialize_with = "date_scalar")]
    pub created: Option<String>,
    #[serde(deserialize_with = "date_scalar")]
    pub modified: Option<String>,
    #[serde(deserialize_with = "date_scalar")]
    pub lastmod: Option<String>,
    #[serde(deserialize_with = "date_scalar")]
    pub updated: Option<String>,
    #[serde(rename = "last-modified", deserialize_with = "date_scalar")]
    pub last_modified: Option<String>,
    #[serde(deserialize_with = "date_scalar")]
    pub published: Option<String>,
    #[serde(rename = "publishDate", deserialize_with = "date_scalar")]
    pub publish_date: Option<String>,

    /// Additional custom fields
    #[serde(flatten)]
    pub extra: HashMap<String, serde_yaml::Value>,
}

impl FrontMatter {
    /// Parse front-matter from content string
    /// Returns (front_matter, remaining_content); `None` when the page has no front-matter
    pub fn parse(content: &str) -> Result<(Option<Self>, &str), ContentError> {
        let content = content.trim_start_matches('\u{feff}');

        if content.starts_with("---") {
            return Ok(Self::parse_yaml(content));
        }

        if content.starts_with(";;;") {
            return Self::parse_json(content).map(|(fm, rest)| (Some(fm), rest));
        }

        Ok((None, content))
    }

    fn parse_yaml(content: &str) -> (Option<Self>, &str) {
        let rest = content[3..].trim_start_matches(['\n', '\r']);

        // An empty block closes immediately
        let (yaml_content, remaining) = if let Some(after) = rest.strip_prefix("---") {
            ("", after)
        } else if let Some(end_pos) = rest.find("\n---") {
            (&rest[..end_pos], &rest[end_pos + 4..])
        } else {
            return (None, content);
        };
        let remaining = remaining.trim_start_matches(['\n', '\r']);

        if yaml_content.trim().is_empty() {
            return (Some(FrontMatter::default()), remaining);
        }

        match serde_yaml::from_str::<FrontMatter>(yaml_content) {
            Ok(mut fm) => {
                fm.tags = normalize_tags(&fm.tags);
                (Some(fm), remaining)
            }
            Err(e) => {
                tracing::warn!("Failed to parse YAML front-matter, ignoring it: {}", e);
                (None, remaining)
            }
        }
    }

    fn parse_json(content: &str) -> Result<(Self, &str), ContentError> {
        let rest = &content[3..];
        let end_pos = rest.find(";;;").ok_or(ContentError::UnterminatedJson)?;
        let json_content = &rest[..end_pos];
        let remaining = rest[end_pos + 3..].trim_start_matches(['\n', '\r']);

        let mut fm: FrontMatter = serde_json::from_str(json_content)?;
        fm.tags = normalize_tags(&fm.tags);
        Ok((fm, remaining))
    }

    /// Creation date: `created`, falling back to `date`
    pub fn created_date(&self) -> Option<DateTime<Local>> {
        first_date([&self.created, &self.date])
    }

    /// Last modification date: `modified`, `lastmod`, `updated`, then `last-modified`
    pub fn modified_date(&self) -> Option<DateTime<Local>> {
        first_date([
            &self.modified,
            &self.lastmod,
            &self.updated,
            &self.last_modified,
        ])
    }

    /// Publication date: `published`, `publishDate`, then `date`
    pub fn published_date(&self) -> Option<DateTime<Local>> {
        first_date([&self.published, &self.publish_date, &self.date])
    }
}

fn first_date<const N: usize>(fields: [&Option<String>; N]) -> Option<DateTime<Local>> {
    fields
        .into_iter()
        .flatten()
        .find_map(|s| parse_date_string(s))
}

/// Trim tags and strip a leading `#`; order and duplicates are preserved
pub fn normalize_tags(tags: &[String]) -> Vec<String> {
    tags.iter()
        .map(|t| t.trim().trim_start_matches('#').trim().to_string())
        .filter(|t| !t.is_empty())
        .collect()
}

/// Parse a date string in various formats
fn parse_date_string(s: &str) -> Option<DateTime<Local>> {
    let s = s.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Local));
    }

    let datetime_formats = [
        "%Y-%m-%d %H:%M:%S",
        "%Y/%m/%d %H:%M:%S",
        "%Y-%m-%d %H:%M",
        "%Y/%m/%d %H:%M",
        "%Y-%m-%dT%H:%M:%S",
        "%Y-%m-%dT%H:%M:%S%.f",
    ];

    for fmt in datetime_formats {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, fmt) {
            return dt.and_local_timezone(Local).earliest();
        }
    }

    for fmt in ["%Y-%m-%d", "%Y/%m/%d"] {
        if let Ok(d) = chrono::NaiveDate::parse_from_str(s, fmt) {
            return d.and_hms_opt(0, 0, 0)?.and_local_timezone(Local).earliest();
        }
    }

    None
}

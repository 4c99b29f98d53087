//! Date helper functions

use chrono::{DateTime, Local, Locale, TimeZone};
use maud::{html, Markup};

use crate::config::SiteConfig;
use crate::content::PageContext;

/// The single date to display for a page
///
/// Picks the entry selected by `default_date_type`. Returns `None` when the
/// page carries no dates or not that particular one.
pub fn resolve_date(cfg: &SiteConfig, page: &PageContext) -> Option<DateTime<Local>> {
    page.dates.as_ref()?.get(cfg.default_date_type)
}

/// Format a date for display in the given BCP 47 locale (`en-US`, `fr-FR`, ...)
///
/// # Examples
/// ```ignore
/// format_date(&date, "en-US") // -> "Jan 05, 2024"
/// format_date(&date, "de-DE") // -> "05 Jan 2024"
/// ```
pub fn format_date<Tz: TimeZone>(date: &DateTime<Tz>, locale: &str) -> String
where
    Tz::Offset: std::fmt::Display,
{
    let pattern = if is_english(locale) {
        "%b %d, %Y"
    } else {
        "%d %b %Y"
    };
    date.format_localized(pattern, to_chrono_locale(locale))
        .to_string()
}

/// Format a date in ISO 8601 / XML format
pub fn date_xml<Tz: TimeZone>(date: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    date.format("%Y-%m-%dT%H:%M:%S%:z").to_string()
}

/// Generate a <time> HTML element
pub fn time_tag<Tz: TimeZone>(date: &DateTime<Tz>, locale: &str) -> Markup
where
    Tz::Offset: std::fmt::Display,
{
    html! {
        time datetime=(date_xml(date)) { (format_date(date, locale)) }
    }
}

fn is_english(locale: &str) -> bool {
    let language = locale.split(['-', '_']).next().unwrap_or_default();
    language.eq_ignore_ascii_case("en")
}

/// Map `en-US` / `en_US` / `en` onto chrono's locale table, POSIX if unknown
fn to_chrono_locale(locale: &str) -> Locale {
    let mut parts = locale.split(['-', '_']);
    let language = parts.next().unwrap_or_default().to_ascii_lowercase();
    let region = match parts.next() {
        Some(region) => region.to_ascii_uppercase(),
        None => language.to_ascii_uppercase(),
    };

    let candidates = [
        format!("{}_{}", language, region),
        format!("{}_{}", language, language.to_ascii_uppercase()),
    ];
    if language == "en" {
        // `en_EN` does not exist
        return Locale::try_from(candidates[0].as_str()).unwrap_or(Locale::en_US);
    }

    candidates
        .iter()
        .find_map(|name| Locale::try_from(name.as_str()).ok())
        .unwrap_or_else(|| {
            tracing::debug!("Unknown locale {:?}, using POSIX month names", locale);
            Locale::POSIX
        })
}

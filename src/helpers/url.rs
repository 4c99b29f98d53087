//! URL helper functions

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

/// Characters left alone by JavaScript's `encodeURIComponent`
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Percent-encode a string for use inside a URL query component
///
/// # Examples
/// ```ignore
/// encode_uri_component("Re: Hello") // -> "Re%3A%20Hello"
/// ```
pub fn encode_uri_component(s: &str) -> String {
    utf8_percent_encode(s, URI_COMPONENT).to_string()
}

/// Build a `mailto:` target with a subject line
pub fn mailto(address: &str, subject: &str) -> String {
    format!("mailto:{}?subject={}", address, encode_uri_component(subject))
}

/// Absolute link to the page listing everything tagged `tag`
pub fn tag_url(tag: &str) -> String {
    format!("/tags/{}", tag)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_uri_component() {
        assert_eq!(encode_uri_component("Re: Hello"), "Re%3A%20Hello");
        assert_eq!(encode_uri_component("a&b=c?d"), "a%26b%3Dc%3Fd");
        assert_eq!(encode_uri_component("keep-_.!~*'()"), "keep-_.!~*'()");
        assert_eq!(encode_uri_component("café"), "caf%C3%A9");
    }

    #[test]
    fn test_mailto() {
        assert_eq!(
            mailto("me@example.com", "Re: Feedback"),
            "mailto:me@example.com?subject=Re%3A%20Feedback"
        );
    }

    #[test]
    fn test_tag_url_keeps_raw_tag() {
        assert_eq!(tag_url("rust"), "/tags/rust");
        assert_eq!(tag_url("lang/rust"), "/tags/lang/rust");
    }
}

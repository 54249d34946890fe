use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

/// Placeholder for any contact field with no match.
pub const NOT_FOUND: &str = "Not found";

// Word boundaries are ASCII-only so a value glued to a non-ASCII label still matches.
static EMAIL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?-u:\b)[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Z|a-z]{2,}(?-u:\b)").unwrap()
});
static PHONE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?-u:\b)[0-9]{3}[-.]?[0-9]{3}[-.]?[0-9]{4}(?-u:\b)").unwrap()
});
// Scheme and host are case-insensitive; the profile path is not.
static LINKEDIN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i:https?://)?(?i:www\.)?(?i:linkedin\.com)/(?:in|company)/[a-zA-Z0-9-]+/?")
        .unwrap()
});

/// Contact details scraped from resume text. Every field is always populated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContactInfo {
    pub email: String,
    pub phone: String,
    pub linkedin: String,
}

/// First email, phone number and LinkedIn URL found anywhere in `text`.
pub fn extract_contact(text: &str) -> ContactInfo {
    ContactInfo {
        email: first_match(&EMAIL, text),
        phone: first_match(&PHONE, text),
        linkedin: first_match(&LINKEDIN, text),
    }
}

fn first_match(pattern: &Regex, text: &str) -> String {
    pattern
        .find(text)
        .map(|m| m.as_str().to_string())
        .unwrap_or_else(|| NOT_FOUND.to_string())
}

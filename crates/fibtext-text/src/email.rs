//! Email pattern matching.
//!
//! The grammar is deliberately simple:
//!
//! ```text
//! local  = [A-Za-z0-9._%+-]+
//! domain = [A-Za-z0-9.-]+
//! tld    = [A-Za-z]{2,}
//! email  = local "@" domain "." tld
//! ```
//!
//! No quoted local parts, IP literals or internationalized domains.

use std::sync::LazyLock;

use regex::Regex;

const EMAIL_PATTERN: &str = r"[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}";

static EMAIL_SCAN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(EMAIL_PATTERN).expect("email pattern should compile"));

// \z rather than $ so a trailing newline is not accepted.
static EMAIL_FULL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(r"\A(?:{EMAIL_PATTERN})\z")).expect("email pattern should compile")
});

/// Extract every non-overlapping email match, left to right.
///
/// # Example
/// ```
/// let found = fibtext_text::extract_emails("mail a@example.com, b@example.org");
/// assert_eq!(found, ["a@example.com", "b@example.org"]);
/// ```
#[must_use]
pub fn extract_emails(text: &str) -> Vec<String> {
    EMAIL_SCAN
        .find_iter(text)
        .map(|m| m.as_str().to_string())
        .collect()
}

/// True iff the whole candidate matches the email grammar.
#[must_use]
pub fn is_valid_email(candidate: &str) -> bool {
    EMAIL_FULL.is_match(candidate)
}

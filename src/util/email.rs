//! Permissive email shape check used by the newsletter form.

#[cfg(test)]
#[path = "email_test.rs"]
mod email_test;

use std::sync::LazyLock;

use regex::Regex;

static EMAIL_SHAPE: LazyLock<Option<Regex>> = LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").ok());

/// Whether `candidate` looks like `local@domain.tld`.
///
/// Whitespace and extra `@` characters are rejected anywhere; the domain must
/// contain a dot with at least one character on each side. This is not an
/// RFC 5322 parser and rejects some valid addresses.
pub fn is_valid_email(candidate: &str) -> bool {
    EMAIL_SHAPE.as_ref().is_some_and(|re| re.is_match(candidate))
}

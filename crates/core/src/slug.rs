//! Project identifier derivation.
//!
//! A project's id is a URL-safe slug computed once from its title at
//! creation time.

use std::sync::LazyLock;

use regex::Regex;

static WHITESPACE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("valid regex"));

static DISALLOWED_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^a-z0-9-]").expect("valid regex"));

/// Derive a project id from its title.
///
/// Lower-cases the title, replaces each run of whitespace with a single
/// `-`, then strips every character outside `[a-z0-9-]`.
///
/// # Examples
///
/// ```
/// use portfolio_core::slug::slugify;
///
/// assert_eq!(slugify("Driveway Asphalting!"), "driveway-asphalting");
/// assert_eq!(slugify("Luxury  Villas"), "luxury-villas");
/// ```
pub fn slugify(title: &str) -> String {
    let lowered = title.to_lowercase();
    let hyphenated = WHITESPACE_RE.replace_all(&lowered, "-");
    DISALLOWED_RE.replace_all(&hyphenated, "").into_owned()
}

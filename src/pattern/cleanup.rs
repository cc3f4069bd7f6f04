//! Token cleanup for extracted matches
//!
//! Boundary-scanned tokens come straight out of the page text and frequently
//! carry HTML debris: tag fragments, zero-width characters, half-decoded
//! entities, and CMS template artifacts. The cleaners here turn those into
//! plain tokens, or into empty strings that the matcher then drops.

use regex::Regex;
use std::sync::LazyLock;

static TAG_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<[^>]+>").expect("hardcoded regex compiles"));

static INVISIBLE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\x{200B}-\x{200D}\x{FEFF}]").expect("hardcoded regex compiles"));

// Framer-generated markup leaks placeholder comments and generated class
// names into text nodes; strip all three shapes.
static FRAMER_BLOCK_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)<!--\$-->.*?<!--/\$-->").expect("hardcoded regex compiles"));

static FRAMER_ATTR_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"data-framer-[^=]*="[^"]*""#).expect("hardcoded regex compiles")
});

static FRAMER_CLASS_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"framer-[a-zA-Z0-9-]+").expect("hardcoded regex compiles"));

static WHITESPACE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("hardcoded regex compiles"));

/// Strips trailing punctuation from a token while preserving email structure.
///
/// Tokens that look like email addresses (an `@` with a dot somewhere after
/// it) keep their dots, since those may be meaningful domain separators; only
/// `,;:!?` are stripped. All other tokens also lose trailing dots.
pub fn clean_trailing_punctuation(word: &str) -> &str {
    let looks_like_email = word
        .split_once('@')
        .map(|(_, domain)| domain.contains('.'))
        .unwrap_or(false);

    if looks_like_email {
        word.trim_end_matches([',', ';', ':', '!', '?'])
    } else {
        word.trim_end_matches(['.', ',', ';', ':', '!', '?'])
    }
}

/// Cleans HTML artifacts and invisible characters from an extracted token.
///
/// Removes `<tag>`-shaped substrings, zero-width characters (U+200B–U+200D,
/// U+FEFF), replaces the common named entities, strips Framer template
/// artifacts, collapses whitespace runs to single spaces, and trims.
pub fn clean_html_artifacts(word: &str) -> String {
    let word = TAG_RE.replace_all(word, "");
    let word = INVISIBLE_RE.replace_all(&word, "");

    let word = word
        .replace("&nbsp;", " ")
        .replace("&amp;", "&")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&apos;", "'");

    let word = FRAMER_BLOCK_RE.replace_all(&word, "");
    let word = FRAMER_ATTR_RE.replace_all(&word, "");
    let word = FRAMER_CLASS_RE.replace_all(&word, "");

    let word = WHITESPACE_RE.replace_all(&word, " ");
    word.trim().to_string()
}

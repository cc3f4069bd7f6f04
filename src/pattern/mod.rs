//! Pattern matching module for WebChecker
//!
//! This module compiles the user-supplied pattern (a literal symbol, a custom
//! regular expression, or the built-in email shape), finds matches in page
//! text, and performs boundary-aware context extraction with HTML-artifact
//! cleaning.

mod cleanup;
mod email;
mod matcher;

pub use email::is_valid_email;
pub use matcher::PatternMatcher;

/// A pattern specification. Exactly one variant is active; the matcher is
/// immutable once compiled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Pattern {
    /// A literal string or symbol, escaped before regex compilation
    Literal(String),

    /// A custom regex source string, compiled as-is (case-insensitive)
    Custom(String),

    /// The built-in email-detection mode: a fixed email-shaped regex plus
    /// post-match structural validation
    Email,
}

//! Pattern matcher with boundary-aware context extraction
//!
//! The matcher compiles exactly one pattern variant to a regex and scans page
//! text for it. When context extraction is requested, each raw hit is grown
//! outward to the nearest structural boundary so that matching `@` yields
//! `contact@example.com` rather than a bare `@`.

use crate::pattern::cleanup::{clean_html_artifacts, clean_trailing_punctuation};
use crate::pattern::email::is_valid_email;
use crate::pattern::Pattern;
use crate::PatternError;
use regex::{Regex, RegexBuilder};

/// The fixed pattern used in email-detection mode
const EMAIL_PATTERN: &str = r"\b[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}\b";

/// Compiled pattern matcher. Stateless across calls: every find is a pure
/// function of the input text, so a matcher can be shared freely.
#[derive(Debug)]
pub struct PatternMatcher {
    pattern: Pattern,
    regex: Regex,
}

impl PatternMatcher {
    /// Compiles a pattern matcher from a pattern specification.
    ///
    /// Literal patterns are escaped and matched case-sensitively. Custom
    /// regexes are compiled as given, case-insensitively, and fail with
    /// [`PatternError::Regex`] on invalid syntax. Email mode compiles the
    /// fixed word-bounded email shape, case-insensitively.
    pub fn new(pattern: Pattern) -> Result<Self, PatternError> {
        let regex = match &pattern {
            Pattern::Literal(literal) => Regex::new(&regex::escape(literal))?,
            Pattern::Custom(source) => RegexBuilder::new(source).case_insensitive(true).build()?,
            Pattern::Email => RegexBuilder::new(EMAIL_PATTERN)
                .case_insensitive(true)
                .build()?,
        };

        Ok(Self { pattern, regex })
    }

    /// Returns the regex source this matcher was compiled from
    pub fn as_str(&self) -> &str {
        self.regex.as_str()
    }

    /// Returns true if this matcher was built in email-detection mode
    pub fn is_email_mode(&self) -> bool {
        matches!(self.pattern, Pattern::Email)
    }

    /// Finds all matches of the pattern in the given text.
    ///
    /// With neither extraction flag, raw regex matches are returned verbatim
    /// in discovery order. With `extract_before`, each match is extended left
    /// to the previous boundary character ("the word ending in the match");
    /// with `extract_after`, right to the next boundary ("the word starting
    /// at the match"); with both, the full boundary-delimited word containing
    /// the match. Extracted tokens are trimmed, stripped of trailing
    /// punctuation and cleaned of HTML artifacts; tokens that come out empty
    /// are dropped. Duplicates are not removed at this layer.
    pub fn find_matches(
        &self,
        text: &str,
        extract_before: bool,
        extract_after: bool,
    ) -> Vec<String> {
        let mut matches = Vec::new();

        for hit in self.regex.find_iter(text) {
            if !extract_before && !extract_after {
                matches.push(hit.as_str().to_string());
                continue;
            }

            let start = if extract_before {
                scan_word_start(text, hit.start())
            } else {
                hit.start()
            };
            let end = if extract_after {
                scan_word_end(text, hit.end())
            } else {
                hit.end()
            };

            let word = text[start..end].trim();
            let word = clean_trailing_punctuation(word);
            let word = clean_html_artifacts(word);

            if !word.is_empty() {
                matches.push(word);
            }
        }

        matches
    }

    /// Finds validated email addresses in text, paired with the page URL.
    ///
    /// Runs the email-mode regex over the text, cleans each raw match of HTML
    /// artifacts, and keeps only matches that pass structural validation.
    /// Order follows match discovery; callers aggregate and deduplicate.
    pub fn find_emails_with_pages(
        &self,
        text: &str,
        page_url: &str,
    ) -> Result<Vec<(String, String)>, PatternError> {
        if !self.is_email_mode() {
            return Err(PatternError::ModeMismatch(
                "find_emails_with_pages requires email mode".to_string(),
            ));
        }

        let mut emails = Vec::new();
        for hit in self.regex.find_iter(text) {
            let email = clean_html_artifacts(hit.as_str().trim());
            if is_valid_email(&email) {
                emails.push((email, page_url.to_string()));
            }
        }

        Ok(emails)
    }
}

/// Returns true for characters that delimit extracted word context:
/// whitespace, brackets and quotes, control characters, zero-width characters.
fn is_boundary(c: char) -> bool {
    c.is_whitespace()
        || matches!(c, '(' | ')' | '[' | ']' | '{' | '}' | '<' | '>' | '"')
        || (c as u32) < 32
        || matches!(c, '\u{200B}'..='\u{200D}' | '\u{FEFF}')
}

/// Scans left from `match_start` to the previous boundary character,
/// returning the byte index just after that boundary (or 0).
fn scan_word_start(text: &str, match_start: usize) -> usize {
    let mut start = match_start;
    for (idx, c) in text[..match_start].char_indices().rev() {
        if is_boundary(c) {
            break;
        }
        start = idx;
    }
    start
}

/// Scans right from `match_end` to the next boundary character, returning
/// the byte index of that boundary (or the end of text).
fn scan_word_end(text: &str, match_end: usize) -> usize {
    let mut end = match_end;
    for (idx, c) in text[match_end..].char_indices() {
        if is_boundary(c) {
            break;
        }
        end = match_end + idx + c.len_utf8();
    }
    end
}

#[cfg(test)]
mod tests {
    use super::*;

    fn literal(s: &str) -> PatternMatcher {
        PatternMatcher::new(Pattern::Literal(s.to_string())).unwrap()
    }

    #[test]
    fn test_literal_no_occurrence_returns_empty() {
        let matcher = literal("™");
        assert!(matcher.find_matches("no symbols here", false, false).is_empty());
        assert!(matcher.find_matches("no symbols here", true, true).is_empty());
    }

    #[test]
    fn test_literal_raw_matches_verbatim() {
        let matcher = literal("@");
        assert_eq!(
            matcher.find_matches("a@b and c@d", false, false),
            vec!["@", "@"]
        );
    }

    #[test]
    fn test_literal_is_escaped() {
        let matcher = literal("a.b");
        // An unescaped dot would also match "axb"
        assert!(matcher.find_matches("axb", false, false).is_empty());
        assert_eq!(matcher.find_matches("a.b", false, false), vec!["a.b"]);
    }

    #[test]
    fn test_extract_before_yields_word_ending_in_match() {
        let matcher = literal("@");
        assert_eq!(
            matcher.find_matches("write to contact@example.com today", true, false),
            vec!["contact@"]
        );
    }

    #[test]
    fn test_extract_after_yields_word_starting_at_match() {
        let matcher = literal("@");
        assert_eq!(
            matcher.find_matches("write to contact@example.com today", false, true),
            vec!["@example.com"]
        );
    }

    #[test]
    fn test_extract_both_yields_full_word() {
        let matcher = literal("@");
        assert_eq!(
            matcher.find_matches("write to contact@example.com today", true, true),
            vec!["contact@example.com"]
        );
    }

    #[test]
    fn test_boundary_scan_idempotent_on_clean_input() {
        let matcher = literal("@");
        assert_eq!(
            matcher.find_matches("contact@example.com", true, true),
            vec!["contact@example.com"]
        );
    }

    #[test]
    fn test_html_artifact_round_trip() {
        let matcher = literal("@");
        assert_eq!(
            matcher.find_matches("<strong>support@voda.co</strong>", true, true),
            vec!["support@voda.co"]
        );
    }

    #[test]
    fn test_trailing_punctuation_policy_by_token_shape() {
        let at = literal("@");
        assert_eq!(
            at.find_matches("Email: jane@company.com, phone below", true, true),
            vec!["jane@company.com"]
        );

        let tm = literal("™");
        assert_eq!(
            tm.find_matches("Try BrandName™. It is great", true, false),
            vec!["BrandName™"]
        );
    }

    #[test]
    fn test_brackets_are_boundaries() {
        let matcher = literal("@");
        assert_eq!(
            matcher.find_matches("(contact@example.com)", true, true),
            vec!["contact@example.com"]
        );
        assert_eq!(
            matcher.find_matches("[info@voda.co]", true, true),
            vec!["info@voda.co"]
        );
    }

    #[test]
    fn test_zero_width_space_is_boundary() {
        let matcher = literal("@");
        assert_eq!(
            matcher.find_matches("junk\u{200B}contact@example.com", true, true),
            vec!["contact@example.com"]
        );
    }

    #[test]
    fn test_multibyte_neighbours_do_not_panic() {
        let matcher = literal("@");
        assert_eq!(
            matcher.find_matches("héllo@exämple.com", true, true),
            vec!["héllo@exämple.com"]
        );
    }

    #[test]
    fn test_match_order_and_no_dedup() {
        let matcher = literal("@");
        assert_eq!(
            matcher.find_matches("a@x.com b@y.com a@x.com", true, true),
            vec!["a@x.com", "b@y.com", "a@x.com"]
        );
    }

    #[test]
    fn test_custom_pattern_case_insensitive() {
        let matcher = PatternMatcher::new(Pattern::Custom(r"brand\w+".to_string())).unwrap();
        assert_eq!(
            matcher.find_matches("BrandName and brandmark", false, false),
            vec!["BrandName", "brandmark"]
        );
    }

    #[test]
    fn test_custom_pattern_invalid_regex_fails() {
        let result = PatternMatcher::new(Pattern::Custom("(unclosed".to_string()));
        assert!(matches!(result, Err(PatternError::Regex(_))));
    }

    #[test]
    fn test_email_mode_matches_addresses() {
        let matcher = PatternMatcher::new(Pattern::Email).unwrap();
        assert_eq!(
            matcher.find_matches("mail support@voda.co or sales@voda.co", false, false),
            vec!["support@voda.co", "sales@voda.co"]
        );
    }

    #[test]
    fn test_find_emails_with_pages_validates() {
        let matcher = PatternMatcher::new(Pattern::Email).unwrap();
        let found = matcher
            .find_emails_with_pages(
                "good: support@voda.co bad: test..test@example.com",
                "https://voda.co/",
            )
            .unwrap();
        // The double-dot candidate matches the liberal regex but fails
        // structural validation.
        assert!(found.contains(&("support@voda.co".to_string(), "https://voda.co/".to_string())));
        assert_eq!(found.len(), 1);
        assert!(found.iter().all(|(email, _)| is_valid_email(email)));
    }

    #[test]
    fn test_find_emails_requires_email_mode() {
        let matcher = literal("@");
        assert!(matcher.find_emails_with_pages("a@b.co", "url").is_err());
    }
}

//! Structural email validation
//!
//! A regex match is only a candidate; this module applies the strict shape
//! checks that weed out artifacts like `test..test@example.com` which the
//! liberal character classes of the match pattern still allow. The rules are
//! a fixed heuristic policy (length caps, dot placement, label counts), not a
//! full RFC 5321/5322 implementation.

use regex::Regex;
use std::sync::LazyLock;

/// Anchored email shape: local part, `@`, dotted domain, 2+ letter TLD
static EMAIL_SHAPE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}$")
        .expect("hardcoded regex compiles")
});

/// Maximum length of the local part (before the `@`)
const MAX_LOCAL_LEN: usize = 64;

/// Maximum length of the domain (after the `@`)
const MAX_DOMAIN_LEN: usize = 253;

/// Validates a candidate email address against the structural rules.
///
/// Returns `false` unless the candidate matches the strict shape AND none of
/// the rejection patterns apply: consecutive dots, a dot adjacent to the `@`
/// on either side, a leading or trailing dot or `@`. The local part must be
/// 1–64 characters, the domain 1–253 characters with at least two labels,
/// and the final label at least 2 characters.
///
/// This is a pure string predicate; no network lookup is performed.
pub fn is_valid_email(candidate: &str) -> bool {
    if !EMAIL_SHAPE_RE.is_match(candidate) {
        return false;
    }

    if candidate.contains("..") || candidate.contains("@.") || candidate.contains(".@") {
        return false;
    }

    if candidate.starts_with('.')
        || candidate.ends_with('.')
        || candidate.starts_with('@')
        || candidate.ends_with('@')
    {
        return false;
    }

    // Exactly one @ separating local part and domain
    let Some((local, domain)) = candidate.split_once('@') else {
        return false;
    };
    if domain.contains('@') {
        return false;
    }

    if local.is_empty() || local.len() > MAX_LOCAL_LEN {
        return false;
    }

    if domain.is_empty() || domain.len() > MAX_DOMAIN_LEN {
        return false;
    }

    let labels: Vec<&str> = domain.split('.').collect();
    if labels.len() < 2 {
        return false;
    }

    // TLD must be at least 2 characters
    match labels.last() {
        Some(tld) if tld.len() >= 2 => true,
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_simple_address() {
        assert!(is_valid_email("support@voda.co"));
    }

    #[test]
    fn test_accepts_dotted_local_and_domain() {
        assert!(is_valid_email("user.name@domain.co.uk"));
    }

    #[test]
    fn test_accepts_plus_and_percent() {
        assert!(is_valid_email("user+tag@example.com"));
        assert!(is_valid_email("user%x@example.com"));
    }

    #[test]
    fn test_rejects_missing_local_part() {
        assert!(!is_valid_email("@example.com"));
    }

    #[test]
    fn test_rejects_missing_domain() {
        assert!(!is_valid_email("test@"));
    }

    #[test]
    fn test_rejects_consecutive_dots() {
        assert!(!is_valid_email("test..test@example.com"));
    }

    #[test]
    fn test_rejects_empty_string() {
        assert!(!is_valid_email(""));
    }

    #[test]
    fn test_rejects_trailing_dot() {
        assert!(!is_valid_email("test@example.com."));
    }

    #[test]
    fn test_rejects_dot_adjacent_to_at() {
        assert!(!is_valid_email("test@.example.com"));
        assert!(!is_valid_email("test.@example.com"));
    }

    #[test]
    fn test_rejects_double_at() {
        assert!(!is_valid_email("a@b@example.com"));
    }

    #[test]
    fn test_rejects_single_label_domain() {
        assert!(!is_valid_email("test@localhost"));
    }

    #[test]
    fn test_rejects_short_tld() {
        assert!(!is_valid_email("test@example.c"));
    }

    #[test]
    fn test_rejects_overlong_local_part() {
        let local = "a".repeat(65);
        assert!(!is_valid_email(&format!("{}@example.com", local)));
        let ok_local = "a".repeat(64);
        assert!(is_valid_email(&format!("{}@example.com", ok_local)));
    }

    #[test]
    fn test_rejects_overlong_domain() {
        // 63-char labels joined to exceed 253 characters
        let label = "a".repeat(63);
        let domain = format!("{l}.{l}.{l}.{l}.com", l = label);
        assert!(!is_valid_email(&format!("user@{}", domain)));
    }
}

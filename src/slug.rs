//! # Slug Normalization
//!
//! Turns an arbitrary string into a safe identifier segment. The primary
//! consumer is branch naming: source-control branch names like
//! `Feature/ABC-123-very-long-name` carry case, slashes, and unbounded length
//! that must not leak into PRNs, bucket names, or stack names.
//!
//! The normalization pipeline is fixed:
//!
//! 1. Lowercase the input.
//! 2. Replace every character outside `[a-z0-9-]` with `-`.
//! 3. Keep only the first 20 characters.
//! 4. Strip trailing hyphens.
//!
//! ```
//! use core_prn::slug::normalize;
//!
//! assert_eq!(normalize("Feature/ABC-123-very-long-name"), "feature-abc-123-very");
//! ```
//!
//! `normalize` is pure and idempotent; it has no error cases. Optional inputs
//! are handled by callers with `Option::map`.

/// Maximum length of a normalized segment.
const MAX_SEGMENT_LEN: usize = 20;

/// Normalize an arbitrary string into a safe identifier segment.
///
/// Lowercases, folds every character outside `[a-z0-9-]` to `-`, caps the
/// result at 20 characters, and strips trailing hyphens.
pub fn normalize(input: &str) -> String {
    let folded: String = input
        .to_lowercase()
        .chars()
        .map(|c| match c {
            'a'..='z' | '0'..='9' | '-' => c,
            _ => '-',
        })
        .take(MAX_SEGMENT_LEN)
        .collect();
    folded.trim_end_matches('-').to_string()
}

/// Whether `s` is a well-formed slug: one or more of `[a-z0-9-]`, not
/// starting or ending with a hyphen.
///
/// This is the charset assumed for every PRN segment; the scope validators
/// apply it per segment.
pub fn is_slug(s: &str) -> bool {
    !s.is_empty()
        && s.bytes()
            .all(|b| b.is_ascii_lowercase() || b.is_ascii_digit() || b == b'-')
        && !s.starts_with('-')
        && !s.ends_with('-')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_branch_name() {
        assert_eq!(
            normalize("Feature/ABC-123-very-long-name"),
            "feature-abc-123-very"
        );
    }

    #[test]
    fn test_normalize_lowercases() {
        assert_eq!(normalize("MAIN"), "main");
    }

    #[test]
    fn test_normalize_replaces_unsafe_chars() {
        assert_eq!(normalize("bugfix/login_form"), "bugfix-login-form");
        assert_eq!(normalize("release 2.1"), "release-2-1");
    }

    #[test]
    fn test_normalize_caps_at_twenty_chars() {
        let long = "a".repeat(40);
        assert_eq!(normalize(&long).len(), 20);
    }

    #[test]
    fn test_normalize_strips_trailing_hyphens() {
        // The 20-char cut lands on a separator run; trailing hyphens go.
        assert_eq!(normalize("feature/very-long---"), "feature-very-long");
        assert_eq!(normalize("main---"), "main");
    }

    #[test]
    fn test_normalize_empty_and_all_unsafe() {
        assert_eq!(normalize(""), "");
        assert_eq!(normalize("///"), "");
    }

    #[test]
    fn test_normalize_unicode_folds_per_char() {
        // Multi-byte characters fold to hyphens like any other unsafe char.
        assert_eq!(normalize("café"), "caf");
        assert_eq!(normalize("日本語"), "");
    }

    #[test]
    fn test_normalize_is_idempotent() {
        for input in ["Feature/ABC-123-very-long-name", "main", "", "a--b", "X"] {
            let once = normalize(input);
            assert_eq!(normalize(&once), once);
        }
    }

    #[test]
    fn test_is_slug() {
        assert!(is_slug("acme"));
        assert!(is_slug("web-app-2"));
        assert!(is_slug("42"));
        assert!(!is_slug(""));
        assert!(!is_slug("-leading"));
        assert!(!is_slug("trailing-"));
        assert!(!is_slug("UPPER"));
        assert!(!is_slug("has space"));
        assert!(!is_slug("naïve"));
    }
}

//! Property-based tests for the PRN subsystem.
//!
//! These tests use proptest to generate random inputs and verify that
//! invariants hold for all possible inputs.

#[cfg(test)]
mod proptest_tests {
    use crate::prn::{extract_at, scope_of, Prn};
    use crate::scope::Scope;
    use crate::slug::{is_slug, normalize};
    use crate::validate::{is_item_prn, is_valid};
    use proptest::prelude::*;

    /// A contiguous identifier populated down to a random depth, with
    /// slug-shaped segments.
    fn contiguous_prn() -> impl Strategy<Value = Prn> {
        let segment = "[a-z0-9][a-z0-9-]{0,8}[a-z0-9]|[a-z0-9]";
        proptest::collection::vec(segment, 1..=5).prop_map(|segments| {
            let mut fields = segments.into_iter();
            let mut next = || fields.next();
            Prn {
                portfolio: next(),
                app: next(),
                branch: next(),
                build: next(),
                component: next(),
            }
        })
    }

    fn arbitrary_scope() -> impl Strategy<Value = Scope> {
        proptest::sample::select(Scope::ALL.to_vec())
    }

    // ============================================================================
    // normalize property tests
    // ============================================================================

    proptest! {
        /// Property: normalize is idempotent
        #[test]
        fn normalize_is_idempotent(input in ".*") {
            let once = normalize(&input);
            prop_assert_eq!(normalize(&once), once);
        }

        /// Property: normalize output never exceeds 20 characters
        #[test]
        fn normalize_caps_length(input in ".*") {
            prop_assert!(normalize(&input).chars().count() <= 20);
        }

        /// Property: normalize output is empty or a valid slug, except that a
        /// leading hyphen survives (only trailing hyphens are stripped)
        #[test]
        fn normalize_output_charset(input in ".*") {
            let result = normalize(&input);
            prop_assert!(
                result
                    .bytes()
                    .all(|b| b.is_ascii_lowercase() || b.is_ascii_digit() || b == b'-'),
                "unexpected character in {:?}",
                result
            );
            prop_assert!(!result.ends_with('-'));
        }

        /// Property: already-slug input shorter than the cap passes through
        #[test]
        fn normalize_preserves_short_slugs(input in "[a-z0-9][a-z0-9-]{0,17}[a-z0-9]") {
            prop_assume!(is_slug(&input));
            prop_assert_eq!(normalize(&input), input);
        }
    }

    // ============================================================================
    // parser / generator property tests
    // ============================================================================

    proptest! {
        /// Property: parsing never panics, whatever the input
        #[test]
        fn parse_is_total(input in ".*") {
            let _ = Prn::parse(&input);
        }

        /// Property: a contiguous identifier survives the canonical
        /// serialization round trip
        #[test]
        fn canonical_round_trip(prn in contiguous_prn()) {
            let serialized = prn.canonical(Scope::Component);
            prop_assert_eq!(Prn::parse(&serialized), prn);
        }

        /// Property: colon and hyphen serializations agree on field order and
        /// truncation (they differ only in the delimiter)
        #[test]
        fn serializations_agree(prn in contiguous_prn(), scope in arbitrary_scope()) {
            let colon = prn.colon_delimited(scope);
            let hyphen = prn.hyphen_delimited(scope);
            prop_assert_eq!(colon.replace(':', "-"), hyphen);
        }

        /// Property: the generated string truncated at scope N has exactly
        /// min(N, populated depth) segments
        #[test]
        fn format_segment_count(prn in contiguous_prn(), scope in arbitrary_scope()) {
            let depth = prn.scope().map_or(0, |s| s.rank());
            let expected = depth.min(scope.rank()) as usize;
            let out = prn.colon_delimited(scope);
            let count = if out.is_empty() { 0 } else { out.split(':').count() };
            prop_assert_eq!(count, expected);
        }

        /// Property: extract_at output is a prefix of the input's own
        /// maximal regeneration
        #[test]
        fn extract_at_is_prefix(prn in contiguous_prn(), scope in arbitrary_scope()) {
            let full = prn.canonical(Scope::Component);
            let maximal = extract_at(&full, Scope::Component);
            let truncated = extract_at(&full, scope);
            prop_assert!(maximal.starts_with(&truncated));
        }

        /// Property: canonical output of a slug-segment identifier validates
        /// at its own scope
        #[test]
        fn canonical_output_validates(prn in contiguous_prn()) {
            let scope = prn.scope().expect("contiguous_prn populates at least one field");
            prop_assert!(is_valid(&prn.canonical(scope), scope));
            prop_assert_eq!(scope_of(&prn.canonical(scope)), Some(scope));
        }
    }

    // ============================================================================
    // validator property tests
    // ============================================================================

    proptest! {
        /// Property: validators are total over arbitrary strings, including
        /// unicode and control characters
        #[test]
        fn validators_are_total(input in ".*", scope in arbitrary_scope()) {
            let _ = is_valid(&input, scope);
            let _ = is_item_prn(&input);
        }

        /// Property: a PRN valid at one scope is invalid at the other four
        #[test]
        fn scopes_are_mutually_exclusive(prn in contiguous_prn()) {
            let canonical = prn.canonical(Scope::Component);
            let valid_at = Scope::ALL
                .into_iter()
                .filter(|&s| is_valid(&canonical, s))
                .count();
            prop_assert_eq!(valid_at, 1);
            prop_assert!(is_item_prn(&canonical));
        }
    }
}

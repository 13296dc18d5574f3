//! # Scope Validators
//!
//! Total predicates that check whether a candidate PRN string is well-formed
//! for a declared scope. A PRN is valid at scope N iff it is exactly the
//! scheme token `prn` followed by N colon-delimited slug segments, no fewer
//! and no more, and every segment matches the slug charset (lowercase
//! letters, digits, internal hyphens).
//!
//! Validators never fail and never panic: any input, including empty,
//! unicode, or arbitrarily long strings, yields a bool. Callers use them as
//! guard-clause predicates before trusting a parsed or generated PRN for
//! business decisions.
//!
//! ```
//! use core_prn::scope::Scope;
//! use core_prn::validate::{is_valid, is_item_prn};
//!
//! assert!(is_valid("prn:acme:web", Scope::App));
//! assert!(!is_valid("prn:acme:web", Scope::Branch));
//! assert!(is_item_prn("prn:acme:web:main:42:api"));
//! ```

use std::sync::LazyLock;

use regex::Regex;

use crate::scope::Scope;

/// One PRN segment: lowercase letters, digits, internal hyphens.
const SEGMENT: &str = "[a-z0-9](?:[a-z0-9-]*[a-z0-9])?";

fn scope_regex(rank: usize) -> Regex {
    let pattern = format!("^prn(?::{SEGMENT}){{{rank}}}$");
    Regex::new(&pattern).expect("scope pattern is a valid regex")
}

static PORTFOLIO_PRN: LazyLock<Regex> = LazyLock::new(|| scope_regex(1));
static APP_PRN: LazyLock<Regex> = LazyLock::new(|| scope_regex(2));
static BRANCH_PRN: LazyLock<Regex> = LazyLock::new(|| scope_regex(3));
static BUILD_PRN: LazyLock<Regex> = LazyLock::new(|| scope_regex(4));
static COMPONENT_PRN: LazyLock<Regex> = LazyLock::new(|| scope_regex(5));

/// Whether `prn` is well-formed for the given scope.
pub fn is_valid(prn: &str, scope: Scope) -> bool {
    let regex: &Regex = match scope {
        Scope::Portfolio => &PORTFOLIO_PRN,
        Scope::App => &APP_PRN,
        Scope::Branch => &BRANCH_PRN,
        Scope::Build => &BUILD_PRN,
        Scope::Component => &COMPONENT_PRN,
    };
    regex.is_match(prn)
}

/// Whether `prn` is a well-formed portfolio-scope PRN (`prn:portfolio`).
pub fn is_portfolio_prn(prn: &str) -> bool {
    is_valid(prn, Scope::Portfolio)
}

/// Whether `prn` is a well-formed app-scope PRN (`prn:portfolio:app`).
pub fn is_app_prn(prn: &str) -> bool {
    is_valid(prn, Scope::App)
}

/// Whether `prn` is a well-formed branch-scope PRN.
pub fn is_branch_prn(prn: &str) -> bool {
    is_valid(prn, Scope::Branch)
}

/// Whether `prn` is a well-formed build-scope PRN.
pub fn is_build_prn(prn: &str) -> bool {
    is_valid(prn, Scope::Build)
}

/// Whether `prn` is a well-formed component-scope PRN.
pub fn is_component_prn(prn: &str) -> bool {
    is_valid(prn, Scope::Component)
}

/// Scope-agnostic validation: whether `prn` is well-formed at any of the
/// five ladder scopes.
pub fn is_item_prn(prn: &str) -> bool {
    Scope::ALL.into_iter().any(|scope| is_valid(prn, scope))
}

/// Whether `name` is one of the five ladder scope names.
pub fn is_item_type(name: &str) -> bool {
    name.parse::<Scope>().is_ok()
}

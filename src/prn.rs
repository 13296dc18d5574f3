//! # Pipeline Reference Number (PRN)
//!
//! The PRN is the hierarchical, colon-delimited identifier that uniquely
//! names every object in the platform:
//!
//! ```text
//! prn:<portfolio>[:<app>[:<branch>[:<build>[:<component>]]]]
//! ```
//!
//! This module defines the `Prn` value type (an ordered, partially populated
//! 5-tuple of slug fields) together with its parser, its scope-truncating
//! generator, and the scope extractor built from the two.
//!
//! ## Parsing and generation are total
//!
//! Parsing never fails: the first colon-separated segment is the scheme token
//! and is discarded, remaining segments fill the fields left to right, extras
//! beyond the fifth are dropped, and anything missing stays `None`. The
//! generator mirrors that leniency: the first absent field halts generation,
//! so a gapped tuple degrades to its contiguous prefix instead of erroring.
//!
//! Callers that need to *reject* gapped tuples instead of truncating them use
//! the checked constructor [`Prn::new`].
//!
//! ## Two serializations, one tuple
//!
//! The colon form is the primary key embedded in task payloads, table keys,
//! and storage paths; the hyphen form is used where colons are illegal, such
//! as inside bucket or stack names. Both are produced by [`Prn::format`] with
//! a different delimiter and agree on field order and truncation.
//!
//! ```
//! use core_prn::prn::Prn;
//! use core_prn::scope::Scope;
//!
//! let prn = Prn::parse("prn:acme:web:main:42:api");
//! assert_eq!(prn.app(), Some("web"));
//! assert_eq!(prn.format(Scope::Branch, ":"), "acme:web:main");
//! assert_eq!(prn.format(Scope::Build, "-"), "acme-web-main-42");
//! assert_eq!(prn.canonical(Scope::App), "prn:acme:web");
//! ```

use std::fmt;

use serde::de::{Deserialize, Deserializer};
use serde::ser::{Serialize, Serializer};

use crate::error::{Error, Result};
use crate::scope::{Scope, SCOPE_CLIENT};

/// The scheme token that opens every canonical PRN.
pub const PRN_SCHEME: &str = "prn";

/// The delimiter of the primary-key (colon) serialization.
pub const PRN_DELIMITER: &str = ":";

/// The delimiter of the resource-name-safe (hyphen) serialization.
pub const RESOURCE_DELIMITER: &str = "-";

/// An ordered, partially populated PRN field tuple.
///
/// Field order is fixed: portfolio, app, branch, build, component. A field is
/// meaningful only when all of its ancestors are populated; the legacy
/// parse/format paths tolerate violations of that rule by truncating, while
/// [`Prn::new`] rejects them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Prn {
    /// Business application (portfolio) name.
    pub portfolio: Option<String>,
    /// Deployment part of the business application.
    pub app: Option<String>,
    /// Branch of the source-code repository (normally a slug, see
    /// `slug::normalize`).
    pub branch: Option<String>,
    /// Build number or commit id of the deployment.
    pub build: Option<String>,
    /// Component part of the deployment.
    pub component: Option<String>,
}

impl Prn {
    /// Checked constructor: builds a `Prn` and rejects gapped tuples.
    ///
    /// A tuple is gapped when a field is populated while one of its ancestors
    /// is empty or missing. The legacy parse/format paths silently truncate
    /// such tuples; this constructor is the hardened alternative for callers
    /// minting new identifiers.
    ///
    /// # Errors
    ///
    /// Returns [`Error::GappedIdentifier`] naming the offending field and the
    /// missing ancestor.
    pub fn new(
        portfolio: Option<&str>,
        app: Option<&str>,
        branch: Option<&str>,
        build: Option<&str>,
        component: Option<&str>,
    ) -> Result<Prn> {
        let prn = Prn {
            portfolio: portfolio.map(str::to_string),
            app: app.map(str::to_string),
            branch: branch.map(str::to_string),
            build: build.map(str::to_string),
            component: component.map(str::to_string),
        };
        match prn.gap() {
            Some((field, missing)) => Err(Error::GappedIdentifier { field, missing }),
            None => Ok(prn),
        }
    }

    /// Parse a raw PRN string into its field tuple.
    ///
    /// The first segment is the scheme token and is discarded regardless of
    /// its value; the remaining segments fill the fields left to right.
    /// Segments beyond the fifth are silently dropped. An input without any
    /// colon is treated as a bare scheme token, so all fields come back
    /// `None`. This function never fails.
    pub fn parse(prn: &str) -> Prn {
        let mut segments = prn.split(':');
        // Scheme token ("prn" by convention).
        segments.next();
        let mut next = || segments.next().map(str::to_string);
        Prn {
            portfolio: next(),
            app: next(),
            branch: next(),
            build: next(),
            component: next(),
        }
    }

    /// The field at `scope`, if populated and non-empty.
    pub fn field(&self, scope: Scope) -> Option<&str> {
        let value = match scope {
            Scope::Portfolio => &self.portfolio,
            Scope::App => &self.app,
            Scope::Branch => &self.branch,
            Scope::Build => &self.build,
            Scope::Component => &self.component,
        };
        value.as_deref().filter(|s| !s.is_empty())
    }

    /// Business application (portfolio) name, if populated.
    pub fn portfolio(&self) -> Option<&str> {
        self.field(Scope::Portfolio)
    }

    /// App name, if populated.
    pub fn app(&self) -> Option<&str> {
        self.field(Scope::App)
    }

    /// Branch name, if populated.
    pub fn branch(&self) -> Option<&str> {
        self.field(Scope::Branch)
    }

    /// Build number or commit id, if populated.
    pub fn build(&self) -> Option<&str> {
        self.field(Scope::Build)
    }

    /// Component name, if populated.
    pub fn component(&self) -> Option<&str> {
        self.field(Scope::Component)
    }

    /// Compose the fields into a delimited string, truncated at `scope`.
    ///
    /// Fields are appended in fixed order, each prefixed with `delimiter`
    /// except the first. Generation stops as soon as the field whose rank
    /// equals `scope` has been appended; deeper fields are ignored even when
    /// populated. The first absent (missing or empty) field halts generation
    /// entirely, so a gapped tuple yields its contiguous prefix rather than
    /// an error.
    pub fn format(&self, scope: Scope, delimiter: &str) -> String {
        let mut out = String::new();
        for level in Scope::ALL {
            match self.field(level) {
                Some(segment) => {
                    if level > Scope::Portfolio {
                        out.push_str(delimiter);
                    }
                    out.push_str(segment);
                    if level == scope {
                        return out;
                    }
                }
                None => return out,
            }
        }
        out
    }

    /// The maximal available concatenation: every contiguously populated
    /// field, in order.
    ///
    /// This is where a request for a scope outside the five ladder ranks
    /// lands; `Scope` is a closed enum, so such a request can only arrive as
    /// the deepest rank, and the result equals
    /// `format(Scope::Component, delimiter)`.
    pub fn format_full(&self, delimiter: &str) -> String {
        self.format(Scope::Component, delimiter)
    }

    /// The colon-delimited (primary key) serialization, without the scheme
    /// token, truncated at `scope`.
    pub fn colon_delimited(&self, scope: Scope) -> String {
        self.format(scope, PRN_DELIMITER)
    }

    /// The hyphen-delimited (resource-name-safe) serialization, truncated at
    /// `scope`. Used where colons are illegal, e.g. inside bucket or stack
    /// names.
    pub fn hyphen_delimited(&self, scope: Scope) -> String {
        self.format(scope, RESOURCE_DELIMITER)
    }

    /// The canonical scheme-carrying PRN string at `scope`, e.g.
    /// `prn:acme:web`.
    ///
    /// An identifier with no populated portfolio renders as the bare scheme
    /// token `prn`.
    pub fn canonical(&self, scope: Scope) -> String {
        let body = self.colon_delimited(scope);
        if body.is_empty() {
            PRN_SCHEME.to_string()
        } else {
            format!("{PRN_SCHEME}{PRN_DELIMITER}{body}")
        }
    }

    /// The deepest contiguously populated scope, or `None` for an empty
    /// identifier.
    pub fn scope(&self) -> Option<Scope> {
        let mut deepest = None;
        for level in Scope::ALL {
            if self.field(level).is_none() {
                break;
            }
            deepest = Some(level);
        }
        deepest
    }

    /// Whether the populated fields form a contiguous prefix of the
    /// hierarchy (no populated field below a missing ancestor).
    pub fn is_contiguous(&self) -> bool {
        self.gap().is_none()
    }

    /// The first hierarchy gap, as (populated field, missing ancestor).
    fn gap(&self) -> Option<(&'static str, &'static str)> {
        let mut missing: Option<&'static str> = None;
        for level in Scope::ALL {
            match self.field(level) {
                Some(_) => {
                    if let Some(ancestor) = missing {
                        return Some((level.as_str(), ancestor));
                    }
                }
                None => {
                    if missing.is_none() {
                        missing = Some(level.as_str());
                    }
                }
            }
        }
        None
    }
}

/// Derive a shorter PRN at an ancestor scope from a longer one.
///
/// Defined as parse followed by a truncating regeneration in the colon form,
/// so it inherits both operations' leniency: malformed or gapped input
/// degrades to a shorter string instead of erroring.
pub fn extract_at(prn: &str, scope: Scope) -> String {
    Prn::parse(prn).format(scope, PRN_DELIMITER)
}

/// Classify a PRN string by its colon count: 1..=5 colons map onto the five
/// ladder scopes, anything else is `None`.
pub fn scope_of(prn: &str) -> Option<Scope> {
    let colons = prn.matches(':').count();
    u8::try_from(colons).ok().and_then(Scope::from_rank)
}

/// Like [`scope_of`], but reports the out-of-ladder `client` scope for a
/// string without any colon. Returns the wire name of the scope.
pub fn scope_name_of(prn: &str) -> Option<&'static str> {
    match prn.matches(':').count() {
        0 => Some(SCOPE_CLIENT),
        _ => scope_of(prn).map(Scope::as_str),
    }
}

impl fmt::Display for Prn {
    /// Renders the canonical colon form at the deepest contiguous scope.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.canonical(Scope::Component))
    }
}

impl Serialize for Prn {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Prn {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(Prn::parse(&raw))
    }
}

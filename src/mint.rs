//! # Request-Driven PRN Minting
//!
//! API calls and task payloads carry identifier material in a handful of
//! conventional parameters: a ready-made `prn`, one or more scope-qualified
//! PRNs (`portfolio_prn`, `app_prn`, ...), and a bare `name` for the newest
//! hierarchy level. Minting turns such a request into the PRN for a target
//! scope, preferring the most specific material available:
//!
//! 1. A `prn` already valid at the target scope is returned as-is.
//! 2. Otherwise the target-scope prefix is extracted from the nearest
//!    deeper-scope parameter.
//! 3. Otherwise the PRN is composed from the parent-scope parameter plus
//!    `name` (branch names are slug-normalized first).
//!
//! Step 3 is the only one that can fail: a missing parent PRN or name yields
//! [`Error::MissingAttribute`]. Minted strings are not re-validated here;
//! callers gate on the `validate` predicates before trusting them.

use log::debug;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::prn::{Prn, PRN_DELIMITER, PRN_SCHEME};
use crate::scope::Scope;
use crate::slug;
use crate::validate::is_valid;

/// The identifier material of an incoming request.
///
/// All parameters are optional; minting picks the most specific ones present
/// for the requested scope. Unknown payload keys are ignored on
/// deserialization.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PrnRequest {
    /// A ready-made PRN, used verbatim when valid at the target scope.
    pub prn: Option<String>,
    /// Portfolio-scope PRN parameter.
    pub portfolio_prn: Option<String>,
    /// App-scope PRN parameter.
    pub app_prn: Option<String>,
    /// Branch-scope PRN parameter.
    pub branch_prn: Option<String>,
    /// Build-scope PRN parameter.
    pub build_prn: Option<String>,
    /// Component-scope PRN parameter.
    pub component_prn: Option<String>,
    /// The name of the object being created at the target scope.
    pub name: Option<String>,
}

impl PrnRequest {
    fn name(&self, scope: Scope) -> Result<&str> {
        self.name.as_deref().ok_or(Error::MissingAttribute {
            attribute: "name",
            scope: scope.as_str(),
        })
    }

    fn parent_prn(&self, scope: Scope, attribute: &'static str) -> Result<&str> {
        let parent = match scope {
            Scope::App => &self.portfolio_prn,
            Scope::Branch => &self.app_prn,
            Scope::Build => &self.branch_prn,
            Scope::Component => &self.build_prn,
            Scope::Portfolio => &None,
        };
        parent.as_deref().ok_or(Error::MissingAttribute {
            attribute,
            scope: scope.as_str(),
        })
    }
}

/// Mint the PRN for `scope` from the request parameters.
///
/// # Errors
///
/// Returns [`Error::MissingAttribute`] when the request carries neither a
/// usable PRN parameter nor the parent PRN and name needed to compose one.
pub fn mint(scope: Scope, request: &PrnRequest) -> Result<String> {
    if let Some(prn) = request.prn.as_deref() {
        if is_valid(prn, scope) {
            debug!("minting {scope} PRN from request prn {prn:?}");
            return Ok(prn.to_string());
        }
    }

    // Deeper-scope parameters carry the target scope as a prefix; take the
    // nearest one present.
    let deeper: &[&Option<String>] = match scope {
        Scope::Portfolio => &[
            &request.portfolio_prn,
            &request.app_prn,
            &request.branch_prn,
            &request.build_prn,
        ],
        Scope::App => &[&request.app_prn, &request.branch_prn, &request.build_prn],
        Scope::Branch => &[&request.branch_prn, &request.build_prn],
        Scope::Build => &[&request.build_prn],
        Scope::Component => &[&request.component_prn],
    };
    if let Some(source) = deeper.iter().find_map(|p| p.as_deref()) {
        debug!("minting {scope} PRN by extraction from {source:?}");
        return Ok(Prn::parse(source).canonical(scope));
    }

    // Compose from the parent PRN and the new object's name.
    match scope {
        Scope::Portfolio => {
            let name = request.name(scope)?;
            Ok(format!("{PRN_SCHEME}{PRN_DELIMITER}{name}"))
        }
        Scope::App => compose(request, scope, "portfolio_prn", false),
        Scope::Branch => compose(request, scope, "app_prn", true),
        Scope::Build => compose(request, scope, "branch_prn", false),
        Scope::Component => compose(request, scope, "build_prn", false),
    }
}

fn compose(
    request: &PrnRequest,
    scope: Scope,
    parent_attribute: &'static str,
    normalize_name: bool,
) -> Result<String> {
    let parent = request.parent_prn(scope, parent_attribute)?;
    let name = request.name(scope)?;
    let segment = if normalize_name {
        slug::normalize(name)
    } else {
        name.to_string()
    };
    debug!("minting {scope} PRN from parent {parent:?} and name {segment:?}");
    Ok(format!("{parent}{PRN_DELIMITER}{segment}"))
}

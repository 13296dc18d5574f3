//! # Legacy Portfolio Decomposition
//!
//! An older naming convention packed up to four organizational labels into
//! the portfolio field itself, hyphen-separated:
//! `company-group-owner-application`. Shorter names bind right-to-left, so
//! `owner-bizapp` is an owner plus an application and a bare `bizapp` is just
//! an application.
//!
//! That convention conflicts with the hierarchical PRN model (hyphens are
//! ordinary slug characters everywhere else), so this module is retained for
//! compatibility with data produced under the old scheme and nothing in the
//! core identifier model depends on it. New callers should treat the
//! portfolio as an opaque slug.

use serde::Serialize;

use crate::error::{Error, Result};

/// The decomposed labels of a legacy portfolio name.
///
/// Only `application` is always present; the other labels bind right-to-left
/// as the segment count grows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PortfolioParts {
    /// Company label (4-segment names only).
    pub company: Option<String>,
    /// Group label (3- and 4-segment names).
    pub group: Option<String>,
    /// Owner label (2-, 3-, and 4-segment names).
    pub owner: Option<String>,
    /// Business application label.
    pub application: String,
}

/// Split a legacy portfolio name into its component labels.
///
/// # Errors
///
/// Returns [`Error::InvalidFormat`] for an empty input or for more than four
/// hyphen-separated segments; no sane partial result exists in either case.
#[deprecated(note = "legacy naming convention; treat the portfolio as an opaque slug instead")]
pub fn split_portfolio(portfolio: &str) -> Result<PortfolioParts> {
    if portfolio.is_empty() {
        return Err(Error::InvalidFormat {
            message: "portfolio name must be specified".to_string(),
        });
    }

    let parts: Vec<&str> = portfolio.split('-').collect();
    let owned = |s: &&str| (*s).to_string();
    match parts.as_slice() {
        [application] => Ok(PortfolioParts {
            company: None,
            group: None,
            owner: None,
            application: owned(application),
        }),
        [owner, application] => Ok(PortfolioParts {
            company: None,
            group: None,
            owner: Some(owned(owner)),
            application: owned(application),
        }),
        [group, owner, application] => Ok(PortfolioParts {
            company: None,
            group: Some(owned(group)),
            owner: Some(owned(owner)),
            application: owned(application),
        }),
        [company, group, owner, application] => Ok(PortfolioParts {
            company: Some(owned(company)),
            group: Some(owned(group)),
            owner: Some(owned(owner)),
            application: owned(application),
        }),
        _ => Err(Error::InvalidFormat {
            message: format!(
                "portfolio should have 1 to 4 segments separated by a dash, got {}",
                parts.len()
            ),
        }),
    }
}

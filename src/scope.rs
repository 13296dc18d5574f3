//! # PRN Scope Hierarchy
//!
//! This module defines the ordered hierarchy of scopes a Pipeline Reference
//! Number (PRN) can be truncated or validated at. The five ladder scopes are,
//! from shallowest to deepest:
//!
//! 1. `portfolio`
//! 2. `app`
//! 3. `branch`
//! 4. `build`
//! 5. `component`
//!
//! A scope's *rank* is the number of hierarchy fields that are significant at
//! that scope. Because `Scope` derives `Ord` in declaration order, scope
//! comparisons are type-checked instead of string-compared:
//!
//! ```
//! use core_prn::scope::Scope;
//!
//! assert!(Scope::App < Scope::Build);
//! assert_eq!(Scope::Branch.rank(), 3);
//! assert_eq!(Scope::from_rank(5), Some(Scope::Component));
//! ```
//!
//! The wider platform also uses a handful of scope *names* that are not part
//! of the PRN ladder (`client`, `zone`, `environment`, `shared`, `release`);
//! those are exported as plain string constants because nothing in this crate
//! ranks or truncates by them.

use std::fmt;
use std::str::FromStr;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Scope name for client-level objects (zero PRN segments).
pub const SCOPE_CLIENT: &str = "client";
/// Scope name for zone-level objects (not on the PRN ladder).
pub const SCOPE_ZONE: &str = "zone";
/// Scope name for environment-level objects (not on the PRN ladder).
pub const SCOPE_ENVIRONMENT: &str = "environment";
/// Scope name for shared objects (not on the PRN ladder).
pub const SCOPE_SHARED: &str = "shared";
/// Scope name for release objects (not on the PRN ladder).
pub const SCOPE_RELEASE: &str = "release";

/// One of the five ordered PRN hierarchy levels.
///
/// Declaration order defines the rank ordering, so `Scope::Portfolio <
/// Scope::Component` holds. Serialized (serde and `Display`) as the lowercase
/// scope name.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum Scope {
    /// Business application (root of the hierarchy).
    Portfolio,
    /// Deployment part of the business application.
    App,
    /// Branch of the source-code repository.
    Branch,
    /// Build number or commit id of the deployment.
    Build,
    /// Component part of the deployment.
    Component,
}

impl Scope {
    /// The five ladder scopes in rank order.
    pub const ALL: [Scope; 5] = [
        Scope::Portfolio,
        Scope::App,
        Scope::Branch,
        Scope::Build,
        Scope::Component,
    ];

    /// The number of hierarchy fields significant at this scope (1..=5).
    pub fn rank(self) -> u8 {
        match self {
            Scope::Portfolio => 1,
            Scope::App => 2,
            Scope::Branch => 3,
            Scope::Build => 4,
            Scope::Component => 5,
        }
    }

    /// Look up a scope by its rank. Ranks outside 1..=5 yield `None`.
    pub fn from_rank(rank: u8) -> Option<Scope> {
        match rank {
            1 => Some(Scope::Portfolio),
            2 => Some(Scope::App),
            3 => Some(Scope::Branch),
            4 => Some(Scope::Build),
            5 => Some(Scope::Component),
            _ => None,
        }
    }

    /// The lowercase scope name used on the wire and in stored payloads.
    pub fn as_str(self) -> &'static str {
        match self {
            Scope::Portfolio => "portfolio",
            Scope::App => "app",
            Scope::Branch => "branch",
            Scope::Build => "build",
            Scope::Component => "component",
        }
    }
}

impl fmt::Display for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Scope {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "portfolio" => Ok(Scope::Portfolio),
            "app" => Ok(Scope::App),
            "branch" => Ok(Scope::Branch),
            "build" => Ok(Scope::Build),
            "component" => Ok(Scope::Component),
            other => Err(Error::UnknownScope {
                value: other.to_string(),
            }),
        }
    }
}

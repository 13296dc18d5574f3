//! # Core PRN Library
//!
//! This library implements the Pipeline Reference Number (PRN) subsystem of
//! the deployment-automation platform: the hierarchical, colon-delimited
//! identifier (`prn:portfolio:app:branch:build:component`) that uniquely
//! names every object the platform manages, at five nested scopes.
//!
//! ## Quick Example
//!
//! ```
//! use core_prn::prn::{extract_at, Prn};
//! use core_prn::scope::Scope;
//! use core_prn::validate::is_valid;
//!
//! // Parse a component-level PRN
//! let prn = Prn::parse("prn:acme:web:main:42:api");
//! assert_eq!(prn.portfolio(), Some("acme"));
//! assert_eq!(prn.scope(), Some(Scope::Component));
//!
//! // Derive the branch-level identifier from it
//! assert_eq!(extract_at("prn:acme:web:main:42:api", Scope::Branch), "acme:web:main");
//!
//! // Validate before trusting it for business decisions
//! assert!(is_valid("prn:acme:web", Scope::App));
//! assert!(!is_valid("prn:acme:web", Scope::Build));
//! ```
//!
//! ## Core Concepts
//!
//! - **Scope (`scope`)**: the ordered, closed enumeration of the five
//!   hierarchy levels (portfolio < app < branch < build < component), plus
//!   the out-of-ladder scope names used by the wider platform.
//! - **Identifier (`prn`)**: the `Prn` value type with its total parser, its
//!   scope-truncating generator (colon and hyphen serializations), and the
//!   scope extractor composed from the two.
//! - **Validation (`validate`)**: total per-scope predicates over candidate
//!   PRN strings; the gate callers apply before trusting parsed or generated
//!   identifiers.
//! - **Slug normalization (`slug`)**: the safe-segment normalizer applied to
//!   branch names before they enter a PRN.
//! - **Minting (`mint`)**: composition of new PRNs from the identifier
//!   material carried by API requests and task payloads.
//! - **Legacy decomposition (`legacy`)**: the deprecated hyphen-based
//!   portfolio split, kept only for data produced under the old naming
//!   convention.
//!
//! Every operation is a pure, synchronous function of its inputs: no shared
//! state, no I/O, safe to call concurrently from any number of threads.
//! Consumers outside this crate (bucket-name builders, ARN builders, tagging)
//! treat the generated strings as opaque, already-sanitized values.

pub mod error;
pub mod legacy;
pub mod mint;
pub mod prn;
pub mod scope;
pub mod slug;
pub mod validate;

#[cfg(test)]
mod prn_proptest;

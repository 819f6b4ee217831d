//! Access control for generated documents.
//!
//! Every download request passes through an ordered chain of checks before a
//! document is rendered. Each check inspects an [`AccessContext`] and returns
//! a [`Decision`]; the first non-`Continue` decision wins and later checks
//! never run. Identity and time are injected through the context, so the
//! chain is deterministic under test.

pub mod conditional;
pub mod error;
pub mod identity;
pub mod middleware;

pub use conditional::rules_met;
pub use error::{AccessError, Decision};
pub use identity::{IdentityProvider, Visitor};
pub use middleware::{AccessChain, AccessCheck, AccessContext, AccessPolicy};

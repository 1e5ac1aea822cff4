//! Reconciliation of a source export against a target's external users
//!
//! Decides which exported accounts still have to be registered as
//! external users in the target instance.

mod engine;
mod result;

pub use engine::{compute_worklist, is_sso_login, SSO_LOGIN_SUFFIX};
pub use result::{CreationCandidate, Worklist};

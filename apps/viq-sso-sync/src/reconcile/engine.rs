//! Worklist computation
//!
//! Pure over its two inputs: the same sheet and the same external-user
//! listing always give the same worklist.

use std::collections::HashSet;

use crate::models::{ExternalUserRecord, UserRecord};

use super::result::{CreationCandidate, Worklist};

/// Suffix the platform appends to login names of SSO-provisioned accounts
pub const SSO_LOGIN_SUFFIX: &str = "@saml.login";

/// Whether a login name belongs to an SSO-provisioned account
pub fn is_sso_login(login_name: &str) -> bool {
    login_name.ends_with(SSO_LOGIN_SUFFIX)
}

/// Compute which source rows must be created as external users.
///
/// 1. Rows whose `home_instance_id` matches an external user's grantee id
///    in the target are already provisioned and excluded.
/// 2. Of the rest, only SSO logins are kept. Local-only logins are dropped
///    without error; they are never pushed to another instance.
/// 3. Survivors are reduced to login name and role, in source order.
///
/// Duplicate source rows are not collapsed.
pub fn compute_worklist(source: &[UserRecord], target: &[ExternalUserRecord]) -> Worklist {
    let provisioned: HashSet<i64> = target.iter().map(|u| u.home_instance_id).collect();

    let mut worklist = Worklist::default();
    for record in source {
        if provisioned.contains(&record.home_instance_id) {
            worklist.already_external += 1;
        } else if is_sso_login(&record.login_name) {
            worklist.candidates.push(CreationCandidate::new(
                record.login_name.as_str(),
                record.user_role.as_str(),
            ));
        } else {
            worklist.skipped_local += 1;
        }
    }

    worklist
}

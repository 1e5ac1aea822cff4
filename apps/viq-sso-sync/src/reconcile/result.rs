//! Worklist produced by reconciliation

use crate::models::CreateExternalUserRequest;

/// One external user to create in the target instance
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreationCandidate {
    pub login_name: String,
    pub user_role: String,
}

impl CreationCandidate {
    pub fn new(login_name: impl Into<String>, user_role: impl Into<String>) -> Self {
        Self {
            login_name: login_name.into(),
            user_role: user_role.into(),
        }
    }

    /// Request body that registers this candidate
    pub fn to_request(&self) -> CreateExternalUserRequest {
        CreateExternalUserRequest::new(self.login_name.clone(), self.user_role.clone())
    }
}

/// Ordered creation candidates plus counts of what was left out
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Worklist {
    /// Candidates in sheet order
    pub candidates: Vec<CreationCandidate>,
    /// Source rows whose id is already an external user in the target
    pub already_external: usize,
    /// Unmatched source rows dropped because they are local-only logins
    pub skipped_local: usize,
}

impl Worklist {
    /// Nothing to create in the target
    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }

    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, CreationCandidate> {
        self.candidates.iter()
    }
}

impl<'a> IntoIterator for &'a Worklist {
    type Item = &'a CreationCandidate;
    type IntoIter = std::slice::Iter<'a, CreationCandidate>;

    fn into_iter(self) -> Self::IntoIter {
        self.candidates.iter()
    }
}

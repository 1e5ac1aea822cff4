//! Account-level lookups for the instance behind the current token

use serde::{Deserialize, Serialize};

/// `GET /account/home`: shown to the operator to confirm the target VIQ
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InstanceIdentity {
    pub name: String,
    pub data_center: String,
}

impl std::fmt::Display for InstanceIdentity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "VIQ Name: {}, RDC Name: {}", self.name, self.data_center)
    }
}

/// `GET /account/viq`: group and owner identifiers stamped onto exported rows
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct InstanceOwnership {
    pub vhm_id: String,
    pub owner_id: i64,
}

//! User data models: API responses and the exported sheet row

use serde::{Deserialize, Serialize};

use super::InstanceIdentity;
use super::InstanceOwnership;

/// One page of a paginated listing
#[derive(Debug, Deserialize)]
pub struct Page<T> {
    pub page: u32,
    pub total_pages: u32,
    #[serde(default = "Vec::new")]
    pub data: Vec<T>,
}

/// Error payload carried by non-200 responses
#[derive(Debug, Default, Deserialize)]
pub struct ApiErrorBody {
    #[serde(default)]
    pub error_message: Option<String>,
}

/// Row of `GET /users`
#[derive(Debug, Clone, Deserialize)]
pub struct UserResponse {
    pub id: i64,
    pub login_name: String,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub display_name: Option<String>,
    pub user_role: String,
}

/// Row of `GET /users/external`
#[derive(Debug, Clone, Deserialize)]
pub struct ExternalUserResponse {
    pub id: i64,
    /// Id of the user in its home instance
    pub grantee_id: i64,
    pub login_name: String,
    pub user_role: String,
}

/// Body of `POST /users/external`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CreateExternalUserRequest {
    pub login_name: String,
    pub user_role: String,
    pub org_id: i64,
    pub location_ids: Vec<i64>,
}

impl CreateExternalUserRequest {
    /// Request scoped to the default organization with no location limits
    pub fn new(login_name: impl Into<String>, user_role: impl Into<String>) -> Self {
        Self {
            login_name: login_name.into(),
            user_role: user_role.into(),
            org_id: 0,
            location_ids: Vec::new(),
        }
    }
}

/// Exported account user; one row of the sheet
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    #[serde(rename = "Home VIQ ID")]
    pub home_instance_id: i64,
    #[serde(rename = "LOGIN NAME")]
    pub login_name: String,
    #[serde(rename = "FIRST NAME", default)]
    pub first_name: String,
    #[serde(rename = "LAST NAME", default)]
    pub last_name: String,
    #[serde(rename = "DISPLAY NAME", default)]
    pub display_name: String,
    #[serde(rename = "USER ROLE")]
    pub user_role: String,
    #[serde(rename = "VHM ID", default)]
    pub vhm_id: String,
    #[serde(rename = "OWNER ID", default)]
    pub owner_id: String,
    #[serde(rename = "VIQ NAME", default)]
    pub instance_name: String,
}

impl UserRecord {
    /// Sheet column headers, in file order
    pub const HEADERS: [&'static str; 9] = [
        "Home VIQ ID",
        "LOGIN NAME",
        "FIRST NAME",
        "LAST NAME",
        "DISPLAY NAME",
        "USER ROLE",
        "VHM ID",
        "OWNER ID",
        "VIQ NAME",
    ];

    /// Build a sheet row from an API user and the instance it was read from
    pub fn from_api(
        user: UserResponse,
        ownership: &InstanceOwnership,
        identity: &InstanceIdentity,
    ) -> Self {
        Self {
            home_instance_id: user.id,
            login_name: user.login_name,
            first_name: user.first_name.unwrap_or_default(),
            last_name: user.last_name.unwrap_or_default(),
            display_name: user.display_name.unwrap_or_default(),
            user_role: user.user_role,
            vhm_id: ownership.vhm_id.clone(),
            owner_id: ownership.owner_id.to_string(),
            instance_name: identity.name.clone(),
        }
    }
}

/// External user already present in the target instance
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExternalUserRecord {
    /// The grantee id, i.e. the user's id in its home instance
    pub home_instance_id: i64,
    pub external_record_id: i64,
    pub login_name: String,
    pub user_role: String,
}

impl From<ExternalUserResponse> for ExternalUserRecord {
    fn from(user: ExternalUserResponse) -> Self {
        Self {
            home_instance_id: user.grantee_id,
            external_record_id: user.id,
            login_name: user.login_name,
            user_role: user.user_role,
        }
    }
}

//! Login request and response bodies

use serde::{Deserialize, Serialize};

/// Body of `POST /login`
#[derive(Debug, Serialize)]
pub struct LoginRequest<'a> {
    pub username: &'a str,
    pub password: &'a str,
}

/// Response of `POST /login`; the token is optional so a 200 without one
/// can be reported as an authentication failure instead of a decode error
#[derive(Debug, Deserialize)]
pub struct LoginResponse {
    #[serde(default)]
    pub access_token: Option<String>,
}

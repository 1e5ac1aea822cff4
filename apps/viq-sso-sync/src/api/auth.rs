//! Login against the platform API

use crate::api::ApiClient;
use crate::error::{CliError, CliResult};
use crate::models::{LoginRequest, LoginResponse};

impl ApiClient {
    /// Exchange operator credentials for a bearer token and attach it to
    /// this client for all subsequent calls
    pub async fn authenticate(&mut self, username: &str, password: &str) -> CliResult<()> {
        let url = self.config().endpoint("/login");
        let body = LoginRequest { username, password };

        let response = self.post_json_unauthenticated(&url, &body).await?;

        if !response.is_ok() {
            let mut message = format!(
                "Error getting access token - HTTP Status Code: {}",
                response.status.as_u16()
            );
            if let Some(detail) = response
                .json::<crate::models::ApiErrorBody>()
                .ok()
                .and_then(|b| b.error_message)
            {
                message.push_str(&format!("\n\t{detail}"));
            }
            return Err(CliError::AuthenticationFailed(message));
        }

        let login: LoginResponse = response.json().map_err(|_| {
            CliError::AuthenticationFailed("Unable to gain access token".to_string())
        })?;

        match login.access_token.filter(|t| !t.is_empty()) {
            Some(token) => {
                self.set_token(token);
                Ok(())
            }
            None => Err(CliError::AuthenticationFailed(
                "Unable to gain access token".to_string(),
            )),
        }
    }
}

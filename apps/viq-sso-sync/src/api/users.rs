//! Account user and external user endpoints

use crate::api::ApiClient;
use crate::error::CliResult;
use crate::models::{
    CreateExternalUserRequest, ExternalUserRecord, ExternalUserResponse, UserRecord, UserResponse,
};
use crate::verbose_ctx;

impl ApiClient {
    /// Every local account user of the instance, stamped with the
    /// instance's VHM id, owner id and name
    pub async fn fetch_all_account_users(&self) -> CliResult<Vec<UserRecord>> {
        let ownership = self.fetch_instance_ownership().await?;
        let identity = self.fetch_instance_identity().await?;
        verbose_ctx!(
            "export",
            "Collecting users of {} ({})",
            identity.name,
            ownership.vhm_id
        );

        let users: Vec<UserResponse> = self
            .fetch_all_pages("/users", "VIQ Local User Accounts")
            .await?;

        Ok(users
            .into_iter()
            .map(|user| UserRecord::from_api(user, &ownership, &identity))
            .collect())
    }

    /// Every external user registered in the instance
    pub async fn fetch_all_external_users(&self) -> CliResult<Vec<ExternalUserRecord>> {
        let users: Vec<ExternalUserResponse> = self
            .fetch_all_pages("/users/external", "External VIQ User Accounts")
            .await?;

        Ok(users.into_iter().map(ExternalUserRecord::from).collect())
    }

    /// Register one external user in the default organization.
    ///
    /// Non-200 responses come back as `CliError::Api` carrying the
    /// server's `error_message`.
    pub async fn create_external_user(&self, request: &CreateExternalUserRequest) -> CliResult<()> {
        let url = self.config().endpoint("/users/external");
        let response = self.post_json(&url, request).await?;

        if response.is_ok() {
            Ok(())
        } else {
            Err(response.into_error())
        }
    }
}

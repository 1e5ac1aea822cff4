//! Instance identity lookups

use crate::api::ApiClient;
use crate::error::CliResult;
use crate::models::{InstanceIdentity, InstanceOwnership};

impl ApiClient {
    /// Name and data center of the instance behind the current token
    pub async fn fetch_instance_identity(&self) -> CliResult<InstanceIdentity> {
        let url = self.config().endpoint("/account/home");
        let response = self.get_authenticated(&url).await?;

        if response.is_ok() {
            response.json()
        } else {
            Err(response.into_error())
        }
    }

    /// VHM and owner identifiers of the instance behind the current token
    pub async fn fetch_instance_ownership(&self) -> CliResult<InstanceOwnership> {
        let url = self.config().endpoint("/account/viq");
        let response = self.get_authenticated(&url).await?;

        if response.is_ok() {
            response.json()
        } else {
            Err(response.into_error())
        }
    }
}

//! Export and import workflows

pub mod export;
pub mod import;

use crate::api::ApiClient;
use crate::config::Config;
use crate::error::CliResult;
use crate::interactive::Credentials;
use crate::models::UserRecord;
use crate::output::{print_notice, render_user_records};
use crate::store::SheetStore;

/// Build a fresh client for one workflow and log in with it.
pub async fn login(config: &Config, credentials: &Credentials) -> CliResult<ApiClient> {
    credentials.validate()?;
    let mut client = ApiClient::new(config.clone())?;
    client
        .authenticate(&credentials.username, &credentials.password)
        .await?;
    Ok(client)
}

/// Print the current sheet contents under an orange title
pub(crate) fn show_sheet(store: &SheetStore) -> CliResult<Vec<UserRecord>> {
    let records = store.read_all()?;
    print_notice(&format!("\n{} - File contents: ", store.path().display()));
    println!("{}", render_user_records(&records));
    println!();
    Ok(records)
}

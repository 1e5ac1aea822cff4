//! Export the account users of a source instance to the sheet

use crate::api::ApiClient;
use crate::config::Config;
use crate::controller::StepResult;
use crate::error::CliResult;
use crate::interactive::{prompt_credentials, ExportChoice};
use crate::models::{InstanceIdentity, UserRecord};
use crate::output::{print_error, print_success, render_user_records};
use crate::store::{SheetStore, WriteMode};
use crate::verbose_ctx;

use super::{login, show_sheet};

/// Execute the export workflow
pub async fn execute(config: &Config, store: &SheetStore) -> CliResult<StepResult> {
    let credentials = prompt_credentials()?;
    let client = login(config, &credentials).await?;

    let (_, users) = fetch_source_users(&client).await?;
    print_success("\nExtracted VIQ User Accounts ready for export:");
    println!("{}", render_user_records(&users));

    show_sheet(store)?;

    let mode = match ExportChoice::prompt()? {
        ExportChoice::Quit => {
            print_error(&format!(
                "\nCancelled... file was not altered: {}",
                store.path().display()
            ));
            show_sheet(store)?;
            return Ok(StepResult::Exit);
        }
        ExportChoice::Overwrite => WriteMode::Overwrite,
        ExportChoice::Append => WriteMode::Append,
    };

    persist(store, mode, &users)?;
    show_sheet(store)?;
    Ok(StepResult::Continue)
}

/// Look up and show the instance identity, then fetch every account user.
///
/// Any fetch failure abandons the whole export so a partial user list is
/// never written.
pub async fn fetch_source_users(
    client: &ApiClient,
) -> CliResult<(InstanceIdentity, Vec<UserRecord>)> {
    let identity = client.fetch_instance_identity().await?;
    print_success(&format!("\n{identity}"));

    let users = client.fetch_all_account_users().await?;
    verbose_ctx!("export", "Fetched {} users from {}", users.len(), identity.name);
    Ok((identity, users))
}

/// Write the exported users and report how the sheet changed
pub fn persist(store: &SheetStore, mode: WriteMode, users: &[UserRecord]) -> CliResult<()> {
    store.write(mode, users)?;
    print_success(&format!(
        "Sheet file has been {mode} with the VIQ's account users: {}",
        store.path().display()
    ));
    Ok(())
}

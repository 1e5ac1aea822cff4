//! Interactive prompts for the menu-driven workflows.

pub mod menu;
pub mod prompts;

pub use menu::{ExportChoice, MainChoice};
pub use prompts::*;

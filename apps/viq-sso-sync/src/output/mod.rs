//! Terminal output helpers

mod printer;
pub mod table;

pub use printer::{
    print_error, print_header, print_info, print_key_value, print_notice, print_progress,
    print_success,
};
pub use table::{render_external_users, render_user_records, truncate};

//! Tabular store for exported user accounts
//!
//! The sheet is a single CSV file whose header row matches
//! [`UserRecord::HEADERS`](crate::models::UserRecord::HEADERS). It is the
//! only durable state of the tool and is trusted as-is on read.

mod sheet;

pub use sheet::{read_records, write_records, SheetStore, WriteMode};

//! Remote user directory client for the ExtremeCloud IQ API

mod account;
mod auth;
mod client;
mod pagination;
mod users;

pub use client::{ApiClient, ApiResponse};
pub use pagination::PageCursor;

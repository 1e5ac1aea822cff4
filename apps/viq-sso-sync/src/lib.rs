//! viq-sso-sync library
//!
//! Copies SSO user accounts from one ExtremeCloud IQ instance into others as
//! external users. The binary in `main.rs` is a thin wrapper around
//! [`controller::Controller`]; the modules are public so integration tests
//! can drive the workflows against a mock server.

pub mod api;
pub mod batch;
pub mod commands;
pub mod config;
pub mod controller;
pub mod error;
pub mod interactive;
pub mod logging;
pub mod models;
pub mod output;
pub mod reconcile;
pub mod store;

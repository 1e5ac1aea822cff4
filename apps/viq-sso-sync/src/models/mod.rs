//! Wire and record types

pub mod account;
pub mod auth;
pub mod user;

pub use account::{InstanceIdentity, InstanceOwnership};
pub use auth::{LoginRequest, LoginResponse};
pub use user::{
    ApiErrorBody, CreateExternalUserRequest, ExternalUserRecord, ExternalUserResponse, Page,
    UserRecord, UserResponse,
};

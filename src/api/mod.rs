//! Client for the remote user-count endpoint.
//!
//! One resource: `GET <base-url>/totalUser`, answering
//! `{"status": "...", "total_users": N}`. Each call performs a single
//! request; missing body fields decode to their defaults rather than
//! failing.

mod client;
mod error;
mod types;

pub use client::{ApiClient, DEFAULT_BASE_URL};
pub use error::ApiError;
pub use types::UserCountResponse;

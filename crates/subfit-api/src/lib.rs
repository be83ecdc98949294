//! Async client for the subtitle search API.
//!
//! The client only moves bytes and JSON; ranking downloaded candidates and
//! resolving multi-file archives live in `subfit-core`.

pub mod client;
pub mod error;
pub mod types;

pub use client::SubsClient;
pub use error::ApiError;
pub use types::{AuthMethod, QuotaInfo, SearchField};

//! Core components of the `cryptocompare-rs` client.
//!
//! This module contains the foundational building blocks of the library:
//! - The main [`CcClient`] and its builder.
//! - The primary [`CcError`] type.
//! - The query-string builder and the [`Params`] optional-parameter bag.
//! - The static endpoint table and the networking path shared by every
//!   operation.

/// The main client (`CcClient`), builder, and configuration.
pub mod client;
/// The primary error type (`CcError`) for the crate.
pub mod error;
/// Caller-side helpers for interpreting resolved documents.
pub mod models;
/// The optional-parameter bag and URL construction.
pub mod query;

pub(crate) mod endpoint;
pub(crate) mod net;

// convenient re-exports so most code can just `use crate::core::CcClient`
pub use client::{CcClient, CcClientBuilder};
pub use error::CcError;
pub use models::ServiceStatus;
pub use query::{ParamValue, Params};

//! Core components of the `news-sentiment` client.
//!
//! This module contains the foundational building blocks of the library:
//! - The [`NsClient`] and its builder.
//! - The [`NsError`] type and its user-facing [`ErrorKind`] taxonomy.
//! - Internal networking helpers.

/// The client (`NsClient`), builder, and default endpoints.
pub mod client;
/// The primary error type (`NsError`) for the crate.
pub mod error;

#[cfg(feature = "test-mode")]
pub(crate) mod fixtures;

pub(crate) mod net;

// convenient re-exports so most code can just `use crate::core::NsClient`
pub use client::{NsClient, NsClientBuilder};
pub use error::{ErrorKind, NsError};

//! Core components of the `newswire-rs` client.
//!
//! This module contains the foundational building blocks of the library:
//! - The main [`NewsClient`] and its builder.
//! - The primary [`NewsError`] type.

/// The main client (`NewsClient`), builder, and configuration.
pub mod client;
/// The primary error type (`NewsError`) for the crate.
pub mod error;

pub use client::{NewsClient, NewsClientBuilder};
pub use error::NewsError;

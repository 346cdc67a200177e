// SPDX-License-Identifier: Apache-2.0

//! GitHub API surface: one configured client, the migration resolver, and
//! the unlock call in its two wire flavors.

pub mod client;
pub mod error;
pub mod migrations;
pub mod types;
pub mod unlock;

pub use client::{GhClient, GhConfig, UnlockTransport};
pub use error::GhError;

// SPDX-License-Identifier: Apache-2.0

use anyhow::Result;
use async_trait::async_trait;

use crate::github::GhClient;

pub mod unlock;

// Re-export command structs for CLI usage
pub use unlock::UnlockCmd;

/// Trait for all runnable commands.
///
/// The configured API client is built once in main and injected here, so
/// commands never touch the environment themselves.
#[async_trait]
pub trait Runnable {
    async fn run(&self, client: &GhClient) -> Result<()>;
}

// SPDX-License-Identifier: Apache-2.0

use anyhow::Result;
use async_trait::async_trait;
use clap::Args;
use clap::builder::NonEmptyStringValueParser;

use crate::{
    cli::atomic::should_dry_run,
    commands::Runnable,
    github::{
        GhClient, UnlockTransport, migrations::resolve_migration_id, types::UnlockRequest,
        unlock::unlock_repo,
    },
    util::logging::{LogLevel, print_log},
};

#[derive(Debug, Args)]
pub struct UnlockCmd {
    /// Organization that owns the locked repository.
    #[arg(short, long, value_parser = NonEmptyStringValueParser::new())]
    org: String,

    /// Repository to release.
    #[arg(short, long, value_parser = NonEmptyStringValueParser::new())]
    repo: String,

    /// Send the unlock as the GraphQL mutation instead of the REST delete.
    #[arg(long)]
    graphql: bool,
}

impl UnlockCmd {
    /// Which wire binding the flags ask for.
    pub fn transport(&self) -> UnlockTransport {
        if self.graphql {
            UnlockTransport::GraphQl
        } else {
            UnlockTransport::Rest
        }
    }
}

#[async_trait]
impl Runnable for UnlockCmd {
    async fn run(&self, client: &GhClient) -> Result<()> {
        print_log(
            LogLevel::Info,
            &format!(
                "Resolving the migration holding the lock on {}/{}...",
                self.org, self.repo
            ),
        );

        let migration_id = resolve_migration_id(client, &self.org, &self.repo).await?;

        if should_dry_run() {
            print_log(
                LogLevel::Dry,
                &format!(
                    "Would unlock {}/{} through migration {migration_id}.",
                    self.org, self.repo
                ),
            );
            return Ok(());
        }

        let request = UnlockRequest {
            migration_id,
            org: self.org.clone(),
            repo: self.repo.clone(),
        };
        let result = unlock_repo(client, &request).await?;

        print_log(
            LogLevel::Unlocked,
            &format!(
                "Unlocked {}/{} (migration {}, status {}).",
                request.org, request.repo, request.migration_id, result.status_code
            ),
        );

        Ok(())
    }
}

// SPDX-License-Identifier: Apache-2.0

use std::process::exit;

use clap::Parser;
use unlatch::cli::Args;
use unlatch::cli::atomic::{set_dry_run, set_quiet, set_verbose};
use unlatch::commands::Runnable;
use unlatch::github::{GhClient, GhConfig};
use unlatch::log;
use unlatch::util::logging::LogLevel;

#[tokio::main(flavor = "multi_thread")]
async fn main() {
    let args = Args::parse();

    // set some of them atomically
    // (described why in cli/atomic.rs)
    set_quiet(args.quiet);
    set_verbose(args.verbose);
    set_dry_run(args.dry_run);

    // credential and host resolution happen exactly once, before any call
    let config = match GhConfig::from_env(args.unlock.transport()) {
        Ok(config) => config,
        Err(err) => {
            log!(LogLevel::Error, "{err}");
            exit(1);
        }
    };
    let client = match GhClient::new(config) {
        Ok(client) => client,
        Err(err) => {
            log!(LogLevel::Error, "{err}");
            exit(1);
        }
    };

    let runnable: &dyn Runnable = &args.unlock;
    let result = runnable.run(&client).await;

    if let Err(err) = result {
        log!(LogLevel::Error, "{err}");
        exit(1);
    }
}

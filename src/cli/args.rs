// SPDX-License-Identifier: Apache-2.0

use clap::Parser;

use super::get_styles;
use crate::commands::UnlockCmd;

#[derive(Parser)]
#[command(name = "unlatch", styles = get_styles(), version, about)]
pub struct Args {
    #[command(flatten)]
    pub unlock: UnlockCmd,

    /// Increase output verbosity.
    #[arg(short, long)]
    pub verbose: bool,

    /// Suppress all output except errors/warnings.
    #[arg(long)]
    pub quiet: bool,

    /// Resolve the owning migration but stop before the unlock call.
    #[arg(long)]
    pub dry_run: bool,
}

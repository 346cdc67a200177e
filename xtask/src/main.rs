// SPDX-License-Identifier: Apache-2.0

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::CommandFactory;
use unlatch::cli::Args;

fn main() -> Result<()> {
    let task = std::env::args().nth(1);
    match task.as_deref() {
        Some("man") => generate_man(),
        Some(other) => bail!("unknown task: {other}"),
        None => bail!("usage: cargo xtask man"),
    }
}

/// Render the manpage into man/man1/unlatch.1.
fn generate_man() -> Result<()> {
    let out_dir = PathBuf::from("man/man1");
    fs::create_dir_all(&out_dir).context("failed to create man/man1")?;

    let cmd = Args::command();
    let man = clap_mangen::Man::new(cmd);

    let mut buffer: Vec<u8> = Vec::new();
    man.render(&mut buffer)
        .context("failed to render manpage")?;

    let out_path = out_dir.join("unlatch.1");
    fs::write(&out_path, buffer)
        .with_context(|| format!("failed to write {}", out_path.display()))?;

    println!("wrote {}", out_path.display());
    Ok(())
}

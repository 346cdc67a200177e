// SPDX-License-Identifier: Apache-2.0

use std::sync::atomic::{AtomicBool, Ordering};

/*
 * Mirrors of the global CLI arguments, stored once in main() before any
 * real work starts and read-only afterwards.
 *
 * They let deeper code (the logger, mostly) check presentation flags
 * without threading them through every call.
 */

// --quiet
static QUIET: AtomicBool = AtomicBool::new(false);

pub fn set_quiet(value: bool) {
    QUIET.store(value, Ordering::SeqCst);
}

pub fn should_be_quiet() -> bool {
    QUIET.load(Ordering::SeqCst)
}

// --verbose
static VERBOSE: AtomicBool = AtomicBool::new(false);

pub fn set_verbose(value: bool) {
    VERBOSE.store(value, Ordering::SeqCst);
}

pub fn should_be_verbose() -> bool {
    VERBOSE.load(Ordering::SeqCst)
}

// --dry-run
static DRY_RUN: AtomicBool = AtomicBool::new(false);

pub fn set_dry_run(value: bool) {
    DRY_RUN.store(value, Ordering::SeqCst);
}

pub fn should_dry_run() -> bool {
    DRY_RUN.load(Ordering::SeqCst)
}

// SPDX-License-Identifier: Apache-2.0

pub mod cli;
pub mod commands;
pub mod github;
pub mod util;

// SPDX-License-Identifier: Apache-2.0

pub mod args;
pub mod atomic;
pub mod style;

pub use args::Args;
pub use style::get_styles;

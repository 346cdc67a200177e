// SPDX-License-Identifier: Apache-2.0

use anstyle::{AnsiColor, Color::Ansi, Effects, Style};

/// Style attributes for the unlatch CLI.
pub fn get_styles() -> clap::builder::Styles {
    clap::builder::Styles::styled()
        .usage(Style::new().effects(Effects::UNDERLINE).bold())
        .header(Style::new().effects(Effects::UNDERLINE).bold())
        .literal(Style::new().bold().fg_color(Some(Ansi(AnsiColor::Cyan))))
        .invalid(Style::new().bold().fg_color(Some(Ansi(AnsiColor::Red))))
        .error(Style::new().bold().fg_color(Some(Ansi(AnsiColor::Red))))
        .valid(Style::new().bold().fg_color(Some(Ansi(AnsiColor::Green))))
        .placeholder(Style::new().fg_color(Some(Ansi(AnsiColor::White))))
}

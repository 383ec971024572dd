//! CLI definitions using clap derive API

use clap::Parser;
use clap::builder::{Styles, styling::AnsiColor};
use std::path::PathBuf;

/// tapfresh - what's new in your taps
///
/// Reports formulae and casks recently added to or updated in the Homebrew
/// taps, with markers for packages you already have installed or looked up.
#[derive(Parser, Debug)]
#[command(
    name = "tapfresh",
    author,
    version,
    color = clap::ColorChoice::Always,
    styles = Styles::styled()
        .header(AnsiColor::Green.on_default().bold())
        .usage(AnsiColor::Green.on_default().bold())
        .literal(AnsiColor::Cyan.on_default().bold())
        .placeholder(AnsiColor::Cyan.on_default()),
    about = "Report recently added and updated Homebrew formulae and casks",
    long_about = "tapfresh walks the git history of the Homebrew core and cask taps and \
                  prints the packages added or updated within a day window as a \
                  column-formatted listing. Installed packages are highlighted and \
                  packages you already looked up are dimmed or hidden.",
    after_help = "\x1b[1m\x1b[32mExamples:\x1b[0m\n    \
                  tapfresh\n    \
                  tapfresh --days 14\n    \
                  tapfresh --only-formula --only-new\n    \
                  tapfresh --hide-looked-up --truncate-chars 30\n    \
                  tapfresh --json | jq '.new_formulae[].name'\n\n\
                  \x1b[1m\x1b[32mDocumentation:\x1b[0m\n    \
                  https://github.com/asyrjasalo/tapfresh"
)]
pub struct Cli {
    /// Change window in days
    #[arg(long, value_name = "N", default_value_t = 7)]
    pub days: u32,

    /// Truncate displayed names to this many characters
    #[arg(
        long,
        value_name = "N",
        default_value_t = 25,
        value_parser = clap::value_parser!(u16).range(1..)
    )]
    pub truncate_chars: u16,

    /// Report formulae only
    #[arg(long, overrides_with = "only_cask")]
    pub only_formula: bool,

    /// Report casks only
    #[arg(long, overrides_with = "only_formula")]
    pub only_cask: bool,

    /// Report newly added packages only
    #[arg(long, overrides_with = "only_updated")]
    pub only_new: bool,

    /// Report updated packages only
    #[arg(long, overrides_with = "only_new")]
    pub only_updated: bool,

    /// Dim packages you already looked up (default)
    #[arg(long, overrides_with = "no_dim_looked_up")]
    pub dim_looked_up: bool,

    /// Do not dim packages you already looked up
    #[arg(long, overrides_with = "dim_looked_up")]
    pub no_dim_looked_up: bool,

    /// Hide packages you already looked up
    #[arg(long)]
    pub hide_looked_up: bool,

    /// Disable colors (the installed marker is kept)
    #[arg(long)]
    pub no_color: bool,

    /// Fully unstyled output, without markers
    #[arg(long)]
    pub plain: bool,

    /// Looked-up history file (defaults to the user cache directory)
    #[arg(long, value_name = "PATH")]
    pub history_file: Option<PathBuf>,

    /// Emit the report as JSON instead of a column listing
    #[arg(long)]
    pub json: bool,

    /// Generate shell completions and exit (bash, elvish, fish, powershell, zsh)
    #[arg(long, value_name = "SHELL")]
    pub completions: Option<String>,

    /// Enable verbose output
    #[arg(long, short = 'v')]
    pub verbose: bool,
}

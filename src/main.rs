//! tapfresh - what's new in your taps
//!
//! A command line tool that walks the git history of the Homebrew core and
//! cask taps and reports the packages added or updated within a day window,
//! as a column-formatted terminal listing.

use clap::{CommandFactory, Parser};

mod brew;
mod changes;
mod cli;
mod error;
mod history;
mod report;

use cli::Cli;

/// Map a user-supplied shell name to a clap_complete generator
fn shell_from_name(name: &str) -> Option<clap_complete::Shell> {
    match name.to_lowercase().as_str() {
        "bash" => Some(clap_complete::Shell::Bash),
        "elvish" => Some(clap_complete::Shell::Elvish),
        "fish" => Some(clap_complete::Shell::Fish),
        "powershell" | "pwsh" => Some(clap_complete::Shell::PowerShell),
        "zsh" => Some(clap_complete::Shell::Zsh),
        _ => None,
    }
}

fn generate_completions(shell_name: &str) {
    let Some(shell) = shell_from_name(shell_name) else {
        eprintln!("Unknown shell: {shell_name}");
        eprintln!("Supported shells: bash, elvish, fish, powershell, zsh");
        std::process::exit(1);
    };

    let mut cmd = <Cli as CommandFactory>::command();
    clap_complete::generate(shell, &mut cmd, "tapfresh", &mut std::io::stdout().lock());
}

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            // Bad usage exits 1; help and version stay on stdout and exit 0
            let _ = e.print();
            std::process::exit(i32::from(e.use_stderr()));
        }
    };

    // Completions work without Homebrew present
    if let Some(shell) = cli.completions.as_deref() {
        generate_completions(shell);
        return;
    }

    if cli.no_color {
        console::set_colors_enabled(false);
    }

    if let Err(e) = brew::ensure_available() {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }

    let opts = report::ReportOptions::from_cli(&cli);
    if let Err(e) = report::run(&opts) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

//! CLI Adapter.

mod config;
mod install;
mod test;
mod uninstall;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use crate::domain::AppError;

#[derive(Parser)]
#[command(name = "claude-status")]
#[command(version)]
#[command(about = "Install and manage a Claude Code status line on macOS", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Install the status line (default when no command is given)
    Install {
        /// Reinstall without asking when already installed
        #[arg(short, long)]
        force: bool,
        /// Take colors from this configuration file
        #[arg(short, long, value_name = "PATH")]
        config: Option<PathBuf>,
    },
    /// Configure displayed segments and colors
    Config {
        /// Restore the default configuration
        #[arg(short, long)]
        reset: bool,
    },
    /// Check the installation
    Test {
        /// Show details for every check
        #[arg(short, long)]
        verbose: bool,
    },
    /// Remove the status line
    Uninstall {
        /// Keep settings backups without asking
        #[arg(long)]
        keep_backup: bool,
    },
}

/// Entry point for the CLI.
pub fn run() {
    init_tracing();
    install_panic_hook();

    let cli = Cli::parse();

    let result: Result<(), AppError> =
        match cli.command.unwrap_or(Commands::Install { force: false, config: None }) {
            Commands::Install { force, config } => install::run_install(force, config),
            Commands::Config { reset } => config::run_config(reset),
            Commands::Test { verbose } => {
                test::run_test(verbose);
                Ok(())
            }
            Commands::Uninstall { keep_backup } => uninstall::run_uninstall(keep_backup),
        };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Diagnostics go to stderr, filtered by `RUST_LOG` (default `warn`).
fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .compact()
        .try_init()
        .ok();
}

fn install_panic_hook() {
    std::panic::set_hook(Box::new(|info| {
        eprintln!("❌ Unexpected error: {}", info);
        std::process::exit(1);
    }));
}

const RULE: &str = "━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━";

fn print_banner(title: &str) {
    println!();
    println!("{}", RULE);
    println!("{}", title);
    println!("{}", RULE);
    println!();
}

fn print_list(heading: &str, items: &[&str]) {
    println!("{}", heading);
    for (i, item) in items.iter().enumerate() {
        println!("{}. {}", i + 1, item);
    }
    println!();
}

//! quizzer CLI — interactive trivia quiz manager.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

mod commands;
mod console;
mod init;
mod shell;

#[derive(Parser)]
#[command(name = "quizzer", version, about = "Interactive trivia quiz manager")]
struct Cli {
    /// JSON file holding the quizzes
    #[arg(long, global = true)]
    data: Option<PathBuf>,

    /// Config file path
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Seed for the play-order generator
    #[arg(long, global = true)]
    seed: Option<u64>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the interactive shell (default)
    Shell,

    /// Run shell commands non-interactively, then exit
    Exec {
        /// Command lines, e.g. "show 0"
        #[arg(required = true)]
        lines: Vec<String>,
    },

    /// Create a starter quizzer.toml
    Init,
}

fn main() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("quizzer=warn".parse().unwrap()),
        )
        .init();

    let cli = Cli::parse();
    let overrides = shell::Overrides {
        data: cli.data,
        config: cli.config,
        seed: cli.seed,
    };

    let result = match cli.command.unwrap_or(Commands::Shell) {
        Commands::Shell => shell::run_interactive(&overrides),
        Commands::Exec { lines } => shell::run_script(&overrides, &lines),
        Commands::Init => init::execute(),
    };

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

//! The interactive read-dispatch loop and its one-shot `exec` variant.

use std::io;
use std::path::PathBuf;

use anyhow::Result;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::info;

use quizzer_core::config::{load_config_from, QuizzerConfig};
use quizzer_core::QuizRepository;

use crate::commands::{self, Control, Session};
use crate::console::Console;

/// Command-line flags that take precedence over the config file.
#[derive(Debug, Default)]
pub struct Overrides {
    pub data: Option<PathBuf>,
    pub config: Option<PathBuf>,
    pub seed: Option<u64>,
}

fn resolve_config(overrides: &Overrides) -> Result<QuizzerConfig> {
    let mut config = load_config_from(overrides.config.as_deref())?;
    if let Some(data) = &overrides.data {
        config.data_file = data.clone();
    }
    if overrides.seed.is_some() {
        config.seed = overrides.seed;
    }
    Ok(config)
}

fn make_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}

fn open_repository(config: &QuizzerConfig) -> Result<QuizRepository> {
    let repo = QuizRepository::open(&config.data_file)?;
    if let Some(path) = repo.path() {
        info!(path = %path.display(), count = repo.count(), "quiz store ready");
    }
    Ok(repo)
}

/// Prompt for commands until `quit` or end of input.
pub fn run_interactive(overrides: &Overrides) -> Result<()> {
    let config = resolve_config(overrides)?;
    let mut repo = open_repository(&config)?;
    let mut rng = make_rng(config.seed);
    let mut console = Console::new();
    let mut stdout = io::stdout();

    while let Some(line) = console.read_command(&config.prompt)? {
        let mut session = Session {
            repo: &mut repo,
            prompter: &mut console,
            out: &mut stdout,
            rng: &mut rng,
        };
        if commands::dispatch(&mut session, &line)? == Control::Quit {
            break;
        }
    }

    Ok(())
}

/// Run each line as a shell command. Questions asked by the commands are
/// still answered from stdin.
pub fn run_script(overrides: &Overrides, lines: &[String]) -> Result<()> {
    let config = resolve_config(overrides)?;
    let mut repo = open_repository(&config)?;
    let mut rng = make_rng(config.seed);
    let mut console = Console::new();
    let mut stdout = io::stdout();

    for line in lines {
        let mut session = Session {
            repo: &mut repo,
            prompter: &mut console,
            out: &mut stdout,
            rng: &mut rng,
        };
        if commands::dispatch(&mut session, line)? == Control::Quit {
            break;
        }
    }

    Ok(())
}

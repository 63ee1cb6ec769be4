//! Interactive shell commands.
//!
//! Every handler gets a [`Session`] and the raw `<id>` argument, if the
//! command takes one. Recoverable [`QuizError`]s are reported on one line
//! and the shell carries on; anything else aborts.

use std::io::Write;

use anyhow::Result;
use rand::RngCore;

use quizzer_core::traits::Prompter;
use quizzer_core::{QuizError, QuizRepository};

pub mod add;
pub mod credits;
pub mod delete;
pub mod edit;
pub mod help;
pub mod list;
pub mod play;
pub mod show;

/// Everything a command handler works with.
pub struct Session<'a> {
    pub repo: &'a mut QuizRepository,
    pub prompter: &'a mut dyn Prompter,
    pub out: &'a mut dyn Write,
    pub rng: &'a mut dyn RngCore,
}

/// What the shell should do after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    Continue,
    Quit,
}

/// Parse and run one command line.
pub fn dispatch(session: &mut Session<'_>, line: &str) -> Result<Control> {
    let mut words = line.split_whitespace();
    let Some(command) = words.next() else {
        return Ok(Control::Continue);
    };
    let arg = words.next();

    let result = match command.to_lowercase().as_str() {
        "h" | "help" => help::execute(session),
        "list" => list::execute(session),
        "show" => show::execute(session, arg),
        "add" => add::execute(session),
        "delete" => delete::execute(session, arg),
        "edit" => edit::execute(session, arg),
        "test" => test::execute(session, arg),
        "p" | "play" => play::execute(session),
        "credits" => credits::execute(session),
        "q" | "quit" => return Ok(Control::Quit),
        _ => {
            writeln!(session.out, "Unknown command: '{command}'")?;
            writeln!(session.out, "Use 'help' to see all the commands.")?;
            Ok(())
        }
    };

    if let Err(e) = result {
        match e.downcast_ref::<QuizError>() {
            Some(err) if err.is_recoverable() => writeln!(session.out, "Error: {err}")?,
            _ => return Err(e),
        }
    }

    Ok(Control::Continue)
}

#[cfg(test)]
pub(crate) mod testing {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use quizzer_core::mock::ScriptedPrompter;
    use quizzer_core::traits::Prompter;
    use quizzer_core::{Quiz, QuizRepository};

    use super::{dispatch, Control, Session};

    pub fn capitals() -> QuizRepository {
        QuizRepository::in_memory(vec![
            Quiz::new("Capital of Italy", "Rome"),
            Quiz::new("Capital of France", "Paris"),
            Quiz::new("Capital of Spain", "Madrid"),
        ])
    }

    /// Run `line` against `repo`, answering prompts from `prompter`.
    /// Returns the control decision and everything printed.
    pub fn run_with(
        repo: &mut QuizRepository,
        prompter: &mut dyn Prompter,
        line: &str,
    ) -> (Control, String) {
        let mut out = Vec::new();
        let mut rng = StdRng::seed_from_u64(11);
        let mut session = Session {
            repo,
            prompter,
            out: &mut out,
            rng: &mut rng,
        };
        let control = dispatch(&mut session, line).unwrap();
        (control, String::from_utf8(out).unwrap())
    }

    /// Like [`run_with`] with a scripted prompter, returned for inspection.
    pub fn run(
        repo: &mut QuizRepository,
        answers: &[&str],
        line: &str,
    ) -> (String, ScriptedPrompter) {
        let mut prompter = ScriptedPrompter::new(answers.iter().copied());
        let (_, output) = run_with(repo, &mut prompter, line);
        (output, prompter)
    }
}

#[cfg(test)]
mod tests {
    use super::testing::{capitals, run, run_with};
    use super::*;
    use quizzer_core::mock::ScriptedPrompter;

    #[test]
    fn quit_and_aliases_stop_the_shell() {
        let mut repo = capitals();
        let mut prompter = ScriptedPrompter::default();
        assert_eq!(run_with(&mut repo, &mut prompter, "quit").0, Control::Quit);
        assert_eq!(run_with(&mut repo, &mut prompter, "q").0, Control::Quit);
        assert_eq!(run_with(&mut repo, &mut prompter, "QUIT").0, Control::Quit);
    }

    #[test]
    fn blank_line_is_ignored() {
        let mut repo = capitals();
        let mut prompter = ScriptedPrompter::default();
        let (control, output) = run_with(&mut repo, &mut prompter, "   ");
        assert_eq!(control, Control::Continue);
        assert!(output.is_empty());
    }

    #[test]
    fn unknown_command_is_reported() {
        let mut repo = capitals();
        let (output, _) = run(&mut repo, &[], "frobnicate 3");
        assert!(output.contains("Unknown command: 'frobnicate'"));
        assert!(output.contains("help"));
    }

    #[test]
    fn user_errors_are_printed_and_the_shell_continues() {
        let mut repo = capitals();
        let mut prompter = ScriptedPrompter::default();

        let (control, output) = run_with(&mut repo, &mut prompter, "show");
        assert_eq!(control, Control::Continue);
        assert_eq!(output, "Error: missing parameter <id>\n");

        let (_, output) = run_with(&mut repo, &mut prompter, "delete abc");
        assert!(output.starts_with("Error: "));
        assert!(output.contains("not a number"));

        let (_, output) = run_with(&mut repo, &mut prompter, "test 99");
        assert!(output.contains("id=99"));

        let (_, output) = run_with(&mut repo, &mut prompter, "show 99999999999999999999");
        assert_eq!(
            output,
            "Error: the value of parameter <id> is not valid: no quiz with id=99999999999999999999\n"
        );
        assert_eq!(repo.count(), 3);
    }

    #[test]
    fn failed_save_aborts_the_shell() {
        use rand::rngs::StdRng;
        use rand::SeedableRng;

        let dir = tempfile::tempdir().unwrap();
        let store_dir = dir.path().join("store");
        let mut repo = QuizRepository::open(store_dir.join("quizzes.json")).unwrap();

        std::fs::remove_dir_all(&store_dir).unwrap();
        std::fs::write(&store_dir, "not a directory").unwrap();

        let mut prompter = ScriptedPrompter::new(["Capital of Peru", "Lima"]);
        let mut out = Vec::new();
        let mut rng = StdRng::seed_from_u64(0);
        let mut session = Session {
            repo: &mut repo,
            prompter: &mut prompter,
            out: &mut out,
            rng: &mut rng,
        };

        let err = dispatch(&mut session, "add").unwrap_err();
        let quiz_err = err.downcast_ref::<QuizError>().unwrap();
        assert!(matches!(quiz_err, QuizError::Save { .. }));
        assert!(err.to_string().contains("failed to write quizzes"));

        let printed = String::from_utf8(out).unwrap();
        assert!(!printed.contains("Error:"), "unexpected output: {printed}");
        assert!(!printed.contains("[Added"));
    }

    #[test]
    fn closed_input_mid_command_is_recoverable() {
        let mut repo = capitals();
        let (output, _) = run(&mut repo, &["only a question"], "add");
        assert!(output.contains("Error: input aborted"));
        assert_eq!(repo.count(), 3);
    }
}

//! Terminal prompters.
//!
//! On a terminal we read through `rustyline`, which gives line editing,
//! history, and pre-filled answers for `edit`. When stdin is a pipe or file
//! we fall back to a plain buffered reader so scripted input works.

use std::io::{self, BufRead, IsTerminal, StdinLock, Stdout, Write};

use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use tracing::warn;

use quizzer_core::traits::Prompter;
use quizzer_core::QuizError;

/// Prompter over any buffered reader, echoing prompts to a writer.
pub struct PlainReader<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> PlainReader<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }
}

impl<R: BufRead, W: Write> Prompter for PlainReader<R, W> {
    fn ask(&mut self, prompt: &str) -> Result<String, QuizError> {
        write!(self.output, "{prompt}").map_err(|e| QuizError::Input(e.to_string()))?;
        self.output
            .flush()
            .map_err(|e| QuizError::Input(e.to_string()))?;

        let mut line = String::new();
        let read = self
            .input
            .read_line(&mut line)
            .map_err(|e| QuizError::Input(e.to_string()))?;
        if read == 0 {
            return Err(QuizError::InputAborted);
        }
        Ok(line.trim().to_string())
    }
}

/// The prompter the shell runs on.
pub enum Console {
    Editor(Box<DefaultEditor>),
    Plain(PlainReader<StdinLock<'static>, Stdout>),
}

impl Console {
    /// Use the line editor when stdin is a terminal, the plain reader
    /// otherwise.
    pub fn new() -> Self {
        if io::stdin().is_terminal() {
            match DefaultEditor::new() {
                Ok(editor) => return Console::Editor(Box::new(editor)),
                Err(e) => warn!("line editor unavailable, using plain input: {e}"),
            }
        }
        Console::Plain(PlainReader::new(io::stdin().lock(), io::stdout()))
    }

    /// Read one shell command line.
    ///
    /// `Ok(None)` means end of input. Ctrl-C at the prompt yields an empty
    /// line so the shell simply prompts again.
    pub fn read_command(&mut self, prompt: &str) -> Result<Option<String>, QuizError> {
        match self {
            Console::Editor(editor) => match editor.readline(prompt) {
                Ok(line) => {
                    let line = line.trim().to_string();
                    if !line.is_empty() {
                        editor
                            .add_history_entry(line.as_str())
                            .map_err(|e| QuizError::Input(e.to_string()))?;
                    }
                    Ok(Some(line))
                }
                Err(ReadlineError::Eof) => Ok(None),
                Err(ReadlineError::Interrupted) => Ok(Some(String::new())),
                Err(e) => Err(QuizError::Input(e.to_string())),
            },
            Console::Plain(reader) => match reader.ask(prompt) {
                Ok(line) => Ok(Some(line)),
                Err(QuizError::InputAborted) => Ok(None),
                Err(e) => Err(e),
            },
        }
    }
}

fn editor_answer(result: rustyline::Result<String>) -> Result<String, QuizError> {
    match result {
        Ok(line) => Ok(line.trim().to_string()),
        Err(ReadlineError::Eof | ReadlineError::Interrupted) => Err(QuizError::InputAborted),
        Err(e) => Err(QuizError::Input(e.to_string())),
    }
}

impl Prompter for Console {
    fn ask(&mut self, prompt: &str) -> Result<String, QuizError> {
        match self {
            Console::Editor(editor) => editor_answer(editor.readline(prompt)),
            Console::Plain(reader) => reader.ask(prompt),
        }
    }

    fn ask_with_initial(&mut self, prompt: &str, initial: &str) -> Result<String, QuizError> {
        match self {
            Console::Editor(editor) => {
                editor_answer(editor.readline_with_initial(prompt, (initial, "")))
            }
            Console::Plain(reader) => reader.ask(prompt),
        }
    }

    fn is_interactive(&self) -> bool {
        prefill_enabled(
            matches!(self, Console::Editor(_)),
            io::stdout().is_terminal(),
        )
    }
}

/// Pre-fill only applies to a line editor writing to a terminal.
fn prefill_enabled(line_editor: bool, stdout_is_terminal: bool) -> bool {
    line_editor && stdout_is_terminal
}

//! The `help` command.

use anyhow::Result;

use super::Session;

const COMMANDS: &[(&str, &str)] = &[
    ("h|help", "Show this help."),
    ("list", "List the existing quizzes."),
    ("show <id>", "Show the question and answer of the given quiz."),
    ("add", "Add a new quiz interactively."),
    ("delete <id>", "Delete the given quiz."),
    ("edit <id>", "Edit the given quiz."),
    ("test <id>", "Test yourself on the given quiz."),
    ("p|play", "Answer every quiz in random order."),
    ("credits", "Credits."),
    ("q|quit", "Quit the program."),
];

pub fn execute(session: &mut Session<'_>) -> Result<()> {
    writeln!(session.out, "Commands:")?;
    for (usage, summary) in COMMANDS {
        writeln!(session.out, "  {usage} - {summary}")?;
    }
    Ok(())
}

//! The `add` command.

use anyhow::Result;

use quizzer_core::Quiz;

use super::Session;

pub fn execute(session: &mut Session<'_>) -> Result<()> {
    let question = session.prompter.ask("Enter a question: ")?;
    let answer = session.prompter.ask("Enter the answer: ")?;

    let quiz = Quiz::new(&question, &answer);
    quiz.validate()?;

    let id = session.repo.add(&quiz.question, &quiz.answer)?;
    writeln!(session.out, "[Added {id}]: {quiz}")?;
    Ok(())
}

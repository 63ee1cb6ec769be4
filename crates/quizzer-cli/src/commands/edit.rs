//! The `edit <id>` command.
//!
//! On a terminal the current question and answer are typed into the prompt
//! for the user to edit in place.

use anyhow::Result;

use quizzer_core::id::parse_id;
use quizzer_core::Quiz;

use super::Session;

fn ask_prefilled(session: &mut Session<'_>, prompt: &str, current: &str) -> Result<String> {
    let answer = if session.prompter.is_interactive() {
        session.prompter.ask_with_initial(prompt, current)?
    } else {
        session.prompter.ask(prompt)?
    };
    Ok(answer)
}

pub fn execute(session: &mut Session<'_>, arg: Option<&str>) -> Result<()> {
    let id = parse_id(arg)?;
    let current = session.repo.get_by_index(id)?;

    let question = ask_prefilled(session, "Enter the question: ", &current.question)?;
    let answer = ask_prefilled(session, "Enter the answer: ", &current.answer)?;

    let quiz = Quiz::new(&question, &answer);
    quiz.validate()?;

    session.repo.update(id, &quiz.question, &quiz.answer)?;
    writeln!(session.out, "Quiz {id} changed to: {quiz}")?;
    Ok(())
}

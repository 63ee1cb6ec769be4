//! The `quizzer init` command.

use anyhow::Result;

pub fn execute() -> Result<()> {
    if std::path::Path::new("quizzer.toml").exists() {
        println!("quizzer.toml already exists, skipping.");
    } else {
        std::fs::write("quizzer.toml", SAMPLE_CONFIG)?;
        println!("Created quizzer.toml");
    }

    println!("\nNext steps:");
    println!("  1. Edit quizzer.toml to choose where quizzes are stored");
    println!("  2. Run: quizzer");
    println!("  3. Type `help` at the prompt");

    Ok(())
}

const SAMPLE_CONFIG: &str = r#"# quizzer configuration

# JSON file holding the quizzes. Created with a few starter questions
# the first time quizzer runs. ${VAR} references are expanded.
data_file = "quizzes.json"

# Prompt shown by the interactive shell.
prompt = "quiz > "

# Uncomment to make `play` ask questions in a repeatable order.
# seed = 42
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_config_parses() {
        let config: quizzer_core::config::QuizzerConfig = toml::from_str(SAMPLE_CONFIG).unwrap();
        assert_eq!(config.prompt, "quiz > ");
        assert!(config.seed.is_none());
    }
}

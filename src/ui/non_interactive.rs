//! Non-interactive UI for CI/headless environments.

use crate::error::{Result, TrailheadError};

use super::{truthy, OutputMode, Prompt, PromptResult, PromptType, UserInterface};

/// UI implementation for non-interactive mode.
///
/// Prompts never reach a human here. Each one resolves to its default
/// value; a prompt without a default is an error.
pub struct NonInteractiveUI {
    mode: OutputMode,
}

impl NonInteractiveUI {
    /// Create a new non-interactive UI.
    pub fn new(mode: OutputMode) -> Self {
        Self { mode }
    }
}

impl UserInterface for NonInteractiveUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn message(&mut self, msg: &str) {
        if self.mode.shows_status() {
            println!("{}", msg);
        }
    }

    fn success(&mut self, msg: &str) {
        if self.mode.shows_status() {
            println!("✓ {}", msg);
        }
    }

    fn warning(&mut self, msg: &str) {
        if self.mode.shows_status() {
            eprintln!("⚠ {}", msg);
        }
    }

    fn error(&mut self, msg: &str) {
        eprintln!("✗ {}", msg);
    }

    fn skipped(&mut self, msg: &str) {
        if self.mode.shows_status() {
            println!("○ {}", msg);
        }
    }

    fn prompt(&mut self, prompt: &Prompt) -> Result<PromptResult> {
        if let Some(default) = &prompt.default {
            return Ok(match prompt.prompt_type {
                PromptType::Confirm => PromptResult::Bool(truthy(default)),
                PromptType::Input => PromptResult::String(default.clone()),
            });
        }

        Err(TrailheadError::Other(anyhow::anyhow!(
            "Cannot prompt for '{}' in non-interactive mode (no default value)",
            prompt.key
        )))
    }

    fn show_header(&mut self, title: &str) {
        if self.mode.shows_status() {
            println!("\n{}\n", title);
        }
    }

    fn is_interactive(&self) -> bool {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn non_interactive_is_not_interactive() {
        let ui = NonInteractiveUI::new(OutputMode::Normal);
        assert!(!ui.is_interactive());
    }

    #[test]
    fn input_prompt_uses_default() {
        let mut ui = NonInteractiveUI::new(OutputMode::Normal);
        let prompt = Prompt {
            key: "test".to_string(),
            question: "Test?".to_string(),
            prompt_type: PromptType::Input,
            default: Some("default_value".to_string()),
        };

        let result = ui.prompt(&prompt).unwrap();
        assert_eq!(result.as_string(), "default_value");
    }

    #[test]
    fn confirm_prompt_resolves_default_to_bool() {
        let mut ui = NonInteractiveUI::new(OutputMode::Normal);
        let prompt = Prompt {
            key: "overwrite".to_string(),
            question: "Overwrite?".to_string(),
            prompt_type: PromptType::Confirm,
            default: Some("no".to_string()),
        };

        let result = ui.prompt(&prompt).unwrap();
        assert_eq!(result.as_bool(), Some(false));
    }

    #[test]
    fn prompt_fails_without_default() {
        let mut ui = NonInteractiveUI::new(OutputMode::Normal);
        let prompt = Prompt {
            key: "test".to_string(),
            question: "Test?".to_string(),
            prompt_type: PromptType::Input,
            default: None,
        };

        let result = ui.prompt(&prompt);
        assert!(result.is_err());
    }

    #[test]
    fn output_mode_preserved() {
        let ui = NonInteractiveUI::new(OutputMode::Quiet);
        assert_eq!(ui.output_mode(), OutputMode::Quiet);
    }
}

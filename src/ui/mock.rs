//! Mock UI implementation for testing.
//!
//! `MockUI` implements the `UserInterface` trait and captures all
//! interactions for later assertion. It can be configured with
//! pre-determined prompt responses.
//!
//! # Example
//!
//! ```
//! use trailhead::ui::{MockUI, OutputMode, Prompt, PromptType, UserInterface};
//!
//! let mut ui = MockUI::new();
//! ui.set_prompt_response("TRAILHEAD_AUTHOR_NAME", "Jane Doe");
//!
//! // Use ui in code under test...
//! ui.message("Creating project");
//! ui.success("Done!");
//!
//! // Assert on captured interactions
//! assert!(ui.messages().contains(&"Creating project".to_string()));
//! assert!(ui.successes().contains(&"Done!".to_string()));
//! ```

use std::collections::{HashMap, VecDeque};

use crate::error::Result;

use super::{truthy, OutputMode, Prompt, PromptResult, PromptType, UserInterface};

/// Mock UI implementation for testing.
///
/// Captures all UI interactions and allows pre-configured prompt responses.
/// Supports both single responses (via `set_prompt_response`) and queued
/// responses (via `queue_prompt_responses`) for keys called multiple times.
#[derive(Debug, Default)]
pub struct MockUI {
    mode: OutputMode,
    interactive: bool,
    messages: Vec<String>,
    successes: Vec<String>,
    warnings: Vec<String>,
    errors: Vec<String>,
    skipped: Vec<String>,
    headers: Vec<String>,
    prompt_responses: HashMap<String, String>,
    prompt_queues: HashMap<String, VecDeque<String>>,
    prompts_shown: Vec<String>,
    /// Fallback response for any prompt key not in `prompt_responses` or `prompt_queues`.
    default_prompt_response: Option<String>,
}

impl MockUI {
    /// Create a new MockUI with Normal output mode.
    pub fn new() -> Self {
        Self {
            mode: OutputMode::Normal,
            ..Default::default()
        }
    }

    /// Create a new MockUI with a specific output mode.
    pub fn with_mode(mode: OutputMode) -> Self {
        Self {
            mode,
            ..Default::default()
        }
    }

    /// Set a response for a prompt key.
    ///
    /// When `prompt()` is called with this key, it returns the configured response.
    pub fn set_prompt_response(&mut self, key: &str, response: &str) {
        self.prompt_responses
            .insert(key.to_string(), response.to_string());
    }

    /// Queue multiple responses for the same prompt key.
    ///
    /// Responses are returned in order. After the queue is exhausted,
    /// falls back to `set_prompt_response` or defaults.
    pub fn queue_prompt_responses(&mut self, key: &str, responses: Vec<&str>) {
        let queue = responses.into_iter().map(|s| s.to_string()).collect();
        self.prompt_queues.insert(key.to_string(), queue);
    }

    /// Set a default response for any prompt key not explicitly configured.
    pub fn set_default_prompt_response(&mut self, response: &str) {
        self.default_prompt_response = Some(response.to_string());
    }

    /// Set whether this mock behaves as interactive.
    pub fn set_interactive(&mut self, interactive: bool) {
        self.interactive = interactive;
    }

    /// Change the output mode.
    pub fn set_output_mode(&mut self, mode: OutputMode) {
        self.mode = mode;
    }

    /// Get all captured messages.
    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    /// Get all captured success messages.
    pub fn successes(&self) -> &[String] {
        &self.successes
    }

    /// Get all captured warning messages.
    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }

    /// Get all captured error messages.
    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    /// Get all captured skipped messages.
    pub fn skipped_messages(&self) -> &[String] {
        &self.skipped
    }

    /// Get all captured headers.
    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    /// Get all prompts that were shown (by key).
    pub fn prompts_shown(&self) -> &[String] {
        &self.prompts_shown
    }

    /// Check if a specific message was shown.
    pub fn has_message(&self, msg: &str) -> bool {
        self.messages.iter().any(|m| m.contains(msg))
    }

    /// Check if a specific success was shown.
    pub fn has_success(&self, msg: &str) -> bool {
        self.successes.iter().any(|m| m.contains(msg))
    }

    /// Check if a specific warning was shown.
    pub fn has_warning(&self, msg: &str) -> bool {
        self.warnings.iter().any(|m| m.contains(msg))
    }

    /// Check if a specific error was shown.
    pub fn has_error(&self, msg: &str) -> bool {
        self.errors.iter().any(|m| m.contains(msg))
    }

    /// Check if a specific skipped message was shown.
    pub fn has_skipped(&self, msg: &str) -> bool {
        self.skipped.iter().any(|m| m.contains(msg))
    }

    /// Clear all captured interactions.
    pub fn clear(&mut self) {
        self.messages.clear();
        self.successes.clear();
        self.warnings.clear();
        self.errors.clear();
        self.skipped.clear();
        self.headers.clear();
        self.prompts_shown.clear();
    }

    fn respond(&self, response: &str, prompt_type: &PromptType) -> PromptResult {
        match prompt_type {
            PromptType::Confirm => PromptResult::Bool(truthy(response)),
            PromptType::Input => PromptResult::String(response.to_string()),
        }
    }
}

impl UserInterface for MockUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn message(&mut self, msg: &str) {
        self.messages.push(msg.to_string());
    }

    fn success(&mut self, msg: &str) {
        self.successes.push(msg.to_string());
    }

    fn warning(&mut self, msg: &str) {
        self.warnings.push(msg.to_string());
    }

    fn error(&mut self, msg: &str) {
        self.errors.push(msg.to_string());
    }

    fn skipped(&mut self, msg: &str) {
        self.skipped.push(msg.to_string());
    }

    fn prompt(&mut self, prompt: &Prompt) -> Result<PromptResult> {
        self.prompts_shown.push(prompt.key.clone());

        // Check queued responses first (for keys called multiple times)
        if let Some(queue) = self.prompt_queues.get_mut(&prompt.key) {
            if let Some(response) = queue.pop_front() {
                return Ok(self.respond(&response, &prompt.prompt_type));
            }
        }

        // Return pre-configured response if available
        if let Some(response) = self.prompt_responses.get(&prompt.key) {
            let response = response.clone();
            return Ok(self.respond(&response, &prompt.prompt_type));
        }

        // Fall back to default_prompt_response if set (before prompt.default)
        if let Some(response) = self.default_prompt_response.clone() {
            return Ok(self.respond(&response, &prompt.prompt_type));
        }

        // Fall back to the prompt's own default, mirroring an Enter keypress
        if let Some(default) = prompt.default.clone() {
            return Ok(self.respond(&default, &prompt.prompt_type));
        }

        // Return type-appropriate empty as a last resort
        Ok(match prompt.prompt_type {
            PromptType::Confirm => PromptResult::Bool(false),
            PromptType::Input => PromptResult::String(String::new()),
        })
    }

    fn show_header(&mut self, title: &str) {
        self.headers.push(title.to_string());
    }

    fn is_interactive(&self) -> bool {
        self.interactive
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mock_ui_captures_messages() {
        let mut ui = MockUI::new();

        ui.message("Hello");
        ui.success("Done");
        ui.warning("Be careful");
        ui.error("Oops");
        ui.skipped("Not needed");

        assert_eq!(ui.messages(), &["Hello"]);
        assert_eq!(ui.successes(), &["Done"]);
        assert_eq!(ui.warnings(), &["Be careful"]);
        assert_eq!(ui.errors(), &["Oops"]);
        assert_eq!(ui.skipped_messages(), &["Not needed"]);
    }

    #[test]
    fn mock_ui_prompt_with_response() {
        let mut ui = MockUI::new();
        ui.set_prompt_response("TRAILHEAD_AUTHOR_NAME", "Jane Doe");

        let prompt = Prompt {
            key: "TRAILHEAD_AUTHOR_NAME".to_string(),
            question: "TRAILHEAD_AUTHOR_NAME".to_string(),
            prompt_type: PromptType::Input,
            default: None,
        };

        let result = ui.prompt(&prompt).unwrap();
        assert_eq!(result.as_string(), "Jane Doe");
        assert_eq!(ui.prompts_shown(), &["TRAILHEAD_AUTHOR_NAME"]);
    }

    #[test]
    fn mock_ui_prompt_falls_back_to_default() {
        let mut ui = MockUI::new();

        let prompt = Prompt {
            key: "env".to_string(),
            question: "Environment?".to_string(),
            prompt_type: PromptType::Input,
            default: Some("development".to_string()),
        };

        let result = ui.prompt(&prompt).unwrap();
        assert_eq!(result.as_string(), "development");
    }

    #[test]
    fn mock_ui_default_prompt_response_beats_prompt_default() {
        let mut ui = MockUI::new();
        ui.set_default_prompt_response("global");

        let prompt = Prompt {
            key: "anything".to_string(),
            question: "?".to_string(),
            prompt_type: PromptType::Input,
            default: Some("local".to_string()),
        };

        assert_eq!(ui.prompt(&prompt).unwrap().as_string(), "global");
    }

    #[test]
    fn mock_ui_captures_headers() {
        let mut ui = MockUI::new();

        ui.show_header("trailhead");

        assert_eq!(ui.headers(), &["trailhead"]);
    }

    #[test]
    fn mock_ui_clear_resets() {
        let mut ui = MockUI::new();

        ui.message("test");
        ui.success("done");
        ui.skipped("skip");
        ui.clear();

        assert!(ui.messages().is_empty());
        assert!(ui.successes().is_empty());
        assert!(ui.skipped_messages().is_empty());
    }

    #[test]
    fn mock_ui_has_helpers() {
        let mut ui = MockUI::new();

        ui.message("Creating project");
        ui.success("Complete!");
        ui.error("Failed to write");
        ui.skipped("Kept existing file");

        assert!(ui.has_message("Creating"));
        assert!(ui.has_success("Complete"));
        assert!(ui.has_error("Failed"));
        assert!(ui.has_skipped("Kept existing"));
        assert!(!ui.has_message("not there"));
    }

    #[test]
    fn mock_ui_output_mode() {
        let ui = MockUI::with_mode(OutputMode::Quiet);
        assert_eq!(ui.output_mode(), OutputMode::Quiet);
    }

    #[test]
    fn mock_ui_is_not_interactive_by_default() {
        let ui = MockUI::new();
        assert!(!ui.is_interactive());
    }

    #[test]
    fn mock_ui_set_interactive() {
        let mut ui = MockUI::new();
        assert!(!ui.is_interactive());

        ui.set_interactive(true);
        assert!(ui.is_interactive());
    }

    #[test]
    fn mock_ui_confirm_returns_bool_from_response() {
        let mut ui = MockUI::new();
        ui.set_prompt_response("overwrite", "yes");

        let prompt = Prompt {
            key: "overwrite".to_string(),
            question: "Overwrite?".to_string(),
            prompt_type: PromptType::Confirm,
            default: None,
        };

        let result = ui.prompt(&prompt).unwrap();
        assert_eq!(result.as_bool(), Some(true));
    }

    #[test]
    fn mock_ui_confirm_uses_default() {
        let mut ui = MockUI::new();

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
    fn mock_ui_confirm_without_response_or_default_returns_false() {
        let mut ui = MockUI::new();

        let prompt = Prompt {
            key: "overwrite".to_string(),
            question: "Overwrite?".to_string(),
            prompt_type: PromptType::Confirm,
            default: None,
        };

        let result = ui.prompt(&prompt).unwrap();
        assert_eq!(result.as_bool(), Some(false));
    }

    #[test]
    fn mock_ui_queued_responses_returned_in_order() {
        let mut ui = MockUI::new();
        ui.queue_prompt_responses("overwrite", vec!["yes", "no"]);

        let prompt = Prompt {
            key: "overwrite".to_string(),
            question: "Overwrite?".to_string(),
            prompt_type: PromptType::Confirm,
            default: None,
        };

        assert_eq!(ui.prompt(&prompt).unwrap().as_bool(), Some(true));
        assert_eq!(ui.prompt(&prompt).unwrap().as_bool(), Some(false));
        // Queue exhausted, falls back to the type-appropriate empty
        assert_eq!(ui.prompt(&prompt).unwrap().as_bool(), Some(false));
    }

    #[test]
    fn mock_ui_queued_responses_fallback_to_set_response() {
        let mut ui = MockUI::new();
        ui.set_prompt_response("key", "fallback");
        ui.queue_prompt_responses("key", vec!["first"]);

        let prompt = Prompt {
            key: "key".to_string(),
            question: "?".to_string(),
            prompt_type: PromptType::Input,
            default: None,
        };

        assert_eq!(ui.prompt(&prompt).unwrap().as_string(), "first");
        // Queue exhausted, falls back to set_prompt_response
        assert_eq!(ui.prompt(&prompt).unwrap().as_string(), "fallback");
    }

    #[test]
    fn mock_ui_set_output_mode() {
        let mut ui = MockUI::new();
        assert_eq!(ui.output_mode(), OutputMode::Normal);

        ui.set_output_mode(OutputMode::Silent);
        assert_eq!(ui.output_mode(), OutputMode::Silent);
    }
}

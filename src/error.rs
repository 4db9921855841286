//! Error types for Trailhead operations.
//!
//! This module defines [`TrailheadError`], the primary error type used
//! throughout the application, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Use `TrailheadError` for domain-specific errors that need distinct handling
//! - Use `anyhow::Error` (via `TrailheadError::Other`) for unexpected errors
//! - All errors should provide actionable single-line messages for users

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for Trailhead operations.
#[derive(Debug, Error)]
pub enum TrailheadError {
    /// No template with this name exists in the user or bundled root.
    #[error("Template '{name}' not found")]
    TemplateNotFound { name: String },

    /// A template manifest exists but failed structural validation.
    #[error("Invalid template manifest at {path}: {message}")]
    ManifestInvalid { path: PathBuf, message: String },

    /// The requested project name violates the naming rules.
    #[error(transparent)]
    InvalidProjectName(#[from] ProjectNameError),

    /// The optional user config file exists but cannot be used.
    ///
    /// Non-fatal: callers warn and continue with template defaults.
    #[error("Malformed user config at {path}: {message}")]
    UserConfigMalformed { path: PathBuf, message: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for Trailhead operations.
pub type Result<T> = std::result::Result<T, TrailheadError>;

/// Why a project name was rejected.
///
/// The three reasons are kept distinct so the CLI can name the exact
/// problem, including the offending characters.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ProjectNameError {
    /// The name is the empty string.
    #[error("Project name cannot be empty")]
    Empty,

    /// The first character is not a letter.
    #[error("Project name must start with a letter (found '{found}')")]
    MustStartWithLetter { found: char },

    /// One or more characters fall outside `[a-z0-9_]`.
    #[error("Project name can only contain [a-z0-9_] (found {})", quote_chars(.found))]
    IllegalCharacters { found: Vec<char> },
}

fn quote_chars(chars: &[char]) -> String {
    let quoted: Vec<String> = chars.iter().map(|c| format!("'{}'", c)).collect();
    quoted.join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn template_not_found_displays_name() {
        let err = TrailheadError::TemplateNotFound {
            name: "nonexistent".into(),
        };
        assert!(err.to_string().contains("nonexistent"));
    }

    #[test]
    fn manifest_invalid_displays_path_and_message() {
        let err = TrailheadError::ManifestInvalid {
            path: PathBuf::from("/templates/foo/trailhead_template.toml"),
            message: "missing field `substitutions`".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("trailhead_template.toml"));
        assert!(msg.contains("missing field"));
    }

    #[test]
    fn user_config_malformed_displays_path_and_message() {
        let err = TrailheadError::UserConfigMalformed {
            path: PathBuf::from("/home/u/.config/trailhead/config.toml"),
            message: "expected value".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("config.toml"));
        assert!(msg.contains("expected value"));
    }

    #[test]
    fn invalid_project_name_is_transparent() {
        let err = TrailheadError::from(ProjectNameError::Empty);
        assert_eq!(err.to_string(), ProjectNameError::Empty.to_string());
    }

    #[test]
    fn project_name_empty_message() {
        let msg = ProjectNameError::Empty.to_string();
        assert!(msg.contains("empty"));
    }

    #[test]
    fn project_name_first_char_names_the_character() {
        let err = ProjectNameError::MustStartWithLetter { found: '1' };
        assert!(err.to_string().contains("'1'"));
    }

    #[test]
    fn project_name_illegal_chars_lists_all_offenders() {
        let err = ProjectNameError::IllegalCharacters {
            found: vec!['-', '/'],
        };
        let msg = err.to_string();
        assert!(msg.contains("'-'"));
        assert!(msg.contains("'/'"));
        assert!(msg.contains("[a-z0-9_]"));
    }

    #[test]
    fn io_error_converts_from_std() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file missing");
        let err: TrailheadError = io_err.into();
        assert!(matches!(err, TrailheadError::Io(_)));
    }

    #[test]
    fn result_type_alias_works() {
        fn returns_error() -> Result<()> {
            Err(TrailheadError::TemplateNotFound { name: "x".into() })
        }
        assert!(returns_error().is_err());
    }
}

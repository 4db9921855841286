//! Trailhead - project scaffolding from plain-text templates.
//!
//! Trailhead is a CLI tool that stamps out new project directories from
//! templates: trees of ordinary files whose contents and paths carry
//! literal placeholder tokens, replaced at creation time from a manifest,
//! the user's config file, and interactive answers.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`error`] - Error types and result aliases
//! - [`instantiate`] - Writing a configured template to disk
//! - [`paths`] - Per-user data and config directory discovery
//! - [`project`] - Project name validation
//! - [`registry`] - Bundled and user template lookup
//! - [`substitution`] - Substitution tables and their resolution
//! - [`ui`] - Interactive prompts and terminal output
//!
//! # Example
//!
//! ```
//! use trailhead::substitution::SubstitutionTable;
//!
//! // Replace placeholder tokens in template text
//! let mut table = SubstitutionTable::new();
//! table.insert("TRAILHEAD_PROJECT_NAME", "widget");
//! let rendered = table.apply("# TRAILHEAD_PROJECT_NAME\n");
//! assert_eq!(rendered, "# widget\n");
//! ```
//!
//! For end-to-end project creation, see the integration tests.

pub mod cli;
pub mod error;
pub mod instantiate;
pub mod paths;
pub mod project;
pub mod registry;
pub mod substitution;
pub mod ui;

pub use error::{Result, TrailheadError};

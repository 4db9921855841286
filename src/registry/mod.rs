//! Template resolution across the bundled and user roots.
//!
//! Templates come from two places:
//! - bundled templates embedded in the binary
//! - user templates under the per-user data directory
//!
//! A user template shadows a bundled template of the same name, so the
//! bundled `default` can be replaced by dropping a directory called
//! `default` into the user root.

pub mod builtin;
pub mod manifest;
pub mod template;
pub mod user;

pub use manifest::{TemplateManifest, MANIFEST_FILE_NAME};
pub use template::{SourceFile, Template, TemplateSource, PROJECT_NAME_TOKEN};
pub use user::UserTemplates;

use std::path::{Path, PathBuf};

use crate::error::{Result, TrailheadError};

/// Resolves template names, user root first, bundled root second.
#[derive(Debug, Clone)]
pub struct Registry {
    user: UserTemplates,
}

/// Template names available in each root, for display.
#[derive(Debug, Clone)]
pub struct TemplateListing {
    /// Bundled template names, sorted.
    pub builtin: Vec<String>,
    /// User template directory names, sorted.
    pub user: Vec<String>,
}

impl Registry {
    pub fn new(user_templates_dir: PathBuf) -> Self {
        Self {
            user: UserTemplates::new(user_templates_dir),
        }
    }

    /// The user template root this registry consults.
    pub fn user_templates_dir(&self) -> &Path {
        self.user.root()
    }

    /// Resolve a template by name.
    ///
    /// Only a directory passing the validity check counts as a match for
    /// its root; once a root matches, a manifest error is reported rather
    /// than falling through to the other root.
    pub fn resolve(&self, name: &str) -> Result<Template> {
        if let Some(template) = self.user.find(name)? {
            tracing::debug!("Resolved template '{}' from the user root", name);
            return Ok(template);
        }

        if let Some(template) = builtin::find(name)? {
            tracing::debug!("Resolved template '{}' from the bundled root", name);
            return Ok(template);
        }

        Err(TrailheadError::TemplateNotFound {
            name: name.to_string(),
        })
    }

    /// Enumerate template names in both roots without validating them.
    pub fn list(&self) -> TemplateListing {
        TemplateListing {
            builtin: builtin::template_names(),
            user: self.user.template_names(),
        }
    }
}

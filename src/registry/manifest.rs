//! Template manifest parsing and validation.

use std::path::Path;

use serde::Deserialize;

use crate::error::{Result, TrailheadError};
use crate::substitution::SubstitutionTable;

/// File name of a template's manifest, at the template directory root.
pub const MANIFEST_FILE_NAME: &str = "trailhead_template.toml";

/// Validated contents of a template manifest.
///
/// The on-disk shape is:
///
/// ```toml
/// [trailhead.template]
/// description = "optional description"
///
/// [trailhead.template.substitutions]
/// KEY = "default value"
/// ```
#[derive(Debug, Clone)]
pub struct TemplateManifest {
    /// Optional human-readable description.
    pub description: Option<String>,
    /// Declared substitutions with their default values, in document order.
    pub substitutions: SubstitutionTable,
}

#[derive(Debug, Deserialize)]
struct ManifestDocument {
    trailhead: TrailheadSection,
}

#[derive(Debug, Deserialize)]
struct TrailheadSection {
    template: TemplateSection,
}

#[derive(Debug, Deserialize)]
struct TemplateSection {
    #[serde(default)]
    description: Option<String>,
    substitutions: toml::Table,
}

impl TemplateManifest {
    /// Parse and validate manifest text.
    ///
    /// The substitutions table is required (it may be empty) and every
    /// value in it must be a string. `path` is used for diagnostics only.
    pub fn parse(path: &Path, content: &str) -> Result<Self> {
        let invalid = |message: String| TrailheadError::ManifestInvalid {
            path: path.to_path_buf(),
            message,
        };

        let document: ManifestDocument =
            toml::from_str(content).map_err(|e| invalid(e.message().to_string()))?;

        let mut substitutions = SubstitutionTable::new();
        for (key, value) in &document.trailhead.template.substitutions {
            let value = value
                .as_str()
                .ok_or_else(|| invalid(format!("substitution '{}' must be a string", key)))?;
            substitutions.insert(key.clone(), value);
        }

        Ok(Self {
            description: document.trailhead.template.description,
            substitutions,
        })
    }
}

//! Substitution resolution for a template instantiation.
//!
//! Values are layered in a fixed order: manifest defaults, then user config
//! overrides, then interactive answers, then the computed keys. The computed
//! keys always win.

use std::path::{Path, PathBuf};

use chrono::{Datelike, NaiveDate};

use crate::error::{Result, TrailheadError};
use crate::registry::template::{Template, PROJECT_NAME_TOKEN};
use crate::substitution::table::SubstitutionTable;
use crate::ui::{Prompt, PromptType, UserInterface};

/// Computed key holding the current year as a plain decimal string.
pub const CURRENT_YEAR_KEY: &str = "TRAILHEAD_CURRENT_YEAR";
/// Computed key holding the current month, unpadded.
pub const CURRENT_MONTH_KEY: &str = "TRAILHEAD_CURRENT_MONTH";
/// Computed key holding the current day of month, unpadded.
pub const CURRENT_DAY_KEY: &str = "TRAILHEAD_CURRENT_DAY";

/// A template resolved against a project name and a final substitution
/// table, ready to be instantiated.
#[derive(Debug, Clone)]
pub struct ConfiguredTemplate {
    /// The template being instantiated.
    pub template: Template,
    /// Validated project name; also the value of the project-name token.
    pub project_name: String,
    /// Destination directory of the new project.
    pub project_dir: PathBuf,
    /// The final substitution table.
    pub substitutions: SubstitutionTable,
}

/// Build the instantiation plan for `template`.
///
/// Layering, in order:
/// 1. the manifest's substitution defaults;
/// 2. overrides from the user config file, for keys the manifest already
///    declares (a missing file is fine, a malformed one produces a warning
///    and the defaults stand);
/// 3. one prompt per key, in table order, when the session is interactive
///    (an empty answer keeps the current value);
/// 4. the computed keys: project name and today's year, month and day as
///    plain decimal strings. These overwrite any same-named key.
///
/// Reads at most the user config file; never writes.
pub fn configure_template(
    template: Template,
    project_name: &str,
    destination_root: &Path,
    user_config_path: &Path,
    today: NaiveDate,
    ui: &mut dyn UserInterface,
) -> Result<ConfiguredTemplate> {
    let mut substitutions = template.manifest.substitutions.clone();

    match load_user_overrides(user_config_path) {
        Ok(Some(overrides)) => {
            ui.message(&format!(
                "Loading user config from {}",
                user_config_path.display()
            ));
            for (key, value) in overrides {
                if substitutions.contains_key(&key) {
                    substitutions.insert(key, value);
                }
            }
        }
        Ok(None) => {}
        Err(err) => {
            tracing::warn!("{}", err);
            ui.warning(&err.to_string());
        }
    }

    if ui.is_interactive() && !substitutions.is_empty() {
        ui.message("Review substitution values. Press Enter to keep a default.");
        let keys: Vec<String> = substitutions.keys().map(str::to_owned).collect();
        for key in keys {
            let default = substitutions.get(&key).map(str::to_owned);
            let answer = ui.prompt(&Prompt {
                key: key.clone(),
                question: key.clone(),
                prompt_type: PromptType::Input,
                default,
            })?;
            substitutions.insert(key, answer.as_string());
        }
    }

    substitutions.insert(PROJECT_NAME_TOKEN, project_name);
    substitutions.insert(CURRENT_YEAR_KEY, today.year().to_string());
    substitutions.insert(CURRENT_MONTH_KEY, today.month().to_string());
    substitutions.insert(CURRENT_DAY_KEY, today.day().to_string());

    Ok(ConfiguredTemplate {
        project_name: project_name.to_string(),
        project_dir: destination_root.join(project_name),
        substitutions,
        template,
    })
}

/// Read substitution overrides from the user config file.
///
/// Returns `Ok(None)` when no file exists, `Ok(Some(..))` with zero or more
/// key/value pairs when it parses, and `UserConfigMalformed` when it cannot
/// be read or parsed. Navigation is lenient: a missing
/// `[trailhead.template.substitutions]` section or non-string values are
/// simply skipped.
fn load_user_overrides(path: &Path) -> Result<Option<Vec<(String, String)>>> {
    if !path.is_file() {
        return Ok(None);
    }

    let malformed = |message: String| TrailheadError::UserConfigMalformed {
        path: path.to_path_buf(),
        message,
    };

    let content = std::fs::read_to_string(path).map_err(|e| malformed(e.to_string()))?;
    let document: toml::Value = toml::from_str(&content).map_err(|e| malformed(e.to_string()))?;

    let overrides = document
        .get("trailhead")
        .and_then(|v| v.get("template"))
        .and_then(|v| v.get("substitutions"))
        .and_then(|v| v.as_table())
        .map(|table| {
            table
                .iter()
                .filter_map(|(k, v)| v.as_str().map(|s| (k.clone(), s.to_string())))
                .collect()
        })
        .unwrap_or_default();

    Ok(Some(overrides))
}

//! Tree instantiation: writing a configured template to disk.
//!
//! Walks the template's source files in sorted order, rewrites each
//! destination path and each file's content through the substitution
//! table, and resolves conflicts with files already on disk. Writes are
//! sequential; an interrupted run leaves the files written so far in
//! place.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::substitution::ConfiguredTemplate;
use crate::ui::{Prompt, PromptType, UserInterface};

/// Per-file outcomes of an instantiation run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InstantiationReport {
    /// Files newly written.
    pub created: usize,
    /// Existing files replaced after confirmation.
    pub overwritten: usize,
    /// Existing files left alone because their content already matched.
    pub skipped_identical: usize,
    /// Existing files kept because the overwrite was declined.
    pub skipped_conflicts: usize,
}

impl InstantiationReport {
    /// Files actually written to disk.
    pub fn files_written(&self) -> usize {
        self.created + self.overwritten
    }

    /// Files visited in total.
    pub fn files_visited(&self) -> usize {
        self.created + self.overwritten + self.skipped_identical + self.skipped_conflicts
    }
}

/// Instantiate `plan` under its project directory.
///
/// For each source file the destination is the project directory joined
/// with the sentinel-relative path, with the substitution table applied
/// to the joined path as a string. Content goes through the same table.
/// A missing destination is created along with its parent directories;
/// an identical one is skipped; a differing one is only replaced after
/// an interactive confirmation that defaults to keeping the existing
/// file. Non-interactive runs always keep it.
pub fn instantiate(
    plan: &ConfiguredTemplate,
    ui: &mut dyn UserInterface,
) -> Result<InstantiationReport> {
    let display_root = plan
        .project_dir
        .parent()
        .map(Path::to_path_buf)
        .unwrap_or_else(|| plan.project_dir.clone());

    let mut report = InstantiationReport::default();
    for source in plan.template.source_files()? {
        let joined = plan.project_dir.join(source.relative_path());
        let destination = PathBuf::from(plan.substitutions.apply(&joined.to_string_lossy()));
        let content = plan.substitutions.apply(&source.read_text()?);
        write_file(&destination, &content, &display_root, ui, &mut report)?;
    }

    tracing::debug!(
        "Instantiated '{}': {} written, {} identical, {} conflicts kept",
        plan.project_name,
        report.files_written(),
        report.skipped_identical,
        report.skipped_conflicts
    );

    Ok(report)
}

fn write_file(
    destination: &Path,
    content: &str,
    display_root: &Path,
    ui: &mut dyn UserInterface,
    report: &mut InstantiationReport,
) -> Result<()> {
    let shown = display_path(destination, display_root);
    let verbose = ui.output_mode().shows_file_operations();

    if destination.is_file() {
        let existing = fs::read_to_string(destination)?;
        if existing == content {
            report.skipped_identical += 1;
            if verbose {
                ui.skipped(&format!("Skipped {} (same content)", shown));
            }
            return Ok(());
        }

        ui.warning(&format!(
            "Conflict: {} already exists with different content",
            shown
        ));
        if ui.is_interactive() && confirm_overwrite(&shown, ui)? {
            fs::write(destination, content)?;
            report.overwritten += 1;
            if verbose {
                ui.success(&format!("Overwrote {}", shown));
            }
        } else {
            report.skipped_conflicts += 1;
            if verbose {
                ui.skipped(&format!("Kept existing {}", shown));
            }
        }
        return Ok(());
    }

    if let Some(parent) = destination.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(destination, content)?;
    report.created += 1;
    if verbose {
        ui.success(&format!("Created {}", shown));
    }
    Ok(())
}

fn confirm_overwrite(shown: &str, ui: &mut dyn UserInterface) -> Result<bool> {
    let answer = ui.prompt(&Prompt {
        key: "overwrite".to_string(),
        question: format!("Overwrite {}?", shown),
        prompt_type: PromptType::Confirm,
        default: Some("no".to_string()),
    })?;
    Ok(answer.as_bool().unwrap_or(false))
}

fn display_path(path: &Path, root: &Path) -> String {
    path.strip_prefix(root).unwrap_or(path).display().to_string()
}

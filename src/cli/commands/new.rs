//! New command implementation.
//!
//! The `trailhead new` command validates the project name, resolves the
//! template, builds the substitution plan, and writes the project tree.
//! Validation happens before any filesystem mutation, so a rejected name
//! or an unknown template leaves the destination untouched.

use std::path::PathBuf;

use chrono::Local;

use crate::cli::args::NewArgs;
use crate::error::{Result, TrailheadError};
use crate::instantiate::instantiate;
use crate::paths::AppPaths;
use crate::project::validate_project_name;
use crate::registry::Registry;
use crate::substitution::configure_template;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};
use super::list::render_listing;

/// The new command implementation.
pub struct NewCommand {
    paths: AppPaths,
    destination_root: PathBuf,
    args: NewArgs,
}

impl NewCommand {
    /// Create a new command instance.
    pub fn new(paths: AppPaths, destination_root: PathBuf, args: NewArgs) -> Self {
        Self {
            paths,
            destination_root,
            args,
        }
    }
}

impl Command for NewCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        if let Err(err) = validate_project_name(&self.args.project_name) {
            ui.error(&err.to_string());
            return Ok(CommandResult::failure(1));
        }

        let registry = Registry::new(self.paths.user_templates_dir.clone());
        let template = match registry.resolve(&self.args.template) {
            Ok(template) => template,
            Err(err @ TrailheadError::TemplateNotFound { .. }) => {
                ui.error(&err.to_string());
                ui.message("");
                render_listing(&registry.list(), registry.user_templates_dir(), ui);
                return Ok(CommandResult::failure(2));
            }
            Err(err) => return Err(err),
        };

        ui.show_header(&format!(
            "Creating '{}' from template '{}'",
            self.args.project_name, template.name
        ));

        let plan = configure_template(
            template,
            &self.args.project_name,
            &self.destination_root,
            &self.paths.user_config_path,
            Local::now().date_naive(),
            ui,
        )?;

        let report = instantiate(&plan, ui)?;

        let written = report.files_written();
        let written_noun = if written == 1 { "file" } else { "files" };
        ui.message("");
        ui.success(&format!(
            "Project '{}' created ({} {} written)",
            plan.project_name, written, written_noun
        ));
        if report.skipped_conflicts > 0 {
            let kept_noun = if report.skipped_conflicts == 1 {
                "file"
            } else {
                "files"
            };
            ui.warning(&format!(
                "{} {} kept with conflicting content",
                report.skipped_conflicts, kept_noun
            ));
        }

        Ok(CommandResult::success())
    }
}

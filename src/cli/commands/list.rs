//! List command implementation.
//!
//! The `trailhead list` command shows the templates available in both
//! roots. The listing is advisory: names are directory names, with no
//! validity check behind them.

use std::path::Path;

use crate::error::Result;
use crate::paths::AppPaths;
use crate::registry::{Registry, TemplateListing};
use crate::ui::theme::TrailheadTheme;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The list command implementation.
pub struct ListCommand {
    paths: AppPaths,
}

impl ListCommand {
    /// Create a new list command.
    pub fn new(paths: AppPaths) -> Self {
        Self { paths }
    }
}

impl Command for ListCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let registry = Registry::new(self.paths.user_templates_dir.clone());
        render_listing(&registry.list(), registry.user_templates_dir(), ui);
        Ok(CommandResult::success())
    }
}

/// Render the template listing.
///
/// Also used by the `new` command to show what is available after an
/// unknown template name.
pub fn render_listing(listing: &TemplateListing, user_root: &Path, ui: &mut dyn UserInterface) {
    let theme = TrailheadTheme::new();

    ui.message(&format!("  {}", theme.key.apply_to("Bundled templates:")));
    for name in &listing.builtin {
        ui.message(&format!(
            "    {} {}",
            theme.highlight.apply_to(name),
            theme.dim.apply_to("(built-in)")
        ));
    }

    ui.message("");
    ui.message(&format!(
        "  {}",
        theme
            .key
            .apply_to(format!("User templates in {}:", user_root.display()))
    ));
    if listing.user.is_empty() {
        ui.message(&format!("    {}", theme.dim.apply_to("(none)")));
    } else {
        for name in &listing.user {
            ui.message(&format!("    {}", theme.highlight.apply_to(name)));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::{MANIFEST_FILE_NAME, PROJECT_NAME_TOKEN};
    use crate::ui::MockUI;
    use std::fs;
    use tempfile::TempDir;

    fn paths_with_user_root(temp: &TempDir) -> AppPaths {
        AppPaths {
            user_templates_dir: temp.path().join("templates"),
            user_config_path: temp.path().join("config.toml"),
        }
    }

    #[test]
    fn lists_bundled_templates() {
        let temp = TempDir::new().unwrap();
        let cmd = ListCommand::new(paths_with_user_root(&temp));
        let mut ui = MockUI::new();

        let result = cmd.execute(&mut ui).unwrap();

        assert!(result.success);
        assert!(ui.has_message("Bundled templates:"));
        assert!(ui.has_message("default"));
        assert!(ui.has_message("(built-in)"));
    }

    #[test]
    fn empty_user_root_shows_none() {
        let temp = TempDir::new().unwrap();
        let cmd = ListCommand::new(paths_with_user_root(&temp));
        let mut ui = MockUI::new();

        cmd.execute(&mut ui).unwrap();

        assert!(ui.has_message("User templates in"));
        assert!(ui.has_message("(none)"));
    }

    #[test]
    fn user_templates_are_listed_by_directory_name() {
        let temp = TempDir::new().unwrap();
        let paths = paths_with_user_root(&temp);
        let webapp = paths.user_templates_dir.join("webapp");
        fs::create_dir_all(webapp.join(PROJECT_NAME_TOKEN)).unwrap();
        fs::write(
            webapp.join(MANIFEST_FILE_NAME),
            "[trailhead.template.substitutions]\n",
        )
        .unwrap();
        // Invalid directories still appear; the listing does not validate.
        fs::create_dir_all(paths.user_templates_dir.join("incomplete")).unwrap();

        let cmd = ListCommand::new(paths);
        let mut ui = MockUI::new();

        cmd.execute(&mut ui).unwrap();

        assert!(ui.has_message("webapp"));
        assert!(ui.has_message("incomplete"));
        assert!(!ui.has_message("(none)"));
    }
}

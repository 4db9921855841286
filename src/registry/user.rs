//! User templates stored on disk.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::registry::manifest::{TemplateManifest, MANIFEST_FILE_NAME};
use crate::registry::template::{Template, PROJECT_NAME_TOKEN};

/// The user template root: one subdirectory per template.
///
/// The root itself may not exist; that simply means no user templates.
#[derive(Debug, Clone)]
pub struct UserTemplates {
    root: PathBuf,
}

impl UserTemplates {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Look up a user template by name.
    ///
    /// Returns `Ok(None)` when `<root>/<name>` does not pass the validity
    /// check (a manifest file next to a sentinel directory). A directory
    /// that passes the check but whose manifest fails to parse is an
    /// error, never a miss.
    pub fn find(&self, name: &str) -> Result<Option<Template>> {
        let dir = self.root.join(name);
        if !is_template_dir(&dir) {
            return Ok(None);
        }

        let manifest_path = dir.join(MANIFEST_FILE_NAME);
        let content = fs::read_to_string(&manifest_path)?;
        let manifest = TemplateManifest::parse(&manifest_path, &content)?;

        Ok(Some(Template::on_disk(name, manifest, dir)))
    }

    /// Names of the root's immediate child directories, sorted.
    ///
    /// Purely advisory; no validity check happens here.
    pub fn template_names(&self) -> Vec<String> {
        let entries = match fs::read_dir(&self.root) {
            Ok(entries) => entries,
            Err(_) => return Vec::new(),
        };

        let mut names: Vec<String> = entries
            .filter_map(|entry| entry.ok())
            .filter(|entry| entry.path().is_dir())
            .filter_map(|entry| entry.file_name().to_str().map(str::to_owned))
            .collect();
        names.sort();
        names
    }
}

fn is_template_dir(dir: &Path) -> bool {
    dir.is_dir() && dir.join(MANIFEST_FILE_NAME).is_file() && dir.join(PROJECT_NAME_TOKEN).is_dir()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TrailheadError;
    use crate::registry::template::TemplateSource;
    use tempfile::TempDir;

    const MANIFEST: &str = "[trailhead.template.substitutions]\nAUTHOR = \"Jane\"\n";

    fn write_template(root: &Path, name: &str, manifest: &str) {
        let dir = root.join(name);
        fs::create_dir_all(dir.join(PROJECT_NAME_TOKEN)).unwrap();
        fs::write(dir.join(MANIFEST_FILE_NAME), manifest).unwrap();
    }

    #[test]
    fn finds_valid_template() {
        let root = TempDir::new().unwrap();
        write_template(root.path(), "webapp", MANIFEST);

        let templates = UserTemplates::new(root.path().to_path_buf());
        let template = templates.find("webapp").unwrap().unwrap();
        assert_eq!(template.name, "webapp");
        assert_eq!(template.source, TemplateSource::User);
        assert_eq!(template.manifest.substitutions.get("AUTHOR"), Some("Jane"));
    }

    #[test]
    fn directory_without_manifest_is_a_miss() {
        let root = TempDir::new().unwrap();
        fs::create_dir_all(root.path().join("webapp").join(PROJECT_NAME_TOKEN)).unwrap();

        let templates = UserTemplates::new(root.path().to_path_buf());
        assert!(templates.find("webapp").unwrap().is_none());
    }

    #[test]
    fn directory_without_sentinel_is_a_miss() {
        let root = TempDir::new().unwrap();
        let dir = root.path().join("webapp");
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join(MANIFEST_FILE_NAME), MANIFEST).unwrap();

        let templates = UserTemplates::new(root.path().to_path_buf());
        assert!(templates.find("webapp").unwrap().is_none());
    }

    #[test]
    fn malformed_manifest_is_an_error_not_a_miss() {
        let root = TempDir::new().unwrap();
        write_template(root.path(), "webapp", "not [valid toml");

        let templates = UserTemplates::new(root.path().to_path_buf());
        let err = templates.find("webapp").unwrap_err();
        assert!(matches!(err, TrailheadError::ManifestInvalid { .. }));
    }

    #[test]
    fn missing_root_yields_no_templates() {
        let root = TempDir::new().unwrap();
        let templates = UserTemplates::new(root.path().join("absent"));
        assert!(templates.find("anything").unwrap().is_none());
        assert!(templates.template_names().is_empty());
    }

    #[test]
    fn template_names_are_sorted_directories_only() {
        let root = TempDir::new().unwrap();
        write_template(root.path(), "zeta", MANIFEST);
        fs::create_dir_all(root.path().join("alpha")).unwrap();
        fs::write(root.path().join("stray.txt"), "not a template").unwrap();

        let templates = UserTemplates::new(root.path().to_path_buf());
        assert_eq!(templates.template_names(), vec!["alpha", "zeta"]);
    }
}

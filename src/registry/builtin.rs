//! Bundled templates embedded at compile time.

use std::path::PathBuf;

use include_dir::{include_dir, Dir};

use crate::error::{Result, TrailheadError};
use crate::registry::manifest::{TemplateManifest, MANIFEST_FILE_NAME};
use crate::registry::template::{Template, PROJECT_NAME_TOKEN};

/// Embedded templates directory.
static TEMPLATES_DIR: Dir<'_> = include_dir!("$CARGO_MANIFEST_DIR/templates");

/// Look up a bundled template by name.
///
/// Returns `Ok(None)` when no bundled directory of that name passes the
/// validity check (a manifest file next to a sentinel directory). A
/// directory that passes the check but whose manifest fails to parse is
/// an error, never a miss.
pub fn find(name: &str) -> Result<Option<Template>> {
    let dir = match TEMPLATES_DIR.get_dir(name) {
        Some(dir) => dir,
        None => return Ok(None),
    };

    let manifest_path = dir.path().join(MANIFEST_FILE_NAME);
    let manifest_file = match TEMPLATES_DIR.get_file(&manifest_path) {
        Some(file) => file,
        None => return Ok(None),
    };
    if TEMPLATES_DIR.get_dir(dir.path().join(PROJECT_NAME_TOKEN)).is_none() {
        return Ok(None);
    }

    let label = PathBuf::from("templates").join(&manifest_path);
    let content = manifest_file
        .contents_utf8()
        .ok_or_else(|| TrailheadError::ManifestInvalid {
            path: label.clone(),
            message: "not valid UTF-8".to_string(),
        })?;
    let manifest = TemplateManifest::parse(&label, content)?;

    Ok(Some(Template::embedded(name, manifest, dir)))
}

/// Names of all bundled template directories, sorted.
///
/// Purely advisory; no validity check happens here.
pub fn template_names() -> Vec<String> {
    let mut names: Vec<String> = TEMPLATES_DIR
        .dirs()
        .filter_map(|dir| dir.path().file_name())
        .map(|name| name.to_string_lossy().into_owned())
        .collect();
    names.sort();
    names
}

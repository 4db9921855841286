//! Template descriptors and their source file sets.
//!
//! A template directory holds a manifest file next to a sentinel
//! directory named after the project-name token. Everything under the
//! sentinel is copied on instantiation; everything next to it is
//! template metadata and never copied.

use std::fs;
use std::path::{Path, PathBuf};

use include_dir::Dir;
use walkdir::WalkDir;

use crate::error::{Result, TrailheadError};

/// Placeholder token for the project name.
///
/// Doubles as the name of the sentinel directory inside a template and
/// as the always-injected substitution key.
pub const PROJECT_NAME_TOKEN: &str = "TRAILHEAD_PROJECT_NAME";

/// Path fragments that exclude a file wherever they appear in its
/// sentinel-relative path.
const EXCLUDED_PATH_FRAGMENTS: [&str; 4] =
    [".pytest_cache", ".ruff_cache", ".venv", "poetry.lock"];

/// File suffixes that exclude a file.
const EXCLUDED_SUFFIXES: [&str; 1] = [".pyc"];

/// Which root a template was resolved from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemplateSource {
    /// Compiled into the binary.
    Builtin,
    /// Found under the user template directory.
    User,
}

/// Backing storage for a template's file tree.
#[derive(Debug, Clone)]
enum TemplateTree {
    /// Embedded template directory (the directory holding the manifest).
    Embedded(&'static Dir<'static>),
    /// On-disk template directory.
    OnDisk(PathBuf),
}

/// A resolved template: its parsed manifest plus access to its files.
#[derive(Debug, Clone)]
pub struct Template {
    /// Template name, equal to its directory name.
    pub name: String,
    /// Which root the template came from.
    pub source: TemplateSource,
    /// Parsed manifest.
    pub manifest: super::manifest::TemplateManifest,
    tree: TemplateTree,
}

impl Template {
    pub(crate) fn embedded(
        name: impl Into<String>,
        manifest: super::manifest::TemplateManifest,
        dir: &'static Dir<'static>,
    ) -> Self {
        Self {
            name: name.into(),
            source: TemplateSource::Builtin,
            manifest,
            tree: TemplateTree::Embedded(dir),
        }
    }

    pub(crate) fn on_disk(
        name: impl Into<String>,
        manifest: super::manifest::TemplateManifest,
        root: PathBuf,
    ) -> Self {
        Self {
            name: name.into(),
            source: TemplateSource::User,
            manifest,
            tree: TemplateTree::OnDisk(root),
        }
    }

    /// The files to instantiate, sorted by their sentinel-relative path.
    ///
    /// Paths compare as whole strings, so `a-b/x` sorts before `a/x`.
    /// Excluded paths are dropped; directories never appear, only files.
    pub fn source_files(&self) -> Result<Vec<SourceFile>> {
        let mut files = match &self.tree {
            TemplateTree::Embedded(dir) => embedded_source_files(dir),
            TemplateTree::OnDisk(root) => on_disk_source_files(root)?,
        };
        files.retain(|file| !is_excluded(&file.rel_path));
        files.sort_by(|a, b| a.rel_path.as_os_str().cmp(b.rel_path.as_os_str()));
        Ok(files)
    }
}

/// A single file of a template's sentinel subtree.
#[derive(Debug, Clone)]
pub struct SourceFile {
    rel_path: PathBuf,
    origin: FileOrigin,
}

#[derive(Debug, Clone)]
enum FileOrigin {
    Embedded(&'static include_dir::File<'static>),
    OnDisk(PathBuf),
}

impl SourceFile {
    /// Path relative to the sentinel directory.
    pub fn relative_path(&self) -> &Path {
        &self.rel_path
    }

    /// Read the file's full text.
    pub fn read_text(&self) -> Result<String> {
        match &self.origin {
            FileOrigin::Embedded(file) => {
                file.contents_utf8().map(str::to_owned).ok_or_else(|| {
                    TrailheadError::Other(anyhow::anyhow!(
                        "embedded template file '{}' is not valid UTF-8",
                        self.rel_path.display()
                    ))
                })
            }
            FileOrigin::OnDisk(path) => Ok(fs::read_to_string(path)?),
        }
    }
}

fn embedded_source_files(template_dir: &'static Dir<'static>) -> Vec<SourceFile> {
    let sentinel_root = template_dir.path().join(PROJECT_NAME_TOKEN);
    let mut files = Vec::new();
    if let Some(sentinel) = template_dir.get_dir(&sentinel_root) {
        collect_embedded(sentinel, &sentinel_root, &mut files);
    }
    files
}

fn collect_embedded(dir: &'static Dir<'static>, sentinel_root: &Path, out: &mut Vec<SourceFile>) {
    for file in dir.files() {
        let rel_path = file
            .path()
            .strip_prefix(sentinel_root)
            .unwrap_or(file.path())
            .to_path_buf();
        out.push(SourceFile {
            rel_path,
            origin: FileOrigin::Embedded(file),
        });
    }
    for sub in dir.dirs() {
        collect_embedded(sub, sentinel_root, out);
    }
}

fn on_disk_source_files(template_root: &Path) -> Result<Vec<SourceFile>> {
    let sentinel_root = template_root.join(PROJECT_NAME_TOKEN);
    let mut files = Vec::new();
    if !sentinel_root.is_dir() {
        return Ok(files);
    }

    for entry in WalkDir::new(&sentinel_root) {
        let entry = entry.map_err(std::io::Error::from)?;
        if !entry.file_type().is_file() {
            continue;
        }
        let rel_path = entry
            .path()
            .strip_prefix(&sentinel_root)
            .unwrap_or(entry.path())
            .to_path_buf();
        files.push(SourceFile {
            rel_path,
            origin: FileOrigin::OnDisk(entry.into_path()),
        });
    }

    Ok(files)
}

fn is_excluded(rel_path: &Path) -> bool {
    let path = rel_path.to_string_lossy();
    EXCLUDED_PATH_FRAGMENTS
        .iter()
        .any(|fragment| path.contains(fragment))
        || EXCLUDED_SUFFIXES.iter().any(|suffix| path.ends_with(suffix))
}

//! Storage layer for project records.
//!
//! Each project lives in its own directory under the store root:
//!
//! ```text
//! <root>/<name>/project.json    full record, rewritten on every mutation
//! <root>/<name>/context/        attached files, copied verbatim
//! ```
//!
//! There is no locking and no caching; the tool assumes sequential use by
//! a single user, and the last save wins.

use crate::models::Project;
use crate::{Error, Result};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// Record filename inside each project directory.
const RECORD_FILE: &str = "project.json";

/// Subdirectory holding attached context files.
const CONTEXT_DIR: &str = "context";

/// Storage manager rooted at an explicit data directory.
pub struct ProjectStore {
    /// Root directory holding one subdirectory per project
    root: PathBuf,
}

impl ProjectStore {
    /// Create a store rooted at the given directory.
    ///
    /// The directory is not created until the first save.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Root directory of this store.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Directory holding a project's record and context files.
    pub fn project_dir(&self, name: &str) -> PathBuf {
        self.root.join(name)
    }

    /// Path of a project's record file.
    pub fn record_path(&self, name: &str) -> PathBuf {
        self.project_dir(name).join(RECORD_FILE)
    }

    /// Load a project's record, or a default record if it was never saved.
    ///
    /// A missing file is not an error; a file that exists but fails to
    /// parse is reported as `Error::Malformed` so corruption is never
    /// mistaken for absence.
    pub fn load(&self, name: &str) -> Result<Project> {
        let path = self.record_path(name);
        if !path.exists() {
            return Ok(Project::new(name));
        }

        let data = fs::read_to_string(&path)?;
        serde_json::from_str(&data).map_err(|source| Error::Malformed { path, source })
    }

    /// Write a project's full record, replacing any previous content.
    ///
    /// The record is serialized to a temporary file in the project
    /// directory and renamed over the target, so a crash mid-write leaves
    /// either the old record or the new one, never a torn file.
    pub fn save(&self, name: &str, project: &Project) -> Result<()> {
        let dir = self.project_dir(name);
        fs::create_dir_all(&dir)?;

        let tmp = NamedTempFile::new_in(&dir)?;
        serde_json::to_writer_pretty(&tmp, project)?;
        tmp.persist(self.record_path(name))
            .map_err(|e| Error::Io(e.error))?;
        Ok(())
    }

    /// Copy a file into the project's context directory under its own
    /// base filename, overwriting any existing file of the same name.
    ///
    /// Returns the destination path.
    pub fn attach_context(&self, name: &str, source: &Path) -> Result<PathBuf> {
        if !source.exists() {
            return Err(Error::SourceNotFound(source.to_path_buf()));
        }
        let filename = source
            .file_name()
            .ok_or_else(|| Error::InvalidInput(format!("not a file: {}", source.display())))?;

        let context_dir = self.project_dir(name).join(CONTEXT_DIR);
        fs::create_dir_all(&context_dir)?;

        let dest = context_dir.join(filename);
        fs::copy(source, &dest)?;
        Ok(dest)
    }
}

/// Resolve the store root directory.
///
/// Priority: explicit path (from the `--data-dir` flag or `PO_DATA_DIR`
/// env var) > `<platform data dir>/projectos/projects`.
pub fn resolve_data_dir(explicit: Option<PathBuf>) -> Result<PathBuf> {
    match explicit {
        Some(path) => Ok(path),
        None => {
            let data_dir = dirs::data_dir()
                .ok_or_else(|| Error::Other("could not determine data directory".to_string()))?;
            Ok(data_dir.join("projectos").join("projects"))
        }
    }
}

use globset::GlobSet;
use std::path::{Path, PathBuf};

/// Top-level entries of a project directory selected for packaging.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileSet {
    root: PathBuf,
    entries: Vec<PathBuf>,
}

impl FileSet {
    /// Directory the entries are relative to.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Entry names relative to [`FileSet::root`], sorted.
    pub fn entries(&self) -> &[PathBuf] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Lists the immediate children of `project_dir`, dropping every entry whose
/// name matches `excludes` or appears in `always_exclude`.
pub fn collect_files(
    project_dir: &Path,
    excludes: &GlobSet,
    always_exclude: &[&str],
) -> Result<FileSet, FilterError> {
    let read_dir = std::fs::read_dir(project_dir).map_err(|e| FilterError::ReadDir {
        path: project_dir.to_path_buf(),
        source: e,
    })?;

    let mut entries = Vec::new();
    for entry in read_dir {
        let entry = entry.map_err(|e| FilterError::Entry {
            path: project_dir.to_path_buf(),
            source: e,
        })?;
        let name = PathBuf::from(entry.file_name());

        if always_exclude.iter().any(|ex| name.as_os_str() == *ex) {
            tracing::debug!(entry = %name.display(), "skipping reserved entry");
            continue;
        }
        if excludes.is_match(&name) {
            tracing::debug!(entry = %name.display(), "excluded by manifest");
            continue;
        }

        entries.push(name);
    }
    entries.sort();

    Ok(FileSet {
        root: project_dir.to_path_buf(),
        entries,
    })
}

#[derive(Debug, thiserror::Error)]
pub enum FilterError {
    #[error("failed to list directory {path}")]
    ReadDir {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to read directory entry in {path}")]
    Entry {
        path: PathBuf,
        source: std::io::Error,
    },
}

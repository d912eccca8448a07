use crate::filter::FileSet;
use funcpack_core::Compression;
use std::fs::File;
use std::path::{Component, Path, PathBuf};
use zip::write::SimpleFileOptions;
use walkdir::WalkDir;
use zip::{CompressionMethod, ZipWriter};

/// What was written by [`create_archive`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArchiveSummary {
    pub path: PathBuf,
    /// Number of zip entries, directories included.
    pub entries: usize,
    /// Size of the finished artifact on disk.
    pub bytes: u64,
}

/// Zips `files` into `destination`, replacing any previous artifact.
///
/// Directories are stored with their full subtree. Entry names are relative
/// to the file set's root and always use `/` separators. Symbolic links are
/// skipped, and `destination` is never added even when it sits inside a
/// kept directory.
pub fn create_archive(
    files: &FileSet,
    destination: &Path,
    compression: Compression,
) -> Result<ArchiveSummary, ArchiveError> {
    // Clean previous artifact
    if destination.exists() {
        std::fs::remove_file(destination).map_err(|e| ArchiveError::Cleanup {
            path: destination.to_path_buf(),
            source: e,
        })?;
    }

    let file = File::create(destination).map_err(|e| ArchiveError::Create {
        path: destination.to_path_buf(),
        source: e,
    })?;

    let mut writer = Writer {
        zip: ZipWriter::new(file),
        root: files.root(),
        destination,
        compression,
        entries: 0,
    };

    for relative_path in files.entries() {
        writer.add_path(relative_path)?;
    }

    let entries = writer.entries;
    writer.zip.finish().map_err(|e| ArchiveError::Zip {
        path: destination.to_path_buf(),
        source: e,
    })?;

    let bytes = std::fs::metadata(destination)
        .map_err(|e| ArchiveError::Create {
            path: destination.to_path_buf(),
            source: e,
        })?
        .len();

    tracing::info!(
        path = %destination.display(),
        entries,
        bytes,
        "artifact written"
    );

    Ok(ArchiveSummary {
        path: destination.to_path_buf(),
        entries,
        bytes,
    })
}

struct Writer<'a> {
    zip: ZipWriter<File>,
    root: &'a Path,
    destination: &'a Path,
    compression: Compression,
    entries: usize,
}

impl Writer<'_> {
    /// Adds one top-level entry and, for a directory, its subtree.
    ///
    /// Symbolic links are never followed or stored, and neither are special
    /// files. The artifact being written is skipped wherever it appears.
    fn add_path(&mut self, relative_path: &Path) -> Result<(), ArchiveError> {
        let src = self.root.join(relative_path);
        std::fs::symlink_metadata(&src).map_err(|e| ArchiveError::Missing {
            path: src.clone(),
            source: e,
        })?;

        let walker = WalkDir::new(&src)
            .follow_links(false)
            .follow_root_links(false)
            .sort_by_file_name();

        for entry in walker {
            let entry = entry.map_err(|e| ArchiveError::Walk {
                path: src.clone(),
                source: e,
            })?;
            let path = entry.path();

            if path == self.destination {
                tracing::debug!(entry = %path.display(), "skipping artifact");
                continue;
            }

            let file_type = entry.file_type();
            if !file_type.is_dir() && !file_type.is_file() {
                tracing::debug!(entry = %path.display(), "skipping symlink or special file");
                continue;
            }

            let relative: PathBuf = path
                .components()
                .skip(self.root.components().count())
                .collect();
            let name = entry_name(&relative)?;
            let metadata = entry.metadata().map_err(|e| ArchiveError::Walk {
                path: path.to_path_buf(),
                source: e,
            })?;
            let options = entry_options(self.compression, &metadata);

            if file_type.is_dir() {
                self.zip
                    .add_directory(name, options)
                    .map_err(|e| self.zip_error(e))?;
            } else {
                let mut input = File::open(path).map_err(|e| ArchiveError::Missing {
                    path: path.to_path_buf(),
                    source: e,
                })?;
                self.zip
                    .start_file(name, options)
                    .map_err(|e| self.zip_error(e))?;
                std::io::copy(&mut input, &mut self.zip).map_err(|e| ArchiveError::Read {
                    path: path.to_path_buf(),
                    source: e,
                })?;
            }
            self.entries += 1;
            tracing::trace!(entry = %relative.display(), "added");
        }

        Ok(())
    }

    fn zip_error(&self, source: zip::result::ZipError) -> ArchiveError {
        ArchiveError::Zip {
            path: self.destination.to_path_buf(),
            source,
        }
    }
}

/// Zip entry name for a relative path: components joined with `/`.
fn entry_name(relative_path: &Path) -> Result<String, ArchiveError> {
    let mut parts = Vec::new();
    for component in relative_path.components() {
        match component {
            Component::Normal(part) => parts.push(
                part.to_str()
                    .ok_or_else(|| ArchiveError::InvalidName(relative_path.to_path_buf()))?,
            ),
            _ => return Err(ArchiveError::InvalidName(relative_path.to_path_buf())),
        }
    }
    Ok(parts.join("/"))
}

#[cfg_attr(not(unix), allow(unused_variables))]
fn entry_options(compression: Compression, metadata: &std::fs::Metadata) -> SimpleFileOptions {
    let options = match compression {
        Compression::Fastest => SimpleFileOptions::default()
            .compression_method(CompressionMethod::Deflated)
            .compression_level(Some(1)),
        Compression::Optimal => SimpleFileOptions::default()
            .compression_method(CompressionMethod::Deflated)
            .compression_level(Some(9)),
        Compression::None => {
            SimpleFileOptions::default().compression_method(CompressionMethod::Stored)
        }
    };

    #[cfg(unix)]
    let options = {
        use std::os::unix::fs::PermissionsExt;
        options.unix_permissions(metadata.permissions().mode())
    };
    options
}

#[derive(Debug, thiserror::Error)]
pub enum ArchiveError {
    #[error("failed to remove stale artifact {path}")]
    Cleanup {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to create artifact {path}")]
    Create {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("{path} disappeared before it could be archived")]
    Missing {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to walk {path}")]
    Walk {
        path: PathBuf,
        source: walkdir::Error,
    },
    #[error("failed to read {path}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("path is not valid UTF-8 or not relative: {0}")]
    InvalidName(PathBuf),
    #[error("failed to write zip archive {path}")]
    Zip {
        path: PathBuf,
        source: zip::result::ZipError,
    },
}

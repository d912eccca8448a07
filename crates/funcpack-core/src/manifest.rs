//! The `.funcignore` exclusion manifest.
//!
//! The manifest is a one-column CSV file with an `Exclude` header:
//!
//! ```text
//! Exclude
//! .git
//! .venv
//! *.pyc
//! local.settings.json
//! ```
//!
//! Each row is a glob matched against the names of the project directory's
//! immediate entries. A row without glob metacharacters matches that exact name.
//!
//! Rows starting with `#` are comments. An entry whose name begins with `#`
//! therefore cannot be excluded by the manifest.

use globset::{Glob, GlobSet, GlobSetBuilder};
use serde::Deserialize;
use std::path::Path;

/// Header of the single column the manifest must carry.
pub const EXCLUDE_COLUMN: &str = "Exclude";

#[derive(Deserialize)]
struct ManifestRow {
    #[serde(rename = "Exclude")]
    exclude: String,
}

/// Ordered exclusion patterns. Duplicates are kept and harmless.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExcludeList {
    patterns: Vec<String>,
}

impl ExcludeList {
    pub fn new(patterns: Vec<String>) -> Self {
        Self { patterns }
    }

    /// Read `manifest_name` from `project_dir`.
    ///
    /// Fails if the file is absent, is not valid CSV, or has no `Exclude` column.
    pub fn load(project_dir: &Path, manifest_name: &str) -> crate::Result<Self> {
        let path = project_dir.join(manifest_name);
        let content = std::fs::read(&path).map_err(|e| crate::Error::ManifestRead {
            path: path.clone(),
            source: e,
        })?;
        let list = Self::parse(&content, &path)?;
        tracing::debug!(
            path = %path.display(),
            patterns = list.len(),
            "loaded ignore manifest"
        );
        Ok(list)
    }

    fn parse(content: &[u8], path: &Path) -> crate::Result<Self> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .trim(csv::Trim::All)
            .comment(Some(b'#'))
            .from_reader(content);

        let headers = reader
            .headers()
            .map_err(|e| crate::Error::ManifestParse {
                path: path.to_path_buf(),
                source: e,
            })?;
        if !headers.iter().any(|h| h == EXCLUDE_COLUMN) {
            return Err(crate::Error::ManifestMissingColumn {
                path: path.to_path_buf(),
                column: EXCLUDE_COLUMN,
            });
        }

        let mut patterns = Vec::new();
        for row in reader.deserialize::<ManifestRow>() {
            let row = row.map_err(|e| crate::Error::ManifestParse {
                path: path.to_path_buf(),
                source: e,
            })?;
            if !row.exclude.is_empty() {
                patterns.push(row.exclude);
            }
        }

        Ok(Self { patterns })
    }

    pub fn patterns(&self) -> &[String] {
        &self.patterns
    }

    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    /// Compile the patterns into a matcher for entry names.
    pub fn to_glob_set(&self) -> crate::Result<GlobSet> {
        let mut builder = GlobSetBuilder::new();
        for pattern in &self.patterns {
            let glob = Glob::new(pattern).map_err(|e| crate::Error::InvalidPattern {
                pattern: pattern.clone(),
                source: e,
            })?;
            builder.add(glob);
        }
        builder.build().map_err(|e| crate::Error::InvalidPattern {
            pattern: self.patterns.join(","),
            source: e,
        })
    }
}

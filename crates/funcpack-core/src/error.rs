use std::path::PathBuf;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("failed to load config from {path}")]
    ConfigLoad {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config at {path}")]
    ConfigParse {
        path: PathBuf,
        source: toml::de::Error,
    },

    // ── Ignore manifest ──
    #[error("failed to read ignore manifest {path}")]
    ManifestRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse ignore manifest {path}")]
    ManifestParse { path: PathBuf, source: csv::Error },

    #[error("ignore manifest {path} has no `{column}` column")]
    ManifestMissingColumn { path: PathBuf, column: &'static str },

    #[error("invalid exclude pattern {pattern:?}")]
    InvalidPattern {
        pattern: String,
        source: globset::Error,
    },
}

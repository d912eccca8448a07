//! Core types and configuration for funcpack.
//!
//! This crate defines the `funcpack.toml` schema ([`FuncpackConfig`]),
//! the `.funcignore` exclusion manifest ([`ExcludeList`]), and shared error types.

pub mod config;
pub mod error;
pub mod manifest;

pub use config::{Compression, DeployConfig, FuncpackConfig, PackageConfig};
pub use error::{Error, Result};
pub use manifest::ExcludeList;

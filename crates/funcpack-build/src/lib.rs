//! Directory filtering and artifact packaging for funcpack.
//!
//! # Deploy pipeline
//!
//! ```text
//! funcpack deploy <resource-group> <app-name>
//!   1. Manifest ── .funcignore → ExcludeList
//!   2. Filter   ── read_dir(.) minus excluded names → FileSet
//!   3. Archive  ── remove stale app.zip, zip FileSet → app.zip
//!   4. Deploy   ── az functionapp deployment source config-zip
//! ```
//!
//! # Filter strategy
//!
//! Only the project directory's immediate entries are matched against the
//! manifest. A directory that survives the filter goes into the archive with
//! its whole subtree; nothing below the top level is filtered again.
//! The artifact itself is always left out.

pub mod archive;
pub mod filter;

pub use archive::{ArchiveError, ArchiveSummary, create_archive};
pub use filter::{FileSet, FilterError, collect_files};

//! Infrastructure layer - Snapshot and config persistence

pub mod config;
pub mod store;
pub mod workspace;

pub use config::Config;
pub use store::{RecordStore, DEFAULT_SNAPSHOT};
pub use workspace::{FileSystemWorkspace, Workspace};

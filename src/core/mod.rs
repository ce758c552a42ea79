pub mod config;
pub mod error;
pub mod types;

pub use config::CategorySets;
pub use error::{FileOpError, Result};
pub use types::{FileKind, FileSummary, StorageState};

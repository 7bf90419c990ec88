/// Fatal errors — misconfiguration that aborts the run before any
/// filesystem mutation takes place.
///
/// Per-entry mutation failures are deliberately *not* here: they are
/// data ([`crate::EntryStatus::Failed`]) so one bad entry can never
/// abort the rest of the walk.
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// The root path to process does not exist.
    #[error("target path does not exist: {0}")]
    NotFound(PathBuf),

    /// The permission string is not 3 or 4 octal digits.
    #[error("invalid permission string {value:?}: must be 3 or 4 octal digits, e.g. 755 or 0755")]
    InvalidDirective { value: String },

    /// An exclusion pattern failed to compile.
    #[error("invalid exclude pattern: {0}")]
    InvalidPattern(#[from] ignore::Error),
}

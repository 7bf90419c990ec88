/// Command-line surface.
use std::path::PathBuf;

use clap::Parser;

/// Simulates permission-denied errors on a target system by rewriting
/// POSIX permission bits across a file or directory tree.
#[derive(Debug, Parser)]
#[command(name = "permsweep", version)]
pub struct Args {
    /// The target directory or file to rewrite permissions on.
    pub target_path: PathBuf,

    /// The permission bits to set, as 3 or 4 octal digits (e.g. '755'
    /// or '0644'). Defaults to removing all permissions.
    #[arg(short, long)]
    pub permissions: Option<String>,

    /// Newline-separated gitignore-style patterns; matching entries
    /// are left untouched.
    #[arg(short, long)]
    pub exclude: Option<String>,

    /// Apply permission changes recursively to subdirectories.
    #[arg(short, long)]
    pub recursive: bool,

    /// Enable verbose logging.
    #[arg(short, long)]
    pub verbose: bool,
}

/// The path processor — walks the target tree and applies the
/// permission directive to each qualifying entry.
///
/// The walk is single-threaded and top-down: a directory's own mode is
/// changed before its children are enumerated. That ordering means a
/// remove-all run can make a directory unreadable before its children
/// are listed; such enumeration failures are recorded per entry and
/// never abort the rest of the walk.
use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;
use walkdir::WalkDir;

use crate::directive::PermissionDirective;
use crate::error::Error;
use crate::exclude::ExclusionMatcher;
use crate::outcome::{EntryKind, EntryOutcome, EntryStatus, SkipReason};
use crate::platform;

/// Everything one run needs. Immutable for the duration of the walk.
pub struct TraversalRequest {
    /// Resolved root path (the caller canonicalises before building
    /// the request).
    pub root: PathBuf,
    pub directive: PermissionDirective,
    /// Gates descent into subdirectories only; the root directory's
    /// own mode is changed either way.
    pub recursive: bool,
    pub matcher: ExclusionMatcher,
}

/// Walk the request's root and apply its directive per entry.
///
/// Returns one [`EntryOutcome`] per visited entry, in traversal order.
/// The only fatal error is a missing root; it aborts before any entry
/// is visited or mutated.
pub fn process(request: &TraversalRequest) -> Result<Vec<EntryOutcome>, Error> {
    // fs::metadata follows symlinks, so a root that is a broken link
    // is treated the same as an absent root.
    let root_meta =
        fs::metadata(&request.root).map_err(|_| Error::NotFound(request.root.clone()))?;

    debug!(
        root = %request.root.display(),
        recursive = request.recursive,
        "starting permission walk"
    );

    let supported = platform::supports_mode_bits();
    let mut outcomes = Vec::new();

    // A file root is a single apply; recursion is meaningless.
    if !root_meta.is_dir() {
        outcomes.push(apply_to_one(request, &request.root, EntryKind::File, supported));
        return Ok(outcomes);
    }

    // With recursion off, depth 0 yields exactly the root directory.
    // Each directory is enumerated once per level, so no entry can be
    // visited (and mutated) twice in one run.
    let max_depth = if request.recursive { usize::MAX } else { 0 };

    for entry in WalkDir::new(&request.root).max_depth(max_depth) {
        match entry {
            Ok(entry) => {
                let kind = if entry.file_type().is_dir() {
                    EntryKind::Directory
                } else {
                    EntryKind::File
                };
                outcomes.push(apply_to_one(request, entry.path(), kind, supported));
            }
            Err(err) => {
                // Typically a directory listing that failed after the
                // directory's own permissions were already stripped.
                let path = err
                    .path()
                    .map(Path::to_path_buf)
                    .unwrap_or_else(|| request.root.clone());
                outcomes.push(EntryOutcome {
                    path,
                    kind: EntryKind::Directory,
                    status: EntryStatus::Failed(err.into()),
                });
            }
        }
    }

    Ok(outcomes)
}

/// Apply the directive to a single entry: exclusion gate, capability
/// gate, then the mutation syscall.
fn apply_to_one(
    request: &TraversalRequest,
    path: &Path,
    kind: EntryKind,
    supported: bool,
) -> EntryOutcome {
    let is_dir = matches!(kind, EntryKind::Directory);

    if request.matcher.matches(path, is_dir) {
        debug!(path = %path.display(), "skipping excluded path");
        return EntryOutcome {
            path: path.to_path_buf(),
            kind,
            status: EntryStatus::Skipped(SkipReason::Excluded),
        };
    }

    if !supported {
        return EntryOutcome {
            path: path.to_path_buf(),
            kind,
            status: EntryStatus::Skipped(SkipReason::Unsupported),
        };
    }

    let status = match platform::install_mode(path, request.directive.target_mode()) {
        Ok(()) => EntryStatus::Applied,
        // Permission denied, entry vanished mid-walk, broken link.
        // Recorded and the walk moves on.
        Err(err) => EntryStatus::Failed(err),
    };
    EntryOutcome {
        path: path.to_path_buf(),
        kind,
        status,
    }
}

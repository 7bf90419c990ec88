/// Outcome reporting — turns the core's per-entry outcomes into log
/// lines.
///
/// Severity mirrors the outcome: applied entries at INFO, excluded
/// skips at DEBUG (visible with -v), unsupported-platform skips at
/// WARN, failures at ERROR with the underlying cause.
use permsweep_core::{EntryOutcome, EntryStatus, PermissionDirective, RunSummary, SkipReason};
use tracing::{debug, error, info, warn};

/// Log a single entry's outcome.
pub fn report_outcome(outcome: &EntryOutcome, directive: PermissionDirective) {
    let path = outcome.path.display();
    match &outcome.status {
        EntryStatus::Applied => match directive {
            PermissionDirective::Explicit(mode) => {
                info!("changed permissions of {path} to {mode:o}");
            }
            PermissionDirective::RemoveAll => {
                info!("removed all permissions from {path}");
            }
        },
        EntryStatus::Skipped(SkipReason::Excluded) => {
            debug!("skipping excluded path: {path}");
        }
        EntryStatus::Skipped(SkipReason::Unsupported) => {
            warn!("removing permissions is only supported on POSIX systems, skipping {path}");
        }
        EntryStatus::Failed(err) => {
            error!("failed to change permissions of {path}: {err}");
        }
    }
}

/// Log the end-of-run summary line.
pub fn report_summary(summary: RunSummary) {
    info!(
        "{} changed, {} skipped, {} failed",
        summary.applied, summary.skipped, summary.failed
    );
}

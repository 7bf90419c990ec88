/// Per-entry results and the run summary.
///
/// The processor reports what happened to every visited entry through
/// these types rather than logging directly; the frontend decides how
/// to present them. Outcomes are emitted in traversal order and never
/// persisted.
use std::io;
use std::path::PathBuf;

/// What kind of filesystem object an outcome refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    File,
    Directory,
}

/// Why an entry was visited but left unmodified.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// The entry matched an exclusion pattern.
    Excluded,
    /// The platform has no POSIX mode bits to rewrite.
    Unsupported,
}

/// What happened to one visited entry.
#[derive(Debug)]
pub enum EntryStatus {
    /// The requested mode was installed.
    Applied,
    /// No mutation was attempted.
    Skipped(SkipReason),
    /// The mutation (or enumeration) syscall failed; the walk
    /// continued past this entry.
    Failed(io::Error),
}

impl EntryStatus {
    /// True for `Applied` and both skip reasons; only `Failed` counts
    /// against the run's exit status.
    pub fn is_success(&self) -> bool {
        !matches!(self, EntryStatus::Failed(_))
    }
}

/// The result of visiting one filesystem entry.
#[derive(Debug)]
pub struct EntryOutcome {
    pub path: PathBuf,
    pub kind: EntryKind,
    pub status: EntryStatus,
}

/// Aggregate counts over one run, derived from the outcome sequence.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    pub applied: u64,
    pub skipped: u64,
    pub failed: u64,
}

impl RunSummary {
    /// Tally the outcome sequence of one run.
    pub fn from_outcomes(outcomes: &[EntryOutcome]) -> Self {
        let mut summary = Self::default();
        for outcome in outcomes {
            match outcome.status {
                EntryStatus::Applied => summary.applied += 1,
                EntryStatus::Skipped(_) => summary.skipped += 1,
                EntryStatus::Failed(_) => summary.failed += 1,
            }
        }
        summary
    }

    /// True when no entry failed. Skipped entries are intentional and
    /// do not count as failures.
    pub fn is_success(self) -> bool {
        self.failed == 0
    }
}

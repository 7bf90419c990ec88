/// permsweep Core — traversal and permission mutation.
///
/// This crate contains all business logic with zero presentation
/// dependencies. The frontend passes in a [`TraversalRequest`] and
/// receives one [`EntryOutcome`] per visited entry; how those outcomes
/// are logged or rendered is entirely the caller's concern.
///
/// # Modules
///
/// - [`directive`] — The requested permission outcome (explicit mode or
///   remove-all) and its octal-string validation.
/// - [`exclude`] — Compiled gitignore-style exclusion patterns.
/// - [`processor`] — The walk itself: visit entries top-down, apply the
///   directive, accumulate per-entry outcomes.
/// - [`outcome`] — Per-entry results and the run summary.
/// - [`platform`] — POSIX mode-bit capability probe and the
///   chmod-style mode installer.
/// - [`error`] — Fatal errors that abort before any mutation.
pub mod directive;
pub mod error;
pub mod exclude;
pub mod outcome;
pub mod platform;
pub mod processor;

pub use directive::PermissionDirective;
pub use error::Error;
pub use exclude::ExclusionMatcher;
pub use outcome::{EntryKind, EntryOutcome, EntryStatus, RunSummary, SkipReason};
pub use processor::{process, TraversalRequest};

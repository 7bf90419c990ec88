/// CLI frontend for permsweep.
///
/// Owns everything the core deliberately does not: argument parsing,
/// path resolution, and presentation of the per-entry outcomes. The
/// core stays testable without capturing console output.
pub mod args;
pub mod report;

pub use args::Args;

use std::process::ExitCode;

use anyhow::Context;
use permsweep_core::{
    process, ExclusionMatcher, PermissionDirective, RunSummary, TraversalRequest,
};
use tracing::{debug, error};

/// Run one invocation end to end and map the result to the process
/// exit code: 0 when every entry was applied or intentionally skipped,
/// 1 on fatal misconfiguration or any per-entry failure.
pub fn run(args: Args) -> ExitCode {
    match try_run(args) {
        Ok(summary) if summary.is_success() => ExitCode::SUCCESS,
        Ok(_) => ExitCode::from(1),
        Err(err) => {
            error!("{err:#}");
            ExitCode::from(1)
        }
    }
}

/// Validate inputs, walk, report. All three fatal error kinds (missing
/// root, malformed permission string, malformed pattern) surface here
/// before any filesystem mutation.
fn try_run(args: Args) -> anyhow::Result<RunSummary> {
    if args.verbose {
        debug!("verbose logging enabled");
    }

    // The context keeps the requested path; the chained io error says
    // why resolution failed (missing vs. permission denied on a
    // component).
    let root = args.target_path.canonicalize().with_context(|| {
        format!(
            "cannot access target path: {}",
            args.target_path.display()
        )
    })?;

    let directive = PermissionDirective::parse(args.permissions.as_deref())?;
    let matcher = ExclusionMatcher::build(&root, args.exclude.as_deref())?;

    let outcomes = process(&TraversalRequest {
        root,
        directive,
        recursive: args.recursive,
        matcher,
    })?;

    for outcome in &outcomes {
        report::report_outcome(outcome, directive);
    }
    let summary = RunSummary::from_outcomes(&outcomes);
    report::report_summary(summary);
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn args(target: PathBuf, permissions: Option<&str>) -> Args {
        Args {
            target_path: target,
            permissions: permissions.map(String::from),
            exclude: None,
            recursive: false,
            verbose: false,
        }
    }

    #[test]
    fn test_missing_target_is_fatal() {
        let tmp = tempfile::TempDir::new().unwrap();
        let result = try_run(args(tmp.path().join("absent"), Some("755")));
        assert!(result.is_err());
    }

    #[test]
    fn test_invalid_permissions_fatal_before_mutation() {
        let tmp = tempfile::TempDir::new().unwrap();
        let file = tmp.path().join("f.txt");
        std::fs::write(&file, b"x").unwrap();

        let result = try_run(args(file.clone(), Some("77")));
        assert!(result.is_err());

        // The file must still be writable by its owner: nothing was
        // mutated.
        assert!(!std::fs::metadata(&file).unwrap().permissions().readonly());
    }

    #[test]
    fn test_invalid_pattern_is_fatal() {
        let tmp = tempfile::TempDir::new().unwrap();
        let mut a = args(tmp.path().to_path_buf(), Some("755"));
        a.exclude = Some("[invalid".to_string());
        assert!(try_run(a).is_err());
    }

    #[cfg(unix)]
    #[test]
    fn test_successful_run_reports_summary() {
        let tmp = tempfile::TempDir::new().unwrap();
        std::fs::write(tmp.path().join("f.txt"), b"x").unwrap();

        let mut a = args(tmp.path().to_path_buf(), Some("755"));
        a.recursive = true;
        let summary = try_run(a).unwrap();
        assert!(summary.is_success());
        assert_eq!(summary.applied, 2);
    }
}

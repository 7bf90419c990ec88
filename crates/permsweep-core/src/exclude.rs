/// Exclusion matching — compiled gitignore-style patterns.
///
/// Wraps the `ignore` crate's gitignore engine: `*` and `**`
/// wildcards, trailing-`/` directory-only rules, and `!` negation with
/// gitignore precedence (the last matching pattern wins).
use std::path::Path;

use ignore::gitignore::{Gitignore, GitignoreBuilder};

use crate::error::Error;

/// An immutable compiled exclusion pattern set.
///
/// Built once per run from newline-separated pattern text, rooted at
/// the traversal root so relative patterns anchor correctly. Absent or
/// blank text compiles to the matcher that matches nothing.
pub struct ExclusionMatcher {
    inner: Option<Gitignore>,
}

impl ExclusionMatcher {
    /// Compile `pattern_text` into a matcher rooted at `root`.
    ///
    /// Fails with [`Error::InvalidPattern`] when any line is a
    /// malformed glob (e.g. an unterminated character class). The
    /// gitignore engine itself swallows bad lines the way git does, so
    /// every line is validated eagerly here; a malformed pattern must
    /// abort the run before any mutation, not silently match nothing.
    pub fn build(root: &Path, pattern_text: Option<&str>) -> Result<Self, Error> {
        let Some(text) = pattern_text else {
            return Ok(Self { inner: None });
        };
        if text.trim().is_empty() {
            return Ok(Self { inner: None });
        }

        let mut builder = GitignoreBuilder::new(root);
        for line in text.lines() {
            validate_line(line)?;
            builder.add_line(None, line)?;
        }
        Ok(Self {
            inner: Some(builder.build()?),
        })
    }

    /// True when no patterns were supplied.
    pub fn is_empty(&self) -> bool {
        self.inner.is_none()
    }

    /// Whether `path` is excluded. Pure and deterministic.
    ///
    /// An entry under a matched directory counts as matched itself, so
    /// excluding `build/` also protects everything inside it.
    pub fn matches(&self, path: &Path, is_dir: bool) -> bool {
        let Some(gitignore) = &self.inner else {
            return false;
        };
        // The engine strips its own root to the empty path, which no
        // pattern can match; match the root entry by its file name so
        // the traversal target itself can be excluded too.
        if path == gitignore.path() {
            return path
                .file_name()
                .is_some_and(|name| gitignore.matched(Path::new(name), is_dir).is_ignore());
        }
        gitignore
            .matched_path_or_any_parents(path, is_dir)
            .is_ignore()
    }
}

/// Reject malformed glob lines before they reach the lenient gitignore
/// parser.
///
/// Blank lines and `#` comments are inert in gitignore syntax and are
/// not validated. Negation and directory-only markers are stripped
/// first so the bare glob is what gets checked.
fn validate_line(line: &str) -> Result<(), Error> {
    let trimmed = line.trim();
    if trimmed.is_empty() || trimmed.starts_with('#') {
        return Ok(());
    }
    let glob = trimmed.strip_prefix('!').unwrap_or(trimmed);
    let glob = glob.strip_suffix('/').unwrap_or(glob);
    if glob.is_empty() {
        return Ok(());
    }
    if let Err(err) = globset::Glob::new(glob) {
        return Err(Error::InvalidPattern(ignore::Error::Glob {
            glob: Some(trimmed.to_string()),
            err: err.kind().to_string(),
        }));
    }
    Ok(())
}

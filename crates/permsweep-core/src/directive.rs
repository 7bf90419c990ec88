/// The permission directive — what one run does to each entry it
/// visits.
///
/// Parsed once from the caller-supplied string before the walk starts,
/// so a malformed directive can never surface mid-traversal.
use crate::error::Error;

/// The requested permission outcome for every qualifying entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PermissionDirective {
    /// Install exactly this mode, replacing the entry's current
    /// permission bits wholesale (chmod "set mode" semantics, not a
    /// bitwise merge).
    Explicit(u32),
    /// Clear every permission bit (mode 0).
    RemoveAll,
}

impl PermissionDirective {
    /// Parse a caller-supplied permission string.
    ///
    /// `None` means "remove all permissions". A present string must be
    /// exactly 3 or 4 octal digits (e.g. `"755"` or `"0644"`);
    /// anything else is [`Error::InvalidDirective`].
    pub fn parse(raw: Option<&str>) -> Result<Self, Error> {
        let Some(raw) = raw else {
            return Ok(Self::RemoveAll);
        };

        let invalid = || Error::InvalidDirective {
            value: raw.to_string(),
        };

        // Length is checked on characters, not bytes, so multi-byte
        // input fails the digit check rather than slicing mid-char.
        if raw.chars().count() != 3 && raw.chars().count() != 4 {
            return Err(invalid());
        }
        if !raw.chars().all(|c| ('0'..='7').contains(&c)) {
            return Err(invalid());
        }

        let mode = u32::from_str_radix(raw, 8).map_err(|_| invalid())?;
        Ok(Self::Explicit(mode))
    }

    /// The literal mode value to install on each entry.
    pub fn target_mode(self) -> u32 {
        match self {
            Self::Explicit(mode) => mode,
            Self::RemoveAll => 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_absent_is_remove_all() {
        assert_eq!(
            PermissionDirective::parse(None).unwrap(),
            PermissionDirective::RemoveAll
        );
    }

    #[test]
    fn test_parse_three_digits() {
        assert_eq!(
            PermissionDirective::parse(Some("755")).unwrap(),
            PermissionDirective::Explicit(0o755)
        );
        assert_eq!(
            PermissionDirective::parse(Some("000")).unwrap(),
            PermissionDirective::Explicit(0)
        );
    }

    #[test]
    fn test_parse_four_digits() {
        assert_eq!(
            PermissionDirective::parse(Some("0644")).unwrap(),
            PermissionDirective::Explicit(0o644)
        );
        assert_eq!(
            PermissionDirective::parse(Some("4755")).unwrap(),
            PermissionDirective::Explicit(0o4755)
        );
    }

    #[test]
    fn test_parse_wrong_length_rejected() {
        assert!(PermissionDirective::parse(Some("77")).is_err());
        assert!(PermissionDirective::parse(Some("77777")).is_err());
        assert!(PermissionDirective::parse(Some("")).is_err());
    }

    #[test]
    fn test_parse_non_octal_rejected() {
        assert!(PermissionDirective::parse(Some("78a")).is_err());
        assert!(PermissionDirective::parse(Some("888")).is_err());
        // from_str_radix would accept a leading sign; the digit check
        // must not.
        assert!(PermissionDirective::parse(Some("+55")).is_err());
        assert!(PermissionDirective::parse(Some("-55")).is_err());
    }

    #[test]
    fn test_target_mode() {
        assert_eq!(PermissionDirective::Explicit(0o750).target_mode(), 0o750);
        assert_eq!(PermissionDirective::RemoveAll.target_mode(), 0);
    }
}

/// Platform-specific permission handling — mode-bit capability probe
/// and the chmod-style mode installer.
use std::fs;
use std::io;
use std::path::Path;

/// Whether this platform exposes POSIX mode bits.
///
/// The processor probes this once per run, not per entry; off-POSIX
/// every entry is skipped as unsupported rather than failed.
pub const fn supports_mode_bits() -> bool {
    cfg!(unix)
}

/// Install `mode` on `path`, replacing its permission bits wholesale.
///
/// Follows symlinks to their target; a broken link surfaces as a
/// not-found error for the caller to record against that entry.
#[cfg(unix)]
pub fn install_mode(path: &Path, mode: u32) -> io::Result<()> {
    use std::os::unix::fs::PermissionsExt;
    fs::set_permissions(path, fs::Permissions::from_mode(mode))
}

#[cfg(not(unix))]
pub fn install_mode(_path: &Path, _mode: u32) -> io::Result<()> {
    // Unreachable when callers honour supports_mode_bits().
    Err(io::Error::new(
        io::ErrorKind::Unsupported,
        "POSIX mode bits are not supported on this platform",
    ))
}

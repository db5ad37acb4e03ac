//! Creating and extending hook files

use super::{HOOK_PREAMBLE, KNOWN_HOOKS};
use crate::error::HuskyError;
use anyhow::Result;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;
use tracing::{debug, warn};

/// Permission bits for hook files
#[cfg(unix)]
const HOOK_MODE: u32 = 0o755;

/// What happened to a hook file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HookAction {
    /// The file was written from scratch
    Created,
    /// A command was appended to an existing file
    Updated,
}

/// Render the full content of a fresh hook file running `cmd`
#[must_use]
pub fn render_hook(cmd: &str) -> String {
    format!("{HOOK_PREAMBLE}\n{cmd}\n")
}

/// Create or replace the hook file at `file` so that it runs `cmd`.
///
/// The parent directory must already exist; it is normally the hooks
/// directory created by `install`.
///
/// # Errors
///
/// Returns [`HuskyError::HookDirMissing`] when the parent directory is
/// absent, or the underlying I/O error if the file cannot be written.
pub fn set_hook(file: &Path, cmd: &str) -> Result<HookAction> {
    let dir = match file.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    if !dir.exists() {
        return Err(HuskyError::HookDirMissing {
            dir: dir.to_path_buf(),
        }
        .into());
    }

    warn_unknown_hook(file);

    std::fs::write(file, render_hook(cmd))?;
    make_executable(file)?;

    debug!(file = %file.display(), "hook file written");
    Ok(HookAction::Created)
}

/// Append `cmd` to the hook file at `file`, creating it when missing.
///
/// A missing file is handled exactly like [`set_hook`], so the first call
/// writes the preamble. Existing content is left untouched and duplicate
/// commands are not detected.
///
/// # Errors
///
/// Returns the same errors as [`set_hook`] for a missing file, or the
/// underlying I/O error if the existing file cannot be appended to.
pub fn add_hook(file: &Path, cmd: &str) -> Result<HookAction> {
    if !file.exists() {
        return set_hook(file, cmd);
    }

    let mut handle = OpenOptions::new().append(true).open(file)?;
    handle.write_all(format!("{cmd}\n").as_bytes())?;

    debug!(file = %file.display(), "command appended to hook file");
    Ok(HookAction::Updated)
}

fn warn_unknown_hook(file: &Path) {
    let name = file.file_name().and_then(|name| name.to_str());
    if let Some(name) = name.filter(|name| !KNOWN_HOOKS.contains(name)) {
        warn!("{name} is not a known git hook name");
    }
}

#[cfg(unix)]
fn make_executable(file: &Path) -> std::io::Result<()> {
    use std::os::unix::fs::PermissionsExt;
    std::fs::set_permissions(file, std::fs::Permissions::from_mode(HOOK_MODE))
}

#[cfg(not(unix))]
#[allow(clippy::unnecessary_wraps)]
const fn make_executable(_file: &Path) -> std::io::Result<()> {
    Ok(())
}

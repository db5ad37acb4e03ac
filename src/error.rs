//! Error types for precondition and git failures

use std::path::PathBuf;
use thiserror::Error;

/// Help page for custom hook directories
pub const CUSTOM_DIR_HELP_URL: &str = "https://typicode.github.io/husky/#/?id=custom-directory";

/// Failures that the hook manager reports with its own message.
///
/// I/O errors are not represented here; they travel through `anyhow`
/// unchanged so the caller sees the operating system's message.
#[derive(Debug, Error)]
pub enum HuskyError {
    /// The hooks directory would resolve outside the working directory
    #[error(".. not allowed (see {url})", url = CUSTOM_DIR_HELP_URL)]
    PathEscape {
        /// The directory argument as given
        dir: String,
    },

    /// The working directory is not the git top level
    #[error(".git can't be found (see {url})", url = CUSTOM_DIR_HELP_URL)]
    GitDirNotFound,

    /// The directory a hook file would live in does not exist
    #[error("can't create hook, {} directory doesn't exist (try running husky install)", .dir.display())]
    HookDirMissing {
        /// Missing parent directory
        dir: PathBuf,
    },

    /// A git invocation exited unsuccessfully
    #[error("git {args} failed: {detail}")]
    GitCommand {
        /// Arguments passed to git, space separated
        args: String,
        /// Trimmed stderr of the git process, or the exit status when empty
        detail: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_path_escape_message_links_help() {
        let err = HuskyError::PathEscape {
            dir: "../x".to_string(),
        };
        assert_eq!(
            err.to_string(),
            ".. not allowed (see https://typicode.github.io/husky/#/?id=custom-directory)"
        );
    }

    #[test]
    fn test_hook_dir_missing_message() {
        let err = HuskyError::HookDirMissing {
            dir: PathBuf::from("hooks"),
        };
        assert_eq!(
            err.to_string(),
            "can't create hook, hooks directory doesn't exist (try running husky install)"
        );
    }

    #[test]
    fn test_git_command_message() {
        let err = HuskyError::GitCommand {
            args: "config --unset core.hooksPath".to_string(),
            detail: "exit status: 5".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "git config --unset core.hooksPath failed: exit status: 5"
        );
    }
}

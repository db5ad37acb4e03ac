//! Access to the `git` command line

use crate::error::HuskyError;
use anyhow::{Context, Result};
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tracing::debug;

/// Configuration key git reads hook scripts from
pub const HOOKS_PATH_KEY: &str = "core.hooksPath";

/// The git operations the hook manager depends on
pub trait GitClient {
    /// Check whether the working directory is inside a git work tree.
    ///
    /// Returns `Ok(false)` when git runs but rejects the directory.
    ///
    /// # Errors
    ///
    /// Returns an error if git cannot be executed at all
    fn probe_repository(&self) -> Result<bool>;

    /// Point `core.hooksPath` at `path`
    ///
    /// # Errors
    ///
    /// Returns an error if git fails to write the setting
    fn set_hooks_path(&self, path: &Path) -> Result<()>;

    /// Remove `core.hooksPath`
    ///
    /// # Errors
    ///
    /// Returns an error if git fails to remove the setting
    fn unset_hooks_path(&self) -> Result<()>;
}

/// [`GitClient`] backed by the `git` executable
#[derive(Debug, Clone)]
pub struct GitCli {
    /// Directory git commands run in
    work_dir: PathBuf,
    /// Extra environment for every git invocation
    envs: Vec<(OsString, OsString)>,
}

impl GitCli {
    /// Create a client that runs git in `work_dir`
    #[must_use]
    pub fn new<P: AsRef<Path>>(work_dir: P) -> Self {
        Self {
            work_dir: work_dir.as_ref().to_path_buf(),
            envs: Vec::new(),
        }
    }

    /// Set an environment variable for every git command this client runs
    #[must_use]
    pub fn with_env<K, V>(mut self, key: K, value: V) -> Self
    where
        K: Into<OsString>,
        V: Into<OsString>,
    {
        self.envs.push((key.into(), value.into()));
        self
    }

    /// Directory git commands run in
    #[must_use]
    pub fn work_dir(&self) -> &Path {
        &self.work_dir
    }

    fn output(&self, args: &[&str]) -> Result<Output> {
        debug!(args = %args.join(" "), dir = %self.work_dir.display(), "running git");
        Command::new("git")
            .args(args)
            .current_dir(&self.work_dir)
            .envs(self.envs.iter().map(|(key, value)| (key, value)))
            .output()
            .with_context(|| format!("Failed to run git command: git {}", args.join(" ")))
    }

    /// Run a git command and fail on a non-zero exit
    fn run_git_command(&self, args: &[&str]) -> Result<()> {
        let output = self.output(args)?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            let detail = if stderr.is_empty() {
                output.status.to_string()
            } else {
                stderr
            };
            return Err(HuskyError::GitCommand {
                args: args.join(" "),
                detail,
            }
            .into());
        }

        Ok(())
    }
}

impl GitClient for GitCli {
    fn probe_repository(&self) -> Result<bool> {
        let output = self.output(&["rev-parse"])?;
        debug!(status = %output.status, "repository probe finished");
        Ok(output.status.success())
    }

    fn set_hooks_path(&self, path: &Path) -> Result<()> {
        let value = path.to_string_lossy();
        self.run_git_command(&["config", HOOKS_PATH_KEY, &value])
    }

    fn unset_hooks_path(&self) -> Result<()> {
        self.run_git_command(&["config", "--unset", HOOKS_PATH_KEY])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn git(dir: &Path, args: &[&str]) -> Output {
        Command::new("git")
            .args(args)
            .current_dir(dir)
            .output()
            .unwrap()
    }

    #[test]
    fn test_probe_outside_repository() {
        let temp_dir = TempDir::new().unwrap();
        let work_dir = temp_dir.path().join("plain");
        std::fs::create_dir(&work_dir).unwrap();

        // Stop discovery at the temp dir even if it sits inside a checkout
        let client =
            GitCli::new(&work_dir).with_env("GIT_CEILING_DIRECTORIES", temp_dir.path());

        assert!(!client.probe_repository().unwrap());
    }

    #[test]
    fn test_probe_inside_repository() {
        let temp_dir = TempDir::new().unwrap();
        git2::Repository::init(temp_dir.path()).unwrap();

        let client = GitCli::new(temp_dir.path());
        assert!(client.probe_repository().unwrap());
    }

    #[test]
    fn test_set_and_unset_hooks_path() {
        let temp_dir = TempDir::new().unwrap();
        git2::Repository::init(temp_dir.path()).unwrap();
        let client = GitCli::new(temp_dir.path());

        client.set_hooks_path(Path::new(".husky")).unwrap();
        let output = git(temp_dir.path(), &["config", "--local", HOOKS_PATH_KEY]);
        assert_eq!(String::from_utf8_lossy(&output.stdout).trim(), ".husky");

        client.unset_hooks_path().unwrap();
        let output = git(temp_dir.path(), &["config", "--local", HOOKS_PATH_KEY]);
        assert!(!output.status.success());
    }

    #[test]
    fn test_unset_without_value_reports_git_failure() {
        let temp_dir = TempDir::new().unwrap();
        git2::Repository::init(temp_dir.path()).unwrap();
        let client = GitCli::new(temp_dir.path());

        let err = client.unset_hooks_path().unwrap_err();
        let husky_err = err.downcast_ref::<HuskyError>().unwrap();
        assert!(matches!(husky_err, HuskyError::GitCommand { args, .. } if args == "config --unset core.hooksPath"));
    }

    #[test]
    fn test_missing_git_executable_is_an_error() {
        let temp_dir = TempDir::new().unwrap();
        let client = GitCli::new(temp_dir.path()).with_env("PATH", "");

        let err = client.probe_repository().unwrap_err();

        assert!(
            err.to_string()
                .starts_with("Failed to run git command: git rev-parse")
        );
    }
}

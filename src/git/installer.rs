//! Git hook installation and removal

use crate::{
    config::{DEFAULT_HOOKS_DIR, Settings},
    error::HuskyError,
    git::{GitCli, GitClient},
    hooks::{SHIM_DIR, SHIM_FILE, SHIM_SCRIPT},
};
use anyhow::{Context, Result};
use std::path::{Component, Path, PathBuf};
use tracing::{debug, info};

/// Permission bits for files inside the shim folder
#[cfg(unix)]
const SHIM_MODE: u32 = 0o600;

/// Result of an install request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InstallOutcome {
    /// Hooks directory provisioned and `core.hooksPath` updated
    Installed {
        /// Hooks directory relative to the working directory
        hooks_dir: PathBuf,
    },
    /// The `HUSKY` toggle disabled installation
    Disabled,
    /// The working directory is not inside a git work tree
    NotARepository,
}

/// Installs the hooks directory into a repository and wires git to it
pub struct HookInstaller<G: GitClient> {
    /// Working directory all paths are resolved against
    root: PathBuf,
    /// Git access
    git: G,
    /// Runtime settings
    settings: Settings,
}

impl HookInstaller<GitCli> {
    /// Create an installer for the current working directory
    ///
    /// # Errors
    ///
    /// Returns an error if the current directory cannot be determined
    pub fn from_current_dir(settings: Settings) -> Result<Self> {
        let root =
            std::env::current_dir().context("Failed to get current working directory")?;
        let git = GitCli::new(&root);
        Ok(Self::new(root, git, settings))
    }
}

impl<G: GitClient> HookInstaller<G> {
    /// Create an installer rooted at `root` that talks to git through `git`
    #[must_use]
    pub fn new<P: Into<PathBuf>>(root: P, git: G, settings: Settings) -> Self {
        Self {
            root: normalize(&root.into()),
            git,
            settings,
        }
    }

    /// Working directory of this installer
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Git client used by this installer
    #[must_use]
    pub const fn git(&self) -> &G {
        &self.git
    }

    /// Provision `dir` (default `.husky`) and point `core.hooksPath` at it.
    ///
    /// Outside a git work tree this succeeds without touching anything.
    ///
    /// # Errors
    ///
    /// Returns [`HuskyError::PathEscape`] if `dir` leaves the working
    /// directory, [`HuskyError::GitDirNotFound`] if the working directory is
    /// not the repository top level, or an error from the filesystem or git
    /// while provisioning.
    pub fn install(&self, dir: Option<&str>) -> Result<InstallOutcome> {
        if !self.settings.install_enabled {
            info!("install disabled by HUSKY=0");
            return Ok(InstallOutcome::Disabled);
        }

        let dir = dir.filter(|dir| !dir.is_empty()).unwrap_or(DEFAULT_HOOKS_DIR);

        if !self.git.probe_repository()? {
            debug!(root = %self.root.display(), "not inside a git work tree, nothing to install");
            return Ok(InstallOutcome::NotARepository);
        }

        let target = self.resolve_hooks_dir(dir)?;

        if !self.root.join(".git").exists() {
            return Err(HuskyError::GitDirNotFound.into());
        }

        self.write_shim(&target)?;

        let hooks_dir = PathBuf::from(dir);
        self.git
            .set_hooks_path(&hooks_dir)
            .context("git hooks failed to install")?;

        info!(hooks_dir = %hooks_dir.display(), "git hooks installed");
        Ok(InstallOutcome::Installed { hooks_dir })
    }

    /// Remove `core.hooksPath` from the repository configuration
    ///
    /// # Errors
    ///
    /// Returns the git failure unchanged
    pub fn uninstall(&self) -> Result<()> {
        self.git.unset_hooks_path()?;
        info!("core.hooksPath unset");
        Ok(())
    }

    /// Resolve `dir` against the working directory, rejecting escapes
    ///
    /// # Errors
    ///
    /// Returns [`HuskyError::PathEscape`] when the resolved path is not
    /// inside the working directory
    pub fn resolve_hooks_dir(&self, dir: &str) -> Result<PathBuf> {
        let resolved = normalize(&self.root.join(dir));
        debug!(dir, resolved = %resolved.display(), "resolved hooks directory");

        if !resolved.starts_with(&self.root) {
            return Err(HuskyError::PathEscape {
                dir: dir.to_string(),
            }
            .into());
        }

        Ok(resolved)
    }

    /// Create `<target>/_` with its ignore file and the shim script
    fn write_shim(&self, target: &Path) -> Result<()> {
        let shim_dir = target.join(SHIM_DIR);
        std::fs::create_dir_all(&shim_dir)
            .with_context(|| format!("mkdir error {}", shim_dir.display()))?;

        write_private(&shim_dir.join(".gitignore"), "*")
            .with_context(|| format!("create {SHIM_DIR}/.gitignore error"))?;

        write_private(&shim_dir.join(SHIM_FILE), SHIM_SCRIPT)
            .with_context(|| format!("create {SHIM_DIR}/{SHIM_FILE} error"))?;

        debug!(dir = %shim_dir.display(), "shim written");
        Ok(())
    }
}

fn write_private(path: &Path, content: &str) -> std::io::Result<()> {
    std::fs::write(path, content)?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        std::fs::set_permissions(path, std::fs::Permissions::from_mode(SHIM_MODE))?;
    }

    Ok(())
}

/// Lexically resolve `.` and `..` components without touching the disk
fn normalize(path: &Path) -> PathBuf {
    let mut normalized = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                normalized.pop();
            }
            other => normalized.push(other.as_os_str()),
        }
    }
    normalized
}

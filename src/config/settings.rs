//! Process settings read from the environment
//!
//! Settings are captured once at startup so the rest of the program never
//! reads the environment directly.

/// Environment variable that disables `install` when set to `0`
pub const HUSKY_ENV: &str = "HUSKY";

/// Default hooks directory, relative to the working directory
pub const DEFAULT_HOOKS_DIR: &str = ".husky";

/// Settings that influence the hook manager at runtime
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Settings {
    /// Whether `install` is allowed to touch the repository
    pub install_enabled: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            install_enabled: true,
        }
    }
}

impl Settings {
    /// Capture settings from the process environment
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Capture settings through an arbitrary variable lookup
    #[must_use]
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let install_enabled = lookup(HUSKY_ENV).is_none_or(|value| value != "0");
        Self { install_enabled }
    }
}

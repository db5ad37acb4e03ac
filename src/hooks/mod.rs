//! Hook files and the shared shim they source

pub mod writer;

pub use writer::*;

/// Name of the shim subfolder inside the hooks directory
pub const SHIM_DIR: &str = "_";

/// File name of the shim script
pub const SHIM_FILE: &str = "husky.sh";

/// Shell snippet every hook sources before running its commands
pub const SHIM_SCRIPT: &str = include_str!("husky.sh");

/// Lines written at the top of every new hook file
pub const HOOK_PREAMBLE: &str = "#!/usr/bin/env sh\n. \"$(dirname -- \"$0\")/_/husky.sh\"\n";

/// Git hook events a hook file is usually named after
pub const KNOWN_HOOKS: &[&str] = &[
    "applypatch-msg",
    "pre-applypatch",
    "post-applypatch",
    "pre-commit",
    "pre-merge-commit",
    "prepare-commit-msg",
    "commit-msg",
    "post-commit",
    "pre-rebase",
    "post-checkout",
    "post-merge",
    "pre-push",
    "post-rewrite",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shim_is_a_shell_script() {
        assert!(SHIM_SCRIPT.starts_with("#!/usr/bin/env sh\n"));
        assert!(SHIM_SCRIPT.contains("husky_skip_init"));
        assert!(SHIM_SCRIPT.contains("\"$HUSKY\" = \"0\""));
    }

    #[test]
    fn test_preamble_sources_shim_relative_to_hook() {
        assert!(HOOK_PREAMBLE.contains(&format!("/{SHIM_DIR}/{SHIM_FILE}")));
        assert_eq!(HOOK_PREAMBLE.lines().count(), 2);
    }
}

//! Output formatting utilities

use console::{Emoji, style};
use std::io::IsTerminal;
use std::path::Path;

/// Output formatter that strips colors and emojis for non-TTY output
pub struct OutputFormatter {
    /// Whether output is going to a TTY
    is_tty: bool,
}

impl OutputFormatter {
    /// Create a new output formatter
    #[must_use]
    pub fn new() -> Self {
        Self {
            is_tty: std::io::stdout().is_terminal(),
        }
    }

    /// Confirmation after a successful install
    #[must_use]
    pub fn installed(&self) -> String {
        self.success("Git hooks installed")
    }

    /// Confirmation after `core.hooksPath` was removed
    #[must_use]
    pub fn uninstalled(&self) -> String {
        self.success("Git hooks uninstalled")
    }

    /// Notice printed when the `HUSKY` toggle skips installation
    #[must_use]
    pub fn install_disabled(&self) -> String {
        let message = "HUSKY env variable is set to 0, skipping install";
        if self.is_tty {
            format!("{} {}", Emoji("⏭️ ", ""), style(message).yellow())
        } else {
            message.to_string()
        }
    }

    /// Confirmation after a hook file was written from scratch
    #[must_use]
    pub fn hook_created(&self, file: &Path) -> String {
        self.file_line("created", file)
    }

    /// Confirmation after a command was appended to a hook file
    #[must_use]
    pub fn hook_updated(&self, file: &Path) -> String {
        self.file_line("updated", file)
    }

    /// Format an error for stderr
    #[must_use]
    pub fn error(&self, message: &str) -> String {
        if self.is_tty {
            format!("{} {}", style("Error:").red().bold(), message)
        } else {
            format!("Error: {message}")
        }
    }

    fn success(&self, message: &str) -> String {
        if self.is_tty {
            format!("{} {}", style("✓").green().bold(), message)
        } else {
            message.to_string()
        }
    }

    fn file_line(&self, verb: &str, file: &Path) -> String {
        if self.is_tty {
            format!("{} {}", style(verb).green(), style(file.display()).cyan())
        } else {
            format!("{verb} {}", file.display())
        }
    }
}

impl Default for OutputFormatter {
    fn default() -> Self {
        Self::new()
    }
}

/// Global output formatter instance
static OUTPUT_FORMATTER: once_cell::sync::Lazy<OutputFormatter> =
    once_cell::sync::Lazy::new(OutputFormatter::new);

/// Get the global output formatter
#[must_use]
pub fn formatter() -> &'static OutputFormatter {
    &OUTPUT_FORMATTER
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_formatter_creation() {
        let formatter = OutputFormatter::new();
        // Can't easily test TTY detection in unit tests, but ensure it doesn't panic
        let _ = formatter.installed();
        let _ = formatter.hook_created(Path::new(".husky/pre-commit"));
    }

    #[test]
    fn test_non_tty_output() {
        let formatter = OutputFormatter { is_tty: false };

        assert_eq!(formatter.installed(), "Git hooks installed");
        assert_eq!(
            formatter.install_disabled(),
            "HUSKY env variable is set to 0, skipping install"
        );
        assert_eq!(
            formatter.hook_created(Path::new(".husky/pre-commit")),
            "created .husky/pre-commit"
        );
        assert_eq!(
            formatter.hook_updated(Path::new(".husky/pre-push")),
            "updated .husky/pre-push"
        );
        assert_eq!(formatter.error("boom"), "Error: boom");
    }

    #[test]
    fn test_tty_output_keeps_message() {
        let formatter = OutputFormatter { is_tty: true };

        assert!(formatter.installed().contains("Git hooks installed"));
        assert!(formatter.uninstalled().contains("Git hooks uninstalled"));
        assert!(formatter.install_disabled().contains("skipping install"));
        assert!(
            formatter
                .hook_updated(Path::new("hooks/commit-msg"))
                .contains("hooks/commit-msg")
        );
    }
}

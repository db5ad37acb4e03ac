//! Shell completion generation module.

use clap::CommandFactory;
use clap_complete::Shell;
use std::io::{self, Write};

use crate::cli::Cli;

/// Binary name completions are registered for
const BIN_NAME: &str = "husky";

/// Generate shell completion scripts.
///
/// Outputs both instructions and the completion script to stdout.
///
/// # Errors
///
/// Returns an error if stdout cannot be written
pub fn generate_completions(shell: Shell) -> io::Result<()> {
    write_completions(shell, &mut io::stdout().lock())
}

/// Write instructions and the completion script for `shell` to `out`
///
/// # Errors
///
/// Returns an error if `out` cannot be written
pub fn write_completions<W: Write>(shell: Shell, out: &mut W) -> io::Result<()> {
    let mut cmd = Cli::command();

    let instructions = match shell {
        Shell::Bash => format!("# For bash (~/.bashrc):\n#   source <({BIN_NAME} completions bash)"),
        Shell::Zsh => format!(
            "# For zsh (~/.zshrc):\n#   {BIN_NAME} completions zsh > ~/.zsh/completions/_{BIN_NAME}\n#   # Ensure fpath includes ~/.zsh/completions"
        ),
        Shell::Fish => format!(
            "# For fish (~/.config/fish/config.fish):\n#   {BIN_NAME} completions fish | source"
        ),
        _ => format!(
            "# For {shell}:\n#   {BIN_NAME} completions {shell} > /path/to/completions/_{BIN_NAME}"
        ),
    };

    writeln!(
        out,
        "# Shell completion for {BIN_NAME}\n#\n# To enable completions, add this to your shell config:\n#\n{instructions}\n"
    )?;

    // clap_complete panics on write errors, so render into memory first
    let mut script = Vec::new();
    clap_complete::generate(shell, &mut cmd, BIN_NAME, &mut script);
    out.write_all(&script)?;
    out.flush()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(shell: Shell) -> String {
        let mut buf = Vec::new();
        write_completions(shell, &mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    /// Writer that refuses every write
    struct BrokenPipe;

    impl Write for BrokenPipe {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_bash_completions_mention_subcommands() {
        let script = render(Shell::Bash);
        assert!(script.starts_with("# Shell completion for husky"));
        assert!(script.contains("install"));
        assert!(script.contains("uninstall"));
    }

    #[test]
    fn test_zsh_instructions() {
        assert!(render(Shell::Zsh).contains("~/.zsh/completions/_husky"));
    }

    #[test]
    fn test_fish_instructions() {
        assert!(render(Shell::Fish).contains("husky completions fish | source"));
    }

    #[test]
    fn test_other_shells_do_not_panic() {
        let _ = render(Shell::Elvish);
        let _ = render(Shell::PowerShell);
    }

    #[test]
    fn test_write_error_is_returned() {
        let err = write_completions(Shell::Bash, &mut BrokenPipe).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::BrokenPipe);
    }

    #[test]
    fn test_cli_command_factory() {
        let cmd = Cli::command();
        assert_eq!(cmd.get_name(), "husky");
        assert!(cmd.get_subcommands().count() > 0);
    }
}

//! Husky - git hooks manager

use anyhow::{Context, Result};
use clap::Parser;
use husky::{
    cli::{Cli, Commands},
    completions,
    config::{BUILD_INFO, Settings},
    git::{HookInstaller, InstallOutcome},
    hooks::{self, HookAction},
    logging,
    output::formatter,
};
use std::path::Path;
use std::process;
use tracing::debug;

fn main() {
    if let Err(e) = run() {
        debug!(error = ?e, "command failed");
        eprintln!("{}", formatter().error(&format!("{e:#}")));
        process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    logging::init(cli.debug);

    let settings = Settings::from_env();

    match cli.command {
        Commands::Install { dir } => install(settings, dir.as_deref()),
        Commands::Uninstall => uninstall(settings),
        Commands::Add { file, cmd } => edit_hook(&file, &cmd, hooks::add_hook),
        Commands::Set { file, cmd } => edit_hook(&file, &cmd, hooks::set_hook),
        Commands::Version { json } => show_version(json),
        Commands::Completions { shell } => completions::generate_completions(shell)
            .context("Failed to write completion script"),
    }
}

/// Install the hooks directory and wire git to it
fn install(settings: Settings, dir: Option<&str>) -> Result<()> {
    let installer = HookInstaller::from_current_dir(settings)?;

    match installer.install(dir)? {
        InstallOutcome::Installed { .. } => println!("{}", formatter().installed()),
        InstallOutcome::Disabled => println!("{}", formatter().install_disabled()),
        InstallOutcome::NotARepository => {}
    }

    Ok(())
}

/// Remove the hooks path from git configuration
fn uninstall(settings: Settings) -> Result<()> {
    let installer = HookInstaller::from_current_dir(settings)?;
    installer.uninstall()?;
    println!("{}", formatter().uninstalled());
    Ok(())
}

/// Run a hook file edit and report what happened
fn edit_hook<F>(file: &Path, cmd: &str, edit: F) -> Result<()>
where
    F: FnOnce(&Path, &str) -> Result<HookAction>,
{
    let line = match edit(file, cmd)? {
        HookAction::Created => formatter().hook_created(file),
        HookAction::Updated => formatter().hook_updated(file),
    };
    println!("{line}");
    Ok(())
}

/// Show build information
fn show_version(json: bool) -> Result<()> {
    if json {
        let rendered =
            serde_json::to_string_pretty(&BUILD_INFO).context("Failed to serialize build info")?;
        println!("{rendered}");
    } else {
        println!("{BUILD_INFO}");
    }
    Ok(())
}

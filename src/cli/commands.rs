//! Command dispatch for the nstree binary

use std::io;
use std::path::{Path, PathBuf};

use clap::CommandFactory;
use clap_complete::generate;
use tracing::{debug, instrument};

use crate::application::RunSummary;
use crate::cli::args::{Cli, Commands, ConfigCommands};
use crate::cli::output;
use crate::cli::{CliError, CliResult};
use crate::config::{global_config_path, local_config_path, Settings};
use crate::infrastructure::traits::{open_source, CommandSource, MemorySource};
use crate::infrastructure::{InfraError, ServiceContainer};

pub fn execute_command(cli: &Cli) -> CliResult<()> {
    match &cli.command {
        Some(Commands::Run { file, strict }) => {
            let source = open_source(file.as_deref());
            run_batch(cli, source.as_ref(), *strict)
        }
        Some(Commands::Exec { commands, strict }) => {
            let source = MemorySource::from_lines(commands);
            run_batch(cli, &source, *strict)
        }
        Some(Commands::Config { command }) => config_command(cli, command),
        Some(Commands::Completion { shell }) => {
            let mut cmd = Cli::command();
            let name = cmd.get_name().to_string();
            generate(*shell, &mut cmd, name, &mut io::stdout());
            Ok(())
        }
        None => Err(CliError::Usage(
            "no command given, see `nstree --help`".to_string(),
        )),
    }
}

/// Directory searched for the local config file.
fn config_dir(cli: &Cli) -> Option<PathBuf> {
    cli.config_dir
        .clone()
        .or_else(|| std::env::current_dir().ok())
}

/// Layered settings with command line flags applied last.
fn load_settings(cli: &Cli) -> CliResult<Settings> {
    let dir = config_dir(cli);
    let mut settings = Settings::load(dir.as_deref())?;
    if let Some(policy) = cli.on_collision {
        settings.on_collision = policy;
    }
    if let Some(style) = cli.style {
        settings.list_style = style;
    }
    debug!("settings: {:?}", settings);
    Ok(settings)
}

#[instrument(skip(cli))]
fn run_batch(cli: &Cli, source: &dyn CommandSource, strict: bool) -> CliResult<()> {
    let mut settings = load_settings(cli)?;
    settings.strict |= strict;
    let strict = settings.strict;

    let container = ServiceContainer::new(settings);
    let summary = container.run_source(source, io::stdout().lock())?;
    check_summary(summary, strict)
}

fn check_summary(summary: RunSummary, strict: bool) -> CliResult<()> {
    if strict && !summary.is_clean() {
        return Err(CliError::Failures(summary.failed));
    }
    if !summary.is_clean() {
        debug!("{} of {} commands failed", summary.failed, summary.executed);
    }
    Ok(())
}

fn config_command(cli: &Cli, command: &ConfigCommands) -> CliResult<()> {
    match command {
        ConfigCommands::Show { file } => {
            let settings = match file {
                Some(path) => Settings::load_file_only(path)?,
                None => load_settings(cli)?,
            };
            output::info(&settings.to_toml()?);
            Ok(())
        }
        ConfigCommands::Path => {
            output::header("Config files (lowest to highest precedence)");
            match global_config_path() {
                Some(path) => output::detail(&describe_path("global", &path)),
                None => output::detail("global: <no config directory>"),
            }
            if let Some(dir) = config_dir(cli) {
                output::detail(&describe_path("local", &local_config_path(&dir)));
            }
            Ok(())
        }
        ConfigCommands::Init { global } => {
            let path = if *global {
                global_config_path().ok_or_else(|| {
                    CliError::Usage("cannot determine global config directory".to_string())
                })?
            } else {
                let dir = config_dir(cli).ok_or_else(|| {
                    CliError::Usage("cannot determine current directory".to_string())
                })?;
                local_config_path(&dir)
            };
            init_config(&path)
        }
    }
}

fn describe_path(label: &str, path: &Path) -> String {
    let state = if path.exists() { "exists" } else { "missing" };
    format!("{}: {} ({})", label, path.display(), state)
}

fn init_config(path: &Path) -> CliResult<()> {
    if path.exists() {
        output::warning(&format!("config already exists: {}", path.display()));
        return Err(CliError::Usage(format!(
            "refusing to overwrite {}",
            path.display()
        )));
    }
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .map_err(|e| InfraError::io(format!("create {}", parent.display()), e))?;
    }
    std::fs::write(path, Settings::template())
        .map_err(|e| InfraError::io(format!("write {}", path.display()), e))?;
    output::action("Created", &path.display());
    Ok(())
}

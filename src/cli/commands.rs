use std::io;

use clap::CommandFactory;
use clap_complete::{generate, Shell};
use tracing::{debug, instrument, Level};

use crate::application::{assemble_tree, run_action, NodeBlueprint};
use crate::cli::args::{Cli, Commands, ConfigCommands, RunArgs, TreeArgs};
use crate::cli::output;
use crate::cli::CliResult;
use crate::config::{global_config_path, Settings, SinkKind};
use crate::domain::ComponentTreeExt;
use crate::infrastructure::{console, create_sink, InfraError};

pub fn execute_command(cli: &Cli) -> CliResult<()> {
    let settings = Settings::load(cli.config.as_deref())?;
    debug!(?settings, "settings loaded");
    dispatch(cli, &settings)
}

/// Route to the subcommand; no subcommand means `run` with default flags.
fn dispatch(cli: &Cli, settings: &Settings) -> CliResult<()> {
    match &cli.command {
        Some(Commands::Run(args)) => _run(settings, args),
        None => _run(settings, &RunArgs::default()),
        Some(Commands::Tree(args)) => _tree(settings, args),
        Some(Commands::Leaves(args)) => _leaves(settings, args),
        Some(Commands::Blueprint) => _blueprint(settings),
        Some(Commands::Config { command }) => _config(cli, settings, command),
        Some(Commands::Completion { shell }) => _completion(*shell),
    }
}

#[instrument(skip(settings))]
fn _run(settings: &Settings, args: &RunArgs) -> CliResult<()> {
    let settings = args.apply(settings);
    let root = assemble_tree(settings.tree_file.as_deref(), &settings.labels)?;

    if settings.sink == SinkKind::Log
        && !tracing::enabled!(target: "arbor::action", Level::INFO)
    {
        output::warning("log sink selected but INFO is filtered out, add -d to see output");
    }

    let mut sink = create_sink(settings.sink);
    run_action(&*root, &mut *sink)?;

    if settings.pause {
        console::pause().map_err(|e| InfraError::io("wait for keypress", e))?;
    }
    Ok(())
}

#[instrument(skip(settings))]
fn _tree(settings: &Settings, args: &TreeArgs) -> CliResult<()> {
    let settings = args.apply(settings);
    let root = assemble_tree(settings.tree_file.as_deref(), &settings.labels)?;

    output::info(&root.to_tree());
    output::header(&format!(
        "depth: {}, nodes: {}",
        root.depth(),
        root.node_count()
    ));
    Ok(())
}

#[instrument(skip(settings))]
fn _leaves(settings: &Settings, args: &TreeArgs) -> CliResult<()> {
    let settings = args.apply(settings);
    let root = assemble_tree(settings.tree_file.as_deref(), &settings.labels)?;

    for label in root.leaf_labels() {
        output::info(&label);
    }
    Ok(())
}

#[instrument(skip(settings))]
fn _blueprint(settings: &Settings) -> CliResult<()> {
    let text = NodeBlueprint::demo(&settings.labels).to_toml()?;
    output::info(&text);
    Ok(())
}

#[instrument(skip(cli, settings))]
fn _config(cli: &Cli, settings: &Settings, command: &ConfigCommands) -> CliResult<()> {
    match command {
        ConfigCommands::Show => {
            output::header("Effective configuration");
            output::info(&settings.to_toml()?);
        }
        ConfigCommands::Init => {
            output::info(&Settings::template());
        }
        ConfigCommands::Path => {
            output::header("Config paths");
            match global_config_path() {
                Some(path) => {
                    let state = if path.exists() { "" } else { " (not found)" };
                    output::detail(&format!("global: {}{}", path.display(), state));
                }
                None => output::detail("global: <no config directory>"),
            }
            if let Some(path) = &cli.config {
                output::detail(&format!("file:   {}", path.display()));
            }
        }
    }
    Ok(())
}

fn _completion(shell: Shell) -> CliResult<()> {
    let mut cmd = Cli::command();
    let name = cmd.get_name().to_string();
    generate(shell, &mut cmd, name, &mut io::stdout());
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::fs;
    use std::path::PathBuf;

    use clap::Parser;
    use tempfile::TempDir;

    use super::*;
    use crate::exitcode;

    fn quiet_settings() -> Settings {
        Settings {
            labels: vec!["solo".into()],
            sink: SinkKind::Log,
            pause: false,
            tree_file: None,
        }
    }

    fn broken_tree() -> Settings {
        Settings {
            tree_file: Some(PathBuf::from("tests/resources/trees/missing_label.toml")),
            ..quiet_settings()
        }
    }

    fn parse(argv: &[&str]) -> Cli {
        Cli::try_parse_from(argv).unwrap()
    }

    #[test]
    fn given_no_subcommand_when_dispatching_then_runs_action() {
        assert!(dispatch(&parse(&["arbor"]), &quiet_settings()).is_ok());

        let err = dispatch(&parse(&["arbor"]), &broken_tree()).unwrap_err();
        assert_eq!(err.exit_code(), exitcode::DATAERR, "run assembles the tree");
    }

    #[test]
    fn given_blueprint_subcommand_when_dispatching_then_skips_tree_file() {
        assert!(dispatch(&parse(&["arbor", "blueprint"]), &broken_tree()).is_ok());
    }

    #[test]
    fn given_leaves_with_broken_tree_when_dispatching_then_data_error() {
        let err = dispatch(&parse(&["arbor", "leaves"]), &broken_tree()).unwrap_err();
        assert_eq!(err.exit_code(), exitcode::DATAERR);
    }

    #[test]
    fn given_run_flags_and_config_file_when_executing_then_succeeds() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("arbor.toml");
        fs::write(&path, "labels = [\"x\", \"y\"]\n").unwrap();
        let config = path.to_string_lossy().to_string();
        let config = config.as_str();

        let cli = parse(&["arbor", "--config", config, "run", "--no-pause", "--sink", "log"]);

        assert!(execute_command(&cli).is_ok());
    }

    #[test]
    fn given_missing_config_file_when_executing_then_config_exit_code() {
        let cli = parse(&["arbor", "--config", "/nonexistent/arbor.toml", "leaves"]);

        let err = execute_command(&cli).unwrap_err();

        assert_eq!(err.exit_code(), exitcode::CONFIG);
    }
}

//! CLI argument definitions using clap

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueHint};

use crate::config::{Settings, SinkKind};

/// Composite trees of components: leaves act, composites delegate
#[derive(Parser, Debug)]
#[command(name = "arbor")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Debug output (-d info, -dd debug, -ddd trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub debug: u8,

    /// Config file layered over the global config
    #[arg(long, global = true, env = "ARBOR_CONFIG", value_hint = ValueHint::FilePath)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Build the tree and perform the action once (default)
    Run(RunArgs),

    /// Show the tree outline
    Tree(TreeArgs),

    /// List leaf labels in traversal order
    Leaves(TreeArgs),

    /// Print the demo tree as a blueprint file
    Blueprint,

    /// Manage settings
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },

    /// Generate shell completions
    Completion {
        /// Shell type
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

/// Tree source selection shared by tree-consuming commands.
#[derive(Args, Debug, Default, Clone)]
pub struct TreeArgs {
    /// Blueprint file (default: demo tree from configured labels)
    #[arg(short, long, value_hint = ValueHint::FilePath)]
    pub tree: Option<PathBuf>,
}

#[derive(Args, Debug, Default, Clone)]
pub struct RunArgs {
    #[command(flatten)]
    pub tree: TreeArgs,

    /// Output sink
    #[arg(short, long, value_enum)]
    pub sink: Option<SinkKind>,

    /// Demo tree leaf labels
    #[arg(short, long, value_delimiter = ',', num_args = 1..)]
    pub labels: Option<Vec<String>>,

    /// Exit without waiting for Enter
    #[arg(long)]
    pub no_pause: bool,
}

impl TreeArgs {
    /// Flags override loaded settings.
    pub fn apply(&self, settings: &Settings) -> Settings {
        let mut settings = settings.clone();
        if let Some(tree) = &self.tree {
            settings.tree_file = Some(tree.clone());
        }
        settings
    }
}

impl RunArgs {
    pub fn apply(&self, settings: &Settings) -> Settings {
        let mut settings = self.tree.apply(settings);
        if let Some(sink) = self.sink {
            settings.sink = sink;
        }
        if let Some(labels) = &self.labels {
            settings.labels = labels.clone();
        }
        if self.no_pause {
            settings.pause = false;
        }
        settings
    }
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show merged config
    Show,

    /// Print a config template
    Init,

    /// Show config paths
    Path,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn given_no_subcommand_when_parsing_then_command_is_none() {
        let cli = Cli::try_parse_from(["arbor"]).unwrap();
        assert!(cli.command.is_none());
        assert_eq!(cli.debug, 0);
    }

    #[rstest]
    #[case(&["arbor", "run", "--labels", "a,b,c"], &["a", "b", "c"])]
    #[case(&["arbor", "run", "-l", "x", "y"], &["x", "y"])]
    fn given_labels_when_parsing_then_overrides_settings(
        #[case] argv: &[&str],
        #[case] expected: &[&str],
    ) {
        let cli = Cli::try_parse_from(argv).unwrap();
        let Some(Commands::Run(args)) = cli.command else {
            panic!("expected run command");
        };

        let settings = args.apply(&Settings::default());

        assert_eq!(settings.labels, expected);
    }

    #[test]
    fn given_run_flags_when_applied_then_override_sink_pause_and_tree() {
        let cli = Cli::try_parse_from([
            "arbor", "-dd", "run", "--sink", "log", "--no-pause", "--tree", "t.toml",
        ])
        .unwrap();
        assert_eq!(cli.debug, 2);
        let Some(Commands::Run(args)) = cli.command else {
            panic!("expected run command");
        };

        let settings = args.apply(&Settings::default());

        assert_eq!(settings.sink, SinkKind::Log);
        assert!(!settings.pause);
        assert_eq!(settings.tree_file, Some(PathBuf::from("t.toml")));
        assert_eq!(settings.labels, Settings::default().labels);
    }
}

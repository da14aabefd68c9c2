//! CLI command definitions

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Output format for results
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Formatted cards for the terminal
    #[default]
    Text,
    /// JSON output
    Json,
}

/// CLI arguments for beanquiz
#[derive(Parser, Debug)]
#[command(name = "beanquiz")]
#[command(author, version, about = "Coffee persona quiz, bean gacha and flavor radar charts")]
#[command(long_about = r#"
beanquiz recommends coffee beans.

Take the diagnosis quiz to find your coffee persona, let the shop pick
for you (omakase), or pull the gacha for a random bean. Every result comes
with a five-axis flavor radar chart written as SVG.

Configuration files are loaded from (in priority order):
1. --config <path>                       Explicit config file
2. BEANQUIZ_* environment variables      e.g. BEANQUIZ_CHART__SIZE=320
3. ./beanquiz.toml                       Project-level config
4. ~/.config/beanquiz/config.toml        Global config

Example:
  beanquiz quiz
  beanquiz gacha --pulls 3
  beanquiz chart house-blend --data-dir ./data
"#)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Directory holding beans.json, types.json and questions.json
    #[arg(long, value_name = "DIR", global = true)]
    pub data_dir: Option<PathBuf>,

    /// Base URL serving the catalog documents (remote-catalog builds)
    #[arg(long, value_name = "URL", global = true)]
    pub base_url: Option<String>,

    /// Seed for reproducible tie-breaks and pulls
    #[arg(long, value_name = "SEED", global = true)]
    pub seed: Option<u64>,

    /// Directory for rendered SVG charts
    #[arg(long, value_name = "DIR", global = true)]
    pub chart_dir: Option<PathBuf>,

    /// Do not write chart files
    #[arg(long, global = true)]
    pub no_charts: bool,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text", global = true)]
    pub output: OutputFormat,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress spinners and pacing delays
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Also write logs to this file
    #[arg(long, value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,

    /// Path to configuration file
    #[arg(long, value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long, global = true)]
    pub no_config: bool,

    /// Show configuration sources and the merged configuration, then exit
    #[arg(long)]
    pub show_config: bool,
}

/// Subcommands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Interactive diagnosis quiz (default)
    Quiz,
    /// Let the shop pick: show the featured bean
    Omakase,
    /// Pull the bean gacha
    Gacha {
        /// Number of pulls
        #[arg(short, long, default_value_t = 1)]
        pulls: u32,
    },
    /// Render a bean's radar chart (and its blend components) to SVG
    Chart {
        /// Bean id from beans.json
        bean_id: String,
    },
    /// List the beans in the catalog
    Beans,
}

impl Cli {
    /// The subcommand to run; no subcommand means the quiz
    pub fn resolved_command(&self) -> Command {
        self.command.clone().unwrap_or(Command::Quiz)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_to_quiz() {
        let cli = Cli::parse_from(["beanquiz"]);
        assert_eq!(cli.resolved_command(), Command::Quiz);
        assert_eq!(cli.output, OutputFormat::Text);
        assert_eq!(cli.verbose, 0);
    }

    #[test]
    fn test_global_options_after_subcommand() {
        let cli = Cli::parse_from(["beanquiz", "gacha", "--pulls", "3", "--seed", "7", "-vv"]);
        assert_eq!(cli.resolved_command(), Command::Gacha { pulls: 3 });
        assert_eq!(cli.seed, Some(7));
        assert_eq!(cli.verbose, 2);
    }

    #[test]
    fn test_chart_requires_bean_id() {
        assert!(Cli::try_parse_from(["beanquiz", "chart"]).is_err());
        let cli = Cli::parse_from(["beanquiz", "chart", "house", "-o", "json"]);
        assert_eq!(
            cli.resolved_command(),
            Command::Chart {
                bean_id: "house".to_string()
            }
        );
        assert_eq!(cli.output, OutputFormat::Json);
    }

    #[test]
    fn test_cli_definition_is_valid() {
        use clap::CommandFactory;
        <Cli as CommandFactory>::command().debug_assert();
    }
}

//! CLI command definitions.
//!
//! This module defines the CLI commands and their arguments using clap.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::config::SettingOverrides;

/// stackdiff - Compare packaged CloudFormation templates against deployed stacks.
#[derive(Parser, Debug)]
#[command(name = "stackdiff")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to the service file (serverless.yml).
    #[arg(short, long, global = true, env = "STACKDIFF_CONFIG")]
    pub config: Option<PathBuf>,

    /// Enable verbose output.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output format (text, json).
    #[arg(long, global = true, default_value = "text")]
    pub output: OutputFormat,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Compare the local CloudFormation template against the deployed one.
    Diff(DiffArgs),
}

/// Arguments of the `diff` command.
#[derive(clap::Args, Debug, Clone, Default)]
pub struct DiffArgs {
    /// Path of the deployment package.
    #[arg(short, long)]
    pub package: Option<PathBuf>,

    /// Stage of the service.
    #[arg(short, long)]
    pub stage: Option<String>,

    /// Region of the service.
    #[arg(short, long)]
    pub region: Option<String>,

    /// AWS credential profile.
    #[arg(long = "aws-profile")]
    pub aws_profile: Option<String>,
}

/// Output format options.
#[derive(Debug, Clone, Copy, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text output.
    #[default]
    Text,
    /// JSON output for scripting.
    Json,
}

impl OutputFormat {
    /// Returns true if log lines must stay off stdout to keep it parseable.
    #[must_use]
    pub const fn logs_to_stderr(self) -> bool {
        matches!(self, Self::Json)
    }
}

impl From<DiffArgs> for SettingOverrides {
    fn from(args: DiffArgs) -> Self {
        Self {
            stage: args.stage,
            region: args.region,
            aws_profile: args.aws_profile,
            package: args.package,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_diff_with_package_shortcut() {
        let cli = Cli::try_parse_from(["stackdiff", "diff", "-p", "build/pkg", "--stage", "prod"])
            .expect("arguments should parse");

        let Commands::Diff(args) = cli.command;
        assert_eq!(args.package, Some(PathBuf::from("build/pkg")));
        assert_eq!(args.stage.as_deref(), Some("prod"));
    }

    #[test]
    fn test_overrides_from_args() {
        let args = DiffArgs {
            region: Some(String::from("eu-west-1")),
            ..DiffArgs::default()
        };

        let overrides = SettingOverrides::from(args);
        assert_eq!(overrides.region.as_deref(), Some("eu-west-1"));
        assert!(overrides.package.is_none());
    }

    #[test]
    fn test_aws_profile_is_not_read_from_environment() {
        use clap::CommandFactory;

        let command = Cli::command();
        let diff = command
            .find_subcommand("diff")
            .expect("diff subcommand should exist");
        let profile = diff
            .get_arguments()
            .find(|arg| arg.get_id() == "aws_profile")
            .expect("aws-profile argument should exist");

        assert_eq!(profile.get_long(), Some("aws-profile"));
        assert!(profile.get_env().is_none());
    }

    #[test]
    fn test_json_output_moves_logs_to_stderr() {
        assert!(OutputFormat::Json.logs_to_stderr());
        assert!(!OutputFormat::Text.logs_to_stderr());

        let cli = Cli::try_parse_from(["stackdiff", "diff", "--output", "json"])
            .expect("arguments should parse");
        assert!(cli.output.logs_to_stderr());
    }

    #[test]
    fn test_cli_definition_is_consistent() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}

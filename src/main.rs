//! stackdiff CLI entrypoint.
//!
//! This is the main entrypoint for the stackdiff command-line tool.

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use stackdiff::cli::{Cli, Commands, DiffArgs, OutputFormat, OutputFormatter};
use stackdiff::config::{
    find_config_file, ConfigParser, ConfigValidator, ResolvedSettings, ServiceConfig,
    SettingOverrides,
};
use stackdiff::error::Result;
use stackdiff::runner::DiffRunner;
use stackdiff::stack::{ClientConfig, CloudFormationSource, StackIdentity};

use clap::Parser;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

/// Main entrypoint.
fn main() -> ExitCode {
    let cli = Cli::parse();

    // Initialize logging
    init_logging(cli.verbose, cli.output);

    // Run async runtime
    let runtime = match tokio::runtime::Runtime::new() {
        Ok(rt) => rt,
        Err(e) => {
            eprintln!("Failed to create async runtime: {e}");
            return ExitCode::FAILURE;
        }
    };

    match runtime.block_on(run(cli)) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

/// Initializes the logging system.
fn init_logging(verbose: bool, output: OutputFormat) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false);

    // JSON reports go to stdout alone
    if output.logs_to_stderr() {
        builder.with_writer(std::io::stderr).init();
    } else {
        builder.init();
    }
}

/// Main async entry point.
async fn run(cli: Cli) -> Result<()> {
    let formatter = OutputFormatter::new(cli.output);

    match cli.command {
        Commands::Diff(args) => cmd_diff(cli.config.as_ref(), args, formatter).await,
    }
}

/// Compare the packaged template against the deployed stack.
async fn cmd_diff(
    config_path: Option<&PathBuf>,
    args: DiffArgs,
    formatter: OutputFormatter,
) -> Result<()> {
    let (service, base_dir) = load_service(config_path)?;

    let overrides = SettingOverrides::from(args);
    // A relative package directory is relative to the service file.
    let settings = ResolvedSettings::resolve(&overrides, &service).relative_to(&base_dir);
    let stack = StackIdentity::for_service(&service, &settings.stage);
    ConfigValidator::new().validate_stack_name(&stack)?;

    info!(
        "Comparing against stack {stack} ({}, profile {})",
        settings.region, settings.aws_profile
    );

    let source = CloudFormationSource::new(&ClientConfig::from(&settings)).await;
    let runner = DiffRunner::new(source, stack, settings.template_paths(), formatter);

    let mut stdout = std::io::stdout();
    runner.run(&mut stdout).await?;

    Ok(())
}

// ============================================================================
// Helper Functions
// ============================================================================

/// Resolves the service file path.
fn resolve_config_path(config_path: Option<&PathBuf>) -> Result<PathBuf> {
    config_path.map_or_else(|| find_config_file("."), |path| Ok(path.clone()))
}

/// Loads and validates the service definition, returning it with its directory.
fn load_service(config_path: Option<&PathBuf>) -> Result<(ServiceConfig, PathBuf)> {
    let config_file = resolve_config_path(config_path)?;
    debug!("Loading service definition from: {}", config_file.display());

    let base_dir = config_file
        .parent()
        .map_or_else(|| PathBuf::from("."), Path::to_path_buf);

    let parser = ConfigParser::new().with_base_path(&base_dir);
    parser.load_dotenv()?;

    let service = parser.load_file(&config_file)?;
    ConfigValidator::new().validate_service(&service)?;

    Ok((service, base_dir))
}

//! Predigraph CLI binary entry point.

use clap::Parser;
use colored::Colorize;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use predicate_cli::{
    cli::{Cli, Commands},
    commands,
    config::{default_config_path, CliConfig},
    error::{CliError, CliResult},
    output::OutputFormat,
};

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = tokio::runtime::Runtime::new()
        .map_err(CliError::from)
        .and_then(|rt| rt.block_on(run(cli)));

    if let Err(e) = result {
        print_error(&e);
        std::process::exit(e.exit_code());
    }
}

/// Initialize logging based on --verbose flag or RUST_LOG env var.
fn init_logging(verbose: bool) {
    let has_rust_log = std::env::var("RUST_LOG").is_ok();
    if !verbose && !has_rust_log {
        return;
    }

    let mut filter = EnvFilter::from_default_env();
    if verbose {
        if let Ok(directive) = "predicate=debug".parse() {
            filter = filter.add_directive(directive);
        }
    }
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();
}

/// Print a user-friendly error message with recovery hint.
fn print_error(e: &CliError) {
    eprintln!("{}: {}", "Error".red().bold(), e);

    if let Some(hint) = e.hint() {
        eprintln!("{}: {}", "Hint".cyan(), hint);
    }
}

async fn run(cli: Cli) -> CliResult<()> {
    // Load configuration
    let config_path = cli.config.unwrap_or_else(default_config_path);
    let config = CliConfig::load(&config_path)?;

    // Get output format
    let format: OutputFormat = cli
        .format
        .map(Into::into)
        .unwrap_or_else(|| config.default_format());

    // Dispatch command
    let output = match cli.command {
        Commands::Extract {
            files,
            own_code,
            report,
        } => commands::extract(config, format, &files, own_code.as_deref(), report).await?,

        Commands::Normalize { codes } => commands::normalize(format, &codes)?,

        Commands::Url { code } => commands::url(format, &code)?,

        Commands::Config { write } => commands::config(config, format, &config_path, write)?,

        Commands::Completions { shell } => commands::completions(shell)?,
    };

    // Completions write directly to stdout
    if !output.is_empty() {
        println!("{}", output);
    }

    Ok(())
}

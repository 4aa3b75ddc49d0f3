use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::time::Duration;

use clap::{Parser, Subcommand, ValueEnum};
use hc_app::{AppError, AppResult, CalcOptions, InputKind, calc_service, project_service};
use serde::Serialize;
use tracing::{Level, error};

#[derive(Parser)]
#[command(name = "hc-cli")]
#[command(about = "HydroCalc CLI - gas piping and fire standpipe sizing", long_about = None)]
struct Cli {
    /// Log solver iterations
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Copy, ValueEnum)]
enum Kind {
    Gas,
    Standpipe,
}

impl From<Kind> for InputKind {
    fn from(kind: Kind) -> Self {
        match kind {
            Kind::Gas => InputKind::Gas,
            Kind::Standpipe => InputKind::Standpipe,
        }
    }
}

#[derive(clap::Args)]
struct RunArgs {
    /// Catalog file (JSON or YAML)
    #[arg(short, long)]
    catalog: PathBuf,
    /// Calculation input file (JSON or YAML)
    #[arg(short, long)]
    input: PathBuf,
    /// Output JSON file (defaults to stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,
    /// Wall-clock budget in milliseconds; 0 disables it
    #[arg(long, default_value_t = 10_000)]
    timeout_ms: u64,
    /// Write a failed run as an output record with `error` set
    #[arg(long)]
    report: bool,
}

impl RunArgs {
    fn options(&self) -> CalcOptions {
        CalcOptions {
            timeout: (self.timeout_ms > 0).then(|| Duration::from_millis(self.timeout_ms)),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Size a gas network
    Gas(RunArgs),
    /// Solve a fire standpipe network
    Standpipe(RunArgs),
    /// Validate and normalize an input file without solving it
    Validate {
        #[arg(long, value_enum)]
        kind: Kind,
        /// Calculation input file
        #[arg(short, long)]
        input: PathBuf,
    },
    /// Show row counts of a catalog
    Catalog {
        /// Catalog file (JSON or YAML)
        #[arg(short, long)]
        catalog: PathBuf,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let level = if cli.verbose { Level::DEBUG } else { Level::INFO };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(io::stderr)
        .init();

    let result = match &cli.command {
        Commands::Gas(args) => cmd_gas(args),
        Commands::Standpipe(args) => cmd_standpipe(args),
        Commands::Validate { kind, input } => cmd_validate(input, (*kind).into()),
        Commands::Catalog { catalog } => cmd_catalog(catalog),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(input_error = e.is_input_error(), "{e}");
            ExitCode::FAILURE
        }
    }
}

fn cmd_gas(args: &RunArgs) -> AppResult<()> {
    let catalog = project_service::load_catalog(&args.catalog)?;
    let input = project_service::load_gas_input(&args.input)?;
    let options = args.options();
    let output = if args.report {
        calc_service::report_gas(&input, &catalog, &options)
    } else {
        calc_service::run_gas(&input, &catalog, &options)?
    };
    write_output(args.output.as_deref(), &output)
}

fn cmd_standpipe(args: &RunArgs) -> AppResult<()> {
    let catalog = project_service::load_catalog(&args.catalog)?;
    let input = project_service::load_standpipe_input(&args.input)?;
    let options = args.options();
    let output = if args.report {
        calc_service::report_standpipe(&input, &catalog, &options)
    } else {
        calc_service::run_standpipe(&input, &catalog, &options)?
    };
    write_output(args.output.as_deref(), &output)
}

fn cmd_validate(input: &Path, kind: InputKind) -> AppResult<()> {
    let summary = project_service::validate_input(input, kind)?;
    println!("✓ {} is valid", input.display());
    println!(
        "  {} ({}): {} paths, {} active fixtures",
        summary.name.as_deref().unwrap_or("unnamed"),
        summary.calc_type,
        summary.paths,
        summary.active_fixtures
    );
    Ok(())
}

fn cmd_catalog(catalog: &Path) -> AppResult<()> {
    let catalog = project_service::load_catalog(catalog)?;
    write_output(None, &project_service::catalog_summary(&catalog))
}

fn write_output<T: Serialize>(path: Option<&Path>, value: &T) -> AppResult<()> {
    match path {
        Some(path) => {
            hc_results::save_output(path, value)?;
            println!("✓ Output written to {}", path.display());
        }
        None => {
            let json = serde_json::to_string_pretty(value)
                .map_err(|e| AppError::Results(e.to_string()))?;
            let mut stdout = io::stdout().lock();
            writeln!(stdout, "{json}")?;
        }
    }
    Ok(())
}

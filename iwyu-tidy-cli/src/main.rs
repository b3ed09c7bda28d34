use std::io::{self, BufRead, BufReader};
use std::process::ExitCode;

use anyhow::Context;
use camino::{Utf8Path, Utf8PathBuf};
use clap::Parser;
use fs_err as fs;
use iwyu_tidy_cli::config::{self, CliOverrides, ConfigMerger};
use iwyu_tidy_cli::{ColorChoice, OutputFormat, RunSettings, TidyError, run};
use iwyu_tidy_render::Outcome;
use iwyu_tidy_tables::Tables;
use tracing::{debug, error};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(
    name = "iwyu-tidy",
    version,
    about = "Condense include-what-you-use output into an actionable change list.",
    long_about = "Reads an include-what-you-use report, drops known false positives, \
                  collapses forward declarations into their umbrella header and prints \
                  one block per file that needs changes.\n\n\
                  Exit status: 0 no changes needed, 1 changes needed, 2 error."
)]
struct Cli {
    /// Report to read (default: stdin; `-` also means stdin).
    #[arg(long, short)]
    input: Option<Utf8PathBuf>,

    /// Config file (default: ./iwyu-tidy.toml if present).
    #[arg(long)]
    config: Option<Utf8PathBuf>,

    /// Output format.
    #[arg(long, value_enum)]
    format: Option<OutputFormat>,

    /// When to color additions and removals.
    #[arg(long, value_enum)]
    color: Option<ColorChoice>,

    /// Fail on report lines that fall outside any section.
    #[arg(long, default_value_t = false)]
    strict: bool,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    match real_main(cli) {
        Ok(outcome) => ExitCode::from(outcome.exit_code()),
        Err(e) if e.is_format_drift() => {
            error!("report format not recognized: {:#}", e);
            ExitCode::from(e.exit_code())
        }
        Err(e) => {
            error!("{:#}", e);
            ExitCode::from(e.exit_code())
        }
    }
}

fn real_main(cli: Cli) -> Result<Outcome, TidyError> {
    let file_config = match &cli.config {
        Some(path) => config::load_config(path)?,
        None => config::load_or_default(Utf8Path::new(".")).context("load iwyu-tidy.toml")?,
    };
    let merged = ConfigMerger::new(file_config).merge(&CliOverrides {
        format: cli.format,
        color: cli.color,
        strict: cli.strict,
    });
    debug!(
        "merged config: format={:?}, color={:?}, strict={}",
        merged.format, merged.color, merged.strict
    );

    let settings = RunSettings {
        tables: Tables::with_overrides(&merged.tables).context("build tables")?,
        format: merged.format,
        colors: merged.color.enabled(),
        strict: merged.strict,
    };

    let reader = open_input(cli.input.as_deref())?;
    let stdout = io::stdout();
    run(reader, stdout.lock(), &settings)
}

fn open_input(input: Option<&Utf8Path>) -> anyhow::Result<Box<dyn BufRead>> {
    match input {
        None => Ok(Box::new(io::stdin().lock())),
        Some(path) if path.as_str() == "-" => Ok(Box::new(io::stdin().lock())),
        Some(path) => {
            let file = fs::File::open(path).with_context(|| format!("open {}", path))?;
            Ok(Box::new(BufReader::new(file)))
        }
    }
}

use std::fs;
use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand};
use profile_sync_core::validate_record;
use profile_sync_engine::{FormDocument, ReaderSource, SyncConfig, TextSource, fill_from_source};
use profile_sync_parser::parse_record_with_report;
use serde::Serialize;
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// CLI-specific output format enum with clap argument parsing support.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
enum CliOutputFormat {
    Json,
    Yaml,
}

#[derive(Debug, Parser)]
#[command(name = "profile-sync")]
#[command(about = "Parse pasted player profiles and apply them to editor form snapshots")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Parse profile text into a player record.
    Parse(ParseArgs),
    /// Apply profile text to a form snapshot and print the sync report.
    Apply(ApplyArgs),
    /// Write the default layout configuration as YAML.
    Config(ConfigArgs),
}

#[derive(Debug, Args)]
struct ParseArgs {
    /// Profile text file, or `-` for stdin.
    #[arg(long)]
    input: PathBuf,
    /// Output the record together with parse diagnostics and warnings.
    #[arg(long)]
    with_report: bool,
    /// Output format.
    #[arg(long, default_value = "json")]
    format: CliOutputFormat,
}

#[derive(Debug, Args)]
struct ApplyArgs {
    /// Profile text file, or `-` for stdin.
    #[arg(long)]
    input: PathBuf,
    /// JSON form snapshot to apply the record to.
    #[arg(long)]
    form: PathBuf,
    /// Layout configuration YAML (defaults to the stock editor layout).
    #[arg(long)]
    config: Option<PathBuf>,
    /// Where to write the updated form snapshot.
    #[arg(long)]
    output: Option<PathBuf>,
    /// Skip activation and render delays.
    #[arg(long)]
    no_delay: bool,
    /// Output format.
    #[arg(long, default_value = "json")]
    format: CliOutputFormat,
}

#[derive(Debug, Args)]
struct ConfigArgs {
    /// Output YAML path.
    #[arg(long)]
    output: PathBuf,
}

fn main() {
    init_tracing();
    let cli = Cli::parse();

    let result = match cli.command {
        Command::Parse(args) => run_parse(args),
        Command::Apply(args) => run_apply(args),
        Command::Config(args) => run_config(args),
    };

    if let Err(err) = result {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

/// Logs go to stderr so stdout stays machine-readable.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn open_source(path: &Path) -> Result<Box<dyn TextSource>, String> {
    if path == Path::new("-") {
        return Ok(Box::new(ReaderSource::new(std::io::stdin())));
    }
    let file = fs::File::open(path)
        .map_err(|err| format!("Failed to read '{}': {err}", path.display()))?;
    Ok(Box::new(ReaderSource::new(file)))
}

fn print_output<T: Serialize>(value: &T, format: CliOutputFormat) -> Result<(), String> {
    match format {
        CliOutputFormat::Json => {
            let json = serde_json::to_string_pretty(value)
                .map_err(|e| format!("Failed to serialize output: {e}"))?;
            println!("{json}");
        }
        CliOutputFormat::Yaml => {
            let yaml = serde_yaml::to_string(value)
                .map_err(|e| format!("Failed to serialize output: {e}"))?;
            print!("{yaml}");
        }
    }
    Ok(())
}

fn run_parse(args: ParseArgs) -> Result<(), String> {
    let text = open_source(&args.input)?
        .read_text()
        .map_err(|err| format!("Failed to read '{}': {err}", args.input.display()))?;
    let run = parse_record_with_report(&text);
    debug!(
        coverage = run.diagnostics.coverage(),
        skipped = run.diagnostics.skipped_lines.len(),
        "Parsed profile text"
    );
    for issue in validate_record(&run.record) {
        eprintln!("warning: {issue}");
    }

    if args.with_report {
        print_output(&run, args.format)
    } else {
        for warning in &run.warnings {
            eprintln!("warning: {warning}");
        }
        print_output(&run.record, args.format)
    }
}

fn run_apply(args: ApplyArgs) -> Result<(), String> {
    let config = match &args.config {
        Some(path) => SyncConfig::load(path)
            .map_err(|err| format!("Failed to load config '{}': {err}", path.display()))?,
        None => SyncConfig::default(),
    };
    let config = if args.no_delay {
        config.immediate()
    } else {
        config
    };

    let snapshot = fs::read_to_string(&args.form)
        .map_err(|err| format!("Failed to read '{}': {err}", args.form.display()))?;
    let mut form = FormDocument::from_json(&snapshot)
        .map_err(|err| format!("Failed to load '{}': {err}", args.form.display()))?;
    let mut source = open_source(&args.input)?;

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_time()
        .build()
        .map_err(|err| format!("Failed to start runtime: {err}"))?;
    let run = runtime
        .block_on(fill_from_source(source.as_mut(), &mut form, &config))
        .map_err(|err| err.to_string())?;

    if let Some(output) = &args.output {
        if let Some(parent) = output.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|err| {
                    format!(
                        "Failed to create output directory '{}': {err}",
                        parent.display()
                    )
                })?;
            }
        }
        let json = form
            .to_json()
            .map_err(|err| format!("Failed to serialize form snapshot: {err}"))?;
        fs::write(output, json)
            .map_err(|err| format!("Failed to write '{}': {err}", output.display()))?;
    }

    print_output(&run, args.format)?;

    let missing = run.report.missing_sections();
    if !missing.is_empty() {
        let names: Vec<&str> = missing.iter().map(|pass| pass.as_str()).collect();
        eprintln!("{} section(s) not found: {}", missing.len(), names.join(", "));
    }
    let failures: Vec<&str> = run
        .report
        .failures()
        .map(|outcome| outcome.field.as_str())
        .collect();
    if !failures.is_empty() {
        eprintln!(
            "{} field(s) not found: {}",
            failures.len(),
            failures.join(", ")
        );
    }

    Ok(())
}

fn run_config(args: ConfigArgs) -> Result<(), String> {
    SyncConfig::default()
        .save(&args.output)
        .map_err(|err| format!("Failed to write '{}': {err}", args.output.display()))?;
    println!("Wrote default configuration to '{}'.", args.output.display());
    Ok(())
}

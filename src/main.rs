use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::time::Instant;
use utr_tools::audit::{audit_candidates, read_candidates, AuditReport};
use utr_tools::generator::generate_batch;
use utr_tools::logging;
use utr_tools::models::UtrCheckResult;
use utr_tools::output::{write_records, OutputFormat};
use utr_tools::util::random_seed;
use utr_tools::validator::{check_utr, enforce_strict};

#[derive(Parser)]
#[command(name = "utr-tools")]
#[command(about = "UK Unique Taxpayer Reference validator and generator", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    Generate(GenerateArgs),
    Check(CheckArgs),
    Audit(AuditArgs),
}

#[derive(Parser)]
struct GenerateArgs {
    #[arg(long, default_value_t = 1)]
    count: usize,
    #[arg(long)]
    seed: Option<u64>,
    #[arg(long, value_enum, default_value_t = OutputFormat::Json)]
    format: OutputFormat,
    #[arg(long)]
    output: Option<PathBuf>,
}

#[derive(Parser)]
struct CheckArgs {
    #[arg(required = true)]
    candidates: Vec<String>,
    #[arg(long, value_enum, default_value_t = OutputFormat::Json)]
    format: OutputFormat,
    /// Exit with an error when any candidate is invalid.
    #[arg(long, default_value_t = false)]
    strict: bool,
}

#[derive(Parser)]
struct AuditArgs {
    #[arg(long)]
    input: PathBuf,
    #[arg(long, value_enum, default_value_t = OutputFormat::Json)]
    format: OutputFormat,
    #[arg(long)]
    output: Option<PathBuf>,
}

fn main() {
    if let Err(err) = run() {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    logging::init_logging("utr-tools")?;
    let cli = Cli::parse();
    match cli.command {
        Command::Generate(args) => run_generate(args),
        Command::Check(args) => run_check(args),
        Command::Audit(args) => run_audit(args),
    }
}

fn run_generate(args: GenerateArgs) -> Result<(), String> {
    let seed = args.seed.unwrap_or_else(random_seed);
    log::info!("Generating {} UTR(s) (seed {})", args.count, seed);

    let start = Instant::now();
    let records = generate_batch(args.count, seed)?;
    write_records(&records, args.format, args.output.as_deref())?;

    if let Some(path) = &args.output {
        log::info!("Wrote {} UTR(s) to {}", records.len(), path.display());
    }
    log::info!("Generation time: {} ms", start.elapsed().as_millis());
    Ok(())
}

fn run_check(args: CheckArgs) -> Result<(), String> {
    let results: Vec<UtrCheckResult> = args
        .candidates
        .iter()
        .map(|candidate| check_utr(candidate))
        .collect();
    write_records(&results, args.format, None)?;
    enforce_strict(&results, args.strict)
}

fn run_audit(args: AuditArgs) -> Result<(), String> {
    let start = Instant::now();
    let candidates = read_candidates(&args.input)?;
    let report = audit_candidates(&candidates);
    write_records(&report.results, args.format, args.output.as_deref())?;

    log_audit_report(&report);
    log::info!("Audit time: {} ms", start.elapsed().as_millis());
    Ok(())
}

fn log_audit_report(report: &AuditReport) {
    log::info!(
        "Audit: total={} valid={} invalid={}",
        report.total,
        report.valid,
        report.invalid()
    );
    log::info!(
        "Audit failures: malformed={} checksum_mismatch={}",
        report.malformed,
        report.checksum_mismatch
    );
}

//! barcut - CLI tool to plan bar cutting from a cut list.

use anyhow::{bail, Context, Result};
use clap::{Parser, ValueEnum};
use std::fmt::Write as _;
use std::path::PathBuf;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

use barcut_core::{
    best_algorithm, compare_algorithms, example_cut_list, generate_csv, generate_json,
    generate_report, optimize_by_material, validate_cut_requests, Algorithm, AlgorithmComparison,
    CutListParser, ParseMode, PlanConfig,
};

/// Output format for the cutting plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    /// Human-readable work plan
    Text,
    /// Semicolon-separated rows, one per bar
    Csv,
    /// JSON document with configuration, summary and bars
    Json,
}

/// Pack a cut list onto standard-length bars, per material.
#[derive(Parser, Debug)]
#[command(name = "barcut")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Input cut list (length;quantity;material;name per row)
    #[arg(short, long, required_unless_present = "example")]
    input: Option<PathBuf>,

    /// Output file path (stdout if omitted)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Stock bar length in mm
    #[arg(short, long, default_value = "3000")]
    bar_length: f64,

    /// Saw kerf in mm
    #[arg(short, long, default_value = "0")]
    kerf: f64,

    /// Packing algorithm (FFD, BFD, Heuristic)
    #[arg(short, long, default_value = "bfd")]
    algorithm: Algorithm,

    /// Multiply every quantity by this factor
    #[arg(short, long, default_value = "1")]
    multiplier: u32,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    format: OutputFormat,

    /// Fail on the first unusable input row instead of skipping it
    #[arg(long)]
    strict: bool,

    /// Validate only, don't generate output
    #[arg(long)]
    validate: bool,

    /// Compare all algorithms instead of producing a plan
    #[arg(long)]
    compare: bool,

    /// Write a sample cut list to this path and exit
    #[arg(long, value_name = "PATH")]
    example: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    let filter = if args.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    if let Some(path) = &args.example {
        std::fs::write(path, example_cut_list())
            .with_context(|| format!("Failed to write {}", path.display()))?;
        info!("Sample cut list written to {}", path.display());
        return Ok(());
    }

    let config = PlanConfig::new(args.bar_length)
        .with_kerf(args.kerf)
        .with_algorithm(args.algorithm)
        .with_multiplier(args.multiplier);
    config.validate()?;

    let Some(input) = &args.input else {
        bail!("No input file given");
    };

    info!("Processing: {}", input.display());

    // Parse the cut list
    let mode = if args.strict {
        ParseMode::Strict
    } else {
        ParseMode::Lenient
    };
    let list = CutListParser::new(mode)
        .parse_file(input)
        .with_context(|| format!("Failed to parse {}", input.display()))?;

    info!(
        "Read {} cut(s) for {} material(s)",
        list.len(),
        list.material_count()
    );
    if !list.skipped.is_empty() {
        warn!("Skipped {} unusable row(s)", list.skipped.len());
    }

    // Validate
    let validation = validate_cut_requests(&list.cuts, &config);

    for warning in &validation.warnings {
        warn!("{}", warning);
    }

    for err in &validation.errors {
        error!("{}", err);
    }

    if !validation.passed {
        bail!("Validation failed");
    }

    // Validate-only mode
    if args.validate {
        info!("Validation passed");
        return Ok(());
    }

    let output = if args.compare {
        let results = compare_algorithms(&list.cuts, &config)?;
        match args.format {
            OutputFormat::Json => serde_json::to_string_pretty(&results)?,
            OutputFormat::Text | OutputFormat::Csv => render_comparison(&results),
        }
    } else {
        let plan = optimize_by_material(&list.cuts, &config)?;
        info!(
            "Planned {} bar(s) with {} algorithm",
            plan.total_bars(),
            config.algorithm
        );
        match args.format {
            OutputFormat::Text => generate_report(&plan, &config),
            OutputFormat::Csv => generate_csv(&plan),
            OutputFormat::Json => generate_json(&plan, &config)?,
        }
    };

    // Write output
    match &args.output {
        Some(path) => {
            std::fs::write(path, &output)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            info!("Generated: {}", path.display());
        }
        None => print!("{}", output),
    }

    Ok(())
}

/// Render an algorithm comparison as a text table.
fn render_comparison(results: &[AlgorithmComparison]) -> String {
    let mut output = String::new();
    writeln!(
        output,
        "{:<10}  {:>6}  {:>6}  {:>12}  {:>10}",
        "Algorithm", "Bars", "Cuts", "Waste (mm)", "Kerf (mm)"
    )
    .unwrap();
    for result in results {
        let summary = &result.summary;
        writeln!(
            output,
            "{:<10}  {:>6}  {:>6}  {:>12.1}  {:>10.1}",
            result.algorithm.to_string(),
            summary.total_bars,
            summary.total_cuts,
            summary.total_waste,
            summary.total_kerf_loss
        )
        .unwrap();
    }
    if let Some(best) = best_algorithm(results) {
        writeln!(output, "Best: {}", best).unwrap();
    }
    output
}

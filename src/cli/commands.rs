//! Command implementations for the PubChem processor CLI
//!
//! Contains the main command execution logic: logging setup, record file
//! discovery, parallel extraction, JSONL output, and the final summary
//! report.

use crate::app::services::record_extractor::{ExtractionStats, RecordExtractor};
use crate::cli::args::{Args, Commands, ProcessArgs};
use crate::config::{NormalizerConfig, ProcessingConfig};
use crate::constants::{DEFAULT_OUTPUT_FILE, RECORD_FILE_EXTENSION, RECORD_FILE_PATTERN};
use crate::{Error, Result};
use colored::Colorize;
use futures::stream::{self, StreamExt};
use indicatif::{HumanDuration, ProgressBar, ProgressStyle};
use std::io::Write;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, info, warn};

/// Main command runner
pub async fn run(args: Args) -> Result<ExtractionStats> {
    match args.command {
        Some(Commands::Process(process_args)) => run_process(process_args).await,
        None => Err(Error::configuration("No command specified".to_string())),
    }
}

/// Execute the process command end to end
async fn run_process(args: ProcessArgs) -> Result<ExtractionStats> {
    let start_time = Instant::now();

    setup_logging(&args)?;
    info!("Starting PubChem processor");
    debug!("Command line arguments: {:?}", args);

    args.validate()?;

    let config = ProcessingConfig {
        input_dir: args.input_dir.clone(),
        output_path: args
            .output_path
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT_FILE)),
        workers: args.workers.unwrap_or_else(num_cpus::get),
        show_progress: args.show_progress(),
    };
    config.validate()?;

    let files = discover_record_files(&config)?;
    info!("Found {} record files", files.len());
    if files.is_empty() {
        warn!(
            "No {}*.{} files found in '{}'",
            RECORD_FILE_PATTERN,
            RECORD_FILE_EXTENSION,
            config.input_dir.display()
        );
    }

    let stats = extract_all(&config, files).await?;
    info!("{}", stats.summary());

    info!(
        "Processing complete in {}",
        HumanDuration(start_time.elapsed())
    );
    print_summary(&config, &stats, start_time.elapsed());

    Ok(stats)
}

/// Set up structured logging for the CLI
fn setup_logging(args: &ProcessArgs) -> Result<()> {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("pubchem_processor={}", args.log_level())));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .with_level(true)
                .with_writer(std::io::stderr)
                .compact(),
        )
        .init();

    debug!("Logging initialized at level: {}", args.log_level());
    Ok(())
}

/// Discover downloaded record files under the input directory
fn discover_record_files(config: &ProcessingConfig) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for entry in walkdir::WalkDir::new(&config.input_dir) {
        let entry = entry?;
        if !entry.file_type().is_file() {
            continue;
        }
        let name = entry.file_name().to_string_lossy();
        if name.starts_with(RECORD_FILE_PATTERN)
            && entry
                .path()
                .extension()
                .is_some_and(|ext| ext == RECORD_FILE_EXTENSION)
        {
            files.push(entry.path().to_path_buf());
        }
    }
    files.sort();
    Ok(files)
}

/// Extract every discovered file and write the JSONL output
///
/// Each file is parsed on a blocking worker; the extractor and its tables
/// are shared read-only, so workers need no coordination.
async fn extract_all(config: &ProcessingConfig, files: Vec<PathBuf>) -> Result<ExtractionStats> {
    let extractor = Arc::new(RecordExtractor::new(
        Arc::new(crate::app::services::unit_registry::UnitRegistry::new()),
        &NormalizerConfig::default(),
    )?);

    let mut stats = ExtractionStats {
        files_found: files.len(),
        ..Default::default()
    };

    let progress_bar = if config.show_progress {
        let pb = ProgressBar::new(files.len() as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template(
                    "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {msg}",
                )
                .map_err(|e| Error::configuration(format!("Invalid progress template: {}", e)))?
                .progress_chars("#>-"),
        );
        pb.set_message("Extracting records...");
        Some(pb)
    } else {
        None
    };

    let mut output = std::io::BufWriter::new(
        std::fs::File::create(&config.output_path)
            .map_err(|e| Error::io("Failed to create output file", e))?,
    );

    let mut results = stream::iter(files.into_iter().map(|path| {
        let extractor = Arc::clone(&extractor);
        tokio::task::spawn_blocking(move || {
            let result = extractor.extract_file(&path);
            (path, result)
        })
    }))
    .buffer_unordered(config.workers);

    while let Some(joined) = results.next().await {
        let (path, result) = joined?;
        if let Some(pb) = &progress_bar {
            pb.inc(1);
        }

        match result {
            Ok(record) => {
                let line = serde_json::to_string(&record)?;
                writeln!(output, "{}", line)
                    .map_err(|e| Error::io("Failed to write output record", e))?;
                stats.add_record(record.properties.len());
            }
            Err(e) => {
                warn!("Skipping '{}': {}", path.display(), e);
                stats.add_failure(format!("{}: {}", path.display(), e));
            }
        }
    }

    output
        .flush()
        .map_err(|e| Error::io("Failed to flush output file", e))?;

    if let Some(pb) = &progress_bar {
        pb.finish_with_message("Extraction complete");
    }

    Ok(stats)
}

/// Print the colored human-readable summary
fn print_summary(config: &ProcessingConfig, stats: &ExtractionStats, elapsed: std::time::Duration) {
    println!();
    println!("{}", "PubChem Extraction Complete".green().bold());
    println!("{}", "===========================".green());
    println!(
        "   Files found:          {}",
        stats.files_found.to_string().cyan()
    );
    println!(
        "   Records extracted:    {}",
        stats.records_extracted.to_string().cyan()
    );
    println!(
        "   Properties extracted: {}",
        stats.properties_extracted.to_string().cyan()
    );
    println!(
        "   Success rate:         {}",
        format!("{:.1}%", stats.success_rate()).cyan()
    );
    println!("   Elapsed:              {}", HumanDuration(elapsed));
    println!(
        "   Output:               {}",
        config.output_path.display().to_string().cyan()
    );

    if stats.failures > 0 {
        println!(
            "   {} {}",
            "Failures:".yellow(),
            stats.failures.to_string().yellow()
        );
        for message in stats.failure_messages.iter().take(5) {
            println!("      {}", message.yellow());
        }
        if stats.failure_messages.len() > 5 {
            println!(
                "      ... and {} more (see log)",
                stats.failure_messages.len() - 5
            );
        }
    }
    println!();
}

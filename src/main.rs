use clap::Parser;
use pubchem_processor::cli::{args::Args, commands};
use std::process;

fn main() {
    let args = Args::parse();

    // If no subcommand was provided, show help and available commands
    if args.command.is_none() {
        show_help_and_commands();
        process::exit(0);
    }

    let runtime = tokio::runtime::Runtime::new().unwrap_or_else(|e| {
        eprintln!("Failed to create async runtime: {}", e);
        process::exit(1);
    });

    let result = runtime.block_on(async {
        let shutdown_signal = async {
            tokio::signal::ctrl_c()
                .await
                .expect("Failed to install CTRL+C signal handler");
        };

        tokio::select! {
            result = commands::run(args) => result,
            _ = shutdown_signal => {
                eprintln!("\nReceived CTRL+C, shutting down...");
                Err(pubchem_processor::Error::processing_interrupted(
                    "Processing interrupted by user".to_string(),
                ))
            }
        }
    });

    match result {
        Ok(_stats) => {
            // stats were already reported by the command
            process::exit(0);
        }
        Err(error) => {
            eprintln!("Error: {:#}", error);
            process::exit(1);
        }
    }
}

/// Show help information when no subcommand is provided
fn show_help_and_commands() {
    println!("PubChem Processor - Chemical Record Extractor");
    println!("=============================================");
    println!();
    println!("Extract normalized chemical records from downloaded PubChem pug_view");
    println!("JSON files: identity blocks plus typed physicochemical properties");
    println!("parsed from free-text quantity strings.");
    println!();
    println!("USAGE:");
    println!("    pubchem-processor <COMMAND> [OPTIONS]");
    println!();
    println!("COMMANDS:");
    println!("    process     Extract records from cid_*.json files into JSONL");
    println!("    help        Show this help message or help for specific commands");
    println!();
    println!("OPTIONS:");
    println!("    -h, --help       Show help information");
    println!("    -V, --version    Show version information");
    println!();
    println!("EXAMPLES:");
    println!("    # Process a directory of downloaded records:");
    println!("    pubchem-processor process --input ./records --output chemicals.jsonl");
    println!();
    println!("    # Use 8 extraction workers with verbose logging:");
    println!("    pubchem-processor process --input ./records --workers 8 --verbose");
    println!();
    println!("For detailed help on any command, use:");
    println!("    pubchem-processor <COMMAND> --help");
}

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use log::LevelFilter;
use regex::Regex;

use unmap_core::{ensure_output_dir, find_files, process_many, BatchOptions, ExtractOptions};

#[derive(Parser)]
#[command(
    name = "unmap",
    version,
    about = "Recover original sources from sourcemap files"
)]
struct Cli {
    /// Files or directories to scan for sourcemaps
    #[arg(required = true, value_name = "FILE|DIRECTORY")]
    inputs: Vec<PathBuf>,

    /// Verbose output, will print which file is currently being processed
    #[arg(short, long)]
    verbose: bool,

    /// Output directory
    #[arg(short, long, default_value = ".", value_name = "DIR")]
    output_dir: PathBuf,

    /// Preserve the original folder structure under the output directory
    #[arg(short, long)]
    preserve: bool,

    /// Regular expression for matching and filtering file names
    #[arg(short = 'M', long = "match", default_value = r"\.map$", value_name = "REGEX")]
    match_pattern: String,

    /// Override the maps' sourceRoot when resolving sources from disk
    #[arg(long, value_name = "PREFIX")]
    source_root: Option<String>,

    /// Prefer files on disk over content inlined in the map
    #[arg(long)]
    prefer_fallback: bool,

    /// Number of files processed concurrently
    #[arg(short, long, default_value_t = 8, value_name = "N")]
    jobs: usize,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    env_logger::Builder::from_default_env()
        .filter_level(if cli.verbose {
            LevelFilter::Debug
        } else {
            LevelFilter::Warn
        })
        .init();

    let pattern = match Regex::new(&cli.match_pattern) {
        Ok(re) => re,
        Err(err) => {
            eprintln!("Error: invalid match pattern: {err}");
            return ExitCode::FAILURE;
        }
    };

    let mut file_list = Vec::new();
    for input in &cli.inputs {
        if !input.exists() {
            eprintln!("Error: File \"{}\" not found", input.display());
            continue;
        }
        file_list.extend(find_files(input, &pattern));
    }

    if cli.verbose {
        println!("Going to process total of {} files", file_list.len());
    }

    if file_list.is_empty() {
        eprintln!("Error: No valid input files given");
        return ExitCode::FAILURE;
    }

    if let Err(err) = ensure_output_dir(&cli.output_dir) {
        eprintln!(
            "Error: cannot use output directory \"{}\": {err}",
            cli.output_dir.display()
        );
        return ExitCode::FAILURE;
    }
    if cli.verbose {
        println!("Outputting to directory \"{}\"", cli.output_dir.display());
    }

    let opts = BatchOptions {
        output_dir: cli.output_dir,
        preserve: cli.preserve,
        concurrency: cli.jobs,
        extract: ExtractOptions {
            source_root_override: cli.source_root,
            prefer_fallback_over_inline: cli.prefer_fallback,
        },
    };

    let reports = process_many(file_list, opts).await;

    let mut failed = 0usize;
    for report in &reports {
        match &report.error {
            Some(err) => {
                failed += 1;
                eprintln!("{}: {err}", report.input.display());
            }
            None => {
                if cli.verbose {
                    println!(
                        "{}: recovered {} sources",
                        report.input.display(),
                        report.written
                    );
                }
            }
        }
    }

    if failed == reports.len() {
        eprintln!("Error: no sourcemap could be processed");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}

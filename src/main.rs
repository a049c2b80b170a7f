use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use quizseed::export::{format_report, DEFAULT_SEED_FILE};
use quizseed::extract::QuestionExtractor;
use quizseed::parser::PopplerSource;
use quizseed::pipeline::{extract_pages, Pipeline, PipelineConfig};

#[derive(Parser, Debug)]
#[command(name = "quizseed")]
#[command(version, about = "Extract quiz questions from exam PDFs into a JSON seed file", long_about = None)]
struct Cli {
    /// Enable debug logging (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Extract every PDF in a directory into one seed file
    Extract {
        /// Directory containing the PDF files
        #[arg(env = "QUIZSEED_PDF_DIR", default_value = ".")]
        dir: PathBuf,

        /// Seed file name, written inside the input directory
        #[arg(short, long, default_value = DEFAULT_SEED_FILE)]
        output_name: String,

        /// Disable per-document progress lines
        #[arg(short, long)]
        quiet: bool,
    },

    /// Parse a single PDF and report what would be extracted, without writing
    Inspect {
        /// Input PDF file path
        input: PathBuf,

        /// Print the records of this 1-based page as JSON
        #[arg(short, long)]
        page: Option<usize>,
    },

    /// Show information about a PDF file
    Info {
        /// Input PDF file path
        input: PathBuf,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Extract {
            dir,
            output_name,
            quiet,
        } => run_extract(dir, output_name, quiet),
        Commands::Inspect { input, page } => inspect(input, page),
        Commands::Info { input } => show_info(input),
    }
}

fn init_logging(verbose: bool) {
    let default_directive = if verbose { "quizseed=debug" } else { "quizseed=warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn run_extract(dir: PathBuf, output_name: String, quiet: bool) -> Result<()> {
    let config = PipelineConfig::new(dir.clone())
        .with_output_name(output_name)
        .quiet(quiet);

    if !quiet {
        println!("[*] Input: {}", dir.display());
        println!("[*] Output: {}\n", config.output_path().display());
    }

    let summary = Pipeline::new(config, PopplerSource::new()).run()?;

    println!("\n[✓] Saved: {}", summary.output_path.display());
    print!("{}", format_report(summary.total, &summary.stats));

    Ok(())
}

fn inspect(input: PathBuf, page: Option<usize>) -> Result<()> {
    if !input.is_file() {
        anyhow::bail!("Input file does not exist: {}", input.display());
    }

    let extractor = QuestionExtractor::new();
    let mut total = 0;
    let mut selected = Vec::new();

    extract_pages(&PopplerSource::new(), &extractor, &input, |page_number, records| {
        println!("[page {page_number:>3}] {} question(s)", records.len());
        total += records.len();
        if page == Some(page_number) {
            selected = records;
        }
    })
    .with_context(|| format!("Failed to process PDF: {}", input.display()))?;

    println!("[*] Total: {total} question(s)");

    if let Some(page_number) = page {
        println!("\n[*] Page {page_number}:");
        println!("{}", serde_json::to_string_pretty(&selected)?);
    }

    Ok(())
}

fn show_info(input: PathBuf) -> Result<()> {
    use quizseed::parser::PdfReader;

    if !input.exists() {
        anyhow::bail!("Input file does not exist: {}", input.display());
    }

    let reader = PdfReader::new(input.clone());
    let page_count = reader
        .page_count()
        .with_context(|| format!("Failed to open PDF: {}", input.display()))?;

    println!("PDF Information");
    println!("===============");
    println!("File: {}", input.display());
    println!("Pages: {}", page_count);

    Ok(())
}

use clap::{Parser, ValueEnum};
use greenbox::extractor::ResultExtractor;
use greenbox::models::{ExtractionResult, ExtractorConfig};
use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};
use anyhow::{Context, Result};
use log::{info, error};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// HTML file to scan, or "-" for stdin
    #[arg(required = true)]
    input: PathBuf,

    /// Only extract the container with this id
    #[arg(short, long)]
    container: Option<String>,

    /// Output file path (optional)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Json)]
    format: OutputFormat,

    /// Class that marks an item as correct
    #[arg(long)]
    marker: Option<String>,

    /// CSS selector for result containers
    #[arg(long)]
    container_selector: Option<String>,

    /// CSS selector for the items inside a container
    #[arg(long)]
    item_selector: Option<String>,

    /// Separator used to join item texts
    #[arg(long)]
    separator: Option<String>,
}

#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum, Debug)]
enum OutputFormat {
    Json,
    Text,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let html = read_input(&args.input)?;
    info!("Scanning {} bytes of HTML", html.len());

    let mut config = ExtractorConfig::default();
    if let Some(marker) = args.marker.clone() {
        config.marker_class = marker;
    }
    if let Some(selector) = args.container_selector.clone() {
        config.container_selector = selector;
    }
    if let Some(selector) = args.item_selector.clone() {
        config.item_selector = selector;
    }
    if let Some(separator) = args.separator.clone() {
        config.separator = separator;
    }

    let extractor = ResultExtractor::with_config(config);

    let result = match &args.container {
        Some(id) => extractor.extract_by_id(&html, id).map(|r| vec![r]),
        None => extractor.extract_all(&html),
    };

    match result {
        Ok(results) => {
            info!("Extracted {} container(s)", results.len());
            handle_output(&results, args.container.is_some(), &args)?;
        }
        Err(e) => {
            error!("Extraction failed: {}", e);
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }

    Ok(())
}

fn read_input(path: &Path) -> Result<String> {
    if path.to_str() == Some("-") {
        let mut html = String::new();
        std::io::stdin().read_to_string(&mut html)?;
        Ok(html)
    } else {
        fs::read_to_string(path).with_context(|| format!("Failed to read {:?}", path))
    }
}

fn handle_output(results: &[ExtractionResult], single: bool, args: &Args) -> Result<()> {
    let content = match args.format {
        OutputFormat::Json => {
            // Single-container mode emits the object itself, not a
            // one-element array.
            if single {
                serde_json::to_string_pretty(&results[0])?
            } else {
                serde_json::to_string_pretty(&results)?
            }
        }
        OutputFormat::Text => results
            .iter()
            .map(|r| format!("id: {}\ncorrect: {}\nwrong: {}\n", r.id, r.correct, r.wrong))
            .collect::<Vec<_>>()
            .join("\n"),
    };

    if let Some(path) = &args.output {
        fs::write(path, content)?;
        println!("Output written to {:?}", path);
    } else {
        println!("{}", content);
    }

    Ok(())
}

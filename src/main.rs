//! arxtract - scholarly document structure extractor

use std::process::ExitCode;

use clap::Parser;

use arxtract::{parse_document, storage};

#[derive(Parser)]
#[command(name = "arxtract")]
#[command(version, about = "Extract document structure from scholarly HTML", long_about = None)]
#[command(after_help = "EXAMPLES:
    arxtract paper.html paper.json    Extract and save as JSON
    arxtract -i paper.html            Show document summary")]
struct Cli {
    /// Input HTML file (LaTeXML rendering)
    #[arg(value_name = "INPUT")]
    input: String,

    /// Output JSON file
    #[arg(value_name = "OUTPUT", required_unless_present = "info")]
    output: Option<String>,

    /// Show a document summary without writing
    #[arg(short, long)]
    info: bool,

    /// Suppress output messages
    #[arg(short, long)]
    quiet: bool,
}

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();

    let result = if cli.info {
        show_info(&cli.input)
    } else {
        let output = cli.output.expect("output required");
        extract(&cli.input, &output, cli.quiet)
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn show_info(path: &str) -> Result<(), String> {
    let document = parse(path)?;

    println!("File: {path}");
    println!("Title: {}", document.title);
    if !document.abstract_text.is_empty() {
        let abs = document.abstract_text.trim();
        match truncate_chars(abs, 200) {
            Some(short) => println!("Abstract: {short}..."),
            None => println!("Abstract: {abs}"),
        }
    }
    println!("Sections: {}", document.sections.len());
    println!("References: {}", document.references.len());

    Ok(())
}

fn extract(input: &str, output: &str, quiet: bool) -> Result<(), String> {
    let document = parse(input)?;
    storage::save(&document, output).map_err(|e| e.to_string())?;
    if !quiet {
        println!("{input} -> {output}");
    }
    Ok(())
}

fn parse(path: &str) -> Result<arxtract::Document, String> {
    let html = std::fs::read_to_string(path).map_err(|e| e.to_string())?;
    parse_document(&html).map_err(|e| e.to_string())
}

/// Returns the first `max` characters when the text is longer, `None` when
/// it already fits. Counts characters, not bytes: abstracts are full of
/// multibyte math symbols and a byte slice could split one.
fn truncate_chars(text: &str, max: usize) -> Option<String> {
    if text.chars().count() > max {
        Some(text.chars().take(max).collect())
    } else {
        None
    }
}

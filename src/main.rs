//! # Billcanvas CLI
//!
//! Command-line interface for compiling templates and label sheets.
//!
//! ## Usage
//!
//! ```bash
//! # Compile a saved template against real invoice data
//! billcanvas template invoice.json --data context.json -o bill.html
//!
//! # Preview a template with descriptive placeholder labels
//! billcanvas preview invoice.json
//!
//! # Print 50 barcode labels for a product
//! billcanvas labels --code SKU1 --quantity 50 -o labels.html
//!
//! # List every placeholder token
//! billcanvas placeholders
//! ```
//!
//! Set `RUST_LOG=debug` for compile details on stderr.

use clap::{Parser, Subcommand};
use std::fs;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

use billcanvas::{
    BillcanvasError, Document, PlaceholderContext,
    placeholder,
    print::{self, LabelRun},
};

/// Billcanvas - invoice template and barcode label compiler
#[derive(Parser, Debug)]
#[command(name = "billcanvas")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Compile a template against a data context
    Template {
        /// Saved template (JSON array of elements)
        document: PathBuf,

        /// Data context JSON (tenant, invoice, customer, user)
        #[arg(long, value_name = "FILE")]
        data: PathBuf,

        /// Output HTML file (defaults to stdout)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Print job title
        #[arg(long, default_value = "Invoice")]
        title: String,
    },

    /// Compile a template with descriptive placeholder labels
    Preview {
        /// Saved template (JSON array of elements)
        document: PathBuf,

        /// Output HTML file (defaults to stdout)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },

    /// Compile a sheet of barcode labels
    Labels {
        /// Base code; derived codes are CODE-001, CODE-002, ...
        #[arg(long)]
        code: String,

        /// Number of labels (values below 1 print one label)
        #[arg(long, default_value = "1", allow_negative_numbers = true)]
        quantity: i64,

        /// File with precomputed codes, one per line
        #[arg(long, value_name = "FILE")]
        codes: Option<PathBuf>,

        /// Output HTML file (defaults to stdout)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },

    /// List available placeholder tokens
    Placeholders,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<(), BillcanvasError> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Template {
            document,
            data,
            output,
            title,
        } => {
            let doc = Document::from_json(&fs::read_to_string(&document)?)?;
            let ctx = PlaceholderContext::from_json(&fs::read_to_string(&data)?)?;
            let html = print::compile_template(&doc, &ctx).to_html_with_title(&title);
            write_output(output.as_deref(), &html)?;
        }

        Commands::Preview { document, output } => {
            let doc = Document::from_json(&fs::read_to_string(&document)?)?;
            let html = print::compile_template(&doc, &PlaceholderContext::preview())
                .to_html_with_title("Preview");
            write_output(output.as_deref(), &html)?;
        }

        Commands::Labels {
            code,
            quantity,
            codes,
            output,
        } => {
            let mut run = LabelRun::new(code, quantity);
            if let Some(path) = codes {
                let list: Vec<String> = fs::read_to_string(&path)?
                    .lines()
                    .map(|line| line.trim().to_string())
                    .collect();
                if list.iter().all(|code| code.is_empty()) {
                    return Err(BillcanvasError::InvalidInput(format!(
                        "{} contains no codes",
                        path.display()
                    )));
                }
                run = run.with_codes(list);
            }
            let program = run.compile()?;
            let html = program.to_html_with_title(&format!("Labels {}", run.base_code().trim()));
            write_output(output.as_deref(), &html)?;
        }

        Commands::Placeholders => {
            let mut current = None;
            for entry in placeholder::catalog() {
                if current != Some(entry.namespace) {
                    println!("{}:", entry.namespace.label());
                    current = Some(entry.namespace);
                }
                println!("  {{{{{}}}}}  {}", entry.token, entry.label);
            }
        }
    }

    Ok(())
}

fn write_output(path: Option<&Path>, html: &str) -> Result<(), BillcanvasError> {
    match path {
        Some(path) => {
            fs::write(path, html)?;
            tracing::info!(path = %path.display(), bytes = html.len(), "wrote output");
        }
        None => print!("{}", html),
    }
    Ok(())
}

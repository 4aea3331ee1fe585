use std::fs::File;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use vendrec_catalog::{CatalogSource, CsvCatalog, RemoteCatalog, XlsxCatalog};
use vendrec_extract::{parse_sheet_text, scan_image, ExtractReport, OcrEngine, SheetLayout};
use vendrec_recon::{reconcile, DEFAULT_THRESHOLD};

mod config;
mod export;
mod record_io;

use config::Profile;

#[derive(Parser)]
#[command(name = "vendrec")]
#[command(about = "Reconcile vendor price lists against a master stock catalog")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Extract (item, rate) pairs from vendor price documents
    #[command(after_help = "\
Examples:
  vendrec extract july-prices.txt -o extracted.csv
  vendrec extract scan1.jpg scan2.jpg --format json -o extracted.json
  vendrec extract pricelist.txt --unit-marker CTN")]
    Extract {
        /// Price-sheet text files (pdftotext output) and/or scanned images
        #[arg(required = true)]
        inputs: Vec<PathBuf>,

        /// Unit marker that terminates an item line in sheet text
        #[arg(long)]
        unit_marker: Option<String>,

        /// Optional TOML profile (unit marker, workbook layout, threshold)
        #[arg(long)]
        config: Option<PathBuf>,

        /// Where to write the extracted table
        #[arg(long, short = 'o', default_value = "extracted.csv")]
        out: PathBuf,

        /// Output format
        #[arg(long, value_enum, default_value = "csv")]
        format: OutputFormat,
    },

    /// Match an extracted table against the stock catalog
    #[command(after_help = "\
Examples:
  vendrec reconcile extracted.csv --stock master.xlsx
  vendrec reconcile extracted.csv --stock stock.csv --threshold 85
  vendrec reconcile extracted.csv --stock-url https://example.com/stock.csv")]
    Reconcile {
        /// Extracted vendor table (CSV from `vendrec extract`)
        extracted: PathBuf,

        /// Stock catalog file (.xlsx/.xls/.ods or .csv)
        #[arg(long, conflicts_with = "stock_url")]
        stock: Option<PathBuf>,

        /// Stock catalog published at a URL (CSV)
        #[arg(long)]
        stock_url: Option<String>,

        /// Minimum similarity score (0-100) required to accept a match
        #[arg(long, value_parser = clap::value_parser!(u8).range(0..=100))]
        threshold: Option<u8>,

        /// Optional TOML profile (unit marker, workbook layout, threshold)
        #[arg(long)]
        config: Option<PathBuf>,

        /// Where to write accepted matches
        #[arg(long, default_value = "matched_items.csv")]
        matched_out: PathBuf,

        /// Where to write items that found no acceptable match
        #[arg(long, default_value = "unmatched_items.csv")]
        unmatched_out: PathBuf,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum OutputFormat {
    Csv,
    Json,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Extract { inputs, unit_marker, config, out, format } => {
            run_extract(&inputs, unit_marker, config.as_deref(), &out, format)
        }
        Commands::Reconcile {
            extracted,
            stock,
            stock_url,
            threshold,
            config,
            matched_out,
            unmatched_out,
        } => run_reconcile(
            &extracted,
            stock,
            stock_url,
            threshold,
            config.as_deref(),
            &matched_out,
            &unmatched_out,
        ),
    }
}

fn load_profile(path: Option<&Path>) -> Result<Profile> {
    match path {
        Some(path) => Profile::from_path(path)
            .with_context(|| format!("failed to load profile {}", path.display())),
        None => Ok(Profile::default()),
    }
}

// ── extract ───────────────────────────────────────────────────────────────────

fn run_extract(
    inputs: &[PathBuf],
    unit_marker: Option<String>,
    config: Option<&Path>,
    out: &Path,
    format: OutputFormat,
) -> Result<()> {
    let profile = load_profile(config)?;
    let mut layout = profile.sheet_layout();
    if let Some(marker) = unit_marker {
        layout.unit_marker = marker;
    }

    let mut records = Vec::new();
    let mut skipped = 0usize;
    for path in inputs {
        let report = extract_one(path, &layout)
            .with_context(|| format!("failed to extract {}", path.display()))?;
        for line in &report.skipped {
            tracing::warn!(
                "{}: line {} skipped ({}): {}",
                path.display(),
                line.line_no,
                line.reason,
                line.text
            );
        }
        tracing::info!(
            "{}: {} items, {} lines skipped",
            path.display(),
            report.records.len(),
            report.skipped.len()
        );
        skipped += report.skipped.len();
        records.extend(report.records);
    }

    if records.is_empty() {
        bail!("no items extracted from {} input file(s)", inputs.len());
    }

    let file = File::create(out)
        .with_context(|| format!("failed to create {}", out.display()))?;
    match format {
        OutputFormat::Csv => record_io::write_records_csv(file, &records)?,
        OutputFormat::Json => serde_json::to_writer_pretty(file, &records)?,
    }

    println!(
        "Extracted {} items to {} ({} lines skipped)",
        records.len(),
        out.display(),
        skipped
    );
    Ok(())
}

const IMAGE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "webp", "tif", "tiff", "bmp"];

fn extract_one(path: &Path, layout: &SheetLayout) -> Result<ExtractReport> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_lowercase)
        .unwrap_or_default();

    if IMAGE_EXTENSIONS.contains(&ext.as_str()) {
        let engine = ocr_engine()?;
        let bytes = std::fs::read(path)?;
        Ok(scan_image(&bytes, engine.as_ref())?)
    } else {
        let text = std::fs::read_to_string(path)?;
        Ok(parse_sheet_text(&text, layout))
    }
}

#[cfg(feature = "tesseract")]
fn ocr_engine() -> Result<Box<dyn OcrEngine>> {
    Ok(Box::new(vendrec_extract::ocr::tesseract::TesseractEngine::new(None, "eng")))
}

#[cfg(not(feature = "tesseract"))]
fn ocr_engine() -> Result<Box<dyn OcrEngine>> {
    bail!("image inputs need a build with the `tesseract` feature enabled")
}

// ── reconcile ─────────────────────────────────────────────────────────────────

const WORKBOOK_EXTENSIONS: &[&str] = &["xlsx", "xls", "xlsb", "ods"];

fn resolve_threshold(flag: Option<u8>, profile: &Profile) -> u8 {
    flag.or(profile.threshold).unwrap_or(DEFAULT_THRESHOLD)
}

fn run_reconcile(
    extracted: &Path,
    stock: Option<PathBuf>,
    stock_url: Option<String>,
    threshold: Option<u8>,
    config: Option<&Path>,
    matched_out: &Path,
    unmatched_out: &Path,
) -> Result<()> {
    let profile = load_profile(config)?;
    let threshold = resolve_threshold(threshold, &profile);

    let source: Box<dyn CatalogSource> = match (stock, stock_url) {
        (Some(path), None) => {
            let ext = path
                .extension()
                .and_then(|e| e.to_str())
                .map(str::to_lowercase)
                .unwrap_or_default();
            if WORKBOOK_EXTENSIONS.contains(&ext.as_str()) {
                Box::new(XlsxCatalog::with_layout(path, profile.workbook_layout()))
            } else {
                Box::new(CsvCatalog::new(path))
            }
        }
        (None, Some(url)) => Box::new(RemoteCatalog::new(url)),
        _ => bail!("provide exactly one of --stock or --stock-url"),
    };

    let stock_records = source.load().context("failed to load stock catalog")?;
    tracing::info!("catalog: {} stock items", stock_records.len());

    let vendor_records = record_io::read_records_csv(
        File::open(extracted)
            .with_context(|| format!("failed to open {}", extracted.display()))?,
    )?;
    tracing::info!("extracted table: {} vendor items", vendor_records.len());

    let outcome = reconcile(&vendor_records, &stock_records, threshold)?;

    export::write_matched_csv(
        File::create(matched_out)
            .with_context(|| format!("failed to create {}", matched_out.display()))?,
        &outcome.matched,
    )?;
    export::write_unmatched_csv(
        File::create(unmatched_out)
            .with_context(|| format!("failed to create {}", unmatched_out.display()))?,
        &outcome.unmatched,
    )?;

    println!(
        "{} matched -> {}, {} unmatched -> {} (threshold {})",
        outcome.matched.len(),
        matched_out.display(),
        outcome.unmatched.len(),
        unmatched_out.display(),
        threshold
    );
    Ok(())
}

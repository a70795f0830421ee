use std::path::PathBuf;

use clap::{Parser, Subcommand};

mod output;

use output::ColorMode;
use pub718_pdf_mupdf::MupdfBackend;

/// Publication 718 converter - extract NYS sales tax jurisdiction rates
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Convert a Publication 718 PDF into CSV and JSON rate tables
    Convert {
        /// Path to the Publication 718 PDF
        pdf_path: PathBuf,

        /// Directory for the output files (created if absent)
        #[arg(long, default_value = ".")]
        outdir: PathBuf,

        /// Disable colored output
        #[arg(long)]
        no_color: bool,
    },

    /// Resolve the applicable rate from a previously generated JSON file
    Lookup {
        /// Path to a pub718_rates_<date>.json file
        rates_json: PathBuf,

        /// County the address falls in
        #[arg(long)]
        county: String,

        /// City within the county, if any
        #[arg(long)]
        city: Option<String>,

        /// Disable colored output
        #[arg(long)]
        no_color: bool,
    },
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Convert {
            pdf_path,
            outdir,
            no_color,
        } => convert(pdf_path, outdir, no_color),
        Command::Lookup {
            rates_json,
            county,
            city,
            no_color,
        } => lookup(rates_json, county, city, no_color),
    }
}

fn convert(pdf_path: PathBuf, outdir: PathBuf, no_color: bool) -> anyhow::Result<()> {
    if !pdf_path.exists() {
        anyhow::bail!("File not found: {}", pdf_path.display());
    }

    let color = ColorMode(!no_color);
    let mut writer = std::io::stdout();

    let backend = MupdfBackend::new();
    let extraction = pub718_parsing::extract_rates(&pdf_path, &backend)?;

    let paths = pub718_reporting::export_rates(
        &extraction.records,
        extraction.effective_date,
        &pdf_path,
        &outdir,
    )?;

    let date = extraction.effective_date.map(|d| d.to_string());
    output::print_conversion_summary(
        &mut writer,
        &paths,
        extraction.records.len(),
        date.as_deref(),
        color,
    )?;

    Ok(())
}

fn lookup(
    rates_json: PathBuf,
    county: String,
    city: Option<String>,
    no_color: bool,
) -> anyhow::Result<()> {
    if !rates_json.exists() {
        anyhow::bail!("File not found: {}", rates_json.display());
    }

    let color = ColorMode(!no_color);
    let mut writer = std::io::stdout();

    let envelope = pub718_reporting::load_rates_file(&rates_json)?;
    let records = envelope.into_records();

    let Some(resolved) = pub718_core::resolve_rate(&records, &county, city.as_deref()) else {
        anyhow::bail!(
            "No rate found for county {:?} in {}",
            county,
            rates_json.display()
        );
    };

    output::print_resolved_rate(&mut writer, &resolved, color)?;

    Ok(())
}

mod exporter;
mod parser;
mod site;

use std::fs;
use std::path::PathBuf;
use std::process;

use clap::Parser;
use tracing::info;

use exporter::JobRecord;

#[derive(Parser)]
#[command(
    name = "iimjobs_extractor",
    about = "Extract job listings from a saved iimjobs HTML page into an .xlsx sheet"
)]
struct Cli {
    /// Path to the saved HTML page
    input: PathBuf,
    /// Output workbook path
    #[arg(short, long, default_value = "jobs.xlsx")]
    output: PathBuf,
    /// Print the extracted rows instead of writing the workbook
    #[arg(long)]
    preview: bool,
    /// Max rows to display in preview mode
    #[arg(short = 'n', long, default_value = "50")]
    limit: usize,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let cli = Cli::parse();

    if !cli.input.exists() {
        eprintln!("Input HTML not found: {}", cli.input.display());
        process::exit(2);
    }

    let bytes = fs::read(&cli.input)?;
    info!(bytes = bytes.len(), input = %cli.input.display(), "read saved page");
    let html = parser::dom::decode(&bytes);
    let jobs = parser::extract_jobs(&html);

    if cli.preview {
        print_preview(&jobs, cli.limit);
        return Ok(());
    }

    if jobs.is_empty() {
        println!("No jobs found. Exporting an empty sheet with headers.");
    }
    exporter::write_xlsx(&cli.output, &jobs)?;
    println!("Wrote {} rows to {}", jobs.len(), cli.output.display());
    Ok(())
}

fn print_preview(jobs: &[JobRecord], limit: usize) {
    if jobs.is_empty() {
        println!("No jobs found.");
        return;
    }

    // Compact, readable table
    println!(
        "{:>3} | {:<40} | {:<20} | {:<16} | {:<10}",
        "#", "Title", "Company", "Location", "Exp"
    );
    println!("{}", "-".repeat(101));

    for (i, job) in jobs.iter().take(limit).enumerate() {
        println!(
            "{:>3} | {:<40} | {:<20} | {:<16} | {:<10}",
            i + 1,
            truncate(&job.title, 40),
            truncate(&job.company, 20),
            truncate(&job.location, 16),
            truncate(&job.experience, 10),
        );
    }

    println!("\n{} rows extracted", jobs.len());
}

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let truncated: String = s.chars().take(max).collect();
        format!("{}...", truncated)
    }
}

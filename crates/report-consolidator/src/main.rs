mod bootstrap;

use anyhow::Result;
use clap::Parser;
use report_core::settings::Settings;
use report_data::collector::collect_reports;
use report_data::Corpus;
use report_output::{console, csv, json};

fn main() -> Result<()> {
    let settings = Settings::parse();

    if !settings.reports_dir.is_dir() {
        eprintln!(
            "Error: Reports directory not found: {}",
            settings.reports_dir.display()
        );
        std::process::exit(1);
    }

    bootstrap::setup_logging(&settings.log_level);
    tracing::info!(
        "Report consolidator v{} starting",
        env!("CARGO_PKG_VERSION")
    );

    let mut corpus = Corpus::new();
    collect_reports(&settings.reports_dir, &mut corpus);

    let csv_path = settings.csv_output();
    json::write_json_report(&settings.output, &corpus)?;
    csv::write_csv_report(&csv_path, &corpus)?;

    console::print_summary(&corpus);

    println!("\nConsolidated reports ready for Google Play Console submission:");
    println!("   - JSON: {}", settings.output.display());
    println!("   - CSV: {}", csv_path.display());

    Ok(())
}

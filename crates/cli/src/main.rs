//! Queens Report CLI entry point.

use colored::Colorize;

#[tokio::main]
async fn main() {
    if let Err(e) = queens_report_cli::run().await {
        eprintln!("{} {:#}", "Error:".red(), e);
        std::process::exit(1);
    }
}

use std::{path::PathBuf, process::exit};

use clap::Parser;
use tracing_subscriber::filter::LevelFilter;

use daily_budget::SalaryStore;

/// A utility for writing the pay date column to salary files created before
/// pay dates were recorded.
///
/// Records without a pay date are given their end date as the pay date.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// File path to the CSV file of salary payments.
    #[arg(long, default_value = "salary_data.csv")]
    salary_file: PathBuf,
}

fn main() {
    tracing_subscriber::fmt()
        .with_max_level(LevelFilter::INFO)
        .init();

    let args = Args::parse();
    let store = SalaryStore::new(&args.salary_file);

    match store.migrate_pay_dates() {
        Ok(0) => println!("Every record in {} has a pay date.", args.salary_file.display()),
        Ok(count) => println!(
            "Added the pay date to {count} records in {}.",
            args.salary_file.display()
        ),
        Err(error) => {
            eprintln!("Could not migrate {}: {error}", args.salary_file.display());
            exit(1);
        }
    }
}

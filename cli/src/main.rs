use std::io::{self, Write};
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use stock_analyzer::{
    api::StockAnalyzer,
    models::{StockRecord, DEFAULT_MAX_RECORDS},
    utils::{format_moving_average, init_logger, write_table},
};

#[derive(Parser)]
#[command(name = "stock-analyzer")]
#[command(about = "Run one analysis over a CSV of daily stock prices")]
pub struct Cli {
    /// CSV file with a header line followed by date,open,high,low,close,volume rows
    #[arg(short, long, global = true, default_value = "stock_data.csv")]
    pub file: PathBuf,

    /// Maximum number of data rows to load
    #[arg(short, long, global = true, default_value_t = DEFAULT_MAX_RECORDS)]
    pub capacity: usize,

    /// Print results as JSON instead of text
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug, PartialEq)]
pub enum Commands {
    /// Print every record
    List,
    /// Trailing moving average of closing prices
    Ma {
        /// Number of consecutive records per average
        #[arg(short, long)]
        window: usize,
    },
    /// Record with the highest high
    High,
    /// Record with the lowest low
    Low,
}

fn print_record(out: &mut impl Write, title: &str, record: &StockRecord, json: bool) -> anyhow::Result<()> {
    if json {
        writeln!(out, "{}", serde_json::to_string_pretty(record)?)?;
    } else {
        writeln!(out, "{}:", title)?;
        writeln!(out, "{}", record)?;
    }
    Ok(())
}

/// Run the selected subcommand against loaded data and write the result to `out`.
fn execute(command: &Commands, json: bool, analyzer: &StockAnalyzer, out: &mut impl Write) -> anyhow::Result<()> {
    match command {
        Commands::List => {
            if json {
                writeln!(out, "{}", serde_json::to_string_pretty(analyzer.records())?)?;
            } else {
                write_table(out, analyzer.records())?;
            }
        }
        Commands::Ma { window } => {
            let series = analyzer.moving_average(*window)?;
            if json {
                writeln!(out, "{}", serde_json::to_string_pretty(&series)?)?;
            } else {
                writeln!(out, "Moving Averages (Window size: {}):", window)?;
                for point in &series {
                    writeln!(out, "{}", format_moving_average(point))?;
                }
            }
        }
        Commands::High => print_record(out, "Highest High", analyzer.highest_high()?, json)?,
        Commands::Low => print_record(out, "Lowest Low", analyzer.lowest_low()?, json)?,
    }
    Ok(())
}

fn main() -> anyhow::Result<()> {
    init_logger()?;

    let cli = Cli::parse();
    let analyzer = StockAnalyzer::load(&cli.file, cli.capacity)?;
    if analyzer.is_empty() {
        anyhow::bail!("no stock records found in {}", cli.file.display());
    }

    let stdout = io::stdout();
    let mut out = stdout.lock();
    execute(&cli.command, cli.json, &analyzer, &mut out)
}

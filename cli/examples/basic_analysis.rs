//! Basic Analysis Example
//!
//! Loads a small in-memory price history and runs every analysis on it.

use stock_analyzer::prelude::*;
use stock_analyzer::utils::write_table;
use std::error::Error;

const SAMPLE: &str = "\
Date,Open,High,Low,Close,Volume
2024-01-02,187.15,188.44,183.89,185.64,82488700
2024-01-03,184.22,185.88,183.43,184.25,58414500
2024-01-04,182.15,183.09,180.88,181.91,71983600
2024-01-05,181.99,182.76,180.17,181.18,62303300
2024-01-08,182.09,185.60,181.50,185.56,59144500
";

fn main() -> Result<(), Box<dyn Error>> {
    stock_analyzer::init_logger()?;

    let data = CSVDataService::default().parse_csv_content(SAMPLE)?;
    let analyzer = StockAnalyzer::from_loaded(data);

    println!("Example 1: Listing ({} records)", analyzer.len());
    write_table(&mut std::io::stdout(), analyzer.records())?;

    println!("\nExample 2: 3-day moving average");
    for point in analyzer.moving_average(3)? {
        println!("{}", point);
    }

    println!("\nExample 3: Extremes");
    println!("Highest High: {}", analyzer.highest_high()?);
    println!("Lowest Low:   {}", analyzer.lowest_low()?);

    Ok(())
}

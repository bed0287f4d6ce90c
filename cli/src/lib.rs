//! # stock-analyzer - Daily Stock Price Analysis Library
//!
//! Loads daily OHLCV bars from a CSV file and answers simple questions about them:
//! - Full listing of every bar
//! - Trailing simple moving average of closing prices
//! - The bar with the highest high and the bar with the lowest low
//!
//! ## Quick Start
//!
//! ```no_run
//! use stock_analyzer::api::StockAnalyzer;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let analyzer = StockAnalyzer::load("stock_data.csv", 1000)?;
//!     for point in analyzer.moving_average(5)? {
//!         println!("{}", point);
//!     }
//!     println!("Highest high: {}", analyzer.highest_high()?);
//!     Ok(())
//! }
//! ```

pub mod error;
pub mod models;
pub mod services;
pub mod utils;

// Analysis modules - the read-only queries over a loaded sequence
pub mod analysis {
    //! Analytic operations over a record slice

    /// Trailing moving average of closing prices
    pub mod moving_average {
        pub use crate::utils::moving_average::*;
    }

    /// Highest-high and lowest-low search
    pub mod extremes {
        pub use crate::utils::extremes::*;
    }

    /// Tabular text rendering
    pub mod display {
        pub use crate::utils::display::*;
    }
}

// Public API for easy library usage
pub mod api;

// Prelude for convenient imports
pub mod prelude {
    //! Prelude module for convenient imports
    //!
    //! ```rust
    //! use stock_analyzer::prelude::*;
    //! ```

    pub use crate::api::{AnalyzerBuilder, StockAnalyzer};
    pub use crate::error::AnalyzerError;
    pub use crate::models::{LoadedData, MovingAveragePoint, StockRecord, DEFAULT_MAX_RECORDS};
    pub use crate::services::{load, CSVDataService};
    pub use crate::utils::{highest_high, list_rows, lowest_low, moving_average};
}

pub use error::{AnalyzerError, Result};
pub use utils::{init_logger, Logger, Timer};

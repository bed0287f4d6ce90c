//! Builder for configuring how stock data is loaded

use std::path::PathBuf;

use crate::api::analyzer::StockAnalyzer;
use crate::error::Result;
use crate::models::DEFAULT_MAX_RECORDS;
use crate::services::CSVDataService;

/// Builder for a [`StockAnalyzer`] backed by a CSV file.
///
/// # Example
/// ```no_run
/// use stock_analyzer::api::AnalyzerBuilder;
///
/// let analyzer = AnalyzerBuilder::new()
///     .with_path("stock_data.csv")
///     .with_capacity(500)
///     .build()?;
/// println!("{} records", analyzer.len());
/// # Ok::<(), stock_analyzer::AnalyzerError>(())
/// ```
#[derive(Debug, Clone)]
pub struct AnalyzerBuilder {
    path: PathBuf,
    capacity: usize,
}

impl AnalyzerBuilder {
    pub fn new() -> Self {
        Self {
            path: PathBuf::from("stock_data.csv"),
            capacity: DEFAULT_MAX_RECORDS,
        }
    }

    /// Set the CSV file to load
    pub fn with_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.path = path.into();
        self
    }

    /// Set the maximum number of records to keep
    pub fn with_capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }

    /// Load the file and build the analyzer
    pub fn build(self) -> Result<StockAnalyzer> {
        let data = CSVDataService::new(self.capacity).load(&self.path)?;
        Ok(StockAnalyzer::from_loaded(data))
    }
}

impl Default for AnalyzerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

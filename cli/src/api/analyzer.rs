//! High-level stock analyzer for easy library usage

use std::path::Path;

use crate::error::Result;
use crate::models::{LoadReport, LoadedData, MovingAveragePoint, StockRecord};
use crate::services::CSVDataService;
use crate::utils::{self, Logger, Timer};

/// Owns one loaded record sequence and answers queries against it.
///
/// The records are fixed once the analyzer is built; every query
/// borrows them read-only, so repeated calls return identical results.
#[derive(Debug, Clone)]
pub struct StockAnalyzer {
    records: Vec<StockRecord>,
    report: LoadReport,
    logger: Logger,
}

impl StockAnalyzer {
    /// Load up to `capacity` records from a CSV file.
    pub fn load(path: impl AsRef<Path>, capacity: usize) -> Result<Self> {
        let data = CSVDataService::new(capacity).load(path)?;
        Ok(Self::from_loaded(data))
    }

    pub fn from_loaded(data: LoadedData) -> Self {
        Self {
            records: data.records,
            report: data.report,
            logger: Logger::new("ANALYZER"),
        }
    }

    /// Wrap records that are already in memory.
    pub fn from_records(records: Vec<StockRecord>) -> Self {
        let report = LoadReport {
            rows_read: records.len(),
            ..LoadReport::default()
        };
        Self::from_loaded(LoadedData { records, report })
    }

    pub fn records(&self) -> &[StockRecord] {
        &self.records
    }

    pub fn report(&self) -> &LoadReport {
        &self.report
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// One formatted row per record, in load order.
    pub fn list(&self) -> Vec<String> {
        utils::list_rows(&self.records)
    }

    pub fn moving_average(&self, window: usize) -> Result<Vec<MovingAveragePoint>> {
        let timer = Timer::start(&format!("moving average (window {})", window));
        let series = utils::moving_average(&self.records, window).inspect_err(|e| {
            self.logger.warn(&e.to_string());
        })?;
        self.logger.debug(&format!(
            "Moving average window {} produced {} points",
            window,
            series.len()
        ));
        timer.log_elapsed("ANALYZER");
        Ok(series)
    }

    pub fn highest_high(&self) -> Result<&StockRecord> {
        utils::highest_high(&self.records)
    }

    pub fn lowest_low(&self) -> Result<&StockRecord> {
        utils::lowest_low(&self.records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::AnalyzerError;

    fn sample() -> StockAnalyzer {
        StockAnalyzer::from_records(vec![
            StockRecord::new("2024-01-01", 10.0, 12.0, 9.0, 11.0, 100),
            StockRecord::new("2024-01-02", 11.0, 13.0, 10.0, 12.0, 150),
            StockRecord::new("2024-01-03", 12.0, 13.0, 8.0, 10.0, 90),
        ])
    }

    #[test]
    fn test_queries_are_repeatable() {
        let analyzer = sample();
        assert_eq!(analyzer.list(), analyzer.list());
        assert_eq!(
            analyzer.moving_average(2).unwrap(),
            analyzer.moving_average(2).unwrap()
        );
        assert_eq!(analyzer.highest_high().unwrap(), analyzer.highest_high().unwrap());
        assert_eq!(analyzer.lowest_low().unwrap(), analyzer.lowest_low().unwrap());
        assert_eq!(analyzer.len(), 3);
    }

    #[test]
    fn test_extremes_through_facade() {
        let analyzer = sample();
        assert_eq!(analyzer.highest_high().unwrap().date, "2024-01-02");
        assert_eq!(analyzer.lowest_low().unwrap().date, "2024-01-03");
    }

    #[test]
    fn test_empty_analyzer() {
        let analyzer = StockAnalyzer::from_records(Vec::new());
        assert!(analyzer.is_empty());
        assert!(analyzer.list().is_empty());
        assert!(matches!(analyzer.highest_high(), Err(AnalyzerError::EmptyInput)));
        assert!(matches!(
            analyzer.moving_average(1),
            Err(AnalyzerError::InvalidWindow { .. })
        ));
    }
}

use serde::{Deserialize, Serialize};
use std::fmt;

/// Default upper bound on the number of records kept from one file.
pub const DEFAULT_MAX_RECORDS: usize = 1000;

/// One trading day of price data.
///
/// Fields are never cross-checked against each other: a row with
/// `high < low` is stored exactly as read.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StockRecord {
    pub date: String, // opaque label, usually YYYY-MM-DD
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub volume: i64,
}

impl StockRecord {
    pub fn new(
        date: impl Into<String>,
        open: f64,
        high: f64,
        low: f64,
        close: f64,
        volume: i64,
    ) -> Self {
        Self {
            date: date.into(),
            open,
            high,
            low,
            close,
            volume,
        }
    }
}

impl fmt::Display for StockRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}\t{:.2}\t{:.2}\t{:.2}\t{:.2}\t{}",
            self.date, self.open, self.high, self.low, self.close, self.volume
        )
    }
}

/// One point of a moving-average series, dated at the last bar of its window.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MovingAveragePoint {
    pub date: String,
    pub value: f64,
}

impl fmt::Display for MovingAveragePoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {:.2}", self.date, self.value)
    }
}

/// How a single CSV row was turned into a record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RowOutcome {
    /// Every field was present and parsed.
    Parsed,
    /// The named fields were absent or unparsable and were set to zero
    /// (or to an empty date).
    Defaulted { missing: Vec<&'static str> },
}

impl RowOutcome {
    pub fn is_defaulted(&self) -> bool {
        matches!(self, RowOutcome::Defaulted { .. })
    }
}

/// Result of parsing one data row.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedRow {
    pub line: u64,
    pub record: StockRecord,
    pub outcome: RowOutcome,
}

/// Summary of a load: how many rows were taken and which needed defaults.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LoadReport {
    pub rows_read: usize,
    pub defaulted: Vec<(u64, RowOutcome)>,
    /// True when data rows remained after the capacity was reached.
    pub truncated: bool,
}

impl LoadReport {
    pub fn defaulted_count(&self) -> usize {
        self.defaulted.len()
    }

    /// Per-row issues expressed as [`crate::AnalyzerError::MalformedRow`] values.
    pub fn issues(&self) -> impl Iterator<Item = crate::AnalyzerError> + '_ {
        self.defaulted.iter().filter_map(|(line, outcome)| match outcome {
            RowOutcome::Defaulted { missing } => Some(crate::AnalyzerError::MalformedRow {
                line: *line,
                reason: format!("defaulted fields: {}", missing.join(", ")),
            }),
            RowOutcome::Parsed => None,
        })
    }
}

/// Records loaded from one source, in file order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LoadedData {
    pub records: Vec<StockRecord>,
    pub report: LoadReport,
}

impl LoadedData {
    pub fn count(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

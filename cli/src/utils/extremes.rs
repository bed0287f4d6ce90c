use crate::{
    error::{AnalyzerError, Result},
    models::StockRecord,
};

/// Record with the greatest `high`. On ties the earliest record wins.
pub fn highest_high(records: &[StockRecord]) -> Result<&StockRecord> {
    scan_extreme(records, |candidate, best| candidate.high > best.high)
}

/// Record with the smallest `low`. On ties the earliest record wins.
pub fn lowest_low(records: &[StockRecord]) -> Result<&StockRecord> {
    scan_extreme(records, |candidate, best| candidate.low < best.low)
}

// `replaces` must be strict so later equal values never displace the current best.
fn scan_extreme<F>(records: &[StockRecord], replaces: F) -> Result<&StockRecord>
where
    F: Fn(&StockRecord, &StockRecord) -> bool,
{
    records
        .iter()
        .reduce(|best, candidate| if replaces(candidate, best) { candidate } else { best })
        .ok_or(AnalyzerError::EmptyInput)
}

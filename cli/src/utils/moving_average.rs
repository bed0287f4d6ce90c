use crate::{
    error::{AnalyzerError, Result},
    models::{MovingAveragePoint, StockRecord},
};

/// Trailing simple moving average of closing prices.
///
/// Each point averages `close` over `records[i..i + window]` and carries the
/// date of the window's last record. The series has `len - window + 1`
/// points in input order. A window outside `1..=len` is rejected with
/// [`AnalyzerError::InvalidWindow`].
pub fn moving_average(records: &[StockRecord], window: usize) -> Result<Vec<MovingAveragePoint>> {
    if window == 0 || window > records.len() {
        return Err(AnalyzerError::InvalidWindow {
            window,
            len: records.len(),
        });
    }

    let divisor = window as f64;
    let series = records
        .windows(window)
        .map(|slice| {
            let sum: f64 = slice.iter().map(|r| r.close).sum();
            MovingAveragePoint {
                // windows() never yields an empty slice
                date: slice[window - 1].date.clone(),
                value: sum / divisor,
            }
        })
        .collect();

    Ok(series)
}

use crate::models::{MovingAveragePoint, StockRecord};
use std::io::{self, Write};

pub const TABLE_HEADER: &str = "Date\t\tOpen\tHigh\tLow\tClose\tVolume";
pub const TABLE_SEPARATOR: &str = "---------------------------------------------------------";

/// Tab-separated row: date, four prices to two decimals, volume.
pub fn format_record_row(record: &StockRecord) -> String {
    record.to_string()
}

/// One row per record, in sequence order.
pub fn list_rows(records: &[StockRecord]) -> Vec<String> {
    records.iter().map(format_record_row).collect()
}

pub fn format_moving_average(point: &MovingAveragePoint) -> String {
    point.to_string()
}

/// Write the header, a separator and every record row to `out`.
pub fn write_table<W: Write>(out: &mut W, records: &[StockRecord]) -> io::Result<()> {
    writeln!(out, "{}", TABLE_HEADER)?;
    writeln!(out, "{}", TABLE_SEPARATOR)?;
    for row in list_rows(records) {
        writeln!(out, "{}", row)?;
    }
    Ok(())
}

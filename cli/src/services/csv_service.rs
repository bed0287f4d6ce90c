use crate::{
    error::{AnalyzerError, Result},
    models::{LoadReport, LoadedData, ParsedRow, RowOutcome, StockRecord, DEFAULT_MAX_RECORDS},
    utils::{Logger, Timer},
};
use csv::{ByteRecord, ReaderBuilder};
use std::{
    fs::File,
    io::{BufRead, BufReader, Read},
    path::Path,
    str::FromStr,
};

/// Column order of a data row.
pub const FIELD_NAMES: [&str; 6] = ["date", "open", "high", "low", "close", "volume"];

/// Loads daily price bars from comma-separated text.
///
/// The first line is always consumed as a header and never inspected.
/// Rows are read positionally as `date,open,high,low,close,volume`;
/// quoting is not recognized, so the date must not contain a comma.
pub struct CSVDataService {
    capacity: usize,
    logger: Logger,
}

impl CSVDataService {
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            logger: Logger::new("CSV_LOADER"),
        }
    }

    /// Load records from a file on disk.
    ///
    /// A file that cannot be opened yields [`AnalyzerError::SourceUnavailable`].
    /// The handle is closed when this call returns, on every path.
    pub fn load(&self, path: impl AsRef<Path>) -> Result<LoadedData> {
        let path = path.as_ref();
        let timer = Timer::start(&format!("load {}", path.display()));

        let file = File::open(path).map_err(|source| {
            self.logger
                .error(&format!("Error opening file {}: {}", path.display(), source));
            AnalyzerError::SourceUnavailable {
                path: path.to_path_buf(),
                source,
            }
        })?;

        let data = self.load_from_reader(file)?;
        timer.log_elapsed("CSV_LOADER");
        Ok(data)
    }

    /// Load records from any reader. Lines past the capacity are skipped.
    pub fn load_from_reader<R: Read>(&self, reader: R) -> Result<LoadedData> {
        let mut source = BufReader::new(reader);

        // The first physical line is the header, even when it is blank.
        let mut header = Vec::new();
        let header_lines = match source.read_until(b'\n', &mut header).map_err(csv::Error::from)? {
            0 => 0,
            _ => 1,
        };

        let mut reader = ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .quoting(false)
            .from_reader(source);

        let mut records = Vec::new();
        let mut report = LoadReport::default();

        for result in reader.byte_records() {
            let row = result?;
            if records.len() >= self.capacity {
                report.truncated = true;
                break;
            }

            let line = row.position().map(|p| p.line()).unwrap_or_default() + header_lines;
            let parsed = parse_row(line, &row);
            if parsed.outcome.is_defaulted() {
                self.logger
                    .debug_with_data(&format!("Row at line {} defaulted", line), &parsed.outcome);
                report.defaulted.push((line, parsed.outcome));
            }
            records.push(parsed.record);
        }

        report.rows_read = records.len();

        if report.truncated {
            self.logger.warn(&format!(
                "Capacity of {} records reached, remaining rows ignored",
                self.capacity
            ));
        }
        if !report.defaulted.is_empty() {
            self.logger.warn(&format!(
                "{} rows had missing or unparsable fields set to zero",
                report.defaulted.len()
            ));
        }
        self.logger
            .info(&format!("Loaded {} stock records", report.rows_read));

        Ok(LoadedData { records, report })
    }

    /// Parse CSV text already held in memory.
    pub fn parse_csv_content(&self, content: &str) -> Result<LoadedData> {
        self.load_from_reader(content.as_bytes())
    }
}

impl Default for CSVDataService {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_RECORDS)
    }
}

/// Load up to `capacity` records from the file at `path`.
pub fn load(path: impl AsRef<Path>, capacity: usize) -> Result<LoadedData> {
    CSVDataService::new(capacity).load(path)
}

/// Turn one CSV row into a record, field by field.
///
/// Absent or unparsable fields are zeroed independently of each other
/// and listed in the returned outcome. Extra trailing fields are ignored.
pub fn parse_row(line: u64, row: &ByteRecord) -> ParsedRow {
    let mut missing = Vec::new();

    let date = match row.get(0).filter(|raw| !raw.is_empty()) {
        Some(raw) => String::from_utf8_lossy(raw).into_owned(),
        None => {
            missing.push(FIELD_NAMES[0]);
            String::new()
        }
    };

    let record = StockRecord {
        date,
        open: parse_field(row, 1, &mut missing),
        high: parse_field(row, 2, &mut missing),
        low: parse_field(row, 3, &mut missing),
        close: parse_field(row, 4, &mut missing),
        volume: parse_field(row, 5, &mut missing),
    };

    let outcome = if missing.is_empty() {
        RowOutcome::Parsed
    } else {
        RowOutcome::Defaulted { missing }
    };

    ParsedRow {
        line,
        record,
        outcome,
    }
}

fn parse_field<T>(row: &ByteRecord, idx: usize, missing: &mut Vec<&'static str>) -> T
where
    T: FromStr + Default,
{
    let value = row
        .get(idx)
        .and_then(|raw| std::str::from_utf8(raw).ok())
        .and_then(|text| text.trim().parse::<T>().ok());

    value.unwrap_or_else(|| {
        missing.push(FIELD_NAMES[idx]);
        T::default()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(fields: &[&str]) -> ByteRecord {
        ByteRecord::from(fields.to_vec())
    }

    #[test]
    fn test_parse_full_row() {
        let parsed = parse_row(2, &row(&["2024-01-01", "10", "12", "9", "11", "100"]));
        assert_eq!(parsed.outcome, RowOutcome::Parsed);
        assert_eq!(
            parsed.record,
            StockRecord::new("2024-01-01", 10.0, 12.0, 9.0, 11.0, 100)
        );
    }

    #[test]
    fn test_parse_short_row_defaults_missing_fields() {
        let parsed = parse_row(5, &row(&["2024-01-03", "10.5", "12"]));
        assert_eq!(parsed.record.date, "2024-01-03");
        assert_eq!(parsed.record.high, 12.0);
        assert_eq!(parsed.record.low, 0.0);
        assert_eq!(parsed.record.volume, 0);
        assert_eq!(
            parsed.outcome,
            RowOutcome::Defaulted {
                missing: vec!["low", "close", "volume"]
            }
        );
    }

    #[test]
    fn test_parse_garbage_field_only_defaults_that_field() {
        let parsed = parse_row(2, &row(&["d", "1", "abc", "3", "4", "5"]));
        assert_eq!(parsed.record.high, 0.0);
        assert_eq!(parsed.record.low, 3.0);
        assert_eq!(parsed.record.volume, 5);
        assert_eq!(
            parsed.outcome,
            RowOutcome::Defaulted {
                missing: vec!["high"]
            }
        );
    }

    #[test]
    fn test_parse_trims_numbers_and_ignores_extra_fields() {
        let parsed = parse_row(2, &row(&["d", " 1.5", "2 ", "1", "2", " 7 ", "extra"]));
        assert_eq!(parsed.outcome, RowOutcome::Parsed);
        assert_eq!(parsed.record.open, 1.5);
        assert_eq!(parsed.record.volume, 7);
    }

    #[test]
    fn test_header_is_skipped_unconditionally() {
        let service = CSVDataService::default();
        let data = service
            .parse_csv_content("2023-12-31,1,1,1,1,1\n2024-01-01,10,12,9,11,100\n")
            .unwrap();
        assert_eq!(data.count(), 1);
        assert_eq!(data.records[0].date, "2024-01-01");
    }

    #[test]
    fn test_leading_blank_line_is_the_header() {
        let content = "\nDate,Open,High,Low,Close,Volume\n2024-01-01,10,12,9,11,100\n";
        let data = CSVDataService::default().parse_csv_content(content).unwrap();

        assert_eq!(data.count(), 2);
        assert_eq!(data.records[0].date, "Date");
        assert_eq!(data.records[1].date, "2024-01-01");
        assert_eq!(data.report.defaulted.len(), 1);
        assert_eq!(data.report.defaulted[0].0, 2);
    }

    #[test]
    fn test_header_without_trailing_newline() {
        let data = CSVDataService::default()
            .parse_csv_content("Date,Open,High,Low,Close,Volume")
            .unwrap();
        assert!(data.is_empty());
    }

    #[test]
    fn test_header_only_yields_no_records() {
        let data = CSVDataService::default()
            .parse_csv_content("Date,Open,High,Low,Close,Volume\n")
            .unwrap();
        assert!(data.is_empty());
        assert!(!data.report.truncated);
    }

    #[test]
    fn test_capacity_truncates() {
        let content = "h\na,1,1,1,1,1\nb,1,1,1,1,1\nc,1,1,1,1,1\n";
        let data = CSVDataService::new(2).parse_csv_content(content).unwrap();
        assert_eq!(data.count(), 2);
        assert_eq!(data.records[1].date, "b");
        assert!(data.report.truncated);
    }

    #[test]
    fn test_exact_capacity_is_not_truncated() {
        let content = "h\na,1,1,1,1,1\nb,1,1,1,1,1\n";
        let data = CSVDataService::new(2).parse_csv_content(content).unwrap();
        assert_eq!(data.count(), 2);
        assert!(!data.report.truncated);
    }

    #[test]
    fn test_blank_lines_and_crlf() {
        let content = "h\r\na,1,2,0.5,1.5,10\r\n\r\nb,1,2,0.5,1.5,20\r\n";
        let data = CSVDataService::default().parse_csv_content(content).unwrap();
        assert_eq!(data.count(), 2);
        assert_eq!(data.records[1].volume, 20);
        assert_eq!(data.report.defaulted_count(), 0);
    }

    #[test]
    fn test_malformed_rows_are_reported_with_line_numbers() {
        let content = "h\na,1,2,3,4,5\nb,1\n";
        let data = CSVDataService::default().parse_csv_content(content).unwrap();
        assert_eq!(data.count(), 2);
        assert_eq!(data.report.defaulted.len(), 1);
        assert_eq!(data.report.defaulted[0].0, 3);
    }

    #[test]
    fn test_missing_file_is_source_unavailable() {
        let err = load("/definitely/not/here/stock_data.csv", 10).unwrap_err();
        assert!(matches!(err, AnalyzerError::SourceUnavailable { .. }));
    }
}

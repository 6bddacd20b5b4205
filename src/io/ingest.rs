//! CSV ingest for daily index prices.
//!
//! Turns an exported price table into a clean `PriceSeries`:
//! - **Strict schema**: `Date` and `Close` must exist (header names are trimmed
//!   and matched case-insensitively)
//! - **Strict rows**: any unparseable date or close aborts the load with its line
//! - **Ordering**: rows may arrive newest-first; the series is sorted ascending
//!
//! Extra columns (`Open`, `High`, `Shares Traded`, ...) are ignored.

use std::collections::HashMap;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use chrono::{NaiveDate, NaiveDateTime};
use csv::StringRecord;

use crate::domain::{PricePoint, PriceSeries};
use crate::error::{AppError, ErrorKind, Stage};

const DATE_COLUMN: &str = "date";
const CLOSE_COLUMN: &str = "close";

/// Load a price series from a delimited file on disk.
pub fn load_price_series(path: &Path) -> Result<PriceSeries, AppError> {
    let file = File::open(path).map_err(|e| {
        let kind = if e.kind() == std::io::ErrorKind::NotFound {
            ErrorKind::FileNotFound
        } else {
            ErrorKind::Io
        };
        AppError::new(kind, Stage::Load, format!("Failed to open '{}': {e}", path.display()))
    })?;

    let series = read_price_series(file)?;
    if let (Some(first), Some(last)) = (series.first(), series.last()) {
        log::info!(
            "loaded {} closes from {} ({} to {})",
            series.len(),
            path.display(),
            first.date,
            last.date
        );
    }
    Ok(series)
}

/// Read a price series from any CSV source.
pub fn read_price_series<R: Read>(source: R) -> Result<PriceSeries, AppError> {
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(source);

    let headers = reader
        .headers()
        .map_err(|e| parse_error(format!("Failed to read CSV headers: {e}")))?
        .clone();

    let header_map = build_header_map(&headers);
    let date_idx = required_column(&header_map, DATE_COLUMN, "Date")?;
    let close_idx = required_column(&header_map, CLOSE_COLUMN, "Close")?;

    let mut points = Vec::new();
    let mut seen: HashMap<NaiveDate, usize> = HashMap::new();
    for (idx, result) in reader.records().enumerate() {
        // +2: records() starts after the header, and lines are 1-based.
        let line = idx + 2;
        let record = result.map_err(|e| parse_error(format!("line {line}: CSV parse error: {e}")))?;
        let point = parse_row(&record, date_idx, close_idx)
            .map_err(|msg| parse_error(format!("line {line}: {msg}")))?;
        if let Some(first) = seen.insert(point.date, line) {
            return Err(parse_error(format!(
                "line {line}: duplicate date {} (first seen on line {first})",
                point.date
            )));
        }
        points.push(point);
    }

    if points.is_empty() {
        return Err(AppError::new(
            ErrorKind::InsufficientData,
            Stage::Load,
            "No price rows found.",
        ));
    }

    PriceSeries::new(points)
}

fn build_header_map(headers: &StringRecord) -> HashMap<String, usize> {
    headers
        .iter()
        .enumerate()
        .map(|(idx, name)| (normalize_header_name(name), idx))
        .collect()
}

fn normalize_header_name(name: &str) -> String {
    // Spreadsheet exports often carry a BOM on the first header and padding
    // around every header (e.g. "Date " in NSE downloads).
    let name = name.trim_start_matches('\u{feff}').trim();
    name.to_ascii_lowercase()
}

fn required_column(
    header_map: &HashMap<String, usize>,
    key: &str,
    display: &str,
) -> Result<usize, AppError> {
    header_map
        .get(key)
        .copied()
        .ok_or_else(|| parse_error(format!("Missing required column: `{display}`")))
}

fn parse_row(record: &StringRecord, date_idx: usize, close_idx: usize) -> Result<PricePoint, String> {
    let date_raw = get_required(record, date_idx, "Date")?;
    let close_raw = get_required(record, close_idx, "Close")?;

    let date = parse_date(date_raw)?;
    let close = close_raw
        .parse::<f64>()
        .map_err(|_| format!("Invalid close '{close_raw}': not a number."))?;
    if !close.is_finite() {
        return Err(format!("Invalid close '{close_raw}': not finite."));
    }

    Ok(PricePoint { date, close })
}

fn get_required<'a>(record: &'a StringRecord, idx: usize, name: &str) -> Result<&'a str, String> {
    record
        .get(idx)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .ok_or_else(|| format!("Missing required value: `{name}`"))
}

fn parse_date(s: &str) -> Result<NaiveDate, String> {
    // ISO dates are preferred, but index exports commonly use `25-Nov-2024`
    // (NSE) or day-first numeric forms. The format list is fixed so parsing
    // stays deterministic.
    const DATE_FMTS: [&str; 6] = ["%Y-%m-%d", "%d-%b-%Y", "%d %b %Y", "%d/%m/%Y", "%d-%m-%Y", "%Y/%m/%d"];
    const DATETIME_FMTS: [&str; 2] = ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S"];

    for fmt in DATE_FMTS {
        if let Ok(d) = NaiveDate::parse_from_str(s, fmt) {
            return Ok(d);
        }
    }
    for fmt in DATETIME_FMTS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, fmt) {
            return Ok(dt.date());
        }
    }
    Err(format!(
        "Invalid date '{s}'. Expected one of: YYYY-MM-DD, DD-Mon-YYYY, DD/MM/YYYY, DD-MM-YYYY, YYYY/MM/DD."
    ))
}

fn parse_error(message: String) -> AppError {
    AppError::new(ErrorKind::ParseError, Stage::Load, message)
}

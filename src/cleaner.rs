use std::collections::BTreeMap;

use chrono::NaiveDate;

use crate::error::FetchError;
use crate::table::RawTable;

// Site date format, e.g. "Jan 31, 2024". Number parsing below assumes
// comma thousands separators, dot decimals and a trailing "%" on the
// change column; if the site ever changes locale these three helpers
// are the place to revisit.
const DATE_FORMAT: &str = "%b %d, %Y";

/// One cleaned observation. Price is the mandatory measurement; the
/// other numeric columns survive as missing values when the site omits
/// or garbles them.
#[derive(Debug, Clone, PartialEq)]
pub struct HistoryRow {
    pub date: NaiveDate,
    pub price: f64,
    pub open: Option<f64>,
    pub high: Option<f64>,
    pub low: Option<f64>,
    /// Fractional change ratio, e.g. "+1.11%" becomes 0.0111.
    pub change: Option<f64>,
}

/// Rows sorted strictly ascending by date, dates unique. Downstream
/// writers rely on that ordering.
#[derive(Debug, Clone, Default)]
pub struct CleanedDataset {
    rows: Vec<HistoryRow>,
}

impl CleanedDataset {
    pub(crate) fn from_sorted_rows(rows: Vec<HistoryRow>) -> Self {
        Self { rows }
    }

    pub fn rows(&self) -> &[HistoryRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Normalize a raw table into a typed, deduplicated, date-sorted
/// dataset. Row-level damage is tolerated per column rules; structural
/// damage (missing Date/Price columns, no parseable dates at all) is
/// an error. An empty result is valid.
pub fn clean(raw: &RawTable) -> Result<CleanedDataset, FetchError> {
    let date_idx = raw.column_index("Date").ok_or(FetchError::Schema {
        column: "Date".to_string(),
    })?;
    let price_idx = raw.column_index("Price").ok_or(FetchError::Schema {
        column: "Price".to_string(),
    })?;
    let open_idx = raw.column_index("Open");
    let high_idx = raw.column_index("High");
    let low_idx = raw.column_index("Low");
    let change_idx = raw.column_index("Change %");

    // The source lists newest-first; inserting in listed order means a
    // later duplicate overwrites an earlier one, so the last-listed row
    // per date wins. BTreeMap iteration then yields ascending dates.
    let mut by_date: BTreeMap<NaiveDate, HistoryRow> = BTreeMap::new();
    let mut any_date_parsed = false;

    for row in &raw.rows {
        let date = match row
            .get(date_idx)
            .and_then(|s| NaiveDate::parse_from_str(s, DATE_FORMAT).ok())
        {
            Some(date) => date,
            None => continue,
        };
        any_date_parsed = true;

        // Price is mandatory; a row without it carries no measurement.
        let price = match row.get(price_idx).and_then(|s| parse_number(s)) {
            Some(price) => price,
            None => continue,
        };

        let field = |idx: Option<usize>| idx.and_then(|i| row.get(i)).and_then(|s| parse_number(s));

        by_date.insert(
            date,
            HistoryRow {
                date,
                price,
                open: field(open_idx),
                high: field(high_idx),
                low: field(low_idx),
                change: change_idx
                    .and_then(|i| row.get(i))
                    .and_then(|s| parse_change(s)),
            },
        );
    }

    if !raw.rows.is_empty() && !any_date_parsed {
        return Err(FetchError::parse("no row dates could be parsed"));
    }

    Ok(CleanedDataset::from_sorted_rows(
        by_date.into_values().collect(),
    ))
}

/// Numeric cell with thousands separators stripped; anything empty or
/// non-numeric is a missing value.
fn parse_number(s: &str) -> Option<f64> {
    let stripped = s.trim().replace(',', "");
    if stripped.is_empty() {
        return None;
    }
    stripped.parse::<f64>().ok()
}

/// "Change %" cell to a fractional ratio: "+1.11%" -> 0.0111.
fn parse_change(s: &str) -> Option<f64> {
    let trimmed = s.trim().trim_end_matches('%').trim_start_matches('+');
    parse_number(trimmed).map(|pct| pct / 100.0)
}

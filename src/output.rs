use std::path::Path;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use csv::{Reader, Writer};

use crate::cleaner::{CleanedDataset, HistoryRow};

const CSV_DATE_FORMAT: &str = "%Y-%m-%d";

/// Write the dataset to `path`, dispatching on the file extension.
/// Only `.csv` is supported.
pub fn save(dataset: &CleanedDataset, path: &Path) -> Result<()> {
    match path.extension().and_then(|e| e.to_str()) {
        Some("csv") => write_csv(dataset, path),
        Some(other) => anyhow::bail!("unsupported output extension '.{}', expected .csv", other),
        None => anyhow::bail!("output path '{}' has no extension", path.display()),
    }
}

pub fn write_csv(dataset: &CleanedDataset, path: &Path) -> Result<()> {
    let mut writer = Writer::from_path(path)
        .with_context(|| format!("failed to create {}", path.display()))?;

    writer.write_record(["Date", "Price", "Open", "High", "Low", "Change %"])?;

    for row in dataset.rows() {
        writer.write_record(&[
            row.date.format(CSV_DATE_FORMAT).to_string(),
            row.price.to_string(),
            opt_field(row.open),
            opt_field(row.high),
            opt_field(row.low),
            opt_field(row.change),
        ])?;
    }

    writer.flush()?;
    Ok(())
}

/// Read a dataset previously written by [`write_csv`]. Row order is
/// preserved as written.
pub fn read_csv(path: &Path) -> Result<CleanedDataset> {
    let mut reader =
        Reader::from_path(path).with_context(|| format!("failed to open {}", path.display()))?;

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record?;
        let date = NaiveDate::parse_from_str(&record[0], CSV_DATE_FORMAT)
            .with_context(|| format!("bad date '{}' in {}", &record[0], path.display()))?;
        let price: f64 = record[1]
            .parse()
            .with_context(|| format!("bad price '{}' in {}", &record[1], path.display()))?;

        rows.push(HistoryRow {
            date,
            price,
            open: parse_opt(record.get(2)),
            high: parse_opt(record.get(3)),
            low: parse_opt(record.get(4)),
            change: parse_opt(record.get(5)),
        });
    }

    Ok(CleanedDataset::from_sorted_rows(rows))
}

fn opt_field(value: Option<f64>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}

fn parse_opt(field: Option<&str>) -> Option<f64> {
    field.and_then(|s| if s.is_empty() { None } else { s.parse().ok() })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> CleanedDataset {
        CleanedDataset::from_sorted_rows(vec![
            HistoryRow {
                date: NaiveDate::from_ymd_opt(2024, 1, 31).unwrap(),
                price: 900.0,
                open: Some(880.0),
                high: Some(910.0),
                low: Some(870.0),
                change: Some(0.0111),
            },
            HistoryRow {
                date: NaiveDate::from_ymd_opt(2024, 2, 29).unwrap(),
                price: 910.0,
                open: None,
                high: None,
                low: None,
                change: None,
            },
        ])
    }

    #[test]
    fn csv_round_trip_preserves_rows_and_order() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("history.csv");

        write_csv(&sample(), &path).expect("write");
        let restored = read_csv(&path).expect("read");

        assert_eq!(restored.len(), 2);
        assert_eq!(restored.rows()[0].date, sample().rows()[0].date);
        assert!(restored.rows()[0].date < restored.rows()[1].date);
        assert_eq!(restored.rows()[1].open, None);
    }

    #[test]
    fn save_rejects_unknown_extension() {
        let dir = tempfile::tempdir().expect("tempdir");
        let err = save(&sample(), &dir.path().join("history.parquet")).expect_err("must fail");
        assert!(err.to_string().contains("unsupported output extension"));
    }
}

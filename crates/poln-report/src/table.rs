//! Tabular output: one CSV row per simulated month.

use crate::error::Result;
use poln_economics::MonthlyRecord;
use std::io;
use std::path::Path;

/// Column names in file order
pub fn columns() -> &'static [&'static str] {
    &[
        "month",
        "period",
        "regime",
        "market_sentiment_index",
        "circulating_supply",
        "total_supply",
        "token_price",
        "net_token_demand",
        "tokens_staked",
        "tokens_burnt",
        "total_burnt_tokens",
        "tokens_fee_distributed",
        "tokens_fee_to_dao",
        "dao_treasury",
        "tokens_vested",
        "rewards_pool",
        "rewards_distributed",
        "treasury_spent",
        "new_missions",
        "completed_missions",
        "successful_missions",
        "ongoing_missions",
    ]
}

/// Serialize records with a header row to any writer
pub fn write_records<W: io::Write>(writer: W, records: &[MonthlyRecord]) -> Result<()> {
    let mut csv = csv::Writer::from_writer(writer);
    if records.is_empty() {
        csv.write_record(columns())?;
    }
    for record in records {
        csv.serialize(record)?;
    }
    csv.flush()?;
    Ok(())
}

/// Write records to a CSV file
pub fn write_csv(path: &Path, records: &[MonthlyRecord]) -> Result<()> {
    let file = std::fs::File::create(path)?;
    write_records(io::BufWriter::new(file), records)?;
    tracing::debug!(path = %path.display(), rows = records.len(), "csv written");
    Ok(())
}

/// Read records back from a CSV file
pub fn read_csv(path: &Path) -> Result<Vec<MonthlyRecord>> {
    let mut reader = csv::Reader::from_path(path)?;
    let records = reader
        .deserialize::<MonthlyRecord>()
        .collect::<std::result::Result<Vec<_>, _>>()?;
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use poln_economics::{simulate, SimulationConfig};

    #[test]
    fn test_header_matches_columns() {
        let run = simulate(&SimulationConfig::default(), 1).unwrap();
        let mut buf = Vec::new();
        write_records(&mut buf, &run.records).unwrap();

        let text = String::from_utf8(buf).unwrap();
        let mut lines = text.lines();
        assert_eq!(lines.next().unwrap(), columns().join(","));
        assert_eq!(lines.count(), 12);
    }

    #[test]
    fn test_empty_table_has_header() {
        let mut buf = Vec::new();
        write_records(&mut buf, &[]).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert_eq!(text.trim_end(), columns().join(","));
    }

    #[test]
    fn test_regime_written_as_name() {
        let run = simulate(&SimulationConfig::default(), 1).unwrap();
        let mut buf = Vec::new();
        write_records(&mut buf, &run.records[..1]).unwrap();
        let text = String::from_utf8(buf).unwrap();
        let row = text.lines().nth(1).unwrap();
        let regime = row.split(',').nth(2).unwrap();
        assert!(["bull", "normal", "bear"].contains(&regime));
        assert!(row.starts_with("1,2025-01,"));
    }

    #[test]
    fn test_read_missing_file_is_csv_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = read_csv(&dir.path().join("absent.csv")).unwrap_err();
        assert!(matches!(err, crate::error::ReportError::Csv(_)));
    }
}

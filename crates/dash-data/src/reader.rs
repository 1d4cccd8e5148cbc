//! CSV ingestion for Media Dash.
//!
//! Reads the usage dataset from a flat file into typed [`UsageRecord`]s.
//! A missing file or a malformed header aborts the load; malformed data
//! rows are quarantined with a warning rather than silently coerced.

use std::path::Path;

use dash_core::error::{DashError, Result};
use dash_core::models::UsageRecord;
use tracing::{debug, warn};

/// Column names the source file's header row must carry, in export order.
pub const EXPECTED_HEADERS: [&str; 6] = [
    "User_ID",
    "App",
    "Posts_Per_Day",
    "Likes_Per_Day",
    "Follows_Per_Day",
    "Daily_Minutes_Spent",
];

/// Load and parse the usage CSV at `path`.
///
/// * Missing file or unreadable file → [`DashError::FileRead`] (fatal).
/// * Header row missing any expected column → [`DashError::MalformedHeader`]
///   (fatal, no partial load).
/// * A data row that fails typed deserialization, or whose
///   `daily_minutes_spent` is negative or non-finite, is skipped with a
///   warning. The integer metrics are `u64`, so negative values in those
///   columns already fail deserialization.
///
/// Returns records in file order. An empty data section is a valid,
/// empty result.
pub fn load_records(path: &Path) -> Result<Vec<UsageRecord>> {
    let file = std::fs::File::open(path).map_err(|source| DashError::FileRead {
        path: path.to_path_buf(),
        source,
    })?;

    let mut reader = csv::Reader::from_reader(file);
    validate_headers(path, &mut reader)?;

    let mut records: Vec<UsageRecord> = Vec::new();
    let mut rows_read = 0u64;
    let mut rows_skipped = 0u64;

    for (index, row) in reader.deserialize::<UsageRecord>().enumerate() {
        rows_read += 1;
        // Header is line 1; data rows start at line 2.
        let line = index + 2;
        match row {
            Ok(record) => {
                if record.daily_minutes_spent < 0.0 || !record.daily_minutes_spent.is_finite() {
                    warn!(
                        "Skipping row {} of {}: invalid Daily_Minutes_Spent {}",
                        line,
                        path.display(),
                        record.daily_minutes_spent
                    );
                    rows_skipped += 1;
                    continue;
                }
                records.push(record);
            }
            Err(e) => {
                warn!("Skipping row {} of {}: {}", line, path.display(), e);
                rows_skipped += 1;
            }
        }
    }

    debug!(
        "File {}: {} rows read, {} skipped, {} loaded",
        path.display(),
        rows_read,
        rows_skipped,
        records.len()
    );

    Ok(records)
}

// ── Internal helpers ──────────────────────────────────────────────────────────

/// Require every expected column name to appear in the header row.
///
/// Column order is not significant on ingestion (serde binds by name);
/// export always writes the canonical order.
fn validate_headers(path: &Path, reader: &mut csv::Reader<std::fs::File>) -> Result<()> {
    let headers = reader.headers().map_err(DashError::Csv)?.clone();
    let found: Vec<&str> = headers.iter().collect();

    let missing = EXPECTED_HEADERS
        .iter()
        .any(|expected| !found.contains(expected));
    if missing {
        return Err(DashError::MalformedHeader {
            path: path.to_path_buf(),
            found: found.join(","),
        });
    }
    Ok(())
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use std::path::PathBuf;
    use tempfile::TempDir;

    const HEADER: &str = "User_ID,App,Posts_Per_Day,Likes_Per_Day,Follows_Per_Day,Daily_Minutes_Spent";

    fn write_csv(dir: &Path, name: &str, lines: &[&str]) -> PathBuf {
        let path = dir.join(name);
        let mut file = std::fs::File::create(&path).unwrap();
        for line in lines {
            writeln!(file, "{}", line).unwrap();
        }
        path
    }

    // ── load_records ──────────────────────────────────────────────────────

    #[test]
    fn test_load_records_basic() {
        let dir = TempDir::new().unwrap();
        let path = write_csv(
            dir.path(),
            "data.csv",
            &[HEADER, "U1,Instagram,3,40,5,120.5", "U2,Facebook,1,10,2,60"],
        );

        let records = load_records(&path).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].user_id, "U1");
        assert_eq!(records[0].app, "Instagram");
        assert_eq!(records[0].posts_per_day, 3);
        assert_eq!(records[0].likes_per_day, 40);
        assert_eq!(records[0].follows_per_day, 5);
        assert!((records[0].daily_minutes_spent - 120.5).abs() < f64::EPSILON);
    }

    #[test]
    fn test_load_records_preserves_file_order() {
        let dir = TempDir::new().unwrap();
        let path = write_csv(
            dir.path(),
            "data.csv",
            &[
                HEADER,
                "U3,Twitter,1,1,1,30",
                "U1,Twitter,1,1,1,30",
                "U2,Twitter,1,1,1,30",
            ],
        );

        let records = load_records(&path).unwrap();
        let ids: Vec<&str> = records.iter().map(|r| r.user_id.as_str()).collect();
        assert_eq!(ids, vec!["U3", "U1", "U2"]);
    }

    #[test]
    fn test_load_records_missing_file_is_fatal() {
        let err = load_records(Path::new("/tmp/does-not-exist-media-dash-test.csv")).unwrap_err();
        assert!(matches!(err, DashError::FileRead { .. }));
    }

    #[test]
    fn test_load_records_malformed_header_is_fatal() {
        let dir = TempDir::new().unwrap();
        let path = write_csv(
            dir.path(),
            "data.csv",
            &["User,Application,Posts", "U1,Instagram,3"],
        );

        let err = load_records(&path).unwrap_err();
        assert!(matches!(err, DashError::MalformedHeader { .. }));
    }

    #[test]
    fn test_load_records_header_only_is_empty() {
        let dir = TempDir::new().unwrap();
        let path = write_csv(dir.path(), "data.csv", &[HEADER]);

        let records = load_records(&path).unwrap();
        assert!(records.is_empty());
    }

    #[test]
    fn test_load_records_skips_non_numeric_row() {
        let dir = TempDir::new().unwrap();
        let path = write_csv(
            dir.path(),
            "data.csv",
            &[
                HEADER,
                "U1,Instagram,lots,40,5,120.5",
                "U2,Instagram,2,20,3,90",
            ],
        );

        let records = load_records(&path).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].user_id, "U2");
    }

    #[test]
    fn test_load_records_skips_negative_integer_metric() {
        let dir = TempDir::new().unwrap();
        // posts_per_day is u64: "-3" fails typed deserialization.
        let path = write_csv(
            dir.path(),
            "data.csv",
            &[HEADER, "U1,Instagram,-3,40,5,120.5", "U2,Instagram,2,20,3,90"],
        );

        let records = load_records(&path).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].user_id, "U2");
    }

    #[test]
    fn test_load_records_skips_negative_minutes() {
        let dir = TempDir::new().unwrap();
        let path = write_csv(
            dir.path(),
            "data.csv",
            &[HEADER, "U1,Instagram,3,40,5,-120.5", "U2,Instagram,2,20,3,90"],
        );

        let records = load_records(&path).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].user_id, "U2");
    }

    #[test]
    fn test_load_records_keeps_unknown_app_labels() {
        let dir = TempDir::new().unwrap();
        let path = write_csv(dir.path(), "data.csv", &[HEADER, "U1,MySpace,3,40,5,120.5"]);

        let records = load_records(&path).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].app, "MySpace");
    }

    #[test]
    fn test_load_records_accepts_reordered_columns() {
        let dir = TempDir::new().unwrap();
        let path = write_csv(
            dir.path(),
            "data.csv",
            &[
                "App,User_ID,Likes_Per_Day,Posts_Per_Day,Follows_Per_Day,Daily_Minutes_Spent",
                "Instagram,U1,40,3,5,120.5",
            ],
        );

        let records = load_records(&path).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].posts_per_day, 3);
        assert_eq!(records[0].likes_per_day, 40);
    }
}

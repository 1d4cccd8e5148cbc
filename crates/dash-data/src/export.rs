//! Export of filtered subsets back to the ingestion CSV format.
//!
//! The writer serializes through the same serde-renamed [`UsageRecord`]
//! the reader deserializes into, so re-ingesting an export yields an
//! equivalent record set.

use std::path::{Path, PathBuf};

use dash_core::error::{DashError, Result};
use dash_core::models::UsageRecord;
use tracing::info;

/// Serialize `subset` to CSV bytes: header row plus one row per record,
/// in the canonical column order.
pub fn to_csv_bytes(subset: &[&UsageRecord]) -> Result<Vec<u8>> {
    let mut bytes = Vec::new();
    {
        let mut writer = csv::Writer::from_writer(&mut bytes);
        for record in subset {
            writer.serialize(record)?;
        }
        writer.flush()?;
    }
    Ok(bytes)
}

/// File name for an exported subset: `{app}_user_{userId}_data.csv`.
pub fn export_file_name(app_label: &str, user_id: &str) -> String {
    format!("{}_user_{}_data.csv", app_label, user_id)
}

/// Write `subset` into `dir` under the standard export file name and
/// return the full path.
pub fn write_export(
    dir: &Path,
    app_label: &str,
    user_id: &str,
    subset: &[&UsageRecord],
) -> Result<PathBuf> {
    let path = dir.join(export_file_name(app_label, user_id));
    let bytes = to_csv_bytes(subset)?;
    std::fs::write(&path, bytes).map_err(|source| DashError::FileRead {
        path: path.clone(),
        source,
    })?;
    info!("Exported {} records to {}", subset.len(), path.display());
    Ok(path)
}

// ── Tests ─────────────────────────────────────────────────────────────────────

//! The filter engine.
//!
//! Pure, total, order-preserving restrictions over the record store.
//! An empty result is a well-formed subset, never an error; downstream
//! aggregation and charting degrade to zero/empty output.

use dash_core::models::{AppSelection, UsageRecord};

/// All records matching `selection`.
///
/// `Overall` returns the full set unfiltered; a named application returns
/// only records whose `app` column equals that label.
pub fn filter_by_app<'a>(
    records: &'a [UsageRecord],
    selection: &AppSelection,
) -> Vec<&'a UsageRecord> {
    records.iter().filter(|r| selection.matches(&r.app)).collect()
}

/// Restrict `subset` to records for a single user id.
pub fn filter_by_user<'a>(subset: &[&'a UsageRecord], user_id: &str) -> Vec<&'a UsageRecord> {
    subset
        .iter()
        .copied()
        .filter(|r| r.user_id == user_id)
        .collect()
}

// ── Tests ─────────────────────────────────────────────────────────────────────

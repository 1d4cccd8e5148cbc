//! The in-memory record store.
//!
//! Loaded once at startup and immutable afterwards; every downstream
//! component receives read-only views, so no locking discipline is needed.

use std::path::Path;

use dash_core::error::Result;
use dash_core::models::{AppSelection, UsageRecord};

use crate::reader;

/// Owned, immutably-shared handle over the full set of usage records.
#[derive(Debug, Clone)]
pub struct RecordStore {
    records: Vec<UsageRecord>,
}

impl RecordStore {
    /// Wrap an already-parsed record set.
    pub fn new(records: Vec<UsageRecord>) -> Self {
        Self { records }
    }

    /// Load the store from a CSV file. Ingestion failures are fatal; see
    /// [`reader::load_records`] for the row-quarantine policy.
    pub fn load(path: &Path) -> Result<Self> {
        Ok(Self::new(reader::load_records(path)?))
    }

    /// All records, in file order.
    pub fn records(&self) -> &[UsageRecord] {
        &self.records
    }

    /// Number of records in the store.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the store holds no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Sorted distinct `app` labels present in the data, including labels
    /// outside the known enumeration.
    pub fn distinct_apps(&self) -> Vec<String> {
        let mut apps: Vec<String> = self.records.iter().map(|r| r.app.clone()).collect();
        apps.sort();
        apps.dedup();
        apps
    }

    /// Distinct user ids within `selection`, in natural row order.
    ///
    /// Feeds the user selector, which is scoped to the chosen application.
    pub fn user_ids(&self, selection: &AppSelection) -> Vec<String> {
        let mut seen = std::collections::HashSet::new();
        self.records
            .iter()
            .filter(|r| selection.matches(&r.app))
            .filter(|r| seen.insert(r.user_id.clone()))
            .map(|r| r.user_id.clone())
            .collect()
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

//! Chart series construction.
//!
//! Turns a filtered subset into the data shape each chart kind needs.
//! Dispatch is an exhaustive `match` over [`ChartKind`], so an unknown
//! kind is unrepresentable rather than a runtime condition.

use std::collections::BTreeMap;

use dash_core::models::{ChartKind, UsageRecord};

/// Number of equal-width bins in the minutes-spent distribution.
pub const DISTRIBUTION_BINS: usize = 20;

/// Binned distribution of `daily_minutes_spent` values.
#[derive(Debug, Clone, PartialEq)]
pub struct Histogram {
    /// Smallest observed value (0.0 for an empty subset).
    pub min: f64,
    /// Largest observed value (0.0 for an empty subset).
    pub max: f64,
    /// Record count per bin; always [`DISTRIBUTION_BINS`] entries.
    pub counts: Vec<u64>,
}

impl Histogram {
    /// Width of one bin. Zero when the observed span is zero.
    pub fn bin_width(&self) -> f64 {
        (self.max - self.min) / DISTRIBUTION_BINS as f64
    }

    /// Sum of all bin counts.
    pub fn total(&self) -> u64 {
        self.counts.iter().sum()
    }

    /// Whether no records were binned.
    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }
}

/// The data consumed by the chart renderer, one variant per chart shape.
#[derive(Debug, Clone, PartialEq)]
pub enum SeriesData {
    /// `(user_id, value)` pairs in the subset's natural row order.
    Sequence(Vec<(String, f64)>),
    /// `(posts_per_day, likes_per_day)` tuples, one per record.
    Paired(Vec<(f64, f64)>),
    /// Minutes-spent distribution over equal-width bins.
    Distribution(Histogram),
}

/// One application's `(user_id, daily_minutes_spent)` series in the
/// Overall comparison view.
#[derive(Debug, Clone, PartialEq)]
pub struct AppSeries {
    /// Application label as it appears in the data.
    pub app: String,
    /// `(user_id, daily_minutes_spent)` pairs in row order.
    pub points: Vec<(String, f64)>,
}

/// Build the series for `kind` over `subset`.
///
/// Sequence kinds keep the subset's natural row order; nothing here sorts.
/// Every kind accepts an empty subset and produces well-defined empty
/// output for it.
pub fn build_chart_data(subset: &[&UsageRecord], kind: ChartKind) -> SeriesData {
    match kind {
        ChartKind::PostsPerDay => SeriesData::Sequence(
            subset
                .iter()
                .map(|r| (r.user_id.clone(), r.posts_per_day as f64))
                .collect(),
        ),
        ChartKind::LikesPerDay => SeriesData::Sequence(
            subset
                .iter()
                .map(|r| (r.user_id.clone(), r.likes_per_day as f64))
                .collect(),
        ),
        ChartKind::PostsVsLikes => SeriesData::Paired(
            subset
                .iter()
                .map(|r| (r.posts_per_day as f64, r.likes_per_day as f64))
                .collect(),
        ),
        ChartKind::MinutesDistribution => SeriesData::Distribution(build_histogram(subset)),
    }
}

/// Build the Overall comparison series: one `(user_id, minutes)` series
/// per distinct `app` label, sorted by label. Labels outside the known
/// enumeration get their own series and fall back to the default colour
/// in the presentation layer.
pub fn build_overall_series(records: &[UsageRecord]) -> Vec<AppSeries> {
    let mut by_app: BTreeMap<&str, Vec<(String, f64)>> = BTreeMap::new();
    for record in records {
        by_app
            .entry(record.app.as_str())
            .or_default()
            .push((record.user_id.clone(), record.daily_minutes_spent));
    }

    by_app
        .into_iter()
        .map(|(app, points)| AppSeries {
            app: app.to_string(),
            points,
        })
        .collect()
}

// ── Internal helpers ──────────────────────────────────────────────────────────

/// Partition minutes values into [`DISTRIBUTION_BINS`] equal-width bins
/// spanning the observed min..max range.
///
/// Every record lands in exactly one bin: values at the maximum are
/// clamped into the last bin, and a zero-width span (all values equal,
/// or a single record) puts everything into bin 0.
fn build_histogram(subset: &[&UsageRecord]) -> Histogram {
    let mut counts = vec![0u64; DISTRIBUTION_BINS];

    if subset.is_empty() {
        return Histogram {
            min: 0.0,
            max: 0.0,
            counts,
        };
    }

    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    for record in subset {
        min = min.min(record.daily_minutes_spent);
        max = max.max(record.daily_minutes_spent);
    }

    let span = max - min;
    for record in subset {
        let index = if span > 0.0 {
            let offset = (record.daily_minutes_spent - min) / span;
            ((offset * DISTRIBUTION_BINS as f64) as usize).min(DISTRIBUTION_BINS - 1)
        } else {
            0
        };
        counts[index] += 1;
    }

    Histogram { min, max, counts }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

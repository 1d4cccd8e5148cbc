//! Summary statistics over a filtered subset.

use std::collections::HashSet;

use dash_core::models::UsageRecord;

/// Aggregate statistics computed over one filtered subset.
///
/// Sums run over all rows in the subset (not deduplicated by user), which
/// matches the dataset's row-per-observation shape. The average is the
/// simple per-row mean, not a per-user-weighted one, and is `None` for an
/// empty subset, which is the defined "no data" result.
#[derive(Debug, Clone, PartialEq)]
pub struct SummaryReport {
    /// Count of distinct `user_id` values in the subset.
    pub total_users: usize,
    /// Sum of `posts_per_day` across all rows.
    pub total_posts: u64,
    /// Sum of `likes_per_day` across all rows.
    pub total_likes: u64,
    /// Sum of `follows_per_day` across all rows.
    pub total_follows: u64,
    /// Sum of `daily_minutes_spent` across all rows.
    pub total_minutes: f64,
    /// Per-row arithmetic mean of `daily_minutes_spent`; `None` when the
    /// subset is empty. Display rounding to two decimals happens in the
    /// formatting layer.
    pub avg_minutes_per_user: Option<f64>,
}

impl SummaryReport {
    /// Whether the report was computed over at least one record.
    pub fn has_data(&self) -> bool {
        self.avg_minutes_per_user.is_some()
    }
}

/// Compute a [`SummaryReport`] over `subset`.
///
/// Total over well-formed input: an empty subset yields zeros and a `None`
/// average rather than an arithmetic fault.
pub fn summarize(subset: &[&UsageRecord]) -> SummaryReport {
    let mut users: HashSet<&str> = HashSet::new();
    let mut total_posts = 0u64;
    let mut total_likes = 0u64;
    let mut total_follows = 0u64;
    let mut total_minutes = 0f64;

    for record in subset {
        users.insert(record.user_id.as_str());
        total_posts += record.posts_per_day;
        total_likes += record.likes_per_day;
        total_follows += record.follows_per_day;
        total_minutes += record.daily_minutes_spent;
    }

    let avg_minutes_per_user = if subset.is_empty() {
        None
    } else {
        Some(total_minutes / subset.len() as f64)
    };

    SummaryReport {
        total_users: users.len(),
        total_posts,
        total_likes,
        total_follows,
        total_minutes,
        avg_minutes_per_user,
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

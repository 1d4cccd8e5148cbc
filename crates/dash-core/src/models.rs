use serde::{Deserialize, Serialize};

/// One row of the usage dataset: a single user's daily activity on a single
/// application.
///
/// The serde renames bind each field to its column name in the CSV source,
/// so the same struct drives both ingestion and export and the round-trip
/// law can be checked field-for-field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UsageRecord {
    /// Opaque user identifier, unique within one application's records.
    #[serde(rename = "User_ID")]
    pub user_id: String,
    /// Application label as it appears in the source data.
    ///
    /// Kept as a raw string: records whose label is outside [`KnownApp`]
    /// are still loaded and shown under the Overall view in the default
    /// visual category.
    #[serde(rename = "App")]
    pub app: String,
    /// Posts published per day.
    #[serde(rename = "Posts_Per_Day")]
    pub posts_per_day: u64,
    /// Likes given per day.
    #[serde(rename = "Likes_Per_Day")]
    pub likes_per_day: u64,
    /// Accounts followed per day.
    #[serde(rename = "Follows_Per_Day")]
    pub follows_per_day: u64,
    /// Minutes spent in the application per day.
    #[serde(rename = "Daily_Minutes_Spent")]
    pub daily_minutes_spent: f64,
}

// ── KnownApp ──────────────────────────────────────────────────────────────────

/// The closed set of application names the dashboard knows how to select
/// and colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KnownApp {
    Instagram,
    Facebook,
    Snapchat,
    Pinterest,
    TikTok,
    LinkedIn,
    Twitter,
}

impl KnownApp {
    /// Every known application, in selector display order.
    pub const ALL: [KnownApp; 7] = [
        KnownApp::Instagram,
        KnownApp::Facebook,
        KnownApp::Snapchat,
        KnownApp::Pinterest,
        KnownApp::TikTok,
        KnownApp::LinkedIn,
        KnownApp::Twitter,
    ];

    /// The label as it appears in the dataset's `App` column.
    pub fn label(&self) -> &'static str {
        match self {
            KnownApp::Instagram => "Instagram",
            KnownApp::Facebook => "Facebook",
            KnownApp::Snapchat => "Snapchat",
            KnownApp::Pinterest => "Pinterest",
            KnownApp::TikTok => "TikTok",
            KnownApp::LinkedIn => "LinkedIn",
            KnownApp::Twitter => "Twitter",
        }
    }

    /// Parse a dataset label back into the enum. Returns `None` for labels
    /// outside the known set.
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|app| app.label() == label)
    }
}

// ── AppSelection ──────────────────────────────────────────────────────────────

/// The application selector surface: the `Overall` sentinel plus the seven
/// known applications: an 8-option closed set.
///
/// Selection strings are validated at the CLI boundary, so the filter,
/// aggregation and chart layers only ever see a well-formed variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppSelection {
    /// The unfiltered view over the whole record store.
    Overall,
    /// A single known application.
    App(KnownApp),
}

impl AppSelection {
    /// Label used by the Overall sentinel.
    pub const OVERALL_LABEL: &'static str = "Overall";

    /// All eight selector options, Overall first.
    pub const ALL: [AppSelection; 8] = [
        AppSelection::Overall,
        AppSelection::App(KnownApp::Instagram),
        AppSelection::App(KnownApp::Facebook),
        AppSelection::App(KnownApp::Snapchat),
        AppSelection::App(KnownApp::Pinterest),
        AppSelection::App(KnownApp::TikTok),
        AppSelection::App(KnownApp::LinkedIn),
        AppSelection::App(KnownApp::Twitter),
    ];

    /// Display label for this selection.
    pub fn label(&self) -> &'static str {
        match self {
            AppSelection::Overall => Self::OVERALL_LABEL,
            AppSelection::App(app) => app.label(),
        }
    }

    /// Parse a selector label. Returns `None` for anything outside the
    /// closed set.
    pub fn from_label(label: &str) -> Option<Self> {
        if label == Self::OVERALL_LABEL {
            return Some(AppSelection::Overall);
        }
        KnownApp::from_label(label).map(AppSelection::App)
    }

    /// Whether a record with the given `app` column value falls inside
    /// this selection.
    pub fn matches(&self, record_app: &str) -> bool {
        match self {
            AppSelection::Overall => true,
            AppSelection::App(app) => app.label() == record_app,
        }
    }
}

// ── ChartKind ─────────────────────────────────────────────────────────────────

/// The closed set of chart kinds the dashboard can render.
///
/// Dispatch is by exhaustive `match` everywhere, so adding or removing a
/// kind is a compile-time-checked change rather than a string comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartKind {
    /// Line chart of posts per day, one point per user.
    PostsPerDay,
    /// Bar chart of likes per day, one bar per user.
    LikesPerDay,
    /// Scatter of `(posts_per_day, likes_per_day)` pairs.
    PostsVsLikes,
    /// Histogram of `daily_minutes_spent` over 20 equal-width bins.
    MinutesDistribution,
}

impl ChartKind {
    /// Every chart kind, in selector display order.
    pub const ALL: [ChartKind; 4] = [
        ChartKind::PostsPerDay,
        ChartKind::LikesPerDay,
        ChartKind::PostsVsLikes,
        ChartKind::MinutesDistribution,
    ];

    /// Human-readable selector label.
    pub fn label(&self) -> &'static str {
        match self {
            ChartKind::PostsPerDay => "Posts Per Day",
            ChartKind::LikesPerDay => "Likes Per Day",
            ChartKind::PostsVsLikes => "Posts vs Likes Per Day",
            ChartKind::MinutesDistribution => "Daily Time Spent",
        }
    }

    /// Short token used on the command line (`--chart`).
    pub fn cli_token(&self) -> &'static str {
        match self {
            ChartKind::PostsPerDay => "posts",
            ChartKind::LikesPerDay => "likes",
            ChartKind::PostsVsLikes => "posts-vs-likes",
            ChartKind::MinutesDistribution => "minutes",
        }
    }

    /// Parse a CLI token. Returns `None` for anything outside the closed set.
    pub fn from_cli_token(token: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.cli_token() == token)
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    // ── KnownApp ──────────────────────────────────────────────────────────

    #[test]
    fn test_known_app_label_round_trip() {
        for app in KnownApp::ALL {
            assert_eq!(KnownApp::from_label(app.label()), Some(app));
        }
    }

    #[test]
    fn test_known_app_from_label_unknown() {
        assert!(KnownApp::from_label("MySpace").is_none());
        assert!(KnownApp::from_label("").is_none());
    }

    #[test]
    fn test_known_app_from_label_is_case_sensitive() {
        // The dataset labels are exact; "instagram" is not a known app.
        assert!(KnownApp::from_label("instagram").is_none());
    }

    // ── AppSelection ──────────────────────────────────────────────────────

    #[test]
    fn test_app_selection_has_eight_options() {
        assert_eq!(AppSelection::ALL.len(), 8);
        assert_eq!(AppSelection::ALL[0], AppSelection::Overall);
    }

    #[test]
    fn test_app_selection_label_round_trip() {
        for selection in AppSelection::ALL {
            assert_eq!(AppSelection::from_label(selection.label()), Some(selection));
        }
    }

    #[test]
    fn test_app_selection_from_label_rejects_unknown() {
        assert!(AppSelection::from_label("WhatsApp").is_none());
    }

    #[test]
    fn test_app_selection_overall_matches_everything() {
        assert!(AppSelection::Overall.matches("Instagram"));
        assert!(AppSelection::Overall.matches("SomethingElse"));
    }

    #[test]
    fn test_app_selection_app_matches_only_its_label() {
        let selection = AppSelection::App(KnownApp::Facebook);
        assert!(selection.matches("Facebook"));
        assert!(!selection.matches("Instagram"));
        assert!(!selection.matches("facebook"));
    }

    // ── ChartKind ─────────────────────────────────────────────────────────

    #[test]
    fn test_chart_kind_cli_token_round_trip() {
        for kind in ChartKind::ALL {
            assert_eq!(ChartKind::from_cli_token(kind.cli_token()), Some(kind));
        }
    }

    #[test]
    fn test_chart_kind_from_cli_token_unknown() {
        assert!(ChartKind::from_cli_token("pie").is_none());
    }

    #[test]
    fn test_chart_kind_labels_are_distinct() {
        let labels: std::collections::HashSet<&str> =
            ChartKind::ALL.iter().map(|k| k.label()).collect();
        assert_eq!(labels.len(), ChartKind::ALL.len());
    }

    // ── UsageRecord serde ─────────────────────────────────────────────────

    #[test]
    fn test_usage_record_serde_uses_csv_column_names() {
        let record = UsageRecord {
            user_id: "U1".to_string(),
            app: "Instagram".to_string(),
            posts_per_day: 3,
            likes_per_day: 40,
            follows_per_day: 5,
            daily_minutes_spent: 123.5,
        };
        let json = serde_json::to_string(&record).unwrap();
        assert!(json.contains("\"User_ID\":\"U1\""));
        assert!(json.contains("\"App\":\"Instagram\""));
        assert!(json.contains("\"Posts_Per_Day\":3"));
        assert!(json.contains("\"Likes_Per_Day\":40"));
        assert!(json.contains("\"Follows_Per_Day\":5"));
        assert!(json.contains("\"Daily_Minutes_Spent\":123.5"));

        let back: UsageRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(back, record);
    }
}

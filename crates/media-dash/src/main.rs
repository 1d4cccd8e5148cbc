mod bootstrap;

use std::path::PathBuf;

use anyhow::Result;
use dash_core::error::DashError;
use dash_core::models::{AppSelection, ChartKind, UsageRecord};
use dash_core::settings::Settings;
use dash_data::aggregator;
use dash_data::store::RecordStore;
use dash_ui::app::App;
use dash_ui::table_view::{TableRowData, TableTotals};

fn main() -> Result<()> {
    let settings = Settings::load_with_last_used();

    bootstrap::ensure_directories()?;
    bootstrap::setup_logging(&settings.log_level, settings.log_file.as_ref())?;

    tracing::info!("Media Dash v{} starting", env!("CARGO_PKG_VERSION"));
    tracing::info!(
        "View: {}, App: {}, Chart: {}, Theme: {}",
        settings.view,
        settings.app,
        settings.chart,
        settings.theme
    );

    let data_path = settings
        .data
        .clone()
        .or_else(bootstrap::discover_data_path)
        .ok_or(DashError::DataPathNotFound(PathBuf::from("data.csv")))?;

    // Ingestion failure aborts the session before any UI comes up.
    let store = RecordStore::load(&data_path)?;
    tracing::info!(
        "Loaded {} records from {}",
        store.len(),
        data_path.display()
    );

    // The CLI value lists are closed sets, so these lookups only fail if
    // the settings were constructed outside clap.
    let initial_app = AppSelection::from_label(&settings.app)
        .ok_or_else(|| DashError::Config(format!("unknown app selection: {}", settings.app)))?;
    let initial_chart = ChartKind::from_cli_token(&settings.chart)
        .ok_or_else(|| DashError::Config(format!("unknown chart kind: {}", settings.chart)))?;

    match settings.view.as_str() {
        "summary" => {
            // One aggregate row per application label present in the data.
            let rows: Vec<TableRowData> = store
                .distinct_apps()
                .into_iter()
                .map(|app_label| {
                    let subset: Vec<&UsageRecord> = store
                        .records()
                        .iter()
                        .filter(|r| r.app == app_label)
                        .collect();
                    let report = aggregator::summarize(&subset);
                    TableRowData {
                        app: app_label,
                        users: report.total_users,
                        posts: report.total_posts,
                        likes: report.total_likes,
                        follows: report.total_follows,
                        minutes: report.total_minutes,
                        avg_minutes: report.avg_minutes_per_user,
                    }
                })
                .collect();

            // Totals run over the whole store, so a user active on several
            // applications still counts once.
            let overall: Vec<&UsageRecord> = store.records().iter().collect();
            let overall_report = aggregator::summarize(&overall);
            let totals = TableTotals {
                users: overall_report.total_users,
                posts: overall_report.total_posts,
                likes: overall_report.total_likes,
                follows: overall_report.total_follows,
                minutes: overall_report.total_minutes,
                apps_count: rows.len(),
            };

            let app = App::new(
                &settings.theme,
                store,
                initial_app,
                initial_chart,
                bootstrap::default_export_dir(),
            );
            app.run_table(rows, totals)?;
        }

        _ => {
            let export_dir = settings
                .export_dir
                .clone()
                .unwrap_or_else(bootstrap::default_export_dir);

            let app = App::new(&settings.theme, store, initial_app, initial_chart, export_dir);
            app.run()?;
        }
    }

    Ok(())
}

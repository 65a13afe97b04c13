use std::sync::Arc;

use anyhow::Result;
use chrono::{Local, NaiveDateTime};
use rand::rngs::StdRng;
use serde::Serialize;
use tokio::sync::Mutex;

use crate::{
    analysis::{self, Comparison, HeatMap, Metric, MetricReport, TrendReport, Zoom},
    config::DashboardConfig,
    dataset::{self, DetailReading, SessionSummary},
    export,
    log_info,
    table::{EditableField, RawDataTable, RecordFilter, SortKey, TablePage},
};

const ENABLE_LOGS: bool = true;

pub type Clock = Arc<dyn Fn() -> NaiveDateTime + Send + Sync>;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CsvExport {
    pub file_name: String,
    pub contents: String,
    pub row_count: usize,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EditResult {
    pub affected_rows: Vec<String>,
    pub page: TablePage,
}

/// Owns the dashboard state for the lifetime of the app. Cloning shares the
/// same state; every operation holds the lock until its view is rebuilt.
#[derive(Clone)]
pub struct DashboardController {
    table: Arc<Mutex<RawDataTable>>,
    rng: Arc<Mutex<StdRng>>,
    zoom: Arc<Mutex<Zoom>>,
    clock: Clock,
}

impl DashboardController {
    pub fn new(config: &DashboardConfig) -> Self {
        Self::with_clock(config, Arc::new(|| Local::now().naive_local()))
    }

    /// Generates the dataset relative to `clock()` and evaluates date filters
    /// against it from then on.
    pub fn with_clock(config: &DashboardConfig, clock: Clock) -> Self {
        let mut rng = dataset::make_rng(config.seed);
        let records = dataset::generate_dataset(&mut rng, clock(), config.lookback_days);

        log_info!(
            "Dashboard ready: {} records, page size {}, seed {:?}",
            records.len(),
            config.page_size,
            config.seed
        );

        Self {
            table: Arc::new(Mutex::new(RawDataTable::new(records, config.page_size))),
            rng: Arc::new(Mutex::new(rng)),
            zoom: Arc::new(Mutex::new(Zoom::default())),
            clock,
        }
    }

    fn now(&self) -> NaiveDateTime {
        (self.clock)()
    }

    pub async fn page(&self) -> TablePage {
        self.table.lock().await.page(self.now())
    }

    pub async fn set_filter(&self, filter: RecordFilter) -> TablePage {
        let mut table = self.table.lock().await;
        table.set_filter(filter);
        table.page(self.now())
    }

    pub async fn toggle_sort(&self, key: SortKey) -> TablePage {
        let mut table = self.table.lock().await;
        table.toggle_sort(key);
        table.page(self.now())
    }

    pub async fn go_to_page(&self, page: usize) -> TablePage {
        let now = self.now();
        let mut table = self.table.lock().await;
        table.go_to_page(page, now);
        table.page(now)
    }

    pub async fn next_page(&self) -> TablePage {
        let now = self.now();
        let mut table = self.table.lock().await;
        table.next_page(now);
        table.page(now)
    }

    pub async fn previous_page(&self) -> TablePage {
        let now = self.now();
        let mut table = self.table.lock().await;
        table.previous_page(now);
        table.page(now)
    }

    pub async fn edit_field(
        &self,
        row_id: &str,
        field: EditableField,
        raw: &str,
    ) -> Result<EditResult> {
        let mut table = self.table.lock().await;
        let affected_rows = table.edit_field(row_id, field, raw)?;
        log_info!("Edited {field:?} on {} row(s)", affected_rows.len());

        Ok(EditResult {
            affected_rows,
            page: table.page(self.now()),
        })
    }

    pub async fn rename_session(&self, session_id: &str, name: &str) -> Result<EditResult> {
        let mut table = self.table.lock().await;
        let affected_rows = table.rename_session(session_id, name)?;
        log_info!("Renamed {session_id} on {} row(s)", affected_rows.len());

        Ok(EditResult {
            affected_rows,
            page: table.page(self.now()),
        })
    }

    pub async fn locations(&self) -> Vec<String> {
        self.table.lock().await.locations()
    }

    pub async fn sessions(&self) -> Vec<SessionSummary> {
        self.table.lock().await.sessions()
    }

    /// CSV of every filtered, sorted row (all pages).
    pub async fn export_csv(&self) -> Result<CsvExport> {
        let now = self.now();
        let table = self.table.lock().await;
        let visible = table.visible(now);
        let contents = export::records_to_csv(visible.iter().copied())?;

        log_info!("Exported {} rows to CSV", visible.len());

        Ok(CsvExport {
            file_name: export::csv_file_name(now.date()),
            contents,
            row_count: visible.len(),
        })
    }

    pub async fn maps_url(&self, row_id: &str) -> Result<String> {
        let table = self.table.lock().await;
        let record = table.record(row_id)?;
        Ok(export::maps_url(record.latitude, record.longitude))
    }

    pub async fn detail_readings(&self, row_id: &str) -> Result<Vec<DetailReading>> {
        let table = self.table.lock().await;
        let record = table.record(row_id)?;
        let mut rng = self.rng.lock().await;
        Ok(dataset::detail_readings(&mut *rng, record))
    }

    /// Statistics over the rows that pass the current filter.
    pub async fn metric_report(&self, metric: Metric) -> MetricReport {
        let table = self.table.lock().await;
        analysis::metric_report(table.visible(self.now()), metric)
    }

    /// Daily means over the filtered rows for the last week and month.
    pub async fn trend_report(&self, metric: Metric) -> TrendReport {
        let now = self.now();
        let table = self.table.lock().await;
        analysis::trend_report(&table.visible(now), metric, now.date())
    }

    /// Per-location averages over the filtered rows.
    pub async fn location_comparison(&self, metric: Metric) -> Comparison {
        let table = self.table.lock().await;
        analysis::compare_locations(table.visible(self.now()), metric)
    }

    pub async fn heat_map(&self, metric: Metric, session_id: Option<&str>) -> HeatMap {
        let table = self.table.lock().await;
        analysis::build_heat_map(table.records(), metric, session_id)
    }

    pub async fn zoom_in(&self) -> Zoom {
        let mut zoom = self.zoom.lock().await;
        zoom.zoom_in();
        *zoom
    }

    pub async fn zoom_out(&self) -> Zoom {
        let mut zoom = self.zoom.lock().await;
        zoom.zoom_out();
        *zoom
    }

    pub async fn reset_zoom(&self) -> Zoom {
        let mut zoom = self.zoom.lock().await;
        zoom.reset();
        *zoom
    }
}

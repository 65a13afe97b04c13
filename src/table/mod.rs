//! The raw data table: filter → sort → paginate over the in-memory dataset,
//! plus in-place cell edits.

pub mod edits;
pub mod filter;
pub mod pagination;
pub mod sort;

#[cfg(feature = "desktop")]
pub mod commands;

pub use edits::{EditTracker, EditableField};
pub use filter::{DateRange, RecordFilter};
pub use pagination::{PageInfo, Pagination};
pub use sort::{SortConfig, SortDirection, SortKey};

use anyhow::{anyhow, Result};
use chrono::NaiveDateTime;
use serde::Serialize;

use crate::dataset::{self, MeasurementRecord, SessionSummary};

/// A record as rendered, with the cells the user has overridden.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TableRow {
    #[serde(flatten)]
    pub record: MeasurementRecord,
    pub edited_fields: Vec<EditableField>,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TablePage {
    pub rows: Vec<TableRow>,
    pub page: PageInfo,
    pub filter: RecordFilter,
    pub sort: SortConfig,
}

/// All state behind the raw data view. The view is never cached; every
/// read recomputes it from the records and the current selections.
#[derive(Debug, Clone)]
pub struct RawDataTable {
    records: Vec<MeasurementRecord>,
    edits: EditTracker,
    filter: RecordFilter,
    sort: SortConfig,
    pagination: Pagination,
}

impl RawDataTable {
    pub fn new(records: Vec<MeasurementRecord>, page_size: usize) -> Self {
        Self {
            records,
            edits: EditTracker::new(),
            filter: RecordFilter::default(),
            sort: SortConfig::default(),
            pagination: Pagination::new(page_size),
        }
    }

    pub fn records(&self) -> &[MeasurementRecord] {
        &self.records
    }

    pub fn record(&self, row_id: &str) -> Result<&MeasurementRecord> {
        self.records
            .iter()
            .find(|record| record.id == row_id)
            .ok_or_else(|| anyhow!("record {row_id} not found"))
    }

    pub fn locations(&self) -> Vec<String> {
        dataset::unique_locations(&self.records)
    }

    pub fn sessions(&self) -> Vec<SessionSummary> {
        dataset::unique_sessions(&self.records)
    }

    /// Replaces the filter. The current page is kept as is.
    pub fn set_filter(&mut self, filter: RecordFilter) {
        self.filter = filter;
    }

    pub fn toggle_sort(&mut self, key: SortKey) -> SortConfig {
        self.sort.toggle(key);
        self.sort
    }

    /// Filtered then sorted records, before pagination.
    pub fn visible(&self, now: NaiveDateTime) -> Vec<&MeasurementRecord> {
        let mut rows = self.filter.apply(&self.records, now);
        self.sort.apply(&mut rows);
        rows
    }

    pub fn go_to_page(&mut self, page: usize, now: NaiveDateTime) -> usize {
        let total = self.visible(now).len();
        self.pagination.go_to(page, total)
    }

    pub fn next_page(&mut self, now: NaiveDateTime) -> usize {
        let total = self.visible(now).len();
        self.pagination.next(total)
    }

    pub fn previous_page(&mut self, now: NaiveDateTime) -> usize {
        let total = self.visible(now).len();
        self.pagination.previous(total)
    }

    pub fn page(&self, now: NaiveDateTime) -> TablePage {
        let visible = self.visible(now);
        let rows = self
            .pagination
            .slice(&visible)
            .iter()
            .map(|record| TableRow {
                record: (*record).clone(),
                edited_fields: self.edits.edited_fields(&record.id),
            })
            .collect();

        TablePage {
            rows,
            page: self.pagination.info(visible.len()),
            filter: self.filter.clone(),
            sort: self.sort,
        }
    }

    pub fn edit_field(&mut self, row_id: &str, field: EditableField, raw: &str) -> Result<Vec<String>> {
        self.edits.edit_field(&mut self.records, row_id, field, raw)
    }

    pub fn rename_session(&mut self, session_id: &str, name: &str) -> Result<Vec<String>> {
        self.edits.rename_session(&mut self.records, session_id, name)
    }
}

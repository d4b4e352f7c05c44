//! Dashboard state and command dispatch
//!
//! The dashboard owns the full event sequence loaded from the report source
//! and the filtered view derived from it. Every user action is an explicit
//! [`DashboardCommand`]; rendering reads a [`DashboardView`] snapshot and never
//! touches the state directly.

use crate::app::models::{Event, FilterCriteria};
use crate::app::services::aggregator::{
    CountEntry, SummaryCards, TypeShare, distinct_regions, events_per_month, events_per_year,
    summary_cards, top_regions, type_distribution,
};
use crate::app::services::event_filter::filter_events;
use crate::app::services::exporter::write_export;
use crate::app::services::report_parser::{ParseResult, ParseStats, parse_reports};
use crate::app::services::source_fetcher::{ReportFetcher, ReportSource};
use crate::constants::{DEFAULT_TOP_REGIONS, EMPTY_CELL};
use crate::Result;
use chrono::NaiveDate;
use serde::Serialize;
use std::path::PathBuf;
use tracing::info;

/// User actions the dashboard responds to
#[derive(Debug, Clone, PartialEq)]
pub enum DashboardCommand {
    /// Replace the active criteria and recompute the filtered view
    ApplyFilters(FilterCriteria),

    /// Drop all criteria; the filtered view becomes the full sequence
    ClearFilters,

    /// Write the filtered view as CSV into `directory`, named after `today`
    Export { directory: PathBuf, today: NaiveDate },
}

/// Outcome of a dispatched command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DashboardUpdate {
    /// The filtered view changed
    Filtered { visible: usize, total: usize },

    /// An export file was written
    Exported(PathBuf),
}

/// One table row, formatted for display
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TableRow {
    pub date: String,
    pub hour: String,
    pub locality: String,
    pub region: String,
    pub main_type: String,
    pub intensity: String,
    pub verified: String,
    pub quality_level: String,
}

impl TableRow {
    fn from_event(event: &Event) -> Self {
        Self {
            date: event
                .display_date()
                .unwrap_or_else(|| EMPTY_CELL.to_string()),
            hour: or_empty_cell(&event.hour),
            locality: or_empty_cell(&event.locality),
            region: or_empty_cell(&event.region),
            main_type: event.main_type.code().to_string(),
            intensity: or_empty_cell(&event.intensity),
            verified: or_empty_cell(&event.verified),
            quality_level: event
                .quality_level
                .map(|q| q.to_string())
                .unwrap_or_else(|| EMPTY_CELL.to_string()),
        }
    }
}

fn or_empty_cell(value: &str) -> String {
    if value.is_empty() {
        EMPTY_CELL.to_string()
    } else {
        value.to_string()
    }
}

/// Snapshot of everything the dashboard displays
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardView {
    pub cards: SummaryCards,
    pub type_distribution: Vec<TypeShare>,
    pub events_per_month: Vec<CountEntry<String>>,
    pub top_regions: Vec<CountEntry<String>>,
    pub events_per_year: Vec<CountEntry<i32>>,
    pub rows: Vec<TableRow>,
}

/// Loaded report data plus the active filtered view
#[derive(Debug, Clone, Default)]
pub struct Dashboard {
    all: Vec<Event>,
    filtered: Vec<Event>,
    criteria: FilterCriteria,
    parse_stats: ParseStats,
}

impl Dashboard {
    /// Build a dashboard from already normalized events
    pub fn from_events(events: Vec<Event>) -> Self {
        Self {
            filtered: events.clone(),
            all: events,
            criteria: FilterCriteria::default(),
            parse_stats: ParseStats::default(),
        }
    }

    /// Build a dashboard from a parse result, keeping its statistics
    pub fn from_parse_result(result: ParseResult) -> Self {
        let mut dashboard = Self::from_events(result.events);
        dashboard.parse_stats = result.stats;
        dashboard
    }

    /// Parse report text into a dashboard
    pub fn from_text(text: &str) -> Result<Self> {
        parse_reports(text).map(Self::from_parse_result)
    }

    /// Fetch and parse the report source
    ///
    /// On failure nothing is kept; there is no partially loaded dashboard.
    pub async fn load(source: &ReportSource) -> Result<Self> {
        Self::load_with(&ReportFetcher::new(), source).await
    }

    /// Fetch and parse the report source with an existing fetcher
    pub async fn load_with(fetcher: &ReportFetcher, source: &ReportSource) -> Result<Self> {
        let text = fetcher.fetch(source).await?;
        let dashboard = Self::from_text(&text)?;
        info!(
            "Loaded {} events from {}",
            dashboard.all.len(),
            source
        );
        Ok(dashboard)
    }

    /// Apply a user action
    ///
    /// Invalid criteria are rejected before any state changes.
    pub fn dispatch(&mut self, command: DashboardCommand) -> Result<DashboardUpdate> {
        match command {
            DashboardCommand::ApplyFilters(criteria) => {
                criteria.validate()?;
                self.filtered = filter_events(&self.all, &criteria)
                    .into_iter()
                    .cloned()
                    .collect();
                self.criteria = criteria;
                Ok(self.filtered_update())
            }
            DashboardCommand::ClearFilters => {
                self.filtered = self.all.clone();
                self.criteria = FilterCriteria::default();
                Ok(self.filtered_update())
            }
            DashboardCommand::Export { directory, today } => {
                write_export(&self.filtered, &directory, today).map(DashboardUpdate::Exported)
            }
        }
    }

    fn filtered_update(&self) -> DashboardUpdate {
        info!(
            "Filtered view: {} of {} events",
            self.filtered.len(),
            self.all.len()
        );
        DashboardUpdate::Filtered {
            visible: self.filtered.len(),
            total: self.all.len(),
        }
    }

    /// Snapshot of the filtered view
    pub fn view(&self) -> DashboardView {
        self.view_with_top_regions(DEFAULT_TOP_REGIONS)
    }

    /// Snapshot of the filtered view with a custom top-regions length
    pub fn view_with_top_regions(&self, limit: usize) -> DashboardView {
        let events = &self.filtered;
        DashboardView {
            cards: summary_cards(events),
            type_distribution: type_distribution(events),
            events_per_month: events_per_month(events),
            top_regions: top_regions(events, limit),
            events_per_year: events_per_year(events),
            rows: events.iter().map(TableRow::from_event).collect(),
        }
    }

    /// Region filter options, taken from the full sequence
    pub fn regions(&self) -> Vec<String> {
        distinct_regions(&self.all)
    }

    pub fn all_events(&self) -> &[Event] {
        &self.all
    }

    pub fn filtered_events(&self) -> &[Event] {
        &self.filtered
    }

    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    pub fn parse_stats(&self) -> &ParseStats {
        &self.parse_stats
    }
}

//! Terminal rendering of dashboard snapshots
//!
//! Rendering only reads a [`DashboardView`]; it never filters or aggregates.
//! Charts are drawn as horizontal text bars and the table is paged.

use crate::app::dashboard::{DashboardView, TableRow};
use crate::app::models::FilterCriteria;
use crate::app::services::aggregator::CountEntry;
use crate::{Error, Result};
use colored::*;
use serde_json::json;

/// Width of the longest bar in a chart
const BAR_WIDTH: usize = 40;

/// Bounds `[start, end)` of a table page; a page past the end is empty
pub fn page_bounds(total: usize, page: usize, page_size: usize) -> (usize, usize) {
    let start = page.saturating_sub(1).saturating_mul(page_size).min(total);
    let end = start.saturating_add(page_size).min(total);
    (start, end)
}

/// Number of pages needed for `total` rows
pub fn page_count(total: usize, page_size: usize) -> usize {
    if page_size == 0 {
        0
    } else {
        total.div_ceil(page_size)
    }
}

/// One-line description of the active criteria
pub fn describe_criteria(criteria: &FilterCriteria) -> String {
    if criteria.is_empty() {
        return "none".to_string();
    }

    let mut parts = Vec::new();
    if let Some(start) = criteria.start_date {
        parts.push(format!("from {}", start));
    }
    if let Some(end) = criteria.end_date {
        parts.push(format!("to {}", end));
    }
    if let Some(main_type) = criteria.main_type {
        parts.push(format!("type {} ({})", main_type.code(), main_type.label()));
    }
    if let Some(region) = &criteria.region {
        parts.push(format!("region {}", region));
    }
    parts.join(", ")
}

/// Human-readable dashboard: cards, four charts and one table page
pub fn render_dashboard_human(
    view: &DashboardView,
    criteria: &FilterCriteria,
    total_loaded: usize,
    page: usize,
    page_size: usize,
) -> String {
    let cards = &view.cards;
    let mut output = format!(
        "{}\n\
         ================================\n\
         🔎 Filters: {}\n\
         \n\
         📊 Total events:      {} (of {} loaded)\n\
         ✅ Verified events:   {}\n\
         🗺️  Regions affected:  {}\n\
         📏 Average intensity: {}\n\
         \n",
        "⛈️  Severe Weather Events".bright_green().bold(),
        describe_criteria(criteria),
        cards.total_events.to_string().bright_white().bold(),
        total_loaded,
        cards.verified_events,
        cards.regions_affected,
        cards.average_intensity
    );

    if cards.total_events == 0 {
        output.push_str("No events match the selected filters.\n");
        return output;
    }

    let by_type: Vec<(String, usize)> = view
        .type_distribution
        .iter()
        .map(|share| {
            (
                format!("{} ({:.1}%)", share.label, share.percentage),
                share.count,
            )
        })
        .collect();
    output.push_str(&render_bar_chart("🌪️  Events by type", &by_type));
    output.push_str(&render_bar_chart(
        "📅 Events per month",
        &entries_as_pairs(&view.events_per_month),
    ));
    output.push_str(&render_bar_chart(
        "🏙️  Top regions",
        &entries_as_pairs(&view.top_regions),
    ));
    output.push_str(&render_bar_chart(
        "📆 Events per year",
        &entries_as_pairs(&view.events_per_year),
    ));

    output.push_str(&render_table_page(&view.rows, page, page_size));
    output
}

fn entries_as_pairs<K: ToString>(entries: &[CountEntry<K>]) -> Vec<(String, usize)> {
    entries
        .iter()
        .map(|entry| (entry.key.to_string(), entry.count))
        .collect()
}

/// Horizontal bar chart; bars are scaled to the largest count
pub fn render_bar_chart(title: &str, entries: &[(String, usize)]) -> String {
    let mut output = format!("{}\n", title.bright_cyan());

    if entries.is_empty() {
        output.push_str("   (no dated events)\n\n");
        return output;
    }

    let label_width = entries
        .iter()
        .map(|(label, _)| label.chars().count())
        .max()
        .unwrap_or(0);
    let max_count = entries.iter().map(|(_, count)| *count).max().unwrap_or(0);

    for (label, count) in entries {
        let bar_len = if max_count == 0 {
            0
        } else {
            (count * BAR_WIDTH).div_ceil(max_count)
        };
        let padding = " ".repeat(label_width - label.chars().count());
        output.push_str(&format!(
            "   {}{} │{} {}\n",
            label,
            padding,
            "█".repeat(bar_len).yellow(),
            count
        ));
    }
    output.push('\n');
    output
}

/// One page of the event table
pub fn render_table_page(rows: &[TableRow], page: usize, page_size: usize) -> String {
    let (start, end) = page_bounds(rows.len(), page, page_size);
    let pages = page_count(rows.len(), page_size);

    let mut output = format!("{}\n", "📋 Events".bright_cyan());
    output.push_str(
        "Date       | Hour  | Locality             | Region           | Type | Intensity        | Verified | Quality\n",
    );
    output.push_str(
        "-----------|-------|----------------------|------------------|------|------------------|----------|--------\n",
    );

    for row in &rows[start..end] {
        output.push_str(&format!(
            "{:10} | {:5} | {:20} | {:16} | {:4} | {:16} | {:8} | {}\n",
            truncate(&row.date, 10),
            truncate(&row.hour, 5),
            truncate(&row.locality, 20),
            truncate(&row.region, 16),
            row.main_type,
            truncate(&row.intensity, 16),
            truncate(&row.verified, 8),
            row.quality_level
        ));
    }

    if start == end {
        output.push_str(&format!("(page {} is empty)\n", page));
    } else {
        output.push_str(&format!(
            "\nShowing {} to {} of {} events (page {} of {})\n",
            start + 1,
            end,
            rows.len(),
            page,
            pages
        ));
    }
    output
}

fn truncate(value: &str, width: usize) -> String {
    if value.chars().count() > width {
        let kept: String = value.chars().take(width.saturating_sub(3)).collect();
        kept + "..."
    } else {
        value.to_string()
    }
}

/// JSON dashboard with the same content as the human report
pub fn render_dashboard_json(
    view: &DashboardView,
    criteria: &FilterCriteria,
    total_loaded: usize,
    page: usize,
    page_size: usize,
) -> Result<String> {
    let (start, end) = page_bounds(view.rows.len(), page, page_size);

    let report = json!({
        "metadata": {
            "events_loaded": total_loaded,
            "events_in_view": view.rows.len(),
            "generated_at": chrono::Utc::now().format("%Y-%m-%dT%H:%M:%SZ").to_string()
        },
        "filters_applied": criteria,
        "summary": view.cards,
        "charts": {
            "by_type": view.type_distribution,
            "per_month": view.events_per_month,
            "top_regions": view.top_regions,
            "per_year": view.events_per_year
        },
        "table": {
            "page": page,
            "page_size": page_size,
            "pages": page_count(view.rows.len(), page_size),
            "rows": &view.rows[start..end]
        }
    });

    serde_json::to_string_pretty(&report)
        .map_err(|e| Error::serialization("Failed to serialize dashboard report", e))
}

/// Human-readable region list
pub fn render_regions_human(regions: &[String]) -> String {
    let mut output = format!(
        "{} ({})\n",
        "🗺️  Regions".bright_green().bold(),
        regions.len()
    );
    for region in regions {
        output.push_str(&format!("   • {}\n", region));
    }
    output
}

/// JSON region list
pub fn render_regions_json(regions: &[String]) -> Result<String> {
    serde_json::to_string_pretty(&json!({ "regions": regions }))
        .map_err(|e| Error::serialization("Failed to serialize region list", e))
}

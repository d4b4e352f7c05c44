//! Phenomenon type classification
//!
//! Maps the free-text phenomenon column onto the closed [`MainType`] set by
//! case-insensitive keyword containment. Keyword sets are tested in a fixed
//! priority order and the first hit wins, so a text naming several phenomena
//! always resolves to the earliest listed one.

use crate::app::models::MainType;
use crate::constants::phenomenon_keywords;

/// Keyword sets in priority order
const PRIORITY: [(&[&str], MainType); 5] = [
    (phenomenon_keywords::HAIL, MainType::Hail),
    (phenomenon_keywords::GUST, MainType::Gust),
    (phenomenon_keywords::TORNADO, MainType::Tornado),
    (phenomenon_keywords::FUNNEL, MainType::Funnel),
    (phenomenon_keywords::WATERSPOUT, MainType::Waterspout),
];

/// Classify a phenomenon description
pub fn classify_phenomenon(text: &str) -> MainType {
    if text.is_empty() {
        return MainType::Other;
    }

    let upper = text.to_uppercase();
    PRIORITY
        .iter()
        .find(|(keywords, _)| keywords.iter().any(|keyword| upper.contains(keyword)))
        .map(|(_, main_type)| *main_type)
        .unwrap_or(MainType::Other)
}

//! Application constants for the severe weather dashboard
//!
//! This module contains the source location, column headers, classification
//! keywords and display defaults used throughout the application.

// =============================================================================
// Report Source
// =============================================================================

/// Published spreadsheet holding the severe-weather event reports (CSV export)
pub const DEFAULT_SOURCE_URL: &str = "https://docs.google.com/spreadsheets/d/1RR-9_QpWa1X8HBFh4pjYndn64DnyGRpBYF0k6VMio9s/export?format=csv&gid=0";

/// Environment variable overriding the report source (URL or file path)
pub const ENV_SOURCE: &str = "SEVERE_WEATHER_SOURCE";

/// Environment variable overriding the export directory
pub const ENV_EXPORT_DIR: &str = "SEVERE_WEATHER_EXPORT_DIR";

/// Application directory name under the user's config directory
pub const APP_DIR_NAME: &str = "severe-weather";

/// Configuration file name inside [`APP_DIR_NAME`]
pub const CONFIG_FILE_NAME: &str = "config.json";

/// Generic notice shown whenever the report data cannot be loaded
pub const LOAD_FAILURE_MESSAGE: &str =
    "Could not load the report data. Check that the spreadsheet is published.";

/// Notice shown when an export is requested for an empty view
pub const EMPTY_EXPORT_MESSAGE: &str = "No data to export";

// =============================================================================
// CSV Format
// =============================================================================

/// Field delimiter of the source and export documents
pub const FIELD_DELIMITER: char = ',';

/// Quote character stripped from header names and values
pub const QUOTE_CHAR: char = '"';

/// Intensity marker meaning "not sampled"
pub const NOT_SAMPLED_MARKER: &str = "N/S";

/// Verification value counted as a verified report
pub const VERIFIED_YES: &str = "SI";

/// Length of a `YYYYMMDD` date token
pub const REPORT_DATE_LEN: usize = 8;

// =============================================================================
// Column Headers
// =============================================================================

/// Source-sheet and export headers for each recognised column
pub mod headers {
    pub const DATE: &str = "Fecha";
    pub const HOUR: &str = "Horario (UTC)";
    pub const LOCALITY: &str = "Localidad";
    pub const REGION: &str = "Departamento";
    pub const PHENOMENON: &str = "Tipo de fenómeno CORR (Granizo/Ráfaga/Tornado)";
    pub const INTENSITY: &str = "Intensidad / Tamaño / Escala";
    pub const VERIFICATION: &str = "Verificación (Si/No)";
    pub const QUALITY: &str = "Nivel de calidad (1-3)";
    pub const LATITUDE: &str = "Latitud (grados, 4 dec.)";
    pub const LONGITUDE: &str = "Longitud (grados, 4 dec.)";
    pub const DESCRIPTION: &str = "Descripción / Información adicional";

    /// Substring identifying a latitude column
    pub const LATITUDE_MARKER: &str = "Latitud";

    /// Substring identifying a longitude column
    pub const LONGITUDE_MARKER: &str = "Longitud";

    /// Headers written by the exporter, in column order
    pub const EXPORT: [&str; 11] = [
        "Fecha",
        "Hora",
        "Localidad",
        "Departamento",
        "Tipo",
        "Intensidad",
        "Verificado",
        "Calidad",
        "Latitud",
        "Longitud",
        "Descripción",
    ];

    pub const EXPORT_HOUR: &str = EXPORT[1];
    pub const EXPORT_PHENOMENON: &str = EXPORT[4];
    pub const EXPORT_INTENSITY: &str = EXPORT[5];
    pub const EXPORT_VERIFICATION: &str = EXPORT[6];
    pub const EXPORT_QUALITY: &str = EXPORT[7];
    pub const EXPORT_DESCRIPTION: &str = EXPORT[10];
}

// =============================================================================
// Phenomenon Classification
// =============================================================================

/// Keyword sets tested in order against the upper-cased phenomenon text
///
/// The first set with a contained keyword decides the type, so the order here
/// resolves texts that mention several phenomena.
pub mod phenomenon_keywords {
    pub const HAIL: &[&str] = &["GRANIZO", "GRA"];
    pub const GUST: &[&str] = &["RÁFAGA", "RAF"];
    pub const TORNADO: &[&str] = &["TORNADO", "TOR"];
    pub const FUNNEL: &[&str] = &["FUNNEL", "FUN"];
    pub const WATERSPOUT: &[&str] = &["TROMBA", "TRB"];
}

// =============================================================================
// Display Defaults
// =============================================================================

/// Rows per table page
pub const DEFAULT_PAGE_SIZE: usize = 25;

/// Regions shown in the top-regions series
pub const DEFAULT_TOP_REGIONS: usize = 10;

/// Label used for events without a region in the top-regions series
pub const UNKNOWN_REGION_LABEL: &str = "Desconocido";

/// Placeholder for empty table cells
pub const EMPTY_CELL: &str = "N/A";

/// Prefix of export file names
pub const EXPORT_FILE_PREFIX: &str = "fenomenos_severos";

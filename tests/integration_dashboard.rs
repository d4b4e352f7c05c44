//! Integration tests for loading, filtering and exporting report data
//!
//! These tests drive the public API end to end against a local report file
//! and a throwaway HTTP server bound to localhost.

use chrono::NaiveDate;
use severe_weather_dashboard::app::dashboard::{Dashboard, DashboardCommand, DashboardUpdate};
use severe_weather_dashboard::app::services::report_parser::parse_reports;
use severe_weather_dashboard::app::services::source_fetcher::{ReportFetcher, ReportSource};
use severe_weather_dashboard::constants::LOAD_FAILURE_MESSAGE;
use severe_weather_dashboard::{Error, FilterCriteria, MainType};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

const REPORT: &str = "\
Fecha,Horario (UTC),Localidad,Departamento,Tipo de fenómeno CORR (Granizo/Ráfaga/Tornado),Intensidad / Tamaño / Escala,Verificación (Si/No),Nivel de calidad (1-3),Latitud,Longitud,Descripción / Información adicional
20240115,18:30,Las Piedras,Canelones,Granizo,2 - 4,si,1,-34.7302,-56.2192,Granizo del tamaño de una nuez
20240203,21:00,Young,Río Negro,RÁFAGA,90 km/h,NO,2,-32.6980,-57.6263,Árboles caídos
20240301,03:15,Tarariras,Colonia,Tornado F1,F1,SI,3,-34.2665,-57.6164,Daños en galpones
,16:00,Salinas,Canelones,Tromba marina,N/S,SI,,,,Vista desde la costa
20231110,14:45,Salto,Salto,Nube embudo (funnel),,NO,2,-31.3833,-57.9667,";

/// Serve one HTTP response on a random local port and return the URL
async fn serve_once(status_line: &'static str, body: &'static str) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let address = listener.local_addr().unwrap();

    tokio::spawn(async move {
        if let Ok((mut socket, _)) = listener.accept().await {
            let mut buffer = [0u8; 4096];
            let _ = socket.read(&mut buffer).await;
            let response = format!(
                "HTTP/1.1 {}\r\nContent-Type: text/csv; charset=utf-8\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                status_line,
                body.len(),
                body
            );
            let _ = socket.write_all(response.as_bytes()).await;
            let _ = socket.shutdown().await;
        }
    });

    format!("http://{}/export?format=csv", address)
}

/// Fetcher that talks to localhost directly, whatever the proxy environment
fn local_fetcher() -> ReportFetcher {
    ReportFetcher::with_client(reqwest::Client::builder().no_proxy().build().unwrap())
}

async fn load_url(url: &str) -> severe_weather_dashboard::Result<Dashboard> {
    Dashboard::load_with(&local_fetcher(), &ReportSource::parse(url)).await
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[tokio::test]
async fn test_load_from_local_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("reports.csv");
    std::fs::write(&path, REPORT).unwrap();

    let dashboard = Dashboard::load(&ReportSource::parse(path.to_str().unwrap()))
        .await
        .unwrap();

    assert_eq!(dashboard.all_events().len(), 5);
    assert_eq!(dashboard.parse_stats().total_records, 5);

    let types: Vec<MainType> = dashboard.all_events().iter().map(|e| e.main_type).collect();
    assert_eq!(
        types,
        vec![
            MainType::Hail,
            MainType::Gust,
            MainType::Tornado,
            MainType::Waterspout,
            MainType::Funnel,
        ]
    );
}

#[tokio::test]
async fn test_load_over_http() {
    let url = serve_once("200 OK", REPORT).await;

    let dashboard = load_url(&url).await.unwrap();
    assert_eq!(dashboard.all_events().len(), 5);
    assert_eq!(
        dashboard.regions(),
        vec!["Canelones", "Colonia", "Río Negro", "Salto"]
    );
}

#[tokio::test]
async fn test_http_error_status_is_load_failure() {
    let url = serve_once("500 Internal Server Error", "").await;

    let error = load_url(&url).await.unwrap_err();

    assert!(matches!(error, Error::HttpStatus { status: 500, .. }));
    assert_eq!(error.user_message(), LOAD_FAILURE_MESSAGE);
}

#[tokio::test]
async fn test_unreachable_source_is_load_failure() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let address = listener.local_addr().unwrap();
    drop(listener);

    let source = ReportSource::parse(&format!("http://{}/sheet.csv", address));
    let error = local_fetcher().fetch(&source).await.unwrap_err();

    assert!(matches!(error, Error::Transport { .. }));
    assert!(error.is_load_failure());
    assert_eq!(error.user_message(), LOAD_FAILURE_MESSAGE);
}

#[tokio::test]
async fn test_blank_document_is_load_failure() {
    let url = serve_once("200 OK", "  \n \n").await;

    let error = load_url(&url).await.unwrap_err();
    assert!(matches!(error, Error::EmptyInput));
    assert_eq!(error.user_message(), LOAD_FAILURE_MESSAGE);
}

#[test]
fn test_filtered_export_parses_back() {
    let dir = tempfile::tempdir().unwrap();
    let mut dashboard = Dashboard::from_text(REPORT).unwrap();

    dashboard
        .dispatch(DashboardCommand::ApplyFilters(
            FilterCriteria::new().with_start_date(date(2024, 1, 1)),
        ))
        .unwrap();
    assert_eq!(dashboard.filtered_events().len(), 4);

    let update = dashboard
        .dispatch(DashboardCommand::Export {
            directory: dir.path().join("exports"),
            today: date(2024, 6, 30),
        })
        .unwrap();

    let DashboardUpdate::Exported(path) = update else {
        panic!("expected an export");
    };
    assert_eq!(
        path.file_name().unwrap().to_str().unwrap(),
        "fenomenos_severos_2024-06-30.csv"
    );

    let exported = std::fs::read_to_string(&path).unwrap();
    let reparsed = parse_reports(&exported).unwrap();

    assert!(reparsed.missing_columns.is_empty());
    assert_eq!(reparsed.events.len(), dashboard.filtered_events().len());

    for (original, round_tripped) in dashboard.filtered_events().iter().zip(&reparsed.events) {
        assert_eq!(round_tripped.date, original.date);
        assert_eq!(round_tripped.hour, original.hour);
        assert_eq!(round_tripped.locality, original.locality);
        assert_eq!(round_tripped.region, original.region);
        assert_eq!(round_tripped.main_type, original.main_type);
        assert_eq!(round_tripped.intensity, original.intensity);
        assert_eq!(round_tripped.intensity_value, original.intensity_value);
        assert_eq!(round_tripped.verified, original.verified);
        assert_eq!(round_tripped.quality_level, original.quality_level);
        assert_eq!(round_tripped.latitude, original.latitude);
        assert_eq!(round_tripped.longitude, original.longitude);
        assert_eq!(round_tripped.description, original.description);
    }
}

#[test]
fn test_empty_view_export_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let mut dashboard = Dashboard::from_text(REPORT).unwrap();

    dashboard
        .dispatch(DashboardCommand::ApplyFilters(
            FilterCriteria::new()
                .with_main_type(MainType::Hail)
                .with_region("Salto"),
        ))
        .unwrap();

    let result = dashboard.dispatch(DashboardCommand::Export {
        directory: dir.path().to_path_buf(),
        today: date(2024, 6, 30),
    });

    assert!(matches!(result, Err(Error::EmptyExport)));
    assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
}

#[test]
fn test_summary_of_filtered_view() {
    let mut dashboard = Dashboard::from_text(REPORT).unwrap();
    dashboard
        .dispatch(DashboardCommand::ApplyFilters(
            FilterCriteria::new().with_region("Canelones"),
        ))
        .unwrap();

    let view = dashboard.view();
    assert_eq!(view.cards.total_events, 2);
    assert_eq!(view.cards.verified_events, 2);
    assert_eq!(view.cards.regions_affected, 1);
    assert_eq!(view.cards.average_intensity.value(), Some(2.0));

    // The undated waterspout counts in the cards but in no dated series
    assert_eq!(view.events_per_month.len(), 1);
    assert_eq!(view.events_per_year.len(), 1);
    assert_eq!(view.rows[1].date, "N/A");

    dashboard.dispatch(DashboardCommand::ClearFilters).unwrap();
    assert_eq!(dashboard.view().cards.total_events, 5);
}

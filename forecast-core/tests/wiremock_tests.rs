//! Integration tests for the report pipeline against a mock Open-Meteo server.

use forecast_core::{
    DecodeError, ForecastReporter, OpenMeteoClient, ReportError, RequestConfig, ValidationError,
};
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{method, path, query_param},
};

/// Open-Meteo answer for Moscow with `days` daily entries starting 2023-11-15.
fn sample_forecast_response(days: usize) -> serde_json::Value {
    let time = [1_700_006_400_i64, 1_700_092_800, 1_700_179_200];
    let sunrise = [1_700_024_100_i64, 1_700_110_620, 1_700_197_140];
    let sunset = [1_700_054_220_i64, 1_700_140_560, 1_700_226_900];

    serde_json::json!({
        "latitude": 55.625,
        "longitude": 37.625,
        "generationtime_ms": 0.0519,
        "utc_offset_seconds": 10800,
        "timezone": "Europe/Moscow",
        "timezone_abbreviation": "MSK",
        "elevation": 151.0,
        "current_weather": {
            "temperature": -1.5,
            "windspeed": 3.2,
            "winddirection": 250.0,
            "weathercode": 3,
            "is_day": 0,
            "time": 1_700_000_000
        },
        "daily_units": {
            "time": "unixtime",
            "weathercode": "wmo code",
            "temperature_2m_max": "°C",
            "temperature_2m_min": "°C",
            "sunrise": "unixtime",
            "sunset": "unixtime"
        },
        "daily": {
            "time": &time[..days],
            "weathercode": &[3, 71, 0][..days],
            "temperature_2m_max": &[0.4, -0.8, 2.1][..days],
            "temperature_2m_min": &[-3.0, -5.2, -1.0][..days],
            "sunrise": &sunrise[..days],
            "sunset": &sunset[..days]
        }
    })
}

fn create_test_reporter(mock_server: &MockServer) -> ForecastReporter<OpenMeteoClient> {
    let client = OpenMeteoClient::new().with_base_url(format!("{}/v1", mock_server.uri()));
    ForecastReporter::new(client)
}

async fn setup_forecast_mock(mock_server: &MockServer, days: &str, response: ResponseTemplate) {
    Mock::given(method("GET"))
        .and(path("/v1/forecast"))
        .and(query_param("latitude", "55.6302"))
        .and(query_param("longitude", "37.6045"))
        .and(query_param(
            "daily",
            "weathercode,temperature_2m_max,temperature_2m_min,sunrise,sunset",
        ))
        .and(query_param("current_weather", "true"))
        .and(query_param("windspeed_unit", "ms"))
        .and(query_param("timeformat", "unixtime"))
        .and(query_param("timezone", "Europe/Moscow"))
        .and(query_param("forecast_days", days))
        .respond_with(response)
        .expect(1)
        .mount(mock_server)
        .await;
}

// ============================================================================
// Success scenarios
// ============================================================================

#[tokio::test]
async fn test_single_day_report_has_no_tomorrow() {
    let mock_server = MockServer::start().await;
    setup_forecast_mock(
        &mock_server,
        "1",
        ResponseTemplate::new(200).set_body_json(sample_forecast_response(1)),
    )
    .await;

    let reporter = create_test_reporter(&mock_server);
    let report = reporter
        .generate_report(&RequestConfig::new(55.6302, 37.6045, 1, false))
        .await
        .expect("report should render");

    assert!(!report.is_empty());
    assert_eq!(report.lines().count(), 9);
    assert!(report.contains("Текущая температура: -1.5°C"));
    assert!(report.contains("Скорость ветра: 3.2 m/s"));
    assert!(report.contains("Погода: 🌥 Пасмурная погода 🌥"));
    assert!(report.contains("Рассвет: 07:55"));
    assert!(report.contains("Закат: 16:17"));
    assert!(report.contains("Световой день: 8ч 22мин"));
    assert!(!report.contains("Завтра"));
}

#[tokio::test]
async fn test_two_days_with_tomorrow_flag() {
    let mock_server = MockServer::start().await;
    setup_forecast_mock(
        &mock_server,
        "2",
        ResponseTemplate::new(200).set_body_json(sample_forecast_response(2)),
    )
    .await;

    let reporter = create_test_reporter(&mock_server);
    let report = reporter
        .generate_report(&RequestConfig::new(55.6302, 37.6045, 2, true))
        .await
        .expect("report should render");

    let (_, tomorrow) = report.split_once("\n\n").expect("tomorrow block expected");
    assert!(tomorrow.starts_with("Завтра "));
    assert!(tomorrow.trim_end().ends_with("мин"));
    assert!(tomorrow.contains("Погода: ❄️ Снег: Небольшой ❄️"));
    assert!(tomorrow.contains("Максимальная температура: -0.8°C"));
    assert!(tomorrow.contains("Минимальная температура: -5.2°C"));
    assert_eq!(report.matches("Текущая температура").count(), 1);
}

// ============================================================================
// Failure scenarios
// ============================================================================

#[tokio::test]
async fn test_zero_days_never_reaches_server() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&mock_server)
        .await;

    let reporter = create_test_reporter(&mock_server);
    let err = reporter
        .generate_report(&RequestConfig::new(55.6302, 37.6045, 0, false))
        .await
        .unwrap_err();

    assert!(matches!(err, ReportError::Validation(ValidationError::NoForecastDays)));
}

#[tokio::test]
async fn test_malformed_json_is_decode_error() {
    let mock_server = MockServer::start().await;
    setup_forecast_mock(
        &mock_server,
        "1",
        ResponseTemplate::new(200).set_body_string("{\"daily\": [not json"),
    )
    .await;

    let reporter = create_test_reporter(&mock_server);
    let err = reporter
        .generate_report(&RequestConfig::new(55.6302, 37.6045, 1, false))
        .await
        .unwrap_err();

    assert!(matches!(err, ReportError::Decode(DecodeError::Json(_))));
}

#[tokio::test]
async fn test_short_daily_arrays_are_decode_error() {
    let mock_server = MockServer::start().await;
    setup_forecast_mock(
        &mock_server,
        "3",
        ResponseTemplate::new(200).set_body_json(sample_forecast_response(2)),
    )
    .await;

    let reporter = create_test_reporter(&mock_server);
    let err = reporter
        .generate_report(&RequestConfig::new(55.6302, 37.6045, 3, false))
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        ReportError::Decode(DecodeError::MissingDays { requested: 3, available: 2 })
    ));
}

#[tokio::test]
async fn test_server_error_is_status_error() {
    let mock_server = MockServer::start().await;
    setup_forecast_mock(
        &mock_server,
        "1",
        ResponseTemplate::new(500).set_body_string("upstream exploded"),
    )
    .await;

    let reporter = create_test_reporter(&mock_server);
    let err = reporter
        .generate_report(&RequestConfig::new(55.6302, 37.6045, 1, false))
        .await
        .unwrap_err();

    match err {
        ReportError::Status { status, body } => {
            assert_eq!(status.as_u16(), 500);
            assert_eq!(body, "upstream exploded");
        }
        other => panic!("expected status error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_unreachable_host_is_transport_error() {
    // Nothing listens on the discard port.
    let client = OpenMeteoClient::new().with_base_url("http://127.0.0.1:9/v1");
    let reporter = ForecastReporter::new(client);

    let err = reporter
        .generate_report(&RequestConfig::new(55.6302, 37.6045, 1, false))
        .await
        .unwrap_err();

    assert!(matches!(err, ReportError::Transport(_)));
}

use grabctl::camera_models::{CameraSettings, DefaultCameraConfig, FieldValue};
use grabctl::core::api_client::GrabberClient;
use grabctl::errors::AppError;
use serde_json::json;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> GrabberClient {
    GrabberClient::new(&server.uri()).expect("mock server URI should be a valid base URL")
}

#[tokio::test]
async fn fetch_default_config_fills_missing_fields() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/default_camera_settings"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "width": 640,
            "height": 480,
        })))
        .mount(&server)
        .await;

    let config = client_for(&server).fetch_default_config().await.unwrap();

    assert_eq!(config.width, Some(640));
    assert_eq!(config.height, Some(480));
    assert_eq!(config.offset_x, None);
    assert_eq!(config.offset_y, None);
    assert_eq!(config.pixel_format, None);
    assert_eq!(config.fps, None);
    assert_eq!(config.exposure, None);
    assert_eq!(config.exposure_mode, None);
    assert_eq!(config.gain, None);
    assert_eq!(config.gev_scpd, None);
}

#[tokio::test]
async fn fetch_default_config_reads_nulls_as_unset() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/default_camera_settings"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "width": null,
            "fps": 12.5,
            "exposure_mode": 1,
        })))
        .mount(&server)
        .await;

    let config = client_for(&server).fetch_default_config().await.unwrap();

    assert_eq!(config.width, None);
    assert_eq!(config.fps, Some(12.5));
    assert_eq!(config.exposure_mode, Some(1.0));
}

#[tokio::test]
async fn fetch_default_config_maps_http_failure_to_network_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/default_camera_settings"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let err = client_for(&server).fetch_default_config().await.unwrap_err();
    assert!(matches!(err, AppError::Network(msg) if msg == "Failed to fetch default config"));
}

#[tokio::test]
async fn save_default_config_flattens_every_field_to_explicit_null() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/default_camera_settings"))
        .and(body_json(json!({
            "width": 1920,
            "height": null,
            "offset_x": null,
            "offset_y": null,
            "pixel_format": "Mono8",
            "fps": null,
            "exposure": null,
            "exposure_mode": null,
            "gain": null,
            "gev_scpd": null,
        })))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let config = DefaultCameraConfig {
        width: Some(1920),
        pixel_format: Some("Mono8".to_string()),
        ..DefaultCameraConfig::default()
    };
    client_for(&server).save_default_config(&config).await.unwrap();
}

#[tokio::test]
async fn save_default_config_maps_http_failure_to_network_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/default_camera_settings"))
        .respond_with(ResponseTemplate::new(422))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .save_default_config(&DefaultCameraConfig::default())
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::Network(msg) if msg == "Failed to save default config"));
}

#[tokio::test]
async fn fetch_available_cameras_decodes_the_list() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/available_gige_cameras"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"ip_address": "10.0.0.5", "serial_number": "22811", "model_name": "acA1920-40gm"},
            {"ip_address": "10.0.0.6", "serial_number": "22812", "model_name": "acA1920-40gm"},
        ])))
        .mount(&server)
        .await;

    let cameras = client_for(&server).fetch_available_cameras().await.unwrap();
    assert_eq!(cameras.len(), 2);
    assert_eq!(cameras[0].ip_address, "10.0.0.5");
    assert_eq!(cameras[1].serial_number, "22812");
}

#[tokio::test]
async fn fetch_available_cameras_404_carries_fixed_message() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/available_gige_cameras"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let err = client_for(&server).fetch_available_cameras().await.unwrap_err();
    assert!(matches!(err, AppError::Network(msg) if msg == "Failed to fetch cameras"));
}

#[tokio::test]
async fn fetch_camera_settings_returns_envelope_body_unnormalized() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/camera-settings/10.0.0.5"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "settings": {"fps": 30, "gain": null}
        })))
        .mount(&server)
        .await;

    let settings = client_for(&server)
        .fetch_camera_settings("10.0.0.5")
        .await
        .unwrap();

    assert_eq!(settings.fps, FieldValue::Value(30.0));
    // Absence and explicit null survive distinctly; nothing is filled in.
    assert_eq!(settings.gain, FieldValue::Null);
    assert_eq!(settings.width, FieldValue::Unset);
}

#[tokio::test]
async fn save_camera_settings_sends_partial_record_verbatim() {
    let server = MockServer::start().await;
    // Unset fields must be omitted, explicit clears sent as null.
    Mock::given(method("POST"))
        .and(path("/camera-settings/10.0.0.5"))
        .and(body_json(json!({"width": 800, "gev_scpd": null})))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let settings = CameraSettings {
        width: FieldValue::Value(800),
        gev_scpd: FieldValue::Null,
        ..CameraSettings::default()
    };
    client_for(&server)
        .save_camera_settings("10.0.0.5", &settings)
        .await
        .unwrap();
}

#[tokio::test]
async fn save_camera_settings_maps_http_failure_to_network_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/camera-settings/10.0.0.5"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .save_camera_settings("10.0.0.5", &CameraSettings::default())
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::Network(msg) if msg == "Failed to save camera settings"));
}

#[tokio::test]
async fn fetch_config_returns_raw_document() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/config"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "grabber": {"workers": 4},
            "cameras": ["10.0.0.5"],
        })))
        .mount(&server)
        .await;

    let document = client_for(&server).fetch_config().await.unwrap();
    assert_eq!(document["grabber"]["workers"], json!(4));
    assert_eq!(document["cameras"][0], json!("10.0.0.5"));
}

#[tokio::test]
async fn fetch_config_failure_uses_fixed_network_message() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/config"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let err = client_for(&server).fetch_config().await.unwrap_err();
    assert!(matches!(err, AppError::Network(msg) if msg == "network error"));
}

#[tokio::test]
async fn save_config_resolves_true_on_success() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/config"))
        .and(body_json(json!({"foo": 1})))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let accepted = client_for(&server)
        .save_config(&json!({"foo": 1}))
        .await
        .unwrap();
    assert!(accepted);
}

#[tokio::test]
async fn save_config_failure_message_contains_status_code() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/config"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .save_config(&json!({"foo": 1}))
        .await
        .unwrap_err();
    match err {
        AppError::Network(msg) => assert!(msg.contains("500"), "message was '{}'", msg),
        other => panic!("expected a network error, got {:?}", other),
    }
}

#[tokio::test]
async fn invalid_base_url_is_a_config_error() {
    let err = GrabberClient::new("not a url").unwrap_err();
    assert!(matches!(err, AppError::Config(_)));
}

mod common;

use std::collections::HashMap;

use axum::http::StatusCode;
use common::get;
use serde_json::json;
use watering_relay::{app::App, AppConfig, Mode};

fn config(vars: &[(&str, &str)]) -> AppConfig {
    let map: HashMap<String, String> = vars
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    AppConfig::from_lookup(|key| map.get(key).cloned()).unwrap()
}

#[tokio::test]
async fn test_direct_mode_app() {
    let app = App::new(config(&[("MOCK_GPIO", "true")])).unwrap();

    assert_eq!(app.config.mode, Mode::Direct);
    assert!(app.controller.as_ref().unwrap().uses_mock());

    let (code, body) = get(app.router.clone(), "/health").await;
    assert_eq!(code, StatusCode::OK);
    assert_eq!(body["mock_mode"], json!(true));
}

#[tokio::test]
async fn test_proxy_mode_app() {
    let app = App::new(config(&[
        ("WATERING_MODE", "proxy"),
        ("WATERING_API_BASE_URL", "http://192.168.2.163"),
    ]))
    .unwrap();

    assert!(app.controller.is_none());

    let (code, body) = get(app.router.clone(), "/health").await;
    assert_eq!(code, StatusCode::OK);
    assert_eq!(body["mode"], json!("proxy"));

    // No status route in proxy mode
    let (code, _) = get(app.router.clone(), "/api/status").await;
    assert_eq!(code, StatusCode::NOT_FOUND);
}

#[test]
fn test_proxy_mode_refuses_to_start_without_base_url() {
    let result = AppConfig::from_lookup(|key| match key {
        "WATERING_MODE" => Some("proxy".to_string()),
        _ => None,
    });

    assert!(result.is_err());
}

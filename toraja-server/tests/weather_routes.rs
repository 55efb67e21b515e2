use std::sync::atomic::Ordering;

use anyhow::Result;
use axum::http::StatusCode;
use serde_json::Value;

mod common;

use common::{build_test_app, build_test_app_with};

#[tokio::test]
async fn panel_starts_idle_without_fetching() -> Result<()> {
    let app = build_test_app()?;

    let response = app.server.get("/api/v1/weather").await;
    response.assert_status_ok();
    let data = &response.json::<Value>()["data"];

    assert_eq!(data["location"], "Rantepao");
    assert_eq!(data["status"], "idle");
    assert!(data["condition"].is_null());
    assert_eq!(app.weather.calls.load(Ordering::SeqCst), 0);
    Ok(())
}

#[tokio::test]
async fn refresh_fetches_once_and_is_remembered() -> Result<()> {
    let app = build_test_app()?;

    let response = app
        .server
        .post("/api/v1/weather/refresh")
        .add_query_param("lang", "en")
        .await;
    response.assert_status_ok();
    let data = &response.json::<Value>()["data"];
    assert_eq!(data["status"], "ready");
    assert_eq!(data["value"]["temperature_c"], 21.5);
    assert_eq!(data["value"]["sky"], "rain");
    assert_eq!(data["condition"], "Rain");
    assert_eq!(app.weather.calls.load(Ordering::SeqCst), 1);

    let after: Value = app.server.get("/api/v1/weather").await.json();
    assert_eq!(after["data"]["status"], "ready");
    assert_eq!(after["data"]["condition"], "Hujan");
    assert_eq!(app.weather.calls.load(Ordering::SeqCst), 1);
    Ok(())
}

#[tokio::test]
async fn failed_refresh_is_reported_and_can_be_retried() -> Result<()> {
    let app = build_test_app()?;
    app.weather.failing.store(true, Ordering::SeqCst);

    let response = app.server.post("/api/v1/weather/refresh").await;
    response.assert_status_ok();
    let failed: Value = response.json();
    assert_eq!(failed["data"]["status"], "failed");
    assert!(failed["data"]["value"].is_string());

    app.weather.failing.store(false, Ordering::SeqCst);
    let retried: Value =
        app.server.post("/api/v1/weather/refresh").await.json();
    assert_eq!(retried["data"]["status"], "ready");
    assert_eq!(app.weather.calls.load(Ordering::SeqCst), 2);
    Ok(())
}

#[tokio::test]
async fn disabled_panel_is_not_found() -> Result<()> {
    let app = build_test_app_with(&[("WEATHER_ENABLED", "false")])?;

    app.server
        .get("/api/v1/weather")
        .await
        .assert_status(StatusCode::NOT_FOUND);
    app.server
        .post("/api/v1/weather/refresh")
        .await
        .assert_status(StatusCode::NOT_FOUND);
    assert_eq!(app.weather.calls.load(Ordering::SeqCst), 0);
    Ok(())
}

use anyhow::Result;
use axum::http::StatusCode;
use serde_json::Value;

mod common;

use common::build_test_app;

fn titles(data: &Value) -> Vec<String> {
    data["items"]
        .as_array()
        .expect("carousel items")
        .iter()
        .map(|item| item["title"].as_str().unwrap_or_default().to_string())
        .collect()
}

#[tokio::test]
async fn featured_destinations_first_page_on_desktop() -> Result<()> {
    let app = build_test_app()?;

    let response = app
        .server
        .get("/api/v1/carousels/featured-destinations")
        .await;
    response.assert_status_ok();
    let data = &response.json::<Value>()["data"];

    assert_eq!(data["key"], "featured-destinations");
    assert_eq!(data["page"], 0);
    assert_eq!(data["total_pages"], 2);
    assert_eq!(data["items_per_page"], 4);
    assert_eq!(data["show_controls"], true);
    assert_eq!(data["autoplay_interval_ms"], 5000);
    assert_eq!(data["transition_ms"], 500);
    assert_eq!(
        titles(data),
        ["Kete Kesu", "Lemo", "Londa", "Batutumonga"]
    );

    let dots = data["dots"].as_array().expect("dots");
    assert_eq!(dots.len(), 2);
    assert_eq!(dots[0]["active"], true);
    assert_eq!(dots[1]["active"], false);
    Ok(())
}

#[tokio::test]
async fn last_page_wraps_to_stay_full() -> Result<()> {
    let app = build_test_app()?;

    let data = app
        .server
        .get("/api/v1/carousels/featured-destinations")
        .add_query_param("page", 1)
        .await
        .json::<Value>()["data"]
        .clone();

    assert_eq!(data["page"], 1);
    assert_eq!(
        titles(&data),
        ["Bori Kalimbuang", "Buntu Burake", "Kete Kesu", "Lemo"]
    );
    assert_eq!(data["dots"][1]["active"], true);
    Ok(())
}

#[tokio::test]
async fn out_of_range_page_wraps_around() -> Result<()> {
    let app = build_test_app()?;

    let data = app
        .server
        .get("/api/v1/carousels/featured-destinations")
        .add_query_param("page", 3)
        .await
        .json::<Value>()["data"]
        .clone();

    assert_eq!(data["page"], 1);
    Ok(())
}

#[tokio::test]
async fn narrow_viewport_uses_mobile_layout() -> Result<()> {
    let app = build_test_app()?;

    let data = app
        .server
        .get("/api/v1/carousels/featured-destinations")
        .add_query_param("viewport_width", 375)
        .add_query_param("lang", "en")
        .await
        .json::<Value>()["data"]
        .clone();

    assert_eq!(data["items_per_page"], 1);
    assert_eq!(data["total_pages"], 6);
    assert_eq!(data["autoplay_interval_ms"], 3000);
    assert_eq!(titles(&data), ["Kete Kesu"]);
    assert_eq!(data["items"][0]["href"], "/en/destinations/kete-kesu");
    Ok(())
}

#[tokio::test]
async fn rambu_solo_lists_upcoming_ceremonies_soonest_first() -> Result<()> {
    let app = build_test_app()?;

    let data = app
        .server
        .get("/api/v1/carousels/rambu-solo")
        .await
        .json::<Value>()["data"]
        .clone();

    assert_eq!(data["key"], "rambu-solo");
    assert_eq!(
        titles(&data),
        ["Rambu Solo Rantepao", "Rambu Solo Sangalla"]
    );
    // Everything fits on one page: no arrows, no dots.
    assert_eq!(data["total_pages"], 1);
    assert_eq!(data["show_controls"], false);
    assert_eq!(data["dots"].as_array().map(Vec::len), Some(0));
    assert!(data["items"][0]["dates"].is_string());
    Ok(())
}

#[tokio::test]
async fn empty_carousel_renders_nothing() -> Result<()> {
    let app = build_test_app()?;

    let events: Value = app.server.get("/api/v1/events").await.json();
    for event in events["data"].as_array().expect("events") {
        let id = event["id"].as_str().expect("event id");
        app.server
            .delete(&format!("/api/v1/admin/content/events/{id}"))
            .await
            .assert_status_ok();
    }

    let data = app
        .server
        .get("/api/v1/carousels/rambu-solo")
        .await
        .json::<Value>()["data"]
        .clone();

    assert_eq!(data["total_pages"], 0);
    assert_eq!(data["show_controls"], false);
    assert_eq!(data["items"].as_array().map(Vec::len), Some(0));
    assert_eq!(data["dots"].as_array().map(Vec::len), Some(0));
    Ok(())
}

#[tokio::test]
async fn unknown_carousel_is_not_found() -> Result<()> {
    let app = build_test_app()?;

    app.server
        .get("/api/v1/carousels/hotels")
        .await
        .assert_status(StatusCode::NOT_FOUND);
    Ok(())
}

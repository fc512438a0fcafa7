//! Tests whether the 'health-check', home and static routes respond appropriately

use anyhow::Result;
use reqwest::{header::LOCATION, StatusCode};

use crate::helpers::TestApp;

#[tokio::test]
async fn healthcheck_ok() -> Result<()> {
    let app = TestApp::spawn().await?;

    let res = app.http_client.get(app.url("/health-check")).send().await?;

    assert!(res.status() == StatusCode::OK, "Healthcheck FAILED!");
    assert!(
        res.headers().contains_key("x-request-id"),
        "Response is missing the request id"
    );

    Ok(())
}

#[tokio::test]
async fn invalid_path_404() -> Result<()> {
    let app = TestApp::spawn().await?;

    let res = app.http_client.get(app.url("/invalidpath")).send().await?;

    assert!(
        res.status() == StatusCode::NOT_FOUND,
        "Invalid Path check FAILED!, expected: {}, got: {}",
        404,
        res.status().as_u16()
    );

    Ok(())
}

#[tokio::test]
async fn home_redirects_to_static_index() -> Result<()> {
    let app = TestApp::spawn().await?;

    let res = app.http_client.get(app.url("/")).send().await?;

    assert_eq!(res.status(), StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(
        res.headers().get(LOCATION).and_then(|l| l.to_str().ok()),
        Some("/static/index.html")
    );

    Ok(())
}

#[tokio::test]
async fn static_index_is_served() -> Result<()> {
    let app = TestApp::spawn().await?;

    let res = app
        .http_client
        .get(app.url("/static/index.html"))
        .send()
        .await?;

    assert_eq!(res.status(), StatusCode::OK);
    assert!(res.text().await?.contains("activities-list"));

    Ok(())
}

//! # Dashboard Tests
//!
//! Exercises the dashboard router against a temporary record directory.

use anyhow::Result;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use tempfile::TempDir;
use tower::ServiceExt;

use healmate::dashboard::router;
use healmate::store::{UserRecord, UserStore};

fn with_symptoms(symptoms: &str) -> UserRecord {
    UserRecord {
        name: Some("Test".to_string()),
        symptoms: Some(symptoms.to_string()),
        ..Default::default()
    }
}

async fn get(store: UserStore, uri: &str) -> Result<(StatusCode, Vec<u8>)> {
    let response = router(store)
        .oneshot(Request::builder().uri(uri).body(Body::empty())?)
        .await?;
    let status = response.status();
    let body = response.into_body().collect().await?.to_bytes().to_vec();
    Ok((status, body))
}

#[tokio::test]
async fn test_symptom_counts_match_stored_records() -> Result<()> {
    let tmp = TempDir::new()?;
    let store = UserStore::new(tmp.path());

    store.save("1", &with_symptoms("fever and cough")).await?;
    store.save("2", &with_symptoms("high fever")).await?;
    store.save("3", &with_symptoms("headache")).await?;
    store.save("4", &with_symptoms("stomach ache, diarrhea")).await?;
    store.save("5", &UserRecord::default()).await?;

    let (status, body) = get(store, "/api/symptoms").await?;
    assert_eq!(status, StatusCode::OK);

    let counts: serde_json::Value = serde_json::from_slice(&body)?;
    assert_eq!(
        counts,
        serde_json::json!({
            "cough": 1,
            "diarrhea": 1,
            "fever": 2,
            "headache": 1,
            "stomach ache": 1,
        })
    );
    Ok(())
}

#[tokio::test]
async fn test_counts_are_recomputed_per_request() -> Result<()> {
    let tmp = TempDir::new()?;
    let store = UserStore::new(tmp.path());

    let (_, body) = get(store.clone(), "/api/symptoms").await?;
    let counts: serde_json::Value = serde_json::from_slice(&body)?;
    assert_eq!(counts["fever"], 0);

    store.save("9", &with_symptoms("Fever")).await?;

    let (_, body) = get(store, "/api/symptoms").await?;
    let counts: serde_json::Value = serde_json::from_slice(&body)?;
    assert_eq!(counts["fever"], 1);
    Ok(())
}

#[tokio::test]
async fn test_malformed_record_returns_server_error() -> Result<()> {
    let tmp = TempDir::new()?;
    let store = UserStore::new(tmp.path());

    store.save("1", &with_symptoms("fever")).await?;
    std::fs::write(tmp.path().join("user_2.json"), "{\"symptoms\": ")?;

    let (status, _) = get(store, "/api/symptoms").await?;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    Ok(())
}

#[tokio::test]
async fn test_dashboard_page_is_html() -> Result<()> {
    let tmp = TempDir::new()?;

    let (status, body) = get(UserStore::new(tmp.path()), "/").await?;
    assert_eq!(status, StatusCode::OK);

    let page = String::from_utf8(body)?;
    assert!(page.contains("/api/symptoms"));
    Ok(())
}

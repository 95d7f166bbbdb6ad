//! # Symptom Dashboard
//!
//! Counts how many stored records mention each of five common symptom
//! keywords. Every request rescans the store directory; nothing is cached.
//!
//! Routes:
//! - `GET /` serves the HTML dashboard page
//! - `GET /api/symptoms` returns `{"keyword": count, ...}` for all keywords

use axum::{
    extract::State,
    http::StatusCode,
    response::{Html, Json},
    routing::get,
    Router,
};
use std::collections::BTreeMap;
use std::sync::Arc;

use crate::store::{UserRecord, UserStore};

/// Keywords counted by the dashboard
pub const SYMPTOM_KEYWORDS: [&str; 5] = ["fever", "cough", "headache", "stomach ache", "diarrhea"];

const DASHBOARD_PAGE: &str = include_str!("../templates/dashboard.html");

/// Keyword to number of records mentioning it
pub type SymptomCounts = BTreeMap<String, u64>;

/// Count keyword mentions across records
///
/// Each record adds at most one to each keyword. Matching is a
/// case-insensitive substring check on the `symptoms` field; a record without
/// symptoms counts as empty text.
pub fn count_symptoms(records: &[UserRecord]) -> SymptomCounts {
    let mut counts: SymptomCounts = SYMPTOM_KEYWORDS
        .iter()
        .map(|keyword| (keyword.to_string(), 0))
        .collect();

    for record in records {
        let symptoms = record.symptoms.as_deref().unwrap_or_default().to_lowercase();
        for keyword in SYMPTOM_KEYWORDS {
            if symptoms.contains(keyword) {
                *counts.entry(keyword.to_string()).or_default() += 1;
            }
        }
    }

    counts
}

#[derive(Clone)]
struct AppState {
    store: Arc<UserStore>,
}

/// Build the dashboard router over a record store
pub fn router(store: UserStore) -> Router {
    let state = AppState {
        store: Arc::new(store),
    };

    Router::new()
        .route("/", get(dashboard_page))
        .route("/api/symptoms", get(api_symptoms))
        .with_state(state)
}

async fn dashboard_page() -> Html<&'static str> {
    Html(DASHBOARD_PAGE)
}

async fn api_symptoms(
    State(state): State<AppState>,
) -> Result<Json<SymptomCounts>, (StatusCode, &'static str)> {
    match state.store.load_all().await {
        Ok(records) => {
            let counts = count_symptoms(&records);
            tracing::debug!(records = records.len(), "Symptom counts computed");
            Ok(Json(counts))
        }
        Err(e) => {
            tracing::error!("Symptom aggregation error: {:?}", e);
            Err((StatusCode::INTERNAL_SERVER_ERROR, "Internal error"))
        }
    }
}

use crate::cleaner::{deep_clean, select_result};
use crate::config::{Config, SOURCE_BY};
use crate::errors::AppError;
use crate::models::{HealthResponse, LookupQuery, LookupResponse};
use crate::services::VehicleApiService;
use axum::{
    extract::{Query, State},
    http::{header, HeaderValue, StatusCode},
    response::{Html, IntoResponse},
    Json,
};
use std::sync::Arc;

/// Shared application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    /// Application configuration.
    pub config: Config,
    /// Client for the upstream vehicle lookup API.
    pub vehicle_service: VehicleApiService,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let vehicle_service = VehicleApiService::new(&config);
        Self {
            config,
            vehicle_service,
        }
    }
}

/// Health check endpoint.
pub async fn health() -> (StatusCode, Json<HealthResponse>) {
    (
        StatusCode::OK,
        Json(HealthResponse {
            status: "healthy".to_string(),
            service: env!("CARGO_PKG_NAME").to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }),
    )
}

/// ANY /api/vehicle?rc=...
///
/// Looks up a registration code upstream, strips `credit`/`cached` keys from
/// the payload and wraps the selected result in a [`LookupResponse`].
///
/// A repeated `rc` uses its first value. A query string that cannot be
/// decoded is treated like a missing `rc`.
///
/// # Errors
///
/// * [`AppError::MissingRc`] (400) when `rc` is absent or empty.
/// * [`AppError::Upstream`] (500) on any request, parse, or shaping failure.
pub async fn vehicle_lookup(
    State(state): State<Arc<AppState>>,
    query: Option<Query<Vec<(String, String)>>>,
) -> Result<impl IntoResponse, AppError> {
    let params = query
        .map(|Query(pairs)| LookupQuery::from_pairs(pairs))
        .unwrap_or_default();
    let rc = params.rc().ok_or(AppError::MissingRc)?;

    let raw = state.vehicle_service.lookup(rc).await?;
    let cleaned = deep_clean(&raw);

    if cleaned.is_null() {
        return Err(AppError::Upstream(
            "Upstream returned an empty (null) body".to_string(),
        ));
    }

    let response = LookupResponse::new(rc, select_result(&cleaned));
    tracing::info!("Lookup succeeded for rc: {}", response.rc);

    Ok((
        StatusCode::OK,
        [(
            header::ACCESS_CONTROL_ALLOW_ORIGIN,
            HeaderValue::from_static("*"),
        )],
        Json(response),
    ))
}

/// GET /
///
/// Serves a minimal search page that calls `/api/vehicle` from the browser.
pub async fn index() -> Html<String> {
    Html(INDEX_HTML.replace("{{source_by}}", SOURCE_BY))
}

const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>Vehicle Lookup - {{source_by}}</title>
    <style>
        body { background: #000; color: #00eaff; font-family: Arial, sans-serif; text-align: center; padding-top: 80px; }
        input, button { padding: 10px; margin: 10px; border: none; border-radius: 5px; }
        button { background: #00eaff; color: #000; font-weight: bold; cursor: pointer; }
        pre { width: 360px; margin: auto; text-align: left; color: #0ff; }
    </style>
</head>
<body>
    <h1>Vehicle Lookup API</h1>
    <p>Powered by <b>{{source_by}}</b></p>

    <input id="rc" placeholder="Enter RC Number">
    <button onclick="lookup()">Search</button>

    <pre id="output"></pre>

    <script>
        async function lookup() {
            const rc = document.getElementById("rc").value;
            const res = await fetch("/api/vehicle?rc=" + encodeURIComponent(rc));
            document.getElementById("output").textContent =
                JSON.stringify(await res.json(), null, 2);
        }
    </script>
</body>
</html>
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_health() {
        let (status, Json(body)) = health().await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body.status, "healthy");
        assert_eq!(body.service, "vehicle-lookup-api");
    }

    #[tokio::test]
    async fn test_index_page_is_branded() {
        let Html(page) = index().await;
        assert!(page.contains("@OsintUchihaProBot"));
        assert!(page.contains("/api/vehicle?rc="));
        assert!(!page.contains("{{source_by}}"));
    }

    #[tokio::test]
    async fn test_missing_rc_short_circuits_before_upstream() {
        // Unroutable upstream: reaching it would produce an Upstream error instead.
        let state = Arc::new(AppState::new(Config {
            port: 0,
            upstream_base_url: "http://127.0.0.1:1".to_string(),
            api_key: "demo123".to_string(),
        }));

        let result = vehicle_lookup(State(state), Some(Query(Vec::new()))).await;
        assert_eq!(result.err(), Some(AppError::MissingRc));
    }
}

use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::{Query, State},
    http::{header::CONTENT_TYPE, HeaderValue},
    response::{IntoResponse, Response},
    Json,
};
use serde::Deserialize;
use tracing::{debug, error, warn};

use super::{error::ProxyError, state::AppState};

#[derive(Debug, Deserialize)]
pub struct AirportQuery {
    query: Option<String>,
}

/// `GET /api/search-airports?query=<q>`
pub async fn search_airports_handler(
    State(state): State<Arc<AppState>>,
    Query(params): Query<AirportQuery>,
) -> Result<Json<serde_json::Value>, ProxyError> {
    let query = params
        .query
        .filter(|q| !q.is_empty())
        .ok_or(ProxyError::MissingQuery)?;

    let mut url = state.airport_search_url.clone();
    url.query_pairs_mut().append_pair("query", &query);
    debug!("Proxying airport search to {url}");

    let response = state.client.get(url).send().await.map_err(|e| {
        error!("Airport search request failed: {e}");
        ProxyError::Internal(e)
    })?;

    let status = response.status();
    if !status.is_success() {
        warn!("Airport search upstream returned {status}");
        return Err(ProxyError::Upstream(status));
    }

    let airports = response.json::<serde_json::Value>().await.map_err(|e| {
        error!("Airport search response was not JSON: {e}");
        ProxyError::Internal(e)
    })?;

    Ok(Json(airports))
}

/// `POST /api/vendor`: forwards the JSON body and relays the upstream response verbatim.
pub async fn vendor_handler(
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> Result<Response, ProxyError> {
    if serde_json::from_slice::<serde_json::Value>(&body).is_err() {
        return Err(ProxyError::MalformedPayload);
    }

    debug!("Forwarding vendor registration to {}", state.vendor_url);

    let upstream = state
        .client
        .post(state.vendor_url.clone())
        .header(CONTENT_TYPE, "application/json")
        .body(body)
        .send()
        .await
        .map_err(|e| {
            error!("Vendor proxy request failed: {e}");
            ProxyError::VendorProxy {
                detail: e.to_string(),
            }
        })?;

    let status = upstream.status();
    let content_type = upstream
        .headers()
        .get(CONTENT_TYPE)
        .cloned()
        .unwrap_or_else(|| HeaderValue::from_static("text/plain"));

    let payload = upstream.bytes().await.map_err(|e| ProxyError::VendorProxy {
        detail: e.to_string(),
    })?;

    debug!("Vendor upstream responded {status}");
    Ok((status, [(CONTENT_TYPE, content_type)], payload).into_response())
}

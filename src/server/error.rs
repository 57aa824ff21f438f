use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ProxyError {
    #[error("Query parameter is required")]
    MissingQuery,

    #[error("Malformed payload")]
    MalformedPayload,

    #[error("Failed to fetch data from external API")]
    Upstream(StatusCode),

    #[error("Internal Server Error")]
    Internal(#[from] reqwest::Error),

    #[error("An internal server error occurred in the proxy.")]
    VendorProxy { detail: String },
}

impl IntoResponse for ProxyError {
    fn into_response(self) -> Response {
        let status = match &self {
            ProxyError::MissingQuery | ProxyError::MalformedPayload => StatusCode::BAD_REQUEST,
            ProxyError::Upstream(status) => *status,
            ProxyError::Internal(_) | ProxyError::VendorProxy { .. } => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        let body = match &self {
            ProxyError::VendorProxy { detail } => json!({
                "message": self.to_string(),
                "error": detail,
            }),
            _ => json!({ "error": self.to_string() }),
        };

        (status, Json(body)).into_response()
    }
}

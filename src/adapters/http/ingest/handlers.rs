//! HTTP handler for the ingest endpoint.
//!
//! Every response, including errors and preflight, is `200 OK` with the
//! permissive CORS headers and a JSON content type.

use axum::{
    body::Bytes,
    response::{IntoResponse, Response},
    Json,
};
use http::{header, HeaderValue, Method, StatusCode};
use serde::Serialize;
use serde_json::Value;

const ALLOW_HEADERS: &str = "Content-Type, Access-Control-Allow-Headers, Authorization, X-Requested-With";
const ALLOW_METHODS: &str = "GET, POST, OPTIONS";
const JSON_UTF8: &str = "application/json; charset=UTF-8";

/// `{status, message}` body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IngestResponse {
    pub status: &'static str,
    pub message: &'static str,
}

impl IngestResponse {
    pub fn received() -> Self {
        Self {
            status: "success",
            message: "Data received successfully",
        }
    }

    pub fn no_data() -> Self {
        Self {
            status: "error",
            message: "No data provided",
        }
    }

    pub fn invalid_method() -> Self {
        Self {
            status: "error",
            message: "Invalid request method",
        }
    }
}

/// ANY /api
pub async fn ingest(method: Method, body: Bytes) -> Response {
    let response = match method {
        Method::OPTIONS => StatusCode::OK.into_response(),
        Method::POST => {
            let payload = serde_json::from_slice::<Value>(&body).ok();
            let reply = match payload {
                Some(value) if !is_empty_payload(&value) => {
                    tracing::info!(bytes = body.len(), "Ingest payload received");
                    IngestResponse::received()
                }
                _ => IngestResponse::no_data(),
            };
            Json(reply).into_response()
        }
        _ => Json(IngestResponse::invalid_method()).into_response(),
    };
    with_ingest_headers(response)
}

/// Scalars that carry no data count as empty, as do empty arrays.
/// Any object, even `{}`, counts as data.
fn is_empty_payload(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty() || s == "0",
        Value::Array(items) => items.is_empty(),
        Value::Object(_) => false,
    }
}

fn with_ingest_headers(mut response: Response) -> Response {
    let headers = response.headers_mut();
    headers.insert(header::ACCESS_CONTROL_ALLOW_ORIGIN, HeaderValue::from_static("*"));
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_HEADERS,
        HeaderValue::from_static(ALLOW_HEADERS),
    );
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_METHODS,
        HeaderValue::from_static(ALLOW_METHODS),
    );
    headers.insert(header::CONTENT_TYPE, HeaderValue::from_static(JSON_UTF8));
    response
}

//! Uniform response envelope
//!
//! Every order endpoint answers with `{description, statusCode, data}`.
//! The envelope's `statusCode` is the status the response is sent with, and
//! each envelope is logged with the same triplet when it is rendered.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

/// Description used on every successful response
pub const OK_DESCRIPTION: &str = "ok";

/// Response body shared by success and failure paths
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Envelope<T> {
    pub description: String,
    pub status_code: u16,
    pub data: T,
}

impl<T> Envelope<T> {
    pub fn new(status: StatusCode, description: impl Into<String>, data: T) -> Self {
        Self {
            description: description.into(),
            status_code: status.as_u16(),
            data,
        }
    }

    /// 200 with the standard success description.
    pub fn ok(data: T) -> Self {
        Self::new(StatusCode::OK, OK_DESCRIPTION, data)
    }

    pub fn status(&self) -> StatusCode {
        StatusCode::from_u16(self.status_code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }
}

impl<T: Serialize> IntoResponse for Envelope<T> {
    fn into_response(self) -> Response {
        let status = self.status();
        log_envelope(&self);
        (status, Json(self)).into_response()
    }
}

/// Emit the description/status/data triplet at a level matching the status.
fn log_envelope<T: Serialize>(envelope: &Envelope<T>) {
    let data = serde_json::to_string(&envelope.data)
        .unwrap_or_else(|e| format!("<unserializable: {}>", e));
    let status = envelope.status_code;
    let description = envelope.description.as_str();

    if status >= 500 {
        tracing::error!(status, description, %data, "response");
    } else if status >= 400 {
        tracing::warn!(status, description, %data, "response");
    } else {
        tracing::info!(status, description, %data, "response");
    }
}

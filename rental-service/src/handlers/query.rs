//! List query parsing
//!
//! `page` and `limit` arrive as raw strings. They are parsed here, not by the
//! serde extractor, so malformed values become a [`PaginationError`] with a
//! useful message instead of a generic rejection.
//!
//! Policy:
//! - absent or empty `page` is 1
//! - absent or empty `limit` is [`PaginationConfig::default_limit`]
//! - non-numeric or non-positive values are rejected
//! - a `limit` above [`PaginationConfig::max_limit`] is rejected, never clamped

use serde::{Deserialize, Serialize};
use std::num::IntErrorKind;

use crate::config::PaginationConfig;
use crate::models::GetAllOrdersRequest;

/// Raw query string of `GET /orders`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListQuery {
    #[serde(default)]
    pub page: Option<String>,
    #[serde(default)]
    pub limit: Option<String>,
    #[serde(default)]
    pub search: Option<String>,
}

impl ListQuery {
    /// Parse pagination and build the storage query.
    pub fn into_request(
        self,
        bounds: &PaginationConfig,
    ) -> Result<GetAllOrdersRequest, PaginationError> {
        let page = parse_page(self.page.as_deref())?;
        let limit = parse_limit(self.limit.as_deref(), bounds)?;
        Ok(GetAllOrdersRequest::new(
            self.search.unwrap_or_default(),
            page,
            limit,
        ))
    }
}

/// Why a pagination parameter was rejected
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PaginationError {
    #[error("{param} must be an integer, got '{value}'")]
    NotANumber { param: &'static str, value: String },

    #[error("{param} must be greater than zero, got {value}")]
    NotPositive { param: &'static str, value: String },

    #[error("{param} is out of range: {value}")]
    OutOfRange { param: &'static str, value: String },

    #[error("limit must not exceed {max}, got {value}")]
    LimitTooLarge { value: u32, max: u32 },
}

impl PaginationError {
    /// Name of the offending parameter
    pub fn param(&self) -> &'static str {
        match self {
            Self::NotANumber { param, .. }
            | Self::NotPositive { param, .. }
            | Self::OutOfRange { param, .. } => param,
            Self::LimitTooLarge { .. } => "limit",
        }
    }
}

/// Parse the 1-based page number.
pub fn parse_page(raw: Option<&str>) -> Result<u32, PaginationError> {
    match present(raw) {
        None => Ok(1),
        Some(value) => parse_positive("page", value),
    }
}

/// Parse the page size, applying the configured default and maximum.
pub fn parse_limit(raw: Option<&str>, bounds: &PaginationConfig) -> Result<u32, PaginationError> {
    let limit = match present(raw) {
        None => return Ok(bounds.default_limit),
        Some(value) => parse_positive("limit", value)?,
    };

    if limit > bounds.max_limit {
        return Err(PaginationError::LimitTooLarge {
            value: limit,
            max: bounds.max_limit,
        });
    }

    Ok(limit)
}

fn present(raw: Option<&str>) -> Option<&str> {
    raw.map(str::trim).filter(|v| !v.is_empty())
}

fn parse_positive(param: &'static str, value: &str) -> Result<u32, PaginationError> {
    let parsed: i64 = value.parse().map_err(|e: std::num::ParseIntError| {
        let value = value.to_string();
        match e.kind() {
            IntErrorKind::PosOverflow => PaginationError::OutOfRange { param, value },
            IntErrorKind::NegOverflow => PaginationError::NotPositive { param, value },
            _ => PaginationError::NotANumber { param, value },
        }
    })?;

    if parsed <= 0 {
        return Err(PaginationError::NotPositive {
            param,
            value: parsed.to_string(),
        });
    }

    u32::try_from(parsed).map_err(|_| PaginationError::OutOfRange {
        param,
        value: parsed.to_string(),
    })
}

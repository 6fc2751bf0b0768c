//! # Response Formatting
//!
//! Output encodings and response shaping for the items API.

use std::fmt;
use std::str::FromStr;

use axum::http::{header, HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use super::errors::{RestError, RestResult};

/// Output encoding selected by the `format` query parameter
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Format {
    #[default]
    Json,
    Yaml,
}

impl Format {
    pub fn as_str(&self) -> &'static str {
        match self {
            Format::Json => "json",
            Format::Yaml => "yaml",
        }
    }

    pub fn content_type(&self) -> &'static str {
        match self {
            Format::Json => "application/json",
            Format::Yaml => "application/yaml",
        }
    }

    /// Serialize `value` in this format
    pub fn encode<T: Serialize + ?Sized>(&self, value: &T) -> RestResult<String> {
        match self {
            Format::Json => {
                serde_json::to_string(value).map_err(|e| RestError::Encoding(e.to_string()))
            }
            Format::Yaml => {
                serde_yaml::to_string(value).map_err(|e| RestError::Encoding(e.to_string()))
            }
        }
    }
}

impl FromStr for Format {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "json" => Ok(Format::Json),
            "yaml" => Ok(Format::Yaml),
            other => Err(format!(
                "invalid value {:?} for 'format' parameter (expected 'json' or 'yaml')",
                other
            )),
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An already-encoded body with its status and content type
#[derive(Debug, Clone)]
pub struct Encoded {
    pub status: StatusCode,
    pub format: Format,
    pub body: String,
}

impl Encoded {
    /// Encode `value`, failing with `RestError::Encoding`
    pub fn new<T: Serialize + ?Sized>(
        status: StatusCode,
        format: Format,
        value: &T,
    ) -> RestResult<Self> {
        let body = format.encode(value)?;
        Ok(Self { status, format, body })
    }

    pub fn ok<T: Serialize + ?Sized>(format: Format, value: &T) -> RestResult<Self> {
        Self::new(StatusCode::OK, format, value)
    }
}

impl IntoResponse for Encoded {
    fn into_response(self) -> Response {
        let mut response = (self.status, self.body).into_response();
        response.headers_mut().insert(
            header::CONTENT_TYPE,
            HeaderValue::from_static(self.format.content_type()),
        );
        response
    }
}

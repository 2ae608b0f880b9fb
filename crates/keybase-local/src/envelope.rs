//! The JSON request/response shapes of `keybase chat api`.
//!
//! Requests look like `{"method": "...", "params": {"options": {...}}}`.
//! Responses carry either `result` or `error.message`.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{Error, Result};

/// A request sent on the API subcommand's stdin.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Envelope<M, O> {
    /// API method name.
    pub method: M,
    /// Method parameters.
    pub params: Params<O>,
}

/// Wrapper placing the options under `params.options`.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Params<O> {
    /// Method options.
    pub options: O,
}

impl<M: Serialize, O: Serialize> Envelope<M, O> {
    /// Build an envelope for `method` with `options`.
    pub fn new(method: M, options: O) -> Self {
        Self {
            method,
            params: Params { options },
        }
    }

    /// Serialize to the JSON text written to the daemon.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

/// A response read from the API subcommand's stdout.
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
pub struct ApiResponse {
    /// Payload of a successful call.
    #[serde(default)]
    pub result: Option<Value>,
    /// Error details of a failed call.
    #[serde(default)]
    pub error: Option<ApiError>,
}

/// Error object embedded in an [`ApiResponse`].
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct ApiError {
    /// Human-readable error text from the daemon.
    pub message: String,
    /// Numeric error code, when the daemon supplies one.
    #[serde(default)]
    pub code: Option<i64>,
}

impl ApiResponse {
    /// Parse a raw response body.
    pub fn parse(body: &str) -> Result<Self> {
        Ok(serde_json::from_str(body)?)
    }

    /// Return `result`, or raise [`Error::Chat`] if `error` is populated.
    ///
    /// A response with neither field yields `Value::Null`.
    pub fn unwrap_result(self) -> Result<Value> {
        if let Some(error) = self.error {
            return Err(Error::Chat(error.message));
        }
        Ok(self.result.unwrap_or(Value::Null))
    }
}

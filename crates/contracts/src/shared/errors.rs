use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Failure reported by the hosted backend (network, server or RPC-level).
///
/// Recoverable: the user retries by refreshing or re-submitting, there is
/// no automatic retry loop on the client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Error)]
#[error("{code}: {message}")]
pub struct GatewayError {
    pub code: String,
    pub message: String,
}

impl GatewayError {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
        }
    }

    /// Transport-level failure (fetch rejected, connection dropped).
    pub fn network(message: impl Into<String>) -> Self {
        Self::new("NETWORK_ERROR", message)
    }

    /// Non-2xx HTTP status from the backend.
    pub fn http(status: u16) -> Self {
        Self::new("HTTP_ERROR", format!("HTTP {}", status))
    }

    /// Response body could not be decoded.
    pub fn decode(message: impl Into<String>) -> Self {
        Self::new("DECODE_ERROR", message)
    }
}

/// Malformed query rejected locally, before any network call.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("page must be >= 1")]
    PageOutOfRange,
    #[error("limit must be > 0")]
    LimitOutOfRange,
}

/// Gateway functions surface local validation through the same error
/// channel the UI already renders.
impl From<ValidationError> for GatewayError {
    fn from(err: ValidationError) -> Self {
        GatewayError::new("VALIDATION_ERROR", err.to_string())
    }
}

/// Response envelope used by the backend RPC functions.
///
/// Mirrors the `{ success, data, error }` shape every remote procedure
/// returns; `into_result` collapses it into a plain `Result`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RpcEnvelope<T> {
    pub success: bool,
    #[serde(default = "Option::default")]
    pub data: Option<T>,
    #[serde(default = "Option::default")]
    pub error: Option<GatewayError>,
}

impl<T> RpcEnvelope<T> {
    pub fn into_result(self) -> Result<T, GatewayError> {
        if self.success {
            self.data
                .ok_or_else(|| GatewayError::decode("missing data in successful response"))
        } else {
            Err(self
                .error
                .unwrap_or_else(|| GatewayError::new("RPC_ERROR", "unknown error")))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn envelope_success_yields_data() {
        let env = RpcEnvelope {
            success: true,
            data: Some(42),
            error: None,
        };
        assert_eq!(env.into_result().unwrap(), 42);
    }

    #[test]
    fn envelope_failure_yields_error() {
        let env: RpcEnvelope<i32> = RpcEnvelope {
            success: false,
            data: None,
            error: Some(GatewayError::new("RPC_ERROR", "boom")),
        };
        let err = env.into_result().unwrap_err();
        assert_eq!(err.code, "RPC_ERROR");
        assert_eq!(err.message, "boom");
    }

    #[test]
    fn envelope_success_without_data_is_decode_error() {
        let env: RpcEnvelope<i32> = RpcEnvelope {
            success: true,
            data: None,
            error: None,
        };
        assert_eq!(env.into_result().unwrap_err().code, "DECODE_ERROR");
    }

    #[test]
    fn validation_error_maps_to_gateway_error() {
        let err: GatewayError = ValidationError::PageOutOfRange.into();
        assert_eq!(err.code, "VALIDATION_ERROR");
        assert_eq!(err.message, "page must be >= 1");
    }

    #[test]
    fn deserializes_backend_shape() {
        let env: RpcEnvelope<Vec<i32>> =
            serde_json::from_str(r#"{"success":true,"data":[1,2,3]}"#).unwrap();
        assert_eq!(env.into_result().unwrap(), vec![1, 2, 3]);
    }
}

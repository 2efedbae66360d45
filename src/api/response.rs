use crate::errors::GatewayError;
use crate::models::wire::cell_to_string;
use serde::de::DeserializeOwned;
use serde_json::Value;

/// Outcome reported by the remote endpoint.
///
/// The wire shape is `{"success": bool, "data"?: .., "error"?: ".."}`; it is
/// turned into a proper variant as soon as it is parsed.
#[derive(Debug, Clone, PartialEq)]
pub enum ApiResponse<T> {
    Success(T),
    /// Remote refused the action; the message is absent when it sent none.
    Failure(Option<String>),
}

impl ApiResponse<Value> {
    pub fn from_value(value: Value) -> Result<Self, GatewayError> {
        let Value::Object(mut obj) = value else {
            return Err(GatewayError::Protocol(
                "response is not a JSON object".to_string(),
            ));
        };

        let success = obj
            .get("success")
            .and_then(Value::as_bool)
            .ok_or_else(|| GatewayError::Protocol("missing `success` flag".to_string()))?;

        if success {
            return Ok(ApiResponse::Success(obj.remove("data").unwrap_or(Value::Null)));
        }

        let message = obj
            .remove("error")
            .map(|e| cell_to_string(&e).trim().to_string())
            .filter(|m| !m.is_empty());

        Ok(ApiResponse::Failure(message))
    }

    /// Decode the success payload into `T`.
    pub fn decode<T: DeserializeOwned>(self) -> Result<ApiResponse<T>, GatewayError> {
        match self {
            ApiResponse::Success(data) => serde_json::from_value(data)
                .map(ApiResponse::Success)
                .map_err(|e| GatewayError::Protocol(e.to_string())),
            ApiResponse::Failure(msg) => Ok(ApiResponse::Failure(msg)),
        }
    }
}

impl<T> ApiResponse<T> {
    pub fn is_success(&self) -> bool {
        matches!(self, ApiResponse::Success(_))
    }

    /// `Failure` becomes `RemoteRejected`, using `fallback` when the remote
    /// gave no message. The resulting message is never empty.
    pub fn into_result(self, fallback: &str) -> Result<T, GatewayError> {
        match self {
            ApiResponse::Success(data) => Ok(data),
            ApiResponse::Failure(msg) => Err(GatewayError::RemoteRejected(
                msg.unwrap_or_else(|| fallback.to_string()),
            )),
        }
    }
}

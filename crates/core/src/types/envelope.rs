//! Uniform response envelope shared by every API operation.

use serde::{Deserialize, Serialize};

/// `{success, data, message?}` wrapper returned by every storefront API call.
///
/// Failures carry `data: null`; use `ApiResponse<()>` for those.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub data: T,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl<T> ApiResponse<T> {
    /// Wrap a successful result.
    #[must_use]
    pub const fn ok(data: T) -> Self {
        Self {
            success: true,
            data,
            message: None,
        }
    }

    /// Attach a human-readable message.
    #[must_use]
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }
}

impl ApiResponse<()> {
    /// A failed call with no payload.
    #[must_use]
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            data: (),
            message: Some(message.into()),
        }
    }
}

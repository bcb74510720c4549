//! Error kinds raised by the catalog API layer

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    /// A workspace or version name did not resolve
    #[error("{0}")]
    Resolution(String),

    /// Non-2xx response, transport failure or timeout
    #[error("{message}")]
    Upstream {
        status: Option<u16>,
        message: String,
    },

    /// Versioned workspace passed to an operation that needs a non-versioned one
    #[error("{0}")]
    UnsupportedConfiguration(String),

    /// A 2xx response whose body does not match the documented contract
    #[error("invalid response: {0}")]
    InvalidResponse(String),
}

impl ApiError {
    pub fn workspace_not_found(name: &str) -> Self {
        ApiError::Resolution(format!("workspace {} does not exist", name))
    }

    pub fn version_not_found(version: &str, workspace: &str) -> Self {
        ApiError::Resolution(format!(
            "version {} does not exist in workspace {}",
            version, workspace
        ))
    }

    pub fn versioning_unsupported() -> Self {
        ApiError::UnsupportedConfiguration(
            "workspaces with versioning enabled are not supported".to_string(),
        )
    }

    /// Build the error for a non-2xx status. 4xx responses carry the server's
    /// `error` field, anything else is reported by code only.
    pub fn from_status(status: u16, body: &str) -> Self {
        let message = if (400..500).contains(&status) {
            serde_json::from_str::<serde_json::Value>(body)
                .ok()
                .and_then(|json| json.get("error").and_then(|e| e.as_str()).map(str::to_string))
                .unwrap_or_else(|| {
                    if body.trim().is_empty() {
                        format!("request rejected, code {}", status)
                    } else {
                        body.to_string()
                    }
                })
        } else {
            format!("unexpected error, code {}", status)
        };

        ApiError::Upstream {
            status: Some(status),
            message,
        }
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Upstream { status, .. } => *status,
            _ => None,
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(error: reqwest::Error) -> Self {
        let message = if error.is_timeout() {
            format!("request timed out: {}", error)
        } else if error.is_decode() {
            return ApiError::InvalidResponse(error.to_string());
        } else {
            format!("request failed: {}", error)
        };

        ApiError::Upstream {
            status: error.status().map(|s| s.as_u16()),
            message,
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(error: serde_json::Error) -> Self {
        ApiError::InvalidResponse(error.to_string())
    }
}

use axum::http::StatusCode;
use thiserror::Error;

/// Failure modes of an upstream Odoo call
#[derive(Debug, Error)]
pub enum OdooError {
    /// API key missing from the process environment
    #[error("{var} is not configured")]
    MissingApiKey { var: String },

    /// Network-level failure before a response was received
    #[error("network error calling Odoo: {0}")]
    Network(#[from] reqwest::Error),

    /// Upstream answered with a non-success HTTP status
    #[error("Odoo returned HTTP {status}: {body}")]
    UpstreamStatus { status: u16, body: String },

    /// Upstream answered 200 but with a JSON-RPC error envelope
    #[error("{message}")]
    Protocol { message: String },

    /// Upstream result payload did not match the expected record shape
    #[error("failed to decode Odoo response: {0}")]
    Decode(#[from] serde_json::Error),
}

impl OdooError {
    /// HTTP status this error maps to at the handler boundary.
    ///
    /// A JSON-RPC error is the upstream rejecting our request, reported
    /// as a client error with its message; everything else is a server
    /// failure on our side of the proxy.
    pub fn status_code(&self) -> StatusCode {
        match self {
            OdooError::Protocol { .. } => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        let protocol = OdooError::Protocol {
            message: "boom".into(),
        };
        assert_eq!(protocol.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(protocol.to_string(), "boom");

        let missing = OdooError::MissingApiKey {
            var: "ODOO_API_KEY".into(),
        };
        assert_eq!(missing.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(missing.to_string(), "ODOO_API_KEY is not configured");

        let status = OdooError::UpstreamStatus {
            status: 502,
            body: "bad gateway".into(),
        };
        assert_eq!(status.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}

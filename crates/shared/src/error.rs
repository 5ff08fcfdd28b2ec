use thiserror::Error;

/// Why a user lookup failed. Each kind settles the call; none of them is retried.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    /// No HTTP response was obtained (DNS, refused or reset connection, broken body stream).
    #[error("transport failure: {reason}")]
    Transport { reason: String },
    /// A well-formed response with a status outside 200-299. The body is never read.
    #[error("{code}: {status_text}")]
    Http { code: u16, status_text: String },
    /// A 2xx response whose body is not a valid user payload.
    #[error("failed to parse response body: {reason}")]
    Parse { reason: String },
}

impl FetchError {
    pub fn transport(reason: impl Into<String>) -> Self {
        Self::Transport {
            reason: reason.into(),
        }
    }

    pub fn http(code: u16, status_text: impl Into<String>) -> Self {
        Self::Http {
            code,
            status_text: status_text.into(),
        }
    }

    pub fn parse(reason: impl Into<String>) -> Self {
        Self::Parse {
            reason: reason.into(),
        }
    }

    /// HTTP status carried by the failure, if a response was received at all.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::Http { code, .. } => Some(*code),
            Self::Transport { .. } | Self::Parse { .. } => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidUserId {
    #[error("user id must not be empty")]
    Empty,
    #[error("user id '{0}' is a dot path segment")]
    DotSegment(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn http_error_reads_as_code_and_status_text() {
        let err = FetchError::http(404, "Not Found");
        assert_eq!(err.to_string(), "404: Not Found");
        assert_eq!(err.status_code(), Some(404));
    }

    #[test]
    fn transport_and_parse_errors_carry_no_status() {
        assert_eq!(FetchError::transport("connection refused").status_code(), None);
        assert_eq!(FetchError::parse("expected value").status_code(), None);
        assert_eq!(
            FetchError::parse("expected value").to_string(),
            "failed to parse response body: expected value"
        );
    }
}

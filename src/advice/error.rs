//! Error types for advice providers.

use thiserror::Error;

/// Errors a provider can report for one fetch.
///
/// Details are kept as strings so the error can travel through the UI event
/// channel and be compared in tests.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AdviceError {
    /// Network, DNS, aborted connection, timeout, unreadable file.
    #[error("Transport failure: {detail}")]
    Transport { detail: String },

    /// Provider answered with a non-2xx status.
    #[error("Provider returned status {status}")]
    Status { status: u16 },

    /// Body was not JSON or lacked the advice text.
    #[error("Malformed response: {detail}")]
    Malformed { detail: String },

    /// Body was a valid but empty advice collection.
    #[error("Advice collection is empty")]
    EmptyDataset,
}

/// Coarse classification used by the controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    TransportFailure,
    MalformedResponse,
    EmptyDataset,
}

impl AdviceError {
    pub fn transport(detail: impl Into<String>) -> Self {
        AdviceError::Transport {
            detail: detail.into(),
        }
    }

    pub fn malformed(detail: impl Into<String>) -> Self {
        AdviceError::Malformed {
            detail: detail.into(),
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            AdviceError::Transport { .. } | AdviceError::Status { .. } => {
                ErrorKind::TransportFailure
            }
            AdviceError::Malformed { .. } => ErrorKind::MalformedResponse,
            AdviceError::EmptyDataset => ErrorKind::EmptyDataset,
        }
    }

    /// Whether triggering again may succeed without a reload.
    pub fn is_recoverable(&self) -> bool {
        self.kind() != ErrorKind::EmptyDataset
    }
}

impl From<reqwest::Error> for AdviceError {
    fn from(err: reqwest::Error) -> Self {
        if let Some(status) = err.status() {
            return AdviceError::Status {
                status: status.as_u16(),
            };
        }
        if err.is_timeout() {
            return AdviceError::transport(format!("request timed out: {}", err));
        }
        AdviceError::transport(err.to_string())
    }
}

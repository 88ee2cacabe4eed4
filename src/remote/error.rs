use thiserror::Error;

pub type RemoteResult<T> = Result<T, RemoteError>;

/// Failures of a single remote round trip.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RemoteError {
    #[error("transport failure: {message}")]
    Network { message: String },

    #[error("remote responded with HTTP {status}")]
    Status { status: u16 },

    #[error("malformed response body: {message}")]
    Decode { message: String },

    #[error("unusable endpoint: {message}")]
    Endpoint { message: String },
}

impl RemoteError {
    pub fn network(message: impl Into<String>) -> Self {
        Self::Network {
            message: message.into(),
        }
    }

    pub fn status(status: u16) -> Self {
        Self::Status { status }
    }

    pub fn decode(message: impl Into<String>) -> Self {
        Self::Decode {
            message: message.into(),
        }
    }

    pub fn endpoint(message: impl Into<String>) -> Self {
        Self::Endpoint {
            message: message.into(),
        }
    }

    pub fn not_found() -> Self {
        Self::status(404)
    }
}

#[cfg(feature = "http")]
impl From<reqwest::Error> for RemoteError {
    fn from(err: reqwest::Error) -> Self {
        if let Some(status) = err.status() {
            Self::status(status.as_u16())
        } else if err.is_decode() {
            Self::decode(err.to_string())
        } else {
            Self::network(err.to_string())
        }
    }
}

use crate::shapeshift::Operation;

/// Kind of an application-level error reported inside a 200 response body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiErrorKind {
    /// The service does not know the requested coin pair.
    UnknownPair,
    /// Any other message; carried verbatim.
    Generic,
}

#[derive(thiserror::Error, Debug)]
pub enum ShapeShiftError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Request failed due: \"{message}\".")]
    Transport {
        message: String,
        code: Option<u16>,
        #[source]
        source: reqwest::Error,
    },

    #[error("API error: {message}")]
    Api { kind: ApiErrorKind, message: String },

    #[error("Parse error: {0}")]
    ParseError(#[from] serde_json::Error),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("Operation {0} is not supported")]
    NotSupported(Operation),
}

impl ShapeShiftError {
    pub fn is_unknown_pair(&self) -> bool {
        matches!(
            self,
            ShapeShiftError::Api {
                kind: ApiErrorKind::UnknownPair,
                ..
            }
        )
    }

    pub fn is_not_supported(&self) -> bool {
        matches!(self, ShapeShiftError::NotSupported(_))
    }

    /// Message carried by an application-level error, verbatim from the body.
    pub fn api_message(&self) -> Option<&str> {
        match self {
            ShapeShiftError::Api { message, .. } => Some(message),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for ShapeShiftError {
    fn from(err: reqwest::Error) -> Self {
        ShapeShiftError::Transport {
            message: err.to_string(),
            code: err.status().map(|status| status.as_u16()),
            source: err,
        }
    }
}

pub type Result<T> = std::result::Result<T, ShapeShiftError>;

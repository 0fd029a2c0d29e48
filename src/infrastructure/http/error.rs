//! HTTP error mapping

use axum::http::StatusCode;

use crate::domain::value_objects::FixModeParseError;

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("Challenge rating '{0}' is not tabulated")]
    UnknownRating(String),
    #[error(transparent)]
    InvalidFixMode(#[from] FixModeParseError),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::UnknownRating(_) => StatusCode::NOT_FOUND,
            Self::InvalidFixMode(_) => StatusCode::BAD_REQUEST,
        }
    }
}

impl From<ApiError> for (StatusCode, String) {
    fn from(error: ApiError) -> Self {
        (error.status(), error.to_string())
    }
}

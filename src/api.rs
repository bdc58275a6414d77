//! The HTTP API. The pest detection service exposes this under `/api/`.

mod routes;
mod upload;

use axum::{
    extract::{
        multipart::{MultipartError, MultipartRejection},
        Request,
    },
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde_json::json;
use strum_macros::IntoStaticStr;
use thiserror::Error;
use tower::ServiceExt;

/// Routes a request to an API endpoint.
pub(super) async fn handle(request: Request) -> impl IntoResponse {
    // `oneshot` consumes the router. Cloning it is cheap and needs no lock.
    routes::ROUTER.clone().oneshot(request).await
}

/// The result of an API route handler.
pub(crate) type Response<T> = Result<(StatusCode, Json<T>), Error>;

/// An API error.
#[derive(Error, IntoStaticStr, Debug)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub(crate) enum Error {
    /// The requested API route doesn't exist.
    #[error("The requested API route doesn't exist.")]
    RouteNotFound,

    /// The request body couldn't be read as `multipart/form-data`.
    #[error("Invalid multipart form: {source}")]
    MultipartInvalid {
        /// The status code axum assigns to the failure.
        status: StatusCode,

        /// The underlying rejection or stream error.
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// The multipart form has no `image` field.
    #[error("The form field `image` is required.")]
    ImageFieldMissing,

    /// The uploaded bytes couldn't be decoded as an image.
    #[error("The uploaded file isn't a valid image: {0}")]
    ImageDecodeFailed(#[from] image::ImageError),

    /// An unexpected internal error occurred.
    #[error("An internal error occurred.")]
    Internal(#[from] tokio::task::JoinError),
}

impl Error {
    /// Gets the HTTP status code corresponding to the API error.
    pub(crate) fn status(&self) -> StatusCode {
        match self {
            Self::RouteNotFound => StatusCode::NOT_FOUND,
            Self::MultipartInvalid { status, .. } => *status,
            Self::ImageFieldMissing => StatusCode::UNPROCESSABLE_ENTITY,
            Self::ImageDecodeFailed(_) | Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Gets the error's machine-readable code, e.g. `ROUTE_NOT_FOUND`.
    pub(crate) fn code(&self) -> &'static str {
        self.into()
    }
}

impl From<MultipartRejection> for Error {
    fn from(rejection: MultipartRejection) -> Self {
        Self::MultipartInvalid {
            status: rejection.status(),
            source: Box::new(rejection),
        }
    }
}

impl From<MultipartError> for Error {
    fn from(error: MultipartError) -> Self {
        Self::MultipartInvalid {
            status: error.status(),
            source: Box::new(error),
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> axum::response::Response {
        (
            self.status(),
            Json(json!({
                "code": self.code(),
                "message": self.to_string(),
            })),
        )
            .into_response()
    }
}

//! An HTTP resource that detects pests in an uploaded plant image.

use axum::{
    extract::{multipart::MultipartRejection, Multipart},
    http::StatusCode,
    Json,
};
use axum_macros::debug_handler;
use serde::Serialize;

use crate::api::{upload::UploadedImage, Response};

/// The name of the multipart form field containing the uploaded image.
const IMAGE_FIELD: &str = "image";

/// Validates an uploaded image and returns the pests detected in it.
///
/// No detection model is wired in yet, so every valid image yields the same
/// [`Prediction::PLACEHOLDER`].
///
/// # Errors
///
/// See [`crate::api::Error`].
#[debug_handler]
pub(crate) async fn post(
    multipart: Result<Multipart, MultipartRejection>,
) -> Response<PostResponse> {
    let mut multipart = multipart?;

    UploadedImage::from_field(&mut multipart, IMAGE_FIELD)
        .await?
        .validate()
        .await?;

    Ok((
        StatusCode::OK,
        Json(PostResponse {
            predictions: vec![Prediction::PLACEHOLDER],
        }),
    ))
}

/// A `POST` response body for this API route.
#[derive(Serialize, Clone, PartialEq, Debug)]
pub(crate) struct PostResponse {
    /// Every detection found in the image.
    pub(crate) predictions: Vec<Prediction>,
}

/// A single pest detection.
#[derive(Serialize, Clone, Copy, PartialEq, Debug)]
pub(crate) struct Prediction {
    /// The label of the detected pest or disease.
    pub(crate) class: &'static str,

    /// The detection's confidence, from 0 to 1.
    pub(crate) score: f64,

    /// The detection's bounding box in pixels, as `[x_min, y_min, x_max, y_max]`.
    pub(crate) bbox: [u32; 4],
}

impl Prediction {
    /// The fixed detection returned for every valid image.
    pub(crate) const PLACEHOLDER: Self = Self {
        class: "Powdery Mildew",
        score: 0.92,
        bbox: [10, 10, 100, 100],
    };
}

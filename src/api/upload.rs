//! See [`UploadedImage`].

use axum::{body::Bytes, extract::Multipart};

use crate::api;

/// The raw bytes of an image uploaded through a multipart form. They're dropped as soon as the
/// image has been validated.
#[derive(Debug)]
pub(crate) struct UploadedImage(Bytes);

impl UploadedImage {
    /// Reads the full contents of the last file field named `field_name`. Plain text fields and
    /// fields with other names are skipped.
    ///
    /// # Errors
    ///
    /// Returns [`api::Error::ImageFieldMissing`] if the form has no such file field, or
    /// [`api::Error::MultipartInvalid`] if the form is malformed.
    pub(crate) async fn from_field(
        multipart: &mut Multipart,
        field_name: &str,
    ) -> Result<Self, api::Error> {
        let mut upload = None;

        while let Some(field) = multipart.next_field().await? {
            // Only parts with a filename are uploaded files.
            if field.name() == Some(field_name) && field.file_name().is_some() {
                upload = Some(Self(field.bytes().await?));
            }
        }

        upload.ok_or(api::Error::ImageFieldMissing)
    }

    /// Checks that the bytes decode as a raster image in any format the `image` crate can detect,
    /// discarding the decoded pixels.
    ///
    /// Decoding runs on the blocking thread pool so it can't stall other requests.
    ///
    /// # Errors
    ///
    /// Returns [`api::Error::ImageDecodeFailed`] if the bytes aren't a well-formed image.
    pub(crate) async fn validate(self) -> Result<(), api::Error> {
        tokio::task::spawn_blocking(move || image::load_from_memory(&self.0)).await??;

        Ok(())
    }
}

//! Multipart form parsing for admin write endpoints.
//!
//! Write requests for media-bearing resources arrive as `multipart/form-data`
//! with a `payload` part carrying the JSON body and zero or more named file
//! parts (`image`, `avatar`, `cover`). Parts without a filename are treated
//! as text fields; only `payload` is recognized among them.

use std::collections::HashMap;

use axum::extract::Multipart;
use serde::de::DeserializeOwned;
use serde_json::json;
use validator::Validate;

use crate::domain::repositories::PendingUpload;
use crate::error::AppError;

/// A parsed multipart request: the raw JSON payload plus uploaded files
/// keyed by part name.
pub struct AdminForm {
    payload: String,
    files: HashMap<String, PendingUpload>,
}

impl AdminForm {
    /// Reads every part of the multipart stream.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] when the stream is malformed or the
    /// `payload` part is missing.
    pub async fn read(mut multipart: Multipart) -> Result<Self, AppError> {
        let mut payload = None;
        let mut files = HashMap::new();

        while let Some(field) = multipart.next_field().await.map_err(|e| {
            AppError::bad_request(
                "Malformed multipart request",
                json!({ "reason": e.to_string() }),
            )
        })? {
            let name = field.name().unwrap_or_default().to_string();

            if let Some(file_name) = field.file_name() {
                let file_name = file_name.to_string();
                let content_type = field.content_type().map(str::to_string);
                let bytes = field.bytes().await.map_err(|e| {
                    AppError::bad_request(
                        "Failed to read uploaded file",
                        json!({ "part": name, "reason": e.to_string() }),
                    )
                })?;
                files.insert(
                    name,
                    PendingUpload {
                        file_name,
                        content_type,
                        bytes: bytes.to_vec(),
                    },
                );
            } else if name == "payload" {
                payload = Some(field.text().await.map_err(|e| {
                    AppError::bad_request(
                        "Failed to read payload part",
                        json!({ "reason": e.to_string() }),
                    )
                })?);
            }
        }

        let payload = payload.ok_or_else(|| {
            AppError::bad_request(
                "Missing payload part",
                json!({ "expected": "multipart part named 'payload' with a JSON body" }),
            )
        })?;

        Ok(Self { payload, files })
    }

    /// Deserializes and validates the `payload` part.
    pub fn payload<T>(&self) -> Result<T, AppError>
    where
        T: DeserializeOwned + Validate,
    {
        let value: T = serde_json::from_str(&self.payload).map_err(|e| {
            AppError::bad_request("Invalid JSON payload", json!({ "reason": e.to_string() }))
        })?;
        value.validate()?;
        Ok(value)
    }

    /// Takes the uploaded file for `part`, if one was sent.
    pub fn take_file(&mut self, part: &str) -> Option<PendingUpload> {
        self.files.remove(part)
    }
}

//! DTOs for the certificates admin endpoints.

use chrono::NaiveDate;
use serde::Deserialize;
use validator::Validate;

use crate::domain::entities::CertificateDraft;

/// The `payload` part of a certificate create/update request.
#[derive(Debug, Deserialize, Validate)]
pub struct CertificatePayload {
    #[validate(length(min = 1, max = 200, message = "Title must be 1-200 characters"))]
    pub title: String,

    #[validate(length(min = 1, max = 200, message = "Issuer must be 1-200 characters"))]
    pub issuer: String,

    pub description: Option<String>,

    /// Image URL. May be absent when a file part accompanies the request.
    pub image: Option<String>,

    #[validate(url(message = "Invalid URL format"))]
    pub certificate_url: Option<String>,

    pub issue_date: Option<NaiveDate>,
}

impl CertificatePayload {
    pub fn into_draft(self) -> CertificateDraft {
        CertificateDraft {
            title: self.title,
            issuer: self.issuer,
            description: self.description,
            image: self.image,
            certificate_url: self.certificate_url,
            issue_date: self.issue_date,
        }
    }
}

//! Certificate entity shown in the public certificate gallery.

use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;

use crate::domain::collection::Orderable;
use crate::domain::repositories::UploadTarget;

/// A certification with issuer, optional preview image, and source URL.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct Certificate {
    pub id: String,
    pub title: String,
    pub issuer: String,
    pub description: Option<String>,
    /// Public URL of the certificate preview image, if any.
    pub image: Option<String>,
    pub certificate_url: Option<String>,
    pub issue_date: Option<NaiveDate>,
    pub display_order: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Orderable for Certificate {
    fn id(&self) -> &str {
        &self.id
    }
    fn display_order(&self) -> i32 {
        self.display_order
    }
    fn set_display_order(&mut self, order: i32) {
        self.display_order = order;
    }
}

/// Input data for creating or updating a certificate.
#[derive(Debug, Clone)]
pub struct CertificateDraft {
    pub title: String,
    pub issuer: String,
    pub description: Option<String>,
    pub image: Option<String>,
    pub certificate_url: Option<String>,
    pub issue_date: Option<NaiveDate>,
}

impl UploadTarget for CertificateDraft {
    fn attach_upload(&mut self, url: String) {
        self.image = Some(url);
    }
}

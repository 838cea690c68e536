//! Shared test fixtures: in-memory store implementations and state builders.
//!
//! Handler tests run against the real services wired to these stores, so
//! they exercise the full path from HTTP request to persistence contract
//! without a database.

#![allow(dead_code)]

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use async_trait::async_trait;
use chrono::Utc;
use serde_json::json;
use tokio::sync::Mutex;

use portfolio_backend::AppState;
use portfolio_backend::application::services::{
    CollectionService, ProfileService, SessionService, hmac_hex,
};
use portfolio_backend::domain::entities::{
    Certificate, CertificateDraft, Profile, ProfileDraft, Project, ProjectDraft, Skill, SkillDraft,
    SocialLink, SocialLinkDraft,
};
use portfolio_backend::domain::repositories::{
    Bucket, CollectionStore, FileStore, PendingUpload, ProfileStore,
};
use portfolio_backend::error::AppError;

pub const TEST_PASSWORD: &str = "correct horse";

// ─── Skills ──────────────────────────────────────────────────────────────────

pub struct InMemorySkillStore {
    pub rows: Mutex<Vec<Skill>>,
    next_id: AtomicUsize,
    /// When set, `set_display_orders` fails to exercise the rollback path.
    pub fail_set_orders: AtomicBool,
}

impl InMemorySkillStore {
    pub fn new() -> Self {
        Self {
            rows: Mutex::new(Vec::new()),
            next_id: AtomicUsize::new(1),
            fail_set_orders: AtomicBool::new(false),
        }
    }

    pub async fn seed(&self, names: &[&str]) {
        let mut rows = self.rows.lock().await;
        for (i, name) in names.iter().enumerate() {
            let n = self.next_id.fetch_add(1, Ordering::SeqCst);
            rows.push(Skill {
                id: format!("skill-{n}"),
                name: name.to_string(),
                level: 50,
                icon: None,
                display_order: i as i32,
                created_at: Utc::now(),
                updated_at: Utc::now(),
            });
        }
    }
}

#[async_trait]
impl CollectionStore<Skill, SkillDraft> for InMemorySkillStore {
    async fn fetch_all(&self) -> Result<Vec<Skill>, AppError> {
        let mut rows = self.rows.lock().await.clone();
        rows.sort_by_key(|r| r.display_order);
        Ok(rows)
    }

    async fn insert(&self, draft: SkillDraft) -> Result<Skill, AppError> {
        let mut rows = self.rows.lock().await;
        let n = self.next_id.fetch_add(1, Ordering::SeqCst);
        let order = rows.iter().map(|r| r.display_order).max().unwrap_or(-1) + 1;
        let skill = Skill {
            id: format!("skill-{n}"),
            name: draft.name,
            level: draft.level,
            icon: draft.icon,
            display_order: order,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };
        rows.push(skill.clone());
        Ok(skill)
    }

    async fn update(&self, id: &str, draft: SkillDraft) -> Result<(), AppError> {
        let mut rows = self.rows.lock().await;
        let row = rows.iter_mut().find(|r| r.id == id).ok_or_else(|| {
            AppError::not_found("Skill not found", json!({ "id": id }))
        })?;
        row.name = draft.name;
        row.level = draft.level;
        row.icon = draft.icon;
        row.updated_at = Utc::now();
        Ok(())
    }

    async fn delete(&self, id: &str) -> Result<(), AppError> {
        let mut rows = self.rows.lock().await;
        let before = rows.len();
        rows.retain(|r| r.id != id);
        if rows.len() == before {
            return Err(AppError::not_found(
                "Skill not found",
                json!({ "id": id }),
            ));
        }
        Ok(())
    }

    async fn set_display_orders(&self, orders: &[(String, i32)]) -> Result<(), AppError> {
        if self.fail_set_orders.load(Ordering::SeqCst) {
            return Err(AppError::internal(
                "Simulated bulk update failure",
                json!({}),
            ));
        }
        let mut rows = self.rows.lock().await;
        for (id, order) in orders {
            if let Some(row) = rows.iter_mut().find(|r| &r.id == id) {
                row.display_order = *order;
            }
        }
        Ok(())
    }
}

// ─── Projects ────────────────────────────────────────────────────────────────

pub struct InMemoryProjectStore {
    pub rows: Mutex<Vec<Project>>,
    next_id: AtomicUsize,
}

impl InMemoryProjectStore {
    pub fn new() -> Self {
        Self {
            rows: Mutex::new(Vec::new()),
            next_id: AtomicUsize::new(1),
        }
    }
}

#[async_trait]
impl CollectionStore<Project, ProjectDraft> for InMemoryProjectStore {
    async fn fetch_all(&self) -> Result<Vec<Project>, AppError> {
        let mut rows = self.rows.lock().await.clone();
        rows.sort_by_key(|r| r.display_order);
        Ok(rows)
    }

    async fn insert(&self, draft: ProjectDraft) -> Result<Project, AppError> {
        let mut rows = self.rows.lock().await;
        let n = self.next_id.fetch_add(1, Ordering::SeqCst);
        let order = rows.iter().map(|r| r.display_order).max().unwrap_or(-1) + 1;
        let project = Project {
            id: format!("project-{n}"),
            title: draft.title,
            description: draft.description,
            image: draft.image,
            technologies: draft.technologies,
            demo_url: draft.demo_url,
            github_url: draft.github_url,
            display_order: order,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };
        rows.push(project.clone());
        Ok(project)
    }

    async fn update(&self, id: &str, draft: ProjectDraft) -> Result<(), AppError> {
        let mut rows = self.rows.lock().await;
        let row = rows.iter_mut().find(|r| r.id == id).ok_or_else(|| {
            AppError::not_found("Project not found", json!({ "id": id }))
        })?;
        row.title = draft.title;
        row.description = draft.description;
        row.image = draft.image;
        row.technologies = draft.technologies;
        row.demo_url = draft.demo_url;
        row.github_url = draft.github_url;
        row.updated_at = Utc::now();
        Ok(())
    }

    async fn delete(&self, id: &str) -> Result<(), AppError> {
        let mut rows = self.rows.lock().await;
        let before = rows.len();
        rows.retain(|r| r.id != id);
        if rows.len() == before {
            return Err(AppError::not_found(
                "Project not found",
                json!({ "id": id }),
            ));
        }
        Ok(())
    }

    async fn set_display_orders(&self, orders: &[(String, i32)]) -> Result<(), AppError> {
        let mut rows = self.rows.lock().await;
        for (id, order) in orders {
            if let Some(row) = rows.iter_mut().find(|r| &r.id == id) {
                row.display_order = *order;
            }
        }
        Ok(())
    }
}

// ─── Certificates ────────────────────────────────────────────────────────────

pub struct InMemoryCertificateStore {
    pub rows: Mutex<Vec<Certificate>>,
    next_id: AtomicUsize,
}

impl InMemoryCertificateStore {
    pub fn new() -> Self {
        Self {
            rows: Mutex::new(Vec::new()),
            next_id: AtomicUsize::new(1),
        }
    }

    pub async fn seed(&self, titles: &[&str]) {
        let mut rows = self.rows.lock().await;
        for (i, title) in titles.iter().enumerate() {
            let n = self.next_id.fetch_add(1, Ordering::SeqCst);
            rows.push(Certificate {
                id: format!("cert-{n}"),
                title: title.to_string(),
                issuer: "Acme Academy".to_string(),
                description: None,
                image: None,
                certificate_url: None,
                issue_date: None,
                display_order: i as i32,
                created_at: Utc::now(),
                updated_at: Utc::now(),
            });
        }
    }
}

#[async_trait]
impl CollectionStore<Certificate, CertificateDraft> for InMemoryCertificateStore {
    async fn fetch_all(&self) -> Result<Vec<Certificate>, AppError> {
        let mut rows = self.rows.lock().await.clone();
        rows.sort_by_key(|r| r.display_order);
        Ok(rows)
    }

    async fn insert(&self, draft: CertificateDraft) -> Result<Certificate, AppError> {
        let mut rows = self.rows.lock().await;
        let n = self.next_id.fetch_add(1, Ordering::SeqCst);
        let order = rows.iter().map(|r| r.display_order).max().unwrap_or(-1) + 1;
        let certificate = Certificate {
            id: format!("cert-{n}"),
            title: draft.title,
            issuer: draft.issuer,
            description: draft.description,
            image: draft.image,
            certificate_url: draft.certificate_url,
            issue_date: draft.issue_date,
            display_order: order,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };
        rows.push(certificate.clone());
        Ok(certificate)
    }

    async fn update(&self, id: &str, draft: CertificateDraft) -> Result<(), AppError> {
        let mut rows = self.rows.lock().await;
        let row = rows.iter_mut().find(|r| r.id == id).ok_or_else(|| {
            AppError::not_found("Certificate not found", json!({ "id": id }))
        })?;
        row.title = draft.title;
        row.issuer = draft.issuer;
        row.description = draft.description;
        row.image = draft.image;
        row.certificate_url = draft.certificate_url;
        row.issue_date = draft.issue_date;
        row.updated_at = Utc::now();
        Ok(())
    }

    async fn delete(&self, id: &str) -> Result<(), AppError> {
        let mut rows = self.rows.lock().await;
        let before = rows.len();
        rows.retain(|r| r.id != id);
        if rows.len() == before {
            return Err(AppError::not_found(
                "Certificate not found",
                json!({ "id": id }),
            ));
        }
        Ok(())
    }

    async fn set_display_orders(&self, orders: &[(String, i32)]) -> Result<(), AppError> {
        let mut rows = self.rows.lock().await;
        for (id, order) in orders {
            if let Some(row) = rows.iter_mut().find(|r| &r.id == id) {
                row.display_order = *order;
            }
        }
        Ok(())
    }
}

// ─── Social links ────────────────────────────────────────────────────────────

pub struct InMemorySocialLinkStore {
    pub rows: Mutex<Vec<SocialLink>>,
    next_id: AtomicUsize,
}

impl InMemorySocialLinkStore {
    pub fn new() -> Self {
        Self {
            rows: Mutex::new(Vec::new()),
            next_id: AtomicUsize::new(1),
        }
    }

    pub async fn seed(&self, platforms: &[&str]) {
        let mut rows = self.rows.lock().await;
        for (i, platform) in platforms.iter().enumerate() {
            let n = self.next_id.fetch_add(1, Ordering::SeqCst);
            rows.push(SocialLink {
                id: format!("link-{n}"),
                platform: platform.to_string(),
                url: format!("https://example.com/{platform}"),
                icon: None,
                display_order: i as i32,
                created_at: Utc::now(),
                updated_at: Utc::now(),
            });
        }
    }
}

#[async_trait]
impl CollectionStore<SocialLink, SocialLinkDraft> for InMemorySocialLinkStore {
    async fn fetch_all(&self) -> Result<Vec<SocialLink>, AppError> {
        let mut rows = self.rows.lock().await.clone();
        rows.sort_by_key(|r| r.display_order);
        Ok(rows)
    }

    async fn insert(&self, draft: SocialLinkDraft) -> Result<SocialLink, AppError> {
        let mut rows = self.rows.lock().await;
        let n = self.next_id.fetch_add(1, Ordering::SeqCst);
        let order = rows.iter().map(|r| r.display_order).max().unwrap_or(-1) + 1;
        let link = SocialLink {
            id: format!("link-{n}"),
            platform: draft.platform,
            url: draft.url,
            icon: draft.icon,
            display_order: order,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };
        rows.push(link.clone());
        Ok(link)
    }

    async fn update(&self, id: &str, draft: SocialLinkDraft) -> Result<(), AppError> {
        let mut rows = self.rows.lock().await;
        let row = rows.iter_mut().find(|r| r.id == id).ok_or_else(|| {
            AppError::not_found("Social link not found", json!({ "id": id }))
        })?;
        row.platform = draft.platform;
        row.url = draft.url;
        row.icon = draft.icon;
        row.updated_at = Utc::now();
        Ok(())
    }

    async fn delete(&self, id: &str) -> Result<(), AppError> {
        let mut rows = self.rows.lock().await;
        let before = rows.len();
        rows.retain(|r| r.id != id);
        if rows.len() == before {
            return Err(AppError::not_found(
                "Social link not found",
                json!({ "id": id }),
            ));
        }
        Ok(())
    }

    async fn set_display_orders(&self, orders: &[(String, i32)]) -> Result<(), AppError> {
        let mut rows = self.rows.lock().await;
        for (id, order) in orders {
            if let Some(row) = rows.iter_mut().find(|r| &r.id == id) {
                row.display_order = *order;
            }
        }
        Ok(())
    }
}

// ─── Profile ─────────────────────────────────────────────────────────────────

pub struct InMemoryProfileStore {
    pub row: Mutex<Profile>,
}

impl InMemoryProfileStore {
    pub fn new() -> Self {
        Self {
            row: Mutex::new(Profile {
                id: "profile-1".to_string(),
                name: "Test Owner".to_string(),
                title: "Engineer".to_string(),
                description: "Short description".to_string(),
                bio: "Longer bio".to_string(),
                avatar_url: None,
                cover_image: None,
                location: None,
                email: None,
                phone: None,
                linkedin_url: None,
                github_url: None,
                resume_url: None,
                updated_at: Utc::now(),
            }),
        }
    }
}

#[async_trait]
impl ProfileStore for InMemoryProfileStore {
    async fn get(&self) -> Result<Profile, AppError> {
        Ok(self.row.lock().await.clone())
    }

    async fn update(&self, draft: ProfileDraft) -> Result<(), AppError> {
        let mut row = self.row.lock().await;
        row.name = draft.name;
        row.title = draft.title;
        row.description = draft.description;
        row.bio = draft.bio;
        row.avatar_url = draft.avatar_url;
        row.cover_image = draft.cover_image;
        row.location = draft.location;
        row.email = draft.email;
        row.phone = draft.phone;
        row.linkedin_url = draft.linkedin_url;
        row.github_url = draft.github_url;
        row.resume_url = draft.resume_url;
        row.updated_at = Utc::now();
        Ok(())
    }
}

// ─── File storage ────────────────────────────────────────────────────────────

/// File store that records uploads instead of writing to disk.
pub struct RecordingFileStore {
    /// `(bucket, file_name)` of each successful upload.
    pub uploads: Mutex<Vec<(String, String)>>,
    /// When set, `put` fails to exercise the upload-abort path.
    pub fail: AtomicBool,
}

impl RecordingFileStore {
    pub fn new() -> Self {
        Self {
            uploads: Mutex::new(Vec::new()),
            fail: AtomicBool::new(false),
        }
    }
}

#[async_trait]
impl FileStore for RecordingFileStore {
    async fn put(&self, upload: PendingUpload, bucket: Bucket) -> Result<String, AppError> {
        if self.fail.load(Ordering::SeqCst) {
            return Err(AppError::upload(
                "Simulated storage outage",
                json!({ "file_name": upload.file_name }),
            ));
        }
        self.uploads
            .lock()
            .await
            .push((bucket.as_str().to_string(), upload.file_name.clone()));
        Ok(format!("/uploads/{}/{}", bucket.as_str(), upload.file_name))
    }
}

// ─── State builder ───────────────────────────────────────────────────────────

pub struct TestContext {
    pub state: AppState,
    pub skills: Arc<InMemorySkillStore>,
    pub projects: Arc<InMemoryProjectStore>,
    pub certificates: Arc<InMemoryCertificateStore>,
    pub social_links: Arc<InMemorySocialLinkStore>,
    pub profile: Arc<InMemoryProfileStore>,
    pub files: Arc<RecordingFileStore>,
}

/// Builds an [`AppState`] wired to in-memory stores.
///
/// The session service accepts [`TEST_PASSWORD`] with a ten-minute TTL.
pub fn build_state() -> TestContext {
    let skills = Arc::new(InMemorySkillStore::new());
    let projects = Arc::new(InMemoryProjectStore::new());
    let certificates = Arc::new(InMemoryCertificateStore::new());
    let social_links = Arc::new(InMemorySocialLinkStore::new());
    let profile = Arc::new(InMemoryProfileStore::new());
    let files = Arc::new(RecordingFileStore::new());

    let secret = "test-signing-secret".to_string();
    let password_hash = hmac_hex(&secret, TEST_PASSWORD);
    let sessions = Arc::new(SessionService::new(secret, password_hash, 600));

    let state = AppState {
        skills: Arc::new(CollectionService::new(
            "skills",
            skills.clone(),
            files.clone(),
        )),
        projects: Arc::new(CollectionService::new(
            "projects",
            projects.clone(),
            files.clone(),
        )),
        certificates: Arc::new(CollectionService::new(
            "certificates",
            certificates.clone(),
            files.clone(),
        )),
        social_links: Arc::new(CollectionService::new(
            "social_links",
            social_links.clone(),
            files.clone(),
        )),
        profile: Arc::new(ProfileService::new(profile.clone(), files.clone())),
        sessions,
    };

    TestContext {
        state,
        skills,
        projects,
        certificates,
        social_links,
        profile,
        files,
    }
}

//! The site-settings cache and image gallery operations.
//!
//! The settings record is fetched once and cached for the session; every
//! field-level change is applied in memory and persisted as a whole-record
//! upsert.  A failed save keeps the in-memory value; the singleton is
//! last-write-wins with no conflict detection, which is acceptable for a
//! single-administrator site.

use std::sync::Arc;

use bytes::Bytes;
use chrono::Utc;
use futures::future::join_all;
use uuid::Uuid;

use vows_shared::models::SiteSettings;

use crate::error::ClientError;
use crate::notify::Notifier;
use crate::remote::{ImageStorage, SettingsRemote};

pub struct SettingsManager<R: SettingsRemote, S: ImageStorage> {
    remote: Arc<R>,
    storage: Arc<S>,
    notifier: Notifier,
    settings: SiteSettings,
}

impl<R: SettingsRemote, S: ImageStorage> SettingsManager<R, S> {
    pub fn new(remote: Arc<R>, storage: Arc<S>, notifier: Notifier) -> Self {
        Self {
            remote,
            storage,
            notifier,
            settings: SiteSettings::default(),
        }
    }

    /// The cached settings record.
    pub fn settings(&self) -> &SiteSettings {
        &self.settings
    }

    /// Fetch the singleton record.
    ///
    /// A missing record is seeded with the defaults; a failed fetch keeps
    /// whatever is cached (the defaults on first load) so the public site
    /// still renders.
    pub async fn load(&mut self) {
        match self.remote.fetch().await {
            Ok(Some(settings)) => {
                tracing::debug!("Site settings loaded");
                self.settings = settings;
            }
            Ok(None) => {
                tracing::info!("No settings record yet, seeding defaults");
                self.save().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to load settings");
            }
        }
    }

    /// Apply a field-level edit in memory, then persist the whole record.
    pub async fn update(&mut self, edit: impl FnOnce(&mut SiteSettings)) {
        edit(&mut self.settings);
        self.save().await;
    }

    /// Whole-record upsert of the current in-memory value.  Failures are
    /// logged and noticed but never undo the local edit.
    async fn save(&mut self) {
        self.settings.updated_at = Some(Utc::now());
        if let Err(e) = self.remote.upsert(&self.settings).await {
            tracing::error!(error = %e, "Failed to save settings");
            self.notifier
                .error("Error", "Failed to save settings. Please try again.");
        }
    }

    // ------------------------------------------------------------------
    // Image lists
    // ------------------------------------------------------------------

    pub async fn add_gallery_image(&mut self, url: String) {
        self.settings.gallery_images.push(url);
        self.save().await;
    }

    pub async fn remove_gallery_image(&mut self, index: usize) {
        if index >= self.settings.gallery_images.len() {
            tracing::warn!(index, "Gallery image index out of range");
            return;
        }
        self.settings.gallery_images.remove(index);
        self.save().await;
    }

    pub async fn add_background_image(&mut self, url: String) {
        self.settings.background_images.push(url);
        self.save().await;
    }

    /// Remove a background image.  When the removed image was the selected
    /// one, selection falls to the first remaining image.
    pub async fn remove_background_image(&mut self, index: usize) {
        if index >= self.settings.background_images.len() {
            tracing::warn!(index, "Background image index out of range");
            return;
        }
        let removed = self.settings.background_images.remove(index);
        if self.settings.selected_background == removed {
            self.settings.selected_background = self
                .settings
                .background_images
                .first()
                .cloned()
                .unwrap_or_default();
        }
        self.save().await;
    }

    pub async fn select_background(&mut self, url: String) {
        self.settings.selected_background = url;
        self.save().await;
    }

    // ------------------------------------------------------------------
    // Uploads
    // ------------------------------------------------------------------

    /// Upload one image and return its public URL.  The object lands under
    /// `gallery/<uuid>.<ext>`; adding the URL to a list is a separate step.
    pub async fn upload_image(&self, data: Bytes, ext: &str) -> Result<String, ClientError> {
        let ext = ext.trim_start_matches('.');
        let path = format!("gallery/{}.{}", Uuid::new_v4(), ext);

        match self.storage.upload(&path, data, content_type_for(ext)).await {
            Ok(url) => {
                tracing::info!(url = %url, "Image uploaded");
                Ok(url)
            }
            Err(e) => {
                tracing::error!(error = %e, "Image upload failed");
                self.notifier
                    .error("Error", "Failed to upload image. Please try again.");
                Err(e.into())
            }
        }
    }

    /// Upload a batch of images concurrently.  Uploads start in request
    /// order; results come back in the same order, each one independently
    /// a success or failure.
    pub async fn upload_images(
        &self,
        batch: Vec<(Bytes, String)>,
    ) -> Vec<Result<String, ClientError>> {
        join_all(
            batch
                .into_iter()
                .map(|(data, ext)| async move { self.upload_image(data, &ext).await }),
        )
        .await
    }
}

fn content_type_for(ext: &str) -> &'static str {
    match ext.to_ascii_lowercase().as_str() {
        "jpg" | "jpeg" => "image/jpeg",
        "png" => "image/png",
        "webp" => "image/webp",
        "gif" => "image/gif",
        _ => "application/octet-stream",
    }
}

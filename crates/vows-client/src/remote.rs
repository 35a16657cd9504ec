//! Remote gateway traits the managers are generic over.
//!
//! [`ProviderClient`] implements all of them by delegating to its typed
//! table helpers; tests swap in in-memory doubles that can be told to
//! fail.

use async_trait::async_trait;
use bytes::Bytes;
use uuid::Uuid;

use vows_provider::{ProviderClient, Result};
use vows_shared::constants::IMAGE_BUCKET;
use vows_shared::models::{
    CustomInvite, Faq, NewCustomInvite, NewFaq, NewResponse, Response, SiteSettings,
};

#[async_trait]
pub trait ResponsesRemote: Send + Sync {
    async fn list(&self) -> Result<Vec<Response>>;
    async fn insert(&self, new: &NewResponse) -> Result<Response>;
    async fn update(&self, row: &Response) -> Result<()>;
    async fn delete(&self, id: Uuid) -> Result<()>;
}

#[async_trait]
pub trait FaqsRemote: Send + Sync {
    async fn list(&self) -> Result<Vec<Faq>>;
    async fn insert(&self, new: &NewFaq) -> Result<Faq>;
    async fn update(&self, row: &Faq) -> Result<Faq>;
    async fn set_sort_order(&self, id: Uuid, sort_order: i64) -> Result<()>;
    async fn set_enabled(&self, id: Uuid, is_enabled: bool) -> Result<()>;
    async fn delete(&self, id: Uuid) -> Result<()>;
}

#[async_trait]
pub trait InvitesRemote: Send + Sync {
    async fn list(&self) -> Result<Vec<CustomInvite>>;
    async fn insert(&self, new: &NewCustomInvite) -> Result<CustomInvite>;
    async fn find_by_code(&self, code: &str) -> Result<Option<CustomInvite>>;
    async fn set_active(&self, id: Uuid, is_active: bool) -> Result<()>;
    async fn delete(&self, id: Uuid) -> Result<()>;
}

#[async_trait]
pub trait SettingsRemote: Send + Sync {
    async fn fetch(&self) -> Result<Option<SiteSettings>>;
    async fn upsert(&self, settings: &SiteSettings) -> Result<()>;
}

#[async_trait]
pub trait ImageStorage: Send + Sync {
    /// Upload an object under the site's image bucket and return its
    /// public URL.
    async fn upload(&self, path: &str, data: Bytes, content_type: &str) -> Result<String>;
}

#[async_trait]
impl ResponsesRemote for ProviderClient {
    async fn list(&self) -> Result<Vec<Response>> {
        self.list_responses().await
    }

    async fn insert(&self, new: &NewResponse) -> Result<Response> {
        self.insert_response(new).await
    }

    async fn update(&self, row: &Response) -> Result<()> {
        self.update_response(row).await
    }

    async fn delete(&self, id: Uuid) -> Result<()> {
        self.delete_response(id).await
    }
}

#[async_trait]
impl FaqsRemote for ProviderClient {
    async fn list(&self) -> Result<Vec<Faq>> {
        self.list_faqs().await
    }

    async fn insert(&self, new: &NewFaq) -> Result<Faq> {
        self.insert_faq(new).await
    }

    async fn update(&self, row: &Faq) -> Result<Faq> {
        self.update_faq(row).await
    }

    async fn set_sort_order(&self, id: Uuid, sort_order: i64) -> Result<()> {
        self.set_faq_sort_order(id, sort_order).await
    }

    async fn set_enabled(&self, id: Uuid, is_enabled: bool) -> Result<()> {
        self.set_faq_enabled(id, is_enabled).await
    }

    async fn delete(&self, id: Uuid) -> Result<()> {
        self.delete_faq(id).await
    }
}

#[async_trait]
impl InvitesRemote for ProviderClient {
    async fn list(&self) -> Result<Vec<CustomInvite>> {
        self.list_invites().await
    }

    async fn insert(&self, new: &NewCustomInvite) -> Result<CustomInvite> {
        self.insert_invite(new).await
    }

    async fn find_by_code(&self, code: &str) -> Result<Option<CustomInvite>> {
        self.find_invite_by_code(code).await
    }

    async fn set_active(&self, id: Uuid, is_active: bool) -> Result<()> {
        self.set_invite_active(id, is_active).await
    }

    async fn delete(&self, id: Uuid) -> Result<()> {
        self.delete_invite(id).await
    }
}

#[async_trait]
impl SettingsRemote for ProviderClient {
    async fn fetch(&self) -> Result<Option<SiteSettings>> {
        self.fetch_settings().await
    }

    async fn upsert(&self, settings: &SiteSettings) -> Result<()> {
        self.upsert_settings(settings).await
    }
}

#[async_trait]
impl ImageStorage for ProviderClient {
    async fn upload(&self, path: &str, data: Bytes, content_type: &str) -> Result<String> {
        self.upload_object(IMAGE_BUCKET, path, data, content_type).await
    }
}

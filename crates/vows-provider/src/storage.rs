//! Object storage: image upload and public URL retrieval.
//!
//! Objects land in a bucket under a caller-chosen path; once uploaded they
//! are addressed by a public URL derived from the bucket and path.  The
//! site never deletes storage objects; removing an image from a list only
//! drops the reference.

use bytes::Bytes;

use vows_shared::constants::MAX_UPLOAD_SIZE;

use crate::client::ProviderClient;
use crate::error::{ProviderError, Result};

impl ProviderClient {
    /// Upload an object and return its public URL.
    pub async fn upload_object(
        &self,
        bucket: &str,
        path: &str,
        data: Bytes,
        content_type: &str,
    ) -> Result<String> {
        if data.is_empty() {
            return Err(ProviderError::EmptyUpload);
        }
        if data.len() > MAX_UPLOAD_SIZE {
            return Err(ProviderError::UploadTooLarge {
                size: data.len(),
                max: MAX_UPLOAD_SIZE,
            });
        }

        let url = format!("{}/storage/v1/object/{}/{}", self.base_url(), bucket, path);
        let size = data.len();

        let response = self
            .authorize(self.http.post(&url))
            .header("Content-Type", content_type)
            .body(data)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(Self::error_for(response).await);
        }

        tracing::info!(bucket, path, size, "Object uploaded");
        Ok(self.public_object_url(bucket, path))
    }

    /// Public URL of an object, whether or not it exists yet.
    pub fn public_object_url(&self, bucket: &str, path: &str) -> String {
        format!(
            "{}/storage/v1/object/public/{}/{}",
            self.base_url(),
            bucket,
            path
        )
    }
}

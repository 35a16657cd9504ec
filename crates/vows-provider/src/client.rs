//! HTTP client and generic row CRUD.
//!
//! The provider exposes each table under `/rest/v1/<table>` with filters
//! passed as query parameters (`<column>=eq.<value>`, `order=<column>.asc`)
//! and writes answering with the affected rows when asked via the `Prefer`
//! header.  The typed per-table helpers live in their own modules
//! ([`crate::responses`], [`crate::faqs`], [`crate::invites`],
//! [`crate::settings`]); this module only knows about rows and queries.

use std::sync::RwLock;

use reqwest::{Method, RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::auth::AuthSession;
use crate::config::ProviderConfig;
use crate::error::{ProviderError, Result};

/// Filter and ordering parameters for a table request.
#[derive(Debug, Clone, Default)]
pub struct Query {
    pairs: Vec<(String, String)>,
}

impl Query {
    pub fn new() -> Self {
        Self::default()
    }

    /// Equality filter: `column = value`.
    pub fn eq(mut self, column: &str, value: impl ToString) -> Self {
        self.pairs
            .push((column.to_string(), format!("eq.{}", value.to_string())));
        self
    }

    /// Order ascending by a named column.
    pub fn order_asc(mut self, column: &str) -> Self {
        self.pairs
            .push(("order".to_string(), format!("{column}.asc")));
        self
    }

    /// Order descending by a named column.
    pub fn order_desc(mut self, column: &str) -> Self {
        self.pairs
            .push(("order".to_string(), format!("{column}.desc")));
        self
    }

    pub fn limit(mut self, n: usize) -> Self {
        self.pairs.push(("limit".to_string(), n.to_string()));
        self
    }

    fn pairs(&self) -> &[(String, String)] {
        &self.pairs
    }
}

/// Client for the hosted data provider.
///
/// Cheap to share behind an `Arc`; the session token is the only interior
/// state and is swapped atomically on sign-in/sign-out.
pub struct ProviderClient {
    pub(crate) http: reqwest::Client,
    config: ProviderConfig,
    pub(crate) session: RwLock<Option<AuthSession>>,
}

impl ProviderClient {
    pub fn new(config: ProviderConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
            session: RwLock::new(None),
        }
    }

    pub fn config(&self) -> &ProviderConfig {
        &self.config
    }

    /// Origin of the public site (for shareable links).
    pub fn site_origin(&self) -> &str {
        &self.config.site_origin
    }

    pub(crate) fn base_url(&self) -> &str {
        &self.config.base_url
    }

    fn rest_url(&self, table: &str) -> String {
        format!("{}/rest/v1/{}", self.config.base_url, table)
    }

    /// Attach the API key and, when signed in, the bearer token.
    pub(crate) fn authorize(&self, builder: RequestBuilder) -> RequestBuilder {
        let builder = builder.header("apikey", &self.config.api_key);
        let token = self
            .session
            .read()
            .ok()
            .and_then(|guard| guard.as_ref().map(|s| s.access_token.clone()));
        match token {
            Some(token) => builder.bearer_auth(token),
            None => builder.bearer_auth(&self.config.api_key),
        }
    }

    fn request(&self, method: Method, table: &str, query: &Query) -> RequestBuilder {
        let builder = self
            .http
            .request(method, self.rest_url(table))
            .query(query.pairs());
        self.authorize(builder)
    }

    /// Map a non-success response into [`ProviderError::Api`], pulling the
    /// provider's `message` field out of the body when there is one.
    pub(crate) async fn error_for(response: reqwest::Response) -> ProviderError {
        let status = response.status();
        let message = match response.json::<serde_json::Value>().await {
            Ok(body) => body
                .get("message")
                .or_else(|| body.get("error_description"))
                .or_else(|| body.get("msg"))
                .and_then(|m| m.as_str())
                .unwrap_or("no error detail")
                .to_string(),
            Err(_) => "no error detail".to_string(),
        };
        ProviderError::Api {
            status: status.as_u16(),
            message,
        }
    }

    // ------------------------------------------------------------------
    // Row operations
    // ------------------------------------------------------------------

    /// Fetch all rows matching `query`.
    pub async fn select_rows<T: DeserializeOwned>(
        &self,
        table: &str,
        query: Query,
    ) -> Result<Vec<T>> {
        let response = self.request(Method::GET, table, &query).send().await?;

        if !response.status().is_success() {
            return Err(Self::error_for(response).await);
        }

        response
            .json::<Vec<T>>()
            .await
            .map_err(|e| ProviderError::Decode(e.to_string()))
    }

    /// Fetch at most one row matching `query`; `Ok(None)` when no row does.
    pub async fn select_one<T: DeserializeOwned>(
        &self,
        table: &str,
        query: Query,
    ) -> Result<Option<T>> {
        let mut rows = self.select_rows::<T>(table, query.limit(1)).await?;
        Ok(if rows.is_empty() {
            None
        } else {
            Some(rows.swap_remove(0))
        })
    }

    /// Insert one row and return it as created by the server (identity and
    /// timestamps assigned).
    pub async fn insert_row<T: DeserializeOwned, B: Serialize>(
        &self,
        table: &str,
        body: &B,
    ) -> Result<T> {
        let response = self
            .request(Method::POST, table, &Query::new())
            .header("Prefer", "return=representation")
            .json(body)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(Self::error_for(response).await);
        }

        let mut rows = response
            .json::<Vec<T>>()
            .await
            .map_err(|e| ProviderError::Decode(e.to_string()))?;
        if rows.is_empty() {
            return Err(ProviderError::Decode(
                "insert returned no representation".to_string(),
            ));
        }
        Ok(rows.swap_remove(0))
    }

    /// Upsert one row on its primary key (whole-record write).
    pub async fn upsert_row<B: Serialize>(&self, table: &str, body: &B) -> Result<()> {
        let response = self
            .request(Method::POST, table, &Query::new())
            .header("Prefer", "resolution=merge-duplicates")
            .json(body)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(Self::error_for(response).await);
        }
        Ok(())
    }

    /// Patch all rows matching `query` with the given partial body.
    pub async fn update_rows<B: Serialize>(
        &self,
        table: &str,
        query: Query,
        body: &B,
    ) -> Result<()> {
        let response = self
            .request(Method::PATCH, table, &query)
            .json(body)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(Self::error_for(response).await);
        }
        Ok(())
    }

    /// Patch matching rows and return the first updated one.  A patch that
    /// matched nothing is reported as [`ProviderError::NotFound`] rather
    /// than silently succeeding.
    pub async fn update_rows_returning<T: DeserializeOwned, B: Serialize>(
        &self,
        table: &str,
        query: Query,
        body: &B,
    ) -> Result<T> {
        let response = self
            .request(Method::PATCH, table, &query)
            .header("Prefer", "return=representation")
            .json(body)
            .send()
            .await?;

        if response.status() == StatusCode::NOT_FOUND {
            return Err(ProviderError::NotFound);
        }
        if !response.status().is_success() {
            return Err(Self::error_for(response).await);
        }

        let mut rows = response
            .json::<Vec<T>>()
            .await
            .map_err(|e| ProviderError::Decode(e.to_string()))?;
        if rows.is_empty() {
            return Err(ProviderError::NotFound);
        }
        Ok(rows.swap_remove(0))
    }

    /// Delete all rows matching `query`.
    pub async fn delete_rows(&self, table: &str, query: Query) -> Result<()> {
        let response = self.request(Method::DELETE, table, &query).send().await?;

        if !response.status().is_success() {
            return Err(Self::error_for(response).await);
        }
        Ok(())
    }
}

//! HTTP-backed resource gateway.

use async_trait::async_trait;
use futures_util::future::try_join_all;
use serde_json::Value;
use tracing::{debug, instrument, warn};

use gantry_core::error::AuthError;
use gantry_core::query::ResourceQuery;
use gantry_core::resource::{ListPage, ResourceRecord, UploadJob};
use gantry_core::traits::ResourceGateway;
use gantry_core::types::{ApiUrl, RecordId};
use gantry_core::{Credentials, Result, Session, SessionToken};

use crate::api::{
    CHAT, ChatPrompt, ChatReply, INGEST, LOGIN, LoginRequest, LoginResponse, QUERIES_PER_DEPT,
    STATS, WELCOME, Welcome,
};
use crate::client::RestClient;

/// A network-backed resource gateway over the admin REST API.
#[derive(Debug, Clone)]
pub struct HttpGateway {
    client: RestClient,
}

impl HttpGateway {
    /// Create a gateway with no active session.
    pub fn new(base: ApiUrl) -> Self {
        Self {
            client: RestClient::new(base),
        }
    }

    /// Create a gateway that attaches the session's bearer token.
    pub fn with_session(base: ApiUrl, session: &Session) -> Self {
        let mut client = RestClient::new(base);
        client.set_token(Some(session.token.clone()));
        Self { client }
    }

    /// Returns the backend base URL.
    pub fn base(&self) -> &ApiUrl {
        self.client.base()
    }

    /// Attach a session token to subsequent requests.
    pub fn set_session(&mut self, session: &Session) {
        self.client.set_token(Some(session.token.clone()));
    }

    /// Drop the session token.
    pub fn clear_session(&mut self) {
        self.client.set_token(None);
    }

    fn resource_path(resource: &str) -> String {
        format!("/admin/{}", resource)
    }

    fn record_path(resource: &str, id: &RecordId) -> String {
        format!("/admin/{}/{}", resource, id)
    }

    /// Fetch a list endpoint and validate the entries into records.
    async fn fetch_page(&self, path: &str, params: &[(String, String)]) -> Result<ListPage> {
        let (entries, total) = self.client.get_list(path, params).await?;
        let records = entries
            .into_iter()
            .map(ResourceRecord::new)
            .collect::<Result<Vec<_>>>()?;
        Ok(ListPage { records, total })
    }

    /// Authenticate with the backend and build a session.
    ///
    /// Domain-level rejections (`success: false`) surface as
    /// authentication errors carrying the server's message; HTTP
    /// failures propagate with their status and body.
    #[instrument(skip(self, credentials))]
    pub async fn login(&self, credentials: &Credentials) -> Result<Session> {
        debug!(name = credentials.name(), "Logging in");

        let request = LoginRequest {
            name: credentials.name(),
            email: credentials.email(),
        };

        let response: LoginResponse = self.client.post_json(LOGIN, &request).await?;

        if !response.success {
            let message = response
                .message
                .unwrap_or_else(|| "login rejected".to_string());
            return Err(AuthError::Rejected { message }.into());
        }

        let user_id = response.user_id.ok_or(AuthError::Rejected {
            message: "login response missing user_id".to_string(),
        })?;

        Ok(Session::new(
            credentials.name(),
            credentials.email(),
            SessionToken::new(user_id),
        ))
    }

    /// Send a chat prompt.
    #[instrument(skip(self, prompt), fields(department = %prompt.department))]
    pub async fn chat(&self, prompt: &ChatPrompt) -> Result<ChatReply> {
        debug!("Sending chat prompt");
        self.client.post_json(CHAT, prompt).await
    }

    /// Fetch the welcome banner.
    pub async fn welcome(&self) -> Result<Welcome> {
        self.client.get_json(WELCOME).await
    }

    /// Fetch the dashboard stats document.
    pub async fn stats(&self) -> Result<Value> {
        self.client.get_json(STATS).await
    }

    /// Fetch per-department query analytics.
    pub async fn queries_per_department(&self) -> Result<Value> {
        self.client.get_json(QUERIES_PER_DEPT).await
    }

    /// Download a resource's CSV export as raw bytes.
    #[instrument(skip(self))]
    pub async fn export_csv(&self, resource: &str) -> Result<Vec<u8>> {
        debug!(resource, "Exporting CSV");
        self.client
            .get_bytes(&format!("/admin/{}/export", resource))
            .await
    }
}

#[async_trait]
impl ResourceGateway for HttpGateway {
    #[instrument(skip(self, query))]
    async fn list(&self, resource: &str, query: &ResourceQuery) -> ListPage {
        debug!("Listing records");

        let mut params: Vec<(String, String)> = vec![
            ("_start".to_string(), query.page.skip().to_string()),
            ("_end".to_string(), query.page.end().to_string()),
            ("_sort".to_string(), query.sort.field.clone()),
            ("_order".to_string(), query.sort.order.as_param().to_string()),
        ];
        for (field, value) in &query.filter {
            params.push((field.clone(), value.clone()));
        }

        match self.fetch_page(&Self::resource_path(resource), &params).await {
            Ok(page) => page,
            Err(err) => {
                warn!(resource, error = %err, "list failed, degrading to empty page");
                ListPage::empty()
            }
        }
    }

    #[instrument(skip(self))]
    async fn get_one(&self, resource: &str, id: &RecordId) -> Result<ResourceRecord> {
        debug!("Fetching record");
        let value: Value = self
            .client
            .get_json(&Self::record_path(resource, id))
            .await?;
        ResourceRecord::new(value)
    }

    #[instrument(skip(self, data))]
    async fn create(&self, resource: &str, data: &Value) -> Result<ResourceRecord> {
        debug!("Creating record");
        let value: Value = self
            .client
            .post_json(&Self::resource_path(resource), data)
            .await?;
        ResourceRecord::new(value)
    }

    #[instrument(skip(self, data))]
    async fn update(&self, resource: &str, id: &RecordId, data: &Value) -> Result<ResourceRecord> {
        debug!("Updating record");
        let value: Value = self
            .client
            .patch_json(&Self::record_path(resource, id), data)
            .await?;
        ResourceRecord::new(value)
    }

    #[instrument(skip(self))]
    async fn delete(&self, resource: &str, id: &RecordId) -> Result<RecordId> {
        debug!("Deleting record");
        self.client.delete(&Self::record_path(resource, id)).await?;
        Ok(id.clone())
    }

    #[instrument(skip(self, ids), fields(count = ids.len()))]
    async fn get_many(&self, resource: &str, ids: &[RecordId]) -> Vec<ResourceRecord> {
        debug!("Fetching records by id");

        let joined = ids
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(",");
        let params = [("ids".to_string(), joined)];

        match self.fetch_page(&Self::resource_path(resource), &params).await {
            Ok(page) => page.records,
            Err(err) => {
                warn!(resource, error = %err, "get_many failed, degrading to empty");
                Vec::new()
            }
        }
    }

    #[instrument(skip(self))]
    async fn get_many_reference(
        &self,
        resource: &str,
        target_field: &str,
        target_id: &RecordId,
    ) -> ListPage {
        debug!("Listing referencing records");

        let params = [(target_field.to_string(), target_id.to_string())];

        match self.fetch_page(&Self::resource_path(resource), &params).await {
            Ok(page) => page,
            Err(err) => {
                warn!(resource, error = %err, "get_many_reference failed, degrading to empty page");
                ListPage::empty()
            }
        }
    }

    #[instrument(skip(self, ids, data), fields(count = ids.len()))]
    async fn update_many(
        &self,
        resource: &str,
        ids: &[RecordId],
        data: &Value,
    ) -> Result<Vec<RecordId>> {
        debug!("Updating records");

        // Settle-all barrier: HTTP-level failures of individual requests
        // do not abort the batch, a transport failure fails the whole call.
        try_join_all(ids.iter().map(|id| {
            let path = Self::record_path(resource, id);
            async move { self.client.patch_settle(&path, data).await }
        }))
        .await?;

        Ok(ids.to_vec())
    }

    #[instrument(skip(self, ids), fields(count = ids.len()))]
    async fn delete_many(&self, resource: &str, ids: &[RecordId]) -> Result<Vec<RecordId>> {
        debug!("Deleting records");

        try_join_all(ids.iter().map(|id| {
            let path = Self::record_path(resource, id);
            async move { self.client.delete_settle(&path).await }
        }))
        .await?;

        Ok(ids.to_vec())
    }

    #[instrument(skip(self, job), fields(file = %job.file_name, department = %job.department))]
    async fn upload(&self, resource: &str, job: &UploadJob) -> Result<Value> {
        debug!(resource, "Uploading file");

        let part = reqwest::multipart::Part::bytes(job.bytes.clone()).file_name(job.file_name.clone());
        let form = reqwest::multipart::Form::new()
            .part("file", part)
            .text("department", job.department.clone())
            .text("title", job.title.clone());

        // Content-Type stays unset so the transport picks the boundary.
        self.client.post_multipart(INGEST, form).await
    }
}

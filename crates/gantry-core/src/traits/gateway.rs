//! Resource gateway trait.

use async_trait::async_trait;
use serde_json::Value;

use crate::Result;
use crate::query::ResourceQuery;
use crate::resource::{ListPage, ResourceRecord, UploadJob};
use crate::types::RecordId;

/// A uniform contract for accessing named backend resources.
///
/// Failure handling is deliberately asymmetric and part of the
/// contract:
///
/// - List-style reads ([`list`](Self::list), [`get_many`](Self::get_many),
///   [`get_many_reference`](Self::get_many_reference)) degrade to an
///   empty result on any failure. They hydrate passive list views,
///   which render "no records" rather than an error state.
/// - Single-entity operations ([`get_one`](Self::get_one),
///   [`create`](Self::create), [`update`](Self::update),
///   [`delete`](Self::delete), [`upload`](Self::upload)) propagate
///   failures so callers can show a precise message.
/// - Bulk mutations ([`update_many`](Self::update_many),
///   [`delete_many`](Self::delete_many)) fan out one request per id and
///   settle all of them; there is no per-item failure reporting.
#[async_trait]
pub trait ResourceGateway: Send + Sync {
    /// List a page of records.
    ///
    /// Returns the empty page on any failure, never an error.
    async fn list(&self, resource: &str, query: &ResourceQuery) -> ListPage;

    /// Fetch a single record by id.
    async fn get_one(&self, resource: &str, id: &RecordId) -> Result<ResourceRecord>;

    /// Create a record. Returns the record as the server stored it.
    async fn create(&self, resource: &str, data: &Value) -> Result<ResourceRecord>;

    /// Partially update a record. Omitted fields are left untouched
    /// server-side.
    async fn update(&self, resource: &str, id: &RecordId, data: &Value) -> Result<ResourceRecord>;

    /// Delete a record. The response body is ignored; the deleted id is
    /// returned on success.
    async fn delete(&self, resource: &str, id: &RecordId) -> Result<RecordId>;

    /// Fetch multiple records by id, joined as a comma-separated
    /// `ids` filter.
    ///
    /// Returns an empty sequence on any failure, never an error.
    async fn get_many(&self, resource: &str, ids: &[RecordId]) -> Vec<ResourceRecord>;

    /// List records referencing `target_id` through `target_field`.
    ///
    /// Returns the empty page on any failure, never an error.
    async fn get_many_reference(
        &self,
        resource: &str,
        target_field: &str,
        target_id: &RecordId,
    ) -> ListPage;

    /// Apply the same partial update to every id, concurrently.
    ///
    /// All requests are issued at once and settled together. Individual
    /// HTTP-level failures do not abort the batch and are not reported;
    /// a transport failure fails the whole call. Returns the full id
    /// set.
    async fn update_many(
        &self,
        resource: &str,
        ids: &[RecordId],
        data: &Value,
    ) -> Result<Vec<RecordId>>;

    /// Delete every id, concurrently. Same settling semantics as
    /// [`update_many`](Self::update_many).
    async fn delete_many(&self, resource: &str, ids: &[RecordId]) -> Result<Vec<RecordId>>;

    /// Ingest one file via multipart upload.
    async fn upload(&self, resource: &str, job: &UploadJob) -> Result<Value>;
}

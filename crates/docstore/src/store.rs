use async_trait::async_trait;

use crate::errors::StoreError;
use crate::value::{Document, Fields};

/// A document database addressed by collection path and document id.
///
/// Collection paths may name sub-collections, e.g. `posts/post-1/likes`.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Creates the document or fully replaces an existing one.
    async fn set_document(
        &self,
        collection: &str,
        id: &str,
        fields: Fields,
    ) -> Result<(), StoreError>;

    /// Fetches a document, or `None` if it does not exist.
    async fn get_document(&self, collection: &str, id: &str)
    -> Result<Option<Document>, StoreError>;

    /// Lists every document directly under a collection.
    async fn list_documents(&self, collection: &str) -> Result<Vec<Document>, StoreError>;
}

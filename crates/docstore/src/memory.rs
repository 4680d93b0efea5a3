//! In-process document store for dry runs and tests.

use std::collections::BTreeMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::errors::StoreError;
use crate::store::DocumentStore;
use crate::value::{Document, Fields};

/// Documents keyed by collection path, then by id.
#[derive(Debug, Default)]
pub struct MemoryStore {
    collections: RwLock<BTreeMap<String, BTreeMap<String, Fields>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of documents directly under a collection.
    pub async fn count(&self, collection: &str) -> usize {
        self.collections
            .read()
            .await
            .get(collection)
            .map_or(0, BTreeMap::len)
    }

    /// Collection paths that hold at least one document.
    pub async fn collection_paths(&self) -> Vec<String> {
        self.collections
            .read()
            .await
            .iter()
            .filter(|(_, docs)| !docs.is_empty())
            .map(|(path, _)| path.clone())
            .collect()
    }
}

#[async_trait]
impl DocumentStore for MemoryStore {
    async fn set_document(
        &self,
        collection: &str,
        id: &str,
        fields: Fields,
    ) -> Result<(), StoreError> {
        self.collections
            .write()
            .await
            .entry(collection.to_string())
            .or_default()
            .insert(id.to_string(), fields);
        Ok(())
    }

    async fn get_document(
        &self,
        collection: &str,
        id: &str,
    ) -> Result<Option<Document>, StoreError> {
        Ok(self
            .collections
            .read()
            .await
            .get(collection)
            .and_then(|docs| docs.get(id))
            .map(|fields| Document::new(id, fields.clone())))
    }

    async fn list_documents(&self, collection: &str) -> Result<Vec<Document>, StoreError> {
        Ok(self
            .collections
            .read()
            .await
            .get(collection)
            .map(|docs| {
                docs.iter()
                    .map(|(id, fields)| Document::new(id.clone(), fields.clone()))
                    .collect()
            })
            .unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::Value;

    fn fields(name: &str) -> Fields {
        Fields::from([("name".to_string(), Value::String(name.to_string()))])
    }

    #[tokio::test]
    async fn test_set_replaces_whole_document() {
        let store = MemoryStore::new();
        let mut first = fields("Leo Club of Kandy");
        first.insert("membersCount".to_string(), Value::Integer(40));

        store.set_document("clubs", "club-3", first).await.unwrap();
        store
            .set_document("clubs", "club-3", fields("Leo Club of Kandy"))
            .await
            .unwrap();

        let doc = store.get_document("clubs", "club-3").await.unwrap().unwrap();
        assert_eq!(doc.id, "club-3");
        assert!(doc.get("membersCount").is_none());
        assert_eq!(store.count("clubs").await, 1);
    }

    #[tokio::test]
    async fn test_missing_document() {
        let store = MemoryStore::new();
        assert!(store.get_document("users", "user-9").await.unwrap().is_none());
        assert!(store.list_documents("users").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_sub_collections_are_separate() {
        let store = MemoryStore::new();
        store
            .set_document("posts", "post-1", fields("post"))
            .await
            .unwrap();
        store
            .set_document("posts/post-1/likes", "user-2", fields("like"))
            .await
            .unwrap();

        assert_eq!(store.count("posts").await, 1);
        assert_eq!(store.count("posts/post-1/likes").await, 1);
        assert_eq!(
            store.collection_paths().await,
            vec!["posts".to_string(), "posts/post-1/likes".to_string()]
        );
    }
}

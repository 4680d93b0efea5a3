//! Firestore REST v1 client.

use async_trait::async_trait;
use reqwest::{Client, Response, StatusCode, Url};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::auth::TokenSource;
use crate::credentials::ServiceAccountKey;
use crate::errors::StoreError;
use crate::store::DocumentStore;
use crate::value::{Document, Fields};

const FIRESTORE_HOST: &str = "https://firestore.googleapis.com";
const LIST_PAGE_SIZE: u32 = 300;

/// Document as returned by the REST API.
#[derive(Debug, Deserialize)]
struct WireDocument {
    name: String,
    #[serde(default)]
    fields: Fields,
}

impl From<WireDocument> for Document {
    fn from(doc: WireDocument) -> Self {
        let id = doc.name.rsplit('/').next().unwrap_or_default().to_string();
        Document::new(id, doc.fields)
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ListResponse {
    #[serde(default)]
    documents: Vec<WireDocument>,
    next_page_token: Option<String>,
}

#[derive(Serialize)]
struct WriteBody<'a> {
    fields: &'a Fields,
}

/// Firestore client for the `(default)` database of one project.
pub struct FirestoreClient {
    client: Client,
    base_url: Url,
    tokens: TokenSource,
}

impl FirestoreClient {
    /// Creates a client authenticated with a service-account key.
    ///
    /// `project_id` overrides the project named in the key.
    pub fn new(key: ServiceAccountKey, project_id: Option<&str>) -> Result<Self, StoreError> {
        let project = project_id.unwrap_or(&key.project_id).to_string();
        let client = Client::new();
        let base_url = documents_url(FIRESTORE_HOST, &project)?;

        Ok(Self {
            tokens: TokenSource::service_account(key, client.clone()),
            client,
            base_url,
        })
    }

    /// Creates a client for the local emulator at `host` (e.g. `localhost:8080`).
    ///
    /// Proxy environment variables are ignored for the emulator.
    pub fn emulator(host: &str, project_id: &str) -> Result<Self, StoreError> {
        let base_url = documents_url(&format!("http://{host}"), project_id)?;

        Ok(Self {
            client: Client::builder().no_proxy().build()?,
            base_url,
            tokens: TokenSource::emulator(),
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn collection_url(&self, collection: &str) -> Result<Url, StoreError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| StoreError::Url(self.base_url.to_string()))?
            .extend(collection.split('/'));
        Ok(url)
    }

    fn document_url(&self, collection: &str, id: &str) -> Result<Url, StoreError> {
        let mut url = self.collection_url(collection)?;
        url.path_segments_mut()
            .map_err(|_| StoreError::Url(self.base_url.to_string()))?
            .push(id);
        Ok(url)
    }
}

fn documents_url(host: &str, project_id: &str) -> Result<Url, StoreError> {
    let raw = format!("{host}/v1/projects/{project_id}/databases/(default)/documents");
    Url::parse(&raw).map_err(|e| StoreError::Url(format!("{raw}: {e}")))
}

/// Turns a non-success response into [`StoreError::Status`].
async fn check(resp: Response, path: String) -> Result<Response, StoreError> {
    if resp.status().is_success() {
        return Ok(resp);
    }
    let status = resp.status();
    let body = resp.text().await.unwrap_or_default();
    Err(StoreError::Status { status, path, body })
}

#[async_trait]
impl DocumentStore for FirestoreClient {
    async fn set_document(
        &self,
        collection: &str,
        id: &str,
        fields: Fields,
    ) -> Result<(), StoreError> {
        let url = self.document_url(collection, id)?;
        let token = self.tokens.access_token().await?;

        debug!("PATCH {url}");

        // No update mask: the stored document is replaced wholesale.
        let resp = self
            .client
            .patch(url)
            .bearer_auth(token)
            .json(&WriteBody { fields: &fields })
            .send()
            .await?;

        check(resp, format!("{collection}/{id}")).await?;
        Ok(())
    }

    async fn get_document(
        &self,
        collection: &str,
        id: &str,
    ) -> Result<Option<Document>, StoreError> {
        let url = self.document_url(collection, id)?;
        let token = self.tokens.access_token().await?;

        debug!("GET {url}");

        let resp = self.client.get(url).bearer_auth(token).send().await?;
        if resp.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }

        let resp = check(resp, format!("{collection}/{id}")).await?;
        let doc: WireDocument = resp.json().await?;
        Ok(Some(doc.into()))
    }

    async fn list_documents(&self, collection: &str) -> Result<Vec<Document>, StoreError> {
        let mut documents = Vec::new();
        let mut page_token: Option<String> = None;

        loop {
            let mut url = self.collection_url(collection)?;
            {
                let mut query = url.query_pairs_mut();
                query.append_pair("pageSize", &LIST_PAGE_SIZE.to_string());
                if let Some(token) = &page_token {
                    query.append_pair("pageToken", token);
                }
            }

            let token = self.tokens.access_token().await?;
            debug!("GET {url}");

            let resp = self.client.get(url).bearer_auth(token).send().await?;
            let resp = check(resp, collection.to_string()).await?;
            let page: ListResponse = resp.json().await?;

            documents.extend(page.documents.into_iter().map(Document::from));

            match page.next_page_token {
                Some(next) if !next.is_empty() => page_token = Some(next),
                _ => break,
            }
        }

        Ok(documents)
    }
}

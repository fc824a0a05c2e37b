use std::collections::HashMap;
use std::sync::Arc;

use crate::api_call::ApiCall;
use crate::document::DocumentHandle;
use crate::{ClientError, Result};
use corpusdb_core::{Document, ImportResult};
use serde_json::Value;

pub(crate) const COLLECTIONS_PATH: &str = "collections";
pub(crate) const RESOURCE_PATH: &str = "documents";

/// Document operations scoped to one collection.
///
/// All network operations hit `collections/{collection}/documents` and its
/// sub-paths. The struct also keeps a lazily-populated cache of per-document
/// handles, managed entirely client-side by [`Documents::get`] and friends.
pub struct Documents {
    api: Arc<ApiCall>,
    collection_name: String,
    documents: HashMap<String, Arc<DocumentHandle>>,
}

impl Documents {
    pub(crate) fn new(api: Arc<ApiCall>, collection_name: String) -> Self {
        Self {
            api,
            collection_name,
            documents: HashMap::new(),
        }
    }

    fn endpoint_path(&self, action: &str) -> String {
        if action.is_empty() {
            format!("{}/{}/{}", COLLECTIONS_PATH, self.collection_name, RESOURCE_PATH)
        } else {
            format!(
                "{}/{}/{}/{}",
                COLLECTIONS_PATH, self.collection_name, RESOURCE_PATH, action
            )
        }
    }

    /// Index a single document.
    pub async fn create(&self, document: &Document) -> Result<Value> {
        self.api.post(&self.endpoint_path(""), document, &[]).await
    }

    /// Bulk-import documents as a single newline-delimited JSON body.
    ///
    /// The service answers one JSON line per submitted document, in order;
    /// a failed line does not abort the rest of the batch.
    pub async fn create_many(&self, documents: &[Document]) -> Result<Vec<ImportResult>> {
        let body = to_ndjson(documents)?;
        let params = [("action".to_string(), "create".to_string())];
        let response = self
            .api
            .post_raw(&self.endpoint_path("import"), body, &params)
            .await?;

        response
            .lines()
            .map(|line| ImportResult::from_line(line).map_err(ClientError::from))
            .collect()
    }

    /// Export every document in the collection as JSON lines.
    ///
    /// The body is split strictly on `\n`, so a response ending in a newline
    /// yields a trailing empty element that callers must tolerate.
    pub async fn export(&self) -> Result<Vec<String>> {
        let response = self.api.get_raw(&self.endpoint_path("export"), &[]).await?;
        Ok(response.split('\n').map(str::to_string).collect())
    }

    /// Search the collection. Parameters are forwarded unchanged as query
    /// parameters (e.g. `q`, `query_by`, `filter_by`).
    pub async fn search(&self, search_params: &HashMap<String, String>) -> Result<Value> {
        self.api
            .get(&self.endpoint_path("search"), &to_query(search_params))
            .await
    }

    /// Insert the document, replacing any existing document with the same id.
    pub async fn upsert(&self, document: &Document) -> Result<Value> {
        let params = [("action".to_string(), "upsert".to_string())];
        self.api
            .post(&self.endpoint_path(""), document, &params)
            .await
    }

    /// Partially update documents matched by the supplied options.
    pub async fn update(
        &self,
        document: &Document,
        options: &HashMap<String, String>,
    ) -> Result<Value> {
        self.api
            .patch(&self.endpoint_path(""), document, &to_query(options))
            .await
    }

    /// Delete documents matched by the supplied query parameters (e.g. a
    /// `filter_by` expression).
    pub async fn delete(&self, query_params: &HashMap<String, String>) -> Result<Value> {
        self.api
            .delete(&self.endpoint_path(""), &to_query(query_params))
            .await
    }

    /// Handle for one document id, created on first access and cached for
    /// the lifetime of this instance. No network call.
    pub fn get(&mut self, document_id: &str) -> Arc<DocumentHandle> {
        let api = Arc::clone(&self.api);
        let collection_name = self.collection_name.clone();
        Arc::clone(self.documents.entry(document_id.to_string()).or_insert_with(|| {
            Arc::new(DocumentHandle::new(
                api,
                collection_name,
                document_id.to_string(),
            ))
        }))
    }

    /// Whether a handle for this id is currently cached.
    pub fn exists(&self, document_id: &str) -> bool {
        self.documents.contains_key(document_id)
    }

    /// Drop the cached handle for this id, if any.
    pub fn remove(&mut self, document_id: &str) -> Option<Arc<DocumentHandle>> {
        self.documents.remove(document_id)
    }

    /// Replace the cached handle for this id.
    pub fn set(&mut self, document_id: &str, handle: Arc<DocumentHandle>) {
        self.documents.insert(document_id.to_string(), handle);
    }
}

fn to_ndjson(documents: &[Document]) -> Result<String> {
    let lines = documents
        .iter()
        .map(|document| serde_json::to_string(document).map_err(ClientError::from))
        .collect::<Result<Vec<String>>>()?;
    Ok(lines.join("\n"))
}

fn to_query(params: &HashMap<String, String>) -> Vec<(String, String)> {
    params
        .iter()
        .map(|(k, v)| (k.clone(), v.clone()))
        .collect()
}

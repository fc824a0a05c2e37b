use std::sync::Arc;

use crate::api_call::ApiCall;
use crate::documents::{COLLECTIONS_PATH, RESOURCE_PATH};
use crate::Result;
use corpusdb_core::Document;
use serde_json::Value;

/// Handle addressing one document by `(collection, id)`.
pub struct DocumentHandle {
    api: Arc<ApiCall>,
    collection_name: String,
    document_id: String,
}

impl DocumentHandle {
    pub(crate) fn new(api: Arc<ApiCall>, collection_name: String, document_id: String) -> Self {
        Self {
            api,
            collection_name,
            document_id,
        }
    }

    fn endpoint_path(&self) -> String {
        format!(
            "{}/{}/{}/{}",
            COLLECTIONS_PATH, self.collection_name, RESOURCE_PATH, self.document_id
        )
    }

    pub fn id(&self) -> &str {
        &self.document_id
    }

    /// Fetch the document.
    pub async fn retrieve(&self) -> Result<Value> {
        self.api.get(&self.endpoint_path(), &[]).await
    }

    /// Partially update the document with the supplied fields.
    pub async fn update(&self, document: &Document) -> Result<Value> {
        self.api.patch(&self.endpoint_path(), document, &[]).await
    }

    /// Delete the document. The service echoes the deleted document back.
    pub async fn delete(&self) -> Result<Value> {
        self.api.delete(&self.endpoint_path(), &[]).await
    }
}

use std::sync::Arc;

use crate::api_call::ApiCall;
use crate::documents::Documents;
use crate::Result;
use corpusdb_core::Config;

/// CorpusDb REST API Client
///
/// Entry point for the SDK. Collection-scoped document operations are
/// reached through [`Client::collection`].
pub struct Client {
    api: Arc<ApiCall>,
}

impl Client {
    /// Create a new client from the given configuration.
    pub fn new(config: &Config) -> Result<Self> {
        Ok(Self {
            api: Arc::new(ApiCall::new(config)?),
        })
    }

    /// Access the documents of a named collection.
    pub fn collection(&self, name: impl Into<String>) -> Documents {
        Documents::new(Arc::clone(&self.api), name.into())
    }
}

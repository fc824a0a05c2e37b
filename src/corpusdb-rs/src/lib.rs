//! CorpusDb Client Library
//!
//! HTTP client for managing documents on a CorpusDb search service. The
//! client shapes collection-scoped REST requests (create, import, export,
//! search, upsert, update, delete); indexing and ranking happen server-side.

mod api_call;
mod client;
mod document;
mod documents;

pub use api_call::{ApiCall, API_KEY_HEADER};
pub use client::Client;
pub use corpusdb_core::{Config, Document, ImportResult};
pub use document::DocumentHandle;
pub use documents::Documents;

#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Server error: {status} - {message}")]
    Server { status: u16, message: String },

    #[error("Invalid response from server")]
    InvalidResponse,
}

pub type Result<T> = std::result::Result<T, ClientError>;

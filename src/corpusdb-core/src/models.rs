use serde::{Deserialize, Serialize};

/// Document represents one record in a collection. The schema is defined and
/// enforced by the remote service; the client treats documents as arbitrary
/// JSON objects.
pub type Document = serde_json::Map<String, serde_json::Value>;

/// ImportResult represents one line of a bulk-import response. The import
/// endpoint answers with one JSON object per submitted document, in order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImportResult {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    /// The rejected document echoed back as its original JSON line, if the
    /// service reports it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub document: Option<String>,
}

impl ImportResult {
    /// Parse a single line of an import response body.
    pub fn from_line(line: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(line)
    }
}

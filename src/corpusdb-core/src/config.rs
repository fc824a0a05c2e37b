use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    /// Base URL of the search service, e.g. "http://localhost:8108"
    pub base_url: String,
    pub api_key: String,
    #[serde(default = "default_connection_timeout_secs")]
    pub connection_timeout_secs: u64,
}

fn default_connection_timeout_secs() -> u64 {
    10
}

impl Config {
    pub fn load(path: &str) -> anyhow::Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: Config = serde_json::from_str(&contents)?;
        Ok(config)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8108".to_string(),
            api_key: String::new(),
            connection_timeout_secs: default_connection_timeout_secs(),
        }
    }
}

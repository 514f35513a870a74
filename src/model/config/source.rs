use std::collections::HashMap;
use crate::error::{config_err, PlaylistError};
use crate::utils::{default_fetch_timeout_secs, default_source_url};

/// Where the channel list comes from. `url` is either an http(s) url or a local file path.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SourceConfig {
    #[serde(default = "default_source_url")]
    pub url: String,
    #[serde(default = "default_fetch_timeout_secs")]
    pub timeout_secs: u64,
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub headers: HashMap<String, String>,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            url: default_source_url(),
            timeout_secs: default_fetch_timeout_secs(),
            headers: HashMap::new(),
        }
    }
}

impl SourceConfig {
    pub fn prepare(&mut self) -> Result<(), PlaylistError> {
        self.url = self.url.trim().to_string();
        if self.url.is_empty() {
            return Err(config_err!("source url can't be empty"));
        }
        if self.timeout_secs == 0 {
            return Err(config_err!("source timeout_secs must be greater than 0"));
        }
        Ok(())
    }
}

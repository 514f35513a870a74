use crate::utils::default_as_true;
// We need serde for these structs to read them during
// start from the yaml file without reading the whole config.

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LogConfig {
    #[serde(default = "default_as_true")]
    pub sanitize_sensitive_info: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_level: Option<String>,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            sanitize_sensitive_info: true,
            log_level: None,
        }
    }
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize, Default)]
pub struct LogLevelConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log: Option<LogConfig>,
}

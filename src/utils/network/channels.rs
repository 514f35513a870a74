use std::path::PathBuf;
use std::time::Duration;
use log::{debug, error};
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, USER_AGENT};
use crate::error::{fetch_err, PlaylistError};
use crate::model::{ChannelRecord, SourceConfig};
use crate::processing::parser::channels::parse_channels;
use crate::utils::{is_remote_url, sanitize_sensitive_info};

pub fn create_client(source: &SourceConfig, user_agent: &str) -> Result<reqwest::Client, PlaylistError> {
    reqwest::Client::builder()
        .timeout(Duration::from_secs(source.timeout_secs))
        .default_headers(get_request_headers(source, user_agent))
        .build()
        .map_err(|err| fetch_err!("Failed to create http client: {err}"))
}

fn get_request_headers(source: &SourceConfig, user_agent: &str) -> HeaderMap {
    let mut headers = HeaderMap::new();
    if let Ok(value) = HeaderValue::from_str(user_agent) {
        headers.insert(USER_AGENT, value);
    }
    for (key, value) in &source.headers {
        match (HeaderName::from_bytes(key.as_bytes()), HeaderValue::from_str(value)) {
            (Ok(name), Ok(value)) => {
                headers.insert(name, value);
            }
            _ => error!("Ignoring invalid request header {key}"),
        }
    }
    headers
}

async fn download_text_content(client: &reqwest::Client, url: &str) -> Result<String, PlaylistError> {
    let response = client.get(url).send().await
        .map_err(|err| fetch_err!("Request failed: {} {}", sanitize_sensitive_info(url), sanitize_sensitive_info(&err.to_string())))?;
    let status = response.status();
    if !status.is_success() {
        return Err(fetch_err!("Request failed with status {status} {}", sanitize_sensitive_info(url)));
    }
    response.text().await
        .map_err(|err| fetch_err!("Failed to read response from {}: {err}", sanitize_sensitive_info(url)))
}

async fn read_file_content(path: &str) -> Result<String, PlaylistError> {
    let file_path = PathBuf::from(path);
    tokio::fs::read_to_string(&file_path).await
        .map_err(|err| fetch_err!("Failed to read channel list {}: {err}", file_path.display()))
}

/// Loads the channel list from an http(s) url or, for anything else, from a local file.
pub async fn get_channels(client: &reqwest::Client, source: &SourceConfig) -> Result<Vec<ChannelRecord>, PlaylistError> {
    debug!("getting channel list from: {}", sanitize_sensitive_info(&source.url));
    let content = if is_remote_url(&source.url) {
        download_text_content(client, &source.url).await?
    } else {
        read_file_content(&source.url).await?
    };
    parse_channels(&content)
}

use regex::Regex;
use std::sync::atomic::AtomicBool;
use std::sync::LazyLock;

pub const CONFIG_FILE: &str = "config.yml";
pub const DEFAULT_OUTPUT_FILE: &str = "playlist.m3u";
pub const DEFAULT_SOURCE_URL: &str = "https://playify.pages.dev/Jiotv.json";
pub const DEFAULT_FETCH_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_USER_AGENT: &str = "StreamFlex/7.1.3 (Linux;Android 13) StreamFlex/69.1 ExoPlayerLib/824.0";
pub const UNKNOWN_CHANNEL_NAME: &str = "Unknown";

pub const ENV_LOG_LEVEL: &str = "PLAYLIST_LOG";

pub struct Constants {
    pub re_credentials: Regex,
    pub re_url: Regex,
    pub re_env_var: Regex,
    pub sanitize: AtomicBool,
}

pub static CONSTANTS: LazyLock<Constants> = LazyLock::new(||
    Constants {
        re_credentials: Regex::new(r"((username|password|token|key|auth)=)[^&]*").unwrap(),
        re_url: Regex::new(r"(.*://).*?/(.*)").unwrap(),
        re_env_var: Regex::new(r"\$\{env:(?P<var>[a-zA-Z_][a-zA-Z0-9_]*)}").unwrap(),
        sanitize: AtomicBool::new(true),
    }
);

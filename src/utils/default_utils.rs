use crate::utils::{DEFAULT_FETCH_TIMEOUT_SECS, DEFAULT_OUTPUT_FILE, DEFAULT_SOURCE_URL, DEFAULT_USER_AGENT};

pub const fn default_as_true() -> bool { true }

pub fn default_source_url() -> String { String::from(DEFAULT_SOURCE_URL) }

// a slow provider should not block the run forever
pub const fn default_fetch_timeout_secs() -> u64 { DEFAULT_FETCH_TIMEOUT_SECS }

pub fn default_output_file() -> String { String::from(DEFAULT_OUTPUT_FILE) }

pub fn default_user_agent() -> String { String::from(DEFAULT_USER_AGENT) }

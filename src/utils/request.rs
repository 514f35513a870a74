use std::borrow::Cow;
use std::sync::atomic::Ordering;
use url::Url;
use crate::utils::CONSTANTS;

pub fn set_sanitize_sensitive_info(value: bool) {
    CONSTANTS.sanitize.store(value, Ordering::Relaxed);
}

pub fn sanitize_sensitive_info(query: &str) -> Cow<'_, str> {
    if !CONSTANTS.sanitize.load(Ordering::Relaxed) {
        return Cow::Borrowed(query);
    }

    let mut result = query.to_owned();

    for (re, replacement) in &[
        (&CONSTANTS.re_credentials, "$1***"),
        (&CONSTANTS.re_url, "$1***/$2"),
    ] {
        result = re.replace_all(&result, *replacement).into_owned();
    }
    Cow::Owned(result)
}

/// Returns true for `http` and `https` urls, everything else is read from disk.
pub fn is_remote_url(value: &str) -> bool {
    value.parse::<Url>().is_ok_and(|url| matches!(url.scheme(), "http" | "https"))
}

/// Percent-encodes a header value for the `key=value&key=value` header notations
/// understood by Kodi-style players.
pub fn encode_header_value(value: &str) -> String {
    url::form_urlencoded::byte_serialize(value.as_bytes())
        .collect::<String>()
        .replace('+', "%20")
}

#[cfg(test)]
mod tests {
    use crate::utils::{encode_header_value, is_remote_url, sanitize_sensitive_info};

    #[test]
    fn test_is_remote_url() {
        assert!(is_remote_url("https://playify.pages.dev/Jiotv.json"));
        assert!(is_remote_url("http://localhost:8080/channels.json"));
        assert!(!is_remote_url("/tmp/channels.json"));
        assert!(!is_remote_url("channels.json"));
        assert!(!is_remote_url("file:///tmp/channels.json"));
    }

    #[test]
    fn test_encode_header_value() {
        assert_eq!(encode_header_value("SESSID=abc; Path=/"), "SESSID%3Dabc%3B%20Path%3D%2F");
        assert_eq!(encode_header_value("plain"), "plain");
    }

    #[test]
    fn test_sanitize_sensitive_info() {
        let sanitized = sanitize_sensitive_info("http://host.tv/live/list.json?token=secret&x=1");
        assert!(!sanitized.contains("secret"));
        assert!(!sanitized.contains("host.tv"));
    }
}

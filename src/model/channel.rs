use crate::utils::{deserialize_as_option_string, UNKNOWN_CHANNEL_NAME};

/// One channel of the source json list. Every field is optional,
/// values of an unexpected json type are treated as absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChannelRecord {
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "deserialize_as_option_string")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "deserialize_as_option_string")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "deserialize_as_option_string")]
    pub logo: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "deserialize_as_option_string")]
    pub link: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "deserialize_as_option_string")]
    pub cookie: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "deserialize_as_option_string")]
    pub drm_scheme: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "deserialize_as_option_string")]
    pub drm_license: Option<String>,
}

fn non_empty(value: Option<&String>) -> Option<&str> {
    value.map(String::as_str).filter(|v| !v.trim().is_empty())
}

impl ChannelRecord {
    #[cfg(test)]
    pub fn new(name: &str, link: &str) -> Self {
        Self {
            name: Some(name.to_string()),
            link: Some(link.to_string()),
            ..Self::default()
        }
    }

    /// Display name, `Unknown` when missing or blank.
    pub fn get_name(&self) -> &str {
        non_empty(self.name.as_ref()).unwrap_or(UNKNOWN_CHANNEL_NAME)
    }

    pub fn get_logo(&self) -> &str {
        self.logo.as_deref().unwrap_or_default()
    }

    pub fn get_link(&self) -> &str {
        self.link.as_deref().unwrap_or_default()
    }

    pub fn get_id(&self) -> Option<&str> {
        non_empty(self.id.as_ref())
    }

    pub fn get_cookie(&self) -> Option<&str> {
        non_empty(self.cookie.as_ref())
    }

    pub fn get_drm_scheme(&self) -> Option<&str> {
        non_empty(self.drm_scheme.as_ref())
    }

    pub fn get_drm_license(&self) -> Option<&str> {
        non_empty(self.drm_license.as_ref())
    }

    /// True when the record needed a field default to be usable.
    pub fn is_malformed(&self) -> bool {
        non_empty(self.name.as_ref()).is_none() || non_empty(self.link.as_ref()).is_none()
    }
}

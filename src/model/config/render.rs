use enum_iterator::Sequence;
use crate::error::{config_err, PlaylistError};
use crate::utils::{default_user_agent, get_trimmed_string};

/// Ways to hand the channel cookie to a player. A playlist may carry several of them,
/// players pick the one they understand.
#[derive(Debug, Copy, Clone, serde::Serialize, serde::Deserialize, Sequence, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum CookieEncoding {
    /// `#EXTVLCOPT:http-header=Cookie: ...`
    HeaderDirective,
    /// `#KODIPROP:inputstream.adaptive.stream_headers=...`
    AdaptiveStreamHeaders,
    /// `#EXTHTTP:{"cookie":"..."}`
    HttpExtensionJson,
    /// `url|User-Agent=...&Cookie=...`
    PipeUrl,
}

fn default_cookie_encoding() -> Vec<CookieEncoding> {
    vec![CookieEncoding::HttpExtensionJson]
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct PromotionalEntry {
    pub name: String,
    #[serde(default)]
    pub logo: String,
    pub link: String,
}

impl Default for PromotionalEntry {
    fn default() -> Self {
        Self {
            name: String::from("StreamFlex+"),
            logo: String::from("https://sflex07.fun/StreamFlexLogo.png"),
            link: String::from("https://sflex07.fun/StreamFlexTG.ts"),
        }
    }
}

#[allow(clippy::struct_excessive_bools)]
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RenderConfig {
    #[serde(default)]
    pub include_promotional_entry: bool,
    #[serde(default)]
    pub promotional_entry: PromotionalEntry,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub epg_url: Option<String>,
    #[serde(default = "default_cookie_encoding")]
    pub cookie_encoding: Vec<CookieEncoding>,
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub referrer: Option<String>,
    #[serde(default)]
    pub section_banners: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_drm_scheme: Option<String>,
    #[serde(default)]
    pub tvg_name: bool,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            include_promotional_entry: false,
            promotional_entry: PromotionalEntry::default(),
            epg_url: None,
            cookie_encoding: default_cookie_encoding(),
            user_agent: default_user_agent(),
            referrer: None,
            section_banners: false,
            default_drm_scheme: None,
            tvg_name: false,
        }
    }
}

impl RenderConfig {
    pub fn has_cookie_encoding(&self, encoding: CookieEncoding) -> bool {
        self.cookie_encoding.contains(&encoding)
    }

    pub fn prepare(&mut self) -> Result<(), PlaylistError> {
        self.epg_url = get_trimmed_string(self.epg_url.as_ref());
        self.referrer = get_trimmed_string(self.referrer.as_ref());
        self.default_drm_scheme = get_trimmed_string(self.default_drm_scheme.as_ref());
        self.user_agent = self.user_agent.trim().to_string();
        if self.user_agent.is_empty() {
            self.user_agent = default_user_agent();
        }

        let mut encodings = Vec::with_capacity(self.cookie_encoding.len());
        for encoding in &self.cookie_encoding {
            if !encodings.contains(encoding) {
                encodings.push(*encoding);
            }
        }
        self.cookie_encoding = encodings;

        if self.include_promotional_entry {
            let entry = &self.promotional_entry;
            if entry.name.trim().is_empty() || entry.link.trim().is_empty() {
                return Err(config_err!("promotional_entry needs a name and a link"));
            }
        }
        Ok(())
    }
}

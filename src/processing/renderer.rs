use crate::model::{CategorizedChannels, Category, ChannelRecord, CookieEncoding, PromotionalEntry, RenderConfig};
use crate::utils::{encode_header_value, sanitize_attribute_value, sanitize_cookie, sanitize_directive_value, sanitize_title};

const HEADER: &str = "#EXTM3U";
const LICENSE_TYPE_DIRECTIVE: &str = "#KODIPROP:inputstream.adaptive.license_type=";
const LICENSE_KEY_DIRECTIVE: &str = "#KODIPROP:inputstream.adaptive.license_key=";
const STREAM_HEADERS_DIRECTIVE: &str = "#KODIPROP:inputstream.adaptive.stream_headers=";
const USER_AGENT_DIRECTIVE: &str = "#EXTVLCOPT:http-user-agent=";
const REFERRER_DIRECTIVE: &str = "#EXTVLCOPT:http-referrer=";
const COOKIE_HEADER_DIRECTIVE: &str = "#EXTVLCOPT:http-header=Cookie: ";
const HTTP_EXTENSION_DIRECTIVE: &str = "#EXTHTTP:";

// One entry as it is written, either a channel or the promotional entry.
struct PlaylistEntry<'a> {
    id: Option<&'a str>,
    name: &'a str,
    logo: &'a str,
    link: String,
    drm_scheme: Option<String>,
    drm_license: Option<String>,
    cookie: Option<String>,
}

fn directive_value(value: Option<&str>) -> Option<String> {
    value.map(sanitize_directive_value).filter(|v| !v.is_empty())
}

impl<'a> PlaylistEntry<'a> {
    fn from_channel(channel: &'a ChannelRecord, default_drm_scheme: Option<&'a str>) -> Self {
        Self {
            id: channel.get_id(),
            name: channel.get_name(),
            logo: channel.get_logo(),
            link: sanitize_directive_value(channel.get_link()),
            drm_scheme: directive_value(channel.get_drm_scheme().or(default_drm_scheme)),
            drm_license: directive_value(channel.get_drm_license()),
            cookie: channel.get_cookie().map(sanitize_cookie).filter(|c| !c.is_empty()),
        }
    }

    fn from_promotional(entry: &'a PromotionalEntry) -> Self {
        Self {
            id: None,
            name: &entry.name,
            logo: &entry.logo,
            link: sanitize_directive_value(&entry.link),
            drm_scheme: None,
            drm_license: None,
            cookie: None,
        }
    }
}

/// Writes categorized channels as an extended m3u document.
///
/// Rendering never fails, missing optional fields are left out of the output.
/// Only the license endpoint of a DRM protected channel is known, never the
/// decryption keys, so such channels might still not play.
pub struct M3uRenderer<'a> {
    config: &'a RenderConfig,
}

impl<'a> M3uRenderer<'a> {
    pub const fn new(config: &'a RenderConfig) -> Self {
        Self { config }
    }

    pub fn render(&self, categorized: &CategorizedChannels) -> String {
        let mut content = self.header();
        for (category, channels) in categorized.non_empty() {
            if self.config.section_banners {
                content.push_str(&format!("#----- {category} -----\n"));
            }
            if self.config.include_promotional_entry {
                self.write_entry(&mut content, category, &PlaylistEntry::from_promotional(&self.config.promotional_entry));
            }
            let default_drm_scheme = self.config.default_drm_scheme.as_deref();
            for channel in channels {
                self.write_entry(&mut content, category, &PlaylistEntry::from_channel(channel, default_drm_scheme));
            }
        }
        content
    }

    fn header(&self) -> String {
        match self.config.epg_url.as_deref() {
            Some(epg_url) => format!("{HEADER} x-tvg-url=\"{}\"\n\n", sanitize_attribute_value(epg_url)),
            None => format!("{HEADER}\n\n"),
        }
    }

    fn write_entry(&self, content: &mut String, category: Category, entry: &PlaylistEntry) {
        let config = self.config;
        content.push_str(&Self::extinf_line(config, category, entry));

        if let Some(drm_scheme) = entry.drm_scheme.as_deref() {
            content.push_str(&format!("{LICENSE_TYPE_DIRECTIVE}{drm_scheme}\n"));
        }
        if let Some(drm_license) = entry.drm_license.as_deref() {
            content.push_str(&format!("{LICENSE_KEY_DIRECTIVE}{drm_license}\n"));
        }

        content.push_str(&format!("{USER_AGENT_DIRECTIVE}{}\n", sanitize_directive_value(&config.user_agent)));
        if let Some(referrer) = directive_value(config.referrer.as_deref()) {
            content.push_str(&format!("{REFERRER_DIRECTIVE}{referrer}\n"));
        }

        if let Some(cookie) = entry.cookie.as_deref() {
            if config.has_cookie_encoding(CookieEncoding::HeaderDirective) {
                content.push_str(&format!("{COOKIE_HEADER_DIRECTIVE}{cookie}\n"));
            }
            if config.has_cookie_encoding(CookieEncoding::AdaptiveStreamHeaders) {
                content.push_str(&format!("{STREAM_HEADERS_DIRECTIVE}{}\n", self.header_block(Some(cookie))));
            }
            if config.has_cookie_encoding(CookieEncoding::HttpExtensionJson) {
                let json = serde_json::json!({ "cookie": cookie });
                content.push_str(&format!("{HTTP_EXTENSION_DIRECTIVE}{json}\n"));
            }
        }

        content.push_str(&entry.link);
        if !entry.link.is_empty() && config.has_cookie_encoding(CookieEncoding::PipeUrl) {
            content.push('|');
            content.push_str(&self.header_block(entry.cookie.as_deref()));
        }
        content.push_str("\n\n");
    }

    fn extinf_line(config: &RenderConfig, category: Category, entry: &PlaylistEntry) -> String {
        let mut line = String::from("#EXTINF:-1");
        if let Some(id) = entry.id {
            line.push_str(&format!(" tvg-id=\"{}\"", sanitize_attribute_value(id)));
        }
        if config.tvg_name {
            line.push_str(&format!(" tvg-name=\"{}\"", sanitize_attribute_value(entry.name)));
        }
        let logo = sanitize_attribute_value(entry.logo);
        if !logo.is_empty() {
            line.push_str(&format!(" tvg-logo=\"{logo}\""));
        }
        format!("{line} group-title=\"{category}\",{}\n", sanitize_title(entry.name))
    }

    // `Key=Value&Key=Value` with percent-encoded values
    fn header_block(&self, cookie: Option<&str>) -> String {
        let mut headers = vec![("User-Agent", self.config.user_agent.as_str())];
        if let Some(referrer) = self.config.referrer.as_deref() {
            headers.push(("Referer", referrer));
        }
        if let Some(cookie) = cookie {
            headers.push(("Cookie", cookie));
        }
        headers.iter()
            .map(|(key, value)| format!("{key}={}", encode_header_value(value)))
            .collect::<Vec<String>>()
            .join("&")
    }
}

#[cfg(test)]
mod tests {
    use crate::model::{CategorizedChannels, Category, ChannelRecord, CookieEncoding, PromotionalEntry, RenderConfig};
    use crate::processing::classifier::ChannelClassifier;
    use crate::processing::parser::channels::parse_channels;
    use crate::processing::renderer::M3uRenderer;

    fn render(config: &RenderConfig, json: &str) -> String {
        let channels = parse_channels(json).unwrap();
        let categorized = ChannelClassifier::default().group(channels);
        M3uRenderer::new(config).render(&categorized)
    }

    fn group_titles(content: &str) -> Vec<String> {
        content.lines()
            .filter(|l| l.starts_with("#EXTINF"))
            .filter_map(|l| l.split("group-title=\"").nth(1))
            .filter_map(|rest| rest.split('"').next())
            .map(ToString::to_string)
            .collect()
    }

    #[test]
    fn test_render_single_channel() {
        let content = render(&RenderConfig::default(), r#"[{"name":"Star Plus HD","link":"http://x/a.m3u8"}]"#);
        let lines = content.lines().collect::<Vec<_>>();
        assert_eq!(lines[0], "#EXTM3U");
        assert_eq!(lines[1], "");
        assert_eq!(lines[2], "#EXTINF:-1 group-title=\"Entertainment\",Star Plus HD");
        assert!(lines[3].starts_with("#EXTVLCOPT:http-user-agent="));
        assert_eq!(lines[4], "http://x/a.m3u8");
        assert_eq!(lines[5], "");
        assert_eq!(lines.len(), 6);
        assert_eq!(content.matches("#EXTINF").count(), 1);
        assert!(content.ends_with("http://x/a.m3u8\n\n"));
    }

    #[test]
    fn test_render_epg_header() {
        let config = RenderConfig { epg_url: Some("https://avkb.short.gy/jioepg.xml.gz".to_string()), ..RenderConfig::default() };
        let content = render(&config, "[]");
        assert_eq!(content, "#EXTM3U x-tvg-url=\"https://avkb.short.gy/jioepg.xml.gz\"\n\n");
        assert_eq!(content.matches("#EXTM3U").count(), 1);
    }

    #[test]
    fn test_render_category_order() {
        let json = r#"[
            {"name":"DD National","link":"http://x/1"},
            {"name":"Aastha","link":"http://x/2"},
            {"name":"MTV Beats","link":"http://x/3"},
            {"name":"Aaj Tak","link":"http://x/4"},
            {"name":"Pogo","link":"http://x/5"},
            {"name":"Star Sports 1","link":"http://x/6"},
            {"name":"Sony Max","link":"http://x/7"},
            {"name":"Colors HD","link":"http://x/8"},
            {"name":"Star Sports 2","link":"http://x/9"}
        ]"#;
        let content = render(&RenderConfig::default(), json);
        assert_eq!(group_titles(&content), vec!["Entertainment", "Movies", "Sports", "Sports", "Kids", "News", "Music", "Religious", "Others"]);
        let sports_1 = content.find("Star Sports 1").unwrap();
        let sports_2 = content.find("Star Sports 2").unwrap();
        assert!(sports_1 < sports_2);
    }

    #[test]
    fn test_render_skips_empty_categories_with_banners() {
        let config = RenderConfig { section_banners: true, ..RenderConfig::default() };
        let content = render(&config, r#"[{"name":"NDTV 24x7","link":"http://x/1"},{"name":"Colors","link":"http://x/2"}]"#);
        assert_eq!(content.matches("#-----").count(), 2);
        assert!(content.contains("#----- Entertainment -----\n#EXTINF"));
        assert!(content.contains("#----- News -----\n#EXTINF"));
        assert!(!content.contains("Sports"));
        assert!(content.find("Entertainment").unwrap() < content.find("News").unwrap());
    }

    #[test]
    fn test_render_promotional_entry_per_category() {
        let config = RenderConfig { include_promotional_entry: true, ..RenderConfig::default() };
        let json = r#"[
            {"name":"Star Sports 1","link":"http://x/1"},
            {"name":"Colors","link":"http://x/2"},
            {"name":"Sony Ten Cricket","link":"http://x/3"}
        ]"#;
        let content = render(&config, json);
        let titles = group_titles(&content);
        assert_eq!(titles.iter().filter(|t| *t == "Sports").count(), 3);
        assert_eq!(titles.iter().filter(|t| *t == "Entertainment").count(), 2);
        assert_eq!(content.matches(",StreamFlex+\n").count(), 2);

        // the promotional entry heads each category
        let lines = content.lines().filter(|l| l.starts_with("#EXTINF")).collect::<Vec<_>>();
        assert!(lines[0].ends_with(",StreamFlex+"));
        assert!(lines[0].contains("group-title=\"Entertainment\""));
        assert!(lines[2].ends_with(",StreamFlex+"));
        assert!(lines[2].contains("group-title=\"Sports\""));
    }

    #[test]
    fn test_render_custom_promotional_entry() {
        let config = RenderConfig {
            include_promotional_entry: true,
            promotional_entry: PromotionalEntry { name: "Promo".to_string(), logo: String::new(), link: "http://promo/tg.ts".to_string() },
            default_drm_scheme: Some("clearkey".to_string()),
            ..RenderConfig::default()
        };
        let mut categorized = CategorizedChannels::new();
        categorized.push(Category::Music, ChannelRecord::new("Zoom", "http://x/zoom.m3u8"));
        let content = M3uRenderer::new(&config).render(&categorized);
        let promo = content.split("\n\n").nth(1).unwrap();
        assert_eq!(promo.lines().next(), Some("#EXTINF:-1 group-title=\"Music\",Promo"));
        assert!(!promo.contains("license_type"));
        assert!(promo.ends_with("http://promo/tg.ts"));
        // the default scheme only applies to channels
        assert_eq!(content.matches("#KODIPROP:inputstream.adaptive.license_type=clearkey").count(), 1);
    }

    #[test]
    fn test_render_drm_directives() {
        let json = r#"[
            {"name":"Colors HD","logo":"http://l/c.png","link":"http://x/c.mpd","drmScheme":"clearkey","drmLicense":"http://lic/c"},
            {"name":"Colors Rishtey","link":"http://x/r.mpd","drmLicense":"http://lic/r"},
            {"name":"Colors Cineplex","link":"http://x/p.mpd"}
        ]"#;
        let content = render(&RenderConfig::default(), json);
        let entries = content.split("\n\n").skip(1).filter(|e| !e.is_empty()).collect::<Vec<_>>();
        assert_eq!(entries.len(), 3);
        assert_eq!(entries[0].lines().collect::<Vec<_>>()[..3], [
            "#EXTINF:-1 tvg-logo=\"http://l/c.png\" group-title=\"Entertainment\",Colors HD",
            "#KODIPROP:inputstream.adaptive.license_type=clearkey",
            "#KODIPROP:inputstream.adaptive.license_key=http://lic/c",
        ]);
        assert!(!entries[1].contains("license_type"));
        assert!(entries[1].contains("#KODIPROP:inputstream.adaptive.license_key=http://lic/r"));
        assert!(!entries[2].contains("#KODIPROP"));
    }

    #[test]
    fn test_render_cookie_header_directive() {
        let config = RenderConfig { cookie_encoding: vec![CookieEncoding::HeaderDirective], ..RenderConfig::default() };
        let content = render(&config, r#"[{"name":"Star Plus","link":"http://x/a.m3u8","cookie":"  \"SESSID=abc; Path=/\" "}]"#);
        assert!(content.contains("#EXTVLCOPT:http-header=Cookie: SESSID=abc; Path=/\n"));
        assert!(!content.contains("#EXTHTTP"));
        let entry = content.split("\n\n").nth(1).unwrap();
        let cookie_line = entry.lines().find(|l| l.contains("Cookie")).unwrap();
        assert!(!cookie_line.contains('"'));
    }

    #[test]
    fn test_render_cookie_http_extension_is_valid_json() {
        let content = render(&RenderConfig::default(), r#"[{"name":"Star Plus","link":"http://x/a.m3u8","cookie":"a=\"1\"; b=\\2"}]"#);
        let line = content.lines().find(|l| l.starts_with("#EXTHTTP:")).unwrap();
        let json: serde_json::Value = serde_json::from_str(line.trim_start_matches("#EXTHTTP:")).unwrap();
        assert_eq!(json["cookie"], "a=1; b=\\2");
    }

    #[test]
    fn test_render_all_cookie_encodings() {
        let config = RenderConfig {
            cookie_encoding: enum_iterator::all::<CookieEncoding>().collect(),
            user_agent: "Player/1.0".to_string(),
            referrer: Some("https://www.jiotv.com/".to_string()),
            ..RenderConfig::default()
        };
        let content = render(&config, r#"[{"name":"Star Plus","link":"http://x/a.m3u8","cookie":"SESSID=abc"}]"#);
        let lines = content.lines().collect::<Vec<_>>();
        assert_eq!(lines[2..9], [
            "#EXTINF:-1 group-title=\"Entertainment\",Star Plus",
            "#EXTVLCOPT:http-user-agent=Player/1.0",
            "#EXTVLCOPT:http-referrer=https://www.jiotv.com/",
            "#EXTVLCOPT:http-header=Cookie: SESSID=abc",
            "#KODIPROP:inputstream.adaptive.stream_headers=User-Agent=Player%2F1.0&Referer=https%3A%2F%2Fwww.jiotv.com%2F&Cookie=SESSID%3Dabc",
            "#EXTHTTP:{\"cookie\":\"SESSID=abc\"}",
            "http://x/a.m3u8|User-Agent=Player%2F1.0&Referer=https%3A%2F%2Fwww.jiotv.com%2F&Cookie=SESSID%3Dabc",
        ]);
    }

    #[test]
    fn test_render_pipe_url_without_cookie() {
        let config = RenderConfig { cookie_encoding: vec![CookieEncoding::PipeUrl], user_agent: "UA".to_string(), ..RenderConfig::default() };
        let content = render(&config, r#"[{"name":"Star Plus","link":"http://x/a.m3u8"},{"name":"Colors"}]"#);
        assert!(content.contains("\nhttp://x/a.m3u8|User-Agent=UA\n"));
        // no pipe block without a link
        assert!(!content.contains("\n|"));
    }

    #[test]
    fn test_render_blank_cookie_is_skipped() {
        let content = render(&RenderConfig::default(), r#"[{"name":"Star Plus","link":"http://x/a.m3u8","cookie":" \"\" "}]"#);
        assert!(!content.contains("#EXTHTTP"));
    }

    #[test]
    fn test_render_attributes() {
        let config = RenderConfig { tvg_name: true, ..RenderConfig::default() };
        let content = render(&config, r#"[{"id":144,"name":"Star \"Plus\"\nHD","logo":"http://l/\"x\".png","link":"http://x/a.m3u8"}]"#);
        let extinf = content.lines().find(|l| l.starts_with("#EXTINF")).unwrap();
        assert_eq!(extinf, "#EXTINF:-1 tvg-id=\"144\" tvg-name=\"Star Plus HD\" tvg-logo=\"http://l/x.png\" group-title=\"Entertainment\",Star \"Plus\" HD");
    }

    #[test]
    fn test_render_multi_line_values_stay_in_one_entry() {
        let config = RenderConfig {
            cookie_encoding: vec![CookieEncoding::HeaderDirective],
            user_agent: "Player/1.0\n#EXTINF:-1,UA".to_string(),
            referrer: Some("https://ref/\r\n#EXTINF:-1,Referrer".to_string()),
            ..RenderConfig::default()
        };
        let json = r#"[{
            "name":"Star Sports 1",
            "link":"http://x/a.m3u8\n\n#EXTINF:-1 group-title=\"Sports\",Fake\nhttp://evil/b",
            "drmScheme":"clearkey\n#EXTINF:-1 group-title=\"Kids\",Ghost",
            "drmLicense":"http://lic/a\r\nhttp://evil/c",
            "cookie":"SESSID=abc\n#EXTINF:-1,Cookie"
        }]"#;
        let content = render(&config, json);
        assert_eq!(content.lines().filter(|l| l.starts_with("#EXTINF")).count(), 1);
        assert_eq!(content.matches("\n\n").count(), 2);
        assert!(!content.contains("http://evil"));
        let lines = content.lines().collect::<Vec<_>>();
        assert_eq!(lines[2..9], [
            "#EXTINF:-1 group-title=\"Sports\",Star Sports 1",
            "#KODIPROP:inputstream.adaptive.license_type=clearkey",
            "#KODIPROP:inputstream.adaptive.license_key=http://lic/a",
            "#EXTVLCOPT:http-user-agent=Player/1.0",
            "#EXTVLCOPT:http-referrer=https://ref/",
            "#EXTVLCOPT:http-header=Cookie: SESSID=abc #EXTINF:-1,Cookie",
            "http://x/a.m3u8",
        ]);
    }

    #[test]
    fn test_render_unknown_channel() {
        let content = render(&RenderConfig::default(), r#"[{"logo":"http://l/x.png"}]"#);
        assert!(content.contains("group-title=\"Others\",Unknown\n"));
    }
}

use std::collections::HashSet;
use crate::error::{config_err, handle_playlist_error_result_list, PlaylistError, PlaylistErrorKind};
use crate::model::Category;

// Evaluation order matters, the first rule with a matching keyword wins.
const DEFAULT_CATEGORY_KEYWORDS: &[(Category, &[&str])] = &[
    (Category::Sports, &["sport", "cricket", "football", "tennis", "fifa", "espn", "euro", "kabaddi", "hockey", "wwe", "f1", "moto", "racing"]),
    (Category::Kids, &["kids", "cartoon", "pogo", "nick", "disney", "hungama", "sonic", "discovery kids", "junior"]),
    (Category::Movies, &["movie", "cinema", "gold", "max", "flix", "pictures", "film", "action", "classic", "thriller"]),
    (Category::News, &["news", "aaj tak", "ndtv", "abp", "india today", "republic", "times now", "news18", "cnbc", "zee news", "tv9"]),
    (Category::Music, &["music", "mtv", "9xm", "zoom", "bindass", "b4u", "mastii"]),
    (Category::Religious, &["bhakti", "spiritual", "religious", "aastha", "sanskar", "vedic"]),
    (Category::Entertainment, &["hd", "plus", "colors", "zee", "star", "sony", "sab", "&tv", "rishtey", "utsav", "life", "dangal"]),
];

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct CategoryRule {
    pub category: Category,
    #[serde(default)]
    pub keywords: Vec<String>,
}

impl CategoryRule {
    pub fn new(category: Category, keywords: &[&str]) -> Self {
        Self {
            category,
            keywords: keywords.iter().map(ToString::to_string).collect(),
        }
    }

    fn prepare(&mut self) -> Result<(), PlaylistError> {
        if self.category == Category::Others {
            return Err(config_err!("'Others' is the fallback category and can't have keywords"));
        }
        self.keywords = self.keywords.iter()
            .map(|k| k.trim().to_lowercase())
            .filter(|k| !k.is_empty())
            .collect();
        Ok(())
    }
}

pub fn default_category_rules() -> Vec<CategoryRule> {
    DEFAULT_CATEGORY_KEYWORDS.iter()
        .map(|(category, keywords)| CategoryRule::new(*category, keywords))
        .collect()
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ClassifierConfig {
    #[serde(default = "default_category_rules")]
    pub rules: Vec<CategoryRule>,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self { rules: default_category_rules() }
    }
}

impl ClassifierConfig {
    pub fn prepare(&mut self) -> Result<(), PlaylistError> {
        handle_playlist_error_result_list!(PlaylistErrorKind::Config, self.rules.iter_mut().map(CategoryRule::prepare));
        let mut seen = HashSet::new();
        for rule in &self.rules {
            if !seen.insert(rule.category) {
                return Err(config_err!("category {} is configured more than once", rule.category));
            }
        }
        Ok(())
    }
}

use log::trace;
use crate::model::{CategorizedChannels, Category, CategoryRule, ChannelRecord, ClassifierConfig};

/// Keyword based channel classifier.
///
/// The rules are tested in their configured order and the first rule with a keyword
/// contained in the lower-cased channel name decides the category.
/// Channels matching no rule end up in [`Category::Others`].
pub struct ChannelClassifier {
    rules: Vec<CategoryRule>,
}

impl Default for ChannelClassifier {
    fn default() -> Self {
        Self::from_config(&ClassifierConfig::default())
    }
}

impl ChannelClassifier {
    pub fn from_config(config: &ClassifierConfig) -> Self {
        Self {
            rules: config.rules.iter()
                .map(|rule| CategoryRule {
                    category: rule.category,
                    keywords: rule.keywords.iter().map(|k| k.to_lowercase()).filter(|k| !k.is_empty()).collect(),
                })
                .collect(),
        }
    }

    pub fn classify(&self, channel: &ChannelRecord) -> Category {
        self.classify_name(channel.get_name())
    }

    pub fn classify_name(&self, name: &str) -> Category {
        let name_lower = name.to_lowercase();
        for rule in &self.rules {
            if let Some(keyword) = rule.keywords.iter().find(|keyword| name_lower.contains(keyword.as_str())) {
                trace!("Channel '{name}' matched keyword '{keyword}' of {}", rule.category);
                return rule.category;
            }
        }
        Category::Others
    }

    /// Buckets the channels in one pass, keeping their input order inside each category.
    pub fn group(&self, channels: Vec<ChannelRecord>) -> CategorizedChannels {
        let mut categorized = CategorizedChannels::new();
        for channel in channels {
            let category = self.classify(&channel);
            categorized.push(category, channel);
        }
        categorized
    }
}

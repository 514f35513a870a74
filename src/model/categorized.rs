use indexmap::IndexMap;
use crate::model::{Category, ChannelRecord};

/// Channels bucketed by category. Every category is present from the start,
/// in section order, so lookups never depend on which categories received channels.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategorizedChannels {
    groups: IndexMap<Category, Vec<ChannelRecord>>,
}

impl Default for CategorizedChannels {
    fn default() -> Self {
        Self::new()
    }
}

impl CategorizedChannels {
    pub fn new() -> Self {
        Self {
            groups: enum_iterator::all::<Category>().map(|category| (category, Vec::new())).collect(),
        }
    }

    pub fn push(&mut self, category: Category, channel: ChannelRecord) {
        self.groups.entry(category).or_default().push(channel);
    }

    pub fn get(&self, category: Category) -> &[ChannelRecord] {
        self.groups.get(&category).map(Vec::as_slice).unwrap_or_default()
    }

    pub fn len(&self, category: Category) -> usize {
        self.get(category).len()
    }

    pub fn total(&self) -> usize {
        self.groups.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }

    /// Categories holding at least one channel, in section order.
    pub fn non_empty(&self) -> impl Iterator<Item=(Category, &[ChannelRecord])> {
        self.groups.iter()
            .filter(|(_, channels)| !channels.is_empty())
            .map(|(category, channels)| (*category, channels.as_slice()))
    }

    pub fn categories_present(&self) -> usize {
        self.non_empty().count()
    }
}

use std::fmt::Display;
use indexmap::IndexMap;
use serde::{Serialize, Serializer};
use crate::model::{CategorizedChannels, Category};

pub fn format_elapsed_time(millis: u64) -> String {
    let seconds = millis / 1000;
    if seconds < 1 {
        format!("{millis} ms")
    } else if seconds < 60 {
        format!("{seconds} secs")
    } else {
        let minutes = seconds / 60;
        let seconds = seconds % 60;
        format!("{minutes}:{seconds:02} mins")
    }
}

fn serialize_elapsed_time<S>(millis: &u64, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&format_elapsed_time(*millis))
}

/// Summary of one playlist run.
#[derive(Debug, Clone, Serialize)]
pub struct PlaylistStats {
    #[serde(rename = "channels")]
    pub channel_count: usize,
    #[serde(rename = "promotional")]
    pub promotional_count: usize,
    #[serde(rename = "malformed")]
    pub malformed_count: usize,
    pub categories: IndexMap<Category, usize>,
    #[serde(rename = "took", serialize_with = "serialize_elapsed_time")]
    pub millis_took: u64,
}

impl PlaylistStats {
    pub fn new(categorized: &CategorizedChannels, include_promotional_entry: bool) -> Self {
        let categories: IndexMap<Category, usize> = enum_iterator::all::<Category>()
            .map(|category| (category, categorized.len(category)))
            .filter(|(_, count)| *count > 0)
            .collect();
        Self {
            channel_count: categorized.total(),
            promotional_count: if include_promotional_entry { categories.len() } else { 0 },
            malformed_count: 0,
            categories,
            millis_took: 0,
        }
    }

    pub fn entry_count(&self) -> usize {
        self.channel_count + self.promotional_count
    }
}

impl Display for PlaylistStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        serde_json::to_string(&self).map_or(Err(std::fmt::Error), |json_str| write!(f, "{json_str}"))
    }
}

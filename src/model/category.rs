use std::fmt::{Display, Formatter};
use enum_iterator::Sequence;

/// Content category of a channel. The declaration order is the section order of the playlist.
#[derive(Debug, Copy, Clone, serde::Serialize, serde::Deserialize, Sequence,
    PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub enum Category {
    Entertainment,
    Movies,
    Sports,
    Kids,
    News,
    Music,
    Religious,
    #[default]
    Others,
}

impl Category {
    pub const fn as_str(self) -> &'static str {
        match self {
            Category::Entertainment => "Entertainment",
            Category::Movies => "Movies",
            Category::Sports => "Sports",
            Category::Kids => "Kids",
            Category::News => "News",
            Category::Music => "Music",
            Category::Religious => "Religious",
            Category::Others => "Others",
        }
    }
}

impl Display for Category {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

use std::error::Error;
use std::fmt::{Display, Formatter, Result};

#[macro_export]
macro_rules! create_playlist_error {
    ($kind: expr, $($arg:tt)*) => {
        $crate::error::PlaylistError::new($kind, format!($($arg)*))
    }
}

pub use create_playlist_error;

#[macro_export]
macro_rules! fetch_err {
    ($($arg:tt)*) => {
        $crate::error::PlaylistError::new($crate::error::PlaylistErrorKind::Fetch, format!($($arg)*))
    };
}

pub use fetch_err;

#[macro_export]
macro_rules! config_err {
    ($($arg:tt)*) => {
        $crate::error::PlaylistError::new($crate::error::PlaylistErrorKind::Config, format!($($arg)*))
    };
}

pub use config_err;

#[macro_export]
macro_rules! handle_playlist_error_result_list {
    ($kind:expr, $result: expr) => {
        let errors = $result
            .filter_map(|result| {
                if let Err(err) = result {
                    Some(err.to_string())
                } else {
                    None
                }
            })
            .collect::<Vec<String>>();
        if !&errors.is_empty() {
            return Err($crate::error::PlaylistError::new($kind, errors.join("\n")));
        }
    }
}

pub use handle_playlist_error_result_list;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum PlaylistErrorKind {
    // download, status or decoding of the channel list
    Fetch,
    Config,
    Write,
}

impl Display for PlaylistErrorKind {
    fn fmt(&self, f: &mut Formatter) -> Result {
        let name = match self {
            PlaylistErrorKind::Fetch => "fetch",
            PlaylistErrorKind::Config => "config",
            PlaylistErrorKind::Write => "write",
        };
        write!(f, "{name}")
    }
}

#[derive(Debug)]
pub struct PlaylistError {
    pub kind: PlaylistErrorKind,
    pub message: String,
}

impl PlaylistError {
    pub const fn new(kind: PlaylistErrorKind, message: String) -> Self {
        Self { kind, message }
    }
}

impl Display for PlaylistError {
    fn fmt(&self, f: &mut Formatter) -> Result {
        write!(f, "Playlist {} error: {}", self.kind, self.message)
    }
}

impl Error for PlaylistError {}

mod playlist_error;

pub use self::playlist_error::*;

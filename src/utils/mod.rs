#[macro_use]
pub mod sys_utils;
mod constants;
mod default_utils;
mod logging;
mod string_utils;
mod request;
mod serde_utils;
pub mod file;
pub mod network;

pub use self::constants::*;
pub use self::default_utils::*;
pub use self::logging::*;
pub use self::string_utils::*;
pub use self::request::*;
pub use self::serde_utils::*;
pub use self::file::*;

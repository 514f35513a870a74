mod category;
mod categorized;
mod channel;
mod config;
mod stats;

pub use self::category::*;
pub use self::categorized::*;
pub use self::channel::*;
pub use self::config::*;
pub use self::stats::*;

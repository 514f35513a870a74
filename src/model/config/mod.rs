mod classifier;
mod app;
mod log;
mod output;
mod render;
mod source;

pub use self::classifier::*;
pub use self::app::*;
pub use self::log::*;
pub use self::output::*;
pub use self::render::*;
pub use self::source::*;

pub mod classifier;
pub mod parser;
pub mod processor;
pub mod renderer;

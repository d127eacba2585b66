//! CLI command handlers, one per file.

mod clear;
mod export;
mod generate;
mod history;
mod normalize;

pub use clear::run_clear;
pub use export::run_export;
pub use generate::run_generate;
pub use history::run_history;
pub use normalize::run_normalize;

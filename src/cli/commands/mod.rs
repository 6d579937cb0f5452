//! CLI command implementations

pub mod clear;
pub mod completions;
pub mod get;
pub mod list;
pub mod save;

pub use clear::execute as clear;
pub use completions::execute as completions;
pub use get::execute as get;
pub use list::execute as list;
pub use save::execute as save;

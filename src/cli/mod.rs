pub mod commands;
pub mod run;
pub mod check;
pub mod validate;

pub use commands::{Cli, Commands};

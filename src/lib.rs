pub mod audit;
pub mod cli;
pub mod client;
pub mod config;
pub mod errors;
pub mod models;
pub mod pipeline;
pub mod reporting;
pub mod utils;

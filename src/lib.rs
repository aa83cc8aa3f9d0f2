pub mod cli;
pub mod config;
pub mod freshness;
pub mod input;
pub mod output;

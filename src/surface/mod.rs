pub mod config;
pub mod export;
pub mod generator;
pub mod types;

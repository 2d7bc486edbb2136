pub mod config;
pub mod generate;
pub mod solve;

pub mod cli;
pub mod config;
pub mod mcp;
pub mod trello;

#[cfg(test)]
mod config_test;

pub mod config;
pub mod error;
pub mod feed;
pub mod market;
pub mod matcher;
pub mod paper;
pub mod server;
pub mod session;
pub mod state;
pub mod triggers;
pub mod types;
pub mod web;

#[cfg(test)]
mod tests;

pub mod config;
pub mod constants;
pub mod ethereum;
pub mod server;
pub mod tools;

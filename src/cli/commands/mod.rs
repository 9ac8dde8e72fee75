pub mod add;
pub mod config;
pub mod dashboard;
pub mod del;
pub mod export;
pub mod init;
pub mod list;
pub mod log;
pub mod paid;
pub mod settings;
pub mod term;

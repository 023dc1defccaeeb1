pub mod about;
pub mod config;
pub mod export;
pub mod home;
pub mod init;
pub mod messages;
pub mod show;
pub mod stats;

//! Command implementations.

pub mod config;
pub mod events;
pub mod logo;
pub mod signs;
pub mod version;

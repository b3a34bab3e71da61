//! Infrastructure adapters for IO, config, logging, and notebook output.

pub mod config;
pub mod fs;
pub mod logging;
pub mod notebook;

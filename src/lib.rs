//! Hostman - add, update, remove or sinkhole hosts file entries.

pub mod cli;
pub mod error;
pub mod hosts;
pub mod platform;
pub mod resolver;

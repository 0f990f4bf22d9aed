//! Error kinds shared across the crate.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, HostmanError>;

/// Everything that can terminate an invocation. All variants are fatal;
/// main prints the message and exits non-zero.
#[derive(Debug, Error)]
pub enum HostmanError {
    #[error("you need to have root privileges to modify the hosts file")]
    Permission,

    #[error("the hostname {0} could not be resolved")]
    Resolution(String),

    #[error("{0} is not a valid IP address")]
    Validation(String),

    #[error("hosts file I/O failed: {0}")]
    Io(#[from] std::io::Error),
}

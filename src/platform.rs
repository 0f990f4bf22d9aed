//! Privilege check for hosts file mutation.

use crate::error::{HostmanError, Result};
use crate::hosts::HOSTS_FILE_ENV;

/// Fail unless running with elevated privileges. Checked once per operation,
/// before any resolution or file access.
///
/// Skipped when HOSTMAN_HOSTS_FILE is set: the override exists so tests can
/// edit a user-owned file, where root is neither needed nor wanted.
pub fn ensure_elevated() -> Result<()> {
    if std::env::var(HOSTS_FILE_ENV).is_ok() {
        return Ok(());
    }
    if !is_elevated() {
        return Err(HostmanError::Permission);
    }
    Ok(())
}

#[cfg(unix)]
fn is_elevated() -> bool {
    unsafe { libc::geteuid() == 0 }
}

#[cfg(not(unix))]
fn is_elevated() -> bool {
    false
}

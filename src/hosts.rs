//! Hosts file read/rewrite: token matching, upsert, remove.

use std::fs;
use std::net::IpAddr;
use std::path::{Path, PathBuf};

use crate::error::Result;

/// System hosts file path (hardcoded; platform discovery is out of scope).
pub const HOSTS_PATH: &str = "/etc/hosts";

/// Env var that redirects edits to another file (e.g. in tests).
pub const HOSTS_FILE_ENV: &str = "HOSTMAN_HOSTS_FILE";

/// Outcome of an upsert: whether the hostname was already present.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Upsert {
    Added,
    Updated,
}

/// Handle on a hosts file. Content is read fresh per call, mutated in
/// memory and written back whole (truncating); nothing is cached.
#[derive(Debug, Clone)]
pub struct HostsFile {
    path: PathBuf,
}

impl HostsFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The file hostman edits: HOSTMAN_HOSTS_FILE if set, else /etc/hosts.
    pub fn system() -> Self {
        match std::env::var(HOSTS_FILE_ENV) {
            Ok(path) => Self::new(path),
            Err(_) => Self::new(HOSTS_PATH),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Replace the hostname's entry with `"{ip} {hostname}"`, or append one.
    ///
    /// Every line carrying the hostname as a token counts as its entry; when
    /// several lines match they collapse into a single rewritten line (the
    /// first match is replaced in place, the rest are dropped). Aliases on a
    /// matched line are not preserved.
    pub fn upsert(&self, hostname: &str, ip: IpAddr) -> Result<Upsert> {
        let content = fs::read_to_string(&self.path)?;
        let entry = format!("{ip} {hostname}");

        let mut lines: Vec<&str> = Vec::new();
        let mut matched = false;
        for line in content.lines() {
            if line_has_hostname(line, hostname) {
                if !matched {
                    lines.push(&entry);
                    matched = true;
                }
                // duplicate entries collapse into the single rewrite above
            } else {
                lines.push(line);
            }
        }

        let outcome = if matched {
            Upsert::Updated
        } else {
            lines.push(&entry);
            Upsert::Added
        };

        self.write_lines(&lines)?;
        Ok(outcome)
    }

    /// Delete every line carrying the hostname as a token. Returns whether
    /// anything matched; removing an absent hostname is a no-op write.
    pub fn remove(&self, hostname: &str) -> Result<bool> {
        let content = fs::read_to_string(&self.path)?;
        let lines: Vec<&str> = content
            .lines()
            .filter(|l| !line_has_hostname(l, hostname))
            .collect();
        let removed = content.lines().count() != lines.len();
        self.write_lines(&lines)?;
        Ok(removed)
    }

    fn write_lines(&self, lines: &[&str]) -> Result<()> {
        let mut content = lines.join("\n");
        if !content.is_empty() {
            content.push('\n');
        }
        fs::write(&self.path, content)?;
        Ok(())
    }
}

/// Line-oriented match: the exact hostname anywhere among the line's
/// whitespace-separated tokens. Never a partial-token match.
pub fn line_has_hostname(line: &str, hostname: &str) -> bool {
    line.split_whitespace().any(|tok| tok == hostname)
}

//! CLI definitions and command routing.

use std::net::{IpAddr, Ipv4Addr};
use std::str::FromStr;

use anyhow::Result;
use clap::Parser;

use crate::error::HostmanError;
use crate::hosts::{HostsFile, Upsert};
use crate::platform;
use crate::resolver;

/// Loopback sentinel written for sinkholed hostnames.
pub const SINKHOLE_IP: IpAddr = IpAddr::V4(Ipv4Addr::LOCALHOST);

#[derive(Parser)]
#[command(name = "hostman")]
#[command(
    about = "Add or remove a hostname to/from the hosts file. By default, \
             hostnames are resolved via the Google nameserver (8.8.8.8)"
)]
pub struct Cli {
    /// The hostname to add, update or remove
    pub hostname: String,

    /// Specific IP address to associate with the hostname (skips resolution)
    #[arg(short, long)]
    pub ip: Option<String>,

    /// Remove the hostname from the hosts file
    #[arg(short, long)]
    pub remove: bool,

    /// Redirect the hostname to the loopback address, blocking traffic
    /// to it (useful for parental controls or ad/tracker blocking)
    #[arg(short, long)]
    pub sinkhole: bool,

    /// Nameserver to use when resolving the hostname
    #[arg(short, long)]
    pub nameserver: Option<String>,
}

/// Run CLI and dispatch to handlers.
pub fn run() -> Result<()> {
    let cli = Cli::parse();

    // A malformed nameserver fails before any DNS query or file access.
    let nameserver = match cli.nameserver.as_deref() {
        Some(s) => parse_ip(s)?,
        None => resolver::DEFAULT_NAMESERVER,
    };

    if cli.remove {
        cmd_remove(&cli.hostname)
    } else {
        // Sinkhole overrides an explicit --ip.
        let ip = if cli.sinkhole {
            Some(SINKHOLE_IP.to_string())
        } else {
            cli.ip
        };
        cmd_add(&cli.hostname, ip.as_deref(), nameserver)
    }
}

fn cmd_add(hostname: &str, ip: Option<&str>, nameserver: IpAddr) -> Result<()> {
    platform::ensure_elevated()?;

    let ip = match ip {
        Some(s) => parse_ip(s)?,
        None => IpAddr::V4(resolver::resolve(hostname, nameserver)?),
    };

    let hosts = HostsFile::system();
    match hosts.upsert(hostname, ip)? {
        Upsert::Added if ip == SINKHOLE_IP => println!("{hostname} added to sinkhole"),
        Upsert::Added => println!("{hostname} added to hosts with IP {ip}"),
        Upsert::Updated => println!("{hostname} updated to {}", display_ip(ip)),
    }
    Ok(())
}

fn cmd_remove(hostname: &str) -> Result<()> {
    platform::ensure_elevated()?;

    let hosts = HostsFile::system();
    hosts.remove(hostname)?;
    println!("{hostname} removed from hosts file.");
    Ok(())
}

fn parse_ip(s: &str) -> std::result::Result<IpAddr, HostmanError> {
    IpAddr::from_str(s).map_err(|_| HostmanError::Validation(s.to_string()))
}

/// The loopback sentinel reads as "sinkhole" in user-facing messages.
fn display_ip(ip: IpAddr) -> String {
    if ip == SINKHOLE_IP {
        "sinkhole".to_string()
    } else {
        ip.to_string()
    }
}

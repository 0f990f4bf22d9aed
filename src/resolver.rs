//! A-record lookup against an explicit nameserver.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use hickory_resolver::config::{NameServerConfig, ResolverConfig};
use hickory_resolver::name_server::TokioConnectionProvider;
use hickory_resolver::proto::xfer::Protocol;
use hickory_resolver::TokioResolver;

use crate::error::{HostmanError, Result};

/// Google public DNS, queried when no nameserver is given.
pub const DEFAULT_NAMESERVER: IpAddr = IpAddr::V4(Ipv4Addr::new(8, 8, 8, 8));

const DNS_PORT: u16 = 53;

/// Resolve the hostname's A record via the given nameserver and return the
/// first answer. The caller has already validated the nameserver address.
/// No retries; a hung query blocks for the resolver's default timeout.
pub fn resolve(hostname: &str, nameserver: IpAddr) -> Result<Ipv4Addr> {
    let rt = tokio::runtime::Runtime::new()?;
    rt.block_on(lookup_a(hostname, nameserver))
}

async fn lookup_a(hostname: &str, nameserver: IpAddr) -> Result<Ipv4Addr> {
    let mut config = ResolverConfig::new();
    config.add_name_server(NameServerConfig::new(
        SocketAddr::new(nameserver, DNS_PORT),
        Protocol::Udp,
    ));
    let resolver =
        TokioResolver::builder_with_config(config, TokioConnectionProvider::default()).build();

    let lookup = resolver
        .ipv4_lookup(hostname)
        .await
        .map_err(|_| HostmanError::Resolution(hostname.to_string()))?;

    lookup
        .iter()
        .next()
        .map(|a| a.0)
        .ok_or_else(|| HostmanError::Resolution(hostname.to_string()))
}

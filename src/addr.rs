use std::net::SocketAddr;
use std::str::FromStr;

use log::debug;
use url::{Host, Url};

use crate::error::{Error, Result};

#[derive(Debug, Clone)]
pub struct Addr {
    url: Url,
}

impl FromStr for Addr {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let mut raw = String::from(s);
        if !raw.contains("://") {
            raw.insert_str(0, "http://");
        }
        let url = Url::parse(&raw)?;
        if url.scheme() != "http" {
            return Err(Error::UnsupportedScheme(url.scheme().to_string()));
        }
        if url.host().is_none() {
            return Err(Error::InvalidHost);
        }

        Ok(Addr { url })
    }
}

impl Addr {
    pub fn host(&self) -> Result<String> {
        match self.url.host() {
            Some(Host::Ipv4(ipv4)) => Ok(ipv4.to_string()),
            Some(Host::Ipv6(ipv6)) => Ok(format!("[{}]", ipv6)),
            Some(Host::Domain(domain)) => Ok(domain.to_string()),
            None => Err(Error::InvalidHost),
        }
    }

    pub fn port(&self) -> u16 {
        self.url.port_or_known_default().unwrap_or(80)
    }

    /// Value for the `Host` header; the port is included only when it is not
    /// the scheme default.
    pub fn authority(&self) -> Result<String> {
        let host = self.host()?;
        match self.url.port() {
            Some(port) => Ok(format!("{}:{}", host, port)),
            None => Ok(host),
        }
    }

    pub fn path(&self) -> String {
        match self.url.query() {
            Some(query) => format!("{}?{}", self.url.path(), query),
            None => self.url.path().to_string(),
        }
    }

    /// Resolves the host with the platform resolver and keeps the IPv4
    /// endpoints in the order the resolver returned them.
    pub fn candidates(&self) -> Result<Vec<SocketAddr>> {
        let host = self.host()?;
        let resolved = self
            .url
            .socket_addrs(|| Some(self.port()))
            .map_err(|e| Error::Resolution {
                host: host.clone(),
                reason: e.to_string(),
            })?;
        let candidates: Vec<SocketAddr> = resolved.into_iter().filter(SocketAddr::is_ipv4).collect();
        debug!("{} resolved to {} IPv4 candidates", host, candidates.len());
        if candidates.is_empty() {
            return Err(Error::Resolution {
                host,
                reason: "no IPv4 addresses".to_string(),
            });
        }
        Ok(candidates)
    }
}

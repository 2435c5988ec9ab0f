use std::net::SocketAddr;

use log::info;

use crate::addr::Addr;
use crate::config::Config;
use crate::error::Result;
use crate::http::{extract_body, Connector, HttpStream, TcpConnector};
use crate::request::Request;

/// Looks up the caller's external address by asking the configured service.
pub struct Client<C = TcpConnector> {
    config: Config,
    connector: C,
}

impl Client<TcpConnector> {
    pub fn new(config: Config) -> Self {
        Client {
            config,
            connector: TcpConnector,
        }
    }
}

impl Default for Client<TcpConnector> {
    fn default() -> Self {
        Client::new(Config::default())
    }
}

impl<C: Connector> Client<C> {
    pub fn with_connector(config: Config, connector: C) -> Self {
        Client { config, connector }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn lookup(&self) -> Result<Vec<u8>> {
        let target: Addr = self.config.url.parse()?;
        let candidates = target.candidates()?;
        self.fetch(&target, &candidates)
    }

    /// Connect, send, read, extract. The connection lives only inside this
    /// call and is closed on every return path.
    pub fn fetch(&self, target: &Addr, candidates: &[SocketAddr]) -> Result<Vec<u8>> {
        let host = target.host()?;
        let request = Request::get(target, &self.config.user_agent)?;
        let mut stream = HttpStream::connect(&self.connector, &host, candidates)?;
        stream.send(&request)?;
        let response = stream.read_response(self.config.max_response)?;
        let body = extract_body(&response)?;
        info!("{} answered with {} body bytes", stream.peer(), body.len());
        Ok(body.to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::http::mock::MockConnector;
    use std::io;

    lazy_static! {
        static ref TARGET: Addr = "http://ifconfig.me/ip".parse().unwrap();
        static ref CANDIDATES: Vec<SocketAddr> =
            vec!["10.0.0.1:80".parse().unwrap(), "10.0.0.2:80".parse().unwrap()];
    }

    fn client(connector: MockConnector) -> Client<MockConnector> {
        Client::with_connector(Config::default(), connector)
    }

    #[test]
    fn fetch_returns_body() {
        let connector = MockConnector::replying(&[
            b"HTTP/1.1 200 OK\r\nContent-Type: text/plain\r\n\r\n",
            b"93.184.216.34",
        ]);
        let client = client(connector);
        let body = client.fetch(&TARGET, &CANDIDATES).unwrap();
        assert_eq!(body, b"93.184.216.34".to_vec());
        assert_eq!(client.connector.closed(), 1);
    }

    #[test]
    fn fetch_sends_lookup_request() {
        let client = client(MockConnector::replying(&[b"HTTP/1.1 200 OK\r\n\r\n1.2.3.4"]));
        client.fetch(&TARGET, &CANDIDATES).unwrap();
        let sent = String::from_utf8(client.connector.written()).unwrap();
        assert!(sent.starts_with("GET /ip HTTP/1.1\r\nHost: ifconfig.me\r\n"));
        assert!(sent.contains(&format!("User-Agent: {}\r\n", client.config().user_agent)));
    }

    #[test]
    fn no_candidates_is_resolution_failure() {
        let client = client(MockConnector::default());
        let err = client.fetch(&TARGET, &[]).unwrap_err();
        assert!(matches!(err, Error::Resolution { .. }));
        assert!(client.connector.attempts().is_empty());
        assert_eq!(client.connector.opened(), 0);
    }

    #[test]
    fn all_refused_is_connection_failure() {
        let client = client(MockConnector {
            refuse: CANDIDATES.clone(),
            ..MockConnector::default()
        });
        let err = client.fetch(&TARGET, &CANDIDATES).unwrap_err();
        assert!(matches!(err, Error::Connection { tried: 2, .. }));
        assert_eq!(client.connector.closed(), 0);
    }

    #[test]
    fn transmission_failure_closes_connection() {
        let client = client(MockConnector {
            fail_write: true,
            ..MockConnector::default()
        });
        let err = client.fetch(&TARGET, &CANDIDATES).unwrap_err();
        assert!(matches!(err, Error::Transmission(_)));
        assert_eq!(client.connector.opened(), 1);
        assert_eq!(client.connector.closed(), 1);
    }

    #[test]
    fn reception_failure_closes_connection() {
        let client = client(MockConnector {
            reads: vec![Err(io::Error::new(io::ErrorKind::ConnectionReset, "reset"))],
            ..MockConnector::default()
        });
        let err = client.fetch(&TARGET, &CANDIDATES).unwrap_err();
        assert!(matches!(err, Error::Reception(_)));
        assert_eq!(client.connector.closed(), 1);
    }

    #[test]
    fn partial_header_is_malformed() {
        let client = client(MockConnector::replying(&[b"HTTP/1.1 200 OK\r\nContent-Le"]));
        let err = client.fetch(&TARGET, &CANDIDATES).unwrap_err();
        assert!(matches!(err, Error::MalformedResponse));
        assert_eq!(client.connector.closed(), 1);
    }

    #[test]
    fn oversized_response_is_rejected() {
        let mut response = b"HTTP/1.1 200 OK\r\n\r\n".to_vec();
        response.extend(std::iter::repeat(b'1').take(600));
        let connector = MockConnector::replying(&[&response]);
        let config = Config {
            max_response: 500,
            ..Config::default()
        };
        let client = Client::with_connector(config, connector);
        let err = client.fetch(&TARGET, &CANDIDATES).unwrap_err();
        assert!(matches!(err, Error::ResponseTooLarge(500)));
        assert_eq!(client.connector.closed(), 1);
    }

    #[test]
    fn lookup_with_bad_url_does_no_io() {
        let client = Client::with_connector(
            Config::with_url("https://ifconfig.me/ip"),
            MockConnector::default(),
        );
        let err = client.lookup().unwrap_err();
        assert!(matches!(err, Error::UnsupportedScheme(_)));
        assert!(client.connector.attempts().is_empty());
    }
}

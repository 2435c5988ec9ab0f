use std::io::{self, Read, Write};
use std::net::{SocketAddr, TcpStream};

use log::{debug, warn};

use crate::error::{Error, Result};
use crate::request::Request;

const DELIMITER: &[u8] = b"\r\n\r\n";
const CHUNK: usize = 512;

pub trait Connector {
    type Stream: Read + Write;

    fn connect(&self, addr: &SocketAddr) -> io::Result<Self::Stream>;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct TcpConnector;

impl Connector for TcpConnector {
    type Stream = TcpStream;

    fn connect(&self, addr: &SocketAddr) -> io::Result<TcpStream> {
        TcpStream::connect(addr)
    }
}

/// An open connection to the target. The underlying stream is closed when
/// this value is dropped.
pub struct HttpStream<S> {
    stream: S,
    peer: SocketAddr,
}

impl<S: Read + Write> HttpStream<S> {
    pub fn connect<C>(connector: &C, host: &str, candidates: &[SocketAddr]) -> Result<Self>
    where
        C: Connector<Stream = S>,
    {
        if candidates.is_empty() {
            return Err(Error::Resolution {
                host: host.to_string(),
                reason: "no addresses".to_string(),
            });
        }
        for addr in candidates {
            match connector.connect(addr) {
                Ok(stream) => {
                    debug!("connected to {}", addr);
                    return Ok(HttpStream {
                        stream,
                        peer: *addr,
                    });
                }
                Err(e) => warn!("connect to {} failed: {}", addr, e),
            }
        }
        Err(Error::Connection {
            host: host.to_string(),
            tried: candidates.len(),
        })
    }

    pub fn peer(&self) -> SocketAddr {
        self.peer
    }

    pub fn send(&mut self, request: &Request) -> Result<()> {
        let request = request.to_bytes();
        self.stream.write_all(&request).map_err(Error::Transmission)?;
        self.stream.flush().map_err(Error::Transmission)?;
        debug!("{} bytes sent", request.len());
        Ok(())
    }

    pub fn read_response(&mut self, limit: usize) -> Result<Vec<u8>> {
        let mut response = Vec::new();
        let mut chunk = [0u8; CHUNK];
        loop {
            let n = match self.stream.read(&mut chunk) {
                Ok(0) => break,
                Ok(n) => n,
                Err(ref e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(Error::Reception(e)),
            };
            debug!("{} bytes read", n);
            if response.len() + n > limit {
                return Err(Error::ResponseTooLarge(limit));
            }
            response.extend_from_slice(&chunk[..n]);
        }
        Ok(response)
    }
}

pub fn extract_body(response: &[u8]) -> Result<&[u8]> {
    let pos = response
        .windows(DELIMITER.len())
        .position(|x| x == DELIMITER)
        .ok_or(Error::MalformedResponse)?;
    Ok(&response[pos + DELIMITER.len()..])
}

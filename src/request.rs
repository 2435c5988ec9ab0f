use crate::addr::Addr;
use crate::error::Result;

pub const ACCEPT: &str = "text/plain,*/*;q=0.8";
pub const ACCEPT_LANGUAGE: &str = "en-US,es-MX;q=0.5";
// Nothing downstream decompresses, so only the identity coding is offered.
pub const ACCEPT_ENCODING: &str = "identity";

#[derive(Debug, Clone)]
pub struct Request {
    path: String,
    headers: Vec<(&'static str, String)>,
}

impl Request {
    /// The lookup request. `Connection: close` makes the peer end the stream
    /// after the body, which is what the reader waits for.
    pub fn get(target: &Addr, user_agent: &str) -> Result<Self> {
        Ok(Request {
            path: target.path(),
            headers: vec![
                ("Host", target.authority()?),
                ("User-Agent", user_agent.to_string()),
                ("Accept", ACCEPT.to_string()),
                ("Accept-Language", ACCEPT_LANGUAGE.to_string()),
                ("Accept-Encoding", ACCEPT_ENCODING.to_string()),
                ("Connection", "close".to_string()),
            ],
        })
    }

    pub fn to_bytes(&self) -> Vec<u8> {
        let mut request = format!("GET {} HTTP/1.1\r\n", self.path);
        for (name, value) in &self.headers {
            request.push_str(name);
            request.push_str(": ");
            request.push_str(value);
            request.push_str("\r\n");
        }
        request.push_str("\r\n");
        request.into_bytes()
    }
}

use failure::Fail;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Fail)]
pub enum Error {
    #[fail(display = "{}", _0)]
    UrlParse(#[cause] url::ParseError),
    #[fail(display = "Invalid address host type")]
    InvalidHost,
    #[fail(display = "Unsupported scheme: {}", _0)]
    UnsupportedScheme(String),
    #[fail(display = "Could not resolve {}: {}", host, reason)]
    Resolution { host: String, reason: String },
    #[fail(display = "Unable to connect to {} ({} addresses tried)", host, tried)]
    Connection { host: String, tried: usize },
    #[fail(display = "Failed to send request: {}", _0)]
    Transmission(#[cause] std::io::Error),
    #[fail(display = "Failed to receive response: {}", _0)]
    Reception(#[cause] std::io::Error),
    #[fail(display = "Malformed response: no header/body delimiter")]
    MalformedResponse,
    #[fail(display = "Response exceeds {} bytes", _0)]
    ResponseTooLarge(usize),
    #[fail(display = "Failed to write output: {}", _0)]
    Output(#[cause] std::io::Error),
}

impl Error {
    pub fn exit_code(&self) -> i32 {
        match self {
            Error::UrlParse(_) | Error::InvalidHost | Error::UnsupportedScheme(_) => 1,
            Error::Resolution { .. } => 2,
            Error::Connection { .. } => 3,
            Error::Transmission(_) => 4,
            Error::Reception(_) => 5,
            Error::MalformedResponse => 6,
            Error::ResponseTooLarge(_) => 7,
            Error::Output(_) => 8,
        }
    }
}

impl From<url::ParseError> for Error {
    fn from(err: url::ParseError) -> Error {
        Error::UrlParse(err)
    }
}

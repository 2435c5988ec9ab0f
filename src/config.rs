#[derive(Debug, Clone)]
pub struct Config {
    pub url: String,
    pub user_agent: String,
    pub max_response: usize,
}

pub const DEFAULT_URL: &str = "http://ifconfig.me/ip";

// Headers plus body.
pub const DEFAULT_MAX_RESPONSE: usize = 8192;

impl Default for Config {
    fn default() -> Self {
        Config {
            url: DEFAULT_URL.to_string(),
            user_agent: format!("{}/{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION")),
            max_response: DEFAULT_MAX_RESPONSE,
        }
    }
}

impl Config {
    pub fn with_url(url: &str) -> Self {
        Config {
            url: url.to_string(),
            ..Config::default()
        }
    }
}

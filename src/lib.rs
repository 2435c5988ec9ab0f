//! Resolves the caller's external IP address by asking a plain-HTTP
//! address-reporting service and returning the response body.
//!
//! See the `client` module for the lookup itself.

pub mod addr;
pub mod client;
pub mod config;
pub mod error;
pub mod http;
pub mod output;
pub mod request;

pub use client::Client;
pub use config::Config;
pub use error::{Error, Result};

#[cfg(test)]
#[macro_use]
extern crate lazy_static;

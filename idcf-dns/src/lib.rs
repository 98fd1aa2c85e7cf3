//! # idcf-dns
//!
//! Client library for the IDCF Cloud DNS API: list, create, update, delete and
//! verify zones and records over HTTPS.
//!
//! Every request is signed with HMAC-SHA256 over
//! `METHOD\nPATH\nAPIKEY\nEXPIRES\n` using the secret key, and is valid for
//! 600 seconds from the moment it is sent.
//!
//! ## Feature Flags
//!
//! - **`native-tls`** *(default)* — Use the platform's native TLS implementation.
//! - **`rustls`** — Use rustls. Recommended for cross-compilation and Android targets.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use idcf_dns::{Client, CreateRecordParams, CreateZoneParams};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Reads IDCF_API_KEY / IDCF_SECRET_KEY (and optional IDCF_DNS_ENDPOINT)
//!     let client = Client::from_env()?;
//!
//!     let zone = client
//!         .create_zone(&CreateZoneParams::new("example.com", "admin@example.com").default_ttl(3600))
//!         .await?;
//!
//!     // No TTL set: the zone's default_ttl is used
//!     let record = client
//!         .create_record(&CreateRecordParams::new(&zone.uuid, "www.example.com", "A", "192.0.2.1"))
//!         .await?;
//!     println!("{} {} {}", record.name, record.record_type, record.content);
//!
//!     for record in client.records(&zone.uuid).await? {
//!         println!("{} {} {}", record.name, record.record_type, record.content);
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! All operations return [`Result<T, DnsError>`](DnsError). HTTP status codes are not
//! inspected; the body decides:
//!
//! - [`DnsError::DecodeError`]: the body is not the expected resource. Its text is the
//!   body exactly as the server sent it (often an error envelope).
//! - [`DnsError::UnexpectedResponse`]: delete/verify did not get `{}`. Its text is the body.
//! - [`DnsError::NetworkError`] / [`DnsError::Timeout`]: the call itself failed.
//!
//! There are no retries.

mod api;
mod client;
mod codec;
mod error;
mod http_client;
mod types;
mod utils;

pub mod sign;

pub use client::{
    Client, ClientBuilder, DEFAULT_ENDPOINT, ENV_API_KEY, ENV_ENDPOINT, ENV_SECRET_KEY,
    HEADER_API_KEY, HEADER_EXPIRES, HEADER_SIGNATURE,
};
pub use error::{DnsError, Result};
pub use http_client::{HttpRequest, HttpTransport, ReqwestTransport};
pub use types::{
    CreateRecordParams, CreateZoneParams, Record, UpdateRecordParams, UpdateZoneParams, Zone,
};

pub use reqwest::Method;
pub use utils::datetime;

//! mtasa-rpc - HTTP procedure-call client for MTA:SA servers.
//!
//! Calls exported procedures of server resources over the server's HTTP
//! interface. A call is one JSON `POST` to
//! `{protocol}://{host}:{port}/{resource}/call/{procedure}`; the server answers
//! with an array whose first element is the result.
//!
//! # Example
//!
//! ```no_run
//! use mtasa_rpc::RpcClient;
//! use serde_json::json;
//!
//! # async fn example() -> Result<(), mtasa_rpc::Error> {
//! let client = RpcClient::builder()
//!     .host("127.0.0.1")
//!     .port(22005)
//!     .credentials("admin", "secret")
//!     .build()?;
//!
//! // Explicit form
//! let name: String = client
//!     .call_as("admin", "getServerName", &[])
//!     .await?;
//!
//! // Virtual resource form, identical on the wire
//! let same = client
//!     .resources()
//!     .resource("admin")
//!     .procedure("getServerName")
//!     .call(&[])
//!     .await?;
//! assert_eq!(same, json!(name));
//! # Ok(())
//! # }
//! ```

pub mod auth;
pub mod client;
pub mod config;
pub mod error;
pub mod resources;

// Re-export primary types at crate root for convenience
pub use auth::Credentials;
pub use client::{RpcClient, USER_AGENT};
pub use config::{ClientBuilder, ClientConfig, DEFAULT_HOST, DEFAULT_PORT, Protocol};
pub use error::{Error, TransportError};
pub use resources::{Procedure, Resource, Resources};

/// Result type alias using the crate's Error type.
pub type Result<T> = std::result::Result<T, Error>;

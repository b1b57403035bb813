//! Client configuration.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use crate::auth::Credentials;
use crate::client::RpcClient;
use crate::error::Error;

/// Default server host.
pub const DEFAULT_HOST: &str = "127.0.0.1";

/// Default HTTP port of an MTA:SA server.
pub const DEFAULT_PORT: u16 = 22005;

/// Web protocol used for procedure calls.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Protocol {
    #[default]
    Http,
    Https,
}

impl Protocol {
    /// Returns the URI scheme.
    pub fn as_str(&self) -> &'static str {
        match self {
            Protocol::Http => "http",
            Protocol::Https => "https",
        }
    }
}

impl fmt::Display for Protocol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Protocol {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "http" => Ok(Protocol::Http),
            "https" => Ok(Protocol::Https),
            _ => Err(Error::InvalidConfig {
                message: format!("unsupported protocol '{}', expected http or https", s),
            }),
        }
    }
}

/// Connection parameters of an [`RpcClient`].
///
/// Set once at construction and never mutated afterwards. Host and port are
/// not validated; a bad value only shows up as a transport error on the first
/// call.
///
/// The type deserializes with every field optional so it can be embedded in a
/// host application's own configuration file:
///
/// ```
/// use mtasa_rpc::{ClientConfig, Protocol};
///
/// let config: ClientConfig = serde_json::from_str(r#"{ "port": 22006 }"#).unwrap();
/// assert_eq!(config.host, "127.0.0.1");
/// assert_eq!(config.port, 22006);
/// assert_eq!(config.protocol, Protocol::Http);
/// ```
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// Domain name or IP address of the server.
    pub host: String,
    /// HTTP port of the server.
    pub port: u16,
    /// User name for Basic authentication.
    pub user: Option<String>,
    /// Password for Basic authentication.
    pub password: Option<String>,
    /// Web protocol used for procedure calls.
    pub protocol: Protocol,
    /// Per-request timeout in milliseconds. `None` waits indefinitely.
    pub timeout_ms: Option<u64>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            user: None,
            password: None,
            protocol: Protocol::Http,
            timeout_ms: None,
        }
    }
}

impl ClientConfig {
    /// Base URI of the server's HTTP interface, `{protocol}://{host}:{port}`.
    pub fn server_uri(&self) -> String {
        format!("{}://{}:{}", self.protocol, self.host, self.port)
    }

    /// Basic auth credentials, present only when both user and password are
    /// configured and non-empty.
    pub fn credentials(&self) -> Option<Credentials> {
        Credentials::from_parts(self.user.as_deref(), self.password.as_deref())
    }

    /// Per-request timeout.
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_ms.map(Duration::from_millis)
    }
}

impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfig")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("user", &self.user)
            .field("password", &self.password.as_ref().map(|_| "[REDACTED]"))
            .field("protocol", &self.protocol)
            .field("timeout_ms", &self.timeout_ms)
            .finish()
    }
}

/// Fluent builder for [`RpcClient`].
///
/// ```no_run
/// use mtasa_rpc::{Protocol, RpcClient};
///
/// # fn example() -> mtasa_rpc::Result<()> {
/// let client = RpcClient::builder()
///     .host("play.example.com")
///     .port(22005)
///     .credentials("admin", "secret")
///     .protocol(Protocol::Https)
///     .build()?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Default, Clone)]
pub struct ClientBuilder {
    config: ClientConfig,
}

impl ClientBuilder {
    /// Start from the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Server host name or IP address.
    pub fn host(mut self, host: impl Into<String>) -> Self {
        self.config.host = host.into();
        self
    }

    /// Server HTTP port.
    pub fn port(mut self, port: u16) -> Self {
        self.config.port = port;
        self
    }

    /// User name for Basic authentication.
    pub fn user(mut self, user: impl Into<String>) -> Self {
        self.config.user = Some(user.into());
        self
    }

    /// Password for Basic authentication.
    pub fn password(mut self, password: impl Into<String>) -> Self {
        self.config.password = Some(password.into());
        self
    }

    /// Set both halves of the Basic auth pair.
    pub fn credentials(self, user: impl Into<String>, password: impl Into<String>) -> Self {
        self.user(user).password(password)
    }

    /// Web protocol used for procedure calls.
    pub fn protocol(mut self, protocol: Protocol) -> Self {
        self.config.protocol = protocol;
        self
    }

    /// Give up on a call after `timeout`.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout_ms = Some(u64::try_from(timeout.as_millis()).unwrap_or(u64::MAX));
        self
    }

    /// Returns the configuration built so far.
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Build the client.
    ///
    /// # Errors
    ///
    /// Fails only if the underlying HTTP client cannot be initialized.
    pub fn build(self) -> Result<RpcClient, Error> {
        RpcClient::new(self.config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = ClientConfig::default();
        assert_eq!(config.server_uri(), "http://127.0.0.1:22005");
        assert!(config.credentials().is_none());
        assert!(config.timeout().is_none());
    }

    #[test]
    fn server_uri_uses_protocol_host_and_port() {
        let config = ClientConfig {
            host: "1.1.1.1".to_string(),
            port: 12345,
            protocol: Protocol::Https,
            ..Default::default()
        };
        assert_eq!(config.server_uri(), "https://1.1.1.1:12345");
    }

    #[test]
    fn protocol_parsing() {
        assert_eq!("http".parse::<Protocol>().unwrap(), Protocol::Http);
        assert_eq!("https".parse::<Protocol>().unwrap(), Protocol::Https);
        assert!("ftp".parse::<Protocol>().is_err());
    }

    #[test]
    fn protocol_parsing_matches_serde() {
        assert!("HTTPS".parse::<Protocol>().is_err());
        assert!(serde_json::from_str::<Protocol>(r#""HTTPS""#).is_err());
        assert_eq!(
            serde_json::from_str::<Protocol>(r#""https""#).unwrap(),
            "https".parse::<Protocol>().unwrap()
        );
    }

    #[test]
    fn deserializes_with_defaults() {
        let config: ClientConfig = serde_json::from_str(
            r#"{ "host": "10.0.0.2", "user": "admin", "password": "pw", "protocol": "https" }"#,
        )
        .unwrap();
        assert_eq!(config.host, "10.0.0.2");
        assert_eq!(config.port, DEFAULT_PORT);
        assert_eq!(config.protocol, Protocol::Https);
        assert_eq!(config.credentials().unwrap().user(), "admin");
    }

    #[test]
    fn rejects_unknown_protocol() {
        let result = serde_json::from_str::<ClientConfig>(r#"{ "protocol": "ftp" }"#);
        assert!(result.is_err());
    }

    #[test]
    fn debug_hides_password() {
        let config = ClientBuilder::new().credentials("admin", "secret123").config().clone();
        let debug = format!("{:?}", config);
        assert!(debug.contains("admin"));
        assert!(!debug.contains("secret123"));
    }

    #[test]
    fn builder_sets_timeout() {
        let builder = ClientBuilder::new().timeout(Duration::from_secs(5));
        assert_eq!(builder.config().timeout(), Some(Duration::from_secs(5)));
    }
}

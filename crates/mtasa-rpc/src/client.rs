//! HTTP client for procedure calls.

use std::sync::Arc;

use reqwest::header::{CONTENT_TYPE, HeaderValue};
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, instrument, trace};

use crate::auth::Credentials;
use crate::config::{ClientBuilder, ClientConfig};
use crate::error::{Error, TransportError};
use crate::resources::{Resource, Resources};

/// User agent sent with every call. The trailing marker identifies this client.
pub const USER_AGENT: &str = concat!(
    "MTA:SA WEB client mtasa-rpc/",
    env!("CARGO_PKG_VERSION"),
    " (mtasa-rpc)"
);

/// Client for the HTTP procedure-call interface of an MTA:SA server.
///
/// Every call is a single `POST {protocol}://{host}:{port}/{resource}/call/{procedure}`
/// whose body is the JSON array of arguments. The server wraps the return value
/// in an array; [`call`](Self::call) hands back its first element.
///
/// Cheap to clone. Clones share the HTTP client and the configuration, and
/// concurrent calls do not interfere with each other.
///
/// # Example
///
/// ```no_run
/// use mtasa_rpc::RpcClient;
/// use serde_json::json;
///
/// # async fn example() -> mtasa_rpc::Result<()> {
/// let client = RpcClient::builder().credentials("admin", "secret").build()?;
/// let players = client
///     .call("admin", "getPlayerCount", &[json!("all")])
///     .await?;
/// println!("{}", players);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct RpcClient {
    http: reqwest::Client,
    config: Arc<ClientConfig>,
    credentials: Option<Credentials>,
}

impl RpcClient {
    /// Create a client from a configuration.
    ///
    /// # Errors
    ///
    /// Fails only if the HTTP client cannot be initialized.
    pub fn new(config: ClientConfig) -> Result<Self, Error> {
        let mut builder = reqwest::Client::builder().user_agent(USER_AGENT);
        if let Some(timeout) = config.timeout() {
            builder = builder.timeout(timeout);
        }
        let http = builder.build()?;
        let credentials = config.credentials();

        Ok(Self {
            http,
            config: Arc::new(config),
            credentials,
        })
    }

    /// Start building a client from the defaults (`http://127.0.0.1:22005`).
    pub fn builder() -> ClientBuilder {
        ClientBuilder::new()
    }

    /// Returns the configuration this client was built with.
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// URI a procedure call is posted to.
    ///
    /// Names are placed into the path verbatim, without any encoding.
    pub fn procedure_uri(&self, resource: &str, procedure: &str) -> String {
        format!("{}/{}/call/{}", self.config.server_uri(), resource, procedure)
    }

    /// Virtual resources: `client.resources().resource("r").procedure("p")`.
    pub fn resources(&self) -> Resources<'_> {
        Resources::new(self)
    }

    /// Shortcut for `self.resources().resource(name)`.
    pub fn resource(&self, name: impl Into<String>) -> Resource<'_> {
        self.resources().resource(name)
    }

    /// Call a procedure and return the first element of the response array.
    ///
    /// A response that is not an array, or an empty one, yields
    /// [`Value::Null`].
    ///
    /// # Errors
    ///
    /// Any transport failure (connection, timeout, non-success status,
    /// malformed JSON) is returned unchanged as [`Error::Transport`].
    #[instrument(skip(self, args), fields(server = %self.config.server_uri()))]
    pub async fn call(
        &self,
        resource: &str,
        procedure: &str,
        args: &[Value],
    ) -> Result<Value, Error> {
        let uri = self.procedure_uri(resource, procedure);
        debug!(%uri, authenticated = self.credentials.is_some(), "procedure call");
        trace!(?args, "call arguments");

        let mut request = self
            .http
            .post(&uri)
            .header(CONTENT_TYPE, HeaderValue::from_static("application/json"))
            .json(args);
        if let Some(creds) = &self.credentials {
            request = request.basic_auth(creds.user(), Some(creds.password()));
        }

        let response = request.send().await?;
        let status = response.status();
        trace!(status = %status, "call response");

        if !status.is_success() {
            let body = match response.text().await {
                Ok(body) => body,
                Err(err) => {
                    debug!(error = %err, "failed to read error response body");
                    String::new()
                }
            };
            return Err(TransportError::Status {
                status: status.as_u16(),
                body,
            }
            .into());
        }

        let body = response.json::<Value>().await?;
        trace!(?body, "response body");

        Ok(unwrap_envelope(body))
    }

    /// Call a procedure and decode its result into `T`.
    ///
    /// Use `Option<T>` when the procedure may return nothing.
    ///
    /// # Errors
    ///
    /// Same as [`call`](Self::call), plus [`Error::Decode`] if the result does
    /// not fit `T`.
    pub async fn call_as<T>(
        &self,
        resource: &str,
        procedure: &str,
        args: &[Value],
    ) -> Result<T, Error>
    where
        T: DeserializeOwned,
    {
        let value = self.call(resource, procedure, args).await?;
        Ok(serde_json::from_value(value)?)
    }
}

/// Take the first element of the one-element array the server wraps results in.
fn unwrap_envelope(body: Value) -> Value {
    match body {
        Value::Array(items) => items.into_iter().next().unwrap_or_else(|| {
            debug!("empty response envelope");
            Value::Null
        }),
        other => {
            debug!(kind = value_kind(&other), "response is not an array");
            Value::Null
        }
    }
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Protocol;
    use serde_json::json;

    #[test]
    fn default_procedure_uri() {
        let client = RpcClient::new(ClientConfig::default()).unwrap();
        assert_eq!(
            client.procedure_uri("test_resource", "testProcedure"),
            "http://127.0.0.1:22005/test_resource/call/testProcedure"
        );
    }

    #[test]
    fn remote_procedure_uri() {
        let client = RpcClient::builder()
            .host("1.1.1.1")
            .port(12345)
            .protocol(Protocol::Https)
            .build()
            .unwrap();
        assert_eq!(
            client.procedure_uri("r", "p"),
            "https://1.1.1.1:12345/r/call/p"
        );
    }

    #[test]
    fn names_are_not_encoded() {
        let client = RpcClient::new(ClientConfig::default()).unwrap();
        assert_eq!(
            client.procedure_uri("my res", "do/it"),
            "http://127.0.0.1:22005/my res/call/do/it"
        );
    }

    #[test]
    fn credentials_resolved_at_construction() {
        let client = RpcClient::builder().password("pw").build().unwrap();
        assert!(client.credentials.is_none());

        let client = RpcClient::builder().credentials("u", "pw").build().unwrap();
        assert_eq!(client.credentials, Some(Credentials::new("u", "pw")));
    }

    #[test]
    fn user_agent_has_marker() {
        assert!(USER_AGENT.starts_with("MTA:SA WEB client"));
        assert!(USER_AGENT.ends_with(" (mtasa-rpc)"));
    }

    #[test]
    fn unwraps_first_element() {
        assert_eq!(unwrap_envelope(json!(["Yo", "second"])), json!("Yo"));
        assert_eq!(unwrap_envelope(json!([[1, 2]])), json!([1, 2]));
    }

    #[test]
    fn empty_or_non_array_is_null() {
        assert_eq!(unwrap_envelope(json!([])), Value::Null);
        assert_eq!(unwrap_envelope(json!({ "result": 1 })), Value::Null);
        assert_eq!(unwrap_envelope(json!("plain")), Value::Null);
    }

    #[test]
    fn client_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<RpcClient>();
    }
}

//! Virtual resources.
//!
//! A chain of lightweight handles standing in for the
//! `resources.<resource>.<procedure>(args)` path. Looking up a resource or a
//! procedure never fails and never talks to the server; only invoking a
//! [`Procedure`] does, and that is exactly one [`RpcClient::call`].
//!
//! ```no_run
//! use mtasa_rpc::RpcClient;
//! use serde_json::json;
//!
//! # async fn example() -> mtasa_rpc::Result<()> {
//! let client = RpcClient::builder().build()?;
//! let greet = client.resources().resource("chat").procedure("broadcast");
//! greet.call(&[json!("hello")]).await?;
//! # Ok(())
//! # }
//! ```

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::client::RpcClient;
use crate::error::Error;

/// Entry point for resource lookups, bound to one client.
#[derive(Debug, Clone, Copy)]
pub struct Resources<'a> {
    client: &'a RpcClient,
}

impl<'a> Resources<'a> {
    pub(crate) fn new(client: &'a RpcClient) -> Self {
        Self { client }
    }

    /// Handle for the named resource.
    pub fn resource(&self, name: impl Into<String>) -> Resource<'a> {
        Resource {
            client: self.client,
            name: name.into(),
        }
    }
}

/// A named resource on the server.
#[derive(Debug, Clone)]
pub struct Resource<'a> {
    client: &'a RpcClient,
    name: String,
}

impl<'a> Resource<'a> {
    /// Returns the resource name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Handle for one of this resource's procedures.
    pub fn procedure(&self, name: impl Into<String>) -> Procedure<'a> {
        Procedure {
            client: self.client,
            resource: self.name.clone(),
            name: name.into(),
        }
    }

    /// Call a procedure of this resource directly.
    pub async fn call(&self, procedure: &str, args: &[Value]) -> Result<Value, Error> {
        self.client.call(&self.name, procedure, args).await
    }
}

/// A procedure bound to its resource and client.
#[derive(Debug, Clone)]
pub struct Procedure<'a> {
    client: &'a RpcClient,
    resource: String,
    name: String,
}

impl Procedure<'_> {
    /// Returns the owning resource name.
    pub fn resource(&self) -> &str {
        &self.resource
    }

    /// Returns the procedure name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Invoke the procedure. Same contract as [`RpcClient::call`].
    pub async fn call(&self, args: &[Value]) -> Result<Value, Error> {
        self.client.call(&self.resource, &self.name, args).await
    }

    /// Invoke the procedure and decode the result. Same contract as
    /// [`RpcClient::call_as`].
    pub async fn call_as<T: DeserializeOwned>(&self, args: &[Value]) -> Result<T, Error> {
        self.client.call_as(&self.resource, &self.name, args).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookups_never_fail() {
        let client = RpcClient::builder().build().unwrap();
        let resources = client.resources();

        let test_res = resources.resource("test_res");
        assert_eq!(test_res.name(), "test_res");

        let proc = test_res.procedure("testProc");
        assert_eq!(proc.resource(), "test_res");
        assert_eq!(proc.name(), "testProc");

        let other = resources.resource("another_resource").procedure("anotherProcedure");
        assert_eq!(other.resource(), "another_resource");
        assert_eq!(other.name(), "anotherProcedure");
    }

    #[test]
    fn shortcut_matches_resources() {
        let client = RpcClient::builder().build().unwrap();
        let a = client.resource("r").procedure("p");
        let b = client.resources().resource("r").procedure("p");
        assert_eq!(a.resource(), b.resource());
        assert_eq!(a.name(), b.name());
    }
}

//! HTTP Basic credentials.

use std::fmt;

/// A user/password pair sent as HTTP Basic authentication with every call.
///
/// # Security
///
/// The password is never exposed in Debug output to prevent accidental logging.
///
/// # Example
///
/// ```
/// use mtasa_rpc::Credentials;
///
/// let creds = Credentials::new("admin", "hunter2");
/// assert_eq!(creds.user(), "admin");
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    user: String,
    password: String,
}

impl Credentials {
    /// Create new credentials.
    pub fn new(user: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            user: user.into(),
            password: password.into(),
        }
    }

    /// Derive credentials from optionally configured parts.
    ///
    /// Returns `Some` only when both the user and the password are present and
    /// non-empty. A lone user or a lone password never authenticates.
    ///
    /// ```
    /// use mtasa_rpc::Credentials;
    ///
    /// assert!(Credentials::from_parts(Some("u"), Some("pw")).is_some());
    /// assert!(Credentials::from_parts(None, Some("pw")).is_none());
    /// ```
    pub fn from_parts(user: Option<&str>, password: Option<&str>) -> Option<Self> {
        match (user, password) {
            (Some(user), Some(password)) if !user.is_empty() && !password.is_empty() => {
                Some(Self::new(user, password))
            }
            _ => None,
        }
    }

    /// Returns the user name.
    pub fn user(&self) -> &str {
        &self.user
    }

    /// Returns the password.
    ///
    /// Only used when attaching the Authorization header.
    pub(crate) fn password(&self) -> &str {
        &self.password
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("user", &self.user)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

//! Host based names
//!
//! Names on network file systems addressed as `scheme://[user@]host[:port]/path`.

use std::fmt;
use std::sync::Arc;

use super::{NameFactory, RootUriBuilder};
use crate::name::FileName;
use crate::uri::{PASSWORD_PLACEHOLDER, SEPARATOR};

/// Backend for names that live on a remote host.
#[derive(Clone, PartialEq, Eq)]
pub struct HostBackend {
    host: String,
    port: Option<u16>,
    default_port: Option<u16>,
    user_name: Option<String>,
    password: Option<String>,
}

impl HostBackend {
    pub fn new(host: impl Into<String>, default_port: Option<u16>) -> Self {
        Self {
            host: host.into(),
            port: None,
            default_port,
            user_name: None,
            password: None,
        }
    }

    pub fn with_port(mut self, port: u16) -> Self {
        self.port = Some(port);
        self
    }

    pub fn with_credentials(
        mut self,
        user_name: impl Into<String>,
        password: Option<String>,
    ) -> Self {
        self.user_name = Some(user_name.into());
        self.password = password;
        self
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    /// The explicit port, falling back to the scheme's default port.
    pub fn port(&self) -> Option<u16> {
        self.port.or(self.default_port)
    }

    pub fn user_name(&self) -> Option<&str> {
        self.user_name.as_deref()
    }

    pub fn password(&self) -> Option<&str> {
        self.password.as_deref()
    }
}

impl fmt::Debug for HostBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HostBackend")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("default_port", &self.default_port)
            .field("user_name", &self.user_name)
            .field("password", &self.password.as_ref().map(|_| PASSWORD_PLACEHOLDER))
            .finish()
    }
}

impl RootUriBuilder for HostBackend {
    fn append_root_uri(&self, scheme: &str, buffer: &mut String) {
        buffer.push_str(scheme);
        buffer.push_str("://");

        if let Some(user_name) = &self.user_name {
            buffer.push_str(user_name);
            if self.password.is_some() {
                buffer.push(':');
                buffer.push_str(PASSWORD_PLACEHOLDER);
            }
            buffer.push('@');
        }

        buffer.push_str(&self.host);

        if let Some(port) = self.port {
            if Some(port) != self.default_port {
                buffer.push(':');
                buffer.push_str(&port.to_string());
            }
        }

        buffer.push_str(SEPARATOR);
    }
}

impl NameFactory for HostBackend {
    fn create_name(self: Arc<Self>, scheme: &str, path: String) -> FileName {
        FileName::new(scheme, path, self)
    }
}

//! HTTP server configuration object.

use std::net::SocketAddr;
use std::sync::Arc;

use backend::domain::ports::DirectoryQuery;

/// Configuration for creating the HTTP server.
pub struct ServerConfig {
    pub(crate) bind_addr: SocketAddr,
    pub(crate) directory: Arc<dyn DirectoryQuery>,
}

impl ServerConfig {
    /// Construct a server configuration from the bind address and the query
    /// port the handlers should use.
    #[must_use]
    pub fn new(bind_addr: SocketAddr, directory: Arc<dyn DirectoryQuery>) -> Self {
        Self {
            bind_addr,
            directory,
        }
    }

    /// Return the socket address the server will bind to.
    #[must_use]
    pub const fn bind_addr(&self) -> SocketAddr {
        self.bind_addr
    }
}

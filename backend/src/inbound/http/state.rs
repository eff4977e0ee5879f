//! Shared HTTP adapter state.
//!
//! Handlers receive this via `actix_web::web::Data`, so they depend on the
//! [`DirectoryQuery`] port only and stay testable without I/O.

use std::sync::Arc;

use crate::domain::ports::DirectoryQuery;

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    /// Query port answering directory requests.
    pub directory: Arc<dyn DirectoryQuery>,
}

impl HttpState {
    /// Construct state over the given query port.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    ///
    /// use backend::domain::ports::FixtureDirectoryQuery;
    /// use backend::inbound::http::state::HttpState;
    ///
    /// let state = HttpState::new(Arc::new(FixtureDirectoryQuery::default()));
    /// let _directory = state.directory.clone();
    /// ```
    #[must_use]
    pub fn new(directory: Arc<dyn DirectoryQuery>) -> Self {
        Self { directory }
    }
}

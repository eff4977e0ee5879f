//! Port seams between the HTTP adapter and the query pipeline.
//!
//! Handlers depend on [`DirectoryQuery`] only, so they stay free of I/O and
//! test against an in-memory fixture.

use crate::dataset::{self, DatasetSource};
use crate::domain::{DomainError, QueryParams, User, query};

/// Use-case seam: answer one directory query.
pub trait DirectoryQuery: Send + Sync {
    /// Run the query pipeline and return the resulting records.
    ///
    /// # Errors
    /// Returns a [`DomainError`] when the backing dataset is unavailable;
    /// the pipeline itself never fails.
    fn query(&self, params: &QueryParams) -> Result<Vec<User>, DomainError>;
}

/// Production implementation backed by the process-wide dataset cache.
///
/// The first query triggers the one-time load when the bootstrap has not
/// already done so eagerly; afterwards each call is a lock-free read.
#[derive(Debug, Clone, Default)]
pub struct CachedDirectoryQuery {
    source: DatasetSource,
}

impl CachedDirectoryQuery {
    /// Build a query port over the given dataset source.
    #[must_use]
    pub const fn new(source: DatasetSource) -> Self {
        Self { source }
    }
}

impl DirectoryQuery for CachedDirectoryQuery {
    fn query(&self, params: &QueryParams) -> Result<Vec<User>, DomainError> {
        let records = dataset::load(&self.source)?;
        Ok(query::run(records, params))
    }
}

/// In-memory implementation for handler tests.
#[derive(Debug, Clone, Default)]
pub struct FixtureDirectoryQuery {
    records: Vec<User>,
}

impl FixtureDirectoryQuery {
    /// Build a fixture serving the given records.
    #[must_use]
    pub const fn new(records: Vec<User>) -> Self {
        Self { records }
    }
}

impl DirectoryQuery for FixtureDirectoryQuery {
    fn query(&self, params: &QueryParams) -> Result<Vec<User>, DomainError> {
        Ok(query::run(&self.records, params))
    }
}

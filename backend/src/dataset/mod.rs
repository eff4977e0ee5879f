//! Dataset loader: one-time materialisation of the bundled user resource.
//!
//! The resource is parsed exactly once per process. The first caller of
//! [`load`] wins the initialisation race and performs the parse; concurrent
//! callers block on the same [`OnceLock`] and observe the completed result,
//! never a partially populated collection. Reads after initialisation are
//! lock free.

mod csv;

use std::path::PathBuf;
use std::sync::OnceLock;

use thiserror::Error;

use crate::domain::User;

/// Number of columns in the resource schema, in [`User`] field order.
const COLUMN_COUNT: usize = 9;

/// Relative location of the bundled resource within the crate.
const BUNDLED_RESOURCE: &str = "resources/system_users.csv";

static CACHE: OnceLock<Result<Vec<User>, DatasetError>> = OnceLock::new();

/// Failure modes of a load attempt.
///
/// Both variants are fatal to the attempt: no partial dataset is ever
/// exposed. The type is `Clone` because the cached outcome is shared with
/// every caller.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DatasetError {
    /// The resource could not be read at load time.
    #[error("dataset resource not readable at {path}")]
    MissingResource {
        /// Path the loader attempted to read.
        path: String,
    },
    /// A row failed schema parsing; the whole load is abandoned.
    #[error("dataset row {line} is malformed: {reason}")]
    Malformed {
        /// One-based row number within the resource, header included.
        line: usize,
        /// What made the row unusable.
        reason: String,
    },
}

/// Where and how to read the tabular resource.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatasetSource {
    /// Path of the delimited resource on disk.
    pub path: PathBuf,
    /// Skip the first row instead of parsing it as a record.
    pub has_header: bool,
}

impl DatasetSource {
    /// Source describing the resource shipped with the crate.
    #[must_use]
    pub fn bundled() -> Self {
        Self {
            path: PathBuf::from(env!("CARGO_MANIFEST_DIR")).join(BUNDLED_RESOURCE),
            has_header: true,
        }
    }
}

impl Default for DatasetSource {
    fn default() -> Self {
        Self::bundled()
    }
}

/// Load the dataset, parsing it on first use and serving the cached
/// sequence afterwards.
///
/// The returned slice preserves source row order and lives for the rest of
/// the process. Only the first caller's `source` is consulted; later calls
/// return the cached outcome regardless of their argument. A failed load is
/// cached as well: the resource is fixed at deploy time, so retrying cannot
/// change the result.
///
/// # Errors
/// [`DatasetError::MissingResource`] when the resource cannot be read,
/// [`DatasetError::Malformed`] when any row fails schema parsing.
pub fn load(source: &DatasetSource) -> Result<&'static [User], DatasetError> {
    match CACHE.get_or_init(|| read_and_parse(source)) {
        Ok(records) => Ok(records.as_slice()),
        Err(err) => Err(err.clone()),
    }
}

fn read_and_parse(source: &DatasetSource) -> Result<Vec<User>, DatasetError> {
    let text =
        std::fs::read_to_string(&source.path).map_err(|_| DatasetError::MissingResource {
            path: source.path.display().to_string(),
        })?;
    parse_records(&text, source.has_header)
}

/// Parse resource text into records, preserving row order.
///
/// Exposed within the crate so tests can exercise parsing without touching
/// the process-wide cache.
///
/// # Errors
/// [`DatasetError::Malformed`] on the first row that fails schema parsing.
pub(crate) fn parse_records(text: &str, has_header: bool) -> Result<Vec<User>, DatasetError> {
    let mut records = Vec::new();
    for (index, line) in text.lines().enumerate() {
        if index == 0 && has_header {
            continue;
        }
        if line.is_empty() {
            continue;
        }
        records.push(parse_row(index + 1, line)?);
    }
    Ok(records)
}

fn parse_row(line_number: usize, line: &str) -> Result<User, DatasetError> {
    let fields = csv::parse_line(line).ok_or_else(|| DatasetError::Malformed {
        line: line_number,
        reason: "unbalanced quoting".into(),
    })?;

    let columns: [String; COLUMN_COUNT] =
        fields
            .try_into()
            .map_err(|fields: Vec<String>| DatasetError::Malformed {
                line: line_number,
                reason: format!("expected {COLUMN_COUNT} columns, found {}", fields.len()),
            })?;
    let [id, first_name, last_name, email, department, city, state, zip, uuid] = columns;

    let id = id.parse::<i64>().map_err(|_| DatasetError::Malformed {
        line: line_number,
        reason: format!("id {id:?} is not a 64-bit integer"),
    })?;

    Ok(User {
        id,
        first_name,
        last_name,
        email,
        department,
        city,
        state,
        zip,
        uuid,
    })
}

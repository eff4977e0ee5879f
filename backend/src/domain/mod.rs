//! Domain types and the query pipeline.
//!
//! Everything here is transport agnostic. Inbound adapters extract
//! [`QueryParams`] from requests and talk to the dataset through the
//! [`ports`] seam; nothing in this module performs I/O.

pub mod error;
pub mod ports;
pub mod query;
pub mod user;

pub use error::{DomainError, ErrorCode};
pub use query::{DEFAULT_TAKE, QueryParams};
pub use user::User;

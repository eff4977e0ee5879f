//! User data model.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// One record of the user directory.
///
/// Field names double as the JSON keys and as the column order of the
/// bundled dataset. All text columns are stored verbatim; the loader performs
/// no trimming or validation beyond parsing `id`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct User {
    /// Stable numeric identifier, unique within the dataset.
    #[schema(example = 42)]
    pub id: i64,
    /// Given name.
    #[schema(example = "Ada")]
    pub first_name: String,
    /// Family name.
    #[schema(example = "Lovelace")]
    pub last_name: String,
    /// Contact email address.
    #[schema(example = "ada.lovelace@example.com")]
    pub email: String,
    /// Organisational department.
    #[schema(example = "Engineering")]
    pub department: String,
    /// City of the user's office.
    #[schema(example = "London")]
    pub city: String,
    /// State or region code.
    #[schema(example = "LDN")]
    pub state: String,
    /// Postal code.
    #[schema(example = "EC1A 1BB")]
    pub zip: String,
    /// External correlation identifier, carried as opaque text.
    #[schema(example = "3fa85f64-5717-4562-b3fc-2c963f66afa6")]
    pub uuid: String,
}

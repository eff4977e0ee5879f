//! Query engine: prefix filtering, deterministic ordering, take-limit.
//!
//! The pipeline is a pure function over the loaded records: apply every
//! active filter as a conjunction, sort the survivors, truncate. It never
//! fails; malformed `take` values silently fall back to [`DEFAULT_TAKE`].

use serde::Deserialize;
use utoipa::IntoParams;

use crate::domain::User;

/// Result-set cap applied when `take` is absent or unusable.
pub const DEFAULT_TAKE: usize = 10;

/// Recognised query-string options.
///
/// `take` is kept as raw text so extraction never rejects a request: the
/// contract normalises non-numeric, zero, and negative values to
/// [`DEFAULT_TAKE`] instead of failing.
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
pub struct QueryParams {
    /// Keep records whose `first_name` starts with this value,
    /// ASCII-case-insensitively. Absent or empty disables the filter.
    pub firstname: Option<String>,
    /// Same semantics as `firstname`, applied to `last_name`.
    pub lastname: Option<String>,
    /// Maximum number of records to return; defaults to 10 when absent,
    /// non-numeric, zero, or negative.
    pub take: Option<String>,
}

impl QueryParams {
    /// Resolve the effective take-limit.
    ///
    /// # Examples
    /// ```
    /// use backend::domain::QueryParams;
    ///
    /// let params = QueryParams {
    ///     take: Some("3".into()),
    ///     ..QueryParams::default()
    /// };
    /// assert_eq!(params.take_or_default(), 3);
    /// assert_eq!(QueryParams::default().take_or_default(), 10);
    /// ```
    #[must_use]
    pub fn take_or_default(&self) -> usize {
        self.take
            .as_deref()
            .and_then(|raw| raw.trim().parse::<i64>().ok())
            .and_then(|n| usize::try_from(n).ok())
            .filter(|n| *n > 0)
            .unwrap_or(DEFAULT_TAKE)
    }

    fn firstname_filter(&self) -> Option<&str> {
        active_filter(self.firstname.as_deref())
    }

    fn lastname_filter(&self) -> Option<&str> {
        active_filter(self.lastname.as_deref())
    }
}

/// An absent or empty parameter deactivates its filter.
fn active_filter(value: Option<&str>) -> Option<&str> {
    value.filter(|text| !text.is_empty())
}

/// ASCII-case-insensitive ordinal starts-with.
fn has_prefix(value: &str, prefix: &str) -> bool {
    value
        .as_bytes()
        .get(..prefix.len())
        .is_some_and(|head| head.eq_ignore_ascii_case(prefix.as_bytes()))
}

/// Run the query pipeline over `records`.
///
/// Active filters combine as a conjunction. Survivors are sorted by
/// `first_name` then `last_name`, ascending, comparing bytes (ordinal);
/// records with fully equal keys keep their load order because the sort is
/// stable. The sorted set is truncated to the effective take-limit.
///
/// The input is never mutated; the result holds independent clones.
#[must_use]
pub fn run(records: &[User], params: &QueryParams) -> Vec<User> {
    let firstname = params.firstname_filter();
    let lastname = params.lastname_filter();

    let mut matches: Vec<User> = records
        .iter()
        .filter(|user| firstname.is_none_or(|prefix| has_prefix(&user.first_name, prefix)))
        .filter(|user| lastname.is_none_or(|prefix| has_prefix(&user.last_name, prefix)))
        .cloned()
        .collect();

    matches.sort_by(|a, b| {
        a.first_name
            .cmp(&b.first_name)
            .then_with(|| a.last_name.cmp(&b.last_name))
    });
    matches.truncate(params.take_or_default());
    matches
}

//! Expense identifiers
//!
//! Ids are creation timestamps in milliseconds. They order records and are
//! used for dedup, but two clients writing in the same millisecond can
//! collide; nothing here pretends otherwise.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of an expense record
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ExpenseId(i64);

impl ExpenseId {
    /// Wrap a raw id
    pub const fn from_raw(raw: i64) -> Self {
        Self(raw)
    }

    /// Derive an id from a creation time
    pub fn from_timestamp(at: DateTime<Utc>) -> Self {
        Self(at.timestamp_millis())
    }

    /// Next id for a record created at `at`, never going backwards from `last`
    ///
    /// `None` when `last` is already `i64::MAX`.
    pub fn next_after(last: Option<ExpenseId>, at: DateTime<Utc>) -> Option<Self> {
        let candidate = Self::from_timestamp(at);
        match last {
            Some(last) if candidate <= last => last.0.checked_add(1).map(Self),
            _ => Some(candidate),
        }
    }

    /// The raw integer value
    pub const fn as_i64(&self) -> i64 {
        self.0
    }
}

impl fmt::Display for ExpenseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_from_timestamp() {
        let at = Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap();
        assert_eq!(ExpenseId::from_timestamp(at).as_i64(), 1_735_689_600_000);
    }

    #[test]
    fn test_next_after_is_strictly_increasing() {
        let at = Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap();
        let first = ExpenseId::next_after(None, at).unwrap();
        let second = ExpenseId::next_after(Some(first), at).unwrap();
        assert!(second > first);
        assert_eq!(second.as_i64(), first.as_i64() + 1);
    }

    #[test]
    fn test_next_after_max_id_is_exhausted() {
        let at = Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap();
        assert_eq!(ExpenseId::next_after(Some(ExpenseId::from_raw(i64::MAX)), at), None);

        let near = ExpenseId::from_raw(i64::MAX - 1);
        assert_eq!(
            ExpenseId::next_after(Some(near), at),
            Some(ExpenseId::from_raw(i64::MAX))
        );
    }

    #[test]
    fn test_serializes_as_integer() {
        let id = ExpenseId::from_raw(42);
        assert_eq!(serde_json::to_string(&id).unwrap(), "42");
    }
}

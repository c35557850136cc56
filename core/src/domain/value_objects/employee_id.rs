//! Sequential human-readable employee identifiers (`SSQ-1001`, `SSQ-1002`, ...).

use crate::errors::{DomainError, DomainResult};

/// Prefix shared by every allocated id
pub const EMPLOYEE_ID_PREFIX: &str = "SSQ-";

/// Suffix the sequence counts up from; the first id is `BASE + 1`
pub const EMPLOYEE_ID_BASE: u64 = 1000;

/// Render an id from its numeric suffix
pub fn format(sequence: u64) -> String {
    format!("{}{}", EMPLOYEE_ID_PREFIX, sequence)
}

/// Extract the numeric suffix, if `id` carries the prefix
pub fn parse_sequence(id: &str) -> Option<u64> {
    id.strip_prefix(EMPLOYEE_ID_PREFIX)?.parse().ok()
}

/// Next suffix given the current maximum, never at or below the base
///
/// Fails once the suffix space is exhausted.
pub fn next_sequence(current_max: Option<u64>) -> DomainResult<u64> {
    current_max
        .unwrap_or(EMPLOYEE_ID_BASE)
        .max(EMPLOYEE_ID_BASE)
        .checked_add(1)
        .ok_or_else(|| DomainError::storage("Employee id sequence exhausted"))
}

/// Next id given the ids already allocated
pub fn next_after<'a>(existing: impl IntoIterator<Item = &'a str>) -> DomainResult<String> {
    let current_max = existing.into_iter().filter_map(parse_sequence).max();
    next_sequence(current_max).map(format)
}

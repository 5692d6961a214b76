//! Record types for well-survey job tracking
//!
//! - masters: reference tables (services, customers, rigs, employees, ...)
//! - job: jobs, job info and the denormalized job detail view
//! - well: well info with its derived geodetic values
//! - survey: survey info, tie-on data, initial survey headers and details
//!
//! Column limits mirror the legacy schema and are checked before insert.

mod job;
mod masters;
mod survey;
mod well;

pub use job::*;
pub use masters::*;
pub use survey::*;
pub use well::*;

/// Record a violation if `value` is longer than `max` characters.
pub(crate) fn check_len(errors: &mut Vec<String>, field: &str, value: &str, max: usize) {
    let len = value.chars().count();
    if len > max {
        errors.push(format!("{field}: at most {max} characters (got {len})"));
    }
}

/// Record a violation if `value` is blank.
pub(crate) fn check_required(errors: &mut Vec<String>, field: &str, value: &str) {
    if value.trim().is_empty() {
        errors.push(format!("{field}: may not be blank"));
    }
}

/// Record a violation if a fixed-precision decimal would overflow its column.
///
/// `limit` is `10^(max_digits - decimal_places)`.
pub(crate) fn check_decimal(errors: &mut Vec<String>, field: &str, value: f64, limit: f64) {
    if !value.is_finite() {
        errors.push(format!("{field}: must be a finite number"));
    } else if value.abs() >= limit {
        errors.push(format!("{field}: magnitude must be below {limit}"));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_len_counts_chars() {
        let mut errors = Vec::new();
        check_len(&mut errors, "unit", "ft", 3);
        check_len(&mut errors, "unit", "µm²", 3);
        assert!(errors.is_empty());
        check_len(&mut errors, "unit", "feet", 3);
        assert_eq!(errors.len(), 1);
        assert!(errors[0].starts_with("unit"));
    }

    #[test]
    fn test_check_decimal() {
        let mut errors = Vec::new();
        check_decimal(&mut errors, "rkb", 9.99, 10.0);
        assert!(errors.is_empty());
        check_decimal(&mut errors, "rkb", 10.0, 10.0);
        check_decimal(&mut errors, "rkb", f64::INFINITY, 10.0);
        assert_eq!(errors.len(), 2);
    }
}

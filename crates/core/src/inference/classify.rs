//! Value classification
//!
//! Assigns an [`InferredType`] label to individual values and, by
//! majority vote, to whole columns.

use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value;

use super::types::InferredType;

// Pattern table for string classification. Date patterns are prefix
// matches: a timestamp like "2024-01-15T10:30:00" still counts as a date.
static DATE_ISO_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d{4}-\d{2}-\d{2}").unwrap());

static DATE_US_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d{2}/\d{2}/\d{4}").unwrap());

static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap());

static URL_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^https?://").unwrap());

/// Classify a single value.
///
/// Checks run in a fixed precedence order; the first match wins:
/// null/empty string, boolean, number (native or numeric string), date,
/// email, URL, plain string, array, object.
pub fn classify_value(value: &Value) -> InferredType {
    match value {
        Value::Null => InferredType::Null,
        Value::String(s) if s.is_empty() => InferredType::Null,
        Value::Bool(_) => InferredType::Boolean,
        Value::Number(_) => InferredType::Number,
        Value::String(s) => {
            if is_numeric(s) {
                InferredType::Number
            } else if DATE_ISO_REGEX.is_match(s) || DATE_US_REGEX.is_match(s) {
                InferredType::Date
            } else if EMAIL_REGEX.is_match(s) {
                InferredType::Email
            } else if URL_REGEX.is_match(s) {
                InferredType::Url
            } else {
                InferredType::String
            }
        }
        Value::Array(_) => InferredType::Array,
        Value::Object(_) => InferredType::Object,
    }
}

/// Numeric-string coercion: the string parses to a finite number
fn is_numeric(s: &str) -> bool {
    s.trim().parse::<f64>().map(f64::is_finite).unwrap_or(false)
}

/// Classify a column from its observed values.
///
/// The column's type is the most frequent per-value classification.
/// Ties go to the type encountered first, so repeated runs over the same
/// records are deterministic. An empty column classifies as `Null`.
pub fn column_type<'a, I>(values: I) -> InferredType
where
    I: IntoIterator<Item = &'a Value>,
{
    // Counts keyed in first-encounter order; the tally is tiny (at most
    // one entry per InferredType variant) so a linear scan is fine.
    let mut counts: Vec<(InferredType, usize)> = Vec::new();

    for value in values {
        let inferred = classify_value(value);
        match counts.iter_mut().find(|(t, _)| *t == inferred) {
            Some((_, n)) => *n += 1,
            None => counts.push((inferred, 1)),
        }
    }

    let mut best: Option<(InferredType, usize)> = None;
    for (inferred, count) in counts {
        match &best {
            Some((_, best_count)) if count <= *best_count => {}
            _ => best = Some((inferred, count)),
        }
    }

    best.map(|(t, _)| t).unwrap_or(InferredType::Null)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_classify_null_and_empty() {
        assert_eq!(classify_value(&Value::Null), InferredType::Null);
        assert_eq!(classify_value(&json!("")), InferredType::Null);
    }

    #[test]
    fn test_classify_boolean() {
        assert_eq!(classify_value(&json!(true)), InferredType::Boolean);
        // CSV booleans arrive as text and stay strings
        assert_eq!(classify_value(&json!("true")), InferredType::String);
    }

    #[test]
    fn test_classify_numbers() {
        assert_eq!(classify_value(&json!(3)), InferredType::Number);
        assert_eq!(classify_value(&json!(2.5)), InferredType::Number);
        assert_eq!(classify_value(&json!("42")), InferredType::Number);
        assert_eq!(classify_value(&json!("-1.5e3")), InferredType::Number);
        assert_eq!(classify_value(&json!("inf")), InferredType::String);
        assert_eq!(classify_value(&json!("42abc")), InferredType::String);
    }

    #[test]
    fn test_classify_dates() {
        assert_eq!(classify_value(&json!("2024-01-15")), InferredType::Date);
        // Prefix match: timestamps count as dates
        assert_eq!(
            classify_value(&json!("2024-01-15T10:30:00Z")),
            InferredType::Date
        );
        assert_eq!(classify_value(&json!("01/15/2024")), InferredType::Date);
        assert_eq!(classify_value(&json!("15 Jan 2024")), InferredType::String);
    }

    #[test]
    fn test_classify_email_and_url() {
        assert_eq!(classify_value(&json!("a@b.com")), InferredType::Email);
        assert_eq!(classify_value(&json!("a b@c.com")), InferredType::String);
        assert_eq!(classify_value(&json!("https://x.com")), InferredType::Url);
        assert_eq!(classify_value(&json!("http://x")), InferredType::Url);
        assert_eq!(classify_value(&json!("ftp://x.com")), InferredType::String);
    }

    #[test]
    fn test_classify_structured() {
        assert_eq!(classify_value(&json!([1, 2])), InferredType::Array);
        assert_eq!(classify_value(&json!({"a": 1})), InferredType::Object);
    }

    #[test]
    fn test_column_majority_vote() {
        let values = [json!("1"), json!("2"), json!("abc")];
        assert_eq!(column_type(values.iter()), InferredType::Number);
    }

    #[test]
    fn test_column_tie_goes_to_first_encountered() {
        let values = [json!("hello"), json!("7"), json!("world"), json!("8")];
        assert_eq!(column_type(values.iter()), InferredType::String);

        let values = [json!("7"), json!("hello"), json!("8"), json!("world")];
        assert_eq!(column_type(values.iter()), InferredType::Number);
    }

    #[test]
    fn test_column_empty_is_null() {
        assert_eq!(column_type(std::iter::empty::<&Value>()), InferredType::Null);
    }
}

//! Per-field semantic type classification.
//!
//! A field is classified from the values observed for it across a dataset.
//! Rules are applied in order and the first one that fires wins:
//!
//! 1. numeric, when more than 80% of values parse as numbers
//!    (plain, `%`-suffixed, or carrying a currency symbol);
//! 2. date / datetime, when at least 80% of the first ten values parse with
//!    one of the known date patterns (first pattern in declared order wins);
//! 3. categorical when fewer than half the values are unique, else text.
//!
//! Values that fail to parse are skipped, never reported as errors.

use std::collections::HashSet;

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::value::Scalar;

/// Share of values that must parse as numbers (strictly exceeded).
pub const NUMERIC_THRESHOLD: f64 = 0.8;

/// Share of the probe prefix that must parse as a date (inclusive).
pub const DATE_THRESHOLD: f64 = 0.8;

/// Number of leading values probed for date patterns.
pub const DATE_PROBE_LIMIT: usize = 10;

/// Unique ratio below which a non-numeric, non-date field is categorical.
pub const CATEGORICAL_UNIQUE_RATIO: f64 = 0.5;

/// Number of values kept in [`FieldProfile::sample_values`].
pub const SAMPLE_VALUE_LIMIT: usize = 5;

const CURRENCY_SYMBOLS: [char; 4] = ['$', '€', '£', '¥'];

/// Semantic type of a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SemanticType {
    Numeric,
    Categorical,
    Text,
    Date,
    Datetime,
    Unknown,
}

impl SemanticType {
    /// Whether the type is `date` or `datetime`.
    pub fn is_temporal(self) -> bool {
        matches!(self, SemanticType::Date | SemanticType::Datetime)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SemanticType::Numeric => "numeric",
            SemanticType::Categorical => "categorical",
            SemanticType::Text => "text",
            SemanticType::Date => "date",
            SemanticType::Datetime => "datetime",
            SemanticType::Unknown => "unknown",
        }
    }
}

/// Classification result for one field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldProfile {
    /// The decided semantic type.
    #[serde(rename = "type")]
    pub semantic_type: SemanticType,
    /// First few observed values, for display only.
    pub sample_values: Vec<Scalar>,
    /// Number of distinct values (by string form).
    pub unique_count: usize,
    /// `unique_count / total observed`.
    pub unique_ratio: f64,
    /// At least one value parsed as a `%`-suffixed number.
    pub is_percentage: bool,
    /// At least one value parsed as a currency amount.
    pub is_currency: bool,
    /// `[min, max]` of parsed numbers; only for numeric fields.
    #[serde(rename = "range", skip_serializing_if = "Option::is_none", default)]
    pub value_range: Option<[f64; 2]>,
    /// Mean of parsed numbers; only for numeric fields.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub average: Option<f64>,
    /// The date pattern that matched, for date/datetime fields.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub date_format: Option<String>,
}

/// A date pattern probed during classification.
#[derive(Debug, Clone, Copy)]
struct DatePattern {
    /// `strftime`-style format string.
    format: &'static str,
    /// Whether a match means `datetime` rather than `date`.
    has_time: bool,
}

/// Probed in this order; the first pattern to clear the threshold is used.
const DATE_PATTERNS: [DatePattern; 6] = [
    DatePattern { format: "%Y-%m-%d", has_time: false },
    DatePattern { format: "%Y-%m", has_time: false },
    DatePattern { format: "%m/%d/%Y", has_time: false },
    DatePattern { format: "%d/%m/%Y", has_time: false },
    DatePattern { format: "%Y-%m-%dT%H:%M:%S", has_time: true },
    DatePattern { format: "%Y-%m-%d %H:%M:%S", has_time: true },
];

impl DatePattern {
    fn matches(&self, value: &str) -> bool {
        if self.has_time {
            return NaiveDateTime::parse_from_str(value, self.format).is_ok();
        }
        if self.format == "%Y-%m" {
            // chrono needs a day to build a date.
            return NaiveDate::parse_from_str(&format!("{}-01", value), "%Y-%m-%d").is_ok();
        }
        NaiveDate::parse_from_str(value, self.format).is_ok()
    }
}

/// How a value was recognized as a number.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum NumericMarker {
    Plain,
    Percentage,
    Currency,
}

/// Try to read a numeric value out of a scalar.
fn parse_numeric(value: &Scalar) -> Option<(f64, NumericMarker)> {
    let (number, marker) = match value {
        Scalar::Number(n) => (n.as_f64()?, NumericMarker::Plain),
        Scalar::Text(s) => {
            let s = s.trim();
            if let Some(rest) = s.strip_suffix('%') {
                (rest.trim().parse::<f64>().ok()?, NumericMarker::Percentage)
            } else if s.contains(CURRENCY_SYMBOLS) {
                let cleaned: String = s
                    .chars()
                    .filter(|c| c.is_ascii_digit() || *c == '.')
                    .collect();
                if cleaned.is_empty() {
                    return None;
                }
                (cleaned.parse::<f64>().ok()?, NumericMarker::Currency)
            } else {
                (s.parse::<f64>().ok()?, NumericMarker::Plain)
            }
        }
        Scalar::Boolean(_) | Scalar::Null => return None,
    };
    number.is_finite().then_some((number, marker))
}

/// Classify a field from its observed non-null values.
///
/// `field_name` is used only for diagnostics. An empty `values` slice yields
/// [`SemanticType::Unknown`].
pub fn classify(field_name: &str, values: &[Scalar]) -> FieldProfile {
    let total = values.len();
    let unique_count = values
        .iter()
        .map(|v| v.to_string())
        .collect::<HashSet<_>>()
        .len();
    let unique_ratio = if total == 0 {
        0.0
    } else {
        unique_count as f64 / total as f64
    };

    let mut profile = FieldProfile {
        semantic_type: SemanticType::Unknown,
        sample_values: values.iter().take(SAMPLE_VALUE_LIMIT).cloned().collect(),
        unique_count,
        unique_ratio,
        is_percentage: false,
        is_currency: false,
        value_range: None,
        average: None,
        date_format: None,
    };

    if total == 0 {
        return profile;
    }

    let mut numbers = Vec::with_capacity(total);
    for value in values {
        if let Some((number, marker)) = parse_numeric(value) {
            match marker {
                NumericMarker::Percentage => profile.is_percentage = true,
                NumericMarker::Currency => profile.is_currency = true,
                NumericMarker::Plain => {}
            }
            numbers.push(number);
        }
    }

    if numbers.len() as f64 > total as f64 * NUMERIC_THRESHOLD {
        let min = numbers.iter().copied().fold(f64::INFINITY, f64::min);
        let max = numbers.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        profile.semantic_type = SemanticType::Numeric;
        profile.value_range = Some([min, max]);
        profile.average = Some(mean(&numbers));
    } else if let Some(pattern) = detect_date_pattern(values) {
        profile.semantic_type = if pattern.has_time {
            SemanticType::Datetime
        } else {
            SemanticType::Date
        };
        profile.date_format = Some(pattern.format.to_string());
    } else if unique_ratio < CATEGORICAL_UNIQUE_RATIO {
        profile.semantic_type = SemanticType::Categorical;
    } else {
        profile.semantic_type = SemanticType::Text;
    }

    trace!(
        "Classified field '{}' as {} ({} values, {} unique)",
        field_name,
        profile.semantic_type.as_str(),
        total,
        unique_count
    );

    profile
}

/// Mean of finite values. Scales each term first when the plain sum
/// overflows, so the result stays finite.
fn mean(numbers: &[f64]) -> f64 {
    let n = numbers.len() as f64;
    let sum: f64 = numbers.iter().sum();
    if sum.is_finite() {
        sum / n
    } else {
        numbers.iter().map(|x| x / n).sum()
    }
}

/// First date pattern that parses at least 80% of the probe prefix.
fn detect_date_pattern(values: &[Scalar]) -> Option<DatePattern> {
    let prefix = &values[..values.len().min(DATE_PROBE_LIMIT)];
    if prefix.is_empty() {
        return None;
    }
    let required = prefix.len() as f64 * DATE_THRESHOLD;

    DATE_PATTERNS.iter().copied().find(|pattern| {
        let parsed = prefix
            .iter()
            .filter_map(Scalar::as_text)
            .filter(|s| pattern.matches(s))
            .count();
        parsed as f64 >= required
    })
}

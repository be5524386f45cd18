//! Dataset-level structure analysis.

use std::collections::BTreeSet;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::classifier::{classify, FieldProfile, SemanticType};
use crate::value::{field_values, Record};

/// A named structural signal used to pick a chart type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DataPattern {
    /// At least one date or datetime field.
    TimeSeries,
    /// Categorical fields alongside percentage values.
    CategoricalBreakdown,
    /// More than two numeric fields.
    MultiMetric,
}

impl DataPattern {
    pub fn as_str(self) -> &'static str {
        match self {
            DataPattern::TimeSeries => "time_series",
            DataPattern::CategoricalBreakdown => "categorical_breakdown",
            DataPattern::MultiMetric => "multi_metric",
        }
    }
}

/// Aggregated structural summary of a dataset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatasetProfile {
    /// Number of records analyzed.
    pub total_records: usize,
    /// Field names of the first record, in declared order.
    pub fields: Vec<String>,
    /// Per-field classification, in `fields` order. Fields with no non-null
    /// value anywhere are left out.
    pub field_types: IndexMap<String, FieldProfile>,
    pub has_time_series: bool,
    pub has_categories: bool,
    pub has_percentages: bool,
    /// First date/datetime field.
    pub suggested_x_field: Option<String>,
    /// First numeric field.
    pub suggested_y_field: Option<String>,
    pub data_patterns: BTreeSet<DataPattern>,
}

impl DatasetProfile {
    /// Whether `pattern` was detected.
    pub fn has_pattern(&self, pattern: DataPattern) -> bool {
        self.data_patterns.contains(&pattern)
    }

    /// Number of fields classified as numeric.
    pub fn numeric_field_count(&self) -> usize {
        self.field_types
            .values()
            .filter(|p| p.semantic_type == SemanticType::Numeric)
            .count()
    }
}

/// Analyze a dataset.
///
/// The field set is taken from the first record; values for each field are
/// gathered from every record that has a non-null value for it.
pub fn analyze(dataset: &[Record]) -> DatasetProfile {
    let fields: Vec<String> = dataset
        .first()
        .map(|sample| sample.keys().cloned().collect())
        .unwrap_or_default();

    let mut profile = DatasetProfile {
        total_records: dataset.len(),
        fields: fields.clone(),
        field_types: IndexMap::new(),
        has_time_series: false,
        has_categories: false,
        has_percentages: false,
        suggested_x_field: None,
        suggested_y_field: None,
        data_patterns: BTreeSet::new(),
    };

    for field in fields {
        let values = field_values(dataset, &field);
        if values.is_empty() {
            continue;
        }

        let field_profile = classify(&field, &values);
        let semantic_type = field_profile.semantic_type;

        if semantic_type.is_temporal() {
            profile.has_time_series = true;
            if profile.suggested_x_field.is_none() {
                profile.suggested_x_field = Some(field.clone());
            }
        }
        if field_profile.is_percentage {
            profile.has_percentages = true;
        }
        if semantic_type == SemanticType::Categorical {
            profile.has_categories = true;
        }
        if semantic_type == SemanticType::Numeric && profile.suggested_y_field.is_none() {
            profile.suggested_y_field = Some(field.clone());
        }

        profile.field_types.insert(field, field_profile);
    }

    if profile.has_time_series {
        profile.data_patterns.insert(DataPattern::TimeSeries);
    }
    if profile.has_categories && profile.has_percentages {
        profile.data_patterns.insert(DataPattern::CategoricalBreakdown);
    }
    if profile.numeric_field_count() > 2 {
        profile.data_patterns.insert(DataPattern::MultiMetric);
    }

    debug!(
        "Analyzed {} records over {} fields: x={:?}, y={:?}, patterns={:?}",
        profile.total_records,
        profile.fields.len(),
        profile.suggested_x_field,
        profile.suggested_y_field,
        profile.data_patterns
    );

    profile
}

//! User-declared datasets.
//!
//! Unlike chart analysis, which follows the first record's fields, dataset
//! metadata covers the union of fields across every record and keeps only
//! each field's semantic type.

use std::collections::BTreeSet;

use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

use crate::classifier::{classify, SemanticType};
use crate::error::ChartError;
use crate::format_timestamp;
use crate::value::{field_values, record_from_object, Dataset, RawRecord};

/// Metadata attached to a [`CustomDataset`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatasetMetadata {
    pub total_records: usize,
    /// Union of field names across all records, sorted.
    pub fields: Vec<String>,
    pub created_at: String,
    /// Semantic type per field, in `fields` order.
    pub data_types: IndexMap<String, SemanticType>,
}

/// A named dataset ready to be charted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomDataset {
    pub name: String,
    pub description: String,
    /// The data points, echoed back unchanged.
    pub data: Vec<RawRecord>,
    pub metadata: DatasetMetadata,
}

/// Build a [`CustomDataset`] from raw data points, stamping the current time.
pub fn create_custom_dataset(
    name: &str,
    description: &str,
    data_points: &[Value],
) -> Result<CustomDataset, ChartError> {
    create_custom_dataset_at(name, description, data_points, Utc::now())
}

/// Build a [`CustomDataset`] with an explicit creation time.
pub fn create_custom_dataset_at(
    name: &str,
    description: &str,
    data_points: &[Value],
    now: DateTime<Utc>,
) -> Result<CustomDataset, ChartError> {
    if data_points.is_empty() {
        return Err(ChartError::NoDataPoints);
    }

    let data: Vec<RawRecord> = data_points
        .iter()
        .map(|point| point.as_object().cloned().ok_or(ChartError::NonRecordDataPoint))
        .collect::<Result<_, _>>()?;
    let records: Dataset = data.iter().map(record_from_object).collect();

    let fields: Vec<String> = records
        .iter()
        .flat_map(|record| record.keys().cloned())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect();

    // Fields that are null everywhere classify as unknown.
    let data_types = fields
        .iter()
        .map(|field| {
            let values = field_values(&records, field);
            (field.clone(), classify(field, &values).semantic_type)
        })
        .collect();

    debug!(
        "Created dataset '{}' with {} records and {} fields",
        name,
        data.len(),
        fields.len()
    );

    Ok(CustomDataset {
        name: name.to_string(),
        description: description.to_string(),
        metadata: DatasetMetadata {
            total_records: data.len(),
            fields,
            created_at: format_timestamp(now),
            data_types,
        },
        data,
    })
}

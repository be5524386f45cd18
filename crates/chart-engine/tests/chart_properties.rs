//! End-to-end behaviour of chart generation and dataset creation.
//!
//! Run with:
//!   cargo test -p chart-engine --test chart_properties

use chart_engine::{
    classify, create_custom_dataset, generate_chart_data, ChartError, ChartRequest, ChartType,
    DataPattern, Scalar, SemanticType,
};
use serde_json::{json, Value};

fn scalars(values: &[Value]) -> Vec<Scalar> {
    values.iter().map(Scalar::from).collect()
}

// ============================================================================
// Field classification
// ============================================================================

mod classification {
    use super::*;

    #[test]
    fn test_numeric_range_is_exact() {
        let values = scalars(&[json!(3.5), json!("7"), json!(-2), json!("10%"), json!("$4")]);
        let profile = classify("mixed_numbers", &values);
        assert_eq!(profile.semantic_type, SemanticType::Numeric);
        assert_eq!(profile.value_range, Some([-2.0, 10.0]));
        assert!(profile.is_percentage);
        assert!(profile.is_currency);
    }

    #[test]
    fn test_percentage_field() {
        let profile = classify("share", &scalars(&[json!("10%"), json!("20%"), json!("30%")]));
        assert_eq!(profile.semantic_type, SemanticType::Numeric);
        assert!(profile.is_percentage);
        assert_eq!(profile.value_range, Some([10.0, 30.0]));
        assert_eq!(profile.average, Some(20.0));
    }

    #[test]
    fn test_year_month_is_date_not_datetime() {
        let profile = classify(
            "month",
            &scalars(&[json!("2024-01"), json!("2024-02"), json!("2024-03")]),
        );
        assert_eq!(profile.semantic_type, SemanticType::Date);
    }

    #[test]
    fn test_non_numeric_non_date_split_on_uniqueness() {
        let repeated = scalars(&[json!("a"), json!("b"), json!("a"), json!("a"), json!("b")]);
        assert_eq!(classify("f", &repeated).semantic_type, SemanticType::Categorical);

        let distinct = scalars(&[json!("a"), json!("b"), json!("c")]);
        assert_eq!(classify("f", &distinct).semantic_type, SemanticType::Text);
    }
}

// ============================================================================
// Chart generation
// ============================================================================

mod generation {
    use super::*;

    #[test]
    fn test_date_and_numeric_infers_line() {
        let data = json!([
            {"date": "2024-01-01", "value": 10},
            {"date": "2024-01-02", "value": 12},
            {"date": "2024-01-03", "value": 9},
        ]);
        let result = generate_chart_data(&data, &ChartRequest::new()).unwrap();
        assert_eq!(result.chart_type, ChartType::Line);
        assert_eq!(result.config.x_field.as_deref(), Some("date"));
        assert_eq!(result.config.y_field.as_deref(), Some("value"));
        assert_eq!(result.title, "Value Over Time");
        assert_eq!(
            result.description,
            "Chart showing 3 data points, with time series analysis."
        );
    }

    #[test]
    fn test_market_share_infers_pie() {
        let data = json!([
            {"name": "Postpaid", "share": "35.2%"},
            {"name": "Postpaid", "share": "28.7%"},
            {"name": "Prepaid", "share": "18.4%"},
            {"name": "Prepaid", "share": "12.1%"},
            {"name": "Postpaid", "share": "5.6%"},
        ]);
        let result = generate_chart_data(&data, &ChartRequest::new()).unwrap();
        assert_eq!(result.chart_type, ChartType::Pie);
        assert!(result
            .data_analysis
            .data_patterns
            .contains(&DataPattern::CategoricalBreakdown));
        assert_eq!(result.title, "Share Distribution");
        assert_eq!(result.config.options["plugins"]["legend"]["position"], "right");
    }

    #[test]
    fn test_unique_month_names_fall_back_to_line() {
        let data = json!([{"month": "Jan", "sales": 1000}, {"month": "Feb", "sales": 1200}]);
        let result = generate_chart_data(&data, &ChartRequest::new()).unwrap();

        let month = &result.data_analysis.field_types["month"];
        assert_eq!(month.semantic_type, SemanticType::Text);
        assert!(!result.data_analysis.has_categories);
        assert_eq!(result.data_analysis.suggested_y_field.as_deref(), Some("sales"));
        assert_eq!(result.data_analysis.suggested_x_field, None);
        assert_eq!(result.chart_type, ChartType::Line);
        assert_eq!(result.title, "Line Chart");
        assert_eq!(result.description, "Chart showing 2 data points.");
    }

    #[test]
    fn test_repeated_categories_infer_bar() {
        let data = json!([
            {"region": "EU", "sales": 10},
            {"region": "US", "sales": 12},
            {"region": "EU", "sales": 8},
            {"region": "EU", "sales": 7},
            {"region": "US", "sales": 3},
        ]);
        let request = ChartRequest::new().with_x_field("region");
        let result = generate_chart_data(&data, &request).unwrap();
        assert_eq!(result.chart_type, ChartType::Bar);
        assert_eq!(result.title, "Sales by Region");
    }

    #[test]
    fn test_multi_metric_infers_multi_bar() {
        let data = json!([
            {"department": "Sales", "efficiency": 80.1, "satisfaction": 90.2, "productivity": 70.3},
            {"department": "HR", "efficiency": 85.4, "satisfaction": 88.0, "productivity": 75.9},
        ]);
        let result = generate_chart_data(&data, &ChartRequest::new()).unwrap();
        assert_eq!(result.chart_type, ChartType::MultiBar);
        assert_eq!(result.config.options, json!({}));
        assert_eq!(result.title, "Multi-Bar Chart");
        assert_eq!(
            result.description,
            "Chart showing 2 data points, with multiple metrics."
        );
    }

    #[test]
    fn test_generation_is_idempotent() {
        let data = json!([
            {"date": "2024-01", "rate": 3.5, "segment": "consumer"},
            {"date": "2024-02", "rate": 3.2, "segment": "consumer"},
            {"date": "2024-03", "rate": 3.0, "segment": "business"},
        ]);
        let first = generate_chart_data(&data, &ChartRequest::new()).unwrap();
        let second = generate_chart_data(&data, &ChartRequest::new()).unwrap();

        assert_eq!(first.chart_type, second.chart_type);
        assert_eq!(first.title, second.title);
        assert_eq!(first.description, second.description);
        assert_eq!(first.config, second.config);
        assert_eq!(first.data_analysis, second.data_analysis);
    }

    #[test]
    fn test_json_text_and_single_record() {
        let text = json!(r#"{"date": "2024-01-01", "value": 3}"#);
        let result = generate_chart_data(&text, &ChartRequest::new()).unwrap();
        assert_eq!(result.total_data_points, 1);
        assert_eq!(result.config.data.len(), 1);
    }

    #[test]
    fn test_config_echoes_input() {
        let data = json!([
            {"label": "a", "count": 1000, "meta": {"k": 1}},
            {"label": "b", "count": 2, "meta": [1, 2]},
        ]);
        let result = generate_chart_data(&data, &ChartRequest::new()).unwrap();
        let config = serde_json::to_value(&result.config).unwrap();
        assert_eq!(config["data"], data);
        assert_eq!(config["type"], "line");
    }

    #[test]
    fn test_input_errors_are_values() {
        let request = ChartRequest::new();
        assert_eq!(
            generate_chart_data(&json!([]), &request).unwrap_err(),
            ChartError::NoData
        );
        assert_eq!(
            generate_chart_data(&json!(""), &request).unwrap_err(),
            ChartError::NoData
        );
        assert_eq!(
            generate_chart_data(&json!("{oops"), &request).unwrap_err().to_string(),
            "Invalid JSON data provided"
        );
        assert_eq!(
            generate_chart_data(&json!(true), &request).unwrap_err().to_string(),
            "Data must be a list of objects or a single object"
        );
    }
}

// ============================================================================
// Custom datasets
// ============================================================================

mod custom_datasets {
    use super::*;

    #[test]
    fn test_metadata_covers_field_union() {
        let points = vec![
            json!({"a": 1}),
            json!({"b": "x"}),
            json!({"a": 2, "c": "2024-01-01"}),
        ];
        let dataset = create_custom_dataset("Union", "Mixed fields", &points).unwrap();
        let fields: Vec<&str> = dataset
            .metadata
            .data_types
            .keys()
            .map(|k| k.as_str())
            .collect();
        assert_eq!(fields, vec!["a", "b", "c"]);
        assert_eq!(dataset.metadata.data_types["c"], SemanticType::Date);
    }

    #[test]
    fn test_empty_points_error() {
        let error = create_custom_dataset("Empty", "", &[]).unwrap_err();
        assert_eq!(error.to_string(), "No data points provided");
    }

    #[test]
    fn test_non_record_point_error() {
        let points = vec![json!({"a": 1}), json!("oops")];
        let error = create_custom_dataset("Bad", "", &points).unwrap_err();
        assert_eq!(error.to_string(), "All data points must be dictionaries");
    }
}

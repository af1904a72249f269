//! Contract tests for the dashboard chart artifacts.

use approx::assert_abs_diff_eq;
use inv_table::{inventory, Frame};

fn sample_frame() -> Frame {
    Frame::new(
        vec![
            "Location".into(),
            "Item".into(),
            "Category".into(),
            "Count".into(),
            "Value".into(),
        ],
        vec![
            vec!["A".into(), "Widget".into(), "Tools".into(), "10".into(), "100.0".into()],
            vec!["B".into(), "Bolt".into(), "Tools".into(), "5".into(), "20.0".into()],
            vec!["A".into(), "Tape".into(), "Supplies".into(), "12".into(), "18.0".into()],
            vec!["A".into(), "Hammer".into(), "Tools".into(), "7".into(), "35.5".into()],
        ],
    )
    .unwrap()
}

#[test]
fn bar_artifact_contract() {
    let frame = sample_frame();
    let view = inventory::filter_by_location(&frame, "A").unwrap();

    let artifact = inv_viz::bar_artifact(&view).expect("bar artifact");
    assert_eq!(artifact.schema_version, "invstat_bar_v0");
    assert_eq!(artifact.x_label, "Item");
    assert_eq!(artifact.y_label, "Count");

    let labels: Vec<&str> = artifact.bars.iter().map(|b| b.label.as_str()).collect();
    assert_eq!(labels, vec!["Widget", "Tape", "Hammer"]);
    assert_abs_diff_eq!(artifact.bars[1].value, 12.0);
}

#[test]
fn bar_artifact_requires_item_column() {
    let frame = Frame::new(vec!["Location".into()], vec![vec!["A".into()]]).unwrap();
    let err = inv_viz::bar_artifact(&frame).unwrap_err();
    assert!(matches!(err, inv_core::Error::MissingColumn(ref c) if c == "Item"));
}

#[test]
fn pie_artifact_is_full_table_scoped_and_sorted() {
    let frame = sample_frame();
    let aggregate = inventory::aggregate_by_category(&frame).unwrap();

    let artifact = inv_viz::pie_artifact(&aggregate);
    assert_eq!(artifact.schema_version, "invstat_pie_v0");
    assert_abs_diff_eq!(artifact.total_count, 34.0);

    // Slices are sorted by descending fraction; fractions sum to 1.
    assert_eq!(artifact.slices[0].category, "Tools");
    assert_abs_diff_eq!(artifact.slices[0].count, 22.0);
    assert_abs_diff_eq!(artifact.slices[0].fraction, 22.0 / 34.0, epsilon = 1e-12);
    let fraction_sum: f64 = artifact.slices.iter().map(|s| s.fraction).sum();
    assert_abs_diff_eq!(fraction_sum, 1.0, epsilon = 1e-12);
}

#[test]
fn pie_artifact_of_empty_aggregate_has_zero_total() {
    let artifact = inv_viz::pie_artifact(&[]);
    assert!(artifact.slices.is_empty());
    assert_abs_diff_eq!(artifact.total_count, 0.0);
}

#[test]
fn scatter_artifact_groups_by_category() {
    let frame = sample_frame();
    let view = inventory::filter_by_location(&frame, "A").unwrap();

    let artifact = inv_viz::scatter_artifact(&view).expect("scatter artifact");
    assert_eq!(artifact.schema_version, "invstat_scatter_v0");
    assert_eq!(artifact.series.len(), 2);

    let tools = &artifact.series[0];
    assert_eq!(tools.category, "Tools");
    assert_eq!(tools.x, vec![100.0, 35.5]);
    assert_eq!(tools.y, vec![10.0, 7.0]);
    assert_eq!(tools.x.len(), tools.y.len());
}

#[test]
fn scatter_artifact_of_empty_view_has_no_series() {
    let frame = sample_frame();
    let view = inventory::filter_by_location(&frame, "Z").unwrap();
    let artifact = inv_viz::scatter_artifact(&view).unwrap();
    assert!(artifact.series.is_empty());
}

#[test]
fn heatmap_artifact_annotations_are_two_decimal() {
    let frame = sample_frame();
    let corr = inv_stats::correlation_matrix(&frame);

    let artifact = inv_viz::heatmap_artifact(&corr).expect("heatmap artifact");
    assert_eq!(artifact.schema_version, "invstat_heatmap_v0");
    assert_eq!(artifact.meta.tool, "invstat");
    assert_eq!(artifact.columns, vec!["Count", "Value"]);

    assert_eq!(artifact.annotations.len(), artifact.values.len());
    assert_eq!(artifact.annotations[0][0], "1.00");
    for (row, ann) in artifact.values.iter().zip(&artifact.annotations) {
        for (v, a) in row.iter().zip(ann) {
            assert_eq!(*a, format!("{:.2}", v));
        }
    }
}

#[test]
fn heatmap_artifact_serializes_without_nan() {
    let frame = sample_frame();
    let corr = inv_stats::correlation_matrix(&frame);
    let artifact = inv_viz::heatmap_artifact(&corr).unwrap();

    let json = serde_json::to_string(&artifact).expect("serialize heatmap");
    assert!(!json.contains("NaN"));
    assert!(!json.contains("null"));
}

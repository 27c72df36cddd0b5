//! End-to-end tests for a full visualizer run on a temporary directory.

#![allow(clippy::unwrap_used, clippy::indexing_slicing)]

use emitter_coverage::{CoverageError, PlotKind, VisualizerConfig, render_all};

fn config_in(dir: &std::path::Path, limit: i64) -> VisualizerConfig {
    VisualizerConfig {
        limit,
        output_dir: dir.to_string_lossy().into_owned(),
        ..VisualizerConfig::default()
    }
}

#[test]
fn writes_every_plot_and_the_summary() {
    let tmp = tempfile::tempdir().unwrap();
    let config = config_in(tmp.path(), 200);

    let report = render_all(&config).unwrap();
    assert_eq!(report.failed_count(), 0);
    for kind in PlotKind::ALL {
        let contents = std::fs::read_to_string(tmp.path().join(kind.file_name())).unwrap();
        assert!(contents.contains("<svg"), "{kind} is not an SVG");
    }

    let summary_path = report.write_summary(tmp.path()).unwrap();
    let summary: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(summary_path).unwrap()).unwrap();
    assert_eq!(summary["limit"], 200);
    assert_eq!(summary["prime_count"], 46);
    assert_eq!(summary["largest_prime"], 199);
    assert_eq!(summary["largest_gap"], 14);
    assert_eq!(
        summary["rendered"],
        serde_json::json!(["heatmap", "scatter", "gaps"])
    );
}

#[test]
fn a_failing_plot_does_not_stop_the_others() {
    let tmp = tempfile::tempdir().unwrap();
    // A directory squatting on the scatter file name makes only that write fail.
    std::fs::create_dir(tmp.path().join(PlotKind::Scatter.file_name())).unwrap();
    let config = config_in(tmp.path(), 100);

    let report = render_all(&config).unwrap();
    assert_eq!(report.failed_count(), 1);

    let scatter = &report.outcomes[1];
    assert_eq!(scatter.kind, PlotKind::Scatter);
    assert!(matches!(scatter.result, Err(CoverageError::Io { .. })));

    assert!(tmp.path().join(PlotKind::Heatmap.file_name()).is_file());
    assert!(tmp.path().join(PlotKind::Gaps.file_name()).is_file());
    assert_eq!(report.summary.rendered, vec![PlotKind::Heatmap, PlotKind::Gaps]);
    assert_eq!(report.summary.failed.len(), 1);
    assert_eq!(report.summary.failed[0].0, PlotKind::Scatter);
}

#[test]
fn engine_rejection_fails_the_run_before_any_output() {
    let tmp = tempfile::tempdir().unwrap();
    let out = tmp.path().join("plots");
    let config = config_in(&out, 0);

    let result = render_all(&config);
    assert!(matches!(result, Err(CoverageError::Engine { .. })));
    assert!(!out.exists());
}

#[test]
fn limit_one_renders_empty_plots() {
    let tmp = tempfile::tempdir().unwrap();
    let config = config_in(tmp.path(), 1);

    let report = render_all(&config).unwrap();
    assert_eq!(report.failed_count(), 0);
    assert_eq!(report.summary.prime_count, 0);
    assert_eq!(report.summary.largest_gap, None);
}

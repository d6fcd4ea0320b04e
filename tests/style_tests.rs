use candle_canvas::core::{CandleDirection, Viewport};
use candle_canvas::render::RecordingSurface;
use candle_canvas::{CandlestickChart, ChartStyles, StylePatch};

#[test]
fn default_palette_matches_dark_theme() {
    let styles = ChartStyles::default();
    assert_eq!(styles.chart_background_color, "#202f42");
    assert_eq!(styles.grid_color, "#29394d");
    assert_eq!(styles.labels_color, "#bdc0c3");
    assert_eq!(styles.current_label_color, "#ffffff");
    assert_eq!(styles.up_color, "#09c9be");
    assert_eq!(styles.down_color, "#ff534f");
    assert_eq!(styles.axis_color, "#999999");
}

#[test]
fn grid_only_patch_changes_only_grid_color() {
    let mut chart =
        CandlestickChart::new(RecordingSurface::new(), Viewport::new(400, 300)).expect("chart");
    let before = chart.styles().clone();

    chart.set_styles(&StylePatch::default().with_grid_color("#111"));

    let expected = ChartStyles {
        grid_color: "#111".to_owned(),
        ..before
    };
    assert_eq!(chart.styles(), &expected);
}

#[test]
fn successive_patches_accumulate() {
    let mut styles = ChartStyles::default();
    styles.merge(&StylePatch::default().with_up_color("#00ff00"));
    styles.merge(&StylePatch::default().with_down_color("#ff0000"));

    assert_eq!(styles.up_color, "#00ff00");
    assert_eq!(styles.down_color, "#ff0000");
    assert_eq!(styles.axis_color, "#999999");
}

#[test]
fn empty_string_is_treated_as_absent() {
    let styles = ChartStyles::default().merged(&StylePatch::default().with_axis_color(""));
    assert_eq!(styles.axis_color, "#999999");
}

#[test]
fn color_values_are_not_validated_on_merge() {
    let styles =
        ChartStyles::default().merged(&StylePatch::default().with_labels_color("not a color"));
    assert_eq!(styles.labels_color, "not a color");
}

#[test]
fn candle_color_follows_direction() {
    let styles = ChartStyles::default();
    assert_eq!(styles.candle_color(CandleDirection::Up), "#09c9be");
    assert_eq!(styles.candle_color(CandleDirection::Down), "#ff534f");
}

#[test]
fn patch_deserializes_with_missing_fields() {
    let patch: StylePatch =
        serde_json::from_str(r##"{ "grid_color": "#222" }"##).expect("partial patch");
    assert_eq!(patch.grid_color.as_deref(), Some("#222"));
    assert!(patch.up_color.is_none());
    assert!(!patch.is_empty());
    assert!(StylePatch::default().is_empty());
}

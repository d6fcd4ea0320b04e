use candle_canvas::api::{
    PriceAxisTick, TimeLabelFormatter, price_axis_ticks, time_axis_ticks,
};
use candle_canvas::core::{Bar, BarSpacing, ScaleMapping, Viewport};
use candle_canvas::render::{PathSegment, RecordingSurface, TextBaseline, TextHAlign};
use candle_canvas::CandlestickChart;
use chrono::{DateTime, Duration, TimeZone, Utc};

fn at(minute: i64) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 5, 6, 9, 0, 0)
        .single()
        .expect("valid date")
        + Duration::minutes(minute)
}

fn five_bar_series() -> Vec<Bar> {
    [0, 15, 30, 45, 60]
        .into_iter()
        .zip([10.0, 11.0, 12.0, 11.5, 12.5])
        .map(|(minute, open)| {
            Bar::new(at(minute), open, open + 1.0, open - 1.0, open + 0.5).expect("valid bar")
        })
        .collect()
}

fn two_bar_scales(viewport: Viewport) -> ScaleMapping {
    let bars = vec![
        Bar::new(at(0), 10.0, 12.0, 9.0, 11.0).expect("bar"),
        Bar::new(at(30), 11.0, 13.0, 10.0, 9.0).expect("bar"),
    ];
    ScaleMapping::build(&bars, viewport).expect("scales")
}

#[test]
fn price_ticks_label_interior_even_indices() {
    let viewport = Viewport::new(330, 230);
    let ticks = price_axis_ticks(viewport, two_bar_scales(viewport).price);

    assert_eq!(ticks.len(), 10);
    let ys: Vec<f64> = ticks.iter().map(|tick| tick.y).collect();
    assert_eq!(
        ys,
        vec![0.0, 20.0, 40.0, 60.0, 80.0, 100.0, 120.0, 140.0, 160.0, 180.0]
    );

    let labels: Vec<(usize, &str)> = ticks
        .iter()
        .filter_map(|tick| tick.label.as_deref().map(|label| (tick.index, label)))
        .collect();
    assert_eq!(
        labels,
        vec![(2, "13.06"), (4, "11.82"), (6, "10.58"), (8, "9.34")]
    );
}

#[test]
fn price_ticks_alternate_length_and_skip_top_grid_line() {
    let viewport = Viewport::new(330, 230);
    let ticks = price_axis_ticks(viewport, two_bar_scales(viewport).price);

    assert_eq!(
        ticks[0],
        PriceAxisTick {
            index: 0,
            y: 0.0,
            tick_length: 4.0,
            label: None,
            has_grid_line: false,
        }
    );
    assert_eq!(ticks[1].tick_length, 3.0);
    assert!(ticks[1].label.is_none());
    assert!(ticks.iter().skip(1).all(|tick| tick.has_grid_line));
}

#[test]
fn time_ticks_label_even_bars_as_hour_minute() {
    let bars = five_bar_series();
    let viewport = Viewport::new(430, 230);
    let scales = ScaleMapping::build(&bars, viewport).expect("scales");
    let spacing = BarSpacing::new(bars.len(), viewport).expect("spacing");

    let ticks = time_axis_ticks(spacing, scales.time, TimeLabelFormatter::utc()).expect("ticks");

    let labels: Vec<Option<&str>> = ticks.iter().map(|tick| tick.label.as_deref()).collect();
    assert_eq!(
        labels,
        vec![Some("9:00"), None, Some("9:30"), None, Some("10:00")]
    );
    let lengths: Vec<f64> = ticks.iter().map(|tick| tick.tick_length).collect();
    assert_eq!(lengths, vec![4.0, 3.0, 4.0, 3.0, 4.0]);
}

#[test]
fn axis_labels_use_label_color_and_alignment() {
    let mut chart =
        CandlestickChart::new(RecordingSurface::new(), Viewport::new(430, 230)).expect("chart");
    chart.set_data(five_bar_series()).expect("set data");
    chart.draw().expect("draw");

    let texts: Vec<_> = chart.surface().texts().collect();
    let time_labels: Vec<_> = texts
        .iter()
        .filter(|text| text.baseline == TextBaseline::Top)
        .collect();
    assert_eq!(time_labels.len(), 3);
    for label in &time_labels {
        assert_eq!(label.h_align, TextHAlign::Center);
        assert_eq!(label.y, 210.0);
        assert_eq!(label.color, "#bdc0c3");
        assert_eq!(label.font.size_px, 8.0);
    }

    let price_labels: Vec<_> = texts
        .iter()
        .filter(|text| text.baseline == TextBaseline::Middle && text.color == "#bdc0c3")
        .collect();
    assert_eq!(price_labels.len(), 4);
    for label in &price_labels {
        assert_eq!(label.h_align, TextHAlign::Right);
        assert_eq!(label.x, 20.0);
    }
}

#[test]
fn grid_and_axis_lines_use_their_own_colors() {
    let mut chart =
        CandlestickChart::new(RecordingSurface::new(), Viewport::new(430, 230)).expect("chart");
    chart.set_data(five_bar_series()).expect("set data");
    chart.draw().expect("draw");

    let strokes: Vec<_> = chart.surface().strokes().collect();
    let grid_count = strokes
        .iter()
        .filter(|(_, stroke)| stroke.color == "#29394d")
        .count();
    // 5 vertical grid lines + 9 horizontal grid lines.
    assert_eq!(grid_count, 14);

    let axis_count = strokes
        .iter()
        .filter(|(_, stroke)| stroke.color == "#999999")
        .count();
    // 5 x ticks + baseline + 10 y ticks + vertical axis line.
    assert_eq!(axis_count, 17);

    let baseline = strokes
        .iter()
        .find(|(path, stroke)| {
            stroke.color == "#999999"
                && path.segments()
                    == [
                        PathSegment::MoveTo { x: 30.0, y: 200.0 },
                        PathSegment::LineTo { x: 430.0, y: 200.0 },
                    ]
        });
    assert!(baseline.is_some(), "time-axis baseline drawn");
}

use candle_canvas::CandlestickChart;
use candle_canvas::api::{CURRENT_LINE_DASH, current_price_flag};
use candle_canvas::core::{Bar, Viewport};
use candle_canvas::render::{
    DrawCommand, Path, RecordingSurface, StrokeStyle, TextBaseline, TextHAlign,
};
use chrono::{DateTime, TimeZone, Utc};

fn at(hour: u32, minute: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 5, 6, hour, minute, 0)
        .single()
        .expect("valid date")
}

fn drawn_commands(bars: Vec<Bar>) -> (Vec<DrawCommand>, f64) {
    let mut chart =
        CandlestickChart::new(RecordingSurface::new(), Viewport::new(330, 230)).expect("chart");
    chart.set_data(bars).expect("set data");
    let close = chart.bars().last().expect("last bar").close;
    let y = chart.scales().expect("scales").price.price_to_pixel(close);
    chart.surface_mut().take_commands();
    chart.draw().expect("draw");
    (chart.into_surface().take_commands(), y)
}

#[test]
fn indicator_is_drawn_last_and_unclipped() {
    let (commands, y) = drawn_commands(vec![
        Bar::new(at(9, 0), 10.0, 12.0, 9.0, 11.0).expect("bar"),
        Bar::new(at(9, 30), 11.0, 13.0, 10.0, 9.0).expect("bar"),
    ]);

    let restore_at = commands
        .iter()
        .rposition(|command| *command == DrawCommand::Restore)
        .expect("clip lifted");
    let tail = &commands[restore_at + 1..];
    assert_eq!(tail.len(), 3);

    assert_eq!(
        tail[0],
        DrawCommand::StrokePath {
            path: Path::line(30.0, y, 330.0, y),
            stroke: StrokeStyle::solid("#ff534f").with_dash(&CURRENT_LINE_DASH),
        }
    );
    assert_eq!(
        tail[1],
        DrawCommand::FillPath {
            path: Path::polyline(&current_price_flag(30.0, y)),
            color: "#ff534f".to_owned(),
        }
    );
    let DrawCommand::FillText(label) = &tail[2] else {
        panic!("expected current price label, got {:?}", tail[2]);
    };
    assert_eq!(label.text, "9.00");
    assert_eq!(label.color, "#ffffff");
    assert_eq!((label.x, label.y), (20.0, y));
    assert_eq!(label.h_align, TextHAlign::Right);
    assert_eq!(label.baseline, TextBaseline::Middle);
}

#[test]
fn rising_last_bar_uses_up_color() {
    let (commands, _) = drawn_commands(vec![
        Bar::new(at(9, 0), 11.0, 13.0, 10.0, 9.0).expect("bar"),
        Bar::new(at(9, 30), 10.0, 12.5, 9.5, 12.25).expect("bar"),
    ]);

    let Some(DrawCommand::FillText(label)) = commands.last() else {
        panic!("label must be the final command");
    };
    assert_eq!(label.text, "12.25");
    assert!(commands.iter().any(|command| matches!(
        command,
        DrawCommand::StrokePath { stroke, .. } if stroke.is_dashed() && stroke.color == "#09c9be"
    )));
}

#[test]
fn flag_reaches_into_the_axis_gutter() {
    let flag = current_price_flag(30.0, 100.0);
    assert_eq!(
        flag,
        [
            (30.0, 100.0),
            (25.0, 105.0),
            (2.0, 105.0),
            (2.0, 95.0),
            (25.0, 95.0),
            (30.0, 100.0),
        ]
    );
}

#[test]
fn label_rounds_half_cent_close_away_from_zero() {
    let (commands, _) = drawn_commands(vec![
        Bar::new(at(9, 0), 10.0, 12.0, 9.0, 11.0).expect("bar"),
        Bar::new(at(9, 30), 11.0, 13.0, 10.0, 10.125).expect("bar"),
    ]);

    let Some(DrawCommand::FillText(label)) = commands.last() else {
        panic!("label must be the final command");
    };
    assert_eq!(label.text, "10.13");
}

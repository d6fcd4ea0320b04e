#![cfg(feature = "cairo-backend")]

use cairo::{Context, Format, ImageSurface};
use candle_canvas::core::{Bar, Viewport};
use candle_canvas::render::{CairoSurface, CairoSurfaceStats, DrawingSurface};
use candle_canvas::{CandlestickChart, ChartError, StylePatch};
use chrono::{Duration, TimeZone, Utc};

fn series(count: i64) -> Vec<Bar> {
    let base = Utc
        .with_ymd_and_hms(2024, 5, 6, 9, 0, 0)
        .single()
        .expect("valid date");
    (0..count)
        .map(|i| {
            let open = 100.0 + i as f64;
            let close = if i % 2 == 0 { open + 2.0 } else { open - 2.0 };
            Bar::new(
                base + Duration::minutes(5 * i),
                open,
                open.max(close) + 1.0,
                open.min(close) - 1.0,
                close,
            )
            .expect("valid bar")
        })
        .collect()
}

#[test]
fn offscreen_surface_is_sized_in_device_pixels() {
    let viewport = Viewport::new(320, 200).with_device_pixel_ratio(2.0);
    let surface = CairoSurface::offscreen(viewport).expect("surface");
    let image = surface.image().expect("offscreen image");
    assert_eq!((image.width(), image.height()), (640, 400));
}

#[test]
fn cairo_surface_renders_full_chart() {
    let surface = CairoSurface::offscreen(Viewport::new(600, 320)).expect("surface");
    let mut chart = CandlestickChart::new(surface, Viewport::new(600, 320)).expect("chart");
    chart.set_data(series(12)).expect("set data");
    chart.draw().expect("draw");

    let stats = chart.surface().stats();
    // x: 12 ticks + 12 grid + baseline; y: 20; candles: 12; dashed line: 1.
    assert_eq!(stats.strokes, 25 + 20 + 12 + 1);
    // background + 12 candles + flag.
    assert_eq!(stats.fills, 14);
    // 6 time labels + 4 price labels + current price.
    assert_eq!(stats.texts, 11);
}

#[test]
fn unparseable_color_fails_at_draw_time() {
    let surface = CairoSurface::offscreen(Viewport::new(300, 200)).expect("surface");
    let mut chart = CandlestickChart::new(surface, Viewport::new(300, 200)).expect("chart");
    chart.set_styles(&StylePatch::default().with_chart_background_color("chartreuse-ish"));
    chart.set_data(series(3)).expect("set data");

    let err = chart.draw().expect_err("bad background color");
    assert!(matches!(err, ChartError::InvalidColor(_)));
    assert_eq!(chart.surface().stats(), CairoSurfaceStats::default());
}

#[test]
fn color_check_matches_parser() {
    let surface = CairoSurface::offscreen(Viewport::new(100, 100)).expect("surface");
    assert!(surface.check_color("#202f42").is_ok());
    assert!(surface.check_color("rgba(0, 0, 0, 0.5)").is_ok());
    assert!(matches!(
        surface.check_color("chartreuse-ish"),
        Err(ChartError::InvalidColor(_))
    ));
}

#[test]
fn cairo_surface_can_draw_on_external_context() {
    let image = ImageSurface::create(Format::ARgb32, 400, 240).expect("image");
    let context = Context::new(&image).expect("context");
    let mut chart =
        CandlestickChart::new(CairoSurface::from_context(context), Viewport::new(400, 240))
            .expect("chart");
    chart.set_data(series(4)).expect("set data");
    chart.draw().expect("draw on context");

    let surface = chart.into_surface();
    assert!(surface.image().is_none());
    assert!(surface.stats().strokes > 0);
    assert!(surface.write_png(std::env::temp_dir().join("unused.png")).is_err());
}

use approx::assert_relative_eq;
use candle_canvas::ChartError;
use candle_canvas::core::{Bar, PricePadding, PriceScale, ScaleMapping, Viewport};
use chrono::{DateTime, TimeZone, Utc};

fn at(hour: u32, minute: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 5, 6, hour, minute, 0)
        .single()
        .expect("valid date")
}

fn bar(date: DateTime<Utc>, open: f64, high: f64, low: f64, close: f64) -> Bar {
    Bar::new(date, open, high, low, close).expect("valid bar")
}

fn two_bar_series() -> Vec<Bar> {
    vec![
        bar(at(9, 0), 10.0, 12.0, 9.0, 11.0),
        bar(at(9, 30), 11.0, 13.0, 10.0, 9.0),
    ]
}

#[test]
fn price_domain_is_padded_asymmetrically() {
    let scales = ScaleMapping::build(&two_bar_series(), Viewport::new(330, 230)).expect("scales");

    assert_eq!(scales.raw_price_extent.min, 9.0);
    assert_eq!(scales.raw_price_extent.max, 13.0);

    let (min, max) = scales.price.domain();
    assert_relative_eq!(min, 8.1, epsilon = 1e-9);
    assert_relative_eq!(max, 14.3, epsilon = 1e-9);
}

#[test]
fn price_range_is_inverted_over_plot_height() {
    let scales = ScaleMapping::build(&two_bar_series(), Viewport::new(330, 230)).expect("scales");

    assert_eq!(scales.price.range(), (200.0, 0.0));
    let (min, max) = scales.price.domain();
    assert_relative_eq!(scales.price.price_to_pixel(min), 200.0, epsilon = 1e-9);
    assert_relative_eq!(scales.price.price_to_pixel(max), 0.0, epsilon = 1e-9);
    assert!(scales.price.price_to_pixel(12.0) < scales.price.price_to_pixel(10.0));
}

#[test]
fn time_domain_spans_literal_date_extrema() {
    let bars = vec![
        bar(at(9, 45), 10.0, 11.0, 9.0, 10.5),
        bar(at(9, 0), 10.0, 11.0, 9.0, 10.5),
        bar(at(10, 0), 10.0, 11.0, 9.0, 10.5),
        bar(at(9, 15), 10.0, 11.0, 9.0, 10.5),
    ];
    let scales = ScaleMapping::build(&bars, Viewport::new(430, 230)).expect("scales");

    assert_eq!(scales.time.domain(), (at(9, 0), at(10, 0)));
    assert_eq!(scales.time.range(), (30.0, 430.0));
    assert_relative_eq!(scales.time.time_to_pixel(at(9, 30)), 230.0, epsilon = 1e-9);
}

#[test]
fn empty_series_fails_fast() {
    let err = ScaleMapping::build(&[], Viewport::new(330, 230)).expect_err("empty series");
    assert!(matches!(err, ChartError::EmptyData));
}

#[test]
fn flat_nonzero_series_still_gets_a_range() {
    let bars = vec![
        bar(at(9, 0), 5.0, 5.0, 5.0, 5.0),
        bar(at(9, 5), 5.0, 5.0, 5.0, 5.0),
    ];
    let scales = ScaleMapping::build(&bars, Viewport::new(330, 230)).expect("scales");
    let (min, max) = scales.price.domain();
    assert_relative_eq!(min, 4.5, epsilon = 1e-9);
    assert_relative_eq!(max, 5.5, epsilon = 1e-9);
}

#[test]
fn all_zero_series_is_degenerate() {
    let bars = vec![
        bar(at(9, 0), 0.0, 0.0, 0.0, 0.0),
        bar(at(9, 5), 0.0, 0.0, 0.0, 0.0),
    ];
    let err = ScaleMapping::build(&bars, Viewport::new(330, 230)).expect_err("zero-width domain");
    assert!(matches!(err, ChartError::DegenerateRange(_)));
}

#[test]
fn custom_padding_factors_are_applied() {
    let padding = PricePadding {
        lower_factor: 1.0,
        upper_factor: 1.0,
    };
    let scales =
        ScaleMapping::build_with_padding(&two_bar_series(), Viewport::new(330, 230), padding)
            .expect("scales");
    assert_eq!(scales.price.domain(), (9.0, 13.0));
}

#[test]
fn price_scale_round_trip_within_tolerance() {
    let scale = PriceScale::new(8.1, 14.3, Viewport::new(330, 230)).expect("scale");

    let px = scale.price_to_pixel(11.37);
    assert_relative_eq!(scale.pixel_to_price(px), 11.37, epsilon = 1e-9);
    assert_relative_eq!(scale.price_to_pixel(scale.pixel_to_price(123.0)), 123.0, epsilon = 1e-9);
}

#[test]
fn invalid_viewport_is_rejected() {
    let err = ScaleMapping::build(&two_bar_series(), Viewport::new(0, 230))
        .expect_err("zero width viewport");
    assert!(matches!(err, ChartError::InvalidViewport { .. }));
}

use crate::error::{ChartError, ChartResult};

/// RGBA color in normalized 0..=1 channel values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
    pub alpha: f64,
}

impl Color {
    #[must_use]
    pub const fn rgba(red: f64, green: f64, blue: f64, alpha: f64) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    #[must_use]
    pub const fn rgb(red: f64, green: f64, blue: f64) -> Self {
        Self::rgba(red, green, blue, 1.0)
    }

    pub const TRANSPARENT: Self = Self::rgba(0.0, 0.0, 0.0, 0.0);
}

/// Parses the CSS color forms chart palettes use in practice.
///
/// Accepted: `#rgb`, `#rgba`, `#rrggbb`, `#rrggbbaa`, `rgb(r, g, b)`,
/// `rgba(r, g, b, a)` (channels 0..=255, alpha 0..=1), `transparent`, and a
/// handful of basic keywords.
pub fn parse_css_color(input: &str) -> ChartResult<Color> {
    let trimmed = input.trim();
    let lowered = trimmed.to_ascii_lowercase();

    if let Some(hex) = lowered.strip_prefix('#') {
        return parse_hex(hex).ok_or_else(|| invalid(input));
    }
    if let Some(args) = lowered
        .strip_prefix("rgba(")
        .or_else(|| lowered.strip_prefix("rgb("))
        .and_then(|rest| rest.strip_suffix(')'))
    {
        return parse_functional(args).ok_or_else(|| invalid(input));
    }

    match lowered.as_str() {
        "transparent" => Ok(Color::TRANSPARENT),
        "black" => Ok(Color::rgb(0.0, 0.0, 0.0)),
        "white" => Ok(Color::rgb(1.0, 1.0, 1.0)),
        "red" => Ok(Color::rgb(1.0, 0.0, 0.0)),
        "green" => Ok(Color::rgb(0.0, 128.0 / 255.0, 0.0)),
        "blue" => Ok(Color::rgb(0.0, 0.0, 1.0)),
        _ => Err(invalid(input)),
    }
}

fn parse_hex(hex: &str) -> Option<Color> {
    if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    let nibble = |index: usize| u8::from_str_radix(&hex[index..=index], 16).ok();
    let byte = |index: usize| u8::from_str_radix(&hex[index..index + 2], 16).ok();
    let unit = |value: u8| f64::from(value) / 255.0;

    match hex.len() {
        3 | 4 => {
            let mut channels = [1.0; 4];
            for (index, channel) in channels.iter_mut().enumerate().take(hex.len()) {
                let value = nibble(index)?;
                *channel = unit(value * 17);
            }
            Some(Color::rgba(channels[0], channels[1], channels[2], channels[3]))
        }
        6 | 8 => {
            let mut channels = [1.0; 4];
            for (index, channel) in channels.iter_mut().enumerate().take(hex.len() / 2) {
                *channel = unit(byte(index * 2)?);
            }
            Some(Color::rgba(channels[0], channels[1], channels[2], channels[3]))
        }
        _ => None,
    }
}

fn parse_functional(args: &str) -> Option<Color> {
    let parts: Vec<f64> = args
        .split(',')
        .map(|part| part.trim().parse::<f64>().ok())
        .collect::<Option<_>>()?;
    let channel = |value: f64| (0.0..=255.0).contains(&value).then_some(value / 255.0);

    match parts.as_slice() {
        [r, g, b] => Some(Color::rgb(channel(*r)?, channel(*g)?, channel(*b)?)),
        [r, g, b, a] if (0.0..=1.0).contains(a) => {
            Some(Color::rgba(channel(*r)?, channel(*g)?, channel(*b)?, *a))
        }
        _ => None,
    }
}

fn invalid(input: &str) -> ChartError {
    ChartError::InvalidColor(format!("unsupported css color `{input}`"))
}

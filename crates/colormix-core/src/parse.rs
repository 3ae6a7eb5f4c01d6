// ABOUTME: Color string parsing for hex and decimal channel notations.
// ABOUTME: Holds the two precompiled grammar patterns.

use std::sync::LazyLock;

use regex::Regex;

use crate::color::Color;

static HEX_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new("^([0-9a-f]{3}|[0-9a-f]{6}|[0-9a-f]{8})$").expect("Invalid hex color pattern")
});

static DECIMAL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new("^([0-9]{1,3},){3}([0-9]{1,3})$").expect("Invalid decimal color pattern")
});

/// Reasons a color string fails to parse.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseColorError {
    #[error("unrecognized color format: {0:?}")]
    UnrecognizedFormat(String),

    #[error("channel value out of range: {0}")]
    ChannelOutOfRange(u32),
}

/// Parse a color from lowercase hex (3, 6, or 8 digits) or decimal
/// "r,g,b,a" notation. The grammars are tried in that order.
pub fn parse_color(text: &str) -> Result<Color, ParseColorError> {
    if HEX_PATTERN.is_match(text) {
        return parse_hex(text);
    }

    if DECIMAL_PATTERN.is_match(text) {
        return parse_decimal(text);
    }

    Err(ParseColorError::UnrecognizedFormat(text.to_string()))
}

fn parse_hex(text: &str) -> Result<Color, ParseColorError> {
    let bits = u32::from_str_radix(text, 16)
        .map_err(|_| ParseColorError::UnrecognizedFormat(text.to_string()))?;

    // The digit count decides the expansion into the packed layout.
    let color = match text.len() {
        // 12-bit RGB, each nibble scaled by 16
        3 => Color::rgb(
            (((bits >> 8) & 0xf) * 16) as u8,
            (((bits >> 4) & 0xf) * 16) as u8,
            ((bits & 0xf) * 16) as u8,
        ),
        // 24-bit RGB, synthesize a full alpha byte
        6 => Color::from_bits(bits << 8 | 0xff),
        // 32-bit RGBA, already in the packed layout
        _ => Color::from_bits(bits),
    };

    Ok(color)
}

fn parse_decimal(text: &str) -> Result<Color, ParseColorError> {
    // The pattern guarantees exactly four all-digit groups.
    let mut channels = [0u8; 4];
    for (slot, group) in channels.iter_mut().zip(text.split(',')) {
        let value: u32 = group
            .parse()
            .map_err(|_| ParseColorError::UnrecognizedFormat(text.to_string()))?;

        if value > 255 {
            return Err(ParseColorError::ChannelOutOfRange(value));
        }

        *slot = value as u8;
    }

    let [red, green, blue, alpha] = channels;
    Ok(Color::rgba(red, green, blue, alpha))
}

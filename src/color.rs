use egui::Color32;
use rand::Rng;
use thiserror::Error;

/// Color the pen starts with.
pub const DEFAULT_COLOR: Color32 = Color32::BLACK;

/// Errors from parsing a `#rrggbb` color string.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseColorError {
    #[error("expected a 7-character color like #rrggbb, got {0:?}")]
    Length(String),
    #[error("invalid hex digits in {0:?}")]
    Digits(String),
}

/// Parses a `#rrggbb` string into an opaque color.
pub fn parse_hex(text: &str) -> Result<Color32, ParseColorError> {
    let digits = text
        .strip_prefix('#')
        .ok_or_else(|| ParseColorError::Length(text.to_owned()))?;
    if digits.len() != 6 {
        return Err(ParseColorError::Length(text.to_owned()));
    }
    let channel = |range: std::ops::Range<usize>| {
        u8::from_str_radix(&digits[range], 16).map_err(|_| ParseColorError::Digits(text.to_owned()))
    };
    Ok(Color32::from_rgb(
        channel(0..2)?,
        channel(2..4)?,
        channel(4..6)?,
    ))
}

/// Formats an opaque color as lowercase `#rrggbb`.
pub fn format_hex(color: Color32) -> String {
    format!("#{:02x}{:02x}{:02x}", color.r(), color.g(), color.b())
}

/// A uniformly random opaque 24-bit RGB color.
///
/// Random-color mode rolls one of these per cell event, not per drag
/// gesture, so a single stroke speckles rather than taking one color.
pub fn random_color() -> Color32 {
    let mut rng = rand::thread_rng();
    Color32::from_rgb(
        rng.gen_range(0..=u8::MAX),
        rng.gen_range(0..=u8::MAX),
        rng.gen_range(0..=u8::MAX),
    )
}

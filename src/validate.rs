//! Fail-safe validation of the free-text input fields.
//!
//! The host form runs a validator before requesting a conversion and shows
//! its own message when one returns `false`. Each predicate is total: any
//! malformed input, of any shape, is reported as `false` and nothing here
//! panics. The strict parsers underneath return the rejection reason for
//! hosts that want one; each validator is exactly "the strict parser
//! succeeded".

#[cfg(test)]
#[path = "validate_test.rs"]
mod validate_test;

use crate::color::{MqColor, Rgb};
use crate::error::CodecError;

/// True iff `input` is hex color text: optional leading `#`, then exactly 6
/// or exactly 3 hex digits, with surrounding whitespace ignored.
#[must_use]
pub fn is_valid_hex(input: &str) -> bool {
    Rgb::from_hex(input).is_ok()
}

/// True iff `input` is `int,int,int` with optional whitespace around the
/// numbers and commas and each value in `[0, 255]`.
#[must_use]
pub fn is_valid_decimal_rgb(input: &str) -> bool {
    parse_decimal_rgb(input).is_ok()
}

/// True iff `input` trims to 1–5 decimal digits, with no sign and no
/// decimal point.
///
/// Leading zeros are allowed. The five-digit cap keeps every accepted value
/// at or below 99999, well inside the 24-bit packed range, so no separate
/// magnitude check exists.
#[must_use]
pub fn is_valid_mq_number(input: &str) -> bool {
    parse_mq_number(input).is_ok()
}

/// Parse decimal RGB text (`"16,39,0"`) into a triple.
///
/// # Errors
///
/// Returns [`CodecError::MalformedRgb`] when the shape is not three
/// comma-separated integers and [`CodecError::ChannelOutOfRange`] when a
/// channel value exceeds 255.
pub fn parse_decimal_rgb(input: &str) -> Result<Rgb, CodecError> {
    let mut channels = [0u8; 3];
    let mut parts = input.split(',');

    for slot in &mut channels {
        let part = parts
            .next()
            .ok_or_else(|| CodecError::MalformedRgb(input.to_owned()))?;
        *slot = parse_channel(part.trim())?;
    }
    if parts.next().is_some() {
        return Err(CodecError::MalformedRgb(input.to_owned()));
    }

    Ok(Rgb::new(channels[0], channels[1], channels[2]))
}

/// Parse MQ number text into a color value.
///
/// # Errors
///
/// Returns [`CodecError::InvalidMqNumber`] unless the trimmed input is 1–5
/// decimal digits.
pub fn parse_mq_number(input: &str) -> Result<MqColor, CodecError> {
    let digits = input.trim();
    if digits.is_empty() || digits.len() > 5 || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(CodecError::InvalidMqNumber(input.to_owned()));
    }

    let value = digits
        .bytes()
        .fold(0u32, |acc, b| acc * 10 + u32::from(b - b'0'));
    Ok(MqColor::from(value))
}

/// Parse one trimmed channel: decimal digits only, value at most 255.
///
/// Leading zeros do not count against the magnitude, so `"000000255"` is
/// still an in-range channel.
fn parse_channel(text: &str) -> Result<u8, CodecError> {
    if text.is_empty() || !text.bytes().all(|b| b.is_ascii_digit()) {
        return Err(CodecError::MalformedRgb(text.to_owned()));
    }

    let digits = text.trim_start_matches('0');
    if digits.len() > 3 {
        return Err(CodecError::ChannelOutOfRange(text.to_owned()));
    }
    let value = digits
        .bytes()
        .fold(0u32, |acc, b| acc * 10 + u32::from(b - b'0'));
    u8::try_from(value).map_err(|_| CodecError::ChannelOutOfRange(text.to_owned()))
}

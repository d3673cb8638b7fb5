//! Color representations and the conversions between them.
//!
//! The same 24-bit value wears four hats: an RGB triple, a packed integer
//! (what the platform stores in the group color field), an uppercase
//! `#RRGGBB` string, and a 5-digit decimal configuration code. [`Rgb`] and
//! [`MqColor`] carry the first two and convert to and from the textual forms;
//! digit/label decoding lives in [`crate::code`].

#[cfg(test)]
#[path = "color_test.rs"]
mod color_test;

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::CodecError;

/// An RGB triple with one byte per channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Rgb {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
}

impl Rgb {
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Build a triple from untyped integers, clamping each channel
    /// independently to `[0, 255]`.
    ///
    /// This is the construction path for host-supplied numbers that have not
    /// gone through [`crate::validate`]; `saturating(-5, 300, 10)` yields the
    /// same triple as `new(0, 255, 10)`.
    #[must_use]
    pub fn saturating(r: i64, g: i64, b: i64) -> Self {
        let clamp = |channel: i64| match u8::try_from(channel) {
            Ok(byte) => byte,
            Err(_) if channel < 0 => u8::MIN,
            Err(_) => u8::MAX,
        };
        Self { r: clamp(r), g: clamp(g), b: clamp(b) }
    }

    /// Format as an uppercase `#RRGGBB` hex string.
    #[must_use]
    pub fn hex(self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }

    /// Parse hex color text.
    ///
    /// Accepts an optional leading `#` and either 6 hex digits or the
    /// 3-digit shorthand, which expands by doubling each digit
    /// (`abc` becomes `aabbcc`). Case-insensitive; surrounding whitespace is
    /// ignored.
    ///
    /// # Errors
    ///
    /// Returns [`CodecError::InvalidHexLength`] for any other length and
    /// [`CodecError::InvalidHexDigit`] for a non-hex character.
    pub fn from_hex(input: &str) -> Result<Self, CodecError> {
        let trimmed = input.trim();
        let clean = trimmed.strip_prefix('#').unwrap_or(trimmed);
        let bytes = clean.as_bytes();

        match bytes.len() {
            3 => {
                let r = nibble(bytes[0])?;
                let g = nibble(bytes[1])?;
                let b = nibble(bytes[2])?;
                // Doubling a hex digit d gives the byte d*16 + d.
                Ok(Self { r: r * 17, g: g * 17, b: b * 17 })
            }
            6 => Ok(Self {
                r: byte(bytes[0], bytes[1])?,
                g: byte(bytes[2], bytes[3])?,
                b: byte(bytes[4], bytes[5])?,
            }),
            n => Err(CodecError::InvalidHexLength(n)),
        }
    }

    /// Perceived brightness on the 0–255 scale, weighting the channels
    /// 299/587/114 per thousand.
    #[must_use]
    pub fn brightness(self) -> u8 {
        u8::try_from(self.weighted_brightness() / 1000).unwrap_or(u8::MAX)
    }

    /// Overlay text color that stays readable on a swatch of this color:
    /// black on bright backgrounds (brightness above 128), white otherwise.
    ///
    /// The comparison keeps the thousandths of the weighted sum, so a color
    /// just over the threshold takes black text even though [`Self::brightness`]
    /// rounds it down to 128.
    #[must_use]
    pub fn contrast_text(self) -> &'static str {
        if self.weighted_brightness() > 128_000 { "#000" } else { "#FFF" }
    }

    fn weighted_brightness(self) -> u32 {
        u32::from(self.r) * 299 + u32::from(self.g) * 587 + u32::from(self.b) * 114
    }
}

/// Renders as `"r,g,b"`, the host UI's decimal field format.
impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{},{}", self.r, self.g, self.b)
    }
}

fn nibble(c: u8) -> Result<u8, CodecError> {
    match c {
        b'0'..=b'9' => Ok(c - b'0'),
        b'a'..=b'f' => Ok(c - b'a' + 10),
        b'A'..=b'F' => Ok(c - b'A' + 10),
        _ => Err(CodecError::InvalidHexDigit(char::from(c))),
    }
}

fn byte(hi: u8, lo: u8) -> Result<u8, CodecError> {
    Ok(nibble(hi)? << 4 | nibble(lo)?)
}

/// A packed color value as stored in the platform's group color field.
///
/// The wrapped number's base-256 digits are the RGB channels
/// (`r + g*256 + b*65536`) and its decimal digits are the configuration code
/// positions. The canonical range is the 24 bits reachable from an RGB
/// triple; larger values are representable and keep only their low 24 bits
/// when converted back to channels, matching how the platform treats
/// oversized color numbers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MqColor(u32);

impl MqColor {
    /// Pack a triple: `r + g*256 + b*65536`.
    #[must_use]
    pub const fn from_rgb(rgb: Rgb) -> Self {
        Self(u32::from_le_bytes([rgb.r, rgb.g, rgb.b, 0]))
    }

    /// Unpack the low 24 bits into channels. Higher-order bits are dropped.
    #[must_use]
    pub const fn rgb(self) -> Rgb {
        let [r, g, b, _] = self.0.to_le_bytes();
        Rgb { r, g, b }
    }

    /// The numeric color value.
    #[must_use]
    pub const fn value(self) -> u32 {
        self.0
    }

    /// Format as an uppercase `#RRGGBB` hex string.
    #[must_use]
    pub fn hex(self) -> String {
        self.rgb().hex()
    }

    /// Parse hex color text into a packed value, via the RGB intermediate.
    ///
    /// # Errors
    ///
    /// Same conditions as [`Rgb::from_hex`].
    pub fn from_hex(input: &str) -> Result<Self, CodecError> {
        Ok(Self::from_rgb(Rgb::from_hex(input)?))
    }

    /// The five configuration-code digit positions, leftmost first.
    ///
    /// The decimal value is left-padded with zeros to five digits. A value
    /// with more than five decimal digits contributes its leading five;
    /// positions past the fifth carry no category meaning.
    #[must_use]
    pub fn digits(self) -> [u8; 5] {
        let text = format!("{:05}", self.0);
        let mut out = [0u8; 5];
        for (slot, digit) in out.iter_mut().zip(text.bytes()) {
            *slot = digit - b'0';
        }
        out
    }
}

impl From<u32> for MqColor {
    fn from(value: u32) -> Self {
        Self(value)
    }
}

impl From<MqColor> for u32 {
    fn from(color: MqColor) -> Self {
        color.0
    }
}

/// Renders as the plain decimal color number.
impl fmt::Display for MqColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

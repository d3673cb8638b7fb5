//! Error type shared by the strict parsing paths.

/// Error returned by the strict textual parsers.
///
/// The boolean validators in [`crate::validate`] report every one of these
/// conditions as a plain `false`; this type exists for hosts that want the
/// rejection reason. Conversions between in-range representations are
/// infallible and never produce it.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CodecError {
    /// Hex input is not exactly 3 or 6 digits after trimming and stripping `#`.
    #[error("invalid hex color length: {0} digits (expected 3 or 6)")]
    InvalidHexLength(usize),
    /// Hex input contains a character outside `[0-9a-fA-F]`.
    #[error("invalid hex digit: {0:?}")]
    InvalidHexDigit(char),
    /// Decimal RGB input is not three comma-separated integers.
    #[error("malformed decimal RGB triple: {0:?}")]
    MalformedRgb(String),
    /// A decimal RGB channel parsed outside `[0, 255]`.
    #[error("RGB channel out of range: {0:?}")]
    ChannelOutOfRange(String),
    /// MQ number input is not 1 to 5 decimal digits after trimming.
    #[error("invalid MQ number: {0:?} (expected 1-5 decimal digits)")]
    InvalidMqNumber(String),
}

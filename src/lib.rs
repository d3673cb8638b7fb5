//! Codec for trading-account configuration codes stored in group colors.
//!
//! The trading platform keeps per-group account configuration in the group's
//! 24-bit color field. Read as a decimal number, the color doubles as a
//! 5-digit code whose positions index fixed category tables: account type,
//! liquidity provider, A-Book share (or exception policy), swap cancellation,
//! and market-depth delay. This crate converts between the four
//! representations of that value (category selection, packed integer, hex
//! string, RGB triple), validates the free-text forms, and decodes arbitrary
//! colors back to human-readable labels.
//!
//! Every function is pure and synchronous. The host UI owns all input
//! collection and rendering; it hands this crate plain values and gets plain
//! values back. Decoding never fails: group colors are written by tooling
//! outside this crate's control, so any value, however nonsensical, decodes
//! to something displayable.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`color`] | [`color::Rgb`] triple, packed [`color::MqColor`], hex parse/format |
//! | [`config`] | Static category tables and the [`config::Section`] metadata |
//! | [`code`] | Digit assembly ([`code::Selection`]) and label decoding ([`code::Decoded`]) |
//! | [`validate`] | Fail-safe textual validators and strict parse helpers |
//! | [`error`] | [`error::CodecError`] for the strict parsing paths |

pub mod code;
pub mod color;
pub mod config;
pub mod error;
pub mod validate;

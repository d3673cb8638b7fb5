//! Digit assembly for category selections and permissive label decoding.
//!
//! Encoding turns a selection into five digits and reads them as a decimal
//! number, the [`MqColor`] value.
//! Decoding walks the other way and is total: any color value yields five
//! positions, each resolved through its table or surfaced as the `"Unknown"`
//! sentinel. Group colors are written by tooling outside this crate's
//! control, so even nonsensical values must decode to something displayable.

#[cfg(test)]
#[path = "code_test.rs"]
mod code_test;

use serde::{Deserialize, Serialize};

use crate::color::MqColor;
use crate::config::{
    ABookPercent, AccountType, Exception, Lp, MarketDepth, Section, SwapCancellation,
};

/// Which table supplies digit position 2.
///
/// The two layouts are mutually exclusive. Selecting a liquidity provider
/// records an A-Book share; selecting no provider forces the LP digit to
/// zero and records an exception policy in the freed position instead.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Routing {
    /// Orders route through `lp`, with `percent` of flow sent to the A-Book.
    ///
    /// Passing [`Lp::No`] here encodes the same digits as an exceptions
    /// layout would; callers building this arm are expected to hold a real
    /// provider selection.
    Book {
        /// Liquidity provider (digit position 1).
        lp: Lp,
        /// A-Book share (digit position 2).
        percent: ABookPercent,
    },
    /// No liquidity provider; an exception policy applies instead.
    Exceptions(Exception),
}

/// A full set of category selections, as collected by the host form.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selection {
    /// Account classification (digit position 0).
    pub account_type: AccountType,
    /// LP-or-exceptions branch covering digit positions 1 and 2.
    pub routing: Routing,
    /// Swap cancellation policy (digit position 3).
    pub swap: SwapCancellation,
    /// Market-depth delay class (digit position 4).
    pub market_depth: MarketDepth,
}

impl Selection {
    /// The five code digits this selection encodes, leftmost first.
    #[must_use]
    pub fn digits(&self) -> [u8; 5] {
        let (lp, third) = match self.routing {
            Routing::Book { lp, percent } => (lp.digit(), percent.digit()),
            Routing::Exceptions(exception) => (Lp::No.digit(), exception.digit()),
        };
        [
            self.account_type.digit(),
            lp,
            third,
            self.swap.digit(),
            self.market_depth.digit(),
        ]
    }

    /// Pack the digits into a color value by reading them as a decimal
    /// number, so the selection behind code `12317` is stored as color
    /// `12317`.
    #[must_use]
    pub fn color(&self) -> MqColor {
        let value = self
            .digits()
            .iter()
            .fold(0u32, |acc, &digit| acc * 10 + u32::from(digit));
        MqColor::from(value)
    }
}

/// One decoded digit position.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Field {
    /// Table consulted for this position.
    pub section: Section,
    /// Digit found at this position.
    pub digit: u8,
    /// Matching table label, or `None` for a digit with no entry.
    pub label: Option<&'static str>,
}

impl Field {
    /// The label, substituting the `"Unknown"` sentinel for unmapped digits.
    #[must_use]
    pub const fn label_or_unknown(&self) -> &'static str {
        match self.label {
            Some(label) => label,
            None => "Unknown",
        }
    }
}

/// A color value decoded back into category labels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Decoded {
    /// The five digit positions, leftmost first.
    pub digits: [u8; 5],
    /// Per-position table lookups, in [`Section::DECODE_ORDER`].
    pub fields: [Field; 5],
}

impl Decoded {
    /// Decode a color's digit positions through the category tables.
    ///
    /// Never fails: digits without a table entry decode to an unlabeled
    /// [`Field`] rather than an error.
    #[must_use]
    pub fn from_color(color: MqColor) -> Self {
        let digits = color.digits();
        let fields = std::array::from_fn(|position| {
            let section = Section::DECODE_ORDER[position];
            let digit = digits[position];
            Field {
                section,
                digit,
                label: section.label_for(digit),
            }
        });
        Self { digits, fields }
    }

    /// The five labels with unmapped digits rendered as `"Unknown"`.
    #[must_use]
    pub fn labels(&self) -> [&'static str; 5] {
        self.fields.map(|field| field.label_or_unknown())
    }
}

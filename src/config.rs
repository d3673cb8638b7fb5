//! Static category tables for the configuration code.
//!
//! Each digit position of the code indexes one of six fixed tables. A table
//! is a fieldless enum whose `#[repr(u8)]` discriminant is the digit written
//! into the code, with the same entries in the same order as the platform
//! team's reference sheet. The tables are compile-time constants with no
//! mutation API and are shared freely across threads.

use serde::{Deserialize, Serialize};

/// Account classification (digit position 0).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[repr(u8)]
pub enum AccountType {
    Normal = 1,
    Islamic = 2,
}

impl AccountType {
    /// Entries in table order.
    pub const ALL: [Self; 2] = [Self::Normal, Self::Islamic];

    /// Digit written into the code for this entry.
    #[must_use]
    pub const fn digit(self) -> u8 {
        self as u8
    }

    /// Entry for a code digit, if one is defined.
    #[must_use]
    pub const fn from_digit(digit: u8) -> Option<Self> {
        match digit {
            1 => Some(Self::Normal),
            2 => Some(Self::Islamic),
            _ => None,
        }
    }

    /// Human label shown by the host UI.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Normal => "Normal",
            Self::Islamic => "Islamic",
        }
    }
}

/// Liquidity provider (digit position 1).
///
/// `No` doubles as the branch switch: a code whose LP digit is zero carries
/// an exception policy in position 2 instead of an A-Book share (see
/// [`crate::code::Routing`]).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[repr(u8)]
pub enum Lp {
    No = 0,
    Is = 1,
    Lmax = 2,
    Cfh = 3,
    B2b = 4,
    Invast = 5,
    StpHard = 8,
    StpSoft = 9,
}

impl Lp {
    /// Entries in table order. Digits 6 and 7 are unassigned.
    pub const ALL: [Self; 8] = [
        Self::No,
        Self::Is,
        Self::Lmax,
        Self::Cfh,
        Self::B2b,
        Self::Invast,
        Self::StpHard,
        Self::StpSoft,
    ];

    /// Digit written into the code for this entry.
    #[must_use]
    pub const fn digit(self) -> u8 {
        self as u8
    }

    /// Entry for a code digit, if one is defined.
    #[must_use]
    pub const fn from_digit(digit: u8) -> Option<Self> {
        match digit {
            0 => Some(Self::No),
            1 => Some(Self::Is),
            2 => Some(Self::Lmax),
            3 => Some(Self::Cfh),
            4 => Some(Self::B2b),
            5 => Some(Self::Invast),
            8 => Some(Self::StpHard),
            9 => Some(Self::StpSoft),
            _ => None,
        }
    }

    /// Human label shown by the host UI.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::No => "No",
            Self::Is => "IS",
            Self::Lmax => "LMAX",
            Self::Cfh => "CFH",
            Self::B2b => "B2B",
            Self::Invast => "INVAST",
            Self::StpHard => "STP Hard",
            Self::StpSoft => "STP Soft",
        }
    }
}

/// Share of orders routed to the A-Book (digit position 2, LP branch).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[repr(u8)]
pub enum ABookPercent {
    No = 0,
    Ten = 1,
    Thirty = 2,
    Fifty = 3,
    Seventy = 4,
    Full = 5,
}

impl ABookPercent {
    /// Entries in table order.
    pub const ALL: [Self; 6] = [
        Self::No,
        Self::Ten,
        Self::Thirty,
        Self::Fifty,
        Self::Seventy,
        Self::Full,
    ];

    /// Digit written into the code for this entry.
    #[must_use]
    pub const fn digit(self) -> u8 {
        self as u8
    }

    /// Entry for a code digit, if one is defined.
    #[must_use]
    pub const fn from_digit(digit: u8) -> Option<Self> {
        match digit {
            0 => Some(Self::No),
            1 => Some(Self::Ten),
            2 => Some(Self::Thirty),
            3 => Some(Self::Fifty),
            4 => Some(Self::Seventy),
            5 => Some(Self::Full),
            _ => None,
        }
    }

    /// Human label shown by the host UI.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::No => "No",
            Self::Ten => "10%",
            Self::Thirty => "30%",
            Self::Fifty => "50%",
            Self::Seventy => "70%",
            Self::Full => "100%",
        }
    }
}

/// Exception policy (digit position 2, no-LP branch).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[repr(u8)]
pub enum Exception {
    NoAction = 0,
    HardDelay = 1,
    SoftDelay = 2,
    CloseOnly = 3,
    LevH = 4,
    LevM = 5,
    LevS = 6,
}

impl Exception {
    /// Entries in table order.
    pub const ALL: [Self; 7] = [
        Self::NoAction,
        Self::HardDelay,
        Self::SoftDelay,
        Self::CloseOnly,
        Self::LevH,
        Self::LevM,
        Self::LevS,
    ];

    /// Digit written into the code for this entry.
    #[must_use]
    pub const fn digit(self) -> u8 {
        self as u8
    }

    /// Entry for a code digit, if one is defined.
    #[must_use]
    pub const fn from_digit(digit: u8) -> Option<Self> {
        match digit {
            0 => Some(Self::NoAction),
            1 => Some(Self::HardDelay),
            2 => Some(Self::SoftDelay),
            3 => Some(Self::CloseOnly),
            4 => Some(Self::LevH),
            5 => Some(Self::LevM),
            6 => Some(Self::LevS),
            _ => None,
        }
    }

    /// Human label shown by the host UI.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::NoAction => "No Action",
            Self::HardDelay => "Hard Delay",
            Self::SoftDelay => "Soft Delay",
            Self::CloseOnly => "Close Only",
            Self::LevH => "Lev-H",
            Self::LevM => "Lev-M",
            Self::LevS => "Lev-S",
        }
    }
}

/// Swap cancellation policy (digit position 3).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[repr(u8)]
pub enum SwapCancellation {
    No = 0,
    Full = 1,
    Limited = 2,
}

impl SwapCancellation {
    /// Entries in table order.
    pub const ALL: [Self; 3] = [Self::No, Self::Full, Self::Limited];

    /// Digit written into the code for this entry.
    #[must_use]
    pub const fn digit(self) -> u8 {
        self as u8
    }

    /// Entry for a code digit, if one is defined.
    #[must_use]
    pub const fn from_digit(digit: u8) -> Option<Self> {
        match digit {
            0 => Some(Self::No),
            1 => Some(Self::Full),
            2 => Some(Self::Limited),
            _ => None,
        }
    }

    /// Human label shown by the host UI.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::No => "No",
            Self::Full => "Swap Cancellation",
            Self::Limited => "Swap Cancellation Limited",
        }
    }
}

/// Market-depth delay class (digit position 4).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[repr(u8)]
pub enum MarketDepth {
    No = 0,
    NewsTraderHard = 1,
    NewsTraderSoft = 2,
    HighRiskHard = 3,
    HighRiskSoft = 4,
    LowRiskHard = 5,
    LowRiskSoft = 6,
    RolloverHard = 7,
    RolloverSoft = 8,
    Exemption = 9,
}

impl MarketDepth {
    /// Entries in table order.
    pub const ALL: [Self; 10] = [
        Self::No,
        Self::NewsTraderHard,
        Self::NewsTraderSoft,
        Self::HighRiskHard,
        Self::HighRiskSoft,
        Self::LowRiskHard,
        Self::LowRiskSoft,
        Self::RolloverHard,
        Self::RolloverSoft,
        Self::Exemption,
    ];

    /// Digit written into the code for this entry.
    #[must_use]
    pub const fn digit(self) -> u8 {
        self as u8
    }

    /// Entry for a code digit, if one is defined.
    #[must_use]
    pub const fn from_digit(digit: u8) -> Option<Self> {
        match digit {
            0 => Some(Self::No),
            1 => Some(Self::NewsTraderHard),
            2 => Some(Self::NewsTraderSoft),
            3 => Some(Self::HighRiskHard),
            4 => Some(Self::HighRiskSoft),
            5 => Some(Self::LowRiskHard),
            6 => Some(Self::LowRiskSoft),
            7 => Some(Self::RolloverHard),
            8 => Some(Self::RolloverSoft),
            9 => Some(Self::Exemption),
            _ => None,
        }
    }

    /// Human label shown by the host UI.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::No => "No",
            Self::NewsTraderHard => "News Trader Hard",
            Self::NewsTraderSoft => "News Trader Soft",
            Self::HighRiskHard => "High Risk Hard",
            Self::HighRiskSoft => "High Risk Soft",
            Self::LowRiskHard => "Low Risk Hard",
            Self::LowRiskSoft => "Low Risk Soft",
            Self::RolloverHard => "Rollover Hard",
            Self::RolloverSoft => "Rollover Soft",
            Self::Exemption => "Market Depth Exemption",
        }
    }
}

/// The six category tables.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Section {
    AccountType,
    Lp,
    ABook,
    Exceptions,
    SwapCancellation,
    MarketDepth,
}

impl Section {
    /// Tables consulted per digit position when decoding, leftmost first.
    ///
    /// Position 2 always reads through the A-Book table, including for
    /// values assembled from the exceptions branch.
    pub const DECODE_ORDER: [Self; 5] = [
        Self::AccountType,
        Self::Lp,
        Self::ABook,
        Self::SwapCancellation,
        Self::MarketDepth,
    ];

    /// Display name of the table.
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::AccountType => "Account Type",
            Self::Lp => "LP",
            Self::ABook => "A-Book %",
            Self::Exceptions => "Exceptions",
            Self::SwapCancellation => "Swap Cancellation",
            Self::MarketDepth => "Market Depth",
        }
    }

    /// Ordered `(label, digit)` entries, in the order the host UI lists them
    /// in its dropdown controls.
    #[must_use]
    pub fn entries(self) -> Vec<(&'static str, u8)> {
        match self {
            Self::AccountType => AccountType::ALL
                .iter()
                .map(|entry| (entry.label(), entry.digit()))
                .collect(),
            Self::Lp => Lp::ALL
                .iter()
                .map(|entry| (entry.label(), entry.digit()))
                .collect(),
            Self::ABook => ABookPercent::ALL
                .iter()
                .map(|entry| (entry.label(), entry.digit()))
                .collect(),
            Self::Exceptions => Exception::ALL
                .iter()
                .map(|entry| (entry.label(), entry.digit()))
                .collect(),
            Self::SwapCancellation => SwapCancellation::ALL
                .iter()
                .map(|entry| (entry.label(), entry.digit()))
                .collect(),
            Self::MarketDepth => MarketDepth::ALL
                .iter()
                .map(|entry| (entry.label(), entry.digit()))
                .collect(),
        }
    }

    /// Reverse lookup: the label whose digit equals `digit`, if any.
    #[must_use]
    pub fn label_for(self, digit: u8) -> Option<&'static str> {
        match self {
            Self::AccountType => AccountType::from_digit(digit).map(AccountType::label),
            Self::Lp => Lp::from_digit(digit).map(Lp::label),
            Self::ABook => ABookPercent::from_digit(digit).map(ABookPercent::label),
            Self::Exceptions => Exception::from_digit(digit).map(Exception::label),
            Self::SwapCancellation => {
                SwapCancellation::from_digit(digit).map(SwapCancellation::label)
            }
            Self::MarketDepth => MarketDepth::from_digit(digit).map(MarketDepth::label),
        }
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;

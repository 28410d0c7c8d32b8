//! Raw preset tokens and how a granularity reads them.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::granularity::{Granularity, Unit};

/// A preset boundary as written by the host: an integer offset or text.
///
/// Text may be a named token (`current`, `week`, ...), an integer-like
/// string (`"-7"`), or an explicit date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PresetToken {
    Offset(i64),
    Text(String),
}

impl PresetToken {
    pub fn current() -> Self {
        PresetToken::Text(NamedToken::Current.as_str().to_string())
    }

    /// How `granularity` interprets this token.
    pub(crate) fn classify(&self, granularity: Granularity) -> TokenKind<'_> {
        match self {
            PresetToken::Offset(n) => TokenKind::Offset(*n),
            PresetToken::Text(text) => {
                if let Some(named) = NamedToken::lookup(granularity, text) {
                    TokenKind::Named(named)
                } else if let Some(n) = integer_like(text) {
                    TokenKind::Offset(n)
                } else {
                    TokenKind::Literal(text)
                }
            }
        }
    }
}

impl From<i64> for PresetToken {
    fn from(n: i64) -> Self {
        PresetToken::Offset(n)
    }
}

impl From<&str> for PresetToken {
    fn from(s: &str) -> Self {
        PresetToken::Text(s.to_string())
    }
}

impl fmt::Display for PresetToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PresetToken::Offset(n) => write!(f, "{n}"),
            PresetToken::Text(s) => f.write_str(s),
        }
    }
}

/// Named period tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NamedToken {
    /// Today itself.
    Current,
    Week,
    Month,
    Year,
}

impl NamedToken {
    const DAY_VOCABULARY: &'static [NamedToken] = &[
        NamedToken::Current,
        NamedToken::Week,
        NamedToken::Month,
        NamedToken::Year,
    ];
    const CURRENT_ONLY: &'static [NamedToken] = &[NamedToken::Current];

    /// Tokens recognised as names at `granularity`.
    pub fn vocabulary(granularity: Granularity) -> &'static [NamedToken] {
        match granularity {
            Granularity::Day => Self::DAY_VOCABULARY,
            Granularity::Month | Granularity::Year => Self::CURRENT_ONLY,
        }
    }

    fn lookup(granularity: Granularity, text: &str) -> Option<NamedToken> {
        Self::vocabulary(granularity)
            .iter()
            .copied()
            .find(|t| t.as_str() == text)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            NamedToken::Current => "current",
            NamedToken::Week => "week",
            NamedToken::Month => "month",
            NamedToken::Year => "year",
        }
    }

    /// Period whose first/last day the token resolves to.
    pub(crate) fn period(self) -> Unit {
        match self {
            NamedToken::Current => Unit::Day,
            NamedToken::Week => Unit::Week,
            NamedToken::Month => Unit::Month,
            NamedToken::Year => Unit::Year,
        }
    }
}

pub(crate) enum TokenKind<'a> {
    Named(NamedToken),
    Offset(i64),
    Literal(&'a str),
}

/// `^-?\d+$`, within `i64`.
fn integer_like(text: &str) -> Option<i64> {
    let digits = text.strip_prefix('-').unwrap_or(text);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    text.parse().ok()
}

// File: crates/wxline-core/src/field.rs
// Summary: Field selector over the three observation readings and its wrapping successor.

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

/// Which reading of an observation is projected and drawn.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Deserialize)]
#[serde(try_from = "String")]
pub enum FieldSelector {
    #[default]
    Temperature,
    Dewpoint,
    Visibility,
}

impl FieldSelector {
    /// All selectors in cycling order.
    pub const ALL: [FieldSelector; 3] = [Self::Temperature, Self::Dewpoint, Self::Visibility];

    /// Successor in cycling order; wraps from the last back to the first.
    pub const fn advance(self) -> Self {
        match self {
            Self::Temperature => Self::Dewpoint,
            Self::Dewpoint => Self::Visibility,
            Self::Visibility => Self::Temperature,
        }
    }

    /// Zero-based position in [`FieldSelector::ALL`].
    pub const fn index(self) -> usize {
        match self {
            Self::Temperature => 0,
            Self::Dewpoint => 1,
            Self::Visibility => 2,
        }
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Temperature => "Temperature",
            Self::Dewpoint => "Dewpoint",
            Self::Visibility => "Visibility",
        }
    }
}

/// Free-function form of [`FieldSelector::advance`].
pub fn advance(current: FieldSelector) -> FieldSelector {
    current.advance()
}

impl fmt::Display for FieldSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, thiserror::Error)]
#[error("unknown field '{0}' (expected temperature, dewpoint or visibility)")]
pub struct UnknownField(pub String);

impl FromStr for FieldSelector {
    type Err = UnknownField;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|f| f.label().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownField(s.to_string()))
    }
}

impl TryFrom<String> for FieldSelector {
    type Error = UnknownField;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

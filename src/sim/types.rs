use std::fmt;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ── Newtypes ────────────────────────────────────────────────────────

/// Stat option id. 0 is the "unselected" sentinel; catalog entries are
/// numbered from 1 in catalog order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OptionId(pub u32);

impl OptionId {
    pub const UNSET: Self = Self(0);

    pub fn is_unset(self) -> bool {
        self == Self::UNSET
    }

    /// 0-based index into the catalog, `None` for the sentinel.
    pub fn catalog_index(self) -> Option<usize> {
        (self.0 as usize).checked_sub(1)
    }

    pub fn from_catalog_index(index: usize) -> Self {
        Self(index as u32 + 1)
    }
}

impl fmt::Display for OptionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Opaque token; a new value forces every slot row to be rebuilt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ResetSignal(Uuid);

impl ResetSignal {
    pub fn fresh() -> Self {
        Self(Uuid::new_v4())
    }
}

/// Remaining time on a one-shot countdown. Saturates at zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub struct Countdown(pub Duration);

impl Countdown {
    pub fn new(d: Duration) -> Self {
        Self(d)
    }

    /// Decrement by dt, clamped to 0.
    pub fn dec(self, dt: Duration) -> Self {
        Self(self.0.saturating_sub(dt))
    }

    pub fn is_expired(self) -> bool {
        self.0.is_zero()
    }
}

// ── Enums ───────────────────────────────────────────────────────────

/// Color reported by the engine for a slot's validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValidationColor {
    Red,
    Gray,
    Green,
    #[serde(other)]
    Other,
}

/// Display classification of a row's value field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ValidityClass {
    #[default]
    Neutral,
    Invalid,
    Negative,
    Valid,
}

impl ValidityClass {
    /// Red is invalid, gray is negative, anything else is valid.
    pub fn from_color(color: ValidationColor) -> Self {
        match color {
            ValidationColor::Red => Self::Invalid,
            ValidationColor::Gray => Self::Negative,
            ValidationColor::Green | ValidationColor::Other => Self::Valid,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn option_id_catalog_index() {
        assert_eq!(OptionId::UNSET.catalog_index(), None);
        assert_eq!(OptionId(1).catalog_index(), Some(0));
        assert_eq!(OptionId::from_catalog_index(4), OptionId(5));
    }

    #[test]
    fn reset_signals_are_distinct() {
        let a = ResetSignal::fresh();
        assert_eq!(a, a);
        assert_ne!(a, ResetSignal::fresh());
    }

    #[test]
    fn countdown_saturates() {
        let c = Countdown::new(Duration::from_millis(100));
        let c = c.dec(Duration::from_millis(60));
        assert!(!c.is_expired());
        let c = c.dec(Duration::from_millis(60));
        assert!(c.is_expired());
        assert_eq!(c.0, Duration::ZERO);
    }

    #[test]
    fn unknown_color_deserializes_as_other() {
        let c: ValidationColor = serde_json::from_str("\"purple\"").unwrap();
        assert_eq!(c, ValidationColor::Other);
        assert_eq!(ValidityClass::from_color(c), ValidityClass::Valid);
        let red: ValidationColor = serde_json::from_str("\"red\"").unwrap();
        assert_eq!(ValidityClass::from_color(red), ValidityClass::Invalid);
    }
}

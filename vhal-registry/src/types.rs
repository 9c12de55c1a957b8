//! Core types for the change-mode registry
//!
//! This module defines the change-mode classification, the registry entry
//! pairing and the error type shared by the whole library. The registry only
//! classifies properties - it never stores values or tracks subscribers.

use crate::property::PropertyId;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Result type for registry operations
pub type Result<T> = std::result::Result<T, RegistryError>;

/// Notification policy governing when a property's value is pushed to subscribers
///
/// The set is closed: there is no "unknown" variant. A property the registry
/// does not know about is represented by a lookup miss, not by a change mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ChangeMode {
    /// Fixed at boot, never changes during the device's lifetime
    Static,
    /// Changes asynchronously, reported only when the value actually changes
    OnChange,
    /// Changes continuously, reported at a sampling rate
    Continuous,
}

impl ChangeMode {
    /// All change modes, in HAL numeric order
    pub const ALL: [ChangeMode; 3] = [ChangeMode::Static, ChangeMode::OnChange, ChangeMode::Continuous];

    /// Convert from the HAL's numeric encoding (STATIC=0, ON_CHANGE=1, CONTINUOUS=2)
    pub fn from_raw(raw: i32) -> Result<Self> {
        match raw {
            0 => Ok(ChangeMode::Static),
            1 => Ok(ChangeMode::OnChange),
            2 => Ok(ChangeMode::Continuous),
            other => Err(RegistryError::InvalidChangeMode(format!(
                "raw value {} is not a change mode",
                other
            ))),
        }
    }

    /// The HAL's numeric encoding of this change mode
    pub fn as_raw(self) -> i32 {
        match self {
            ChangeMode::Static => 0,
            ChangeMode::OnChange => 1,
            ChangeMode::Continuous => 2,
        }
    }

    /// Canonical upper-case name (e.g. `ON_CHANGE`)
    pub fn name(self) -> &'static str {
        match self {
            ChangeMode::Static => "STATIC",
            ChangeMode::OnChange => "ON_CHANGE",
            ChangeMode::Continuous => "CONTINUOUS",
        }
    }

    /// Whether clients may subscribe to properties with this change mode
    ///
    /// Static properties never produce change events, so the HAL server
    /// rejects subscriptions to them.
    pub fn is_subscribable(self) -> bool {
        !matches!(self, ChangeMode::Static)
    }

    /// Whether a subscription to this change mode carries a sample rate
    pub fn uses_sample_rate(self) -> bool {
        matches!(self, ChangeMode::Continuous)
    }
}

impl fmt::Display for ChangeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ChangeMode {
    type Err = RegistryError;

    fn from_str(s: &str) -> Result<Self> {
        let normalized = s.trim().replace('-', "_").to_ascii_uppercase();
        match normalized.as_str() {
            "STATIC" => Ok(ChangeMode::Static),
            "ON_CHANGE" | "ONCHANGE" => Ok(ChangeMode::OnChange),
            "CONTINUOUS" => Ok(ChangeMode::Continuous),
            _ => Err(RegistryError::InvalidChangeMode(s.to_string())),
        }
    }
}

/// One (property, change mode) pairing as stored in the registry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RegistryEntry {
    /// Property identifier
    pub id: PropertyId,
    /// Change mode governing the property
    pub change_mode: ChangeMode,
}

impl RegistryEntry {
    /// Create a new entry
    pub fn new(id: PropertyId, change_mode: ChangeMode) -> Self {
        Self { id, change_mode }
    }
}

impl From<(PropertyId, ChangeMode)> for RegistryEntry {
    fn from((id, change_mode): (PropertyId, ChangeMode)) -> Self {
        Self::new(id, change_mode)
    }
}

/// Errors that can occur while building a registry or parsing its inputs
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RegistryError {
    #[error("Conflicting change mode for property {id}: {first} vs {second}")]
    ConflictingChangeMode {
        id: PropertyId,
        first: ChangeMode,
        second: ChangeMode,
    },

    #[error("Invalid change mode: {0}")]
    InvalidChangeMode(String),

    #[error("Invalid property id: {0}")]
    InvalidPropertyId(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_change_mode_raw_values() {
        for mode in ChangeMode::ALL {
            assert_eq!(ChangeMode::from_raw(mode.as_raw()).unwrap(), mode);
        }
        assert_eq!(ChangeMode::Static.as_raw(), 0);
        assert_eq!(ChangeMode::Continuous.as_raw(), 2);
        assert!(matches!(
            ChangeMode::from_raw(3),
            Err(RegistryError::InvalidChangeMode(_))
        ));
    }

    #[test]
    fn test_change_mode_parse() {
        assert_eq!("STATIC".parse::<ChangeMode>().unwrap(), ChangeMode::Static);
        assert_eq!("on_change".parse::<ChangeMode>().unwrap(), ChangeMode::OnChange);
        assert_eq!("on-change".parse::<ChangeMode>().unwrap(), ChangeMode::OnChange);
        assert_eq!(" Continuous ".parse::<ChangeMode>().unwrap(), ChangeMode::Continuous);
        assert!("sometimes".parse::<ChangeMode>().is_err());
    }

    #[test]
    fn test_change_mode_display() {
        assert_eq!(format!("{}", ChangeMode::OnChange), "ON_CHANGE");
        assert_eq!(ChangeMode::Static.to_string(), "STATIC");
    }

    #[test]
    fn test_delivery_predicates() {
        assert!(!ChangeMode::Static.is_subscribable());
        assert!(ChangeMode::OnChange.is_subscribable());
        assert!(ChangeMode::Continuous.is_subscribable());

        assert!(!ChangeMode::Static.uses_sample_rate());
        assert!(!ChangeMode::OnChange.uses_sample_rate());
        assert!(ChangeMode::Continuous.uses_sample_rate());
    }

    #[test]
    fn test_conflict_error_message() {
        let err = RegistryError::ConflictingChangeMode {
            id: PropertyId::new(0x11600204),
            first: ChangeMode::Continuous,
            second: ChangeMode::OnChange,
        };
        assert_eq!(
            err.to_string(),
            "Conflicting change mode for property 0x11600204: CONTINUOUS vs ON_CHANGE"
        );
    }
}

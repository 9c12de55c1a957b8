//! Registry configuration types
//!
//! Describes how a registry is assembled: whether the generated system table
//! is included and which vendor properties are classified on top of it. The
//! library never reads files itself - the application layer deserializes this
//! from its own configuration format.

use crate::property::PropertyId;
use crate::types::{ChangeMode, RegistryEntry};
use serde::{Deserialize, Serialize};

/// Configuration for assembling a change-mode registry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistryConfig {
    /// Whether to include the generated system table (default: true)
    #[serde(default = "default_true")]
    pub include_builtin: bool,

    /// Extra properties classified in addition to the system table
    #[serde(default)]
    pub vendor_properties: Vec<VendorProperty>,
}

fn default_true() -> bool {
    true
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            include_builtin: true,
            vendor_properties: Vec::new(),
        }
    }
}

/// A vendor-defined property and its change mode
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VendorProperty {
    /// Property id
    pub id: PropertyId,
    /// Change mode governing the property
    pub change_mode: ChangeMode,
    /// Optional display name
    #[serde(default)]
    pub name: Option<String>,
}

impl VendorProperty {
    /// Create a new vendor property
    pub fn new(id: PropertyId, change_mode: ChangeMode) -> Self {
        Self {
            id,
            change_mode,
            name: None,
        }
    }

    /// Create a new vendor property with a display name
    pub fn with_name(id: PropertyId, change_mode: ChangeMode, name: impl Into<String>) -> Self {
        Self {
            id,
            change_mode,
            name: Some(name.into()),
        }
    }

    /// The registry entry this property contributes
    pub fn entry(&self) -> RegistryEntry {
        RegistryEntry::new(self.id, self.change_mode)
    }
}

impl RegistryConfig {
    /// Create a new registry configuration with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method: include or exclude the generated system table
    pub fn with_builtin(mut self, enabled: bool) -> Self {
        self.include_builtin = enabled;
        self
    }

    /// Builder method: add a vendor property
    pub fn add_vendor_property(mut self, id: PropertyId, change_mode: ChangeMode) -> Self {
        self.vendor_properties.push(VendorProperty::new(id, change_mode));
        self
    }

    /// Builder method: add a vendor property with a display name
    pub fn add_named_vendor_property(
        mut self,
        id: PropertyId,
        change_mode: ChangeMode,
        name: impl Into<String>,
    ) -> Self {
        self.vendor_properties
            .push(VendorProperty::with_name(id, change_mode, name));
        self
    }

    /// Display name configured for a vendor property
    pub fn vendor_name(&self, id: PropertyId) -> Option<&str> {
        self.vendor_properties
            .iter()
            .find(|p| p.id == id)
            .and_then(|p| p.name.as_deref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_config_builder() {
        let config = RegistryConfig::new()
            .with_builtin(false)
            .add_vendor_property(PropertyId::new(0x2140_0101), ChangeMode::OnChange)
            .add_named_vendor_property(
                PropertyId::new(0x2160_0102),
                ChangeMode::Continuous,
                "VENDOR_MOTOR_TEMP",
            );

        assert!(!config.include_builtin);
        assert_eq!(config.vendor_properties.len(), 2);
        assert_eq!(
            config.vendor_properties[1].entry(),
            RegistryEntry::new(PropertyId::new(0x2160_0102), ChangeMode::Continuous)
        );
    }

    #[test]
    fn test_default_includes_builtin() {
        let config = RegistryConfig::default();
        assert!(config.include_builtin);
        assert!(config.vendor_properties.is_empty());
    }

    #[test]
    fn test_vendor_name() {
        let config = RegistryConfig::new()
            .add_vendor_property(PropertyId::new(0x2140_0101), ChangeMode::OnChange)
            .add_named_vendor_property(PropertyId::new(0x2140_0102), ChangeMode::Static, "VENDOR_TRIM");

        assert_eq!(config.vendor_name(PropertyId::new(0x2140_0102)), Some("VENDOR_TRIM"));
        assert_eq!(config.vendor_name(PropertyId::new(0x2140_0101)), None);
        assert_eq!(config.vendor_name(PropertyId::new(0x2140_0103)), None);
    }
}

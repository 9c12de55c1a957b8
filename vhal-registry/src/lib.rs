//! Vehicle HAL Change-Mode Registry
//!
//! A read-only lookup table classifying every system vehicle property by its
//! change mode (STATIC, ON_CHANGE, CONTINUOUS).
//!
//! # Architecture
//!
//! This library is intentionally minimal and focused on classification:
//! - Maps property ids to change modes from a generated table
//! - Names the system properties and decodes the packed id layout
//! - Merges vendor-defined classifications at construction time
//!
//! The library does NOT:
//! - Manage subscriptions or clients
//! - Sample or throttle continuous properties
//! - Substitute a default change mode for unknown properties
//!
//! Delivery policy is owned by the property server that consumes the registry.
//!
//! # Example Usage
//!
//! ```
//! use vhal_registry::{vehicle_property, ChangeMode, ChangeModeRegistry, PropertyId};
//!
//! let registry = ChangeModeRegistry::builtin();
//!
//! assert_eq!(
//!     registry.lookup(vehicle_property::PERF_VEHICLE_SPEED),
//!     Some(ChangeMode::Continuous)
//! );
//!
//! // Unknown ids are a miss, not an error
//! assert_eq!(registry.lookup(PropertyId::new(0x3120_0001)), None);
//! ```

// Public modules
pub mod change_mode_table;
pub mod config;
pub mod property;
pub mod registry;
pub mod types;
pub mod vehicle_property;

// Re-export main types for convenience
pub use config::{RegistryConfig, VendorProperty};
pub use property::{PropertyGroup, PropertyId, PropertyType, VehicleArea};
pub use registry::{ChangeModeLookup, ChangeModeRegistry, RegistryBuilder, RegistryStats};
pub use types::{ChangeMode, RegistryEntry, RegistryError, Result};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_library_basics() {
        // Smoke test: the generated table builds
        let registry = ChangeModeRegistry::builtin();
        assert_eq!(registry.len(), change_mode_table::CHANGE_MODE_TABLE.len());
        assert!(!registry.is_empty());
    }
}

//! Property change-mode registry
//!
//! An immutable mapping from property id to change mode. A registry is built
//! once from a list of (id, change mode) pairs and is read-only afterwards, so
//! it can be shared across threads without locking.

use crate::change_mode_table::CHANGE_MODE_TABLE;
use crate::config::RegistryConfig;
use crate::property::PropertyId;
use crate::types::{ChangeMode, RegistryEntry, RegistryError, Result};
use once_cell::sync::Lazy;
use std::collections::hash_map::Entry;
use std::collections::HashMap;

static BUILTIN: Lazy<ChangeModeRegistry> = Lazy::new(|| {
    match ChangeModeRegistry::from_entries(CHANGE_MODE_TABLE.iter().copied()) {
        Ok(registry) => {
            log::info!("Built change-mode registry with {} properties", registry.len());
            registry
        }
        // The generated table itself is wrong; nothing depending on it may run.
        Err(e) => panic!("generated change-mode table is inconsistent: {}", e),
    }
});

/// Read-only change-mode lookups
///
/// Dispatch code should depend on this trait rather than on the global
/// builtin registry, so it can be exercised against a small stub table.
pub trait ChangeModeLookup {
    /// Change mode of `id`, or `None` if the property is not classified
    fn lookup(&self, id: PropertyId) -> Option<ChangeMode>;

    /// True if `id` is classified
    fn contains(&self, id: PropertyId) -> bool {
        self.lookup(id).is_some()
    }
}

impl<T: ChangeModeLookup + ?Sized> ChangeModeLookup for &T {
    fn lookup(&self, id: PropertyId) -> Option<ChangeMode> {
        (**self).lookup(id)
    }
}

impl ChangeModeLookup for HashMap<PropertyId, ChangeMode> {
    fn lookup(&self, id: PropertyId) -> Option<ChangeMode> {
        self.get(&id).copied()
    }
}

/// The immutable change-mode registry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangeModeRegistry {
    /// Change mode by property id
    modes: HashMap<PropertyId, ChangeMode>,

    /// Entries in first-occurrence order of the source list
    entries: Vec<RegistryEntry>,
}

impl ChangeModeRegistry {
    /// The registry built from the generated system table
    ///
    /// Built on first access; concurrent first accesses block until the one
    /// build finishes. Panics if the generated table classifies the same
    /// property twice with different change modes.
    pub fn builtin() -> &'static ChangeModeRegistry {
        &BUILTIN
    }

    /// Build a registry from (id, change mode) pairs
    ///
    /// A repeated id with the same change mode collapses into one entry. A
    /// repeated id with a different change mode fails the whole build.
    ///
    /// # Example
    /// ```
    /// use vhal_registry::{ChangeMode, ChangeModeRegistry, PropertyId};
    ///
    /// let speed = PropertyId::new(0x1160_0207);
    /// let registry = ChangeModeRegistry::from_entries([(speed, ChangeMode::Continuous)]).unwrap();
    /// assert_eq!(registry.lookup(speed), Some(ChangeMode::Continuous));
    /// ```
    pub fn from_entries<I, E>(entries: I) -> Result<Self>
    where
        I: IntoIterator<Item = E>,
        E: Into<RegistryEntry>,
    {
        let entries = entries.into_iter();
        let (lower, _) = entries.size_hint();
        let mut modes = HashMap::with_capacity(lower);
        let mut ordered = Vec::with_capacity(lower);

        for entry in entries {
            let entry: RegistryEntry = entry.into();
            match modes.entry(entry.id) {
                Entry::Vacant(slot) => {
                    slot.insert(entry.change_mode);
                    ordered.push(entry);
                }
                Entry::Occupied(slot) => {
                    let first = *slot.get();
                    if first != entry.change_mode {
                        return Err(RegistryError::ConflictingChangeMode {
                            id: entry.id,
                            first,
                            second: entry.change_mode,
                        });
                    }
                    log::debug!("Duplicate entry for property {} ({}) collapsed", entry.id, first);
                }
            }
        }

        Ok(Self {
            modes,
            entries: ordered,
        })
    }

    /// Change mode of `id`, or `None` if the property is not classified
    pub fn lookup(&self, id: PropertyId) -> Option<ChangeMode> {
        self.modes.get(&id).copied()
    }

    /// True if `id` is classified
    pub fn contains(&self, id: PropertyId) -> bool {
        self.modes.contains_key(&id)
    }

    /// Every entry, in first-occurrence order of the source list
    ///
    /// Each call returns a fresh iterator.
    pub fn all(&self) -> impl Iterator<Item = RegistryEntry> + '_ {
        self.entries.iter().copied()
    }

    /// Entries with the given change mode, in the same order as [`all`](Self::all)
    pub fn entries_with_mode(&self, mode: ChangeMode) -> impl Iterator<Item = RegistryEntry> + '_ {
        self.all().filter(move |entry| entry.change_mode == mode)
    }

    /// Number of classified properties
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True if no property is classified
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Get registry statistics
    pub fn stats(&self) -> RegistryStats {
        let mut stats = RegistryStats {
            num_properties: self.entries.len(),
            ..RegistryStats::default()
        };

        for entry in &self.entries {
            match entry.change_mode {
                ChangeMode::Static => stats.num_static += 1,
                ChangeMode::OnChange => stats.num_on_change += 1,
                ChangeMode::Continuous => stats.num_continuous += 1,
            }
        }

        stats
    }
}

impl ChangeModeLookup for ChangeModeRegistry {
    fn lookup(&self, id: PropertyId) -> Option<ChangeMode> {
        ChangeModeRegistry::lookup(self, id)
    }

    fn contains(&self, id: PropertyId) -> bool {
        ChangeModeRegistry::contains(self, id)
    }
}

/// Registry statistics
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RegistryStats {
    /// Total number of classified properties
    pub num_properties: usize,
    /// Properties classified STATIC
    pub num_static: usize,
    /// Properties classified ON_CHANGE
    pub num_on_change: usize,
    /// Properties classified CONTINUOUS
    pub num_continuous: usize,
}

/// Assembles a registry from the generated table and extra entries
///
/// # Example
/// ```
/// use vhal_registry::{ChangeMode, PropertyId, RegistryBuilder};
///
/// let registry = RegistryBuilder::new()
///     .with_builtin_table()
///     .add_entry(PropertyId::new(0x2140_0101), ChangeMode::OnChange)
///     .build()
///     .unwrap();
/// assert!(registry.contains(PropertyId::new(0x2140_0101)));
/// ```
#[derive(Debug, Clone, Default)]
pub struct RegistryBuilder {
    entries: Vec<RegistryEntry>,
}

impl RegistryBuilder {
    /// Create an empty builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a builder from a registry configuration
    pub fn from_config(config: &RegistryConfig) -> Self {
        let mut builder = Self::new();
        if config.include_builtin {
            builder = builder.with_builtin_table();
        }

        for property in &config.vendor_properties {
            if !property.id.is_vendor() {
                log::warn!(
                    "Configured property {} is not in the vendor group",
                    property.id
                );
            }
        }

        if !config.vendor_properties.is_empty() {
            log::info!(
                "Adding {} configured vendor properties",
                config.vendor_properties.len()
            );
        }

        builder.add_entries(config.vendor_properties.iter().map(|p| p.entry()))
    }

    /// Append every entry of the generated system table
    pub fn with_builtin_table(self) -> Self {
        self.add_entries(CHANGE_MODE_TABLE.iter().copied())
    }

    /// Append one entry
    pub fn add_entry(mut self, id: PropertyId, change_mode: ChangeMode) -> Self {
        self.entries.push(RegistryEntry::new(id, change_mode));
        self
    }

    /// Append several entries
    pub fn add_entries<I, E>(mut self, entries: I) -> Self
    where
        I: IntoIterator<Item = E>,
        E: Into<RegistryEntry>,
    {
        self.entries.extend(entries.into_iter().map(Into::into));
        self
    }

    /// Build the registry, failing on conflicting duplicate entries
    pub fn build(self) -> Result<ChangeModeRegistry> {
        ChangeModeRegistry::from_entries(self.entries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vehicle_property::{DOOR_LOCK, INFO_VIN, PERF_ODOMETER, PERF_VEHICLE_SPEED};

    #[test]
    fn test_empty_registry() {
        let registry = ChangeModeRegistry::from_entries(Vec::<RegistryEntry>::new()).unwrap();
        assert!(registry.is_empty());
        assert_eq!(registry.stats(), RegistryStats::default());
        assert_eq!(registry.lookup(PERF_VEHICLE_SPEED), None);
    }

    #[test]
    fn test_lookup_and_contains() {
        let registry = ChangeModeRegistry::from_entries([
            (INFO_VIN, ChangeMode::Static),
            (DOOR_LOCK, ChangeMode::OnChange),
        ])
        .unwrap();

        assert_eq!(registry.lookup(INFO_VIN), Some(ChangeMode::Static));
        assert_eq!(registry.lookup(DOOR_LOCK), Some(ChangeMode::OnChange));
        assert_eq!(registry.lookup(PERF_VEHICLE_SPEED), None);
        assert!(registry.contains(DOOR_LOCK));
        assert!(!registry.contains(PERF_VEHICLE_SPEED));
    }

    #[test]
    fn test_consistent_duplicate_collapses() {
        let registry = ChangeModeRegistry::from_entries([
            (PERF_ODOMETER, ChangeMode::Continuous),
            (PERF_ODOMETER, ChangeMode::Continuous),
        ])
        .unwrap();

        assert_eq!(registry.len(), 1);
        assert_eq!(registry.lookup(PERF_ODOMETER), Some(ChangeMode::Continuous));
    }

    #[test]
    fn test_conflicting_duplicate_fails() {
        let result = ChangeModeRegistry::from_entries([
            (PERF_ODOMETER, ChangeMode::Continuous),
            (PERF_ODOMETER, ChangeMode::OnChange),
        ]);

        assert_eq!(
            result,
            Err(RegistryError::ConflictingChangeMode {
                id: PERF_ODOMETER,
                first: ChangeMode::Continuous,
                second: ChangeMode::OnChange,
            })
        );
    }

    #[test]
    fn test_all_keeps_first_occurrence_order() {
        let registry = ChangeModeRegistry::from_entries([
            (DOOR_LOCK, ChangeMode::OnChange),
            (INFO_VIN, ChangeMode::Static),
            (DOOR_LOCK, ChangeMode::OnChange),
            (PERF_VEHICLE_SPEED, ChangeMode::Continuous),
        ])
        .unwrap();

        let ids: Vec<PropertyId> = registry.all().map(|e| e.id).collect();
        assert_eq!(ids, vec![DOOR_LOCK, INFO_VIN, PERF_VEHICLE_SPEED]);

        // Restartable
        assert_eq!(registry.all().count(), 3);
        assert_eq!(registry.all().count(), 3);
    }

    #[test]
    fn test_stats_and_mode_filter() {
        let registry = ChangeModeRegistry::from_entries([
            (INFO_VIN, ChangeMode::Static),
            (DOOR_LOCK, ChangeMode::OnChange),
            (PERF_ODOMETER, ChangeMode::Continuous),
            (PERF_VEHICLE_SPEED, ChangeMode::Continuous),
        ])
        .unwrap();

        let stats = registry.stats();
        assert_eq!(stats.num_properties, 4);
        assert_eq!(stats.num_static, 1);
        assert_eq!(stats.num_on_change, 1);
        assert_eq!(stats.num_continuous, 2);

        let continuous: Vec<PropertyId> = registry
            .entries_with_mode(ChangeMode::Continuous)
            .map(|e| e.id)
            .collect();
        assert_eq!(continuous, vec![PERF_ODOMETER, PERF_VEHICLE_SPEED]);
    }

    #[test]
    fn test_lookup_trait_stub() {
        fn delivery_uses_rate(lookup: &dyn ChangeModeLookup, id: PropertyId) -> Option<bool> {
            lookup.lookup(id).map(ChangeMode::uses_sample_rate)
        }

        let mut stub = HashMap::new();
        stub.insert(PERF_VEHICLE_SPEED, ChangeMode::Continuous);

        assert_eq!(delivery_uses_rate(&stub, PERF_VEHICLE_SPEED), Some(true));
        assert_eq!(delivery_uses_rate(&stub, DOOR_LOCK), None);
        assert!(stub.contains(PERF_VEHICLE_SPEED));
    }

    #[test]
    fn test_builder_from_config() {
        let vendor = PropertyId::new(0x2140_0101);
        let config = RegistryConfig::new().add_vendor_property(vendor, ChangeMode::OnChange);

        let registry = RegistryBuilder::from_config(&config).build().unwrap();
        assert_eq!(registry.len(), CHANGE_MODE_TABLE.len() + 1);
        assert_eq!(registry.lookup(vendor), Some(ChangeMode::OnChange));
        assert_eq!(registry.lookup(INFO_VIN), Some(ChangeMode::Static));
    }

    #[test]
    fn test_builder_without_builtin() {
        let vendor = PropertyId::new(0x2140_0101);
        let config = RegistryConfig::new()
            .with_builtin(false)
            .add_vendor_property(vendor, ChangeMode::Static);

        let registry = RegistryBuilder::from_config(&config).build().unwrap();
        assert_eq!(registry.len(), 1);
        assert!(!registry.contains(INFO_VIN));
    }

    #[test]
    fn test_builder_rejects_reclassified_builtin() {
        let result = RegistryBuilder::new()
            .with_builtin_table()
            .add_entry(PERF_VEHICLE_SPEED, ChangeMode::OnChange)
            .build();

        assert!(matches!(
            result,
            Err(RegistryError::ConflictingChangeMode { id, .. }) if id == PERF_VEHICLE_SPEED
        ));
    }
}

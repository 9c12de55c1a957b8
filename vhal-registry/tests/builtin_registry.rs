// Integration tests for the registry built from the generated table
use std::collections::HashSet;
use std::thread;

use vhal_registry::change_mode_table::CHANGE_MODE_TABLE;
use vhal_registry::vehicle_property::{self, DOOR_LOCK, INFO_VIN, PERF_ODOMETER, PERF_VEHICLE_SPEED};
use vhal_registry::{ChangeMode, ChangeModeRegistry, PropertyId, RegistryError};

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[test]
fn every_table_entry_is_returned_by_lookup() {
    init_logging();
    let registry = ChangeModeRegistry::builtin();

    for (id, mode) in CHANGE_MODE_TABLE {
        assert_eq!(registry.lookup(*id), Some(*mode), "property {}", id);
    }
}

#[test]
fn well_known_properties() {
    let registry = ChangeModeRegistry::builtin();

    assert_eq!(registry.lookup(PERF_VEHICLE_SPEED), Some(ChangeMode::Continuous));
    assert_eq!(registry.lookup(INFO_VIN), Some(ChangeMode::Static));
    assert_eq!(registry.lookup(DOOR_LOCK), Some(ChangeMode::OnChange));
    assert_eq!(registry.lookup(PropertyId::new(0x3120_0001)), None);
}

#[test]
fn unknown_ids_miss() {
    let registry = ChangeModeRegistry::builtin();
    let known: HashSet<PropertyId> = CHANGE_MODE_TABLE.iter().map(|(id, _)| *id).collect();

    for raw in [0u32, 1, 0x2140_0101, 0x3120_0001, 0x1160_0200, u32::MAX] {
        let id = PropertyId::new(raw);
        assert!(!known.contains(&id));
        assert_eq!(registry.lookup(id), None);
    }
}

#[test]
fn contains_matches_lookup() {
    let registry = ChangeModeRegistry::builtin();

    let probes = CHANGE_MODE_TABLE
        .iter()
        .map(|(id, _)| *id)
        .chain([0x3120_0001, 0x2160_0001, 0].into_iter().map(PropertyId::new));

    for id in probes {
        assert_eq!(registry.contains(id), registry.lookup(id).is_some());
    }
}

#[test]
fn rebuilding_is_deterministic() {
    let first = ChangeModeRegistry::from_entries(CHANGE_MODE_TABLE.iter().copied()).unwrap();
    let second = ChangeModeRegistry::from_entries(CHANGE_MODE_TABLE.iter().copied()).unwrap();

    assert_eq!(first, second);
    assert!(first.all().eq(second.all()));
    assert_eq!(&first, ChangeModeRegistry::builtin());
}

#[test]
fn all_yields_each_distinct_id_once() {
    let registry = ChangeModeRegistry::builtin();
    let distinct: HashSet<PropertyId> = CHANGE_MODE_TABLE.iter().map(|(id, _)| *id).collect();

    let listed: Vec<PropertyId> = registry.all().map(|entry| entry.id).collect();
    let listed_set: HashSet<PropertyId> = listed.iter().copied().collect();

    assert_eq!(listed.len(), distinct.len());
    assert_eq!(listed_set, distinct);
    assert_eq!(registry.len(), distinct.len());
}

#[test]
fn all_follows_table_order() {
    let registry = ChangeModeRegistry::builtin();
    let table: Vec<PropertyId> = CHANGE_MODE_TABLE.iter().map(|(id, _)| *id).collect();
    let listed: Vec<PropertyId> = registry.all().map(|entry| entry.id).collect();

    assert_eq!(listed, table);
}

#[test]
fn stats_add_up() {
    let stats = ChangeModeRegistry::builtin().stats();

    assert_eq!(
        stats.num_static + stats.num_on_change + stats.num_continuous,
        stats.num_properties
    );
    assert!(stats.num_static > 0);
    assert!(stats.num_on_change > 0);
    assert!(stats.num_continuous > 0);
}

#[test]
fn every_table_entry_is_named() {
    for (id, _) in CHANGE_MODE_TABLE {
        assert!(vehicle_property::name_of(*id).is_some(), "unnamed property {}", id);
    }
    assert_eq!(vehicle_property::ALL.len(), CHANGE_MODE_TABLE.len());
}

#[test]
fn consistent_duplicate_builds_single_entry() {
    let registry = ChangeModeRegistry::from_entries([
        (PERF_ODOMETER, ChangeMode::Continuous),
        (PERF_ODOMETER, ChangeMode::Continuous),
    ])
    .unwrap();

    assert_eq!(registry.len(), 1);
    assert_eq!(registry.lookup(PERF_ODOMETER), Some(ChangeMode::Continuous));
}

#[test]
fn conflicting_duplicate_fails_construction() {
    let err = ChangeModeRegistry::from_entries([
        (PERF_ODOMETER, ChangeMode::Continuous),
        (PERF_ODOMETER, ChangeMode::OnChange),
    ])
    .unwrap_err();

    assert_eq!(
        err,
        RegistryError::ConflictingChangeMode {
            id: PERF_ODOMETER,
            first: ChangeMode::Continuous,
            second: ChangeMode::OnChange,
        }
    );
}

#[test]
fn concurrent_first_access_sees_one_registry() {
    init_logging();

    let handles: Vec<_> = (0..8)
        .map(|_| {
            thread::spawn(|| {
                let registry = ChangeModeRegistry::builtin();
                assert_eq!(registry.len(), CHANGE_MODE_TABLE.len());
                assert_eq!(registry.lookup(PERF_VEHICLE_SPEED), Some(ChangeMode::Continuous));
                registry as *const ChangeModeRegistry as usize
            })
        })
        .collect();

    let addresses: HashSet<usize> = handles
        .into_iter()
        .map(|handle| handle.join().unwrap())
        .collect();

    assert_eq!(addresses.len(), 1);
}

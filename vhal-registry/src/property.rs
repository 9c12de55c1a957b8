//! Vehicle property identifiers
//!
//! A property id is a 32-bit value that packs four fields:
//!
//! ```text
//!  31    28 27    24 23            16 15                      0
//! +--------+--------+----------------+-------------------------+
//! | group  |  area  |   value type   |          index          |
//! +--------+--------+----------------+-------------------------+
//! ```
//!
//! The registry keys on the raw id. The decoded fields are informational and
//! decoding never fails: a field value the HAL does not define decodes to `None`.

use crate::types::{RegistryError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

const GROUP_MASK: u32 = 0xF000_0000;
const AREA_MASK: u32 = 0x0F00_0000;
const TYPE_MASK: u32 = 0x00FF_0000;
const INDEX_MASK: u32 = 0x0000_FFFF;

/// Opaque identifier of a vehicle property
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PropertyId(u32);

impl PropertyId {
    /// Wrap a raw property id
    pub const fn new(raw: u32) -> Self {
        Self(raw)
    }

    /// Compose an id from its fields
    pub const fn compose(group: PropertyGroup, area: VehicleArea, value_type: PropertyType, index: u16) -> Self {
        Self(group as u32 | area as u32 | value_type as u32 | index as u32)
    }

    /// Compose a system-group id
    pub const fn system(index: u16, area: VehicleArea, value_type: PropertyType) -> Self {
        Self::compose(PropertyGroup::System, area, value_type, index)
    }

    /// The raw 32-bit value
    pub const fn raw(self) -> u32 {
        self.0
    }

    /// Property group (system, vendor, backported)
    pub fn group(self) -> Option<PropertyGroup> {
        PropertyGroup::from_bits(self.0 & GROUP_MASK)
    }

    /// Area type the property is addressed by
    pub fn area(self) -> Option<VehicleArea> {
        VehicleArea::from_bits(self.0 & AREA_MASK)
    }

    /// Value type carried by the property
    pub fn value_type(self) -> Option<PropertyType> {
        PropertyType::from_bits(self.0 & TYPE_MASK)
    }

    /// Index within the group
    pub fn index(self) -> u16 {
        (self.0 & INDEX_MASK) as u16
    }

    /// True if this id belongs to the vendor group
    pub fn is_vendor(self) -> bool {
        self.group() == Some(PropertyGroup::Vendor)
    }
}

impl fmt::Display for PropertyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#010x}", self.0)
    }
}

impl From<u32> for PropertyId {
    fn from(raw: u32) -> Self {
        Self(raw)
    }
}

impl From<PropertyId> for u32 {
    fn from(id: PropertyId) -> Self {
        id.0
    }
}

impl FromStr for PropertyId {
    type Err = RegistryError;

    /// Parse a hex (`0x...`) or decimal id
    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        let parsed = match trimmed
            .strip_prefix("0x")
            .or_else(|| trimmed.strip_prefix("0X"))
        {
            Some(hex) => u32::from_str_radix(&hex.replace('_', ""), 16),
            None => trimmed.replace('_', "").parse::<u32>(),
        };

        parsed
            .map(PropertyId)
            .map_err(|e| RegistryError::InvalidPropertyId(format!("{:?}: {}", s, e)))
    }
}

/// Property group, bits 28..32
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u32)]
pub enum PropertyGroup {
    System = 0x1000_0000,
    Vendor = 0x2000_0000,
    Backported = 0x3000_0000,
}

impl PropertyGroup {
    fn from_bits(bits: u32) -> Option<Self> {
        match bits {
            0x1000_0000 => Some(PropertyGroup::System),
            0x2000_0000 => Some(PropertyGroup::Vendor),
            0x3000_0000 => Some(PropertyGroup::Backported),
            _ => None,
        }
    }
}

/// Area type, bits 24..28
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u32)]
pub enum VehicleArea {
    Global = 0x0100_0000,
    Window = 0x0300_0000,
    Mirror = 0x0400_0000,
    Seat = 0x0500_0000,
    Door = 0x0600_0000,
    Wheel = 0x0700_0000,
    Vendor = 0x0800_0000,
}

impl VehicleArea {
    fn from_bits(bits: u32) -> Option<Self> {
        match bits {
            0x0100_0000 => Some(VehicleArea::Global),
            0x0300_0000 => Some(VehicleArea::Window),
            0x0400_0000 => Some(VehicleArea::Mirror),
            0x0500_0000 => Some(VehicleArea::Seat),
            0x0600_0000 => Some(VehicleArea::Door),
            0x0700_0000 => Some(VehicleArea::Wheel),
            0x0800_0000 => Some(VehicleArea::Vendor),
            _ => None,
        }
    }
}

/// Value type, bits 16..24
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u32)]
pub enum PropertyType {
    String = 0x0010_0000,
    Boolean = 0x0020_0000,
    Int32 = 0x0040_0000,
    Int32Vec = 0x0041_0000,
    Int64 = 0x0050_0000,
    Int64Vec = 0x0051_0000,
    Float = 0x0060_0000,
    FloatVec = 0x0061_0000,
    Bytes = 0x0070_0000,
    Mixed = 0x00E0_0000,
}

impl PropertyType {
    fn from_bits(bits: u32) -> Option<Self> {
        match bits {
            0x0010_0000 => Some(PropertyType::String),
            0x0020_0000 => Some(PropertyType::Boolean),
            0x0040_0000 => Some(PropertyType::Int32),
            0x0041_0000 => Some(PropertyType::Int32Vec),
            0x0050_0000 => Some(PropertyType::Int64),
            0x0051_0000 => Some(PropertyType::Int64Vec),
            0x0060_0000 => Some(PropertyType::Float),
            0x0061_0000 => Some(PropertyType::FloatVec),
            0x0070_0000 => Some(PropertyType::Bytes),
            0x00E0_0000 => Some(PropertyType::Mixed),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compose_and_decode() {
        let id = PropertyId::system(0x0207, VehicleArea::Global, PropertyType::Float);
        assert_eq!(id.raw(), 0x1160_0207);
        assert_eq!(id.group(), Some(PropertyGroup::System));
        assert_eq!(id.area(), Some(VehicleArea::Global));
        assert_eq!(id.value_type(), Some(PropertyType::Float));
        assert_eq!(id.index(), 0x0207);
        assert!(!id.is_vendor());
    }

    #[test]
    fn test_decode_unknown_fields() {
        let id = PropertyId::new(0x4F9F_0001);
        assert_eq!(id.group(), None);
        assert_eq!(id.area(), None);
        assert_eq!(id.value_type(), None);
        assert_eq!(id.index(), 1);
    }

    #[test]
    fn test_vendor_group() {
        let id = PropertyId::compose(
            PropertyGroup::Vendor,
            VehicleArea::Seat,
            PropertyType::Int32,
            0x0101,
        );
        assert_eq!(id.raw(), 0x2540_0101);
        assert!(id.is_vendor());
    }

    #[test]
    fn test_parse_property_id() {
        assert_eq!("0x11600207".parse::<PropertyId>().unwrap().raw(), 0x1160_0207);
        assert_eq!("0X1160_0207".parse::<PropertyId>().unwrap().raw(), 0x1160_0207);
        assert_eq!("291504647".parse::<PropertyId>().unwrap().raw(), 0x1160_0207);
        assert!("PERF_VEHICLE_SPEED".parse::<PropertyId>().is_err());
        assert!("0x1_0000_0000".parse::<PropertyId>().is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(PropertyId::new(0x1110_0100).to_string(), "0x11100100");
        assert_eq!(PropertyId::new(0x1).to_string(), "0x00000001");
    }
}

//! Named system vehicle properties
//!
//! One constant per system property classified by the change-mode table, with
//! the id the HAL assigns to it. [`ALL`] lists every constant with its name in
//! table order and backs the name lookups used by tooling.

use crate::property::{PropertyId, PropertyType, VehicleArea};

const fn prop(index: u16, area: VehicleArea, value_type: PropertyType) -> PropertyId {
    PropertyId::system(index, area, value_type)
}

// ============================================================================
// Vehicle information
// ============================================================================

pub const INFO_VIN: PropertyId = prop(0x0100, VehicleArea::Global, PropertyType::String);
pub const INFO_MAKE: PropertyId = prop(0x0101, VehicleArea::Global, PropertyType::String);
pub const INFO_MODEL: PropertyId = prop(0x0102, VehicleArea::Global, PropertyType::String);
pub const INFO_MODEL_YEAR: PropertyId = prop(0x0103, VehicleArea::Global, PropertyType::Int32);
pub const INFO_FUEL_CAPACITY: PropertyId = prop(0x0104, VehicleArea::Global, PropertyType::Float);
pub const INFO_FUEL_TYPE: PropertyId = prop(0x0105, VehicleArea::Global, PropertyType::Int32Vec);
pub const INFO_EV_BATTERY_CAPACITY: PropertyId = prop(0x0106, VehicleArea::Global, PropertyType::Float);
pub const INFO_EV_CONNECTOR_TYPE: PropertyId = prop(0x0107, VehicleArea::Global, PropertyType::Int32Vec);
pub const INFO_FUEL_DOOR_LOCATION: PropertyId = prop(0x0108, VehicleArea::Global, PropertyType::Int32);
pub const INFO_EV_PORT_LOCATION: PropertyId = prop(0x0109, VehicleArea::Global, PropertyType::Int32);
pub const INFO_DRIVER_SEAT: PropertyId = prop(0x010A, VehicleArea::Seat, PropertyType::Int32);
pub const INFO_EXTERIOR_DIMENSIONS: PropertyId = prop(0x010B, VehicleArea::Global, PropertyType::Int32Vec);
pub const INFO_MULTI_EV_PORT_LOCATIONS: PropertyId = prop(0x010C, VehicleArea::Global, PropertyType::Int32Vec);
pub const INFO_MODEL_TRIM: PropertyId = prop(0x010D, VehicleArea::Global, PropertyType::String);
pub const INFO_VEHICLE_SIZE_CLASS: PropertyId = prop(0x010E, VehicleArea::Global, PropertyType::Int32Vec);

// ============================================================================
// Performance
// ============================================================================

pub const PERF_ODOMETER: PropertyId = prop(0x0204, VehicleArea::Global, PropertyType::Float);
pub const PERF_VEHICLE_SPEED: PropertyId = prop(0x0207, VehicleArea::Global, PropertyType::Float);
pub const PERF_VEHICLE_SPEED_DISPLAY: PropertyId = prop(0x0208, VehicleArea::Global, PropertyType::Float);
pub const PERF_STEERING_ANGLE: PropertyId = prop(0x0209, VehicleArea::Global, PropertyType::Float);
pub const PERF_REAR_STEERING_ANGLE: PropertyId = prop(0x0210, VehicleArea::Global, PropertyType::Float);
pub const INSTANTANEOUS_FUEL_ECONOMY: PropertyId = prop(0x0211, VehicleArea::Global, PropertyType::Float);
pub const INSTANTANEOUS_EV_EFFICIENCY: PropertyId = prop(0x0212, VehicleArea::Global, PropertyType::Float);

// ============================================================================
// Engine, fuel and battery
// ============================================================================

pub const ENGINE_COOLANT_TEMP: PropertyId = prop(0x0301, VehicleArea::Global, PropertyType::Float);
pub const ENGINE_OIL_LEVEL: PropertyId = prop(0x0303, VehicleArea::Global, PropertyType::Int32);
pub const ENGINE_OIL_TEMP: PropertyId = prop(0x0304, VehicleArea::Global, PropertyType::Float);
pub const ENGINE_RPM: PropertyId = prop(0x0305, VehicleArea::Global, PropertyType::Float);
pub const WHEEL_TICK: PropertyId = prop(0x0306, VehicleArea::Global, PropertyType::Int64Vec);
pub const FUEL_LEVEL: PropertyId = prop(0x0307, VehicleArea::Global, PropertyType::Float);
pub const FUEL_DOOR_OPEN: PropertyId = prop(0x0308, VehicleArea::Global, PropertyType::Boolean);
pub const EV_BATTERY_LEVEL: PropertyId = prop(0x0309, VehicleArea::Global, PropertyType::Float);
pub const EV_CURRENT_BATTERY_CAPACITY: PropertyId = prop(0x030D, VehicleArea::Global, PropertyType::Float);
pub const EV_CHARGE_PORT_OPEN: PropertyId = prop(0x030A, VehicleArea::Global, PropertyType::Boolean);
pub const EV_CHARGE_PORT_CONNECTED: PropertyId = prop(0x030B, VehicleArea::Global, PropertyType::Boolean);
pub const EV_BATTERY_INSTANTANEOUS_CHARGE_RATE: PropertyId = prop(0x030C, VehicleArea::Global, PropertyType::Float);
pub const RANGE_REMAINING: PropertyId = prop(0x0308, VehicleArea::Global, PropertyType::Float);
pub const EV_BATTERY_AVERAGE_TEMPERATURE: PropertyId = prop(0x030E, VehicleArea::Global, PropertyType::Float);
pub const TIRE_PRESSURE: PropertyId = prop(0x0309, VehicleArea::Wheel, PropertyType::Float);
pub const CRITICALLY_LOW_TIRE_PRESSURE: PropertyId = prop(0x030A, VehicleArea::Wheel, PropertyType::Float);
pub const ACCELERATOR_PEDAL_COMPRESSION_PERCENTAGE: PropertyId = prop(0x030F, VehicleArea::Global, PropertyType::Float);
pub const BRAKE_PEDAL_COMPRESSION_PERCENTAGE: PropertyId = prop(0x0310, VehicleArea::Global, PropertyType::Float);
pub const BRAKE_PAD_WEAR_PERCENTAGE: PropertyId = prop(0x0311, VehicleArea::Wheel, PropertyType::Float);
pub const BRAKE_FLUID_LEVEL_LOW: PropertyId = prop(0x0312, VehicleArea::Global, PropertyType::Boolean);
pub const VEHICLE_PASSIVE_SUSPENSION_HEIGHT: PropertyId = prop(0x0313, VehicleArea::Wheel, PropertyType::Int32);
pub const ENGINE_IDLE_AUTO_STOP_ENABLED: PropertyId = prop(0x0320, VehicleArea::Global, PropertyType::Boolean);
pub const IMPACT_DETECTED: PropertyId = prop(0x0330, VehicleArea::Global, PropertyType::Int32);
pub const VEHICLE_HORN_ENGAGED: PropertyId = prop(0x0340, VehicleArea::Global, PropertyType::Boolean);

// ============================================================================
// Drivetrain and chassis state
// ============================================================================

pub const GEAR_SELECTION: PropertyId = prop(0x0400, VehicleArea::Global, PropertyType::Int32);
pub const CURRENT_GEAR: PropertyId = prop(0x0401, VehicleArea::Global, PropertyType::Int32);
pub const PARKING_BRAKE_ON: PropertyId = prop(0x0402, VehicleArea::Global, PropertyType::Boolean);
pub const PARKING_BRAKE_AUTO_APPLY: PropertyId = prop(0x0403, VehicleArea::Global, PropertyType::Boolean);
pub const EV_BRAKE_REGENERATION_LEVEL: PropertyId = prop(0x040C, VehicleArea::Global, PropertyType::Int32);
pub const FUEL_LEVEL_LOW: PropertyId = prop(0x0405, VehicleArea::Global, PropertyType::Boolean);
pub const NIGHT_MODE: PropertyId = prop(0x0407, VehicleArea::Global, PropertyType::Boolean);
pub const TURN_SIGNAL_STATE: PropertyId = prop(0x0408, VehicleArea::Global, PropertyType::Int32);
pub const IGNITION_STATE: PropertyId = prop(0x0409, VehicleArea::Global, PropertyType::Int32);
pub const ABS_ACTIVE: PropertyId = prop(0x040A, VehicleArea::Global, PropertyType::Boolean);
pub const TRACTION_CONTROL_ACTIVE: PropertyId = prop(0x040B, VehicleArea::Global, PropertyType::Boolean);
pub const EV_STOPPING_MODE: PropertyId = prop(0x040D, VehicleArea::Global, PropertyType::Int32);
pub const ELECTRONIC_STABILITY_CONTROL_ENABLED: PropertyId = prop(0x040E, VehicleArea::Global, PropertyType::Boolean);
pub const ELECTRONIC_STABILITY_CONTROL_STATE: PropertyId = prop(0x040F, VehicleArea::Global, PropertyType::Int32);
pub const TURN_SIGNAL_LIGHT_STATE: PropertyId = prop(0x0410, VehicleArea::Global, PropertyType::Int32);
pub const TURN_SIGNAL_SWITCH: PropertyId = prop(0x0411, VehicleArea::Global, PropertyType::Int32);

// ============================================================================
// HVAC
// ============================================================================

pub const HVAC_FAN_SPEED: PropertyId = prop(0x0500, VehicleArea::Seat, PropertyType::Int32);
pub const HVAC_FAN_DIRECTION: PropertyId = prop(0x0501, VehicleArea::Seat, PropertyType::Int32);
pub const HVAC_TEMPERATURE_CURRENT: PropertyId = prop(0x0502, VehicleArea::Seat, PropertyType::Float);
pub const HVAC_TEMPERATURE_SET: PropertyId = prop(0x0503, VehicleArea::Seat, PropertyType::Float);
pub const HVAC_DEFROSTER: PropertyId = prop(0x0504, VehicleArea::Window, PropertyType::Boolean);
pub const HVAC_AC_ON: PropertyId = prop(0x0505, VehicleArea::Seat, PropertyType::Boolean);
pub const HVAC_MAX_AC_ON: PropertyId = prop(0x0506, VehicleArea::Seat, PropertyType::Boolean);
pub const HVAC_MAX_DEFROST_ON: PropertyId = prop(0x0507, VehicleArea::Seat, PropertyType::Boolean);
pub const HVAC_RECIRC_ON: PropertyId = prop(0x0508, VehicleArea::Seat, PropertyType::Boolean);
pub const HVAC_DUAL_ON: PropertyId = prop(0x0509, VehicleArea::Seat, PropertyType::Boolean);
pub const HVAC_AUTO_ON: PropertyId = prop(0x050A, VehicleArea::Seat, PropertyType::Boolean);
pub const HVAC_SEAT_TEMPERATURE: PropertyId = prop(0x050B, VehicleArea::Seat, PropertyType::Int32);
pub const HVAC_SIDE_MIRROR_HEAT: PropertyId = prop(0x050C, VehicleArea::Mirror, PropertyType::Int32);
pub const HVAC_STEERING_WHEEL_HEAT: PropertyId = prop(0x050D, VehicleArea::Global, PropertyType::Int32);
pub const HVAC_TEMPERATURE_DISPLAY_UNITS: PropertyId = prop(0x050E, VehicleArea::Global, PropertyType::Int32);
pub const HVAC_ACTUAL_FAN_SPEED_RPM: PropertyId = prop(0x050F, VehicleArea::Seat, PropertyType::Int32);
pub const HVAC_POWER_ON: PropertyId = prop(0x0510, VehicleArea::Seat, PropertyType::Boolean);
pub const HVAC_FAN_DIRECTION_AVAILABLE: PropertyId = prop(0x0511, VehicleArea::Seat, PropertyType::Int32Vec);
pub const HVAC_AUTO_RECIRC_ON: PropertyId = prop(0x0512, VehicleArea::Seat, PropertyType::Boolean);
pub const HVAC_SEAT_VENTILATION: PropertyId = prop(0x0513, VehicleArea::Seat, PropertyType::Int32);
pub const HVAC_ELECTRIC_DEFROSTER_ON: PropertyId = prop(0x0514, VehicleArea::Window, PropertyType::Boolean);
pub const HVAC_TEMPERATURE_VALUE_SUGGESTION: PropertyId = prop(0x0515, VehicleArea::Global, PropertyType::FloatVec);

// ============================================================================
// Display units and time
// ============================================================================

pub const DISTANCE_DISPLAY_UNITS: PropertyId = prop(0x0600, VehicleArea::Global, PropertyType::Int32);
pub const FUEL_VOLUME_DISPLAY_UNITS: PropertyId = prop(0x0601, VehicleArea::Global, PropertyType::Int32);
pub const TIRE_PRESSURE_DISPLAY_UNITS: PropertyId = prop(0x0602, VehicleArea::Global, PropertyType::Int32);
pub const EV_BATTERY_DISPLAY_UNITS: PropertyId = prop(0x0603, VehicleArea::Global, PropertyType::Int32);
pub const FUEL_CONSUMPTION_UNITS_DISTANCE_OVER_VOLUME: PropertyId = prop(0x0604, VehicleArea::Global, PropertyType::Boolean);
pub const VEHICLE_SPEED_DISPLAY_UNITS: PropertyId = prop(0x0605, VehicleArea::Global, PropertyType::Int32);
pub const EXTERNAL_CAR_TIME: PropertyId = prop(0x0608, VehicleArea::Global, PropertyType::Int64);
pub const ANDROID_EPOCH_TIME: PropertyId = prop(0x0606, VehicleArea::Global, PropertyType::Int64);
pub const STORAGE_ENCRYPTION_BINDING_SEED: PropertyId = prop(0x0607, VehicleArea::Global, PropertyType::Bytes);

// ============================================================================
// Environment
// ============================================================================

pub const ENV_OUTSIDE_TEMPERATURE: PropertyId = prop(0x0703, VehicleArea::Global, PropertyType::Float);

// ============================================================================
// Power management, display and input
// ============================================================================

pub const AP_POWER_STATE_REQ: PropertyId = prop(0x0A00, VehicleArea::Global, PropertyType::Int32Vec);
pub const AP_POWER_STATE_REPORT: PropertyId = prop(0x0A01, VehicleArea::Global, PropertyType::Int32Vec);
pub const AP_POWER_BOOTUP_REASON: PropertyId = prop(0x0A02, VehicleArea::Global, PropertyType::Int32);
pub const DISPLAY_BRIGHTNESS: PropertyId = prop(0x0A03, VehicleArea::Global, PropertyType::Int32);
pub const PER_DISPLAY_BRIGHTNESS: PropertyId = prop(0x0A04, VehicleArea::Global, PropertyType::Int32Vec);
pub const VALET_MODE_ENABLED: PropertyId = prop(0x0A05, VehicleArea::Global, PropertyType::Boolean);
pub const HEAD_UP_DISPLAY_ENABLED: PropertyId = prop(0x0A06, VehicleArea::Seat, PropertyType::Boolean);
pub const HW_KEY_INPUT: PropertyId = prop(0x0A10, VehicleArea::Global, PropertyType::Int32Vec);
pub const HW_KEY_INPUT_V2: PropertyId = prop(0x0A11, VehicleArea::Seat, PropertyType::Mixed);
pub const HW_MOTION_INPUT: PropertyId = prop(0x0A12, VehicleArea::Seat, PropertyType::Mixed);
pub const HW_ROTARY_INPUT: PropertyId = prop(0x0A20, VehicleArea::Global, PropertyType::Int32Vec);
pub const HW_CUSTOM_INPUT: PropertyId = prop(0x0A30, VehicleArea::Global, PropertyType::Int32Vec);

// ============================================================================
// Body: doors, mirrors, seats, windows, steering wheel
// ============================================================================

pub const DOOR_POS: PropertyId = prop(0x0B00, VehicleArea::Door, PropertyType::Int32);
pub const DOOR_MOVE: PropertyId = prop(0x0B01, VehicleArea::Door, PropertyType::Int32);
pub const DOOR_LOCK: PropertyId = prop(0x0B02, VehicleArea::Door, PropertyType::Boolean);
pub const DOOR_CHILD_LOCK_ENABLED: PropertyId = prop(0x0B03, VehicleArea::Door, PropertyType::Boolean);
pub const MIRROR_Z_POS: PropertyId = prop(0x0B40, VehicleArea::Mirror, PropertyType::Int32);
pub const MIRROR_Z_MOVE: PropertyId = prop(0x0B41, VehicleArea::Mirror, PropertyType::Int32);
pub const MIRROR_Y_POS: PropertyId = prop(0x0B42, VehicleArea::Mirror, PropertyType::Int32);
pub const MIRROR_Y_MOVE: PropertyId = prop(0x0B43, VehicleArea::Mirror, PropertyType::Int32);
pub const MIRROR_LOCK: PropertyId = prop(0x0B44, VehicleArea::Global, PropertyType::Boolean);
pub const MIRROR_FOLD: PropertyId = prop(0x0B45, VehicleArea::Global, PropertyType::Boolean);
pub const MIRROR_AUTO_FOLD_ENABLED: PropertyId = prop(0x0B46, VehicleArea::Mirror, PropertyType::Boolean);
pub const MIRROR_AUTO_TILT_ENABLED: PropertyId = prop(0x0B47, VehicleArea::Mirror, PropertyType::Boolean);
pub const SEAT_MEMORY_SELECT: PropertyId = prop(0x0B80, VehicleArea::Seat, PropertyType::Int32);
pub const SEAT_MEMORY_SET: PropertyId = prop(0x0B81, VehicleArea::Seat, PropertyType::Int32);
pub const SEAT_BELT_BUCKLED: PropertyId = prop(0x0B82, VehicleArea::Seat, PropertyType::Boolean);
pub const SEAT_BELT_HEIGHT_POS: PropertyId = prop(0x0B83, VehicleArea::Seat, PropertyType::Int32);
pub const SEAT_BELT_HEIGHT_MOVE: PropertyId = prop(0x0B84, VehicleArea::Seat, PropertyType::Int32);
pub const SEAT_FORE_AFT_POS: PropertyId = prop(0x0B85, VehicleArea::Seat, PropertyType::Int32);
pub const SEAT_FORE_AFT_MOVE: PropertyId = prop(0x0B86, VehicleArea::Seat, PropertyType::Int32);
pub const SEAT_BACKREST_ANGLE_1_POS: PropertyId = prop(0x0B87, VehicleArea::Seat, PropertyType::Int32);
pub const SEAT_BACKREST_ANGLE_1_MOVE: PropertyId = prop(0x0B88, VehicleArea::Seat, PropertyType::Int32);
pub const SEAT_BACKREST_ANGLE_2_POS: PropertyId = prop(0x0B89, VehicleArea::Seat, PropertyType::Int32);
pub const SEAT_BACKREST_ANGLE_2_MOVE: PropertyId = prop(0x0B8A, VehicleArea::Seat, PropertyType::Int32);
pub const SEAT_HEIGHT_POS: PropertyId = prop(0x0B8B, VehicleArea::Seat, PropertyType::Int32);
pub const SEAT_HEIGHT_MOVE: PropertyId = prop(0x0B8C, VehicleArea::Seat, PropertyType::Int32);
pub const SEAT_DEPTH_POS: PropertyId = prop(0x0B8D, VehicleArea::Seat, PropertyType::Int32);
pub const SEAT_DEPTH_MOVE: PropertyId = prop(0x0B8E, VehicleArea::Seat, PropertyType::Int32);
pub const SEAT_TILT_POS: PropertyId = prop(0x0B8F, VehicleArea::Seat, PropertyType::Int32);
pub const SEAT_TILT_MOVE: PropertyId = prop(0x0B90, VehicleArea::Seat, PropertyType::Int32);
pub const SEAT_LUMBAR_FORE_AFT_POS: PropertyId = prop(0x0B91, VehicleArea::Seat, PropertyType::Int32);
pub const SEAT_LUMBAR_FORE_AFT_MOVE: PropertyId = prop(0x0B92, VehicleArea::Seat, PropertyType::Int32);
pub const SEAT_LUMBAR_SIDE_SUPPORT_POS: PropertyId = prop(0x0B93, VehicleArea::Seat, PropertyType::Int32);
pub const SEAT_LUMBAR_SIDE_SUPPORT_MOVE: PropertyId = prop(0x0B94, VehicleArea::Seat, PropertyType::Int32);
pub const SEAT_HEADREST_HEIGHT_POS: PropertyId = prop(0x0B95, VehicleArea::Global, PropertyType::Int32);
pub const SEAT_HEADREST_HEIGHT_POS_V2: PropertyId = prop(0x0BA4, VehicleArea::Seat, PropertyType::Int32);
pub const SEAT_HEADREST_HEIGHT_MOVE: PropertyId = prop(0x0B96, VehicleArea::Seat, PropertyType::Int32);
pub const SEAT_HEADREST_ANGLE_POS: PropertyId = prop(0x0B97, VehicleArea::Seat, PropertyType::Int32);
pub const SEAT_HEADREST_ANGLE_MOVE: PropertyId = prop(0x0B98, VehicleArea::Seat, PropertyType::Int32);
pub const SEAT_HEADREST_FORE_AFT_POS: PropertyId = prop(0x0B99, VehicleArea::Seat, PropertyType::Int32);
pub const SEAT_HEADREST_FORE_AFT_MOVE: PropertyId = prop(0x0B9A, VehicleArea::Seat, PropertyType::Int32);
pub const SEAT_FOOTWELL_LIGHTS_STATE: PropertyId = prop(0x0B9B, VehicleArea::Seat, PropertyType::Int32);
pub const SEAT_FOOTWELL_LIGHTS_SWITCH: PropertyId = prop(0x0B9C, VehicleArea::Seat, PropertyType::Int32);
pub const SEAT_EASY_ACCESS_ENABLED: PropertyId = prop(0x0B9D, VehicleArea::Seat, PropertyType::Boolean);
pub const SEAT_AIRBAG_ENABLED: PropertyId = prop(0x0B9E, VehicleArea::Seat, PropertyType::Boolean);
pub const SEAT_AIRBAGS_DEPLOYED: PropertyId = prop(0x0BA5, VehicleArea::Seat, PropertyType::Int32);
pub const SEAT_CUSHION_SIDE_SUPPORT_POS: PropertyId = prop(0x0B9F, VehicleArea::Seat, PropertyType::Int32);
pub const SEAT_CUSHION_SIDE_SUPPORT_MOVE: PropertyId = prop(0x0BA0, VehicleArea::Seat, PropertyType::Int32);
pub const SEAT_LUMBAR_VERTICAL_POS: PropertyId = prop(0x0BA1, VehicleArea::Seat, PropertyType::Int32);
pub const SEAT_LUMBAR_VERTICAL_MOVE: PropertyId = prop(0x0BA2, VehicleArea::Seat, PropertyType::Int32);
pub const SEAT_WALK_IN_POS: PropertyId = prop(0x0BA3, VehicleArea::Seat, PropertyType::Int32);
pub const SEAT_BELT_PRETENSIONER_DEPLOYED: PropertyId = prop(0x0BA6, VehicleArea::Seat, PropertyType::Boolean);
pub const SEAT_OCCUPANCY: PropertyId = prop(0x0BB0, VehicleArea::Seat, PropertyType::Int32);
pub const WINDOW_POS: PropertyId = prop(0x0BC0, VehicleArea::Window, PropertyType::Int32);
pub const WINDOW_MOVE: PropertyId = prop(0x0BC1, VehicleArea::Window, PropertyType::Int32);
pub const WINDOW_LOCK: PropertyId = prop(0x0BC4, VehicleArea::Window, PropertyType::Boolean);
pub const WINDSHIELD_WIPERS_PERIOD: PropertyId = prop(0x0BC5, VehicleArea::Window, PropertyType::Int32);
pub const WINDSHIELD_WIPERS_STATE: PropertyId = prop(0x0BC6, VehicleArea::Window, PropertyType::Int32);
pub const WINDSHIELD_WIPERS_SWITCH: PropertyId = prop(0x0BC7, VehicleArea::Window, PropertyType::Int32);
pub const STEERING_WHEEL_DEPTH_POS: PropertyId = prop(0x0BE0, VehicleArea::Global, PropertyType::Int32);
pub const STEERING_WHEEL_DEPTH_MOVE: PropertyId = prop(0x0BE1, VehicleArea::Global, PropertyType::Int32);
pub const STEERING_WHEEL_HEIGHT_POS: PropertyId = prop(0x0BE2, VehicleArea::Global, PropertyType::Int32);
pub const STEERING_WHEEL_HEIGHT_MOVE: PropertyId = prop(0x0BE3, VehicleArea::Global, PropertyType::Int32);
pub const STEERING_WHEEL_THEFT_LOCK_ENABLED: PropertyId = prop(0x0BE4, VehicleArea::Global, PropertyType::Boolean);
pub const STEERING_WHEEL_LOCKED: PropertyId = prop(0x0BE5, VehicleArea::Global, PropertyType::Boolean);
pub const STEERING_WHEEL_EASY_ACCESS_ENABLED: PropertyId = prop(0x0BE6, VehicleArea::Global, PropertyType::Boolean);
pub const GLOVE_BOX_DOOR_POS: PropertyId = prop(0x0BF0, VehicleArea::Seat, PropertyType::Int32);
pub const GLOVE_BOX_LOCKED: PropertyId = prop(0x0BF1, VehicleArea::Seat, PropertyType::Boolean);

// ============================================================================
// Location and ultrasonic sensors
// ============================================================================

pub const VEHICLE_MAP_SERVICE: PropertyId = prop(0x0C00, VehicleArea::Global, PropertyType::Mixed);
pub const LOCATION_CHARACTERIZATION: PropertyId = prop(0x0C10, VehicleArea::Global, PropertyType::Int32);
pub const ULTRASONICS_SENSOR_POSITION: PropertyId = prop(0x0C20, VehicleArea::Vendor, PropertyType::Int32Vec);
pub const ULTRASONICS_SENSOR_ORIENTATION: PropertyId = prop(0x0C21, VehicleArea::Vendor, PropertyType::Int32Vec);
pub const ULTRASONICS_SENSOR_FIELD_OF_VIEW: PropertyId = prop(0x0C22, VehicleArea::Vendor, PropertyType::Int32Vec);
pub const ULTRASONICS_SENSOR_DETECTION_RANGE: PropertyId = prop(0x0C23, VehicleArea::Vendor, PropertyType::Int32Vec);
pub const ULTRASONICS_SENSOR_SUPPORTED_RANGES: PropertyId = prop(0x0C24, VehicleArea::Vendor, PropertyType::Int32Vec);
pub const ULTRASONICS_SENSOR_MEASURED_DISTANCE: PropertyId = prop(0x0C25, VehicleArea::Vendor, PropertyType::Int32Vec);

// ============================================================================
// OBD2 diagnostics
// ============================================================================

pub const OBD2_LIVE_FRAME: PropertyId = prop(0x0D00, VehicleArea::Global, PropertyType::Mixed);
pub const OBD2_FREEZE_FRAME: PropertyId = prop(0x0D01, VehicleArea::Global, PropertyType::Mixed);
pub const OBD2_FREEZE_FRAME_INFO: PropertyId = prop(0x0D02, VehicleArea::Global, PropertyType::Mixed);
pub const OBD2_FREEZE_FRAME_CLEAR: PropertyId = prop(0x0D03, VehicleArea::Global, PropertyType::Mixed);

// ============================================================================
// Exterior lights
// ============================================================================

pub const HEADLIGHTS_STATE: PropertyId = prop(0x0E00, VehicleArea::Global, PropertyType::Int32);
pub const HIGH_BEAM_LIGHTS_STATE: PropertyId = prop(0x0E01, VehicleArea::Global, PropertyType::Int32);
pub const FOG_LIGHTS_STATE: PropertyId = prop(0x0E02, VehicleArea::Global, PropertyType::Int32);
pub const HAZARD_LIGHTS_STATE: PropertyId = prop(0x0E03, VehicleArea::Global, PropertyType::Int32);
pub const HEADLIGHTS_SWITCH: PropertyId = prop(0x0E10, VehicleArea::Global, PropertyType::Int32);
pub const HIGH_BEAM_LIGHTS_SWITCH: PropertyId = prop(0x0E11, VehicleArea::Global, PropertyType::Int32);
pub const FOG_LIGHTS_SWITCH: PropertyId = prop(0x0E12, VehicleArea::Global, PropertyType::Int32);
pub const HAZARD_LIGHTS_SWITCH: PropertyId = prop(0x0E13, VehicleArea::Global, PropertyType::Int32);

// ============================================================================
// Cabin lights, users, power policy, cluster and EV charging
// ============================================================================

pub const CABIN_LIGHTS_STATE: PropertyId = prop(0x0F01, VehicleArea::Global, PropertyType::Int32);
pub const CABIN_LIGHTS_SWITCH: PropertyId = prop(0x0F02, VehicleArea::Global, PropertyType::Int32);
pub const READING_LIGHTS_STATE: PropertyId = prop(0x0F03, VehicleArea::Seat, PropertyType::Int32);
pub const READING_LIGHTS_SWITCH: PropertyId = prop(0x0F04, VehicleArea::Seat, PropertyType::Int32);
pub const STEERING_WHEEL_LIGHTS_STATE: PropertyId = prop(0x0F0C, VehicleArea::Global, PropertyType::Int32);
pub const STEERING_WHEEL_LIGHTS_SWITCH: PropertyId = prop(0x0F0D, VehicleArea::Global, PropertyType::Int32);
pub const SUPPORT_CUSTOMIZE_VENDOR_PERMISSION: PropertyId = prop(0x0F05, VehicleArea::Global, PropertyType::Boolean);
pub const DISABLED_OPTIONAL_FEATURES: PropertyId = prop(0x0F06, VehicleArea::Global, PropertyType::String);
pub const INITIAL_USER_INFO: PropertyId = prop(0x0F07, VehicleArea::Global, PropertyType::Mixed);
pub const SWITCH_USER: PropertyId = prop(0x0F08, VehicleArea::Global, PropertyType::Mixed);
pub const CREATE_USER: PropertyId = prop(0x0F09, VehicleArea::Global, PropertyType::Mixed);
pub const REMOVE_USER: PropertyId = prop(0x0F0A, VehicleArea::Global, PropertyType::Mixed);
pub const USER_IDENTIFICATION_ASSOCIATION: PropertyId = prop(0x0F0B, VehicleArea::Global, PropertyType::Mixed);
pub const EVS_SERVICE_REQUEST: PropertyId = prop(0x0F10, VehicleArea::Global, PropertyType::Int32Vec);
pub const POWER_POLICY_REQ: PropertyId = prop(0x0F21, VehicleArea::Global, PropertyType::String);
pub const POWER_POLICY_GROUP_REQ: PropertyId = prop(0x0F22, VehicleArea::Global, PropertyType::String);
pub const CURRENT_POWER_POLICY: PropertyId = prop(0x0F23, VehicleArea::Global, PropertyType::String);
pub const WATCHDOG_ALIVE: PropertyId = prop(0x0F31, VehicleArea::Global, PropertyType::Int64);
pub const WATCHDOG_TERMINATED_PROCESS: PropertyId = prop(0x0F32, VehicleArea::Global, PropertyType::Mixed);
pub const VHAL_HEARTBEAT: PropertyId = prop(0x0F33, VehicleArea::Global, PropertyType::Int64);
pub const CLUSTER_SWITCH_UI: PropertyId = prop(0x0F34, VehicleArea::Global, PropertyType::Int32);
pub const CLUSTER_DISPLAY_STATE: PropertyId = prop(0x0F35, VehicleArea::Global, PropertyType::Int32Vec);
pub const CLUSTER_REPORT_STATE: PropertyId = prop(0x0F36, VehicleArea::Global, PropertyType::Mixed);
pub const CLUSTER_REQUEST_DISPLAY: PropertyId = prop(0x0F37, VehicleArea::Global, PropertyType::Int32);
pub const CLUSTER_NAVIGATION_STATE: PropertyId = prop(0x0F38, VehicleArea::Global, PropertyType::Bytes);
pub const ELECTRONIC_TOLL_COLLECTION_CARD_TYPE: PropertyId = prop(0x0F39, VehicleArea::Global, PropertyType::Int32);
pub const ELECTRONIC_TOLL_COLLECTION_CARD_STATUS: PropertyId = prop(0x0F3A, VehicleArea::Global, PropertyType::Int32);
pub const FRONT_FOG_LIGHTS_STATE: PropertyId = prop(0x0F3B, VehicleArea::Global, PropertyType::Int32);
pub const FRONT_FOG_LIGHTS_SWITCH: PropertyId = prop(0x0F3C, VehicleArea::Global, PropertyType::Int32);
pub const REAR_FOG_LIGHTS_STATE: PropertyId = prop(0x0F3D, VehicleArea::Global, PropertyType::Int32);
pub const REAR_FOG_LIGHTS_SWITCH: PropertyId = prop(0x0F3E, VehicleArea::Global, PropertyType::Int32);
pub const EV_CHARGE_CURRENT_DRAW_LIMIT: PropertyId = prop(0x0F3F, VehicleArea::Global, PropertyType::Float);
pub const EV_CHARGE_PERCENT_LIMIT: PropertyId = prop(0x0F40, VehicleArea::Global, PropertyType::Float);
pub const EV_CHARGE_STATE: PropertyId = prop(0x0F41, VehicleArea::Global, PropertyType::Int32);
pub const EV_CHARGE_SWITCH: PropertyId = prop(0x0F42, VehicleArea::Global, PropertyType::Boolean);
pub const EV_CHARGE_TIME_REMAINING: PropertyId = prop(0x0F43, VehicleArea::Global, PropertyType::Int32);
pub const EV_REGENERATIVE_BRAKING_STATE: PropertyId = prop(0x0F44, VehicleArea::Global, PropertyType::Int32);
pub const TRAILER_PRESENT: PropertyId = prop(0x0F45, VehicleArea::Global, PropertyType::Int32);
pub const VEHICLE_CURB_WEIGHT: PropertyId = prop(0x0F46, VehicleArea::Global, PropertyType::Int32);
pub const GENERAL_SAFETY_REGULATION_COMPLIANCE_REQUIREMENT: PropertyId = prop(0x0F47, VehicleArea::Global, PropertyType::Int32);
pub const SUPPORTED_PROPERTY_IDS: PropertyId = prop(0x0F48, VehicleArea::Global, PropertyType::Int32Vec);
pub const SHUTDOWN_REQUEST: PropertyId = prop(0x0F49, VehicleArea::Global, PropertyType::Int32);
pub const VEHICLE_IN_USE: PropertyId = prop(0x0F4A, VehicleArea::Global, PropertyType::Boolean);
pub const CLUSTER_HEARTBEAT: PropertyId = prop(0x0F4B, VehicleArea::Global, PropertyType::Mixed);
pub const VEHICLE_DRIVING_AUTOMATION_CURRENT_LEVEL: PropertyId = prop(0x0F4C, VehicleArea::Global, PropertyType::Int32);
pub const VEHICLE_DRIVING_AUTOMATION_TARGET_LEVEL: PropertyId = prop(0x0F4D, VehicleArea::Global, PropertyType::Int32);
pub const CAMERA_SERVICE_CURRENT_STATE: PropertyId = prop(0x0F4E, VehicleArea::Global, PropertyType::Int32Vec);
pub const PER_DISPLAY_MAX_BRIGHTNESS: PropertyId = prop(0x0F4F, VehicleArea::Global, PropertyType::Int32Vec);

// ============================================================================
// Driver assistance
// ============================================================================

pub const AUTOMATIC_EMERGENCY_BRAKING_ENABLED: PropertyId = prop(0x1000, VehicleArea::Global, PropertyType::Boolean);
pub const AUTOMATIC_EMERGENCY_BRAKING_STATE: PropertyId = prop(0x1001, VehicleArea::Global, PropertyType::Int32);
pub const FORWARD_COLLISION_WARNING_ENABLED: PropertyId = prop(0x1002, VehicleArea::Global, PropertyType::Boolean);
pub const FORWARD_COLLISION_WARNING_STATE: PropertyId = prop(0x1003, VehicleArea::Global, PropertyType::Int32);
pub const BLIND_SPOT_WARNING_ENABLED: PropertyId = prop(0x1004, VehicleArea::Global, PropertyType::Boolean);
pub const BLIND_SPOT_WARNING_STATE: PropertyId = prop(0x1005, VehicleArea::Mirror, PropertyType::Int32);
pub const LANE_DEPARTURE_WARNING_ENABLED: PropertyId = prop(0x1006, VehicleArea::Global, PropertyType::Boolean);
pub const LANE_DEPARTURE_WARNING_STATE: PropertyId = prop(0x1007, VehicleArea::Global, PropertyType::Int32);
pub const LANE_KEEP_ASSIST_ENABLED: PropertyId = prop(0x1008, VehicleArea::Global, PropertyType::Boolean);
pub const LANE_KEEP_ASSIST_STATE: PropertyId = prop(0x1009, VehicleArea::Global, PropertyType::Int32);
pub const LANE_CENTERING_ASSIST_ENABLED: PropertyId = prop(0x100A, VehicleArea::Global, PropertyType::Boolean);
pub const LANE_CENTERING_ASSIST_COMMAND: PropertyId = prop(0x100B, VehicleArea::Global, PropertyType::Int32);
pub const LANE_CENTERING_ASSIST_STATE: PropertyId = prop(0x100C, VehicleArea::Global, PropertyType::Int32);
pub const EMERGENCY_LANE_KEEP_ASSIST_ENABLED: PropertyId = prop(0x100D, VehicleArea::Global, PropertyType::Boolean);
pub const EMERGENCY_LANE_KEEP_ASSIST_STATE: PropertyId = prop(0x100E, VehicleArea::Global, PropertyType::Int32);
pub const CRUISE_CONTROL_ENABLED: PropertyId = prop(0x100F, VehicleArea::Global, PropertyType::Boolean);
pub const CRUISE_CONTROL_TYPE: PropertyId = prop(0x1010, VehicleArea::Global, PropertyType::Int32);
pub const CRUISE_CONTROL_STATE: PropertyId = prop(0x1011, VehicleArea::Global, PropertyType::Int32);
pub const CRUISE_CONTROL_COMMAND: PropertyId = prop(0x1012, VehicleArea::Global, PropertyType::Int32);
pub const CRUISE_CONTROL_TARGET_SPEED: PropertyId = prop(0x1013, VehicleArea::Global, PropertyType::Float);
pub const ADAPTIVE_CRUISE_CONTROL_TARGET_TIME_GAP: PropertyId = prop(0x1014, VehicleArea::Global, PropertyType::Int32);
pub const ADAPTIVE_CRUISE_CONTROL_LEAD_VEHICLE_MEASURED_DISTANCE: PropertyId = prop(0x1015, VehicleArea::Global, PropertyType::Int32);
pub const HANDS_ON_DETECTION_ENABLED: PropertyId = prop(0x1016, VehicleArea::Global, PropertyType::Boolean);
pub const HANDS_ON_DETECTION_DRIVER_STATE: PropertyId = prop(0x1017, VehicleArea::Global, PropertyType::Int32);
pub const HANDS_ON_DETECTION_WARNING: PropertyId = prop(0x1018, VehicleArea::Global, PropertyType::Int32);
pub const DRIVER_DROWSINESS_ATTENTION_SYSTEM_ENABLED: PropertyId = prop(0x1019, VehicleArea::Global, PropertyType::Boolean);
pub const DRIVER_DROWSINESS_ATTENTION_STATE: PropertyId = prop(0x101A, VehicleArea::Global, PropertyType::Int32);
pub const DRIVER_DROWSINESS_ATTENTION_WARNING_ENABLED: PropertyId = prop(0x101B, VehicleArea::Global, PropertyType::Boolean);
pub const DRIVER_DROWSINESS_ATTENTION_WARNING: PropertyId = prop(0x101C, VehicleArea::Global, PropertyType::Int32);
pub const DRIVER_DISTRACTION_SYSTEM_ENABLED: PropertyId = prop(0x101D, VehicleArea::Global, PropertyType::Boolean);
pub const DRIVER_DISTRACTION_STATE: PropertyId = prop(0x101E, VehicleArea::Global, PropertyType::Int32);
pub const DRIVER_DISTRACTION_WARNING_ENABLED: PropertyId = prop(0x101F, VehicleArea::Global, PropertyType::Boolean);
pub const DRIVER_DISTRACTION_WARNING: PropertyId = prop(0x1020, VehicleArea::Global, PropertyType::Int32);
pub const LOW_SPEED_COLLISION_WARNING_ENABLED: PropertyId = prop(0x1021, VehicleArea::Global, PropertyType::Boolean);
pub const LOW_SPEED_COLLISION_WARNING_STATE: PropertyId = prop(0x1022, VehicleArea::Global, PropertyType::Int32);
pub const CROSS_TRAFFIC_MONITORING_ENABLED: PropertyId = prop(0x1023, VehicleArea::Global, PropertyType::Boolean);
pub const CROSS_TRAFFIC_MONITORING_WARNING_STATE: PropertyId = prop(0x1024, VehicleArea::Global, PropertyType::Int32);
pub const LOW_SPEED_AUTOMATIC_EMERGENCY_BRAKING_ENABLED: PropertyId = prop(0x1025, VehicleArea::Global, PropertyType::Boolean);
pub const LOW_SPEED_AUTOMATIC_EMERGENCY_BRAKING_STATE: PropertyId = prop(0x1026, VehicleArea::Global, PropertyType::Int32);

/// Every named property, in table order
pub const ALL: &[(&str, PropertyId)] = &[
    ("INFO_VIN", INFO_VIN),
    ("INFO_MAKE", INFO_MAKE),
    ("INFO_MODEL", INFO_MODEL),
    ("INFO_MODEL_YEAR", INFO_MODEL_YEAR),
    ("INFO_FUEL_CAPACITY", INFO_FUEL_CAPACITY),
    ("INFO_FUEL_TYPE", INFO_FUEL_TYPE),
    ("INFO_EV_BATTERY_CAPACITY", INFO_EV_BATTERY_CAPACITY),
    ("INFO_EV_CONNECTOR_TYPE", INFO_EV_CONNECTOR_TYPE),
    ("INFO_FUEL_DOOR_LOCATION", INFO_FUEL_DOOR_LOCATION),
    ("INFO_EV_PORT_LOCATION", INFO_EV_PORT_LOCATION),
    ("INFO_DRIVER_SEAT", INFO_DRIVER_SEAT),
    ("INFO_EXTERIOR_DIMENSIONS", INFO_EXTERIOR_DIMENSIONS),
    ("INFO_MULTI_EV_PORT_LOCATIONS", INFO_MULTI_EV_PORT_LOCATIONS),
    ("INFO_MODEL_TRIM", INFO_MODEL_TRIM),
    ("INFO_VEHICLE_SIZE_CLASS", INFO_VEHICLE_SIZE_CLASS),
    ("PERF_ODOMETER", PERF_ODOMETER),
    ("PERF_VEHICLE_SPEED", PERF_VEHICLE_SPEED),
    ("PERF_VEHICLE_SPEED_DISPLAY", PERF_VEHICLE_SPEED_DISPLAY),
    ("PERF_STEERING_ANGLE", PERF_STEERING_ANGLE),
    ("PERF_REAR_STEERING_ANGLE", PERF_REAR_STEERING_ANGLE),
    ("INSTANTANEOUS_FUEL_ECONOMY", INSTANTANEOUS_FUEL_ECONOMY),
    ("INSTANTANEOUS_EV_EFFICIENCY", INSTANTANEOUS_EV_EFFICIENCY),
    ("ENGINE_COOLANT_TEMP", ENGINE_COOLANT_TEMP),
    ("ENGINE_OIL_LEVEL", ENGINE_OIL_LEVEL),
    ("ENGINE_OIL_TEMP", ENGINE_OIL_TEMP),
    ("ENGINE_RPM", ENGINE_RPM),
    ("WHEEL_TICK", WHEEL_TICK),
    ("FUEL_LEVEL", FUEL_LEVEL),
    ("FUEL_DOOR_OPEN", FUEL_DOOR_OPEN),
    ("EV_BATTERY_LEVEL", EV_BATTERY_LEVEL),
    ("EV_CURRENT_BATTERY_CAPACITY", EV_CURRENT_BATTERY_CAPACITY),
    ("EV_CHARGE_PORT_OPEN", EV_CHARGE_PORT_OPEN),
    ("EV_CHARGE_PORT_CONNECTED", EV_CHARGE_PORT_CONNECTED),
    ("EV_BATTERY_INSTANTANEOUS_CHARGE_RATE", EV_BATTERY_INSTANTANEOUS_CHARGE_RATE),
    ("RANGE_REMAINING", RANGE_REMAINING),
    ("EV_BATTERY_AVERAGE_TEMPERATURE", EV_BATTERY_AVERAGE_TEMPERATURE),
    ("TIRE_PRESSURE", TIRE_PRESSURE),
    ("CRITICALLY_LOW_TIRE_PRESSURE", CRITICALLY_LOW_TIRE_PRESSURE),
    ("ACCELERATOR_PEDAL_COMPRESSION_PERCENTAGE", ACCELERATOR_PEDAL_COMPRESSION_PERCENTAGE),
    ("BRAKE_PEDAL_COMPRESSION_PERCENTAGE", BRAKE_PEDAL_COMPRESSION_PERCENTAGE),
    ("BRAKE_PAD_WEAR_PERCENTAGE", BRAKE_PAD_WEAR_PERCENTAGE),
    ("BRAKE_FLUID_LEVEL_LOW", BRAKE_FLUID_LEVEL_LOW),
    ("VEHICLE_PASSIVE_SUSPENSION_HEIGHT", VEHICLE_PASSIVE_SUSPENSION_HEIGHT),
    ("ENGINE_IDLE_AUTO_STOP_ENABLED", ENGINE_IDLE_AUTO_STOP_ENABLED),
    ("IMPACT_DETECTED", IMPACT_DETECTED),
    ("VEHICLE_HORN_ENGAGED", VEHICLE_HORN_ENGAGED),
    ("GEAR_SELECTION", GEAR_SELECTION),
    ("CURRENT_GEAR", CURRENT_GEAR),
    ("PARKING_BRAKE_ON", PARKING_BRAKE_ON),
    ("PARKING_BRAKE_AUTO_APPLY", PARKING_BRAKE_AUTO_APPLY),
    ("EV_BRAKE_REGENERATION_LEVEL", EV_BRAKE_REGENERATION_LEVEL),
    ("FUEL_LEVEL_LOW", FUEL_LEVEL_LOW),
    ("NIGHT_MODE", NIGHT_MODE),
    ("TURN_SIGNAL_STATE", TURN_SIGNAL_STATE),
    ("IGNITION_STATE", IGNITION_STATE),
    ("ABS_ACTIVE", ABS_ACTIVE),
    ("TRACTION_CONTROL_ACTIVE", TRACTION_CONTROL_ACTIVE),
    ("EV_STOPPING_MODE", EV_STOPPING_MODE),
    ("ELECTRONIC_STABILITY_CONTROL_ENABLED", ELECTRONIC_STABILITY_CONTROL_ENABLED),
    ("ELECTRONIC_STABILITY_CONTROL_STATE", ELECTRONIC_STABILITY_CONTROL_STATE),
    ("TURN_SIGNAL_LIGHT_STATE", TURN_SIGNAL_LIGHT_STATE),
    ("TURN_SIGNAL_SWITCH", TURN_SIGNAL_SWITCH),
    ("HVAC_FAN_SPEED", HVAC_FAN_SPEED),
    ("HVAC_FAN_DIRECTION", HVAC_FAN_DIRECTION),
    ("HVAC_TEMPERATURE_CURRENT", HVAC_TEMPERATURE_CURRENT),
    ("HVAC_TEMPERATURE_SET", HVAC_TEMPERATURE_SET),
    ("HVAC_DEFROSTER", HVAC_DEFROSTER),
    ("HVAC_AC_ON", HVAC_AC_ON),
    ("HVAC_MAX_AC_ON", HVAC_MAX_AC_ON),
    ("HVAC_MAX_DEFROST_ON", HVAC_MAX_DEFROST_ON),
    ("HVAC_RECIRC_ON", HVAC_RECIRC_ON),
    ("HVAC_DUAL_ON", HVAC_DUAL_ON),
    ("HVAC_AUTO_ON", HVAC_AUTO_ON),
    ("HVAC_SEAT_TEMPERATURE", HVAC_SEAT_TEMPERATURE),
    ("HVAC_SIDE_MIRROR_HEAT", HVAC_SIDE_MIRROR_HEAT),
    ("HVAC_STEERING_WHEEL_HEAT", HVAC_STEERING_WHEEL_HEAT),
    ("HVAC_TEMPERATURE_DISPLAY_UNITS", HVAC_TEMPERATURE_DISPLAY_UNITS),
    ("HVAC_ACTUAL_FAN_SPEED_RPM", HVAC_ACTUAL_FAN_SPEED_RPM),
    ("HVAC_POWER_ON", HVAC_POWER_ON),
    ("HVAC_FAN_DIRECTION_AVAILABLE", HVAC_FAN_DIRECTION_AVAILABLE),
    ("HVAC_AUTO_RECIRC_ON", HVAC_AUTO_RECIRC_ON),
    ("HVAC_SEAT_VENTILATION", HVAC_SEAT_VENTILATION),
    ("HVAC_ELECTRIC_DEFROSTER_ON", HVAC_ELECTRIC_DEFROSTER_ON),
    ("HVAC_TEMPERATURE_VALUE_SUGGESTION", HVAC_TEMPERATURE_VALUE_SUGGESTION),
    ("DISTANCE_DISPLAY_UNITS", DISTANCE_DISPLAY_UNITS),
    ("FUEL_VOLUME_DISPLAY_UNITS", FUEL_VOLUME_DISPLAY_UNITS),
    ("TIRE_PRESSURE_DISPLAY_UNITS", TIRE_PRESSURE_DISPLAY_UNITS),
    ("EV_BATTERY_DISPLAY_UNITS", EV_BATTERY_DISPLAY_UNITS),
    ("FUEL_CONSUMPTION_UNITS_DISTANCE_OVER_VOLUME", FUEL_CONSUMPTION_UNITS_DISTANCE_OVER_VOLUME),
    ("VEHICLE_SPEED_DISPLAY_UNITS", VEHICLE_SPEED_DISPLAY_UNITS),
    ("EXTERNAL_CAR_TIME", EXTERNAL_CAR_TIME),
    ("ANDROID_EPOCH_TIME", ANDROID_EPOCH_TIME),
    ("STORAGE_ENCRYPTION_BINDING_SEED", STORAGE_ENCRYPTION_BINDING_SEED),
    ("ENV_OUTSIDE_TEMPERATURE", ENV_OUTSIDE_TEMPERATURE),
    ("AP_POWER_STATE_REQ", AP_POWER_STATE_REQ),
    ("AP_POWER_STATE_REPORT", AP_POWER_STATE_REPORT),
    ("AP_POWER_BOOTUP_REASON", AP_POWER_BOOTUP_REASON),
    ("DISPLAY_BRIGHTNESS", DISPLAY_BRIGHTNESS),
    ("PER_DISPLAY_BRIGHTNESS", PER_DISPLAY_BRIGHTNESS),
    ("VALET_MODE_ENABLED", VALET_MODE_ENABLED),
    ("HEAD_UP_DISPLAY_ENABLED", HEAD_UP_DISPLAY_ENABLED),
    ("HW_KEY_INPUT", HW_KEY_INPUT),
    ("HW_KEY_INPUT_V2", HW_KEY_INPUT_V2),
    ("HW_MOTION_INPUT", HW_MOTION_INPUT),
    ("HW_ROTARY_INPUT", HW_ROTARY_INPUT),
    ("HW_CUSTOM_INPUT", HW_CUSTOM_INPUT),
    ("DOOR_POS", DOOR_POS),
    ("DOOR_MOVE", DOOR_MOVE),
    ("DOOR_LOCK", DOOR_LOCK),
    ("DOOR_CHILD_LOCK_ENABLED", DOOR_CHILD_LOCK_ENABLED),
    ("MIRROR_Z_POS", MIRROR_Z_POS),
    ("MIRROR_Z_MOVE", MIRROR_Z_MOVE),
    ("MIRROR_Y_POS", MIRROR_Y_POS),
    ("MIRROR_Y_MOVE", MIRROR_Y_MOVE),
    ("MIRROR_LOCK", MIRROR_LOCK),
    ("MIRROR_FOLD", MIRROR_FOLD),
    ("MIRROR_AUTO_FOLD_ENABLED", MIRROR_AUTO_FOLD_ENABLED),
    ("MIRROR_AUTO_TILT_ENABLED", MIRROR_AUTO_TILT_ENABLED),
    ("SEAT_MEMORY_SELECT", SEAT_MEMORY_SELECT),
    ("SEAT_MEMORY_SET", SEAT_MEMORY_SET),
    ("SEAT_BELT_BUCKLED", SEAT_BELT_BUCKLED),
    ("SEAT_BELT_HEIGHT_POS", SEAT_BELT_HEIGHT_POS),
    ("SEAT_BELT_HEIGHT_MOVE", SEAT_BELT_HEIGHT_MOVE),
    ("SEAT_FORE_AFT_POS", SEAT_FORE_AFT_POS),
    ("SEAT_FORE_AFT_MOVE", SEAT_FORE_AFT_MOVE),
    ("SEAT_BACKREST_ANGLE_1_POS", SEAT_BACKREST_ANGLE_1_POS),
    ("SEAT_BACKREST_ANGLE_1_MOVE", SEAT_BACKREST_ANGLE_1_MOVE),
    ("SEAT_BACKREST_ANGLE_2_POS", SEAT_BACKREST_ANGLE_2_POS),
    ("SEAT_BACKREST_ANGLE_2_MOVE", SEAT_BACKREST_ANGLE_2_MOVE),
    ("SEAT_HEIGHT_POS", SEAT_HEIGHT_POS),
    ("SEAT_HEIGHT_MOVE", SEAT_HEIGHT_MOVE),
    ("SEAT_DEPTH_POS", SEAT_DEPTH_POS),
    ("SEAT_DEPTH_MOVE", SEAT_DEPTH_MOVE),
    ("SEAT_TILT_POS", SEAT_TILT_POS),
    ("SEAT_TILT_MOVE", SEAT_TILT_MOVE),
    ("SEAT_LUMBAR_FORE_AFT_POS", SEAT_LUMBAR_FORE_AFT_POS),
    ("SEAT_LUMBAR_FORE_AFT_MOVE", SEAT_LUMBAR_FORE_AFT_MOVE),
    ("SEAT_LUMBAR_SIDE_SUPPORT_POS", SEAT_LUMBAR_SIDE_SUPPORT_POS),
    ("SEAT_LUMBAR_SIDE_SUPPORT_MOVE", SEAT_LUMBAR_SIDE_SUPPORT_MOVE),
    ("SEAT_HEADREST_HEIGHT_POS", SEAT_HEADREST_HEIGHT_POS),
    ("SEAT_HEADREST_HEIGHT_POS_V2", SEAT_HEADREST_HEIGHT_POS_V2),
    ("SEAT_HEADREST_HEIGHT_MOVE", SEAT_HEADREST_HEIGHT_MOVE),
    ("SEAT_HEADREST_ANGLE_POS", SEAT_HEADREST_ANGLE_POS),
    ("SEAT_HEADREST_ANGLE_MOVE", SEAT_HEADREST_ANGLE_MOVE),
    ("SEAT_HEADREST_FORE_AFT_POS", SEAT_HEADREST_FORE_AFT_POS),
    ("SEAT_HEADREST_FORE_AFT_MOVE", SEAT_HEADREST_FORE_AFT_MOVE),
    ("SEAT_FOOTWELL_LIGHTS_STATE", SEAT_FOOTWELL_LIGHTS_STATE),
    ("SEAT_FOOTWELL_LIGHTS_SWITCH", SEAT_FOOTWELL_LIGHTS_SWITCH),
    ("SEAT_EASY_ACCESS_ENABLED", SEAT_EASY_ACCESS_ENABLED),
    ("SEAT_AIRBAG_ENABLED", SEAT_AIRBAG_ENABLED),
    ("SEAT_AIRBAGS_DEPLOYED", SEAT_AIRBAGS_DEPLOYED),
    ("SEAT_CUSHION_SIDE_SUPPORT_POS", SEAT_CUSHION_SIDE_SUPPORT_POS),
    ("SEAT_CUSHION_SIDE_SUPPORT_MOVE", SEAT_CUSHION_SIDE_SUPPORT_MOVE),
    ("SEAT_LUMBAR_VERTICAL_POS", SEAT_LUMBAR_VERTICAL_POS),
    ("SEAT_LUMBAR_VERTICAL_MOVE", SEAT_LUMBAR_VERTICAL_MOVE),
    ("SEAT_WALK_IN_POS", SEAT_WALK_IN_POS),
    ("SEAT_BELT_PRETENSIONER_DEPLOYED", SEAT_BELT_PRETENSIONER_DEPLOYED),
    ("SEAT_OCCUPANCY", SEAT_OCCUPANCY),
    ("WINDOW_POS", WINDOW_POS),
    ("WINDOW_MOVE", WINDOW_MOVE),
    ("WINDOW_LOCK", WINDOW_LOCK),
    ("WINDSHIELD_WIPERS_PERIOD", WINDSHIELD_WIPERS_PERIOD),
    ("WINDSHIELD_WIPERS_STATE", WINDSHIELD_WIPERS_STATE),
    ("WINDSHIELD_WIPERS_SWITCH", WINDSHIELD_WIPERS_SWITCH),
    ("STEERING_WHEEL_DEPTH_POS", STEERING_WHEEL_DEPTH_POS),
    ("STEERING_WHEEL_DEPTH_MOVE", STEERING_WHEEL_DEPTH_MOVE),
    ("STEERING_WHEEL_HEIGHT_POS", STEERING_WHEEL_HEIGHT_POS),
    ("STEERING_WHEEL_HEIGHT_MOVE", STEERING_WHEEL_HEIGHT_MOVE),
    ("STEERING_WHEEL_THEFT_LOCK_ENABLED", STEERING_WHEEL_THEFT_LOCK_ENABLED),
    ("STEERING_WHEEL_LOCKED", STEERING_WHEEL_LOCKED),
    ("STEERING_WHEEL_EASY_ACCESS_ENABLED", STEERING_WHEEL_EASY_ACCESS_ENABLED),
    ("GLOVE_BOX_DOOR_POS", GLOVE_BOX_DOOR_POS),
    ("GLOVE_BOX_LOCKED", GLOVE_BOX_LOCKED),
    ("VEHICLE_MAP_SERVICE", VEHICLE_MAP_SERVICE),
    ("LOCATION_CHARACTERIZATION", LOCATION_CHARACTERIZATION),
    ("ULTRASONICS_SENSOR_POSITION", ULTRASONICS_SENSOR_POSITION),
    ("ULTRASONICS_SENSOR_ORIENTATION", ULTRASONICS_SENSOR_ORIENTATION),
    ("ULTRASONICS_SENSOR_FIELD_OF_VIEW", ULTRASONICS_SENSOR_FIELD_OF_VIEW),
    ("ULTRASONICS_SENSOR_DETECTION_RANGE", ULTRASONICS_SENSOR_DETECTION_RANGE),
    ("ULTRASONICS_SENSOR_SUPPORTED_RANGES", ULTRASONICS_SENSOR_SUPPORTED_RANGES),
    ("ULTRASONICS_SENSOR_MEASURED_DISTANCE", ULTRASONICS_SENSOR_MEASURED_DISTANCE),
    ("OBD2_LIVE_FRAME", OBD2_LIVE_FRAME),
    ("OBD2_FREEZE_FRAME", OBD2_FREEZE_FRAME),
    ("OBD2_FREEZE_FRAME_INFO", OBD2_FREEZE_FRAME_INFO),
    ("OBD2_FREEZE_FRAME_CLEAR", OBD2_FREEZE_FRAME_CLEAR),
    ("HEADLIGHTS_STATE", HEADLIGHTS_STATE),
    ("HIGH_BEAM_LIGHTS_STATE", HIGH_BEAM_LIGHTS_STATE),
    ("FOG_LIGHTS_STATE", FOG_LIGHTS_STATE),
    ("HAZARD_LIGHTS_STATE", HAZARD_LIGHTS_STATE),
    ("HEADLIGHTS_SWITCH", HEADLIGHTS_SWITCH),
    ("HIGH_BEAM_LIGHTS_SWITCH", HIGH_BEAM_LIGHTS_SWITCH),
    ("FOG_LIGHTS_SWITCH", FOG_LIGHTS_SWITCH),
    ("HAZARD_LIGHTS_SWITCH", HAZARD_LIGHTS_SWITCH),
    ("CABIN_LIGHTS_STATE", CABIN_LIGHTS_STATE),
    ("CABIN_LIGHTS_SWITCH", CABIN_LIGHTS_SWITCH),
    ("READING_LIGHTS_STATE", READING_LIGHTS_STATE),
    ("READING_LIGHTS_SWITCH", READING_LIGHTS_SWITCH),
    ("STEERING_WHEEL_LIGHTS_STATE", STEERING_WHEEL_LIGHTS_STATE),
    ("STEERING_WHEEL_LIGHTS_SWITCH", STEERING_WHEEL_LIGHTS_SWITCH),
    ("SUPPORT_CUSTOMIZE_VENDOR_PERMISSION", SUPPORT_CUSTOMIZE_VENDOR_PERMISSION),
    ("DISABLED_OPTIONAL_FEATURES", DISABLED_OPTIONAL_FEATURES),
    ("INITIAL_USER_INFO", INITIAL_USER_INFO),
    ("SWITCH_USER", SWITCH_USER),
    ("CREATE_USER", CREATE_USER),
    ("REMOVE_USER", REMOVE_USER),
    ("USER_IDENTIFICATION_ASSOCIATION", USER_IDENTIFICATION_ASSOCIATION),
    ("EVS_SERVICE_REQUEST", EVS_SERVICE_REQUEST),
    ("POWER_POLICY_REQ", POWER_POLICY_REQ),
    ("POWER_POLICY_GROUP_REQ", POWER_POLICY_GROUP_REQ),
    ("CURRENT_POWER_POLICY", CURRENT_POWER_POLICY),
    ("WATCHDOG_ALIVE", WATCHDOG_ALIVE),
    ("WATCHDOG_TERMINATED_PROCESS", WATCHDOG_TERMINATED_PROCESS),
    ("VHAL_HEARTBEAT", VHAL_HEARTBEAT),
    ("CLUSTER_SWITCH_UI", CLUSTER_SWITCH_UI),
    ("CLUSTER_DISPLAY_STATE", CLUSTER_DISPLAY_STATE),
    ("CLUSTER_REPORT_STATE", CLUSTER_REPORT_STATE),
    ("CLUSTER_REQUEST_DISPLAY", CLUSTER_REQUEST_DISPLAY),
    ("CLUSTER_NAVIGATION_STATE", CLUSTER_NAVIGATION_STATE),
    ("ELECTRONIC_TOLL_COLLECTION_CARD_TYPE", ELECTRONIC_TOLL_COLLECTION_CARD_TYPE),
    ("ELECTRONIC_TOLL_COLLECTION_CARD_STATUS", ELECTRONIC_TOLL_COLLECTION_CARD_STATUS),
    ("FRONT_FOG_LIGHTS_STATE", FRONT_FOG_LIGHTS_STATE),
    ("FRONT_FOG_LIGHTS_SWITCH", FRONT_FOG_LIGHTS_SWITCH),
    ("REAR_FOG_LIGHTS_STATE", REAR_FOG_LIGHTS_STATE),
    ("REAR_FOG_LIGHTS_SWITCH", REAR_FOG_LIGHTS_SWITCH),
    ("EV_CHARGE_CURRENT_DRAW_LIMIT", EV_CHARGE_CURRENT_DRAW_LIMIT),
    ("EV_CHARGE_PERCENT_LIMIT", EV_CHARGE_PERCENT_LIMIT),
    ("EV_CHARGE_STATE", EV_CHARGE_STATE),
    ("EV_CHARGE_SWITCH", EV_CHARGE_SWITCH),
    ("EV_CHARGE_TIME_REMAINING", EV_CHARGE_TIME_REMAINING),
    ("EV_REGENERATIVE_BRAKING_STATE", EV_REGENERATIVE_BRAKING_STATE),
    ("TRAILER_PRESENT", TRAILER_PRESENT),
    ("VEHICLE_CURB_WEIGHT", VEHICLE_CURB_WEIGHT),
    ("GENERAL_SAFETY_REGULATION_COMPLIANCE_REQUIREMENT", GENERAL_SAFETY_REGULATION_COMPLIANCE_REQUIREMENT),
    ("SUPPORTED_PROPERTY_IDS", SUPPORTED_PROPERTY_IDS),
    ("SHUTDOWN_REQUEST", SHUTDOWN_REQUEST),
    ("VEHICLE_IN_USE", VEHICLE_IN_USE),
    ("CLUSTER_HEARTBEAT", CLUSTER_HEARTBEAT),
    ("VEHICLE_DRIVING_AUTOMATION_CURRENT_LEVEL", VEHICLE_DRIVING_AUTOMATION_CURRENT_LEVEL),
    ("VEHICLE_DRIVING_AUTOMATION_TARGET_LEVEL", VEHICLE_DRIVING_AUTOMATION_TARGET_LEVEL),
    ("CAMERA_SERVICE_CURRENT_STATE", CAMERA_SERVICE_CURRENT_STATE),
    ("PER_DISPLAY_MAX_BRIGHTNESS", PER_DISPLAY_MAX_BRIGHTNESS),
    ("AUTOMATIC_EMERGENCY_BRAKING_ENABLED", AUTOMATIC_EMERGENCY_BRAKING_ENABLED),
    ("AUTOMATIC_EMERGENCY_BRAKING_STATE", AUTOMATIC_EMERGENCY_BRAKING_STATE),
    ("FORWARD_COLLISION_WARNING_ENABLED", FORWARD_COLLISION_WARNING_ENABLED),
    ("FORWARD_COLLISION_WARNING_STATE", FORWARD_COLLISION_WARNING_STATE),
    ("BLIND_SPOT_WARNING_ENABLED", BLIND_SPOT_WARNING_ENABLED),
    ("BLIND_SPOT_WARNING_STATE", BLIND_SPOT_WARNING_STATE),
    ("LANE_DEPARTURE_WARNING_ENABLED", LANE_DEPARTURE_WARNING_ENABLED),
    ("LANE_DEPARTURE_WARNING_STATE", LANE_DEPARTURE_WARNING_STATE),
    ("LANE_KEEP_ASSIST_ENABLED", LANE_KEEP_ASSIST_ENABLED),
    ("LANE_KEEP_ASSIST_STATE", LANE_KEEP_ASSIST_STATE),
    ("LANE_CENTERING_ASSIST_ENABLED", LANE_CENTERING_ASSIST_ENABLED),
    ("LANE_CENTERING_ASSIST_COMMAND", LANE_CENTERING_ASSIST_COMMAND),
    ("LANE_CENTERING_ASSIST_STATE", LANE_CENTERING_ASSIST_STATE),
    ("EMERGENCY_LANE_KEEP_ASSIST_ENABLED", EMERGENCY_LANE_KEEP_ASSIST_ENABLED),
    ("EMERGENCY_LANE_KEEP_ASSIST_STATE", EMERGENCY_LANE_KEEP_ASSIST_STATE),
    ("CRUISE_CONTROL_ENABLED", CRUISE_CONTROL_ENABLED),
    ("CRUISE_CONTROL_TYPE", CRUISE_CONTROL_TYPE),
    ("CRUISE_CONTROL_STATE", CRUISE_CONTROL_STATE),
    ("CRUISE_CONTROL_COMMAND", CRUISE_CONTROL_COMMAND),
    ("CRUISE_CONTROL_TARGET_SPEED", CRUISE_CONTROL_TARGET_SPEED),
    ("ADAPTIVE_CRUISE_CONTROL_TARGET_TIME_GAP", ADAPTIVE_CRUISE_CONTROL_TARGET_TIME_GAP),
    ("ADAPTIVE_CRUISE_CONTROL_LEAD_VEHICLE_MEASURED_DISTANCE", ADAPTIVE_CRUISE_CONTROL_LEAD_VEHICLE_MEASURED_DISTANCE),
    ("HANDS_ON_DETECTION_ENABLED", HANDS_ON_DETECTION_ENABLED),
    ("HANDS_ON_DETECTION_DRIVER_STATE", HANDS_ON_DETECTION_DRIVER_STATE),
    ("HANDS_ON_DETECTION_WARNING", HANDS_ON_DETECTION_WARNING),
    ("DRIVER_DROWSINESS_ATTENTION_SYSTEM_ENABLED", DRIVER_DROWSINESS_ATTENTION_SYSTEM_ENABLED),
    ("DRIVER_DROWSINESS_ATTENTION_STATE", DRIVER_DROWSINESS_ATTENTION_STATE),
    ("DRIVER_DROWSINESS_ATTENTION_WARNING_ENABLED", DRIVER_DROWSINESS_ATTENTION_WARNING_ENABLED),
    ("DRIVER_DROWSINESS_ATTENTION_WARNING", DRIVER_DROWSINESS_ATTENTION_WARNING),
    ("DRIVER_DISTRACTION_SYSTEM_ENABLED", DRIVER_DISTRACTION_SYSTEM_ENABLED),
    ("DRIVER_DISTRACTION_STATE", DRIVER_DISTRACTION_STATE),
    ("DRIVER_DISTRACTION_WARNING_ENABLED", DRIVER_DISTRACTION_WARNING_ENABLED),
    ("DRIVER_DISTRACTION_WARNING", DRIVER_DISTRACTION_WARNING),
    ("LOW_SPEED_COLLISION_WARNING_ENABLED", LOW_SPEED_COLLISION_WARNING_ENABLED),
    ("LOW_SPEED_COLLISION_WARNING_STATE", LOW_SPEED_COLLISION_WARNING_STATE),
    ("CROSS_TRAFFIC_MONITORING_ENABLED", CROSS_TRAFFIC_MONITORING_ENABLED),
    ("CROSS_TRAFFIC_MONITORING_WARNING_STATE", CROSS_TRAFFIC_MONITORING_WARNING_STATE),
    ("LOW_SPEED_AUTOMATIC_EMERGENCY_BRAKING_ENABLED", LOW_SPEED_AUTOMATIC_EMERGENCY_BRAKING_ENABLED),
    ("LOW_SPEED_AUTOMATIC_EMERGENCY_BRAKING_STATE", LOW_SPEED_AUTOMATIC_EMERGENCY_BRAKING_STATE),
];

/// Name of a system property, if it is one of the named constants
pub fn name_of(id: PropertyId) -> Option<&'static str> {
    ALL.iter().find(|(_, known)| *known == id).map(|(name, _)| *name)
}

/// Look up a property id by name (case insensitive)
pub fn by_name(name: &str) -> Option<PropertyId> {
    let name = name.trim();
    ALL.iter()
        .find(|(known, _)| known.eq_ignore_ascii_case(name))
        .map(|(_, id)| *id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_well_known_ids() {
        assert_eq!(INFO_VIN.raw(), 0x1110_0100);
        assert_eq!(PERF_ODOMETER.raw(), 0x1160_0204);
        assert_eq!(PERF_VEHICLE_SPEED.raw(), 0x1160_0207);
        assert_eq!(DOOR_LOCK.raw(), 0x1620_0B02);
        assert_eq!(HVAC_FAN_SPEED.raw(), 0x1540_0500);
        assert_eq!(TIRE_PRESSURE.raw(), 0x1760_0309);
    }

    #[test]
    fn test_ids_and_names_are_unique() {
        let ids: HashSet<PropertyId> = ALL.iter().map(|(_, id)| *id).collect();
        let names: HashSet<&str> = ALL.iter().map(|(name, _)| *name).collect();
        assert_eq!(ids.len(), ALL.len());
        assert_eq!(names.len(), ALL.len());
    }

    #[test]
    fn test_name_lookup() {
        assert_eq!(name_of(ENGINE_RPM), Some("ENGINE_RPM"));
        assert_eq!(name_of(PropertyId::new(0x3120_0001)), None);

        assert_eq!(by_name("ENGINE_RPM"), Some(ENGINE_RPM));
        assert_eq!(by_name("  door_lock "), Some(DOOR_LOCK));
        assert_eq!(by_name("NOT_A_PROPERTY"), None);
    }

    #[test]
    fn test_shared_index_distinct_ids() {
        // Same index, told apart by value type or area
        assert_eq!(FUEL_DOOR_OPEN.index(), RANGE_REMAINING.index());
        assert_ne!(FUEL_DOOR_OPEN, RANGE_REMAINING);
        assert_eq!(EV_BATTERY_LEVEL.index(), TIRE_PRESSURE.index());
        assert_ne!(EV_BATTERY_LEVEL, TIRE_PRESSURE);
    }
}

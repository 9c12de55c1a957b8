//! Generated change-mode table
//!
//! DO NOT EDIT MANUALLY. Regenerate from the vehicle property definitions.
//!
//! Entries are kept in generator order so the file diffs cleanly against
//! the generator's output.

use crate::property::PropertyId;
use crate::types::ChangeMode;
use crate::vehicle_property::*;

/// (property, change mode) pairs for every system property
#[rustfmt::skip]
pub const CHANGE_MODE_TABLE: &[(PropertyId, ChangeMode)] = &[
    (INFO_VIN, ChangeMode::Static),
    (INFO_MAKE, ChangeMode::Static),
    (INFO_MODEL, ChangeMode::Static),
    (INFO_MODEL_YEAR, ChangeMode::Static),
    (INFO_FUEL_CAPACITY, ChangeMode::Static),
    (INFO_FUEL_TYPE, ChangeMode::Static),
    (INFO_EV_BATTERY_CAPACITY, ChangeMode::Static),
    (INFO_EV_CONNECTOR_TYPE, ChangeMode::Static),
    (INFO_FUEL_DOOR_LOCATION, ChangeMode::Static),
    (INFO_EV_PORT_LOCATION, ChangeMode::Static),
    (INFO_DRIVER_SEAT, ChangeMode::Static),
    (INFO_EXTERIOR_DIMENSIONS, ChangeMode::Static),
    (INFO_MULTI_EV_PORT_LOCATIONS, ChangeMode::Static),
    (INFO_MODEL_TRIM, ChangeMode::Static),
    (INFO_VEHICLE_SIZE_CLASS, ChangeMode::Static),
    (PERF_ODOMETER, ChangeMode::Continuous),
    (PERF_VEHICLE_SPEED, ChangeMode::Continuous),
    (PERF_VEHICLE_SPEED_DISPLAY, ChangeMode::Continuous),
    (PERF_STEERING_ANGLE, ChangeMode::Continuous),
    (PERF_REAR_STEERING_ANGLE, ChangeMode::Continuous),
    (INSTANTANEOUS_FUEL_ECONOMY, ChangeMode::Continuous),
    (INSTANTANEOUS_EV_EFFICIENCY, ChangeMode::Continuous),
    (ENGINE_COOLANT_TEMP, ChangeMode::Continuous),
    (ENGINE_OIL_LEVEL, ChangeMode::OnChange),
    (ENGINE_OIL_TEMP, ChangeMode::Continuous),
    (ENGINE_RPM, ChangeMode::Continuous),
    (WHEEL_TICK, ChangeMode::Continuous),
    (FUEL_LEVEL, ChangeMode::Continuous),
    (FUEL_DOOR_OPEN, ChangeMode::OnChange),
    (EV_BATTERY_LEVEL, ChangeMode::Continuous),
    (EV_CURRENT_BATTERY_CAPACITY, ChangeMode::OnChange),
    (EV_CHARGE_PORT_OPEN, ChangeMode::OnChange),
    (EV_CHARGE_PORT_CONNECTED, ChangeMode::OnChange),
    (EV_BATTERY_INSTANTANEOUS_CHARGE_RATE, ChangeMode::Continuous),
    (RANGE_REMAINING, ChangeMode::Continuous),
    (EV_BATTERY_AVERAGE_TEMPERATURE, ChangeMode::Continuous),
    (TIRE_PRESSURE, ChangeMode::Continuous),
    (CRITICALLY_LOW_TIRE_PRESSURE, ChangeMode::Static),
    (ACCELERATOR_PEDAL_COMPRESSION_PERCENTAGE, ChangeMode::Continuous),
    (BRAKE_PEDAL_COMPRESSION_PERCENTAGE, ChangeMode::Continuous),
    (BRAKE_PAD_WEAR_PERCENTAGE, ChangeMode::OnChange),
    (BRAKE_FLUID_LEVEL_LOW, ChangeMode::OnChange),
    (VEHICLE_PASSIVE_SUSPENSION_HEIGHT, ChangeMode::Continuous),
    (ENGINE_IDLE_AUTO_STOP_ENABLED, ChangeMode::OnChange),
    (IMPACT_DETECTED, ChangeMode::OnChange),
    (VEHICLE_HORN_ENGAGED, ChangeMode::OnChange),
    (GEAR_SELECTION, ChangeMode::OnChange),
    (CURRENT_GEAR, ChangeMode::OnChange),
    (PARKING_BRAKE_ON, ChangeMode::OnChange),
    (PARKING_BRAKE_AUTO_APPLY, ChangeMode::OnChange),
    (EV_BRAKE_REGENERATION_LEVEL, ChangeMode::OnChange),
    (FUEL_LEVEL_LOW, ChangeMode::OnChange),
    (NIGHT_MODE, ChangeMode::OnChange),
    (TURN_SIGNAL_STATE, ChangeMode::OnChange),
    (IGNITION_STATE, ChangeMode::OnChange),
    (ABS_ACTIVE, ChangeMode::OnChange),
    (TRACTION_CONTROL_ACTIVE, ChangeMode::OnChange),
    (EV_STOPPING_MODE, ChangeMode::OnChange),
    (ELECTRONIC_STABILITY_CONTROL_ENABLED, ChangeMode::OnChange),
    (ELECTRONIC_STABILITY_CONTROL_STATE, ChangeMode::OnChange),
    (TURN_SIGNAL_LIGHT_STATE, ChangeMode::OnChange),
    (TURN_SIGNAL_SWITCH, ChangeMode::OnChange),
    (HVAC_FAN_SPEED, ChangeMode::OnChange),
    (HVAC_FAN_DIRECTION, ChangeMode::OnChange),
    (HVAC_TEMPERATURE_CURRENT, ChangeMode::OnChange),
    (HVAC_TEMPERATURE_SET, ChangeMode::OnChange),
    (HVAC_DEFROSTER, ChangeMode::OnChange),
    (HVAC_AC_ON, ChangeMode::OnChange),
    (HVAC_MAX_AC_ON, ChangeMode::OnChange),
    (HVAC_MAX_DEFROST_ON, ChangeMode::OnChange),
    (HVAC_RECIRC_ON, ChangeMode::OnChange),
    (HVAC_DUAL_ON, ChangeMode::OnChange),
    (HVAC_AUTO_ON, ChangeMode::OnChange),
    (HVAC_SEAT_TEMPERATURE, ChangeMode::OnChange),
    (HVAC_SIDE_MIRROR_HEAT, ChangeMode::OnChange),
    (HVAC_STEERING_WHEEL_HEAT, ChangeMode::OnChange),
    (HVAC_TEMPERATURE_DISPLAY_UNITS, ChangeMode::OnChange),
    (HVAC_ACTUAL_FAN_SPEED_RPM, ChangeMode::OnChange),
    (HVAC_POWER_ON, ChangeMode::OnChange),
    (HVAC_FAN_DIRECTION_AVAILABLE, ChangeMode::Static),
    (HVAC_AUTO_RECIRC_ON, ChangeMode::OnChange),
    (HVAC_SEAT_VENTILATION, ChangeMode::OnChange),
    (HVAC_ELECTRIC_DEFROSTER_ON, ChangeMode::OnChange),
    (HVAC_TEMPERATURE_VALUE_SUGGESTION, ChangeMode::OnChange),
    (DISTANCE_DISPLAY_UNITS, ChangeMode::OnChange),
    (FUEL_VOLUME_DISPLAY_UNITS, ChangeMode::OnChange),
    (TIRE_PRESSURE_DISPLAY_UNITS, ChangeMode::OnChange),
    (EV_BATTERY_DISPLAY_UNITS, ChangeMode::OnChange),
    (FUEL_CONSUMPTION_UNITS_DISTANCE_OVER_VOLUME, ChangeMode::OnChange),
    (VEHICLE_SPEED_DISPLAY_UNITS, ChangeMode::OnChange),
    (EXTERNAL_CAR_TIME, ChangeMode::OnChange),
    (ANDROID_EPOCH_TIME, ChangeMode::OnChange),
    (STORAGE_ENCRYPTION_BINDING_SEED, ChangeMode::OnChange),
    (ENV_OUTSIDE_TEMPERATURE, ChangeMode::Continuous),
    (AP_POWER_STATE_REQ, ChangeMode::OnChange),
    (AP_POWER_STATE_REPORT, ChangeMode::OnChange),
    (AP_POWER_BOOTUP_REASON, ChangeMode::Static),
    (DISPLAY_BRIGHTNESS, ChangeMode::OnChange),
    (PER_DISPLAY_BRIGHTNESS, ChangeMode::OnChange),
    (VALET_MODE_ENABLED, ChangeMode::OnChange),
    (HEAD_UP_DISPLAY_ENABLED, ChangeMode::OnChange),
    (HW_KEY_INPUT, ChangeMode::OnChange),
    (HW_KEY_INPUT_V2, ChangeMode::OnChange),
    (HW_MOTION_INPUT, ChangeMode::OnChange),
    (HW_ROTARY_INPUT, ChangeMode::OnChange),
    (HW_CUSTOM_INPUT, ChangeMode::OnChange),
    (DOOR_POS, ChangeMode::OnChange),
    (DOOR_MOVE, ChangeMode::OnChange),
    (DOOR_LOCK, ChangeMode::OnChange),
    (DOOR_CHILD_LOCK_ENABLED, ChangeMode::OnChange),
    (MIRROR_Z_POS, ChangeMode::OnChange),
    (MIRROR_Z_MOVE, ChangeMode::OnChange),
    (MIRROR_Y_POS, ChangeMode::OnChange),
    (MIRROR_Y_MOVE, ChangeMode::OnChange),
    (MIRROR_LOCK, ChangeMode::OnChange),
    (MIRROR_FOLD, ChangeMode::OnChange),
    (MIRROR_AUTO_FOLD_ENABLED, ChangeMode::OnChange),
    (MIRROR_AUTO_TILT_ENABLED, ChangeMode::OnChange),
    (SEAT_MEMORY_SELECT, ChangeMode::OnChange),
    (SEAT_MEMORY_SET, ChangeMode::OnChange),
    (SEAT_BELT_BUCKLED, ChangeMode::OnChange),
    (SEAT_BELT_HEIGHT_POS, ChangeMode::OnChange),
    (SEAT_BELT_HEIGHT_MOVE, ChangeMode::OnChange),
    (SEAT_FORE_AFT_POS, ChangeMode::OnChange),
    (SEAT_FORE_AFT_MOVE, ChangeMode::OnChange),
    (SEAT_BACKREST_ANGLE_1_POS, ChangeMode::OnChange),
    (SEAT_BACKREST_ANGLE_1_MOVE, ChangeMode::OnChange),
    (SEAT_BACKREST_ANGLE_2_POS, ChangeMode::OnChange),
    (SEAT_BACKREST_ANGLE_2_MOVE, ChangeMode::OnChange),
    (SEAT_HEIGHT_POS, ChangeMode::OnChange),
    (SEAT_HEIGHT_MOVE, ChangeMode::OnChange),
    (SEAT_DEPTH_POS, ChangeMode::OnChange),
    (SEAT_DEPTH_MOVE, ChangeMode::OnChange),
    (SEAT_TILT_POS, ChangeMode::OnChange),
    (SEAT_TILT_MOVE, ChangeMode::OnChange),
    (SEAT_LUMBAR_FORE_AFT_POS, ChangeMode::OnChange),
    (SEAT_LUMBAR_FORE_AFT_MOVE, ChangeMode::OnChange),
    (SEAT_LUMBAR_SIDE_SUPPORT_POS, ChangeMode::OnChange),
    (SEAT_LUMBAR_SIDE_SUPPORT_MOVE, ChangeMode::OnChange),
    (SEAT_HEADREST_HEIGHT_POS, ChangeMode::OnChange),
    (SEAT_HEADREST_HEIGHT_POS_V2, ChangeMode::OnChange),
    (SEAT_HEADREST_HEIGHT_MOVE, ChangeMode::OnChange),
    (SEAT_HEADREST_ANGLE_POS, ChangeMode::OnChange),
    (SEAT_HEADREST_ANGLE_MOVE, ChangeMode::OnChange),
    (SEAT_HEADREST_FORE_AFT_POS, ChangeMode::OnChange),
    (SEAT_HEADREST_FORE_AFT_MOVE, ChangeMode::OnChange),
    (SEAT_FOOTWELL_LIGHTS_STATE, ChangeMode::OnChange),
    (SEAT_FOOTWELL_LIGHTS_SWITCH, ChangeMode::OnChange),
    (SEAT_EASY_ACCESS_ENABLED, ChangeMode::OnChange),
    (SEAT_AIRBAG_ENABLED, ChangeMode::OnChange),
    (SEAT_AIRBAGS_DEPLOYED, ChangeMode::OnChange),
    (SEAT_CUSHION_SIDE_SUPPORT_POS, ChangeMode::OnChange),
    (SEAT_CUSHION_SIDE_SUPPORT_MOVE, ChangeMode::OnChange),
    (SEAT_LUMBAR_VERTICAL_POS, ChangeMode::OnChange),
    (SEAT_LUMBAR_VERTICAL_MOVE, ChangeMode::OnChange),
    (SEAT_WALK_IN_POS, ChangeMode::OnChange),
    (SEAT_BELT_PRETENSIONER_DEPLOYED, ChangeMode::OnChange),
    (SEAT_OCCUPANCY, ChangeMode::OnChange),
    (WINDOW_POS, ChangeMode::OnChange),
    (WINDOW_MOVE, ChangeMode::OnChange),
    (WINDOW_LOCK, ChangeMode::OnChange),
    (WINDSHIELD_WIPERS_PERIOD, ChangeMode::OnChange),
    (WINDSHIELD_WIPERS_STATE, ChangeMode::OnChange),
    (WINDSHIELD_WIPERS_SWITCH, ChangeMode::OnChange),
    (STEERING_WHEEL_DEPTH_POS, ChangeMode::OnChange),
    (STEERING_WHEEL_DEPTH_MOVE, ChangeMode::OnChange),
    (STEERING_WHEEL_HEIGHT_POS, ChangeMode::OnChange),
    (STEERING_WHEEL_HEIGHT_MOVE, ChangeMode::OnChange),
    (STEERING_WHEEL_THEFT_LOCK_ENABLED, ChangeMode::OnChange),
    (STEERING_WHEEL_LOCKED, ChangeMode::OnChange),
    (STEERING_WHEEL_EASY_ACCESS_ENABLED, ChangeMode::OnChange),
    (GLOVE_BOX_DOOR_POS, ChangeMode::OnChange),
    (GLOVE_BOX_LOCKED, ChangeMode::OnChange),
    (VEHICLE_MAP_SERVICE, ChangeMode::OnChange),
    (LOCATION_CHARACTERIZATION, ChangeMode::Static),
    (ULTRASONICS_SENSOR_POSITION, ChangeMode::Static),
    (ULTRASONICS_SENSOR_ORIENTATION, ChangeMode::Static),
    (ULTRASONICS_SENSOR_FIELD_OF_VIEW, ChangeMode::Static),
    (ULTRASONICS_SENSOR_DETECTION_RANGE, ChangeMode::Static),
    (ULTRASONICS_SENSOR_SUPPORTED_RANGES, ChangeMode::Static),
    (ULTRASONICS_SENSOR_MEASURED_DISTANCE, ChangeMode::Continuous),
    (OBD2_LIVE_FRAME, ChangeMode::OnChange),
    (OBD2_FREEZE_FRAME, ChangeMode::OnChange),
    (OBD2_FREEZE_FRAME_INFO, ChangeMode::OnChange),
    (OBD2_FREEZE_FRAME_CLEAR, ChangeMode::OnChange),
    (HEADLIGHTS_STATE, ChangeMode::OnChange),
    (HIGH_BEAM_LIGHTS_STATE, ChangeMode::OnChange),
    (FOG_LIGHTS_STATE, ChangeMode::OnChange),
    (HAZARD_LIGHTS_STATE, ChangeMode::OnChange),
    (HEADLIGHTS_SWITCH, ChangeMode::OnChange),
    (HIGH_BEAM_LIGHTS_SWITCH, ChangeMode::OnChange),
    (FOG_LIGHTS_SWITCH, ChangeMode::OnChange),
    (HAZARD_LIGHTS_SWITCH, ChangeMode::OnChange),
    (CABIN_LIGHTS_STATE, ChangeMode::OnChange),
    (CABIN_LIGHTS_SWITCH, ChangeMode::OnChange),
    (READING_LIGHTS_STATE, ChangeMode::OnChange),
    (READING_LIGHTS_SWITCH, ChangeMode::OnChange),
    (STEERING_WHEEL_LIGHTS_STATE, ChangeMode::OnChange),
    (STEERING_WHEEL_LIGHTS_SWITCH, ChangeMode::OnChange),
    (SUPPORT_CUSTOMIZE_VENDOR_PERMISSION, ChangeMode::Static),
    (DISABLED_OPTIONAL_FEATURES, ChangeMode::Static),
    (INITIAL_USER_INFO, ChangeMode::OnChange),
    (SWITCH_USER, ChangeMode::OnChange),
    (CREATE_USER, ChangeMode::OnChange),
    (REMOVE_USER, ChangeMode::OnChange),
    (USER_IDENTIFICATION_ASSOCIATION, ChangeMode::OnChange),
    (EVS_SERVICE_REQUEST, ChangeMode::OnChange),
    (POWER_POLICY_REQ, ChangeMode::OnChange),
    (POWER_POLICY_GROUP_REQ, ChangeMode::OnChange),
    (CURRENT_POWER_POLICY, ChangeMode::OnChange),
    (WATCHDOG_ALIVE, ChangeMode::OnChange),
    (WATCHDOG_TERMINATED_PROCESS, ChangeMode::OnChange),
    (VHAL_HEARTBEAT, ChangeMode::OnChange),
    (CLUSTER_SWITCH_UI, ChangeMode::OnChange),
    (CLUSTER_DISPLAY_STATE, ChangeMode::OnChange),
    (CLUSTER_REPORT_STATE, ChangeMode::OnChange),
    (CLUSTER_REQUEST_DISPLAY, ChangeMode::OnChange),
    (CLUSTER_NAVIGATION_STATE, ChangeMode::OnChange),
    (ELECTRONIC_TOLL_COLLECTION_CARD_TYPE, ChangeMode::OnChange),
    (ELECTRONIC_TOLL_COLLECTION_CARD_STATUS, ChangeMode::OnChange),
    (FRONT_FOG_LIGHTS_STATE, ChangeMode::OnChange),
    (FRONT_FOG_LIGHTS_SWITCH, ChangeMode::OnChange),
    (REAR_FOG_LIGHTS_STATE, ChangeMode::OnChange),
    (REAR_FOG_LIGHTS_SWITCH, ChangeMode::OnChange),
    (EV_CHARGE_CURRENT_DRAW_LIMIT, ChangeMode::OnChange),
    (EV_CHARGE_PERCENT_LIMIT, ChangeMode::OnChange),
    (EV_CHARGE_STATE, ChangeMode::OnChange),
    (EV_CHARGE_SWITCH, ChangeMode::OnChange),
    (EV_CHARGE_TIME_REMAINING, ChangeMode::Continuous),
    (EV_REGENERATIVE_BRAKING_STATE, ChangeMode::OnChange),
    (TRAILER_PRESENT, ChangeMode::OnChange),
    (VEHICLE_CURB_WEIGHT, ChangeMode::Static),
    (GENERAL_SAFETY_REGULATION_COMPLIANCE_REQUIREMENT, ChangeMode::Static),
    (SUPPORTED_PROPERTY_IDS, ChangeMode::Static),
    (SHUTDOWN_REQUEST, ChangeMode::OnChange),
    (VEHICLE_IN_USE, ChangeMode::OnChange),
    (CLUSTER_HEARTBEAT, ChangeMode::OnChange),
    (VEHICLE_DRIVING_AUTOMATION_CURRENT_LEVEL, ChangeMode::OnChange),
    (VEHICLE_DRIVING_AUTOMATION_TARGET_LEVEL, ChangeMode::OnChange),
    (CAMERA_SERVICE_CURRENT_STATE, ChangeMode::OnChange),
    (PER_DISPLAY_MAX_BRIGHTNESS, ChangeMode::Static),
    (AUTOMATIC_EMERGENCY_BRAKING_ENABLED, ChangeMode::OnChange),
    (AUTOMATIC_EMERGENCY_BRAKING_STATE, ChangeMode::OnChange),
    (FORWARD_COLLISION_WARNING_ENABLED, ChangeMode::OnChange),
    (FORWARD_COLLISION_WARNING_STATE, ChangeMode::OnChange),
    (BLIND_SPOT_WARNING_ENABLED, ChangeMode::OnChange),
    (BLIND_SPOT_WARNING_STATE, ChangeMode::OnChange),
    (LANE_DEPARTURE_WARNING_ENABLED, ChangeMode::OnChange),
    (LANE_DEPARTURE_WARNING_STATE, ChangeMode::OnChange),
    (LANE_KEEP_ASSIST_ENABLED, ChangeMode::OnChange),
    (LANE_KEEP_ASSIST_STATE, ChangeMode::OnChange),
    (LANE_CENTERING_ASSIST_ENABLED, ChangeMode::OnChange),
    (LANE_CENTERING_ASSIST_COMMAND, ChangeMode::OnChange),
    (LANE_CENTERING_ASSIST_STATE, ChangeMode::OnChange),
    (EMERGENCY_LANE_KEEP_ASSIST_ENABLED, ChangeMode::OnChange),
    (EMERGENCY_LANE_KEEP_ASSIST_STATE, ChangeMode::OnChange),
    (CRUISE_CONTROL_ENABLED, ChangeMode::OnChange),
    (CRUISE_CONTROL_TYPE, ChangeMode::OnChange),
    (CRUISE_CONTROL_STATE, ChangeMode::OnChange),
    (CRUISE_CONTROL_COMMAND, ChangeMode::OnChange),
    (CRUISE_CONTROL_TARGET_SPEED, ChangeMode::OnChange),
    (ADAPTIVE_CRUISE_CONTROL_TARGET_TIME_GAP, ChangeMode::OnChange),
    (ADAPTIVE_CRUISE_CONTROL_LEAD_VEHICLE_MEASURED_DISTANCE, ChangeMode::Continuous),
    (HANDS_ON_DETECTION_ENABLED, ChangeMode::OnChange),
    (HANDS_ON_DETECTION_DRIVER_STATE, ChangeMode::OnChange),
    (HANDS_ON_DETECTION_WARNING, ChangeMode::OnChange),
    (DRIVER_DROWSINESS_ATTENTION_SYSTEM_ENABLED, ChangeMode::OnChange),
    (DRIVER_DROWSINESS_ATTENTION_STATE, ChangeMode::OnChange),
    (DRIVER_DROWSINESS_ATTENTION_WARNING_ENABLED, ChangeMode::OnChange),
    (DRIVER_DROWSINESS_ATTENTION_WARNING, ChangeMode::OnChange),
    (DRIVER_DISTRACTION_SYSTEM_ENABLED, ChangeMode::OnChange),
    (DRIVER_DISTRACTION_STATE, ChangeMode::OnChange),
    (DRIVER_DISTRACTION_WARNING_ENABLED, ChangeMode::OnChange),
    (DRIVER_DISTRACTION_WARNING, ChangeMode::OnChange),
    (LOW_SPEED_COLLISION_WARNING_ENABLED, ChangeMode::OnChange),
    (LOW_SPEED_COLLISION_WARNING_STATE, ChangeMode::OnChange),
    (CROSS_TRAFFIC_MONITORING_ENABLED, ChangeMode::OnChange),
    (CROSS_TRAFFIC_MONITORING_WARNING_STATE, ChangeMode::OnChange),
    (LOW_SPEED_AUTOMATIC_EMERGENCY_BRAKING_ENABLED, ChangeMode::OnChange),
    (LOW_SPEED_AUTOMATIC_EMERGENCY_BRAKING_STATE, ChangeMode::OnChange),
];

// crates/canopen-od/src/constants.rs
//! Central repository for standard Object Dictionary indices and sub-indices.
//!
//! This module provides `pub const` definitions for well-known object
//! indices from the CANopen application layer (CiA 301), using a
//! consistent `IDX_` and `SUBIDX_` naming convention.

/// Sub-index 0 of a record or array holds the number of entries.
pub const SUBIDX_NR_OF_ENTRIES: u8 = 0;

// --- 0x1000 - 0x1FFF: Communication Profile Area ---

// 0x10xx: General Communication
pub const IDX_DEVICE_TYPE_U32: u16 = 0x1000;
pub const IDX_ERROR_REGISTER_U8: u16 = 0x1001;
pub const IDX_PREDEFINED_ERROR_FIELD_AU32: u16 = 0x1003;
pub const IDX_COB_ID_SYNC_U32: u16 = 0x1005;
pub const IDX_MANUFACT_DEV_NAME_VS: u16 = 0x1008;
pub const IDX_MANUFACT_HW_VERSION_VS: u16 = 0x1009;
pub const IDX_MANUFACT_SW_VERSION_VS: u16 = 0x100A;
pub const IDX_GUARD_TIME_U16: u16 = 0x100C;
pub const IDX_LIFE_TIME_FACTOR_U8: u16 = 0x100D;
pub const IDX_STORE_PARAM_REC: u16 = 0x1010;
pub const IDX_RESTORE_PARAM_REC: u16 = 0x1011;
pub const IDX_COB_ID_EMCY_U32: u16 = 0x1014;
pub const IDX_CONSUMER_HEARTBEAT_TIME_AU32: u16 = 0x1016;
pub const IDX_PRODUCER_HEARTBEAT_TIME_U16: u16 = 0x1017;

pub const IDX_IDENTITY_OBJECT_REC: u16 = 0x1018;
pub const SUBIDX_IDENTITY_VENDOR_ID_U32: u8 = 1;
pub const SUBIDX_IDENTITY_PRODUCT_CODE_U32: u8 = 2;
pub const SUBIDX_IDENTITY_REVISION_NR_U32: u8 = 3;
pub const SUBIDX_IDENTITY_SERIAL_NR_U32: u8 = 4;

// 0x12xx: SDO Parameters
pub const IDX_SDO_SERVER_PARAM_REC_START: u16 = 0x1200;
pub const IDX_SDO_SERVER_PARAM_REC_END: u16 = 0x127F;
pub const IDX_SDO_CLIENT_PARAM_REC_START: u16 = 0x1280;
pub const IDX_SDO_CLIENT_PARAM_REC_END: u16 = 0x12FF;

// 0x14xx / 0x16xx: RPDO Parameters
pub const IDX_RPDO_COMM_PARAM_REC_START: u16 = 0x1400;
pub const IDX_RPDO_MAPPING_PARAM_REC_START: u16 = 0x1600;

// 0x18xx / 0x1Axx: TPDO Parameters
pub const IDX_TPDO_COMM_PARAM_REC_START: u16 = 0x1800;
pub const IDX_TPDO_MAPPING_PARAM_REC_START: u16 = 0x1A00;

// --- 0x2000 - 0x5FFF: Manufacturer Specific Profile Area ---
pub const IDX_MANUFACTURER_AREA_START: u16 = 0x2000;
pub const IDX_MANUFACTURER_AREA_END: u16 = 0x5FFF;

// --- 0x6000 - 0x9FFF: Standardised Device Profile Area ---
pub const IDX_DEVICE_PROFILE_AREA_START: u16 = 0x6000;
pub const IDX_DEVICE_PROFILE_AREA_END: u16 = 0x9FFF;

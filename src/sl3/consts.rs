pub const FIRST_BYTE_POSITION_OFFSET: usize = 0;
pub const TOTAL_LENGTH_OFFSET: usize = 8;
pub const PREVIOUS_LENGTH_OFFSET: usize = 10;
pub const SURVEY_TYPE_OFFSET: usize = 12;
pub const CAMPAIGN_COUNT_OFFSET: usize = 16;
pub const MIN_RANGE_OFFSET: usize = 20;
pub const MAX_RANGE_OFFSET: usize = 24;
pub const HARDWARE_TIME_OFFSET: usize = 40;
pub const ECHO_LENGTH_OFFSET: usize = 44;
pub const WATER_DEPTH_OFFSET: usize = 48;
pub const FREQUENCY_OFFSET: usize = 52;
pub const GNSS_SPEED_OFFSET: usize = 84;
pub const WATER_TEMPERATURE_OFFSET: usize = 88;
pub const X_OFFSET: usize = 92;
pub const Y_OFFSET: usize = 96;
pub const WATER_SPEED_OFFSET: usize = 100;
pub const GNSS_HEADING_OFFSET: usize = 104;
pub const GNSS_ALTITUDE_OFFSET: usize = 108;
pub const MAGNETIC_HEADING_OFFSET: usize = 112;
pub const FLAGS_OFFSET: usize = 116;
pub const MILLISECONDS_OFFSET: usize = 124;

/// Bytes of a record covered by the fixed fields.
pub const FIXED_SIZE: usize = 128;

/// Offsets of records that use the SL2 compatible short layout.
pub mod short {
    pub const FIRST_BYTE_POSITION_OFFSET: usize = 0;
    pub const TOTAL_LENGTH_OFFSET: usize = 28;
    pub const SURVEY_TYPE_OFFSET: usize = 32;
    pub const MIN_RANGE_OFFSET: usize = 40;
    pub const MAX_RANGE_OFFSET: usize = 44;
    pub const WATER_DEPTH_OFFSET: usize = 64;
    pub const GNSS_SPEED_OFFSET: usize = 100;
    pub const WATER_TEMPERATURE_OFFSET: usize = 104;
    pub const X_OFFSET: usize = 108;
    pub const Y_OFFSET: usize = 112;
    pub const WATER_SPEED_OFFSET: usize = 116;
    pub const GNSS_HEADING_OFFSET: usize = 120;
    pub const GNSS_ALTITUDE_OFFSET: usize = 124;
    pub const MAGNETIC_HEADING_OFFSET: usize = 128;
    pub const FLAGS_OFFSET: usize = 132;
    pub const MILLISECONDS_OFFSET: usize = 140;

    pub const FIXED_SIZE: usize = 144;
}

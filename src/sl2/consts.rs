pub const FRAME_OFFSET_OFFSET: usize = 0;
pub const BLOCK_SIZE_OFFSET: usize = 28;
pub const CHANNEL_OFFSET: usize = 32;
pub const PACKET_SIZE_OFFSET: usize = 34;
pub const UPPER_LIMIT_OFFSET: usize = 40;
pub const LOWER_LIMIT_OFFSET: usize = 44;
pub const WATER_DEPTH_OFFSET: usize = 64;
pub const KEEL_DEPTH_OFFSET: usize = 68;
pub const GPS_SPEED_OFFSET: usize = 100;
pub const TEMPERATURE_OFFSET: usize = 104;
pub const LNG_ENC_OFFSET: usize = 108;
pub const LAT_ENC_OFFSET: usize = 112;
pub const WATER_SPEED_OFFSET: usize = 116;
pub const TRACK_OFFSET: usize = 120;
pub const ALTITUDE_OFFSET: usize = 124;
pub const HEADING_OFFSET: usize = 128;
pub const FLAGS_OFFSET: usize = 132;
pub const TIME_OFFSET_OFFSET: usize = 140;

/// Bytes of a record covered by the fixed fields.
pub const FIXED_SIZE: usize = 144;

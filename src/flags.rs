//! Sensor validity flags.
//!
//! Every record carries a 16 bit field where individual bits mark the
//! co-located sensor values as trustworthy. Only seven bits are known, all
//! other bits are reserved and ignored.

use bitflags::bitflags;
use serde::Serialize;

bitflags! {
    /// Known bits of the validity field
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct ValidityBits: u16 {
        const HEADING = 1 << 0;
        const ALTITUDE = 1 << 1;
        const GPS_SPEED = 1 << 9;
        const WATER_TEMP = 1 << 10;
        const POSITION = 1 << 12;
        const WATER_SPEED = 1 << 14;
        const TRACK = 1 << 15;
    }
}

/// Decoded validity field of a single record.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ValidityFlags {
    pub heading: bool,
    pub altitude: bool,
    pub gps_speed: bool,
    pub water_temp: bool,
    pub position: bool,
    pub water_speed: bool,
    pub track: bool,
}

/// Decodes the raw flags field, dropping reserved bits.
pub fn decode_flags(raw: u16) -> ValidityFlags {
    ValidityFlags::from(ValidityBits::from_bits_truncate(raw))
}

impl From<ValidityBits> for ValidityFlags {
    fn from(bits: ValidityBits) -> Self {
        ValidityFlags {
            heading: bits.contains(ValidityBits::HEADING),
            altitude: bits.contains(ValidityBits::ALTITUDE),
            gps_speed: bits.contains(ValidityBits::GPS_SPEED),
            water_temp: bits.contains(ValidityBits::WATER_TEMP),
            position: bits.contains(ValidityBits::POSITION),
            water_speed: bits.contains(ValidityBits::WATER_SPEED),
            track: bits.contains(ValidityBits::TRACK),
        }
    }
}

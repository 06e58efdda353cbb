//! Decoder for Lowrance SL3 sonar logs.
//!
//! SL3 records come in two layouts. [LAYOUT] is the regular one with
//! campaign, hardware time and frequency fields. [SHORT_LAYOUT] reuses the
//! SL2 offsets and lacks those fields.

mod consts;

use crate::decode::DecodedFile;
use crate::error::Result;
use crate::layout::{Dialect, FieldSpec, FieldType, RecordLayout};
use crate::options::DecodeOptions;
use consts::*;
use std::path::Path;

pub use consts::FIXED_SIZE;
pub use consts::short::FIXED_SIZE as SHORT_FIXED_SIZE;

/// Group name of the satellite navigation columns.
pub const GNSS_GROUP: &str = "gnss";

pub static LAYOUT: RecordLayout = RecordLayout {
    name: "sl3",
    fields: &[
        FieldSpec::new("first_byte_position", FIRST_BYTE_POSITION_OFFSET, FieldType::U32),
        FieldSpec::new("total_length", TOTAL_LENGTH_OFFSET, FieldType::U16),
        FieldSpec::new("previous_length", PREVIOUS_LENGTH_OFFSET, FieldType::U16),
        FieldSpec::new("survey_type", SURVEY_TYPE_OFFSET, FieldType::U16),
        FieldSpec::new("campaign_count", CAMPAIGN_COUNT_OFFSET, FieldType::U32),
        FieldSpec::new("min_range", MIN_RANGE_OFFSET, FieldType::F32),
        FieldSpec::new("max_range", MAX_RANGE_OFFSET, FieldType::F32),
        FieldSpec::new("hardware_time", HARDWARE_TIME_OFFSET, FieldType::U32),
        FieldSpec::new("echo_length", ECHO_LENGTH_OFFSET, FieldType::U32),
        FieldSpec::new("water_depth", WATER_DEPTH_OFFSET, FieldType::F32),
        FieldSpec::new("frequency", FREQUENCY_OFFSET, FieldType::U16),
        FieldSpec::new("speed", GNSS_SPEED_OFFSET, FieldType::F32).grouped(GNSS_GROUP),
        FieldSpec::new("water_temperature", WATER_TEMPERATURE_OFFSET, FieldType::F32),
        FieldSpec::new("x", X_OFFSET, FieldType::U32),
        FieldSpec::new("y", Y_OFFSET, FieldType::U32),
        FieldSpec::new("water_speed", WATER_SPEED_OFFSET, FieldType::F32),
        FieldSpec::new("heading", GNSS_HEADING_OFFSET, FieldType::F32).grouped(GNSS_GROUP),
        FieldSpec::new("altitude", GNSS_ALTITUDE_OFFSET, FieldType::F32).grouped(GNSS_GROUP),
        FieldSpec::new("magnetic_heading", MAGNETIC_HEADING_OFFSET, FieldType::F32),
        FieldSpec::new("milliseconds", MILLISECONDS_OFFSET, FieldType::U32),
    ],
    length_offset: TOTAL_LENGTH_OFFSET,
    flags_offset: FLAGS_OFFSET,
    position_fields: ("x", "y"),
};

pub static SHORT_LAYOUT: RecordLayout = RecordLayout {
    name: "sl3-short",
    fields: &[
        FieldSpec::new("first_byte_position", short::FIRST_BYTE_POSITION_OFFSET, FieldType::U32),
        FieldSpec::new("total_length", short::TOTAL_LENGTH_OFFSET, FieldType::U16),
        FieldSpec::new("survey_type", short::SURVEY_TYPE_OFFSET, FieldType::U16),
        FieldSpec::new("min_range", short::MIN_RANGE_OFFSET, FieldType::F32),
        FieldSpec::new("max_range", short::MAX_RANGE_OFFSET, FieldType::F32),
        FieldSpec::new("water_depth", short::WATER_DEPTH_OFFSET, FieldType::F32),
        FieldSpec::new("speed", short::GNSS_SPEED_OFFSET, FieldType::F32).grouped(GNSS_GROUP),
        FieldSpec::new("water_temperature", short::WATER_TEMPERATURE_OFFSET, FieldType::F32),
        FieldSpec::new("x", short::X_OFFSET, FieldType::U32),
        FieldSpec::new("y", short::Y_OFFSET, FieldType::U32),
        FieldSpec::new("water_speed", short::WATER_SPEED_OFFSET, FieldType::F32),
        FieldSpec::new("heading", short::GNSS_HEADING_OFFSET, FieldType::F32).grouped(GNSS_GROUP),
        FieldSpec::new("altitude", short::GNSS_ALTITUDE_OFFSET, FieldType::F32)
            .grouped(GNSS_GROUP),
        FieldSpec::new("magnetic_heading", short::MAGNETIC_HEADING_OFFSET, FieldType::F32),
        FieldSpec::new("milliseconds", short::MILLISECONDS_OFFSET, FieldType::U32),
    ],
    length_offset: short::TOTAL_LENGTH_OFFSET,
    flags_offset: short::FLAGS_OFFSET,
    position_fields: ("x", "y"),
};

pub fn decode_file(path: impl AsRef<Path>, options: &DecodeOptions) -> Result<DecodedFile> {
    crate::decode::decode_file(path, Dialect::Sl3, options)
}

pub fn decode_short_file(path: impl AsRef<Path>, options: &DecodeOptions) -> Result<DecodedFile> {
    crate::decode::decode_file(path, Dialect::Sl3Short, options)
}

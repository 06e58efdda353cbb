//! Decoder for Lowrance SL2 sonar logs.
//!
//! The [decode_file] function can be used to decode `.sl2` files recorded
//! by Lowrance, Simrad and B&G fish finders.

mod consts;

use crate::decode::DecodedFile;
use crate::error::Result;
use crate::layout::{Dialect, FieldSpec, FieldType, RecordLayout};
use crate::options::DecodeOptions;
use consts::*;
use std::path::Path;

pub use consts::FIXED_SIZE;

pub static LAYOUT: RecordLayout = RecordLayout {
    name: "sl2",
    fields: &[
        FieldSpec::new("frame_offset", FRAME_OFFSET_OFFSET, FieldType::U32),
        FieldSpec::new("block_size", BLOCK_SIZE_OFFSET, FieldType::U16),
        FieldSpec::new("channel", CHANNEL_OFFSET, FieldType::U16),
        FieldSpec::new("packet_size", PACKET_SIZE_OFFSET, FieldType::U16),
        FieldSpec::new("upper_limit", UPPER_LIMIT_OFFSET, FieldType::F32),
        FieldSpec::new("lower_limit", LOWER_LIMIT_OFFSET, FieldType::F32),
        FieldSpec::new("water_depth", WATER_DEPTH_OFFSET, FieldType::F32),
        FieldSpec::new("keel_depth", KEEL_DEPTH_OFFSET, FieldType::F32),
        FieldSpec::new("gps_speed", GPS_SPEED_OFFSET, FieldType::F32),
        FieldSpec::new("temperature", TEMPERATURE_OFFSET, FieldType::F32),
        FieldSpec::new("lng_enc", LNG_ENC_OFFSET, FieldType::U32),
        FieldSpec::new("lat_enc", LAT_ENC_OFFSET, FieldType::U32),
        FieldSpec::new("water_speed", WATER_SPEED_OFFSET, FieldType::F32),
        FieldSpec::new("track", TRACK_OFFSET, FieldType::F32),
        FieldSpec::new("altitude", ALTITUDE_OFFSET, FieldType::F32),
        FieldSpec::new("heading", HEADING_OFFSET, FieldType::F32),
        FieldSpec::new("time_offset", TIME_OFFSET_OFFSET, FieldType::U32),
    ],
    length_offset: BLOCK_SIZE_OFFSET,
    flags_offset: FLAGS_OFFSET,
    position_fields: ("lng_enc", "lat_enc"),
};

pub fn decode_file(path: impl AsRef<Path>, options: &DecodeOptions) -> Result<DecodedFile> {
    crate::decode::decode_file(path, Dialect::Sl2, options)
}

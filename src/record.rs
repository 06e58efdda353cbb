use crate::flags::{ValidityFlags, decode_flags};
use crate::layout::RecordLayout;
use byteorder::{ByteOrder, LittleEndian};
use serde::Serialize;
use std::fmt;

/// A single decoded field value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Value {
    U16(u16),
    U32(u32),
    F32(f32),
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::U16(v) => fmt::Display::fmt(v, f),
            Value::U32(v) => fmt::Display::fmt(v, f),
            Value::F32(v) => fmt::Display::fmt(v, f),
        }
    }
}

/// View on the fixed part of one record.
///
/// `bytes` holds at least [RecordLayout::extent] bytes starting at the
/// record start.
#[derive(Debug, Clone, Copy)]
pub struct Record<'a> {
    offset: u64,
    bytes: &'a [u8],
    layout: &'a RecordLayout,
}

impl<'a> Record<'a> {
    pub(crate) fn new(offset: u64, bytes: &'a [u8], layout: &'a RecordLayout) -> Self {
        debug_assert!(bytes.len() >= layout.extent());
        Self {
            offset,
            bytes,
            layout,
        }
    }

    /// Byte offset of the record start within the file.
    pub fn offset(&self) -> u64 {
        self.offset
    }

    /// Total byte length of the record, as declared by the record itself.
    pub fn length(&self) -> u16 {
        self.read_u16(self.layout.length_offset)
    }

    pub fn flags(&self) -> ValidityFlags {
        decode_flags(self.read_u16(self.layout.flags_offset))
    }

    pub(crate) fn read_u16(&self, offset: usize) -> u16 {
        LittleEndian::read_u16(&self.bytes[offset..])
    }

    pub(crate) fn read_u32(&self, offset: usize) -> u32 {
        LittleEndian::read_u32(&self.bytes[offset..])
    }

    pub(crate) fn read_f32(&self, offset: usize) -> f32 {
        LittleEndian::read_f32(&self.bytes[offset..])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::{FieldSpec, FieldType};
    use insta::assert_debug_snapshot;

    impl Record<'_> {
        fn get(&self, name: &str) -> Option<Value> {
            let field = self.layout.field(name)?;
            Some(match field.ty {
                FieldType::U16 => Value::U16(self.read_u16(field.offset)),
                FieldType::U32 => Value::U32(self.read_u32(field.offset)),
                FieldType::F32 => Value::F32(self.read_f32(field.offset)),
            })
        }
    }

    static LAYOUT: RecordLayout = RecordLayout {
        name: "test",
        fields: &[
            FieldSpec::new("id", 0, FieldType::U32),
            FieldSpec::new("length", 4, FieldType::U16),
            FieldSpec::new("depth", 10, FieldType::F32),
        ],
        length_offset: 4,
        flags_offset: 8,
        position_fields: ("id", "id"),
    };

    fn make_bytes() -> Vec<u8> {
        let mut bytes = vec![0u8; 16];
        bytes[0..4].copy_from_slice(&0xDEADBEEFu32.to_le_bytes());
        bytes[4..6].copy_from_slice(&24u16.to_le_bytes());
        bytes[8..10].copy_from_slice(&0x1001u16.to_le_bytes());
        bytes[10..14].copy_from_slice(&12.25f32.to_le_bytes());
        bytes
    }

    #[test]
    fn fields_are_read_at_their_offsets() {
        let bytes = make_bytes();
        let record = Record::new(8, &bytes, &LAYOUT);
        assert_eq!(record.offset(), 8);
        assert_eq!(record.length(), 24);
        assert_eq!(record.get("id"), Some(Value::U32(0xDEADBEEF)));
        assert_eq!(record.get("depth"), Some(Value::F32(12.25)));
        assert_eq!(record.get("missing"), None);
    }

    #[test]
    fn flags_are_decoded() {
        let bytes = make_bytes();
        let record = Record::new(8, &bytes, &LAYOUT);
        assert_debug_snapshot!(record.flags(), @r###"
        ValidityFlags {
            heading: true,
            altitude: false,
            gps_speed: false,
            water_temp: false,
            position: true,
            water_speed: false,
            track: false,
        }
        "###);
    }

    #[test]
    fn values_display_like_numbers() {
        assert_eq!(Value::U16(7).to_string(), "7");
        assert_eq!(Value::F32(1.5).to_string(), "1.5");
    }
}

//! Declarative record layouts.
//!
//! A [RecordLayout] lists the fields of one record dialect together with
//! their byte offsets relative to the start of the record. The offsets are
//! fixed by the vendor and never derived from the data.

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldType {
    U16,
    U32,
    F32,
}

impl FieldType {
    pub const fn size(self) -> usize {
        match self {
            FieldType::U16 => 2,
            FieldType::U32 | FieldType::F32 => 4,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    pub name: &'static str,
    pub offset: usize,
    pub ty: FieldType,
    /// Nested column group the field is reported under, if any.
    pub group: Option<&'static str>,
}

impl FieldSpec {
    pub const fn new(name: &'static str, offset: usize, ty: FieldType) -> Self {
        Self {
            name,
            offset,
            ty,
            group: None,
        }
    }

    pub const fn grouped(self, group: &'static str) -> Self {
        Self {
            group: Some(group),
            ..self
        }
    }

    /// First byte after the field.
    pub const fn end(&self) -> usize {
        self.offset + self.ty.size()
    }
}

#[derive(Debug, PartialEq, Eq)]
pub struct RecordLayout {
    pub name: &'static str,
    /// Value columns, in output order.
    pub fields: &'static [FieldSpec],
    /// Offset of the u16 holding the total byte length of the record.
    pub length_offset: usize,
    /// Offset of the u16 validity bitfield.
    pub flags_offset: usize,
    /// Columns holding the Lowrance encoded longitude and latitude.
    pub position_fields: (&'static str, &'static str),
}

impl RecordLayout {
    /// Number of bytes from the record start that must be present to decode
    /// every field of the layout.
    pub fn extent(&self) -> usize {
        self.fields
            .iter()
            .map(FieldSpec::end)
            .chain([self.length_offset + 2, self.flags_offset + 2])
            .max()
            .unwrap_or(0)
    }

    pub fn field(&self, name: &str) -> Option<&FieldSpec> {
        self.fields.iter().find(|field| field.name == name)
    }
}

/// The record dialects that can be decoded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dialect {
    /// SL2 records.
    #[cfg(feature = "sl2")]
    Sl2,
    /// SL3 records using the SL2 compatible offsets.
    #[cfg(feature = "sl3")]
    Sl3Short,
    /// SL3 records with campaign and hardware fields.
    #[cfg(feature = "sl3")]
    Sl3,
}

impl Dialect {
    pub fn layout(self) -> &'static RecordLayout {
        match self {
            #[cfg(feature = "sl2")]
            Dialect::Sl2 => &crate::sl2::LAYOUT,
            #[cfg(feature = "sl3")]
            Dialect::Sl3Short => &crate::sl3::SHORT_LAYOUT,
            #[cfg(feature = "sl3")]
            Dialect::Sl3 => &crate::sl3::LAYOUT,
        }
    }

    /// Guesses the dialect from a file extension (`sl2` or `sl3`).
    pub fn from_extension(extension: &str) -> Option<Self> {
        match extension.to_ascii_lowercase().as_str() {
            #[cfg(feature = "sl2")]
            "sl2" => Some(Dialect::Sl2),
            #[cfg(feature = "sl3")]
            "sl3" => Some(Dialect::Sl3),
            _ => None,
        }
    }
}

impl fmt::Display for Dialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.layout().name)
    }
}

#[derive(Error, Debug, PartialEq, Eq)]
#[error("unknown dialect: {0}")]
pub struct UnknownDialect(pub String);

impl FromStr for Dialect {
    type Err = UnknownDialect;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            #[cfg(feature = "sl2")]
            "sl2" => Ok(Dialect::Sl2),
            #[cfg(feature = "sl3")]
            "sl3-short" => Ok(Dialect::Sl3Short),
            #[cfg(feature = "sl3")]
            "sl3" => Ok(Dialect::Sl3),
            _ => Err(UnknownDialect(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn all_dialects() -> Vec<Dialect> {
        let mut dialects = Vec::new();
        #[cfg(feature = "sl2")]
        dialects.push(Dialect::Sl2);
        #[cfg(feature = "sl3")]
        dialects.extend([Dialect::Sl3Short, Dialect::Sl3]);
        dialects
    }

    #[test]
    fn field_names_are_unique() {
        for dialect in all_dialects() {
            let fields = dialect.layout().fields;
            for (i, field) in fields.iter().enumerate() {
                assert!(
                    fields[i + 1..].iter().all(|other| other.name != field.name),
                    "{dialect}: duplicate field {}",
                    field.name
                );
            }
        }
    }

    #[test]
    fn length_field_is_a_u16_column() {
        for dialect in all_dialects() {
            let layout = dialect.layout();
            let length = layout
                .fields
                .iter()
                .find(|field| field.offset == layout.length_offset)
                .unwrap();
            assert_eq!(length.ty, FieldType::U16, "{dialect}");
        }
    }

    #[test]
    fn flags_do_not_overlap_value_fields() {
        for dialect in all_dialects() {
            let layout = dialect.layout();
            let flags = layout.flags_offset..layout.flags_offset + 2;
            for field in layout.fields {
                assert!(
                    field.end() <= flags.start || field.offset >= flags.end,
                    "{dialect}: {} overlaps flags",
                    field.name
                );
            }
        }
    }

    #[test]
    fn position_fields_exist() {
        for dialect in all_dialects() {
            let layout = dialect.layout();
            let (x, y) = layout.position_fields;
            assert_eq!(layout.field(x).unwrap().ty, FieldType::U32);
            assert_eq!(layout.field(y).unwrap().ty, FieldType::U32);
        }
    }

    #[test]
    fn dialects_parse_from_names() {
        for dialect in all_dialects() {
            let name = dialect.to_string();
            assert_eq!(name.parse::<Dialect>(), Ok(dialect));
        }
        let err = "slg".parse::<Dialect>().unwrap_err();
        assert_eq!(err, UnknownDialect("slg".to_string()));
        assert_eq!(err.to_string(), "unknown dialect: slg");
    }

    #[test]
    fn extent_covers_the_last_field() {
        static LAYOUT: RecordLayout = RecordLayout {
            name: "test",
            fields: &[
                FieldSpec::new("a", 0, FieldType::U32),
                FieldSpec::new("b", 10, FieldType::F32),
            ],
            length_offset: 4,
            flags_offset: 6,
            position_fields: ("a", "a"),
        };
        assert_eq!(LAYOUT.extent(), 14);
    }
}

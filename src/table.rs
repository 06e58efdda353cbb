//! Column oriented output of a decode.

use crate::error::{DecodeError, Result};
use crate::flags::ValidityFlags;
use crate::header::FileHeader;
use crate::layout::{FieldType, RecordLayout};
use crate::position::Position;
use crate::record::{Record, Value};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ColumnValues {
    U16(Vec<u16>),
    U32(Vec<u32>),
    F32(Vec<f32>),
}

impl ColumnValues {
    fn with_capacity(ty: FieldType, capacity: usize) -> Self {
        match ty {
            FieldType::U16 => ColumnValues::U16(Vec::with_capacity(capacity)),
            FieldType::U32 => ColumnValues::U32(Vec::with_capacity(capacity)),
            FieldType::F32 => ColumnValues::F32(Vec::with_capacity(capacity)),
        }
    }

    fn push_from(&mut self, record: &Record<'_>, offset: usize) {
        match self {
            ColumnValues::U16(values) => values.push(record.read_u16(offset)),
            ColumnValues::U32(values) => values.push(record.read_u32(offset)),
            ColumnValues::F32(values) => values.push(record.read_f32(offset)),
        }
    }

    fn truncate(&mut self, len: usize) {
        match self {
            ColumnValues::U16(values) => values.truncate(len),
            ColumnValues::U32(values) => values.truncate(len),
            ColumnValues::F32(values) => values.truncate(len),
        }
    }

    pub fn len(&self) -> usize {
        match self {
            ColumnValues::U16(values) => values.len(),
            ColumnValues::U32(values) => values.len(),
            ColumnValues::F32(values) => values.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn get(&self, index: usize) -> Option<Value> {
        match self {
            ColumnValues::U16(values) => values.get(index).copied().map(Value::U16),
            ColumnValues::U32(values) => values.get(index).copied().map(Value::U32),
            ColumnValues::F32(values) => values.get(index).copied().map(Value::F32),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Column {
    pub name: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group: Option<&'static str>,
    pub values: ColumnValues,
}

/// The nested group of validity columns.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ValidityColumns {
    pub heading: Vec<bool>,
    pub altitude: Vec<bool>,
    pub gps_speed: Vec<bool>,
    pub water_temp: Vec<bool>,
    pub position: Vec<bool>,
    pub water_speed: Vec<bool>,
    pub track: Vec<bool>,
}

impl ValidityColumns {
    fn with_capacity(capacity: usize) -> Self {
        Self {
            heading: Vec::with_capacity(capacity),
            altitude: Vec::with_capacity(capacity),
            gps_speed: Vec::with_capacity(capacity),
            water_temp: Vec::with_capacity(capacity),
            position: Vec::with_capacity(capacity),
            water_speed: Vec::with_capacity(capacity),
            track: Vec::with_capacity(capacity),
        }
    }

    fn push(&mut self, flags: ValidityFlags) {
        self.heading.push(flags.heading);
        self.altitude.push(flags.altitude);
        self.gps_speed.push(flags.gps_speed);
        self.water_temp.push(flags.water_temp);
        self.position.push(flags.position);
        self.water_speed.push(flags.water_speed);
        self.track.push(flags.track);
    }

    fn truncate(&mut self, len: usize) {
        for column in self.columns_mut() {
            column.truncate(len);
        }
    }

    fn columns_mut(&mut self) -> [&mut Vec<bool>; 7] {
        [
            &mut self.heading,
            &mut self.altitude,
            &mut self.gps_speed,
            &mut self.water_temp,
            &mut self.position,
            &mut self.water_speed,
            &mut self.track,
        ]
    }

    pub fn columns(&self) -> [(&'static str, &[bool]); 7] {
        [
            ("heading", &self.heading),
            ("altitude", &self.altitude),
            ("gps_speed", &self.gps_speed),
            ("water_temp", &self.water_temp),
            ("position", &self.position),
            ("water_speed", &self.water_speed),
            ("track", &self.track),
        ]
    }

    pub fn get(&self, index: usize) -> Option<ValidityFlags> {
        Some(ValidityFlags {
            heading: *self.heading.get(index)?,
            altitude: *self.altitude.get(index)?,
            gps_speed: *self.gps_speed.get(index)?,
            water_temp: *self.water_temp.get(index)?,
            position: *self.position.get(index)?,
            water_speed: *self.water_speed.get(index)?,
            track: *self.track.get(index)?,
        })
    }
}

/// Collects decoded records into per-field sequences.
#[derive(Debug)]
pub struct TableBuilder {
    layout: &'static RecordLayout,
    columns: Vec<Column>,
    valid: ValidityColumns,
    rows: usize,
}

impl TableBuilder {
    pub fn new(layout: &'static RecordLayout) -> Self {
        Self::with_capacity(layout, 0)
    }

    pub fn with_capacity(layout: &'static RecordLayout, capacity: usize) -> Self {
        let columns = layout
            .fields
            .iter()
            .map(|field| Column {
                name: field.name,
                group: field.group,
                values: ColumnValues::with_capacity(field.ty, capacity),
            })
            .collect();

        Self {
            layout,
            columns,
            valid: ValidityColumns::with_capacity(capacity),
            rows: 0,
        }
    }

    pub fn push(&mut self, record: &Record<'_>) {
        for (column, field) in self.columns.iter_mut().zip(self.layout.fields) {
            column.values.push_from(record, field.offset);
        }
        self.valid.push(record.flags());
        self.rows += 1;
    }

    pub fn layout(&self) -> &'static RecordLayout {
        self.layout
    }

    /// Drops every row after the first `len`.
    pub fn truncate(&mut self, len: usize) {
        for column in &mut self.columns {
            column.values.truncate(len);
        }
        self.valid.truncate(len);
        self.rows = self.rows.min(len);
    }

    pub fn len(&self) -> usize {
        self.rows
    }

    pub fn is_empty(&self) -> bool {
        self.rows == 0
    }

    pub fn finish(self, header: FileHeader) -> Result<Table> {
        Table::new(self.layout, header, self.columns, self.valid)
    }
}

/// Decoded records of one log file.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Table {
    pub dialect: &'static str,
    pub header: FileHeader,
    pub columns: Vec<Column>,
    pub valid: ValidityColumns,
    #[serde(skip)]
    layout: &'static RecordLayout,
}

impl Table {
    /// Assembles a table, checking that every sequence has the same length.
    pub fn new(
        layout: &'static RecordLayout,
        header: FileHeader,
        columns: Vec<Column>,
        valid: ValidityColumns,
    ) -> Result<Self> {
        let expected = columns
            .first()
            .map(|column| column.values.len())
            .unwrap_or(valid.heading.len());

        let lengths = columns
            .iter()
            .map(|column| (column.name, column.values.len()))
            .chain(
                valid
                    .columns()
                    .into_iter()
                    .map(|(name, values)| (name, values.len())),
            );
        for (column, found) in lengths {
            if found != expected {
                return Err(DecodeError::Schema {
                    column,
                    expected,
                    found,
                });
            }
        }

        Ok(Self {
            dialect: layout.name,
            header,
            columns,
            valid,
            layout,
        })
    }

    pub fn len(&self) -> usize {
        self.valid.heading.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn layout(&self) -> &'static RecordLayout {
        self.layout
    }

    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|column| column.name == name)
    }

    pub fn u16s(&self, name: &str) -> Option<&[u16]> {
        match &self.column(name)?.values {
            ColumnValues::U16(values) => Some(values),
            _ => None,
        }
    }

    pub fn u32s(&self, name: &str) -> Option<&[u32]> {
        match &self.column(name)?.values {
            ColumnValues::U32(values) => Some(values),
            _ => None,
        }
    }

    pub fn f32s(&self, name: &str) -> Option<&[f32]> {
        match &self.column(name)?.values {
            ColumnValues::F32(values) => Some(values),
            _ => None,
        }
    }

    /// Columns reported under the nested group `group`.
    pub fn group<'a>(&'a self, group: &'a str) -> impl Iterator<Item = &'a Column> + 'a {
        self.columns
            .iter()
            .filter(move |column| column.group == Some(group))
    }

    /// Values of row `index` in column order.
    pub fn row(&self, index: usize) -> Option<Vec<(&'static str, Value)>> {
        self.columns
            .iter()
            .map(|column| Some((column.name, column.values.get(index)?)))
            .collect()
    }

    /// WGS84 position of every row.
    pub fn positions(&self) -> Option<Vec<Position>> {
        let (x, y) = self.layout.position_fields;
        let xs = self.u32s(x)?;
        let ys = self.u32s(y)?;
        Some(
            xs.iter()
                .zip(ys)
                .map(|(&x, &y)| Position::from_lowrance(x, y))
                .collect(),
        )
    }
}

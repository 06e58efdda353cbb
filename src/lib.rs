//! Decoder for Lowrance SL2 and SL3 sonar logs.
//!
//! Both formats start with an 8 byte [FileHeader] followed by variable
//! length records. Every record declares its own length, which is used to
//! find the next one. The fixed fields of each record are decoded into a
//! column oriented [Table].
//!
//! ```no_run
//! use sonarlog::{DecodeOptions, Dialect};
//!
//! let decoded = sonarlog::decode_file("log.sl2", Dialect::Sl2, &DecodeOptions::default())?;
//! println!("{} records", decoded.table.len());
//! # Ok::<(), sonarlog::DecodeError>(())
//! ```

mod cancel;
mod decode;
mod error;
mod flags;
mod header;
mod layout;
mod options;
pub mod position;
mod record;
mod table;
mod walker;

#[cfg(feature = "sl2")]
pub mod sl2;
#[cfg(feature = "sl3")]
pub mod sl3;

pub use cancel::CancellationToken;
pub use decode::{DecodedFile, decode_file, decode_reader, decode_with_layout};
pub use error::{DecodeError, Result};
pub use flags::{ValidityBits, ValidityFlags, decode_flags};
pub use header::{FileHeader, HEADER_SIZE, RECORDS_OFFSET, read_header};
pub use layout::{Dialect, FieldSpec, FieldType, RecordLayout, UnknownDialect};
pub use options::{DEFAULT_BUFFER_CAPACITY, DecodeOptions, TrailingRecord};
pub use record::{Record, Value};
pub use table::{Column, ColumnValues, Table, TableBuilder, ValidityColumns};
pub use walker::{RecordWalker, TruncatedRecord, WalkStats};

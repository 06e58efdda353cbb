use crate::error::{DecodeError, Result};
use crate::header::read_header;
use crate::layout::{Dialect, RecordLayout};
use crate::options::{DecodeOptions, TrailingRecord};
use crate::table::{Table, TableBuilder};
use crate::walker::{RecordWalker, WalkStats};
use log::debug;
use serde::Serialize;
use std::fs::File;
use std::io::{Read, Seek, SeekFrom};
use std::path::Path;

/// Initial column capacity.
const ESTIMATED_RECORDS: usize = 1000;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DecodedFile {
    pub table: Table,
    pub stats: WalkStats,
}

/// Decodes the log file at `path`.
///
/// The file is closed before this function returns, on success and on error.
pub fn decode_file(
    path: impl AsRef<Path>,
    dialect: Dialect,
    options: &DecodeOptions,
) -> Result<DecodedFile> {
    let path = path.as_ref();
    debug!("decoding {} as {dialect}", path.display());
    let file = File::open(path).map_err(|e| DecodeError::open(path.to_path_buf(), e))?;
    decode_reader(file, dialect, options).map_err(|e| e.in_file(path))
}

pub fn decode_reader<R: Read + Seek>(
    reader: R,
    dialect: Dialect,
    options: &DecodeOptions,
) -> Result<DecodedFile> {
    decode_with_layout(reader, dialect.layout(), options)
}

/// Decodes records of an arbitrary layout.
pub fn decode_with_layout<R: Read + Seek>(
    mut reader: R,
    layout: &'static RecordLayout,
    options: &DecodeOptions,
) -> Result<DecodedFile> {
    reader.seek(SeekFrom::Start(0)).map_err(DecodeError::io(0))?;
    let header = read_header(&mut reader)?;
    debug!(
        "format {}, version {}, block size {}",
        header.format, header.version, header.block_size
    );

    let mut builder = TableBuilder::with_capacity(layout, ESTIMATED_RECORDS);
    let mut stats = RecordWalker::new(reader, layout, options.buffer_capacity)?
        .with_cancellation(options.cancellation.as_ref())
        .walk(&mut builder)?;

    if options.trailing == TrailingRecord::DropLast && !builder.is_empty() {
        debug!("dropping last record");
        builder.truncate(builder.len() - 1);
    }
    stats.rows = builder.len();

    let table = builder.finish(header)?;
    Ok(DecodedFile { table, stats })
}

#[cfg(all(test, feature = "sl2"))]
mod tests {
    use super::*;
    use crate::cancel::CancellationToken;
    use insta::assert_debug_snapshot;
    use std::io::Cursor;

    fn make_file(records: &[(u32, u16)]) -> Vec<u8> {
        let mut data = vec![0x01, 0x00, 0x02, 0x00, 0x40, 0x00, 0x00, 0x00];
        for &(frame_offset, length) in records {
            let mut record = vec![0u8; length as usize];
            record[0..4].copy_from_slice(&frame_offset.to_le_bytes());
            record[28..30].copy_from_slice(&length.to_le_bytes());
            data.extend_from_slice(&record);
        }
        data
    }

    #[test]
    fn decoding_attaches_header_metadata() {
        let data = make_file(&[(8, 144)]);
        let decoded = decode_reader(Cursor::new(data), Dialect::Sl2, &DecodeOptions::default())
            .unwrap();
        assert_debug_snapshot!(decoded.table.header, @r###"
        FileHeader {
            format: 1,
            version: 2,
            block_size: 64,
        }
        "###);
        assert_eq!(decoded.table.dialect, "sl2");
        assert_eq!(decoded.table.len(), 1);
    }

    #[test]
    fn decoding_fails_for_truncated_header() {
        let err = decode_reader(
            Cursor::new(vec![0x01, 0x00]),
            Dialect::Sl2,
            &DecodeOptions::default(),
        )
        .unwrap_err();
        assert_debug_snapshot!(err, @r###"
        TruncatedHeader {
            len: 2,
        }
        "###);
    }

    #[test]
    fn decoding_header_only_file_yields_empty_table() {
        let data = make_file(&[]);
        let decoded = decode_reader(Cursor::new(data), Dialect::Sl2, &DecodeOptions::default())
            .unwrap();
        assert!(decoded.table.is_empty());
        assert_eq!(decoded.stats.iterations, 1);
    }

    #[test]
    fn drop_last_discards_the_final_record() {
        let data = make_file(&[(8, 144), (152, 160), (312, 144)]);
        let options = DecodeOptions::new().with_trailing(TrailingRecord::DropLast);
        let decoded = decode_reader(Cursor::new(data), Dialect::Sl2, &options).unwrap();
        assert_eq!(decoded.stats.records, 3);
        assert_eq!(decoded.stats.rows, 2);
        assert_eq!(decoded.table.u32s("frame_offset"), Some(&[8, 152][..]));
    }

    #[test]
    fn drop_last_on_empty_file_does_not_underflow() {
        let options = DecodeOptions::new().with_trailing(TrailingRecord::DropLast);
        let decoded = decode_reader(Cursor::new(make_file(&[])), Dialect::Sl2, &options).unwrap();
        assert_eq!(decoded.stats.rows, 0);
    }

    #[test]
    fn keep_retains_every_complete_record() {
        let data = make_file(&[(8, 144), (152, 160), (312, 144)]);
        let decoded = decode_reader(Cursor::new(data), Dialect::Sl2, &DecodeOptions::default())
            .unwrap();
        assert_eq!(decoded.stats.rows, decoded.stats.iterations - 1);
        assert_eq!(decoded.table.u32s("frame_offset"), Some(&[8, 152, 312][..]));
    }

    #[test]
    fn cancelled_decode_discards_results() {
        let token = CancellationToken::new();
        token.cancel();
        let options = DecodeOptions::new().with_cancellation(token);
        let data = make_file(&[(8, 144)]);
        let err = decode_reader(Cursor::new(data), Dialect::Sl2, &options).unwrap_err();
        assert!(matches!(err, DecodeError::Cancelled { rows: 0, .. }));
    }
}

//! Global file header shared by SL2 and SL3 logs.

use crate::error::{DecodeError, Result};
use byteorder::{ByteOrder, LittleEndian};
use serde::Serialize;
use std::io::Read;

pub const HEADER_SIZE: usize = 8;
/// Byte offset of the first record.
pub const RECORDS_OFFSET: u64 = HEADER_SIZE as u64;

const FORMAT_OFFSET: usize = 0;
const VERSION_OFFSET: usize = 2;
const BLOCK_SIZE_OFFSET: usize = 4;
const REQUIRED_SIZE: usize = 6;

/// Values of the 8 byte header. None of them are validated, they are passed
/// through as metadata of the decoded table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FileHeader {
    pub format: u16,
    pub version: u16,
    pub block_size: u16,
}

/// Reads the header from a reader positioned at the start of the file.
///
/// The two reserved bytes at offset 6 are not required to be present.
pub fn read_header<R: Read>(reader: &mut R) -> Result<FileHeader> {
    let mut buf = Vec::with_capacity(REQUIRED_SIZE);
    reader
        .take(REQUIRED_SIZE as u64)
        .read_to_end(&mut buf)
        .map_err(DecodeError::io(0))?;
    if buf.len() < REQUIRED_SIZE {
        return Err(DecodeError::TruncatedHeader {
            len: buf.len() as u64,
        });
    }

    Ok(FileHeader {
        format: LittleEndian::read_u16(&buf[FORMAT_OFFSET..]),
        version: LittleEndian::read_u16(&buf[VERSION_OFFSET..]),
        block_size: LittleEndian::read_u16(&buf[BLOCK_SIZE_OFFSET..]),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use insta::assert_debug_snapshot;
    use std::io::Cursor;

    #[test]
    fn reading_works_for_sl2_header() {
        let data = [0x01, 0x00, 0x02, 0x00, 0x40, 0x00, 0x00, 0x00];
        let header = read_header(&mut Cursor::new(&data)).unwrap();
        assert_debug_snapshot!(header, @r###"
        FileHeader {
            format: 1,
            version: 2,
            block_size: 64,
        }
        "###);
    }

    #[test]
    fn reading_ignores_reserved_bytes() {
        let data = [0x02, 0x00, 0x00, 0x00, 0x00, 0x0c, 0xff, 0xff];
        let header = read_header(&mut Cursor::new(&data)).unwrap();
        assert_eq!(header.format, 2);
        assert_eq!(header.version, 0);
        assert_eq!(header.block_size, 3072);
    }

    #[test]
    fn reading_accepts_header_without_reserved_bytes() {
        let data = [0x03, 0x00, 0x01, 0x00, 0x00, 0x10];
        let header = read_header(&mut Cursor::new(&data)).unwrap();
        assert_eq!(header.block_size, 4096);
    }

    #[test]
    fn reading_fails_for_empty_file() {
        assert_debug_snapshot!(
            read_header(&mut Cursor::new(b"")).unwrap_err(),
            @r###"
        TruncatedHeader {
            len: 0,
        }
        "###
        );
    }

    #[test]
    fn reading_fails_for_truncated_header() {
        assert_debug_snapshot!(
            read_header(&mut Cursor::new(&[0x01, 0x00, 0x02, 0x00, 0x40])).unwrap_err(),
            @r###"
        TruncatedHeader {
            len: 5,
        }
        "###
        );
    }
}

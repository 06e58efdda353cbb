//! Record boundary discovery.
//!
//! Records are variable length. Each one declares its own total length, and
//! the next record starts right after it. The walker reads the fixed part of
//! every record (see [RecordLayout::extent]) and skips the remaining payload.
//!
//! Before a record is decoded the walker checks that the fixed part is fully
//! present. The check that ends the walk is counted as an iteration, so a
//! walk over `n` complete records always takes `n + 1` iterations.

use crate::cancel::CancellationToken;
use crate::error::{DecodeError, Result};
use crate::header::RECORDS_OFFSET;
use crate::layout::RecordLayout;
use crate::record::Record;
use crate::table::TableBuilder;
use log::{debug, trace, warn};
use serde::Serialize;
use std::io::{BufReader, Read, Seek, SeekFrom};

/// Trailing data that did not form a complete record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TruncatedRecord {
    /// Fewer bytes than a record's fixed part remained. They were discarded.
    Partial { offset: u64, available: u64 },
    /// The last record declared a length running past the end of the file.
    /// Its fields were complete and the record was kept.
    PayloadCut {
        offset: u64,
        length: u16,
        available: u64,
    },
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct WalkStats {
    /// Loop iterations, including the final end of stream check.
    pub iterations: usize,
    /// Complete records found.
    pub records: usize,
    /// Rows in the decoded table.
    pub rows: usize,
    pub truncated: Option<TruncatedRecord>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Scanning,
    Done,
}

pub struct RecordWalker<'a, R> {
    reader: BufReader<R>,
    layout: &'a RecordLayout,
    cancellation: Option<&'a CancellationToken>,
    buf: Vec<u8>,
    position: u64,
    len: u64,
    state: State,
}

impl<'a, R: Read + Seek> RecordWalker<'a, R> {
    /// Creates a walker over `reader`, starting at the first record.
    pub fn new(reader: R, layout: &'a RecordLayout, buffer_capacity: usize) -> Result<Self> {
        let mut reader = BufReader::with_capacity(buffer_capacity, reader);
        let len = reader.seek(SeekFrom::End(0)).map_err(DecodeError::io(0))?;
        let position = reader
            .seek(SeekFrom::Start(RECORDS_OFFSET))
            .map_err(DecodeError::io(RECORDS_OFFSET))?;

        Ok(Self {
            reader,
            layout,
            cancellation: None,
            buf: vec![0u8; layout.extent()],
            position,
            len,
            state: State::Scanning,
        })
    }

    pub fn with_cancellation(mut self, token: Option<&'a CancellationToken>) -> Self {
        self.cancellation = token;
        self
    }

    /// Walks all records, appending every complete one to `builder`.
    ///
    /// The builder must collect the walker's layout.
    pub fn walk(mut self, builder: &mut TableBuilder) -> Result<WalkStats> {
        if builder.layout() != self.layout {
            return Err(DecodeError::LayoutMismatch {
                expected: builder.layout().name,
                found: self.layout.name,
            });
        }

        let mut stats = WalkStats::default();
        debug!(
            "walking {} records from offset {} ({} bytes)",
            self.layout.name, self.position, self.len
        );

        while self.state == State::Scanning {
            stats.iterations += 1;
            if self.cancellation.is_some_and(CancellationToken::is_cancelled) {
                return Err(DecodeError::Cancelled {
                    offset: self.position,
                    rows: stats.records,
                });
            }
            self.step(builder, &mut stats)?;
        }

        stats.rows = stats.records;
        debug!(
            "found {} records in {} iterations",
            stats.records, stats.iterations
        );
        Ok(stats)
    }

    fn step(&mut self, builder: &mut TableBuilder, stats: &mut WalkStats) -> Result<()> {
        let start = self.position;
        let available = self.len.saturating_sub(start);
        if available == 0 {
            self.state = State::Done;
            return Ok(());
        }

        let extent = self.buf.len() as u64;
        if available < extent {
            warn!("discarding {available} trailing bytes at offset {start}");
            stats.truncated = Some(TruncatedRecord::Partial {
                offset: start,
                available,
            });
            self.state = State::Done;
            return Ok(());
        }

        self.reader
            .read_exact(&mut self.buf)
            .map_err(DecodeError::io(start))?;

        let record = Record::new(start, &self.buf, self.layout);
        let length = record.length();
        if length == 0 {
            return Err(DecodeError::CorruptRecord {
                offset: start,
                length: u32::from(length),
            });
        }
        trace!("record at offset {start}, {length} bytes");
        builder.push(&record);
        stats.records += 1;

        let next = start + u64::from(length);
        if next > self.len {
            warn!("record at offset {start} declares {length} bytes, only {available} available");
            stats.truncated = Some(TruncatedRecord::PayloadCut {
                offset: start,
                length,
                available,
            });
        } else {
            let delta = next as i64 - (start + extent) as i64;
            self.reader
                .seek_relative(delta)
                .map_err(DecodeError::io(next))?;
        }
        self.position = next;
        Ok(())
    }
}

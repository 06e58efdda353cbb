use crate::cancel::CancellationToken;

/// Default read-ahead buffer size.
pub const DEFAULT_BUFFER_CAPACITY: usize = 1024 * 1024;

/// What to do with the last complete record of a log.
///
/// Incomplete trailing bytes are always discarded and reported through
/// [WalkStats::truncated](crate::WalkStats::truncated).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TrailingRecord {
    /// Keep every complete record.
    #[default]
    Keep,
    /// Treat the last complete record as a sentinel and discard it.
    DropLast,
}

#[derive(Debug, Clone)]
pub struct DecodeOptions {
    pub trailing: TrailingRecord,
    pub buffer_capacity: usize,
    pub cancellation: Option<CancellationToken>,
}

impl Default for DecodeOptions {
    fn default() -> Self {
        Self {
            trailing: TrailingRecord::default(),
            buffer_capacity: DEFAULT_BUFFER_CAPACITY,
            cancellation: None,
        }
    }
}

impl DecodeOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_trailing(mut self, trailing: TrailingRecord) -> Self {
        self.trailing = trailing;
        self
    }

    /// A capacity of zero is raised to one byte.
    pub fn with_buffer_capacity(mut self, capacity: usize) -> Self {
        self.buffer_capacity = capacity.max(1);
        self
    }

    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.cancellation = Some(token);
        self
    }
}

use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DecodeError {
    #[error("file not found: {}", path.display())]
    FileNotFound { path: PathBuf },
    #[error("failed to open {}: {source}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("truncated file header: only {len} bytes available")]
    TruncatedHeader { len: u64 },
    #[error("I/O error at byte offset {offset}: {source}")]
    Io {
        offset: u64,
        #[source]
        source: io::Error,
    },
    #[error("corrupt record at byte offset {offset}: length field {length} does not advance")]
    CorruptRecord { offset: u64, length: u32 },
    #[error("column {column} has {found} values, expected {expected}")]
    Schema {
        column: &'static str,
        expected: usize,
        found: usize,
    },
    #[error("records of layout {found} can not be collected into a {expected} table")]
    LayoutMismatch {
        expected: &'static str,
        found: &'static str,
    },
    #[error("decoding cancelled at byte offset {offset} after {rows} records")]
    Cancelled { offset: u64, rows: usize },
    #[error("{}: {source}", path.display())]
    InFile {
        path: PathBuf,
        #[source]
        source: Box<DecodeError>,
    },
}

impl DecodeError {
    pub(crate) fn open(path: PathBuf, source: io::Error) -> Self {
        if source.kind() == io::ErrorKind::NotFound {
            DecodeError::FileNotFound { path }
        } else {
            DecodeError::Open { path, source }
        }
    }

    /// Attaches the path of the decoded file, unless the error already names it.
    pub(crate) fn in_file(self, path: &Path) -> Self {
        match self {
            err @ (DecodeError::FileNotFound { .. }
            | DecodeError::Open { .. }
            | DecodeError::InFile { .. }) => err,
            other => DecodeError::InFile {
                path: path.to_path_buf(),
                source: Box::new(other),
            },
        }
    }

    /// The error without its file context.
    pub fn root(&self) -> &DecodeError {
        match self {
            DecodeError::InFile { source, .. } => source.root(),
            other => other,
        }
    }

    pub(crate) fn io(offset: u64) -> impl FnOnce(io::Error) -> Self {
        move |source| DecodeError::Io { offset, source }
    }
}

pub type Result<T> = std::result::Result<T, DecodeError>;

use std::path::PathBuf;

use crate::identifier::Nty;

/// Every way decoding an ACE file or an XSDIR directory can fail.
#[derive(Debug, thiserror::Error)]
pub enum AceError {
    #[error("'{0}' is neither a valid ZAID nor a valid SZAX")]
    InvalidIdentifier(String),

    #[error("class suffix '{0}' is not a recognized NTY class")]
    UnknownClass(String),

    #[error("unsupported ACE header version (first token parsed as {0})")]
    UnsupportedAceVersion(f64),

    #[error("nuclide '{id}' not found while seeking in {file}")]
    NuclideNotFound { id: String, file: PathBuf },

    #[error("XSS access out of range: pos={pos}, len={len}")]
    OutOfXssRange { pos: usize, len: usize },

    #[error("energy grid is not strictly ascending")]
    NonMonotonicEnergy,

    #[error("energy {e} out of tabulated range [{min}, {max})")]
    EnergyOutOfRange { e: f64, min: f64, max: f64 },

    #[error("invalid LNU tag: {0} (expected 1 or 2)")]
    InvalidLNU(i64),

    #[error("XSDIR file has no 'directory' section")]
    MissingDirectorySection,

    #[error("XSDIR directory entry does not match a known shape: '{line}'")]
    MalformedDirectoryEntry { line: String },

    #[error("NTY {0:?} is recognized but not implemented by this decoder")]
    NotImplemented(Nty),

    #[error("no XSDIR entry for '{id}' with NTY {nty:?}")]
    NotFound { id: String, nty: Nty },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, AceError>;

use std::path::PathBuf;
use std::str::Utf8Error;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, BridgeError>;

#[derive(Error, Debug)]
pub enum BridgeError {
    #[error("failed to load native library '{}': {source}", .path.display())]
    LibraryLoad {
        path: PathBuf,
        #[source]
        source: libloading::Error,
    },

    #[error("symbol '{symbol}' not found in '{}': {source}", .path.display())]
    SymbolNotFound {
        symbol: String,
        path: PathBuf,
        #[source]
        source: libloading::Error,
    },

    #[error("title contains an interior NUL byte at position {0}")]
    InvalidTitle(usize),

    #[error("title is not valid UTF-8: {0}")]
    InvalidUtf8(#[source] Utf8Error),

    #[error("native library returned a settings record without a title")]
    NullTitle,
}

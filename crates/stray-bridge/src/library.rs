//! Shared library loading and symbol lookup.

use std::path::{Path, PathBuf};

use libloading::Library;
use stray_core::abi::symbol_name;

use crate::error::{BridgeError, Result};

/// A loaded shared library.
pub struct NativeLibrary {
    library: Library,
    path: PathBuf,
}

impl NativeLibrary {
    /// Loads the library at `path`. Fails if the file is missing or is not a
    /// loadable library.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        log::debug!("loading native library '{}'", path.display());

        // SAFETY: loading runs the library's initializers; the backend is
        // trusted to have none with side effects we depend on.
        let library = unsafe { Library::new(path) }.map_err(|source| BridgeError::LibraryLoad {
            path: path.to_path_buf(),
            source,
        })?;

        Ok(Self {
            library,
            path: path.to_path_buf(),
        })
    }

    /// Resolves a NUL-terminated symbol name to a value of type `F`.
    ///
    /// # Safety
    ///
    /// `F` must match the symbol's real type, and the returned value must not
    /// be used after this library is dropped.
    pub unsafe fn symbol<F: Copy>(&self, symbol: &[u8]) -> Result<F> {
        // SAFETY: type agreement is the caller's contract.
        let found = unsafe { self.library.get::<F>(symbol) }.map_err(|source| {
            BridgeError::SymbolNotFound {
                symbol: symbol_name(symbol).to_string(),
                path: self.path.clone(),
                source,
            }
        })?;
        Ok(*found)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl std::fmt::Debug for NativeLibrary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NativeLibrary").field("path", &self.path).finish()
    }
}

//! Whole-file reads and writes with the path attached to every error.

use std::fs::File;
use std::io::Write as _;
use std::path::Path;

use crate::error::CodecError;

pub(crate) fn read_file(path: &Path) -> Result<Vec<u8>, CodecError> {
    let data = std::fs::read(path).map_err(|source| CodecError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    log::debug!("read {} bytes from {}", data.len(), path.display());
    Ok(data)
}

/// Create or truncate `path` and write `bytes`. The handle is flushed and
/// closed before returning, on success and on failure.
pub(crate) fn write_file(path: &Path, bytes: &[u8]) -> Result<(), CodecError> {
    let mut file = File::create(path).map_err(|source| CodecError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    file.write_all(bytes)
        .and_then(|()| file.flush())
        .map_err(|source| CodecError::Write {
            path: path.to_path_buf(),
            source,
        })?;
    log::debug!("wrote {} bytes to {}", bytes.len(), path.display());
    Ok(())
}

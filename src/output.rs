//! Writing rendered text buffers to files and terminals.
//!
//! Only the logical text is written: everything before the first NUL of
//! the buffer (or the whole buffer when it has none).

use std::io::Write;
use std::path::{Path, PathBuf};

use crate::buffer::PixelBuffer;

/// Errors that can occur when writing output.
#[derive(Debug, thiserror::Error)]
pub enum OutputError {
    #[error("failed to write '{}': {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("output error: {0}")]
    Io(#[from] std::io::Error),
}

/// Write the buffer's text to `path`, replacing any existing file.
pub fn write_to_file(path: impl AsRef<Path>, buffer: &PixelBuffer) -> Result<(), OutputError> {
    let path = path.as_ref();
    std::fs::write(path, buffer.text()).map_err(|source| OutputError::Write {
        path: path.to_path_buf(),
        source,
    })?;
    log::debug!("Wrote {} bytes to {}", buffer.text().len(), path.display());
    Ok(())
}

/// Write the buffer's text to any writer and flush it.
pub fn write_to<W: Write + ?Sized>(out: &mut W, buffer: &PixelBuffer) -> Result<(), OutputError> {
    out.write_all(buffer.text())?;
    out.flush()?;
    Ok(())
}

/// Write the buffer's text to standard output.
pub fn write_stdout(buffer: &PixelBuffer) -> Result<(), OutputError> {
    let stdout = std::io::stdout();
    let mut lock = stdout.lock();
    write_to(&mut lock, buffer)
}

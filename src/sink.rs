//! Destination file for the rendered line.

use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

#[derive(thiserror::Error, Debug)]
pub enum SinkError {
    #[error("open `{}`: {source}", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("write `{}`: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Replace the contents of `path` with `text`.
pub fn write_now_playing(path: &Path, text: &str) -> Result<(), SinkError> {
    let mut out = File::create(path).map_err(|source| SinkError::Open {
        path: path.to_path_buf(),
        source,
    })?;

    out.write_all(text.as_bytes())
        .and_then(|()| out.flush())
        .map_err(|source| SinkError::Write {
            path: path.to_path_buf(),
            source,
        })
}

//! Output helpers for the rendered document.

use std::io::Write;

use camino::{Utf8Path, Utf8PathBuf};
use cap_std::ambient_authority;
use cap_std::fs_utf8::Dir;
use showcase::ShowcaseError;

/// Writes the document to `writer`.
pub fn write_document<W: Write>(writer: &mut W, html: &str) -> Result<(), ShowcaseError> {
    writer
        .write_all(html.as_bytes())
        .and_then(|()| writer.flush())
        .map_err(|error| ShowcaseError::Io {
            message: error.to_string(),
        })
}

/// Writes the document to `path`, replacing any existing file.
pub fn write_document_to_file(path: &Utf8Path, html: &str) -> Result<(), ShowcaseError> {
    let file_name = path.file_name().ok_or_else(|| ShowcaseError::Io {
        message: format!("invalid output path '{path}': no file name"),
    })?;
    let parent = match path.parent() {
        Some(parent) if !parent.as_str().is_empty() => parent.to_path_buf(),
        _ => Utf8PathBuf::from("."),
    };
    let dir = Dir::open_ambient_dir(&parent, ambient_authority()).map_err(|error| {
        ShowcaseError::Io {
            message: format!("failed to open output directory '{parent}': {error}"),
        }
    })?;
    dir.write(file_name, html).map_err(|error| ShowcaseError::Io {
        message: format!("failed to write '{path}': {error}"),
    })?;
    tracing::info!(%path, "document written");
    Ok(())
}

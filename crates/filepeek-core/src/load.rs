use std::{fs, path::{Path, PathBuf}};

use crate::{
    classify::{classify, display_name, Format},
    models::FileSelection,
    pdf_info, transport,
};

#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("could not read {}: {}", display_name(.path), .source)]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

fn read_bytes(path: &Path) -> Result<Vec<u8>, LoadError> {
    fs::read(path).map_err(|source| LoadError::Read { path: path.to_path_buf(), source })
}

// Best-effort UTF-8; invalid sequences become U+FFFD instead of failing the open.
fn bytes_to_text(bytes: Vec<u8>) -> String {
    String::from_utf8(bytes).unwrap_or_else(|e| {
        let bytes = e.into_bytes();
        String::from_utf8_lossy(&bytes).into_owned()
    })
}

/// Read `path` into the payload the UI expects.
///
/// Returns `Ok(None)` for extensions the viewer does not handle; the file is
/// not touched in that case. Read failures are errors, never `None`.
pub fn load_selection(path: &Path) -> Result<Option<FileSelection>, LoadError> {
    let format = match classify(path) {
        Some(f) => f,
        None => return Ok(None),
    };
    let name = display_name(path);
    let bytes = read_bytes(path)?;
    let selection = match format {
        Format::Pdf => FileSelection::Pdf { info: pdf_info::inspect(&bytes), data: transport::encode(&bytes), name },
        Format::Text => FileSelection::Text { data: bytes_to_text(bytes), name },
        Format::Image(img) => FileSelection::Image { data: transport::data_uri(img.mime(), &bytes), name },
    };
    Ok(Some(selection))
}

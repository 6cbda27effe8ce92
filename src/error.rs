//! Errors raised inside the webview.
//!
//! - [`IpcError`] - talking to the host's `open_file` command
//! - [`RenderError`] - building a viewer for a file that did arrive
//! - [`ViewError`] - the page is missing an element the UI expects

use wasm_bindgen::JsValue;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum IpcError {
    #[error("browser window not available")]
    NoWindow,
    #[error("tauri IPC bridge not found")]
    NoBridge,
    /// The host rejected the call; carries its message verbatim.
    #[error("{0}")]
    Rejected(String),
    #[error("unexpected response from host: {0}")]
    BadResponse(String),
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RenderError {
    #[error("{0}")]
    Decode(String),
    #[error("could not create document blob: {0}")]
    Blob(String),
    #[error("could not create document frame: {0}")]
    Frame(String),
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ViewError {
    #[error("browser document not available")]
    NoDocument,
    #[error("missing element #{0}")]
    MissingElement(&'static str),
    #[error("could not attach handler: {0}")]
    Listener(String),
}

/// Best human-readable text for a thrown JS value.
pub fn describe(value: &JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{:?}", value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejected_message_is_verbatim() {
        let e = IpcError::Rejected("could not read gone.pdf: No such file or directory".into());
        assert_eq!(e.to_string(), "could not read gone.pdf: No such file or directory");
    }

    #[test]
    fn test_messages() {
        assert_eq!(ViewError::MissingElement("pdfViewer").to_string(), "missing element #pdfViewer");
        assert_eq!(RenderError::Blob("quota".into()).to_string(), "could not create document blob: quota");
    }
}

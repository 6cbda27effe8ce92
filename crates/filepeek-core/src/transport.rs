//! Text-safe encoding for bytes crossing the IPC boundary.

use base64::{engine::general_purpose::STANDARD, Engine as _};

#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("invalid base64 payload: {0}")]
    Base64(#[from] base64::DecodeError),
}

pub fn encode(bytes: &[u8]) -> String {
    STANDARD.encode(bytes)
}

pub fn decode(text: &str) -> Result<Vec<u8>, TransportError> {
    Ok(STANDARD.decode(text)?)
}

/// `data:<mime>;base64,<payload>`, usable directly as an `<img>` source.
pub fn data_uri(mime: &str, bytes: &[u8]) -> String {
    format!("data:{};base64,{}", mime, encode(bytes))
}

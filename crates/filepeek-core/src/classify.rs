use std::path::Path;

use crate::models::FileKind;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageFormat {
    Jpeg,
    Png,
    Gif,
    Bmp,
}

/// What a file is read as, decided from its extension alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Pdf,
    Text,
    Image(ImageFormat),
}

impl ImageFormat {
    pub fn mime(self) -> &'static str {
        match self {
            ImageFormat::Jpeg => "image/jpeg",
            ImageFormat::Png => "image/png",
            ImageFormat::Gif => "image/gif",
            ImageFormat::Bmp => "image/bmp",
        }
    }
}

impl Format {
    pub fn kind(self) -> FileKind {
        match self {
            Format::Pdf => FileKind::Pdf,
            Format::Text => FileKind::Text,
            Format::Image(_) => FileKind::Image,
        }
    }

    fn from_extension(ext: &str) -> Option<Format> {
        match ext.to_ascii_lowercase().as_str() {
            "pdf" => Some(Format::Pdf),
            "txt" => Some(Format::Text),
            "jpg" | "jpeg" => Some(Format::Image(ImageFormat::Jpeg)),
            "png" => Some(Format::Image(ImageFormat::Png)),
            "gif" => Some(Format::Image(ImageFormat::Gif)),
            "bmp" => Some(Format::Image(ImageFormat::Bmp)),
            _ => None,
        }
    }
}

/// Classify by extension, case-insensitively. No content sniffing.
pub fn classify(path: &Path) -> Option<Format> {
    path.extension().and_then(|s| s.to_str()).and_then(Format::from_extension)
}

pub fn display_name(path: &Path) -> String {
    path.file_name().map(|s| s.to_string_lossy().into_owned()).unwrap_or_default()
}

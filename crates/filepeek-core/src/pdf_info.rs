use serde::{Deserialize, Serialize};

/// Page count and document metadata for a PDF.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PdfInfo {
    pub pages: u32,
    pub encrypted: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
}

impl PdfInfo {
    /// One line for the toolbar, e.g. `3 pages · Quarterly · Ann Lee`.
    pub fn summary(&self) -> String {
        let mut parts = vec![match self.pages {
            1 => "1 page".to_string(),
            n => format!("{} pages", n),
        }];
        if let Some(t) = &self.title { parts.push(t.clone()); }
        if let Some(a) = &self.author { parts.push(a.clone()); }
        if self.encrypted { parts.push("encrypted".to_string()); }
        parts.join(" \u{00B7} ")
    }
}

/// Best-effort: `None` when lopdf cannot parse the document.
#[cfg(feature = "pdf-info")]
pub fn inspect(bytes: &[u8]) -> Option<PdfInfo> {
    use lopdf::{Document, Object};

    let doc = Document::load_mem(bytes).ok()?;
    let info = doc.trailer.get(b"Info").ok().and_then(|obj| match obj {
        Object::Reference(oid) => doc.get_dictionary(*oid).ok(),
        Object::Dictionary(dict) => Some(dict),
        _ => None,
    });
    let field = |key: &[u8]| {
        info.and_then(|dict| dict.get(key).ok())
            .and_then(|obj| obj.as_str().ok())
            .map(pdf_string_to_text)
            .filter(|s| !s.trim().is_empty())
    };
    Some(PdfInfo {
        pages: doc.get_pages().len() as u32,
        encrypted: doc.is_encrypted(),
        title: field(b"Title"),
        author: field(b"Author"),
    })
}

#[cfg(not(feature = "pdf-info"))]
pub fn inspect(_bytes: &[u8]) -> Option<PdfInfo> {
    None
}

// Text strings are UTF-16BE with a BOM, or PDFDocEncoding (read lossily).
#[cfg_attr(not(feature = "pdf-info"), allow(dead_code))]
fn pdf_string_to_text(bytes: &[u8]) -> String {
    match bytes {
        [0xFE, 0xFF, rest @ ..] => {
            let units = rest.chunks_exact(2).map(|c| u16::from_be_bytes([c[0], c[1]]));
            char::decode_utf16(units).map(|r| r.unwrap_or(char::REPLACEMENT_CHARACTER)).collect()
        }
        _ => String::from_utf8_lossy(bytes).into_owned(),
    }
}

use serde::{Deserialize, Serialize};

use crate::pdf_info::PdfInfo;

/// Event the host emits on the main window after a file is dropped on it.
pub const FILE_DROP_EVENT: &str = "filepeek:file-dropped";

/// Payload returned by the host's `open_file` command.
///
/// Serialized as `{ "type": "pdf" | "text" | "image", "data": ..., "name": ... }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum FileSelection {
    /// `data` is standard base64 of the raw document bytes. `info` is absent
    /// when the document could not be inspected.
    Pdf {
        data: String,
        name: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        info: Option<PdfInfo>,
    },
    /// `data` is the decoded file content.
    Text { data: String, name: String },
    /// `data` is a `data:<mime>;base64,...` URI.
    Image { data: String, name: String },
}

/// Payload of [`FILE_DROP_EVENT`]; carries the same three outcomes as the
/// `open_file` command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum DropOutcome {
    Opened { selection: FileSelection },
    Ignored,
    Failed { message: String },
}

impl From<Result<Option<FileSelection>, String>> for DropOutcome {
    fn from(result: Result<Option<FileSelection>, String>) -> Self {
        match result {
            Ok(Some(selection)) => DropOutcome::Opened { selection },
            Ok(None) => DropOutcome::Ignored,
            Err(message) => DropOutcome::Failed { message },
        }
    }
}

impl DropOutcome {
    pub fn into_result(self) -> Result<Option<FileSelection>, String> {
        match self {
            DropOutcome::Opened { selection } => Ok(Some(selection)),
            DropOutcome::Ignored => Ok(None),
            DropOutcome::Failed { message } => Err(message),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FileKind {
    Pdf,
    Text,
    Image,
}

impl FileSelection {
    pub fn kind(&self) -> FileKind {
        match self {
            FileSelection::Pdf { .. } => FileKind::Pdf,
            FileSelection::Text { .. } => FileKind::Text,
            FileSelection::Image { .. } => FileKind::Image,
        }
    }

    /// Base file name, for labelling only.
    pub fn name(&self) -> &str {
        match self {
            FileSelection::Pdf { name, .. }
            | FileSelection::Text { name, .. }
            | FileSelection::Image { name, .. } => name,
        }
    }

    pub fn data(&self) -> &str {
        match self {
            FileSelection::Pdf { data, .. }
            | FileSelection::Text { data, .. }
            | FileSelection::Image { data, .. } => data,
        }
    }
}

impl FileKind {
    pub fn as_str(self) -> &'static str {
        match self {
            FileKind::Pdf => "pdf",
            FileKind::Text => "text",
            FileKind::Image => "image",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_wire_shape_per_variant() {
        let cases = [
            (FileSelection::Pdf { data: "JVBERg==".into(), name: "a.pdf".into(), info: None }, "pdf"),
            (FileSelection::Text { data: "hi".into(), name: "a.txt".into() }, "text"),
            (FileSelection::Image { data: "data:image/png;base64,".into(), name: "a.png".into() }, "image"),
        ];
        for (sel, tag) in cases {
            let v = serde_json::to_value(&sel).unwrap();
            assert_eq!(v, json!({ "type": tag, "data": sel.data(), "name": sel.name() }));
            assert_eq!(sel.kind().as_str(), tag);
        }
    }

    #[test]
    fn test_none_is_null_and_parses_back() {
        let none: Option<FileSelection> = None;
        assert_eq!(serde_json::to_string(&none).unwrap(), "null");
        let parsed: Option<FileSelection> = serde_json::from_str("null").unwrap();
        assert!(parsed.is_none());

        let raw = r#"{"type":"text","data":"hello\nworld","name":"notes.txt"}"#;
        let parsed: Option<FileSelection> = serde_json::from_str(raw).unwrap();
        assert_eq!(
            parsed,
            Some(FileSelection::Text { data: "hello\nworld".into(), name: "notes.txt".into() })
        );
    }

    #[test]
    fn test_pdf_info_is_optional_on_the_wire() {
        let info = PdfInfo { pages: 2, encrypted: false, title: Some("T".into()), author: None };
        let sel = FileSelection::Pdf { data: "".into(), name: "a.pdf".into(), info: Some(info) };
        let v = serde_json::to_value(&sel).unwrap();
        assert_eq!(v["info"], json!({ "pages": 2, "encrypted": false, "title": "T" }));

        let parsed: FileSelection = serde_json::from_str(r#"{"type":"pdf","data":"","name":"a.pdf"}"#).unwrap();
        assert_eq!(parsed, FileSelection::Pdf { data: "".into(), name: "a.pdf".into(), info: None });
    }

    #[test]
    fn test_drop_outcome_round_trips_results() {
        let sel = FileSelection::Text { data: "x".into(), name: "a.txt".into() };
        let cases: [Result<Option<FileSelection>, String>; 3] =
            [Ok(Some(sel.clone())), Ok(None), Err("could not read a.txt: denied".into())];
        for result in cases {
            let outcome = DropOutcome::from(result.clone());
            let wire = serde_json::to_string(&outcome).unwrap();
            let back: DropOutcome = serde_json::from_str(&wire).unwrap();
            assert_eq!(back.into_result(), result);
        }
        let v = serde_json::to_value(DropOutcome::from(Ok(Some(sel)))).unwrap();
        assert_eq!(v, json!({ "status": "opened", "selection": { "type": "text", "data": "x", "name": "a.txt" } }));
        assert_eq!(serde_json::to_value(DropOutcome::Ignored).unwrap(), json!({ "status": "ignored" }));
    }

    #[test]
    fn test_unknown_tag_is_rejected() {
        let raw = r#"{"type":"video","data":"","name":"a.mp4"}"#;
        assert!(serde_json::from_str::<FileSelection>(raw).is_err());
    }
}

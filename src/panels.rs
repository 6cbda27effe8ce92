//! Which viewer panel is showing, and what it holds.
//!
//! [`DisplayController`] is the whole state machine: `Welcome` until the first
//! file arrives, then exactly one of the PDF, text or image panels. It knows
//! nothing about the DOM; `view` draws whatever [`Panels`] says.

use filepeek_core::{transport, FileSelection};

use crate::error::RenderError;

pub const PDF_MIME: &str = "application/pdf";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Panel {
    #[default]
    Welcome,
    Pdf,
    Text,
    Image,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum PdfView {
    #[default]
    Empty,
    /// Object URL to load in the document frame.
    Frame(String),
    /// Shown inline in the PDF panel only.
    Failed(String),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Panels {
    pub visible: Panel,
    pub label: String,
    /// Page count and metadata line; PDFs only.
    pub details: String,
    pub pdf: PdfView,
    pub text: String,
    pub image_src: String,
}

impl Panels {
    pub fn is_visible(&self, panel: Panel) -> bool {
        self.visible == panel
    }
}

/// Short-lived display sources for binary documents.
pub trait ObjectUrls {
    fn create(&mut self, bytes: &[u8], mime: &str) -> Result<String, RenderError>;
    fn revoke(&mut self, url: &str);
}

/// What the caller should do after a request completes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Shown(Panel),
    Unchanged,
    /// Tell the user; panels were not touched.
    Failed(String),
}

pub struct DisplayController<U> {
    panels: Panels,
    urls: U,
    live_url: Option<String>,
    busy: bool,
}

impl<U: ObjectUrls> DisplayController<U> {
    pub fn new(urls: U) -> Self {
        DisplayController { panels: Panels::default(), urls, live_url: None, busy: false }
    }

    pub fn panels(&self) -> &Panels {
        &self.panels
    }

    pub fn is_busy(&self) -> bool {
        self.busy
    }

    /// Claim the single request slot. `false` means one is already in flight
    /// and this trigger should be dropped.
    pub fn begin_open(&mut self) -> bool {
        if self.busy { return false; }
        self.busy = true;
        true
    }

    pub fn finish_open(&mut self, result: Result<Option<FileSelection>, String>) -> Outcome {
        self.busy = false;
        match result {
            Err(message) => Outcome::Failed(message),
            Ok(None) => Outcome::Unchanged,
            Ok(Some(selection)) => Outcome::Shown(self.show(selection)),
        }
    }

    fn show(&mut self, selection: FileSelection) -> Panel {
        self.clear();
        let panel = match selection {
            FileSelection::Pdf { data, name, info } => {
                self.panels.label = name;
                self.panels.details = info.map(|i| i.summary()).unwrap_or_default();
                self.panels.pdf = self.pdf_view(&data);
                Panel::Pdf
            }
            FileSelection::Text { data, name } => {
                self.panels.label = name;
                self.panels.text = data;
                Panel::Text
            }
            FileSelection::Image { data, name } => {
                self.panels.label = name;
                self.panels.image_src = data;
                Panel::Image
            }
        };
        self.panels.visible = panel;
        panel
    }

    fn clear(&mut self) {
        self.release_url();
        self.panels.details.clear();
        self.panels.pdf = PdfView::Empty;
        self.panels.text.clear();
        self.panels.image_src.clear();
    }

    fn pdf_view(&mut self, data: &str) -> PdfView {
        let bytes = match transport::decode(data) {
            Ok(b) => b,
            Err(e) => return PdfView::Failed(RenderError::Decode(e.to_string()).to_string()),
        };
        match self.urls.create(&bytes, PDF_MIME) {
            Ok(url) => {
                self.live_url = Some(url.clone());
                PdfView::Frame(url)
            }
            Err(e) => PdfView::Failed(e.to_string()),
        }
    }

    /// The document frame finished loading `url`; its handle can go.
    pub fn frame_loaded(&mut self, url: &str) {
        if self.live_url.as_deref() == Some(url) { self.release_url(); }
    }

    /// The frame for the current document could not be built.
    pub fn frame_failed(&mut self, error: RenderError) {
        self.release_url();
        self.panels.pdf = PdfView::Failed(error.to_string());
    }

    fn release_url(&mut self) {
        if let Some(url) = self.live_url.take() { self.urls.revoke(&url); }
    }
}

//! Draws [`Panels`] onto the page's pre-built elements.

use std::cell::RefCell;

use wasm_bindgen::{closure::Closure, JsCast};
use web_sys::{Document, Element, HtmlButtonElement, HtmlIFrameElement, HtmlImageElement};

use crate::{
    error::{describe, RenderError, ViewError},
    panels::{Panel, Panels, PdfView},
};

const HIDDEN: &str = "hidden";

pub struct Dom {
    document: Document,
    pub button: HtmlButtonElement,
    label: Element,
    details: Element,
    welcome: Element,
    content: Element,
    pdf_viewer: Element,
    text_viewer: Element,
    text_content: Element,
    image_viewer: Element,
    image_content: HtmlImageElement,
    /// The live document frame and its `onload` handler.
    live_frame: RefCell<Option<(HtmlIFrameElement, Closure<dyn FnMut()>)>>,
}

fn by_id(document: &Document, id: &'static str) -> Result<Element, ViewError> {
    document.get_element_by_id(id).ok_or(ViewError::MissingElement(id))
}

fn set_hidden(el: &Element, hidden: bool) {
    let _ = el.class_list().toggle_with_force(HIDDEN, hidden);
}

impl Dom {
    pub fn lookup() -> Result<Self, ViewError> {
        let document = web_sys::window().and_then(|w| w.document()).ok_or(ViewError::NoDocument)?;
        let button = by_id(&document, "openFileBtn")?
            .dyn_into::<HtmlButtonElement>()
            .map_err(|_| ViewError::MissingElement("openFileBtn"))?;
        let image_content = by_id(&document, "imageContent")?
            .dyn_into::<HtmlImageElement>()
            .map_err(|_| ViewError::MissingElement("imageContent"))?;
        Ok(Dom {
            label: by_id(&document, "fileName")?,
            details: by_id(&document, "fileDetails")?,
            welcome: by_id(&document, "welcomeScreen")?,
            content: by_id(&document, "contentDisplay")?,
            pdf_viewer: by_id(&document, "pdfViewer")?,
            text_viewer: by_id(&document, "textViewer")?,
            text_content: by_id(&document, "textContent")?,
            image_viewer: by_id(&document, "imageViewer")?,
            button,
            image_content,
            document,
            live_frame: RefCell::new(None),
        })
    }

    pub fn set_busy(&self, busy: bool) {
        self.button.set_disabled(busy);
    }

    pub fn alert(&self, message: &str) {
        if let Some(window) = web_sys::window() {
            let _ = window.alert_with_message(message);
        }
    }

    /// Sync every panel with `panels`. `on_frame_load` fires once with the
    /// object URL after a PDF frame finishes loading.
    pub fn render(&self, panels: &Panels, on_frame_load: impl FnOnce(String) + 'static) -> Result<(), RenderError> {
        self.label.set_text_content(Some(&panels.label));
        self.details.set_text_content(Some(&panels.details));
        set_hidden(&self.content, panels.is_visible(Panel::Welcome));
        set_hidden(&self.welcome, !panels.is_visible(Panel::Welcome));
        set_hidden(&self.pdf_viewer, !panels.is_visible(Panel::Pdf));
        set_hidden(&self.text_viewer, !panels.is_visible(Panel::Text));
        set_hidden(&self.image_viewer, !panels.is_visible(Panel::Image));

        // textContent, never innerHTML: files that look like markup stay text
        self.text_content.set_text_content(Some(&panels.text));
        if panels.image_src.is_empty() {
            let _ = self.image_content.remove_attribute("src");
        } else {
            self.image_content.set_src(&panels.image_src);
        }
        self.render_pdf(&panels.pdf, on_frame_load)
    }

    pub fn render_pdf(&self, pdf: &PdfView, on_frame_load: impl FnOnce(String) + 'static) -> Result<(), RenderError> {
        self.drop_frame();
        self.pdf_viewer.set_inner_html("");
        match pdf {
            PdfView::Empty => Ok(()),
            PdfView::Frame(url) => {
                let result = self.frame(url, on_frame_load);
                if let Err(e) = &result { self.inline_error(&e.to_string()); }
                result
            }
            PdfView::Failed(message) => {
                self.inline_error(message);
                Ok(())
            }
        }
    }

    fn frame(&self, url: &str, on_load: impl FnOnce(String) + 'static) -> Result<(), RenderError> {
        let iframe = self
            .document
            .create_element("iframe")
            .map_err(|e| RenderError::Frame(describe(&e)))?
            .dyn_into::<HtmlIFrameElement>()
            .map_err(|_| RenderError::Frame("not an iframe".into()))?;
        let style = iframe.style();
        for (key, value) in [("width", "100%"), ("height", "100%"), ("border", "none")] {
            style.set_property(key, value).map_err(|e| RenderError::Frame(describe(&e)))?;
        }
        let loaded = url.to_string();
        let callback = Closure::once(move || on_load(loaded));
        iframe.set_onload(Some(callback.as_ref().unchecked_ref()));
        iframe.set_src(url);
        self.pdf_viewer.append_child(&iframe).map_err(|e| RenderError::Frame(describe(&e)))?;
        *self.live_frame.borrow_mut() = Some((iframe, callback));
        Ok(())
    }

    // Detach before the closure is freed so a late load cannot call into it.
    fn drop_frame(&self) {
        if let Some((iframe, _callback)) = self.live_frame.borrow_mut().take() {
            iframe.set_onload(None);
        }
    }

    fn inline_error(&self, message: &str) {
        self.pdf_viewer.set_inner_html("");
        if let Ok(div) = self.document.create_element("div") {
            div.set_class_name("render-error");
            div.set_text_content(Some(&format!("Error loading PDF: {}", message)));
            let _ = self.pdf_viewer.append_child(&div);
        }
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    const FIXTURE: &str = r#"
        <button id="openFileBtn"></button>
        <span id="fileName"></span><span id="fileDetails"></span>
        <section id="welcomeScreen"></section>
        <section id="contentDisplay" class="hidden">
          <div id="pdfViewer" class="hidden"></div>
          <div id="textViewer" class="hidden"><pre id="textContent"></pre></div>
          <div id="imageViewer" class="hidden"><img id="imageContent" /></div>
        </section>"#;

    fn mount() -> Dom {
        let document = web_sys::window().unwrap().document().unwrap();
        document.body().unwrap().set_inner_html(FIXTURE);
        Dom::lookup().unwrap()
    }

    fn hidden(dom: &Dom, id: &str) -> bool {
        dom.document.get_element_by_id(id).unwrap().class_list().contains(HIDDEN)
    }

    #[wasm_bindgen_test]
    fn test_text_is_never_parsed_as_markup() {
        let dom = mount();
        let panels = Panels {
            visible: Panel::Text,
            label: "page.html".into(),
            text: "<b>x</b>".into(),
            ..Panels::default()
        };
        dom.render(&panels, |_| {}).unwrap();
        assert_eq!(dom.text_content.child_element_count(), 0);
        assert_eq!(dom.text_content.text_content().as_deref(), Some("<b>x</b>"));
        assert!(!hidden(&dom, "textViewer"));
        assert!(hidden(&dom, "welcomeScreen"));
        assert!(hidden(&dom, "pdfViewer"));
    }

    #[wasm_bindgen_test]
    fn test_frame_handler_released_with_the_panel() {
        let dom = mount();
        let panels = Panels {
            visible: Panel::Pdf,
            details: "2 pages".into(),
            pdf: PdfView::Frame("about:blank".into()),
            ..Panels::default()
        };
        dom.render(&panels, |_| {}).unwrap();
        assert!(dom.live_frame.borrow().is_some());
        assert_eq!(dom.pdf_viewer.child_element_count(), 1);
        assert_eq!(dom.details.text_content().as_deref(), Some("2 pages"));

        let iframe = dom.live_frame.borrow().as_ref().map(|(f, _)| f.clone()).unwrap();
        dom.render(&Panels::default(), |_| {}).unwrap();
        assert!(dom.live_frame.borrow().is_none());
        assert!(iframe.onload().is_none());
        assert_eq!(dom.pdf_viewer.child_element_count(), 0);
        assert_eq!(dom.details.text_content().as_deref(), Some(""));
    }

    #[wasm_bindgen_test]
    fn test_failed_pdf_shows_inline() {
        let dom = mount();
        let panels = Panels { visible: Panel::Pdf, pdf: PdfView::Failed("bad".into()), ..Panels::default() };
        dom.render(&panels, |_| {}).unwrap();
        assert!(dom.live_frame.borrow().is_none());
        let text = dom.pdf_viewer.text_content().unwrap_or_default();
        assert_eq!(text, "Error loading PDF: bad");
    }
}

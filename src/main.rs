mod blob;
mod error;
mod ipc;
mod panels;
mod view;

use std::{cell::RefCell, rc::Rc};

use filepeek_core::FileSelection;
use wasm_bindgen::{closure::Closure, JsCast};
use wasm_bindgen_futures::spawn_local;
use web_sys::console;

use crate::{
    blob::BlobUrls,
    error::{describe, ViewError},
    panels::{DisplayController, Outcome},
    view::Dom,
};

type Controller = Rc<RefCell<DisplayController<BlobUrls>>>;

#[cfg(all(test, target_arch = "wasm32"))]
wasm_bindgen_test::wasm_bindgen_test_configure!(run_in_browser);

fn main() {
    console_error_panic_hook::set_once();
    if let Err(e) = start() {
        console::error_1(&format!("filepeek: {}", e).into());
    }
}

fn start() -> Result<(), ViewError> {
    let dom = Rc::new(Dom::lookup()?);
    let controller: Controller = Rc::new(RefCell::new(DisplayController::new(BlobUrls)));
    if let Err(e) = dom.render(controller.borrow().panels(), |_| {}) {
        console::error_1(&format!("filepeek: initial render failed: {}", e).into());
    }

    {
        let dom = dom.clone();
        let controller = controller.clone();
        let listening = ipc::on_file_drop(move |result| file_dropped(&dom, &controller, result));
        if let Err(e) = listening {
            console::warn_1(&format!("filepeek: drag and drop unavailable: {}", e).into());
        }
    }

    let on_click = {
        let dom = dom.clone();
        Closure::wrap(Box::new(move || open_clicked(dom.clone(), controller.clone())) as Box<dyn Fn()>)
    };
    dom.button
        .add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())
        .map_err(|e| ViewError::Listener(describe(&e)))?;
    // lives as long as the page
    on_click.forget();
    Ok(())
}

fn open_clicked(dom: Rc<Dom>, controller: Controller) {
    if !controller.borrow_mut().begin_open() {
        console::warn_1(&"filepeek: open_file already in flight, ignoring click".into());
        return;
    }
    dom.set_busy(controller.borrow().is_busy());
    spawn_local(async move {
        let result = ipc::open_file().await.map_err(|e| e.to_string());
        if let Err(message) = &result {
            console::error_1(&format!("filepeek: open_file failed: {}", message).into());
        }
        finish(&dom, &controller, result);
    });
}

fn file_dropped(dom: &Dom, controller: &Controller, result: Result<Option<FileSelection>, String>) {
    if !controller.borrow_mut().begin_open() {
        console::warn_1(&"filepeek: open_file in flight, ignoring dropped file".into());
        return;
    }
    if let Err(message) = &result {
        console::error_1(&format!("filepeek: dropped file failed: {}", message).into());
    }
    finish(dom, controller, result);
}

fn finish(dom: &Dom, controller: &Controller, result: Result<Option<FileSelection>, String>) {
    let outcome = controller.borrow_mut().finish_open(result);
    dom.set_busy(controller.borrow().is_busy());
    match outcome {
        Outcome::Shown(_) => show(dom, controller),
        Outcome::Unchanged => {}
        Outcome::Failed(message) => dom.alert(&format!("Error opening file: {}", message)),
    }
}

fn show(dom: &Dom, controller: &Controller) {
    let weak = Rc::downgrade(controller);
    let rendered = dom.render(controller.borrow().panels(), move |url| {
        if let Some(c) = weak.upgrade() { c.borrow_mut().frame_loaded(&url); }
    });
    if let Err(e) = rendered {
        console::error_1(&format!("filepeek: pdf render failed: {}", e).into());
        controller.borrow_mut().frame_failed(e);
    }
}

//! Calls into the host over the Tauri IPC bridge.
//!
//! The bridge is `window.__TAURI__`, exposed because the host config sets
//! `withGlobalTauri`. `tauri.invoke` runs commands and `event.listen`
//! subscribes to host events. Nothing else leaves the webview.

use filepeek_core::{DropOutcome, FileSelection, FILE_DROP_EVENT};
use js_sys::{Function, Object, Promise, Reflect};
use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;

use crate::error::{describe, IpcError};

const OPEN_FILE: &str = "open_file";

/// `window.__TAURI__[module][method]`, with the module as `this`.
fn bridge(module: &str, method: &str) -> Result<(Object, Function), IpcError> {
    let window = web_sys::window().ok_or(IpcError::NoWindow)?;
    let target = Reflect::get(&window, &"__TAURI__".into())
        .ok()
        .and_then(|v| Reflect::get(&v, &module.into()).ok())
        .and_then(|v| v.dyn_into::<Object>().ok())
        .ok_or(IpcError::NoBridge)?;
    let function = Reflect::get(&target, &method.into())
        .ok()
        .and_then(|v| v.dyn_into::<Function>().ok())
        .ok_or(IpcError::NoBridge)?;
    Ok((target, function))
}

/// Ask the host to show the open dialog and read the chosen file.
///
/// `Ok(None)` when the user cancelled or picked an unsupported file.
pub async fn open_file() -> Result<Option<FileSelection>, IpcError> {
    let (tauri, invoke) = bridge("tauri", "invoke")?;
    let promise = invoke
        .call1(&tauri, &OPEN_FILE.into())
        .map_err(|e| IpcError::Rejected(describe(&e)))?
        .dyn_into::<Promise>()
        .map_err(|_| IpcError::BadResponse("invoke did not return a promise".into()))?;
    let value = JsFuture::from(promise).await.map_err(|e| IpcError::Rejected(describe(&e)))?;
    decode_response(value)
}

/// Call `handler` with the host's read result each time a file is dropped on
/// the window. The subscription lasts as long as the page.
pub fn on_file_drop(handler: impl Fn(Result<Option<FileSelection>, String>) + 'static) -> Result<(), IpcError> {
    let (event, listen) = bridge("event", "listen")?;
    let callback = Closure::wrap(Box::new(move |event: JsValue| {
        let payload = Reflect::get(&event, &"payload".into()).unwrap_or(JsValue::UNDEFINED);
        handler(decode_drop(payload).unwrap_or_else(|e| Err(e.to_string())));
    }) as Box<dyn FnMut(JsValue)>);
    listen
        .call2(&event, &FILE_DROP_EVENT.into(), callback.as_ref().unchecked_ref())
        .map_err(|e| IpcError::Rejected(describe(&e)))?;
    callback.forget();
    Ok(())
}

fn decode_response(value: JsValue) -> Result<Option<FileSelection>, IpcError> {
    if value.is_null() || value.is_undefined() { return Ok(None); }
    serde_wasm_bindgen::from_value(value).map_err(|e| IpcError::BadResponse(e.to_string()))
}

fn decode_drop(payload: JsValue) -> Result<Result<Option<FileSelection>, String>, IpcError> {
    serde_wasm_bindgen::from_value::<DropOutcome>(payload)
        .map(DropOutcome::into_result)
        .map_err(|e| IpcError::BadResponse(e.to_string()))
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    fn text() -> FileSelection {
        FileSelection::Text { data: "hello".into(), name: "a.txt".into() }
    }

    #[wasm_bindgen_test]
    fn test_null_and_undefined_mean_nothing_picked() {
        assert_eq!(decode_response(JsValue::NULL).unwrap(), None);
        assert_eq!(decode_response(JsValue::UNDEFINED).unwrap(), None);
    }

    #[wasm_bindgen_test]
    fn test_malformed_response_is_an_error() {
        assert!(matches!(decode_response(Object::new().into()), Err(IpcError::BadResponse(_))));
        assert!(matches!(decode_response(JsValue::from_str("pdf")), Err(IpcError::BadResponse(_))));
    }

    #[wasm_bindgen_test]
    fn test_well_formed_response_decodes() {
        assert_eq!(decode_response(serde_wasm_bindgen::to_value(&text()).unwrap()).unwrap(), Some(text()));
    }

    #[wasm_bindgen_test]
    fn test_drop_payloads() {
        let opened = serde_wasm_bindgen::to_value(&DropOutcome::Opened { selection: text() }).unwrap();
        assert_eq!(decode_drop(opened).unwrap(), Ok(Some(text())));
        let ignored = serde_wasm_bindgen::to_value(&DropOutcome::Ignored).unwrap();
        assert_eq!(decode_drop(ignored).unwrap(), Ok(None));
        let failed = serde_wasm_bindgen::to_value(&DropOutcome::Failed { message: "could not read a.txt: denied".into() }).unwrap();
        assert_eq!(decode_drop(failed).unwrap(), Err("could not read a.txt: denied".to_string()));
        assert!(decode_drop(JsValue::NULL).is_err());
    }
}

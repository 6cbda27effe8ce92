use std::sync::Mutex;

use tauri::Window;

/// Process-wide host state, managed by Tauri.
///
/// Holds the main window from setup until the window is destroyed so dialogs
/// can be parented to it.
#[derive(Default)]
pub struct AppState {
    main_window: Mutex<Option<Window>>,
}

impl AppState {
    pub fn attach(&self, window: Window) {
        if let Ok(mut slot) = self.main_window.lock() { *slot = Some(window); }
    }

    pub fn detach(&self, label: &str) {
        if let Ok(mut slot) = self.main_window.lock() {
            if slot.as_ref().map(|w| w.label() == label).unwrap_or(false) { *slot = None; }
        }
    }

    pub fn main_window(&self) -> Option<Window> {
        self.main_window.lock().ok().and_then(|w| w.clone())
    }

    /// Whether `label` is the window the UI runs in.
    pub fn is_main(&self, label: &str) -> bool {
        self.main_window().map(|w| w.label() == label).unwrap_or(false)
    }
}

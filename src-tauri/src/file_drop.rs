use std::path::PathBuf;

use filepeek_core::{DropOutcome, FILE_DROP_EVENT};
use tauri::{async_runtime::spawn_blocking, Manager, Window};

use crate::{commands::open::read_picked, AppState};

// Only the first path is opened; the viewer shows one document at a time.
pub(crate) fn drop_outcome(paths: &[PathBuf]) -> Option<DropOutcome> {
    let first = paths.first()?;
    if paths.len() > 1 {
        log::info!("filepeek: file drop with {} paths, opening {} only", paths.len(), first.display());
    }
    Some(DropOutcome::from(read_picked(Some(first.clone()))))
}

/// Read a file dropped on `window` and hand the result to its UI.
pub fn handle_drop(window: &Window, paths: Vec<PathBuf>) {
    if !window.state::<AppState>().is_main(window.label()) {
        log::warn!("filepeek: file drop ignored on window={}", window.label());
        return;
    }
    let window = window.clone();
    spawn_blocking(move || {
        let outcome = match drop_outcome(&paths) {
            Some(o) => o,
            None => return,
        };
        if let Err(e) = window.emit(FILE_DROP_EVENT, &outcome) {
            log::error!("filepeek: emit {} failed: {:?}", FILE_DROP_EVENT, e);
        }
    });
}

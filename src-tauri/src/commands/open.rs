use std::{path::PathBuf, time::Instant};

use filepeek_core::{load_selection, FileSelection, DIALOG_FILTERS};
use tauri::{api::dialog::blocking::FileDialogBuilder, async_runtime::spawn_blocking, State, Window};

use crate::AppState;

fn pick_file(parent: &Window) -> Option<PathBuf> {
    let mut dialog = FileDialogBuilder::new();
    for filter in DIALOG_FILTERS.iter() {
        dialog = dialog.add_filter(filter.name, filter.extensions);
    }
    dialog.set_parent(parent).pick_file()
}

// Turn a picked (or dropped) path into the IPC response. Split from
// `open_file` so it runs without a window.
pub(crate) fn read_picked(picked: Option<PathBuf>) -> Result<Option<FileSelection>, String> {
    let path = match picked {
        Some(p) => p,
        None => {
            log::info!("filepeek: open_file cancelled");
            return Ok(None);
        }
    };
    let t0 = Instant::now();
    match load_selection(&path) {
        Ok(Some(selection)) => {
            log::info!(
                "filepeek: open_file kind={} name={} payload={}B elapsed={}ms",
                selection.kind().as_str(),
                selection.name(),
                selection.data().len(),
                t0.elapsed().as_millis()
            );
            Ok(Some(selection))
        }
        Ok(None) => {
            log::warn!("filepeek: open_file unsupported extension file={}", path.display());
            Ok(None)
        }
        Err(e) => {
            log::error!("filepeek: open_file failed file={}: {:?}", path.display(), e);
            Err(e.to_string())
        }
    }
}

#[tauri::command]
pub async fn open_file(window: Window, state: State<'_, AppState>) -> Result<Option<FileSelection>, String> {
    if !state.is_main(window.label()) {
        log::warn!("filepeek: open_file rejected from window={}", window.label());
        return Err("open_file is only available to the main window".into());
    }
    spawn_blocking(move || read_picked(pick_file(&window)))
        .await
        .map_err(|e| format!("join error: {:?}", e))?
}

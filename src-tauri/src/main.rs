#![cfg_attr(all(not(debug_assertions), target_os = "windows"), windows_subsystem = "windows")]

mod commands;
mod config;
mod file_drop;
mod state;

use tauri::{FileDropEvent, Manager, WindowEvent};

use crate::config::HostConfig;
pub use crate::state::AppState;

const MAIN_WINDOW: &str = "main";

fn init_logging() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
}

fn main() {
    init_logging();
    let config = HostConfig::from_env();

    tauri::Builder::default()
        .manage(AppState::default())
        .setup(move |app| {
            match app.get_window(MAIN_WINDOW) {
                Some(window) => {
                    if config.dev_mode { open_inspector(&window); }
                    app.state::<AppState>().attach(window);
                }
                None => log::error!("filepeek: no `{}` window in tauri.conf.json", MAIN_WINDOW),
            }
            Ok(())
        })
        .on_window_event(|event| {
            let window = event.window();
            match event.event() {
                WindowEvent::FileDrop(FileDropEvent::Dropped(paths)) => file_drop::handle_drop(window, paths.clone()),
                WindowEvent::Destroyed => {
                    window.state::<AppState>().detach(window.label());
                    log::info!("filepeek: window {} closed", window.label());
                }
                _ => {}
            }
        })
        .invoke_handler(tauri::generate_handler![commands::open::open_file])
        .run(tauri::generate_context!())
        .expect("error while running tauri application");
}

#[cfg(any(debug_assertions, feature = "devtools"))]
fn open_inspector(window: &tauri::Window) {
    window.open_devtools();
}

#[cfg(not(any(debug_assertions, feature = "devtools")))]
fn open_inspector(_window: &tauri::Window) {
    log::warn!("filepeek: inspector requested but this build has no devtools");
}

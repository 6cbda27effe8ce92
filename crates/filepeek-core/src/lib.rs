//! Types shared by the filepeek host and its webview UI.
//!
//! The host builds a [`FileSelection`] from a path picked in the native
//! dialog or dropped on the window; the UI receives the same type over IPC
//! and decides which viewer panel to show.

pub mod classify;
pub mod filters;
pub mod load;
pub mod models;
pub mod pdf_info;
pub mod transport;

pub use classify::{classify, display_name, Format, ImageFormat};
pub use filters::{DialogFilter, DIALOG_FILTERS};
pub use load::{load_selection, LoadError};
pub use models::{DropOutcome, FileKind, FileSelection, FILE_DROP_EVENT};
pub use pdf_info::PdfInfo;
pub use transport::TransportError;

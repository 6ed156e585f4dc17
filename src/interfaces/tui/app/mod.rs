//! TUI application state and operations

mod file_operations;
mod navigation;
mod state;
mod table;

pub use state::{App, BrowserState, CurrentScreen, Notification};
pub use table::TableView;

//! recmark - step through the records of a delimited text file, mark some
//! of them and export the marked subset as a tab-separated table.
//!
//! # Features
//! - **cli**: Headless command-line interface
//! - **tui**: Terminal user interface (default)
//! - **full**: All features enabled
//!
//! # Architecture
//! - `session`: Document parsing, cursor, marks and export
//! - `interfaces`: User interfaces (CLI, TUI)
//! - `config`: Configuration management
//! - `runtime`: Application lifecycle and execution modes
//! - `system`: Logging and panic handling

pub mod cli;
pub mod config;
pub mod errors;
pub mod interfaces;
pub mod runtime;
pub mod session;
pub mod system;

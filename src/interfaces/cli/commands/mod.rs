mod config_gen;
mod export;
mod view;

pub use config_gen::{DEFAULT_SAMPLE_PATH, config_generate};
pub use export::export_records;
pub use view::view_records;

pub mod export;
pub mod scene;

// Re-export the entry points used by main
pub use export::{export_all, ExportOptions};

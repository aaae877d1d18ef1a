pub mod content_loader;
pub mod droid;
pub mod export_sink;
pub mod field_extractor;
pub mod listing_parser;

pub use content_loader::*;
pub use droid::*;
pub use export_sink::*;
pub use field_extractor::*;
pub use listing_parser::*;

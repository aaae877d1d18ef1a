pub mod category;
pub mod exhibitor;

pub use category::*;
pub use exhibitor::*;

pub mod interactions;
pub mod rendering;
pub mod styling;
pub mod types;

pub use styling::*;
pub use types::*;

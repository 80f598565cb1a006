pub mod classify;
pub mod digest;
pub mod reader;

pub use classify::*;
pub use digest::*;
pub use reader::*;

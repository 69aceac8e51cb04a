pub mod clipping;
pub mod offset;

pub use clipping::*;
pub use offset::*;

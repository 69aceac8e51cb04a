// src/math/geometry/polygon/mod.rs

pub mod core;
pub mod operations;
pub mod properties;

pub use self::core::Polygon;
pub use self::operations::{ClippingOperations, OffsetOperations};
pub use self::properties::{Orientation, PolygonProperties};

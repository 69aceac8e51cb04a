// src/math/geometry/mod.rs

pub mod polygon;
pub mod power_diagram;

pub use self::polygon::{
    ClippingOperations, OffsetOperations, Orientation, Polygon, PolygonProperties,
};
pub use self::power_diagram::{PowerDiagramBuilder, WeightOptimizer, WeightStep};

// src/math/mod.rs
pub mod algorithms;
pub mod error;
pub mod geometry;
pub mod probability;
pub mod types;
pub mod utils;

// Re-exports für einfache Verwendung
pub use error::{MathError, MathResult};
pub use types::*;

// Öffentliche API
pub mod prelude {
    pub use super::{
        algorithms::point_relaxation::{LloydConfig, LloydRelaxation, LloydRelaxationStats},
        error::{MathError, MathResult},
        geometry::{
            polygon::{ClippingOperations, OffsetOperations, Polygon, PolygonProperties},
            power_diagram::{PowerDiagramBuilder, WeightOptimizer, WeightStep},
        },
        probability::SeedResource,
        types::*,
    };
}

// src/math/geometry/power_diagram/mod.rs

// Gewichtetes Voronoi-Diagramm (Power-Diagramm) über Halbebenen-Clipping
pub mod builder;
pub mod optimizer;

pub use self::builder::{PowerBisector, PowerDiagramBuilder};
pub use self::optimizer::{WeightOptimizer, WeightStep, max_area_error};

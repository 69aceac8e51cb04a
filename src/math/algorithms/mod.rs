// src/math/algorithms/mod.rs

pub mod point_relaxation;

pub use self::point_relaxation::{LloydConfig, LloydRelaxation, LloydRelaxationStats};

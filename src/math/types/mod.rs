// src/math/types/mod.rs
pub mod bounds;

pub use bounds::*;

// Re-export häufig verwendete externe Typen
pub use bevy::math::DVec2;

// Einheitlicher Punkttyp für das gesamte Modul. f64, weil die Flächenkorrektur
// mit Toleranzen bis 1e-10 arbeitet.
pub type Point2D = DVec2;

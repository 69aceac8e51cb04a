// src/math/algorithms/point_relaxation/lloyd.rs

use crate::math::{
    error::{MathError, MathResult},
    geometry::polygon::{Polygon, PolygonProperties},
    types::Point2D,
};
use bevy::log::debug;

/// Konfiguration für einen einzelnen Lloyd-Schritt.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LloydConfig {
    /// Anteil der Strecke zum Zellschwerpunkt, der pro Schritt zurückgelegt wird
    pub step_ratio: f64,
    /// Anteil der Strecke zum Attraktor (Kategoriezentrum), nach dem Schwerpunktschritt
    pub cluster_strength: f64,
}

impl Default for LloydConfig {
    fn default() -> Self {
        Self {
            step_ratio: 0.3,
            cluster_strength: 0.08,
        }
    }
}

/// Gedämpfte Lloyd-Relaxation mit zusätzlichem Zug zu einem Attraktor pro Punkt.
///
/// Anders als die klassische Variante wird hier keine eigene Zerlegung gebaut:
/// die Zellen kommen vom Aufrufer (z.B. aus dem Power-Diagramm der gleichen Iteration).
pub struct LloydRelaxation {
    config: LloydConfig,
}

/// Statistiken eines Relaxationsschritts.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LloydRelaxationStats {
    pub moved_points: usize,
    pub max_movement: f64,
    pub mean_movement: f64,
}

impl LloydRelaxation {
    pub fn new(config: LloydConfig) -> Self {
        Self { config }
    }

    /// Verschiebt jeden Punkt erst Richtung Schwerpunkt seiner Zelle, dann Richtung Attraktor.
    /// Punkte ohne Zelle bleiben, wo sie sind.
    pub fn relax(
        &self,
        points: &[Point2D],
        cells: &[Option<Polygon>],
        attractors: &[Point2D],
    ) -> MathResult<(Vec<Point2D>, LloydRelaxationStats)> {
        if cells.len() != points.len() {
            return Err(MathError::LengthMismatch {
                left: points.len(),
                right: cells.len(),
            });
        }
        if attractors.len() != points.len() {
            return Err(MathError::LengthMismatch {
                left: points.len(),
                right: attractors.len(),
            });
        }

        let mut stats = LloydRelaxationStats::default();
        let mut total_movement = 0.0;

        let relaxed: Vec<Point2D> = points
            .iter()
            .zip(cells)
            .zip(attractors)
            .map(|((&point, cell), &attractor)| {
                let Some(centroid) = cell.as_ref().and_then(|c| c.centroid()) else {
                    return point;
                };

                let mut moved = point + (centroid - point) * self.config.step_ratio;
                moved += (attractor - moved) * self.config.cluster_strength;

                let movement = moved.distance(point);
                stats.moved_points += 1;
                stats.max_movement = stats.max_movement.max(movement);
                total_movement += movement;
                moved
            })
            .collect();

        if stats.moved_points > 0 {
            stats.mean_movement = total_movement / stats.moved_points as f64;
        }

        debug!(
            "Lloyd step: {} of {} points moved, max {:.3}, mean {:.3}",
            stats.moved_points,
            points.len(),
            stats.max_movement,
            stats.mean_movement
        );

        Ok((relaxed, stats))
    }
}

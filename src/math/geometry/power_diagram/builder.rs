// src/math/geometry/power_diagram/builder.rs

use crate::math::{
    error::{MathError, MathResult},
    geometry::polygon::{ClippingOperations, Polygon},
    types::Point2D,
    utils::constants,
};

/// Trennlinie zwischen zwei gewichteten Sites.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PowerBisector {
    /// Punkt auf der Linie, um die Gewichtsdifferenz vom Mittelpunkt verschoben
    pub point: Point2D,
    /// Einheitsnormale, zeigt zur ersten Site
    pub inward_normal: Point2D,
}

impl PowerBisector {
    /// `None` für deckungsgleiche Sites, dort ist keine Trennlinie definiert.
    pub fn between(site_i: Point2D, weight_i: f64, site_j: Point2D, weight_j: f64) -> Option<Self> {
        let delta = site_j - site_i;
        let dist_sq = delta.length_squared();
        let dist = dist_sq.sqrt();
        if dist < constants::COINCIDENT_DISTANCE {
            return None;
        }

        let shift = (weight_i - weight_j) / (2.0 * dist_sq);
        Some(Self {
            point: (site_i + site_j) * 0.5 + delta * shift,
            inward_normal: -delta / dist,
        })
    }
}

/// Erzeugt pro Site eine konvexe Zelle durch wiederholtes Clipping der Bounds.
///
/// O(N²) pro Aufbau; für die Datensatzgrößen (bis etwa 50 Einträge) und den
/// Aufbau in jeder Optimierungsiteration ausreichend.
#[derive(Debug, Clone)]
pub struct PowerDiagramBuilder {
    bounds: Polygon,
}

impl PowerDiagramBuilder {
    pub fn new(bounds: Polygon) -> Self {
        Self { bounds }
    }

    pub fn bounds(&self) -> &Polygon {
        &self.bounds
    }

    /// Eine Zelle pro Site, `None` für zusammengefallene Zellen.
    pub fn build(&self, seeds: &[Point2D], weights: &[f64]) -> MathResult<Vec<Option<Polygon>>> {
        if seeds.len() != weights.len() {
            return Err(MathError::LengthMismatch {
                left: seeds.len(),
                right: weights.len(),
            });
        }

        Ok((0..seeds.len())
            .map(|i| self.build_cell(i, seeds, weights))
            .collect())
    }

    fn build_cell(&self, i: usize, seeds: &[Point2D], weights: &[f64]) -> Option<Polygon> {
        let mut cell = self.bounds.vertices().to_vec();

        for (j, (&site_j, &weight_j)) in seeds.iter().zip(weights).enumerate() {
            if i == j {
                continue;
            }
            let Some(bisector) = PowerBisector::between(seeds[i], weights[i], site_j, weight_j)
            else {
                continue;
            };

            cell = ClippingOperations::clip_half_plane(&cell, bisector.point, bisector.inward_normal);
            if cell.len() < 3 {
                return None;
            }
        }

        Polygon::new(cell).ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::{geometry::polygon::PolygonProperties, types::Bounds2D};
    use approx::assert_abs_diff_eq;

    fn builder() -> PowerDiagramBuilder {
        let bounds = Bounds2D::from_points(Point2D::ZERO, Point2D::new(100.0, 100.0));
        PowerDiagramBuilder::new(Polygon::rectangle(&bounds))
    }

    #[test]
    fn test_equal_weights_split_at_midpoint() {
        let seeds = [Point2D::new(25.0, 50.0), Point2D::new(75.0, 50.0)];
        let cells = builder().build(&seeds, &[0.0, 0.0]).unwrap();

        let left = cells[0].as_ref().unwrap();
        let right = cells[1].as_ref().unwrap();
        assert_abs_diff_eq!(left.area(), 5000.0, epsilon = 1e-9);
        assert_abs_diff_eq!(right.area(), 5000.0, epsilon = 1e-9);
        assert!(left.vertices().iter().all(|v| v.x <= 50.0 + 1e-9));
    }

    #[test]
    fn test_weight_difference_shifts_bisector() {
        // Verschiebung: (w_i - w_j) / (2 d²) * d = 1000 / (2 * 2500) * 50 = 10
        let seeds = [Point2D::new(25.0, 50.0), Point2D::new(75.0, 50.0)];
        let cells = builder().build(&seeds, &[1000.0, 0.0]).unwrap();
        assert_abs_diff_eq!(cells[0].as_ref().unwrap().area(), 6000.0, epsilon = 1e-9);
        assert_abs_diff_eq!(cells[1].as_ref().unwrap().area(), 4000.0, epsilon = 1e-9);
    }

    #[test]
    fn test_cells_partition_bounds() {
        let seeds = [
            Point2D::new(20.0, 20.0),
            Point2D::new(80.0, 30.0),
            Point2D::new(50.0, 80.0),
            Point2D::new(45.0, 45.0),
        ];
        let weights = [120.0, -40.0, 0.0, 60.0];
        let cells = builder().build(&seeds, &weights).unwrap();

        let total: f64 = cells.iter().flatten().map(|c| c.area()).sum();
        assert_abs_diff_eq!(total, 10_000.0, epsilon = 1e-6);
    }

    #[test]
    fn test_single_site_gets_bounds() {
        let b = builder();
        let cells = b.build(&[Point2D::new(10.0, 90.0)], &[0.0]).unwrap();
        assert_eq!(cells[0].as_ref(), Some(b.bounds()));
    }

    #[test]
    fn test_overwhelmed_site_collapses() {
        let seeds = [Point2D::new(40.0, 50.0), Point2D::new(60.0, 50.0)];
        let cells = builder().build(&seeds, &[0.0, 1.0e6]).unwrap();
        assert!(cells[0].is_none());
        assert_abs_diff_eq!(cells[1].as_ref().unwrap().area(), 10_000.0, epsilon = 1e-9);
    }

    #[test]
    fn test_coincident_sites_are_not_separated() {
        let seeds = [Point2D::new(50.0, 50.0), Point2D::new(50.0, 50.0 + 1e-4)];
        assert!(PowerBisector::between(seeds[0], 0.0, seeds[1], 0.0).is_none());

        let cells = builder().build(&seeds, &[0.0, 0.0]).unwrap();
        assert_abs_diff_eq!(cells[0].as_ref().unwrap().area(), 10_000.0, epsilon = 1e-9);
        assert_abs_diff_eq!(cells[1].as_ref().unwrap().area(), 10_000.0, epsilon = 1e-9);
    }

    #[test]
    fn test_length_mismatch_is_rejected() {
        let result = builder().build(&[Point2D::ZERO, Point2D::ONE], &[0.0]);
        assert_eq!(
            result,
            Err(MathError::LengthMismatch { left: 2, right: 1 })
        );
    }
}

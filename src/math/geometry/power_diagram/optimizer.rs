// src/math/geometry/power_diagram/optimizer.rs

use super::builder::PowerDiagramBuilder;
use crate::math::{
    error::{MathError, MathResult},
    geometry::polygon::{Polygon, PolygonProperties},
    types::Point2D,
};

/// Ergebnis eines Korrekturschritts
#[derive(Debug, Clone)]
pub struct WeightStep {
    /// Korrigierte Gewichte für die nächste Iteration
    pub weights: Vec<f64>,
    /// Zellen, die mit den *alten* Gewichten gebaut wurden
    pub cells: Vec<Option<Polygon>>,
    /// Größter Betrag des relativen Flächenfehlers über alle nicht zusammengefallenen Zellen
    pub max_error: f64,
}

/// Gedämpfte Fixpunkt-Korrektur der Gewichte: `w_i += e_i * A * gain`.
///
/// Zusammengefallene Zellen bekommen keine Korrektur und zählen nicht zum
/// Fehler; sie kommen nur über die Relaxation wieder zurück.
#[derive(Debug, Clone, Copy)]
pub struct WeightOptimizer {
    gain: f64,
}

impl Default for WeightOptimizer {
    fn default() -> Self {
        Self { gain: 0.5 }
    }
}

impl WeightOptimizer {
    pub fn new(gain: f64) -> Self {
        Self { gain }
    }

    pub fn step(
        &self,
        builder: &PowerDiagramBuilder,
        seeds: &[Point2D],
        weights: &[f64],
        targets: &[f64],
        total_area: f64,
    ) -> MathResult<WeightStep> {
        if targets.len() != seeds.len() {
            return Err(MathError::LengthMismatch {
                left: seeds.len(),
                right: targets.len(),
            });
        }
        if total_area <= 0.0 {
            return Err(MathError::InvalidConfiguration {
                message: format!("Total area must be positive, got {}", total_area),
            });
        }

        let cells = builder.build(seeds, weights)?;
        let mut new_weights = weights.to_vec();
        let mut max_error = 0.0_f64;

        for (i, cell) in cells.iter().enumerate() {
            let Some(cell) = cell else {
                continue;
            };
            let error = (targets[i] * total_area - cell.area()) / total_area;
            max_error = max_error.max(error.abs());
            new_weights[i] += error * total_area * self.gain;
        }

        Ok(WeightStep {
            weights: new_weights,
            cells,
            max_error,
        })
    }
}

/// Größter relativer Flächenfehler ohne Gewichtskorrektur, z.B. für eine Drag-Vorschau.
pub fn max_area_error(cells: &[Option<Polygon>], targets: &[f64], total_area: f64) -> f64 {
    cells
        .iter()
        .zip(targets)
        .filter_map(|(cell, target)| {
            cell.as_ref()
                .map(|c| ((target * total_area - c.area()) / total_area).abs())
        })
        .fold(0.0, f64::max)
}

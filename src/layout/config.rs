// src/layout/config.rs

use super::error::{LayoutError, LayoutResult};
use serde::{Deserialize, Serialize};
use std::ops::Range;

/// Ausrichtung der Zeichenfläche. Bestimmt Breite und Höhe in Pixeln.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CanvasOrientation {
    #[default]
    Landscape,
    Portrait,
}

impl CanvasOrientation {
    /// `(width, height)`
    pub fn dimensions(&self) -> (f64, f64) {
        match self {
            Self::Landscape => (1200.0, 850.0),
            Self::Portrait => (850.0, 1200.0),
        }
    }
}

/// Konfiguration für Aufbau und Optimierung eines Layouts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Umlaufender Rand zwischen Zeichenfläche und Diagramm.
    pub padding: f64,
    /// Abstand zwischen benachbarten Zellen; jede Zelle wird um `gap / 2` eingerückt.
    pub gap: f64,
    /// Iterationsbudget einer neuen Generierung.
    pub max_iterations: usize,
    /// Iterationsbudget nach einem Drag.
    pub reoptimize_iterations: usize,
    /// Maximaler relativer Flächenfehler, ab dem ein Lauf als konvergiert gilt.
    pub error_threshold: f64,
    /// Vorher wird nicht abgebrochen, auch wenn der Fehler schon klein genug ist.
    pub min_iterations: usize,
    /// Lloyd-Relaxation läuft in jeder `relax_interval`-ten Iteration.
    pub relax_interval: usize,
    pub weight_gain: f64,
    pub lloyd_step_ratio: f64,
    pub category_cluster_strength: f64,
    /// Abstand eines Startpunkts zu seinem Kategoriezentrum.
    pub seed_radius: Range<f64>,
    /// Mindestabstand von Startpunkten und gezogenen Punkten zum Diagrammrand.
    pub edge_margin: f64,
    /// Radius des äußersten Kategoriezentrums relativ zu `min(width, height)`.
    pub category_spread: f64,
    /// Winkelschritt zwischen aufeinanderfolgenden Kategoriezentren (≈ goldener Winkel).
    pub category_angle_step: f64,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            padding: 40.0,
            gap: 10.0,
            max_iterations: 350,
            reoptimize_iterations: 150,
            error_threshold: 0.005,
            min_iterations: 50,
            relax_interval: 4,
            weight_gain: 0.5,
            lloyd_step_ratio: 0.3,
            category_cluster_strength: 0.08,
            seed_radius: 30.0..90.0,
            edge_margin: 20.0,
            category_spread: 0.3,
            category_angle_step: 2.4,
        }
    }
}

impl LayoutConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_padding(mut self, padding: f64) -> Self {
        self.padding = padding;
        self
    }

    pub fn with_gap(mut self, gap: f64) -> Self {
        self.gap = gap;
        self
    }

    pub fn with_max_iterations(mut self, iterations: usize) -> Self {
        self.max_iterations = iterations;
        self
    }

    pub fn with_reoptimize_iterations(mut self, iterations: usize) -> Self {
        self.reoptimize_iterations = iterations;
        self
    }

    pub fn with_error_threshold(mut self, threshold: f64) -> Self {
        self.error_threshold = threshold;
        self
    }

    pub fn with_min_iterations(mut self, iterations: usize) -> Self {
        self.min_iterations = iterations;
        self
    }

    pub fn with_relax_interval(mut self, interval: usize) -> Self {
        self.relax_interval = interval.max(1);
        self
    }

    pub fn with_seed_radius(mut self, radius: Range<f64>) -> Self {
        self.seed_radius = radius;
        self
    }

    /// Innerer Abstand, um den jede fertige Zelle eingerückt wird.
    pub fn inset_distance(&self) -> f64 {
        self.gap / 2.0
    }

    pub fn validate(&self) -> LayoutResult<()> {
        let invalid = |message: &str| {
            Err(LayoutError::InvalidConfiguration {
                message: message.to_string(),
            })
        };

        if !(self.padding.is_finite() && self.padding >= 0.0) {
            return invalid("Padding must be finite and non-negative.");
        }
        if !(self.gap.is_finite() && self.gap >= 0.0) {
            return invalid("Gap must be finite and non-negative.");
        }
        if self.max_iterations == 0 || self.reoptimize_iterations == 0 {
            return invalid("Iteration budgets must be greater than 0.");
        }
        if self.relax_interval == 0 {
            return invalid("Relax interval must be greater than 0.");
        }
        if !(self.error_threshold > 0.0) {
            return invalid("Error threshold must be positive.");
        }
        if !(self.weight_gain > 0.0) {
            return invalid("Weight gain must be positive.");
        }
        if !(0.0..=1.0).contains(&self.lloyd_step_ratio)
            || !(0.0..=1.0).contains(&self.category_cluster_strength)
        {
            return invalid("Relaxation ratios must lie in [0, 1].");
        }
        if !(self.seed_radius.start >= 0.0 && self.seed_radius.start <= self.seed_radius.end) {
            return invalid("Seed radius range must be non-negative and ordered.");
        }
        if !(self.edge_margin >= 0.0) {
            return invalid("Edge margin must be non-negative.");
        }
        Ok(())
    }

    /// Prüft, ob die Zeichenfläche nach Abzug von Rand und Randabstand noch Platz lässt.
    pub fn validate_canvas(&self, width: f64, height: f64) -> LayoutResult<()> {
        let reserved = 2.0 * (self.padding + self.edge_margin);
        if !(width.is_finite() && height.is_finite()) || width <= reserved || height <= reserved {
            return Err(LayoutError::InvalidConfiguration {
                message: format!(
                    "Canvas {}x{} is too small for padding {} and edge margin {}",
                    width, height, self.padding, self.edge_margin
                ),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        assert!(LayoutConfig::default().validate().is_ok());
        assert_eq!(LayoutConfig::default().inset_distance(), 5.0);
    }

    #[test]
    fn test_orientation_dimensions() {
        assert_eq!(CanvasOrientation::Landscape.dimensions(), (1200.0, 850.0));
        assert_eq!(CanvasOrientation::Portrait.dimensions(), (850.0, 1200.0));
    }

    #[test]
    fn test_invalid_values_rejected() {
        assert!(LayoutConfig::new().with_error_threshold(0.0).validate().is_err());
        assert!(LayoutConfig::new().with_max_iterations(0).validate().is_err());
        assert!(LayoutConfig::new().with_seed_radius(90.0..30.0).validate().is_err());
        assert!(LayoutConfig::new().with_gap(-1.0).validate().is_err());
    }

    #[test]
    fn test_relax_interval_never_zero() {
        assert_eq!(LayoutConfig::new().with_relax_interval(0).relax_interval, 1);
    }

    #[test]
    fn test_canvas_too_small() {
        let config = LayoutConfig::default();
        assert!(config.validate_canvas(1000.0, 1000.0).is_ok());
        assert!(config.validate_canvas(120.0, 1000.0).is_err());
        assert!(config.validate_canvas(f64::NAN, 1000.0).is_err());
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: LayoutConfig = serde_json::from_str(r#"{ "padding": 10.0 }"#).unwrap();
        assert_eq!(config.padding, 10.0);
        assert_eq!(config.max_iterations, 350);

        let orientation: CanvasOrientation = serde_json::from_str(r#""portrait""#).unwrap();
        assert_eq!(orientation, CanvasOrientation::Portrait);
    }
}

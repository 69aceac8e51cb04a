// src/layout/run_state.rs

use super::seeding::CategoryCenters;
use crate::math::{geometry::polygon::Polygon, types::Point2D};

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RunMode {
    Generate,
    /// Ein Punkt bleibt während der gesamten Nachoptimierung an `locked_position`.
    Reoptimize {
        locked_index: usize,
        locked_position: Point2D,
    },
}

/// Bestes bisher gesehenes Zwischenergebnis samt Punkten und Gewichten, die es erzeugt haben.
#[derive(Debug, Clone)]
pub struct BestIterate {
    pub cells: Vec<Option<Polygon>>,
    pub seeds: Vec<Point2D>,
    pub weights: Vec<f64>,
    pub error: f64,
    pub iteration: usize,
}

/// Zustand genau eines Laufs. Wird bei jeder Generierung bzw. Nachoptimierung neu angelegt.
#[derive(Debug, Clone)]
pub struct RunState {
    pub mode: RunMode,
    pub budget: usize,
    pub iteration: usize,
    pub seeds: Vec<Point2D>,
    pub weights: Vec<f64>,
    pub centers: CategoryCenters,
    best: Option<BestIterate>,
}

impl RunState {
    pub fn new(
        mode: RunMode,
        budget: usize,
        seeds: Vec<Point2D>,
        weights: Vec<f64>,
        centers: CategoryCenters,
    ) -> Self {
        Self {
            mode,
            budget,
            iteration: 0,
            seeds,
            weights,
            centers,
            best: None,
        }
    }

    pub fn best_error(&self) -> f64 {
        self.best.as_ref().map_or(f64::INFINITY, |b| b.error)
    }

    pub fn best(&self) -> Option<&BestIterate> {
        self.best.as_ref()
    }

    pub fn take_best(&mut self) -> Option<BestIterate> {
        self.best.take()
    }

    /// Übernimmt das Iterat, wenn es echt besser ist als das bisher beste.
    /// Muss vor der Gewichts- und Punktaktualisierung aufgerufen werden, damit
    /// Punkte und Gewichte zu den Zellen passen.
    pub fn record(&mut self, cells: &[Option<Polygon>], error: f64) -> bool {
        if error >= self.best_error() {
            return false;
        }
        self.best = Some(BestIterate {
            cells: cells.to_vec(),
            seeds: self.seeds.clone(),
            weights: self.weights.clone(),
            error,
            iteration: self.iteration,
        });
        true
    }

    /// Setzt einen gesperrten Punkt nach einer Relaxation zurück.
    pub fn pin_locked_seed(&mut self) {
        if let RunMode::Reoptimize {
            locked_index,
            locked_position,
        } = self.mode
        {
            if let Some(seed) = self.seeds.get_mut(locked_index) {
                *seed = locked_position;
            }
        }
    }

    pub fn should_relax(&self, relax_interval: usize) -> bool {
        self.iteration % relax_interval.max(1) == 0
    }

    /// Budget erschöpft, oder Fehler klein genug und Mindestzahl an Iterationen erreicht.
    pub fn is_finished(&self, error_threshold: f64, min_iterations: usize) -> bool {
        self.iteration >= self.budget
            || (self.best_error() <= error_threshold && self.iteration >= min_iterations)
    }
}

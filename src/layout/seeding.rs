// src/layout/seeding.rs

use super::{config::LayoutConfig, dataset::Dataset};
use crate::math::{types::Bounds2D, types::Point2D, utils::constants::TAU};
use rand::Rng;
use std::collections::HashMap;
use std::ops::Range;

/// Attraktor pro Kategorie (Palettenschlüssel).
pub type CategoryCenters = HashMap<String, Point2D>;

/// Startpositionen und Kategoriezentren einer neuen Generierung.
#[derive(Debug, Clone)]
pub struct SeedLayout {
    pub seeds: Vec<Point2D>,
    pub centers: CategoryCenters,
}

/// Platziert Startpunkte gruppiert nach Kategorie.
///
/// Die Kategoriezentren liegen auf einer Spirale um die Mitte der Zeichenfläche:
/// die schwerste Kategorie in der Mitte, die leichteste bei `spread * min(width, height)`.
/// Gerankt wird über alle Palettenkategorien, Kategorien ohne Einträge mit Masse 0.
#[derive(Debug, Clone)]
pub struct SeedInitializer {
    seed_radius: Range<f64>,
    edge_margin: f64,
    spread: f64,
    angle_step: f64,
}

impl SeedInitializer {
    pub fn from_config(config: &LayoutConfig) -> Self {
        Self {
            seed_radius: config.seed_radius.clone(),
            edge_margin: config.edge_margin,
            spread: config.category_spread,
            angle_step: config.category_angle_step,
        }
    }

    pub fn category_centers(&self, dataset: &Dataset, width: f64, height: f64) -> CategoryCenters {
        let ranked = dataset.ranked_categories();
        let canvas_center = Point2D::new(width / 2.0, height / 2.0);
        let max_radius = width.min(height) * self.spread;
        let last = (ranked.len().saturating_sub(1)).max(1) as f64;

        ranked
            .into_iter()
            .enumerate()
            .map(|(k, (key, _))| {
                let radius = (k as f64 / last) * max_radius;
                let angle = k as f64 * self.angle_step;
                let offset = Point2D::new(angle.cos(), angle.sin()) * radius;
                (key, canvas_center + offset)
            })
            .collect()
    }

    /// `bounds` ist die Diagrammfläche (Zeichenfläche ohne Rand), Startpunkte halten
    /// zusätzlich `edge_margin` Abstand dazu.
    pub fn initialize<R: Rng + ?Sized>(
        &self,
        dataset: &Dataset,
        width: f64,
        height: f64,
        bounds: &Bounds2D,
        rng: &mut R,
    ) -> SeedLayout {
        let centers = self.category_centers(dataset, width, height);
        let placement = bounds.shrink(self.edge_margin);
        let radius_span = self.seed_radius.end - self.seed_radius.start;

        let seeds = dataset
            .sites()
            .iter()
            .map(|site| {
                let center = centers
                    .get(&site.category)
                    .copied()
                    .unwrap_or_else(|| bounds.center());
                let angle = rng.random::<f64>() * TAU;
                let radius = self.seed_radius.start + rng.random::<f64>() * radius_span;
                placement.closest_point(center + Point2D::new(angle.cos(), angle.sin()) * radius)
            })
            .collect();

        SeedLayout { seeds, centers }
    }
}

/// Mittelwert der aktuellen Punkte je Kategorie.
pub fn derive_centers_from_seeds(dataset: &Dataset, seeds: &[Point2D]) -> CategoryCenters {
    let mut sums: HashMap<String, (Point2D, usize)> = HashMap::new();
    for (site, seed) in dataset.sites().iter().zip(seeds) {
        let entry = sums.entry(site.category.clone()).or_insert((Point2D::ZERO, 0));
        entry.0 += *seed;
        entry.1 += 1;
    }
    sums.into_iter()
        .map(|(key, (sum, count))| (key, sum / count as f64))
        .collect()
}

/// Attraktor pro Site; fehlt das Zentrum, zieht der Punkt zu sich selbst.
pub fn attractors_for(dataset: &Dataset, centers: &CategoryCenters, seeds: &[Point2D]) -> Vec<Point2D> {
    dataset
        .sites()
        .iter()
        .zip(seeds)
        .map(|(site, seed)| centers.get(&site.category).copied().unwrap_or(*seed))
        .collect()
}

// src/layout/engine.rs

use super::{
    config::LayoutConfig,
    dataset::Dataset,
    error::{LayoutError, LayoutResult},
    metadata::{CellMetadata, build_metadata},
    palette::CategoryPalette,
    run_state::{RunMode, RunState},
    seeding::{SeedInitializer, attractors_for, derive_centers_from_seeds},
    state::LayoutPhase,
};
use crate::math::{
    algorithms::point_relaxation::{LloydConfig, LloydRelaxation},
    geometry::{
        polygon::{OffsetOperations, Polygon},
        power_diagram::{PowerDiagramBuilder, WeightOptimizer, max_area_error},
    },
    types::{Bounds2D, Point2D},
};
use bevy::log::{debug, info, trace, warn};
use bevy::prelude::Resource;

/// Wie das aktuelle Ergebnis zustande kam.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutOutcome {
    /// Fehlerschwelle erreicht
    Converged,
    /// Budget aufgebraucht, bestes Iterat geliefert
    Exhausted,
    /// Punkt verschoben, Zellen einmal neu gebaut ohne Optimierung
    DragPreview,
}

/// Ergebnis einer Iteration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum StepOutcome {
    Continue { iteration: usize, best_error: f64 },
    Finished(LayoutOutcome),
}

/// Unveränderliches Ergebnis eines Laufs, in Eingabereihenfolge.
#[derive(Debug, Clone)]
pub struct LayoutSnapshot {
    /// Eingerückte Zellen für die Darstellung
    pub cells: Vec<Option<Polygon>>,
    /// Zellen vor dem Inset; diese lückenlose Zerlegung erfüllt die Flächenziele
    pub raw_cells: Vec<Option<Polygon>>,
    pub metadata: Vec<CellMetadata>,
    pub seeds: Vec<Point2D>,
    pub weights: Vec<f64>,
    pub max_error: f64,
    pub iterations: usize,
    pub outcome: LayoutOutcome,
}

/// Alles, was über einen Lauf hinweg fest bleibt.
#[derive(Debug, Clone)]
struct LayoutJob {
    dataset: Dataset,
    bounds: Bounds2D,
    builder: PowerDiagramBuilder,
    targets: Vec<f64>,
    total_area: f64,
}

/// Treibt Generierung und Nachoptimierung eine Iteration pro Aufruf von [`LayoutEngine::step`].
#[derive(Resource, Debug, Clone)]
pub struct LayoutEngine {
    config: LayoutConfig,
    palette: CategoryPalette,
    optimizer: WeightOptimizer,
    phase: LayoutPhase,
    job: Option<LayoutJob>,
    run: Option<RunState>,
    snapshot: Option<LayoutSnapshot>,
}

impl Default for LayoutEngine {
    fn default() -> Self {
        Self::new(LayoutConfig::default(), CategoryPalette::default())
    }
}

impl LayoutEngine {
    pub fn new(config: LayoutConfig, palette: CategoryPalette) -> Self {
        Self {
            optimizer: WeightOptimizer::new(config.weight_gain),
            config,
            palette,
            phase: LayoutPhase::Idle,
            job: None,
            run: None,
            snapshot: None,
        }
    }

    pub fn config(&self) -> &LayoutConfig {
        &self.config
    }

    pub fn palette(&self) -> &CategoryPalette {
        &self.palette
    }

    pub fn phase(&self) -> LayoutPhase {
        self.phase
    }

    pub fn snapshot(&self) -> Option<&LayoutSnapshot> {
        self.snapshot.as_ref()
    }

    pub fn dataset(&self) -> Option<&Dataset> {
        self.job.as_ref().map(|job| &job.dataset)
    }

    /// Diagrammfläche des aktuellen bzw. letzten Laufs.
    pub fn bounds(&self) -> Option<Bounds2D> {
        self.job.as_ref().map(|job| job.bounds)
    }

    /// Startet eine neue Generierung. Der Lauf selbst passiert in [`Self::step`].
    pub fn generate<R: rand::Rng + ?Sized>(
        &mut self,
        dataset: Dataset,
        width: f64,
        height: f64,
        rng: &mut R,
    ) -> LayoutResult<()> {
        if self.phase.is_running() {
            warn!("Generate request rejected: a layout run is already in progress");
            return Err(LayoutError::RunInProgress);
        }
        self.config.validate()?;
        self.config.validate_canvas(width, height)?;
        if dataset.is_empty() {
            return Err(LayoutError::EmptyDataset);
        }

        let bounds = Bounds2D::from_canvas(width, height, self.config.padding)?;
        let layout = SeedInitializer::from_config(&self.config).initialize(
            &dataset, width, height, &bounds, rng,
        );
        let weights = vec![0.0; dataset.len()];

        info!(
            "Starting layout generation: {} sites in {} categories on {}x{} canvas",
            dataset.len(),
            layout.centers.len(),
            width,
            height
        );

        self.optimizer = WeightOptimizer::new(self.config.weight_gain);
        self.job = Some(LayoutJob {
            targets: dataset.targets(),
            total_area: bounds.area(),
            builder: PowerDiagramBuilder::new(Polygon::rectangle(&bounds)),
            bounds,
            dataset,
        });
        self.run = Some(RunState::new(
            RunMode::Generate,
            self.config.max_iterations,
            layout.seeds,
            weights,
            layout.centers,
        ));
        self.snapshot = None;
        self.set_phase(LayoutPhase::Running);
        Ok(())
    }

    /// Eine Iteration: Gewichtskorrektur, ggf. Relaxation, Bestwert-Verfolgung.
    pub fn step(&mut self) -> LayoutResult<StepOutcome> {
        if !self.phase.is_running() {
            return Err(LayoutError::NotRunning);
        }
        let (Some(job), Some(run)) = (self.job.as_ref(), self.run.as_mut()) else {
            return Err(LayoutError::NotRunning);
        };

        let step = self.optimizer.step(
            &job.builder,
            &run.seeds,
            &run.weights,
            &job.targets,
            job.total_area,
        )?;

        run.record(&step.cells, step.max_error);
        run.weights = step.weights;

        if run.should_relax(self.config.relax_interval) {
            let relaxation = LloydRelaxation::new(LloydConfig {
                step_ratio: self.config.lloyd_step_ratio,
                cluster_strength: self.config.category_cluster_strength,
            });
            let attractors = attractors_for(&job.dataset, &run.centers, &run.seeds);
            let (seeds, _stats) = relaxation.relax(&run.seeds, &step.cells, &attractors)?;
            run.seeds = seeds;
            run.pin_locked_seed();
        }

        trace!(
            "Iteration {}: error {:.5}, best {:.5}",
            run.iteration,
            step.max_error,
            run.best_error()
        );
        run.iteration += 1;

        if run.is_finished(self.config.error_threshold, self.config.min_iterations) {
            return self.finish().map(StepOutcome::Finished);
        }

        Ok(StepOutcome::Continue {
            iteration: run.iteration,
            best_error: run.best_error(),
        })
    }

    /// Führt den laufenden Lauf synchron zu Ende.
    pub fn run_to_completion(&mut self) -> LayoutResult<LayoutOutcome> {
        loop {
            if let StepOutcome::Finished(outcome) = self.step()? {
                return Ok(outcome);
            }
        }
    }

    fn finish(&mut self) -> LayoutResult<LayoutOutcome> {
        let mut run = self.run.take().ok_or(LayoutError::NotRunning)?;
        let job = self.job.as_ref().ok_or(LayoutError::NotRunning)?;
        let best = run.take_best().ok_or(LayoutError::NoLayout)?;

        let outcome = if best.error <= self.config.error_threshold {
            LayoutOutcome::Converged
        } else {
            LayoutOutcome::Exhausted
        };

        let cells = inset_cells(&best.cells, self.config.inset_distance());
        let metadata = build_metadata(&job.dataset, &cells, job.total_area, &self.palette);

        let collapsed = best.cells.iter().filter(|c| c.is_none()).count();
        if collapsed > 0 {
            warn!("Layout finished with {} collapsed cells", collapsed);
        }
        info!(
            "Layout finished ({:?}) after {} iterations, best error {:.4} at iteration {}",
            outcome, run.iteration, best.error, best.iteration
        );

        self.snapshot = Some(LayoutSnapshot {
            cells,
            raw_cells: best.cells,
            metadata,
            seeds: best.seeds,
            weights: best.weights,
            max_error: best.error,
            iterations: run.iteration,
            outcome,
        });
        self.set_phase(match outcome {
            LayoutOutcome::Converged => LayoutPhase::Converged,
            _ => LayoutPhase::Exhausted,
        });
        Ok(outcome)
    }

    /// Verschiebt einen Punkt des letzten Ergebnisses und baut die Zellen einmal neu,
    /// ohne die Gewichte anzupassen. Liefert die tatsächlich gesetzte Position.
    pub fn move_seed(&mut self, index: usize, x: f64, y: f64) -> LayoutResult<Point2D> {
        self.ensure_idle_for_drag("Move")?;
        let job = self.job.as_ref().ok_or(LayoutError::NoLayout)?;
        let snapshot = self.snapshot.as_mut().ok_or(LayoutError::NoLayout)?;
        check_index(index, snapshot.seeds.len())?;

        let position = job
            .bounds
            .shrink(self.config.edge_margin)
            .closest_point(Point2D::new(x, y));
        snapshot.seeds[index] = position;

        let raw_cells = job.builder.build(&snapshot.seeds, &snapshot.weights)?;
        let cells = inset_cells(&raw_cells, self.config.inset_distance());

        snapshot.max_error = max_area_error(&raw_cells, &job.targets, job.total_area);
        snapshot.metadata = build_metadata(&job.dataset, &cells, job.total_area, &self.palette);
        snapshot.raw_cells = raw_cells;
        snapshot.cells = cells;
        snapshot.outcome = LayoutOutcome::DragPreview;

        debug!(
            "Moved seed {} to ({:.1}, {:.1}), preview error {:.4}",
            index, position.x, position.y, snapshot.max_error
        );
        Ok(position)
    }

    /// Startet eine kürzere Nachoptimierung ausgehend vom letzten Ergebnis;
    /// der Punkt `locked_index` bleibt dabei fest.
    pub fn reoptimize_after_drag(&mut self, locked_index: usize) -> LayoutResult<()> {
        self.ensure_idle_for_drag("Reoptimize")?;
        let job = self.job.as_ref().ok_or(LayoutError::NoLayout)?;
        let snapshot = self.snapshot.as_ref().ok_or(LayoutError::NoLayout)?;
        check_index(locked_index, snapshot.seeds.len())?;

        let locked_position = snapshot.seeds[locked_index];
        let centers = derive_centers_from_seeds(&job.dataset, &snapshot.seeds);

        info!(
            "Reoptimizing around site {} locked at ({:.1}, {:.1})",
            locked_index, locked_position.x, locked_position.y
        );

        self.run = Some(RunState::new(
            RunMode::Reoptimize {
                locked_index,
                locked_position,
            },
            self.config.reoptimize_iterations,
            snapshot.seeds.clone(),
            snapshot.weights.clone(),
            centers,
        ));
        self.set_phase(LayoutPhase::Running);
        Ok(())
    }

    /// Verwirft Lauf und Ergebnis.
    pub fn reset(&mut self) {
        self.run = None;
        self.job = None;
        self.snapshot = None;
        self.set_phase(LayoutPhase::Idle);
    }

    /// Statuszeile für die Anzeige.
    pub fn status(&self) -> String {
        match (&self.run, &self.snapshot) {
            (Some(run), _) if self.phase.is_running() => {
                if run.iteration == 0 {
                    "Generating...".to_string()
                } else {
                    format!(
                        "Optimizing... {}/{} (error: {:.1}%)",
                        run.iteration,
                        run.budget,
                        run.best_error() * 100.0
                    )
                }
            }
            (_, Some(snapshot)) if snapshot.outcome == LayoutOutcome::DragPreview => {
                format!("Moved (error: {:.1}%)", snapshot.max_error * 100.0)
            }
            (_, Some(snapshot)) => format!(
                "Done ({} iterations, {:.2}% max error)",
                snapshot.iterations,
                snapshot.max_error * 100.0
            ),
            _ => "Idle".to_string(),
        }
    }

    fn ensure_idle_for_drag(&self, action: &str) -> LayoutResult<()> {
        if self.phase.is_running() {
            warn!("{} request rejected: a layout run is in progress", action);
            return Err(LayoutError::RunInProgress);
        }
        Ok(())
    }

    fn set_phase(&mut self, phase: LayoutPhase) {
        if self.phase != phase {
            debug!("Layout phase {:?} -> {:?}", self.phase, phase);
            self.phase = phase;
        }
    }
}

fn inset_cells(cells: &[Option<Polygon>], distance: f64) -> Vec<Option<Polygon>> {
    cells
        .iter()
        .map(|c| c.as_ref().map(|p| OffsetOperations::inset(p, distance)))
        .collect()
}

fn check_index(index: usize, len: usize) -> LayoutResult<()> {
    if index >= len {
        return Err(LayoutError::SiteIndexOutOfRange { index, len });
    }
    Ok(())
}

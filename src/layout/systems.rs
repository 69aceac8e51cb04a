// src/layout/systems.rs
use super::{
    dataset::Dataset,
    engine::{LayoutEngine, StepOutcome},
    events::{GenerateLayoutRequest, LayoutCompleted, MoveSeedRequest, ReoptimizeRequest},
    resources::LayoutStatus,
    state::LayoutPhase,
};
use crate::math::probability::SeedResource;
use bevy::prelude::*;

/// Abgelehnte Anfragen (z.B. während eines Laufs) werden nur geloggt.
pub fn handle_generate_requests_system(
    mut requests: EventReader<GenerateLayoutRequest>,
    mut engine: ResMut<LayoutEngine>,
    mut seed_resource: ResMut<SeedResource>,
) {
    for request in requests.read() {
        let (width, height) = request.orientation.dimensions();
        let result = Dataset::from_items(&request.items, engine.palette()).and_then(|dataset| {
            engine.generate(dataset, width, height, seed_resource.rng_mut())
        });
        if let Err(err) = result {
            warn!("Ignoring generate request: {}", err);
        }
    }
}

pub fn handle_move_seed_requests_system(
    mut requests: EventReader<MoveSeedRequest>,
    mut engine: ResMut<LayoutEngine>,
) {
    for request in requests.read() {
        if let Err(err) = engine.move_seed(request.index, request.x, request.y) {
            warn!("Ignoring move request for site {}: {}", request.index, err);
        }
    }
}

pub fn handle_reoptimize_requests_system(
    mut requests: EventReader<ReoptimizeRequest>,
    mut engine: ResMut<LayoutEngine>,
) {
    for request in requests.read() {
        if let Err(err) = engine.reoptimize_after_drag(request.locked_index) {
            warn!("Ignoring reoptimize request for site {}: {}", request.locked_index, err);
        }
    }
}

/// Genau eine Iteration pro Tick.
pub fn advance_layout_system(
    mut engine: ResMut<LayoutEngine>,
    mut completed: EventWriter<LayoutCompleted>,
) {
    if !engine.phase().is_running() {
        return;
    }

    match engine.step() {
        Ok(StepOutcome::Continue { .. }) => {}
        Ok(StepOutcome::Finished(outcome)) => {
            if let Some(snapshot) = engine.snapshot() {
                completed.send(LayoutCompleted {
                    outcome,
                    iterations: snapshot.iterations,
                    max_error: snapshot.max_error,
                });
            }
        }
        Err(err) => {
            error!("Layout step failed, resetting engine: {}", err);
            engine.reset();
        }
    }
}

/// Spiegelt die Phase der Engine in den Bevy-State.
pub fn sync_layout_phase_system(
    engine: Res<LayoutEngine>,
    current_state: Res<State<LayoutPhase>>,
    mut next_state: ResMut<NextState<LayoutPhase>>,
) {
    if *current_state.get() != engine.phase() {
        next_state.set(engine.phase());
    }
}

pub fn update_layout_status_system(engine: Res<LayoutEngine>, mut status: ResMut<LayoutStatus>) {
    if engine.is_changed() {
        let message = engine.status();
        if status.message != message {
            status.message = message;
        }
    }
}

// src/layout/plugin.rs
use super::{
    engine::LayoutEngine,
    events::{GenerateLayoutRequest, LayoutCompleted, MoveSeedRequest, ReoptimizeRequest},
    resources::LayoutStatus,
    state::LayoutPhase,
    systems::*,
};
use crate::math::probability::SeedPlugin;
use bevy::prelude::*;

/// Registriert Engine, Status, Phase und die Systeme für Anfragen und Iterationen.
///
/// Eine bereits eingefügte `LayoutEngine` (z.B. mit eigener Konfiguration) wird nicht überschrieben.
pub struct LayoutPlugin;

impl Plugin for LayoutPlugin {
    fn build(&self, app: &mut App) {
        if !app.is_plugin_added::<SeedPlugin>() {
            app.add_plugins(SeedPlugin);
        }

        app.init_resource::<LayoutEngine>()
            .init_resource::<LayoutStatus>()
            .init_state::<LayoutPhase>()
            .add_event::<GenerateLayoutRequest>()
            .add_event::<MoveSeedRequest>()
            .add_event::<ReoptimizeRequest>()
            .add_event::<LayoutCompleted>()
            .add_systems(
                Update,
                (
                    handle_generate_requests_system,
                    handle_move_seed_requests_system,
                    handle_reoptimize_requests_system,
                    advance_layout_system.run_if(in_state(LayoutPhase::Running)),
                    sync_layout_phase_system,
                    update_layout_status_system,
                )
                    .chain(),
            );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::{config::CanvasOrientation, dataset::DataItem, engine::LayoutOutcome};
    use crate::math::probability::SeedResource;

    #[derive(Resource, Default)]
    struct Completions(Vec<LayoutCompleted>);

    fn record_completions(
        mut events: EventReader<LayoutCompleted>,
        mut completions: ResMut<Completions>,
    ) {
        completions.0.extend(events.read().copied());
    }

    fn app() -> App {
        let mut app = App::new();
        app.insert_resource(SeedResource::from_seed(42))
            .add_plugins(LayoutPlugin)
            .init_resource::<Completions>()
            .add_systems(PostUpdate, record_completions);
        app
    }

    fn items() -> Vec<DataItem> {
        vec![
            DataItem::new("a", 6.0, "oncologie"),
            DataItem::new("b", 3.0, "trauma"),
            DataItem::new("c", 1.0, "infectie"),
        ]
    }

    fn update_until_complete(app: &mut App, max_ticks: usize) -> usize {
        for tick in 0..max_ticks {
            app.update();
            if !app.world.resource::<Completions>().0.is_empty() {
                return tick;
            }
        }
        panic!("layout did not complete within {} ticks", max_ticks);
    }

    #[test]
    fn test_plugin_runs_one_iteration_per_tick() {
        let mut app = app();
        app.world.send_event(GenerateLayoutRequest {
            items: items(),
            orientation: CanvasOrientation::Landscape,
        });

        app.update();
        app.update();
        assert_eq!(*app.world.resource::<State<LayoutPhase>>().get(), LayoutPhase::Running);
        assert!(
            app.world
                .resource::<LayoutStatus>()
                .message
                .starts_with("Optimizing... 1/350")
        );

        let ticks = update_until_complete(&mut app, 400);
        assert!(ticks >= 48);

        let completion = app.world.resource::<Completions>().0[0];
        let snapshot = app.world.resource::<LayoutEngine>().snapshot().unwrap();
        assert_eq!(completion.iterations, snapshot.iterations);
        assert_eq!(snapshot.cells.len(), 3);

        app.update();
        let expected = match completion.outcome {
            LayoutOutcome::Converged => LayoutPhase::Converged,
            _ => LayoutPhase::Exhausted,
        };
        assert_eq!(*app.world.resource::<State<LayoutPhase>>().get(), expected);
        assert!(app.world.resource::<LayoutStatus>().message.starts_with("Done ("));
    }

    #[test]
    fn test_invalid_request_is_ignored() {
        let mut app = app();
        app.world.send_event(GenerateLayoutRequest {
            items: Vec::new(),
            orientation: CanvasOrientation::Portrait,
        });
        app.world.send_event(MoveSeedRequest {
            index: 0,
            x: 1.0,
            y: 1.0,
        });
        app.update();
        app.update();

        assert_eq!(app.world.resource::<LayoutEngine>().phase(), LayoutPhase::Idle);
        assert_eq!(*app.world.resource::<State<LayoutPhase>>().get(), LayoutPhase::Idle);
    }

    #[test]
    fn test_drag_and_reoptimize_through_events() {
        let mut app = app();
        app.world.send_event(GenerateLayoutRequest {
            items: items(),
            orientation: CanvasOrientation::Landscape,
        });
        update_until_complete(&mut app, 400);
        app.update();

        app.world.resource_mut::<Completions>().0.clear();
        app.world.send_event(MoveSeedRequest {
            index: 2,
            x: 200.0,
            y: 200.0,
        });
        app.world.send_event(ReoptimizeRequest { locked_index: 2 });
        update_until_complete(&mut app, 200);

        let snapshot = app.world.resource::<LayoutEngine>().snapshot().unwrap();
        assert_eq!(snapshot.seeds[2].x, 200.0);
        assert_eq!(snapshot.seeds[2].y, 200.0);
    }
}

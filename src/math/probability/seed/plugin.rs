//! Bevy-`Plugin` für die globale, seed-basierte Zufallsquelle.

use super::{events::SeedChangedEvent, resource::SeedResource};
use bevy::prelude::*;

/// Registriert `SeedResource` (falls noch nicht vorhanden) und `SeedChangedEvent`.
pub struct SeedPlugin;

impl Plugin for SeedPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<SeedResource>()
            .add_event::<SeedChangedEvent>()
            .add_systems(Update, seed_changed_event_handler);
    }
}

fn seed_changed_event_handler(
    mut events: EventReader<SeedChangedEvent>,
    mut seed_resource: ResMut<SeedResource>,
) {
    for event in events.read() {
        info!(
            "SeedResource is being updated due to SeedChangedEvent: {}",
            event.new_seed
        );
        seed_resource.reset_with_new_seed(event.new_seed);
    }
}

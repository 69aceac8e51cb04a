use bevy::prelude::*;

/// Setzt den globalen Zufallsgenerator auf einen neuen Seed zurück.
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeedChangedEvent {
    pub new_seed: u64,
}

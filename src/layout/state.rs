// src/layout/state.rs
use bevy::prelude::*;

/// Lebenszyklus eines Layout-Laufs. `Converged` und `Exhausted` liefern beide ein Ergebnis.
#[derive(States, Debug, Clone, Copy, Eq, PartialEq, Hash, Default)]
pub enum LayoutPhase {
    #[default]
    Idle,
    Running,
    Converged,
    Exhausted,
}

impl LayoutPhase {
    pub fn is_running(&self) -> bool {
        matches!(self, Self::Running)
    }
}

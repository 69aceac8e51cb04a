// src/layout/resources.rs
use bevy::prelude::*;

/// Anzeigetext zum Fortschritt, nur für die Darstellung gedacht.
#[derive(Resource, Debug, Clone, PartialEq, Eq)]
pub struct LayoutStatus {
    pub message: String,
}

impl Default for LayoutStatus {
    fn default() -> Self {
        Self {
            message: "Initializing...".to_string(),
        }
    }
}

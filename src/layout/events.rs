// src/layout/events.rs
use super::{config::CanvasOrientation, dataset::DataItem, engine::LayoutOutcome};
use bevy::prelude::*;

/// Startet eine neue Generierung mit den gegebenen Einträgen.
#[derive(Event, Debug, Clone)]
pub struct GenerateLayoutRequest {
    pub items: Vec<DataItem>,
    pub orientation: CanvasOrientation,
}

/// Verschiebt einen Punkt des letzten Ergebnisses (Drag-Vorschau).
#[derive(Event, Debug, Clone, Copy)]
pub struct MoveSeedRequest {
    pub index: usize,
    pub x: f64,
    pub y: f64,
}

/// Nachoptimierung nach einem Drag; `locked_index` bleibt fest.
#[derive(Event, Debug, Clone, Copy)]
pub struct ReoptimizeRequest {
    pub locked_index: usize,
}

/// Ein Lauf ist fertig, das Ergebnis liegt in `LayoutEngine::snapshot`.
#[derive(Event, Debug, Clone, Copy, PartialEq)]
pub struct LayoutCompleted {
    pub outcome: LayoutOutcome,
    pub iterations: usize,
    pub max_error: f64,
}

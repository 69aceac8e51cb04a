// src/math/utils.rs

/// Mathematische Konstanten
pub mod constants {
    /// Unterhalb dieser Fläche gilt ein Polygon als degeneriert (Zentroid-Fallback).
    pub const EPSILON_AREA: f64 = 1e-10;
    /// Näher beieinander liegende Sites gelten als deckungsgleich.
    pub const COINCIDENT_DISTANCE: f64 = 1e-3;
    /// Kürzere Kanten werden beim Inset übersprungen.
    pub const MIN_EDGE_LENGTH: f64 = 1e-3;
    /// Kreuzprodukt-Grenze, ab der benachbarte Offset-Kanten als parallel gelten.
    pub const PARALLEL_TOLERANCE: f64 = 1e-4;
    /// Minimale doppelte Fläche eines Inset-Ergebnisses.
    pub const MIN_INSET_AREA: f64 = 1.0;
    pub const TAU: f64 = std::f64::consts::TAU;
}

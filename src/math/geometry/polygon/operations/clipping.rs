// src/math/geometry/polygon/operations/clipping.rs

use crate::math::types::*;

/// Clipping-Operationen für konvexe Zellen
pub struct ClippingOperations;

impl ClippingOperations {
    /// Sutherland-Hodgman gegen eine einzelne Halbebene.
    ///
    /// Behalten wird die Seite mit `(v - point_on_line) · inward_normal >= 0`.
    /// Kanten, die die Linie schneiden, erhalten den exakten Schnittpunkt.
    /// Liegt das Polygon komplett außerhalb, ist das Ergebnis leer; liegt es
    /// komplett innerhalb, kommt es unverändert zurück. Vertices genau auf der
    /// Linie können doppelt im Ergebnis stehen; Fläche und Schwerpunkt bleiben davon unberührt.
    pub fn clip_half_plane(
        vertices: &[Point2D],
        point_on_line: Point2D,
        inward_normal: Point2D,
    ) -> Vec<Point2D> {
        let n = vertices.len();
        let mut output = Vec::with_capacity(n + 1);

        for i in 0..n {
            let current = vertices[i];
            let next = vertices[(i + 1) % n];

            let current_dist = (current - point_on_line).dot(inward_normal);
            let next_dist = (next - point_on_line).dot(inward_normal);

            if current_dist >= 0.0 {
                output.push(current);
            }

            // Kante kreuzt die Linie
            if (current_dist >= 0.0) != (next_dist >= 0.0) {
                let t = current_dist / (current_dist - next_dist);
                output.push(current + (next - current) * t);
            }
        }

        output
    }
}

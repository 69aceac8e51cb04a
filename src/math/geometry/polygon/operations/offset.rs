// src/math/geometry/polygon/operations/offset.rs

use crate::math::geometry::polygon::{Polygon, PolygonProperties};
use crate::math::types::*;
use crate::math::utils::constants;

/// Nach innen versetzte Kante
#[derive(Debug, Clone, Copy)]
struct OffsetEdge {
    start: Point2D,
    end: Point2D,
}

/// Offset-Operationen (Schrumpfen entlang der inneren Kantennormalen)
pub struct OffsetOperations;

impl OffsetOperations {
    /// Schrumpft ein Polygon um `distance` nach innen.
    ///
    /// Jede Kante wird entlang ihrer inneren Normalen verschoben (Richtung aus
    /// dem Umlaufsinn), benachbarte Offset-Kanten werden geschnitten. Nahezu
    /// parallele Nachbarn liefern den Mittelpunkt ihrer Endpunkte. Fällt das
    /// Ergebnis zusammen (weniger als 3 Vertices, Fläche zu klein oder
    /// umgeklappte Kanten), kommt das Original unverändert zurück.
    pub fn inset(polygon: &Polygon, distance: f64) -> Polygon {
        match Self::inset_vertices(polygon.vertices(), distance) {
            Some(vertices) => Polygon::new(vertices).unwrap_or_else(|_| polygon.clone()),
            None => polygon.clone(),
        }
    }

    // Ein zusammengefallener Inset klappt um: alle Offset-Kanten laufen rückwärts
    // oder Vertices wandern aus dem (konvexen) Original heraus.
    fn is_collapsed(original: &[Point2D], edges: &[OffsetEdge], result: &[Point2D]) -> bool {
        if result.len() < 3 || (2.0 * result.signed_area()).abs() < constants::MIN_INSET_AREA {
            return true;
        }

        let n = result.len();
        let keeps_direction = (0..n).any(|i| {
            let along = result[i] - result[(i + n - 1) % n];
            along.dot(edges[i].end - edges[i].start) > 0.0
        });

        !keeps_direction || result.iter().any(|v| !original.contains_point(*v))
    }

    /// Liefert `None`, wenn der Inset nicht anwendbar ist oder zusammenfällt.
    pub fn inset_vertices(vertices: &[Point2D], distance: f64) -> Option<Vec<Point2D>> {
        let n = vertices.len();
        if n < 3 || distance <= 0.0 {
            return None;
        }

        let signed_area = vertices.signed_area();
        let wind = if signed_area > 0.0 { -1.0 } else { 1.0 };

        let mut edges = Vec::with_capacity(n);
        for i in 0..n {
            let p1 = vertices[i];
            let p2 = vertices[(i + 1) % n];
            let delta = p2 - p1;
            let length = delta.length();

            if length < constants::MIN_EDGE_LENGTH {
                continue;
            }

            let normal = Point2D::new(wind * delta.y, -wind * delta.x) / length;
            edges.push(OffsetEdge {
                start: p1 + normal * distance,
                end: p2 + normal * distance,
            });
        }

        if edges.len() < 3 {
            return None;
        }

        let mut result = Vec::with_capacity(edges.len());
        for i in 0..edges.len() {
            let e1 = edges[i];
            let e2 = edges[(i + 1) % edges.len()];

            let d1 = e1.end - e1.start;
            let d2 = e2.end - e2.start;
            let denom = d1.perp_dot(d2);

            if denom.abs() < constants::PARALLEL_TOLERANCE {
                result.push((e1.end + e2.start) * 0.5);
            } else {
                let t = (e2.start - e1.start).perp_dot(d2) / denom;
                result.push(e1.start + d1 * t);
            }
        }

        if Self::is_collapsed(vertices, &edges, &result) {
            return None;
        }

        Some(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn square(size: f64) -> Polygon {
        Polygon::new(vec![
            Point2D::new(0.0, 0.0),
            Point2D::new(size, 0.0),
            Point2D::new(size, size),
            Point2D::new(0.0, size),
        ])
        .unwrap()
    }

    #[test]
    fn test_inset_square_both_windings() {
        for polygon in [square(100.0), square(100.0).reversed()] {
            let inset = OffsetOperations::inset(&polygon, 5.0);
            assert_abs_diff_eq!(inset.area(), 90.0 * 90.0, epsilon = 1e-9);
            let bbox = inset.bounding_box().unwrap();
            assert_abs_diff_eq!(bbox.min.x, 5.0, epsilon = 1e-9);
            assert_abs_diff_eq!(bbox.max.y, 95.0, epsilon = 1e-9);
        }
    }

    #[test]
    fn test_small_inset_strictly_decreases_area() {
        let triangle = Polygon::new(vec![
            Point2D::new(0.0, 0.0),
            Point2D::new(60.0, 10.0),
            Point2D::new(20.0, 50.0),
        ])
        .unwrap();
        let inset = OffsetOperations::inset(&triangle, 2.0);
        assert!(inset.area() < triangle.area());
        assert!(triangle.contains_point(inset.centroid().unwrap()));
    }

    #[test]
    fn test_collapsing_inset_returns_original() {
        let polygon = square(10.0);
        assert_eq!(OffsetOperations::inset(&polygon, 5.0), polygon);
        assert_eq!(OffsetOperations::inset(&polygon, 40.0), polygon);
    }

    #[test]
    fn test_thin_rectangle_collapse_returns_original() {
        let strip = Polygon::new(vec![
            Point2D::new(0.0, 0.0),
            Point2D::new(100.0, 0.0),
            Point2D::new(100.0, 10.0),
            Point2D::new(0.0, 10.0),
        ])
        .unwrap();
        assert_eq!(OffsetOperations::inset(&strip, 20.0), strip);
    }

    #[test]
    fn test_non_positive_distance_is_noop() {
        let polygon = square(10.0);
        assert_eq!(OffsetOperations::inset(&polygon, 0.0), polygon);
        assert_eq!(OffsetOperations::inset(&polygon, -3.0), polygon);
    }

    #[test]
    fn test_collinear_vertex_uses_midpoint() {
        // Zusätzlicher Vertex mitten auf der unteren Kante
        let polygon = Polygon::new(vec![
            Point2D::new(0.0, 0.0),
            Point2D::new(50.0, 0.0),
            Point2D::new(100.0, 0.0),
            Point2D::new(100.0, 100.0),
            Point2D::new(0.0, 100.0),
        ])
        .unwrap();
        let inset = OffsetOperations::inset(&polygon, 5.0);
        assert_eq!(inset.len(), 5);
        assert_abs_diff_eq!(inset.vertices()[0].x, 50.0, epsilon = 1e-9);
        assert_abs_diff_eq!(inset.vertices()[0].y, 5.0, epsilon = 1e-9);
        assert_abs_diff_eq!(inset.area(), 90.0 * 90.0, epsilon = 1e-9);
    }
}

// src/math/geometry/polygon/properties.rs

use crate::math::geometry::polygon::Polygon;
use crate::math::types::*;
use crate::math::utils::constants;

/// Trait für Polygon-Eigenschaften
pub trait PolygonProperties {
    /// Vorzeichenbehaftete Fläche (Shoelace), positiv gegen den Uhrzeigersinn
    fn signed_area(&self) -> f64;

    /// Berechnet die Fläche des Polygons, unabhängig vom Umlaufsinn
    fn area(&self) -> f64 {
        self.signed_area().abs()
    }

    /// Schwerpunkt. Bei degenerierter Fläche wird auf das arithmetische Mittel
    /// der Vertices zurückgefallen; `None` nur für ein leeres Polygon.
    fn centroid(&self) -> Option<Point2D>;

    /// Prüft ob ein Punkt innerhalb des Polygons liegt (Ray-Casting)
    fn contains_point(&self, point: Point2D) -> bool;

    /// Achsenparallele Hülle, `None` für ein leeres Polygon
    fn bounding_box(&self) -> Option<Bounds2D>;

    /// Prüft die Orientierung (im Uhrzeigersinn oder gegen)
    fn orientation(&self) -> Orientation {
        let area = self.signed_area();
        if area.abs() < constants::EPSILON_AREA {
            Orientation::Collinear
        } else if area > 0.0 {
            Orientation::CounterClockwise
        } else {
            Orientation::Clockwise
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    Clockwise,
    CounterClockwise,
    Collinear,
}

impl PolygonProperties for [Point2D] {
    fn signed_area(&self) -> f64 {
        let n = self.len();
        let mut area = 0.0;
        for i in 0..n {
            let j = (i + 1) % n;
            area += self[i].x * self[j].y - self[j].x * self[i].y;
        }
        area * 0.5
    }

    fn centroid(&self) -> Option<Point2D> {
        let n = self.len();
        if n == 0 {
            return None;
        }

        let mut cx = 0.0;
        let mut cy = 0.0;
        let mut area = 0.0;
        for i in 0..n {
            let j = (i + 1) % n;
            let factor = self[i].x * self[j].y - self[j].x * self[i].y;
            cx += (self[i].x + self[j].x) * factor;
            cy += (self[i].y + self[j].y) * factor;
            area += factor;
        }
        area *= 0.5;

        if area.abs() < constants::EPSILON_AREA {
            // Fallback auf arithmetisches Mittel
            let sum = self.iter().fold(Point2D::ZERO, |acc, v| acc + *v);
            return Some(sum / n as f64);
        }

        let factor = 1.0 / (6.0 * area);
        Some(Point2D::new(cx * factor, cy * factor))
    }

    fn contains_point(&self, point: Point2D) -> bool {
        let n = self.len();
        if n < 3 {
            return false;
        }

        let mut inside = false;
        let mut j = n - 1;
        for i in 0..n {
            let vi = self[i];
            let vj = self[j];

            if ((vi.y > point.y) != (vj.y > point.y))
                && (point.x < (vj.x - vi.x) * (point.y - vi.y) / (vj.y - vi.y) + vi.x)
            {
                inside = !inside;
            }
            j = i;
        }

        inside
    }

    fn bounding_box(&self) -> Option<Bounds2D> {
        Bounds2D::from_points_iter(self.iter().copied())
    }
}

impl PolygonProperties for Polygon {
    fn signed_area(&self) -> f64 {
        self.vertices().signed_area()
    }

    fn centroid(&self) -> Option<Point2D> {
        self.vertices().centroid()
    }

    fn contains_point(&self, point: Point2D) -> bool {
        self.vertices().contains_point(point)
    }

    fn bounding_box(&self) -> Option<Bounds2D> {
        self.vertices().bounding_box()
    }
}

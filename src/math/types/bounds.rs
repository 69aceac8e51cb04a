// src/math/types/bounds.rs

use crate::math::{error::*, types::*};

/// 2D Bounding Box (Axis-Aligned Bounding Box)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds2D {
    pub min: Point2D,
    pub max: Point2D,
}

impl Bounds2D {
    /// Erstellt eine neue Bounding Box
    pub fn new(min: Point2D, max: Point2D) -> MathResult<Self> {
        if min.x > max.x || min.y > max.y {
            return Err(MathError::InvalidConfiguration {
                message: format!("Invalid bounds: min {:?} > max {:?}", min, max),
            });
        }

        Ok(Self { min, max })
    }

    /// Erstellt eine Bounding Box aus zwei beliebigen Punkten
    pub fn from_points(p1: Point2D, p2: Point2D) -> Self {
        Self {
            min: Point2D::new(p1.x.min(p2.x), p1.y.min(p2.y)),
            max: Point2D::new(p1.x.max(p2.x), p1.y.max(p2.y)),
        }
    }

    /// Zeichenfläche `width x height` abzüglich eines umlaufenden Randes `padding`.
    pub fn from_canvas(width: f64, height: f64, padding: f64) -> MathResult<Self> {
        Self::new(
            Point2D::new(padding, padding),
            Point2D::new(width - padding, height - padding),
        )
    }

    /// Erstellt eine Bounding Box die alle Punkte umschließt
    pub fn from_points_iter<I>(points: I) -> Option<Self>
    where
        I: IntoIterator<Item = Point2D>,
    {
        let mut points_iter = points.into_iter();
        let first_point = points_iter.next()?;

        let mut min = first_point;
        let mut max = first_point;

        for point in points_iter {
            min = min.min(point);
            max = max.max(point);
        }

        Some(Self { min, max })
    }

    /// Prüft ob die Bounding Box leer ist
    pub fn is_empty(&self) -> bool {
        self.min.x > self.max.x || self.min.y > self.max.y
    }

    /// Breite der Bounding Box
    pub fn width(&self) -> f64 {
        (self.max.x - self.min.x).max(0.0)
    }

    /// Höhe der Bounding Box
    pub fn height(&self) -> f64 {
        (self.max.y - self.min.y).max(0.0)
    }

    /// Zentrum der Bounding Box
    pub fn center(&self) -> Point2D {
        (self.min + self.max) * 0.5
    }

    /// Fläche der Bounding Box
    pub fn area(&self) -> f64 {
        if self.is_empty() {
            0.0
        } else {
            self.width() * self.height()
        }
    }

    /// Prüft ob ein Punkt in der Bounding Box liegt
    pub fn contains_point(&self, point: Point2D) -> bool {
        point.x >= self.min.x
            && point.x <= self.max.x
            && point.y >= self.min.y
            && point.y <= self.max.y
    }

    /// Verkleinert die Bounding Box um einen Margin. Wird sie dabei leer,
    /// bleibt sie auf ihr Zentrum zusammengefallen.
    pub fn shrink(&self, margin: f64) -> Self {
        if self.is_empty() {
            return *self;
        }

        let center = self.center();
        Self {
            min: Point2D::new(
                (self.min.x + margin).min(center.x),
                (self.min.y + margin).min(center.y),
            ),
            max: Point2D::new(
                (self.max.x - margin).max(center.x),
                (self.max.y - margin).max(center.y),
            ),
        }
    }

    /// Berechnet den nächsten Punkt auf der Bounding Box zu einem gegebenen Punkt
    pub fn closest_point(&self, point: Point2D) -> Point2D {
        if self.is_empty() {
            return point;
        }

        Point2D::new(
            point.x.clamp(self.min.x, self.max.x),
            point.y.clamp(self.min.y, self.max.y),
        )
    }

    /// Erzeugt die vier Eckpunkte der Bounding Box
    pub fn corners(&self) -> [Point2D; 4] {
        [
            self.min,                             // unten links
            Point2D::new(self.max.x, self.min.y), // unten rechts
            self.max,                             // oben rechts
            Point2D::new(self.min.x, self.max.y), // oben links
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_canvas_bounds() {
        let bounds = Bounds2D::from_canvas(1000.0, 800.0, 40.0).unwrap();
        assert_eq!(bounds.min, Point2D::new(40.0, 40.0));
        assert_eq!(bounds.max, Point2D::new(960.0, 760.0));
        assert_abs_diff_eq!(bounds.area(), 920.0 * 720.0);
    }

    #[test]
    fn test_inverted_canvas_is_rejected() {
        assert!(Bounds2D::from_canvas(50.0, 50.0, 40.0).is_err());
    }

    #[test]
    fn test_shrink_and_clamp() {
        let bounds = Bounds2D::from_points(Point2D::ZERO, Point2D::new(100.0, 100.0));
        let inner = bounds.shrink(20.0);
        assert_eq!(inner.min, Point2D::new(20.0, 20.0));
        assert_eq!(
            inner.closest_point(Point2D::new(-5.0, 95.0)),
            Point2D::new(20.0, 80.0)
        );

        // Zu großer Margin fällt auf das Zentrum zusammen
        let collapsed = bounds.shrink(80.0);
        assert_eq!(collapsed.min, bounds.center());
        assert_eq!(collapsed.max, bounds.center());
    }
}

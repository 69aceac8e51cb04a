// src/math/geometry/polygon/core.rs

use crate::math::{error::*, types::*};

/// Konvexes Zellpolygon als offener Ring: der letzte Vertex ist implizit mit dem
/// ersten verbunden und wird nicht dupliziert.
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon {
    vertices: Vec<Point2D>,
}

impl Polygon {
    /// Erstellt ein Polygon; eine Fläche braucht mindestens 3 Vertices.
    pub fn new(vertices: Vec<Point2D>) -> MathResult<Self> {
        if vertices.len() < 3 {
            return Err(MathError::InsufficientPoints {
                expected: 3,
                actual: vertices.len(),
            });
        }
        Ok(Self { vertices })
    }

    /// Rechteck aus einer Bounding Box, gegen den Uhrzeigersinn (y nach oben).
    pub fn rectangle(bounds: &Bounds2D) -> Self {
        Self {
            vertices: bounds.corners().to_vec(),
        }
    }

    /// Zugriff auf Vertices
    pub fn vertices(&self) -> &[Point2D] {
        &self.vertices
    }

    /// Anzahl der Vertices
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Gleiche Vertices in umgekehrter Reihenfolge
    pub fn reversed(&self) -> Self {
        let mut vertices = self.vertices.clone();
        vertices.reverse();
        Self { vertices }
    }
}

//! Gerades Rohrstück zwischen zwei geteilten Punkten.

use super::structure::{Color, DEFAULT_COLOR, DEFAULT_DIAMETER};
use super::{PointId, PointStore};

/// Ein gerades Rohrsegment
#[derive(Debug, Clone, PartialEq)]
pub struct Pipe {
    /// Start-Punkt
    pub start: PointId,
    /// End-Punkt
    pub end: PointId,
    /// Rohrdurchmesser
    pub diameter: f64,
    /// Anzeigefarbe (RGB)
    pub color: Color,
    /// Geometrie wird berechnet (nicht vom User fixiert)
    pub auto: bool,
}

impl Pipe {
    /// Erstellt ein Rohr mit Standard-Durchmesser und -Farbe.
    pub fn new(start: PointId, end: PointId) -> Self {
        Self {
            start,
            end,
            diameter: DEFAULT_DIAMETER,
            color: DEFAULT_COLOR,
            auto: true,
        }
    }

    /// Builder: setzt die Anzeigefarbe.
    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    /// Builder: setzt den Durchmesser.
    pub fn with_diameter(mut self, diameter: f64) -> Self {
        self.diameter = diameter;
        self
    }

    /// `[start, end]`
    pub fn points(&self) -> [PointId; 2] {
        [self.start, self.end]
    }

    /// Setzt den Durchmesser.
    pub fn set_diameter(&mut self, diameter: f64) {
        self.diameter = diameter;
    }

    /// Liefert den gegenüberliegenden Endpunkt, falls `point` ein Endpunkt ist.
    pub fn opposite(&self, point: PointId) -> Option<PointId> {
        if self.start == point {
            Some(self.end)
        } else if self.end == point {
            Some(self.start)
        } else {
            None
        }
    }

    /// Länge des Segments.
    pub fn length(&self, points: &PointStore) -> Option<f64> {
        Some(points.position(self.start)?.distance(points.position(self.end)?))
    }
}

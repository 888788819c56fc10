//! Flansch als Abschluss einer Rohrleitung.

use super::structure::{Color, DEFAULT_COLOR, DEFAULT_DIAMETER};
use super::PointId;
use glam::DVec3;

/// Ein Flansch: Blatt der Topologie, nicht weiter verbunden
#[derive(Debug, Clone, PartialEq)]
pub struct Flange {
    /// Position des Flansches
    pub position: PointId,
    /// Normalenvektor der Flanschfläche
    pub normal: DVec3,
    /// Flanschdurchmesser
    pub diameter: f64,
    /// Anzeigefarbe (RGB)
    pub color: Color,
    /// Geometrie wird berechnet (nicht vom User fixiert)
    pub auto: bool,
}

impl Flange {
    /// Erstellt einen Flansch mit Standard-Durchmesser und -Farbe.
    pub fn new(position: PointId, normal: DVec3) -> Self {
        Self {
            position,
            normal,
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

    /// `[position]`
    pub fn points(&self) -> [PointId; 1] {
        [self.position]
    }

    /// Setzt den Durchmesser.
    pub fn set_diameter(&mut self, diameter: f64) {
        self.diameter = diameter;
    }
}

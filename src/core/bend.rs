//! Rohrbogen an einer vom User gesetzten Ecke.
//!
//! `start` und `end` sind berechnete Tangentenpunkte, `corner` ist der
//! platzierte Vertex. Kollabiert gilt: start = end = corner (nach Koordinaten).

use super::geometry::{self, BendConstruction, CornerResolution};
use super::structure::{Color, BEND_COLOR, DEFAULT_DIAMETER};
use super::{PointId, PointStore};
use glam::DVec3;

/// Standard-Krümmungsradius neuer Bögen.
pub const DEFAULT_CURVATURE_RADIUS: f64 = 0.3;

/// Ein Rohrbogen (Fillet) zwischen zwei Rohrsegmenten
#[derive(Debug, Clone, PartialEq)]
pub struct Bend {
    /// Tangentenpunkt auf dem ersten Schenkel
    pub start: PointId,
    /// Tangentenpunkt auf dem zweiten Schenkel
    pub end: PointId,
    /// Eckpunkt (vom User platziert)
    pub corner: PointId,
    /// Krümmungsradius
    pub curvature: f64,
    /// Durchmesser am Start
    pub start_diameter: f64,
    /// Durchmesser am Ende
    pub end_diameter: f64,
    /// Anzeigefarbe (RGB)
    pub color: Color,
    /// Geometrie wird berechnet (nicht vom User fixiert)
    pub auto: bool,
    /// Abgeleitete Hilfspunkte (Cache, von `divide` befüllt)
    pub construction: Option<BendConstruction>,
}

impl Bend {
    /// Erstellt einen Bogen mit Standard-Durchmessern und -Farbe.
    pub fn new(start: PointId, end: PointId, corner: PointId, curvature: f64) -> Self {
        Self {
            start,
            end,
            corner,
            curvature,
            start_diameter: DEFAULT_DIAMETER,
            end_diameter: DEFAULT_DIAMETER,
            color: BEND_COLOR,
            auto: true,
            construction: None,
        }
    }

    /// Builder: setzt die Anzeigefarbe.
    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    /// Builder: setzt beide Durchmesser.
    pub fn with_diameter(mut self, diameter: f64) -> Self {
        self.set_diameter(diameter, None);
        self
    }

    /// `[start, end, corner]`
    pub fn points(&self) -> [PointId; 3] {
        [self.start, self.end, self.corner]
    }

    /// Prüft ob `point` einer der drei Bogen-Punkte ist (Identität).
    pub fn contains(&self, point: PointId) -> bool {
        self.start == point || self.end == point || self.corner == point
    }

    /// Löst die Tangentenpunkte gegen die Positionen der beiden Nachbarn auf.
    ///
    /// Schreibt `start`/`end` in-place, so dass alle anderen Halter der
    /// Handles die neue Lage sehen. Entartung führt zum Collapse.
    pub fn normalize_values(
        &self,
        points: &mut PointStore,
        start_neighbor: DVec3,
        end_neighbor: DVec3,
    ) -> CornerResolution {
        let Some(corner) = points.position(self.corner) else {
            log::warn!("Bogen ohne Eckpunkt {:?} im Store", self.corner);
            return CornerResolution::Collapsed;
        };

        let resolution =
            geometry::resolve_corner(corner, start_neighbor, end_neighbor, self.curvature);
        match resolution {
            CornerResolution::Collapsed => self.collapse(points),
            CornerResolution::Tangents { start, end, .. } => {
                points.set_position(self.start, start);
                points.set_position(self.end, end);
            }
        }
        resolution
    }

    /// Setzt start und end auf die Koordinaten der Ecke. Idempotent.
    pub fn collapse(&self, points: &mut PointStore) {
        let Some(corner) = points.position(self.corner) else {
            return;
        };
        points.set_position(self.start, corner);
        points.set_position(self.end, corner);
    }

    /// `true` wenn start, end und corner identische Koordinaten haben.
    pub fn is_collapsed(&self, points: &PointStore) -> bool {
        points.coincide(self.start, self.corner) && points.coincide(self.end, self.corner)
    }

    /// Mittelpunkt des Bogen-Kreises; die Ecke selbst bei kollabiertem Bogen.
    pub fn center(&self, points: &PointStore) -> Option<DVec3> {
        let corner = points.position(self.corner)?;
        if self.is_collapsed(points) {
            return Some(corner);
        }
        let start = points.position(self.start)?;
        let end = points.position(self.end)?;
        Some(geometry::arc_center(corner, start, end, self.curvature).unwrap_or(corner))
    }

    /// Aktualisiert den Hilfspunkt-Cache aus der aktuellen Bogen-Lage.
    pub fn divide(&mut self, points: &PointStore) {
        self.construction = if self.is_collapsed(points) {
            None
        } else {
            match (
                points.position(self.corner),
                points.position(self.start),
                points.position(self.end),
            ) {
                (Some(corner), Some(start), Some(end)) => {
                    geometry::construction_points(corner, start, end, self.curvature)
                }
                _ => None,
            }
        };
    }

    /// Setzt Durchmesser: beide ohne Punkt, sonst die passende Seite (Ecke = beide).
    pub fn set_diameter(&mut self, diameter: f64, point: Option<PointId>) {
        let Some(point) = point else {
            self.start_diameter = diameter;
            self.end_diameter = diameter;
            return;
        };

        if point == self.start {
            self.start_diameter = diameter;
        }
        if point == self.end {
            self.end_diameter = diameter;
        }
        if point == self.corner {
            self.start_diameter = diameter;
            self.end_diameter = diameter;
        }
    }

    /// `[start_diameter, end_diameter]`
    pub fn diameters(&self) -> [f64; 2] {
        [self.start_diameter, self.end_diameter]
    }

    /// Tauscht das Start- oder End-Handle aus. Gibt `true` bei Treffer zurück.
    pub fn replace_point(&mut self, old: PointId, new: PointId) -> bool {
        if self.start == old {
            self.start = new;
            true
        } else if self.end == old {
            self.end = new;
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn right_angle_bend(radius: f64) -> (PointStore, Bend) {
        let mut points = PointStore::new();
        let corner = points.insert(DVec3::X);
        let start = points.insert(DVec3::X);
        let end = points.insert(DVec3::X);
        (points, Bend::new(start, end, corner, radius))
    }

    #[test]
    fn normalize_values_moves_tangent_points_in_place() {
        let (mut points, bend) = right_angle_bend(0.3);
        let result = bend.normalize_values(&mut points, DVec3::ZERO, DVec3::new(1.0, 1.0, 0.0));

        assert!(!result.is_collapsed());
        let start = points.position(bend.start).unwrap();
        let end = points.position(bend.end).unwrap();
        assert_relative_eq!(start.distance(DVec3::X), 0.3, epsilon = 1e-12);
        assert_relative_eq!(end.distance(DVec3::X), 0.3, epsilon = 1e-12);
        assert!(!bend.is_collapsed(&points));
        assert_eq!(points.position(bend.corner), Some(DVec3::X));
    }

    #[test]
    fn collapse_is_idempotent() {
        let (mut points, bend) = right_angle_bend(0.3);
        bend.normalize_values(&mut points, DVec3::ZERO, DVec3::new(1.0, 1.0, 0.0));

        bend.collapse(&mut points);
        let once = (points.position(bend.start), points.position(bend.end));
        bend.collapse(&mut points);
        let twice = (points.position(bend.start), points.position(bend.end));

        assert_eq!(once, twice);
        assert!(bend.is_collapsed(&points));
        assert_eq!(points.position(bend.start), points.position(bend.corner));
    }

    #[test]
    fn set_diameter_per_side() {
        let (_points, mut bend) = right_angle_bend(0.3);

        bend.set_diameter(0.2, Some(bend.start));
        assert_eq!(bend.diameters(), [0.2, DEFAULT_DIAMETER]);

        bend.set_diameter(0.4, Some(bend.end));
        assert_eq!(bend.diameters(), [0.2, 0.4]);

        bend.set_diameter(0.5, Some(bend.corner));
        assert_eq!(bend.diameters(), [0.5, 0.5]);

        bend.set_diameter(0.7, None);
        assert_eq!(bend.diameters(), [0.7, 0.7]);

        // Fremder Punkt ändert nichts
        bend.set_diameter(0.9, Some(PointId(999)));
        assert_eq!(bend.diameters(), [0.7, 0.7]);
    }

    #[test]
    fn center_of_collapsed_bend_is_corner() {
        let (points, bend) = right_angle_bend(0.3);
        assert_eq!(bend.center(&points), Some(DVec3::X));
    }

    #[test]
    fn divide_fills_and_clears_construction_cache() {
        let (mut points, mut bend) = right_angle_bend(0.3);
        bend.normalize_values(&mut points, DVec3::ZERO, DVec3::new(1.0, 1.0, 0.0));
        bend.divide(&points);

        let construction = bend.construction.expect("Hilfspunkte erwartet");
        let center = bend.center(&points).unwrap();
        assert_relative_eq!(construction.center.x, center.x, epsilon = 1e-12);
        assert_relative_eq!(construction.center.y, center.y, epsilon = 1e-12);

        bend.collapse(&mut points);
        bend.divide(&points);
        assert!(bend.construction.is_none());
    }

    #[test]
    fn replace_point_swaps_start_or_end() {
        let (mut points, mut bend) = right_angle_bend(0.3);
        let other = points.insert(DVec3::ZERO);
        let old_end = bend.end;

        assert!(bend.replace_point(old_end, other));
        assert_eq!(bend.end, other);
        assert!(!bend.replace_point(old_end, other));
    }
}

//! Reine Bogen-Geometrie: Tangentenpunkte und Hilfspunkte eines Rohrbogens.
//!
//! Alle Funktionen arbeiten auf Koordinaten und kennen keine Punkt-Identitäten.
//! Entartete Eingaben liefern immer [`CornerResolution::Collapsed`].

use glam::DVec3;

/// Toleranz, ab der zwei Richtungen als kollinear gelten (`|dot| >= 1 - tol`).
pub const COLLINEAR_TOLERANCE: f64 = 1e-9;

/// Ergebnis der Ecken-Auflösung eines Bogens.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CornerResolution {
    /// Kein Bogen möglich: start = end = corner
    Collapsed,
    /// Tangentenpunkte auf beiden Schenkeln
    Tangents {
        /// Tangentenpunkt Richtung Start-Nachbar
        start: DVec3,
        /// Tangentenpunkt Richtung End-Nachbar
        end: DVec3,
        /// Abstand beider Tangentenpunkte von der Ecke
        corner_distance: f64,
    },
}

impl CornerResolution {
    /// `true` für das Collapse-Ergebnis.
    pub fn is_collapsed(&self) -> bool {
        matches!(self, Self::Collapsed)
    }
}

/// Abgeleitete Hilfspunkte eines aufgelösten Bogens (Arc-Zentrum und Konstruktionspunkte).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BendConstruction {
    /// Mittelpunkt des Bogen-Kreises
    pub center: DVec3,
    /// Hilfspunkt auf dem Start-Schenkel
    pub point_one: DVec3,
    /// Hilfspunkt auf dem End-Schenkel
    pub point_two: DVec3,
    /// Scheitelpunkt des Bogens auf der Winkelhalbierenden
    pub middle_point: DVec3,
}

/// Einheitsvektoren von der Ecke zu beiden Nachbarn, `None` bei Entartung.
///
/// Entartet: ein Nachbar liegt auf der Ecke, beide Richtungen sind gleich
/// oder die Schenkel sind kollinear (Umkehr oder gerader Durchgang).
fn leg_directions(
    corner: DVec3,
    start_neighbor: DVec3,
    end_neighbor: DVec3,
) -> Option<(DVec3, DVec3)> {
    if start_neighbor == corner || end_neighbor == corner {
        return None;
    }

    let a = (start_neighbor - corner).normalize();
    let b = (end_neighbor - corner).normalize();
    if !a.is_finite() || !b.is_finite() || a == b {
        return None;
    }

    if a.dot(b).abs() >= 1.0 - COLLINEAR_TOLERANCE {
        return None;
    }

    Some((a, b))
}

/// Halber Öffnungswinkel zwischen zwei Einheitsvektoren über `sin = |a - b| / 2`.
fn half_angle(a: DVec3, b: DVec3) -> f64 {
    let sin_angle = (a - b).length() / 2.0;
    sin_angle.clamp(-1.0, 1.0).asin()
}

/// Berechnet die Tangentenpunkte eines Bogens an der Ecke `corner`.
///
/// `corner_distance = r * cos(angle) / sin(angle)`. Reicht der Abstand bis zum
/// Ende eines Schenkels (oder darüber hinaus), wird kollabiert statt extrapoliert.
pub fn resolve_corner(
    corner: DVec3,
    start_neighbor: DVec3,
    end_neighbor: DVec3,
    radius: f64,
) -> CornerResolution {
    let Some((a, b)) = leg_directions(corner, start_neighbor, end_neighbor) else {
        return CornerResolution::Collapsed;
    };

    let angle = half_angle(a, b);
    let corner_distance = angle.cos() * radius / angle.sin();

    if !corner_distance.is_finite() || corner_distance <= 0.0 {
        return CornerResolution::Collapsed;
    }

    // Bogen passt nicht mehr auf die Schenkel
    if corner_distance >= corner.distance(start_neighbor)
        || corner_distance >= corner.distance(end_neighbor)
    {
        return CornerResolution::Collapsed;
    }

    CornerResolution::Tangents {
        start: corner + corner_distance * a,
        end: corner + corner_distance * b,
        corner_distance,
    }
}

/// Arc-Zentrum aus Ecke und (bereits aufgelösten) Tangentenpunkten.
///
/// `None` wenn der Bogen entartet ist; der Aufrufer verwendet dann die Ecke.
pub fn arc_center(corner: DVec3, start: DVec3, end: DVec3, radius: f64) -> Option<DVec3> {
    let (a, b) = leg_directions(corner, start, end)?;
    let center_distance = radius / half_angle(a, b).sin();
    let bisector = (a + b).normalize();
    if !center_distance.is_finite() || !bisector.is_finite() {
        return None;
    }
    Some(corner + bisector * center_distance)
}

/// Leitet Zentrum und Hilfspunkte eines aufgelösten Bogens ab.
pub fn construction_points(
    corner: DVec3,
    start: DVec3,
    end: DVec3,
    radius: f64,
) -> Option<BendConstruction> {
    leg_directions(corner, start, end)?;

    let a = start - corner;
    let b = end - corner;
    let norm_a = a.length();
    let norm_b = b.length();
    let bisector = (a + b).normalize();

    let cos_opening = a.dot(b) / (norm_a * norm_b);
    let center_distance = norm_a / (0.5 * (cos_opening + 1.0)).sqrt();
    if !center_distance.is_finite() || center_distance <= 0.0 || !bisector.is_finite() {
        return None;
    }

    let center = corner + bisector * center_distance;
    let scale = (center_distance - radius) / center_distance;

    Some(BendConstruction {
        center,
        point_one: corner + a * scale,
        point_two: corner + b * scale,
        middle_point: center - bisector * radius,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn right_angle_places_tangents_at_radius() {
        let result = resolve_corner(
            DVec3::new(1.0, 0.0, 0.0),
            DVec3::ZERO,
            DVec3::new(1.0, 1.0, 0.0),
            0.3,
        );

        let CornerResolution::Tangents {
            start,
            end,
            corner_distance,
        } = result
        else {
            panic!("Tangenten erwartet, erhalten: {result:?}");
        };
        assert_relative_eq!(corner_distance, 0.3, epsilon = 1e-12);
        assert_relative_eq!(start.x, 0.7, epsilon = 1e-12);
        assert_relative_eq!(start.y, 0.0, epsilon = 1e-12);
        assert_relative_eq!(end.x, 1.0, epsilon = 1e-12);
        assert_relative_eq!(end.y, 0.3, epsilon = 1e-12);
    }

    #[test]
    fn straight_continuation_collapses() {
        let result = resolve_corner(DVec3::X, DVec3::ZERO, DVec3::new(2.0, 0.0, 0.0), 0.3);
        assert!(result.is_collapsed());
    }

    #[test]
    fn fold_back_collapses() {
        let result = resolve_corner(DVec3::X, DVec3::ZERO, DVec3::new(0.5, 0.0, 0.0), 0.1);
        assert!(result.is_collapsed());
    }

    #[test]
    fn neighbor_on_corner_collapses() {
        assert!(resolve_corner(DVec3::X, DVec3::X, DVec3::Y, 0.3).is_collapsed());
        assert!(resolve_corner(DVec3::X, DVec3::ZERO, DVec3::X, 0.3).is_collapsed());
    }

    #[test]
    fn radius_exceeding_segment_collapses() {
        // Rechter Winkel: corner_distance = r = 2.0 > Schenkellänge 1.0
        let result = resolve_corner(DVec3::X, DVec3::ZERO, DVec3::new(1.0, 1.0, 0.0), 2.0);
        assert!(result.is_collapsed());
    }

    #[test]
    fn acute_angle_uses_cotangent_of_half_angle() {
        // 60° Öffnung → Halbwinkel 30° → d = r / tan(30°)
        let corner = DVec3::ZERO;
        let a = DVec3::new(10.0, 0.0, 0.0);
        let b = DVec3::new(5.0, 5.0 * 3f64.sqrt(), 0.0);
        let result = resolve_corner(corner, a, b, 1.0);

        let CornerResolution::Tangents {
            corner_distance, ..
        } = result
        else {
            panic!("Tangenten erwartet");
        };
        assert_relative_eq!(
            corner_distance,
            1.0 / 30f64.to_radians().tan(),
            epsilon = 1e-9
        );
    }

    #[test]
    fn arc_center_of_right_angle_is_radius_away_from_both_legs() {
        let corner = DVec3::X;
        let start = DVec3::new(0.7, 0.0, 0.0);
        let end = DVec3::new(1.0, 0.3, 0.0);
        let center = arc_center(corner, start, end, 0.3).expect("Zentrum erwartet");

        assert_relative_eq!(center.x, 0.7, epsilon = 1e-12);
        assert_relative_eq!(center.y, 0.3, epsilon = 1e-12);
        assert_relative_eq!(center.distance(start), 0.3, epsilon = 1e-12);
        assert_relative_eq!(center.distance(end), 0.3, epsilon = 1e-12);
    }

    #[test]
    fn construction_points_lie_on_bisector_and_legs() {
        let corner = DVec3::X;
        let start = DVec3::new(0.7, 0.0, 0.0);
        let end = DVec3::new(1.0, 0.3, 0.0);
        let construction = construction_points(corner, start, end, 0.3).expect("Hilfspunkte");

        assert_relative_eq!(construction.center.x, 0.7, epsilon = 1e-12);
        assert_relative_eq!(construction.center.y, 0.3, epsilon = 1e-12);
        // Scheitel liegt im Abstand r vom Zentrum Richtung Ecke
        assert_relative_eq!(
            construction.middle_point.distance(construction.center),
            0.3,
            epsilon = 1e-12
        );
        assert_relative_eq!(construction.point_one.y, 0.0, epsilon = 1e-12);
        assert_relative_eq!(construction.point_two.x, 1.0, epsilon = 1e-12);
    }

    #[test]
    fn construction_points_of_collapsed_bend_are_none() {
        assert!(construction_points(DVec3::X, DVec3::X, DVec3::X, 0.3).is_none());
    }
}

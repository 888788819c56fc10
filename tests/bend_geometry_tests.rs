use approx::assert_relative_eq;
use glam::DVec3;
use pipeline_route_editor::core::geometry::{arc_center, resolve_corner};
use pipeline_route_editor::CornerResolution;

/// Nachbar auf einem Schenkel mit Öffnungswinkel `degrees` zur +X-Achse.
fn leg(degrees: f64, length: f64) -> DVec3 {
    let radians = degrees.to_radians();
    DVec3::new(radians.cos(), radians.sin(), 0.0) * length
}

#[test]
fn test_arc_touches_both_legs_for_common_angles() {
    let radius = 0.4;
    for degrees in [30.0, 45.0, 60.0, 90.0, 120.0, 150.0] {
        let corner = DVec3::ZERO;
        let start_neighbor = DVec3::new(5.0, 0.0, 0.0);
        let end_neighbor = leg(degrees, 5.0);

        let CornerResolution::Tangents { start, end, .. } =
            resolve_corner(corner, start_neighbor, end_neighbor, radius)
        else {
            panic!("{}° sollte auflösbar sein", degrees);
        };
        let center = arc_center(corner, start, end, radius).expect("Zentrum erwartet");

        // Abstand Zentrum → Tangentenpunkt entspricht dem Radius
        assert_relative_eq!(center.distance(start), radius, epsilon = 1e-9);
        assert_relative_eq!(center.distance(end), radius, epsilon = 1e-9);
        // Radius steht senkrecht auf dem Schenkel
        assert_relative_eq!((start - center).dot(start_neighbor), 0.0, epsilon = 1e-9);
        assert_relative_eq!((end - center).dot(end_neighbor), 0.0, epsilon = 1e-9);
    }
}

#[test]
fn test_tighter_angles_push_tangents_further_out() {
    let distance_at = |degrees: f64| match resolve_corner(
        DVec3::ZERO,
        DVec3::new(10.0, 0.0, 0.0),
        leg(degrees, 10.0),
        0.3,
    ) {
        CornerResolution::Tangents {
            corner_distance, ..
        } => corner_distance,
        CornerResolution::Collapsed => panic!("{}° sollte auflösbar sein", degrees),
    };

    assert!(distance_at(30.0) > distance_at(60.0));
    assert!(distance_at(60.0) > distance_at(90.0));
    assert!(distance_at(90.0) > distance_at(150.0));
}

#[test]
fn test_short_leg_collapses_acute_corner() {
    // 30° Ecke mit r = 0.3 braucht ~1.12 Schenkellänge
    let resolution = resolve_corner(
        DVec3::ZERO,
        DVec3::new(1.0, 0.0, 0.0),
        leg(30.0, 5.0),
        0.3,
    );
    assert_eq!(resolution, CornerResolution::Collapsed);
}

#[test]
fn test_out_of_plane_corner_resolves() {
    let resolution = resolve_corner(
        DVec3::new(1.0, 1.0, 1.0),
        DVec3::new(1.0, 1.0, 0.0),
        DVec3::new(1.0, 2.0, 1.0),
        0.25,
    );

    match resolution {
        CornerResolution::Tangents {
            start,
            end,
            corner_distance,
        } => {
            assert_relative_eq!(corner_distance, 0.25, epsilon = 1e-12);
            assert_relative_eq!(start.z, 0.75, epsilon = 1e-12);
            assert_relative_eq!(end.y, 1.25, epsilon = 1e-12);
        }
        CornerResolution::Collapsed => panic!("Rechter Winkel sollte auflösbar sein"),
    }
}

//! Core-Domänentypen: Punkte, Strukturen (Rohr, Bogen, Flansch) und Pipeline.

/// Rohrbogen mit Ecken-Auflösung
pub mod bend;
pub mod flange;
/// Reine Bogen-Geometrie (Tangentenpunkte, Arc-Zentrum, Hilfspunkte)
pub mod geometry;
pub mod pipe;
pub mod pipeline;
pub mod point;
pub mod structure;

pub use bend::{Bend, DEFAULT_CURVATURE_RADIUS};
pub use flange::Flange;
pub use geometry::{BendConstruction, CornerResolution};
pub use pipe::Pipe;
pub use pipeline::{JointUpdate, Pipeline};
pub use point::{Point, PointId, PointStore};
pub use structure::{
    Color, Structure, StructureId, StructureKind, BEND_COLOR, DEFAULT_COLOR, DEFAULT_DIAMETER,
};

//! Polymorphes Topologie-Element einer Pipeline.

use super::{Bend, Flange, Pipe, PointId};

/// Anzeigefarbe als RGB.
pub type Color = [u8; 3];

/// Standard-Durchmesser neuer Strukturen.
pub const DEFAULT_DIAMETER: f64 = 0.1;
/// Standard-Farbe von Rohren und Flanschen (RGB: Weiß).
pub const DEFAULT_COLOR: Color = [255, 255, 255];
/// Standard-Farbe von Bögen (RGB: Hellgrün).
pub const BEND_COLOR: Color = [167, 223, 124];

/// Identitäts-Handle einer Struktur in der Pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StructureId(pub u64);

/// Art einer Struktur (ohne Daten)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StructureKind {
    /// Gerades Rohr
    Pipe,
    /// Rohrbogen
    Bend,
    /// Flansch
    Flange,
}

/// Ein Element der Pipeline-Topologie
#[derive(Debug, Clone, PartialEq)]
pub enum Structure {
    /// Gerades Rohrsegment
    Pipe(Pipe),
    /// Rohrbogen
    Bend(Bend),
    /// Endflansch
    Flange(Flange),
}

impl Structure {
    /// Art der Struktur.
    pub fn kind(&self) -> StructureKind {
        match self {
            Self::Pipe(_) => StructureKind::Pipe,
            Self::Bend(_) => StructureKind::Bend,
            Self::Flange(_) => StructureKind::Flange,
        }
    }

    /// Alle referenzierten Punkte in Deklarations-Reihenfolge.
    pub fn points(&self) -> Vec<PointId> {
        match self {
            Self::Pipe(pipe) => pipe.points().to_vec(),
            Self::Bend(bend) => bend.points().to_vec(),
            Self::Flange(flange) => flange.points().to_vec(),
        }
    }

    /// Prüft ob die Struktur den Punkt (per Identität) referenziert.
    pub fn references(&self, point: PointId) -> bool {
        self.points().contains(&point)
    }

    /// Anzeigefarbe.
    pub fn color(&self) -> Color {
        match self {
            Self::Pipe(pipe) => pipe.color,
            Self::Bend(bend) => bend.color,
            Self::Flange(flange) => flange.color,
        }
    }

    /// Setzt die Anzeigefarbe.
    pub fn set_color(&mut self, color: Color) {
        match self {
            Self::Pipe(pipe) => pipe.color = color,
            Self::Bend(bend) => bend.color = color,
            Self::Flange(flange) => flange.color = color,
        }
    }

    /// `true` wenn die Geometrie berechnet statt fixiert ist.
    pub fn is_auto(&self) -> bool {
        match self {
            Self::Pipe(pipe) => pipe.auto,
            Self::Bend(bend) => bend.auto,
            Self::Flange(flange) => flange.auto,
        }
    }

    /// Setzt den Durchmesser; `point` wird nur von Bögen ausgewertet.
    pub fn set_diameter(&mut self, diameter: f64, point: Option<PointId>) {
        match self {
            Self::Pipe(pipe) => pipe.set_diameter(diameter),
            Self::Bend(bend) => bend.set_diameter(diameter, point),
            Self::Flange(flange) => flange.set_diameter(diameter),
        }
    }

    /// Durchmesser als `[start, end]` (Rohr und Flansch: beide gleich).
    pub fn diameters(&self) -> [f64; 2] {
        match self {
            Self::Pipe(pipe) => [pipe.diameter, pipe.diameter],
            Self::Bend(bend) => bend.diameters(),
            Self::Flange(flange) => [flange.diameter, flange.diameter],
        }
    }

    /// Bogen-Sicht, falls die Struktur ein Bogen ist.
    pub fn as_bend(&self) -> Option<&Bend> {
        match self {
            Self::Bend(bend) => Some(bend),
            _ => None,
        }
    }

    /// Mutierbare Bogen-Sicht.
    pub fn as_bend_mut(&mut self) -> Option<&mut Bend> {
        match self {
            Self::Bend(bend) => Some(bend),
            _ => None,
        }
    }

    /// Rohr-Sicht, falls die Struktur ein Rohr ist.
    pub fn as_pipe(&self) -> Option<&Pipe> {
        match self {
            Self::Pipe(pipe) => Some(pipe),
            _ => None,
        }
    }

    /// Flansch-Sicht, falls die Struktur ein Flansch ist.
    pub fn as_flange(&self) -> Option<&Flange> {
        match self {
            Self::Flange(flange) => Some(flange),
            _ => None,
        }
    }
}

impl From<Pipe> for Structure {
    fn from(pipe: Pipe) -> Self {
        Self::Pipe(pipe)
    }
}

impl From<Bend> for Structure {
    fn from(bend: Bend) -> Self {
        Self::Bend(bend)
    }
}

impl From<Flange> for Structure {
    fn from(flange: Flange) -> Self {
        Self::Flange(flange)
    }
}

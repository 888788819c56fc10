//! Render-Szene als expliziter Übergabevertrag zwischen Editor und Renderer.
//!
//! Lebt im shared-Modul, da `app` sie baut und ein externer Renderer sie konsumiert.

use crate::core::{Color, StructureId, StructureKind};
use glam::DVec3;

/// Read-only Sicht auf eine einzelne Struktur.
#[derive(Debug, Clone, PartialEq)]
pub struct StructureSnapshot {
    /// Handle der Struktur
    pub id: StructureId,
    /// Art (Rohr, Bogen, Flansch)
    pub kind: StructureKind,
    /// Punkt-Positionen in Deklarations-Reihenfolge
    pub points: Vec<DVec3>,
    /// Durchmesser `[start, end]`
    pub diameters: [f64; 2],
    /// Anzeigefarbe
    pub color: Color,
    /// Krümmungsradius (nur Bögen)
    pub curvature: Option<f64>,
    /// Arc-Zentrum (nur Bögen)
    pub center: Option<DVec3>,
    /// Normalenvektor (nur Flansche)
    pub normal: Option<DVec3>,
    /// Struktur ist noch nicht bestätigt
    pub staged: bool,
}

/// Read-only Daten für einen Render-Frame.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PipelineScene {
    /// Alle Strukturen in Pipeline-Reihenfolge
    pub structures: Vec<StructureSnapshot>,
    /// Positionen der ziehbaren Kontrollpunkte
    pub control_points: Vec<DVec3>,
    /// Position des aktiven Punktes
    pub active_point: Option<DVec3>,
}

impl PipelineScene {
    /// Gibt zurück, ob Strukturen zum Zeichnen vorhanden sind.
    pub fn has_structures(&self) -> bool {
        !self.structures.is_empty()
    }

    /// Anzahl gestagter Strukturen.
    pub fn staged_count(&self) -> usize {
        self.structures.iter().filter(|s| s.staged).count()
    }
}

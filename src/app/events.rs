//! SessionIntent- und SessionCommand-Enums für den Intent/Command-Datenfluss.

use super::session::{OperationMode, SelectionMode};
use crate::core::StructureId;
use crate::shared::EditorOptions;
use glam::DVec3;

/// Eingaben aus Viewport, Eingabefeldern oder Skripten.
/// Intents enthalten keine Mutationslogik.
#[derive(Debug, Clone, PartialEq)]
pub enum SessionIntent {
    /// Kontrollpunkt im Viewport angeklickt
    ControlPointPicked { index: usize },
    /// Struktur im Viewport angeklickt
    StructurePicked { id: StructureId },
    /// Delta-Eingabe für das nächste Rohr geändert
    PipeDeltasChanged { deltas: DVec3 },
    /// Durchmesser-Eingabe geändert
    DiameterChanged { diameter: f64 },
    /// Flansch am aktiven Punkt setzen
    FlangeRequested,
    /// Laufende Geste bestätigen
    CommitRequested,
    /// Laufende Geste verwerfen
    CancelRequested,
    /// Zwischen Punkt- und Objekt-Auswahl umschalten
    SelectionModeChanged { mode: SelectionMode },
    /// Zwischen Erstellen und Bearbeiten umschalten
    OperationModeChanged { mode: OperationMode },
    /// Neue Optionen übernehmen
    OptionsChanged { options: EditorOptions },
}

/// Mutierende Operationen auf der `EditorSession`.
#[derive(Debug, Clone, PartialEq)]
pub enum SessionCommand {
    /// Kontrollpunkt-Pick abhängig vom Auswahlmodus verarbeiten
    PickControlPoint { index: usize },
    /// Struktur-Pick abhängig vom Auswahlmodus verarbeiten
    PickStructure { id: StructureId },
    /// Abgebogenes Rohr um Delta stagen
    StagePipeDeltas { deltas: DVec3 },
    /// Gestagte Strukturen verwerfen
    UnstageStructure,
    /// Gestagte Strukturen bestätigen
    CommitStructure,
    /// Flansch setzen und neues Rohr beginnen
    AddFlange,
    /// Durchmesser am aktiven Punkt ändern
    UpdateDiameter { diameter: f64 },
    /// Auswahlmodus setzen
    SetSelectionMode { mode: SelectionMode },
    /// Bedienmodus setzen
    SetOperationMode { mode: OperationMode },
    /// Optionen übernehmen
    ApplyOptions { options: EditorOptions },
}

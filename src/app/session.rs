//! Interaktions-Schicht über dem `PipelineEditor`.
//!
//! Übersetzt Gesten eines 3D-Editor-Widgets (Punkt-Klick, Delta-Eingabe,
//! Bestätigen/Verwerfen) in Editor-Operationen. Hält die Anker-Koordinate
//! einer laufenden Delta-Geste sowie Auswahl- und Bedienmodus.

use super::PipelineEditor;
use crate::core::StructureId;
use crate::shared::{EditorOptions, PipelineScene};
use glam::DVec3;

/// Was ein Klick im Viewport auswählt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SelectionMode {
    /// Kontrollpunkte werden gepickt
    #[default]
    SelectPoints,
    /// Strukturen werden gepickt
    SelectObjects,
}

/// Bedienmodus des Editors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OperationMode {
    /// Neue Strukturen anlegen
    Creation,
    /// Bestehende Strukturen bearbeiten
    #[default]
    Edition,
}

/// Modus-Konfiguration einer Sitzung.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EditorConfig {
    /// Aktueller Auswahlmodus
    pub selection_mode: SelectionMode,
    /// Aktueller Bedienmodus
    pub operation_mode: OperationMode,
}

/// Eine interaktive Sitzung: Editor + Gesten-Zustand.
#[derive(Debug, Clone, Default)]
pub struct EditorSession {
    /// Der bearbeitete Pipeline-Editor
    pub editor: PipelineEditor,
    /// Auswahl- und Bedienmodus
    pub config: EditorConfig,
    /// Position des aktiven Punktes zu Beginn der laufenden Delta-Geste
    pub coords: DVec3,
    /// Zuletzt gepickte Struktur (nur im Objekt-Modus)
    pub selected_structure: Option<StructureId>,
}

impl EditorSession {
    /// Erstellt eine neue Sitzung mit Standard-Optionen.
    pub fn new() -> Self {
        Self::default()
    }

    /// Erstellt eine Sitzung mit geladenen Optionen.
    pub fn with_options(options: EditorOptions) -> Self {
        Self::from_editor(PipelineEditor::with_options(options))
    }

    /// Übernimmt einen bestehenden Editor.
    pub fn from_editor(editor: PipelineEditor) -> Self {
        let coords = editor.active_position().unwrap_or(DVec3::ZERO);
        Self {
            editor,
            coords,
            ..Self::default()
        }
    }

    /// Baut die Render-Szene des aktuellen Zustands.
    pub fn scene(&self) -> PipelineScene {
        super::render_scene::build(&self.editor)
    }

    // ── Cursor ──────────────────────────────────────────────────

    /// Verwirft offene Änderungen und aktiviert den Kontrollpunkt `index`.
    ///
    /// Zu große Indizes werden auf den letzten Kontrollpunkt begrenzt.
    pub fn change_index(&mut self, index: usize) -> anyhow::Result<()> {
        if self.editor.control_points().is_empty() {
            return Ok(());
        }

        self.editor.dismiss();
        let last = self.editor.control_points().len().saturating_sub(1);
        let index = index.min(last);

        self.editor.set_active_point(index)?;
        self.coords = self.editor.active_position()?;
        Ok(())
    }

    // ── Delta-Geste ─────────────────────────────────────────────

    /// Staged ein abgebogenes Rohr mit Versatz `deltas` ab dem Geste-Anker.
    ///
    /// Der erste Aufruf einer Geste legt Bogen + Rohr an, folgende Aufrufe
    /// verschieben nur den Endpunkt. `(0, 0, 0)` verwirft die Geste.
    pub fn stage_pipe_deltas(&mut self, deltas: DVec3) -> anyhow::Result<()> {
        if deltas == DVec3::ZERO {
            self.unstage_structure();
            return Ok(());
        }

        if !self.editor.is_staged() {
            self.coords = self.editor.active_position()?;
            let radius = self.editor.options().default_curvature_radius;
            self.editor.add_bent_pipe(None, radius)?;
        }

        self.editor.set_deltas(deltas);
        self.editor.move_point(self.coords + deltas)?;
        self.editor.update_joints();
        Ok(())
    }

    /// Bestätigt die laufende Geste; der neue aktive Punkt wird Anker.
    pub fn commit_structure(&mut self) -> anyhow::Result<()> {
        self.coords = self.editor.active_position()?;
        self.editor.commit();
        Ok(())
    }

    /// Verwirft die laufende Geste.
    pub fn unstage_structure(&mut self) {
        self.editor.dismiss();
    }

    /// Setzt einen Flansch an den aktiven Punkt und beginnt ein neues abgebogenes Rohr.
    pub fn add_flange(&mut self) -> anyhow::Result<()> {
        self.unstage_structure();
        self.editor.add_flange()?;
        let radius = self.editor.options().default_curvature_radius;
        self.editor.add_bent_pipe(None, radius)?;
        Ok(())
    }

    /// Ändert den Durchmesser am aktiven Punkt und für neue Strukturen.
    pub fn update_diameter(&mut self, diameter: f64) {
        self.editor.change_diameter(diameter);
    }

    // ── Picking ─────────────────────────────────────────────────

    /// Kontrollpunkt `index` wurde im Viewport angeklickt.
    pub fn on_point_picked(&mut self, index: usize) -> anyhow::Result<()> {
        if self.config.selection_mode != SelectionMode::SelectPoints {
            log::warn!("Punkt-Pick #{} ignoriert: Objekt-Auswahlmodus aktiv", index);
            return Ok(());
        }
        self.change_index(index)
    }

    /// Struktur wurde im Viewport angeklickt.
    pub fn on_structure_picked(&mut self, id: StructureId) {
        if self.config.selection_mode != SelectionMode::SelectObjects {
            log::warn!("Struktur-Pick {:?} ignoriert: Punkt-Auswahlmodus aktiv", id);
            return;
        }
        if !self.editor.pipeline().contains_structure(id) {
            log::warn!("Struktur-Pick {:?} ignoriert: unbekannte Struktur", id);
            return;
        }
        self.selected_structure = Some(id);
        log::debug!("Struktur {:?} selektiert", id);
    }

    /// Wechselt den Auswahlmodus; die Struktur-Selektion wird verworfen.
    pub fn set_selection_mode(&mut self, mode: SelectionMode) {
        self.config.selection_mode = mode;
        self.selected_structure = None;
    }

    /// Wechselt den Bedienmodus.
    pub fn set_operation_mode(&mut self, mode: OperationMode) {
        self.config.operation_mode = mode;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn session_with_straight_run() -> EditorSession {
        let mut session = EditorSession::new();
        session.editor.add_pipe(Some(DVec3::X)).unwrap();
        session.commit_structure().unwrap();
        session
    }

    #[test]
    fn test_change_index_clamps_to_last_control_point() {
        let mut session = session_with_straight_run();

        session.change_index(42).unwrap();

        assert_eq!(session.editor.active_position().unwrap(), DVec3::X);
        assert_eq!(session.coords, DVec3::X);
    }

    #[test]
    fn test_change_index_dismisses_staged_gesture() {
        let mut session = session_with_straight_run();
        session.stage_pipe_deltas(DVec3::Y).unwrap();
        assert!(session.editor.is_staged());

        session.change_index(0).unwrap();

        assert!(!session.editor.is_staged());
        assert_eq!(session.editor.pipeline().structure_count(), 1);
        assert_eq!(session.coords, DVec3::ZERO);
    }

    #[test]
    fn test_stage_pipe_deltas_moves_relative_to_anchor() {
        let mut session = session_with_straight_run();

        session.stage_pipe_deltas(DVec3::Y).unwrap();
        session.stage_pipe_deltas(DVec3::new(0.0, 2.0, 0.0)).unwrap();

        // Bogen + Rohr nur einmal angelegt
        assert_eq!(session.editor.pipeline().structure_count(), 3);
        assert_eq!(
            session.editor.active_position().unwrap(),
            DVec3::new(1.0, 2.0, 0.0)
        );
        assert_eq!(session.editor.deltas(), DVec3::new(0.0, 2.0, 0.0));

        let (_, bend) = session.editor.pipeline().bends().next().unwrap();
        let end = session.editor.pipeline().point_position(bend.end).unwrap();
        assert_relative_eq!(end.y, 0.3, epsilon = 1e-12);
    }

    #[test]
    fn test_zero_deltas_unstage() {
        let mut session = session_with_straight_run();
        session.stage_pipe_deltas(DVec3::Y).unwrap();

        session.stage_pipe_deltas(DVec3::ZERO).unwrap();

        assert!(!session.editor.is_staged());
        assert_eq!(session.editor.pipeline().structure_count(), 1);
        assert_eq!(session.editor.active_position().unwrap(), DVec3::X);
    }

    #[test]
    fn test_commit_structure_moves_anchor() {
        let mut session = session_with_straight_run();
        session.stage_pipe_deltas(DVec3::Y).unwrap();

        session.commit_structure().unwrap();

        assert!(!session.editor.is_staged());
        assert_eq!(session.coords, DVec3::new(1.0, 1.0, 0.0));
    }

    #[test]
    fn test_add_flange_starts_new_bent_pipe() {
        let mut session = session_with_straight_run();

        session.add_flange().unwrap();

        let kinds: Vec<_> = session
            .editor
            .pipeline()
            .components()
            .map(|s| s.kind())
            .collect();
        assert_eq!(
            kinds,
            vec![
                crate::core::StructureKind::Pipe,
                crate::core::StructureKind::Flange,
                crate::core::StructureKind::Bend,
                crate::core::StructureKind::Pipe,
            ]
        );
        assert_eq!(session.editor.staged_structures().len(), 3);
    }

    #[test]
    fn test_point_pick_ignored_in_object_mode() {
        let mut session = session_with_straight_run();
        session.set_selection_mode(SelectionMode::SelectObjects);

        session.on_point_picked(0).unwrap();

        assert_eq!(session.editor.active_position().unwrap(), DVec3::X);
    }

    #[test]
    fn test_structure_pick_requires_object_mode() {
        let mut session = session_with_straight_run();
        let (id, _) = session.editor.pipeline().structures().next().unwrap();

        session.on_structure_picked(id);
        assert_eq!(session.selected_structure, None);

        session.set_selection_mode(SelectionMode::SelectObjects);
        session.on_structure_picked(id);
        assert_eq!(session.selected_structure, Some(id));

        session.on_structure_picked(StructureId(999));
        assert_eq!(session.selected_structure, Some(id));
    }

    #[test]
    fn test_update_diameter_reaches_active_pipe() {
        let mut session = session_with_straight_run();

        session.update_diameter(0.4);

        let pipe = session.editor.pipeline().components().next().unwrap();
        assert_eq!(pipe.diameters(), [0.4, 0.4]);
    }
}

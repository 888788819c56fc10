//! Interaktive Editier-Sitzung über einer Pipeline.
//!
//! Der Editor hält den aktiven Punkt, die abgeleiteten Kontrollpunkte, den
//! Delta-Vektor für neue Rohre und den Staging-Zustand. Jede topologie-
//! verändernde Operation rescannt Gelenke bzw. Kontrollpunkte vollständig.

use crate::core::{Bend, Flange, Pipe, Pipeline, PointId, Structure, StructureId};
use crate::shared::EditorOptions;
use anyhow::{anyhow, ensure, Context};
use glam::DVec3;

/// Staging-Zustand des Editors.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum EditState {
    /// Keine offenen Änderungen
    #[default]
    Clean,
    /// Mindestens eine unbestätigte Struktur
    Staged {
        /// Aktiver Punkt beim Betreten des Staging (Ziel von `dismiss`)
        anchor: PointId,
        /// Erstes während des Stagings vergebenes Punkt-Handle
        first_point: PointId,
        /// Seit dem letzten Commit/Dismiss hinzugefügte Strukturen
        structures: Vec<StructureId>,
    },
}

/// Eine Editier-Sitzung über genau einer Pipeline
#[derive(Debug, Clone)]
pub struct PipelineEditor {
    pipeline: Pipeline,
    control_points: Vec<PointId>,
    active_point: PointId,
    deltas: DVec3,
    state: EditState,
    options: EditorOptions,
}

impl Default for PipelineEditor {
    fn default() -> Self {
        Self::new()
    }
}

impl PipelineEditor {
    /// Erstellt einen leeren Editor mit einem Startpunkt im Ursprung.
    pub fn new() -> Self {
        Self::with_options(EditorOptions::default())
    }

    /// Erstellt einen leeren Editor mit den gegebenen Optionen.
    pub fn with_options(options: EditorOptions) -> Self {
        let mut pipeline = Pipeline::new();
        let seed = pipeline.add_point(DVec3::ZERO);
        Self {
            pipeline,
            control_points: vec![seed],
            active_point: seed,
            deltas: options.initial_deltas,
            state: EditState::Clean,
            options,
        }
    }

    /// Übernimmt eine extern befüllte Pipeline (z.B. aus einem Import).
    ///
    /// Gelenke und Kontrollpunkte werden sofort berechnet; aktiver Punkt ist
    /// der letzte Kontrollpunkt bzw. ein neuer Startpunkt bei leerer Pipeline.
    pub fn from_pipeline(mut pipeline: Pipeline, options: EditorOptions) -> Self {
        pipeline.update_joints();
        let control_points = pipeline.control_points();
        let active_point = match control_points.last() {
            Some(&last) => last,
            None => pipeline.add_point(DVec3::ZERO),
        };

        let mut editor = Self {
            pipeline,
            control_points,
            active_point,
            deltas: options.initial_deltas,
            state: EditState::Clean,
            options,
        };
        editor.update_control_points();
        editor
    }

    // ── Read-only Zugriff ───────────────────────────────────────

    /// Die bearbeitete Pipeline.
    pub fn pipeline(&self) -> &Pipeline {
        &self.pipeline
    }

    /// Mutierbarer Zugriff für Bulk-Befüllung; danach [`Self::refresh`] aufrufen.
    pub fn pipeline_mut(&mut self) -> &mut Pipeline {
        &mut self.pipeline
    }

    /// Ziehbare Kontrollpunkte (Handles).
    pub fn control_points(&self) -> &[PointId] {
        &self.control_points
    }

    /// Positionen der Kontrollpunkte in Listen-Reihenfolge.
    pub fn control_point_positions(&self) -> Vec<DVec3> {
        self.control_points
            .iter()
            .filter_map(|&p| self.pipeline.point_position(p))
            .collect()
    }

    /// Handle des aktiven Punktes.
    pub fn active_point(&self) -> PointId {
        self.active_point
    }

    /// Position des aktiven Punktes.
    pub fn active_position(&self) -> anyhow::Result<DVec3> {
        self.pipeline
            .point_position(self.active_point)
            .ok_or_else(|| anyhow!("Aktiver Punkt {:?} existiert nicht", self.active_point))
    }

    /// Aktueller Delta-Vektor für `add_pipe`.
    pub fn deltas(&self) -> DVec3 {
        self.deltas
    }

    /// Aktueller Staging-Zustand.
    pub fn state(&self) -> &EditState {
        &self.state
    }

    /// `true` wenn unbestätigte Strukturen existieren.
    pub fn is_staged(&self) -> bool {
        matches!(self.state, EditState::Staged { .. })
    }

    /// Unbestätigte Strukturen (leer im Clean-Zustand).
    pub fn staged_structures(&self) -> &[StructureId] {
        match &self.state {
            EditState::Clean => &[],
            EditState::Staged { structures, .. } => structures,
        }
    }

    /// Laufzeit-Optionen des Editors.
    pub fn options(&self) -> &EditorOptions {
        &self.options
    }

    /// Ersetzt die Optionen. Bestehende Strukturen bleiben unverändert.
    pub fn set_options(&mut self, options: EditorOptions) {
        self.options = options;
    }

    // ── Cursor ──────────────────────────────────────────────────

    /// Setzt den aktiven Punkt auf den Kontrollpunkt mit dem gegebenen Index.
    pub fn set_active_point(&mut self, index: usize) -> anyhow::Result<()> {
        let point = self.control_points.get(index).copied().ok_or_else(|| {
            anyhow!(
                "Kontrollpunkt-Index {} außerhalb von 0..{}",
                index,
                self.control_points.len()
            )
        })?;
        self.active_point = point;
        log::debug!("Aktiver Punkt: #{} ({:?})", index, point);
        Ok(())
    }

    /// Setzt den Versatz für folgende `add_pipe`-Aufrufe ohne explizites Delta.
    pub fn set_deltas(&mut self, deltas: DVec3) {
        self.deltas = deltas;
    }

    /// Verschiebt den aktiven Punkt. Gelenke werden NICHT neu berechnet.
    pub fn move_point(&mut self, position: DVec3) -> anyhow::Result<()> {
        ensure!(
            self.pipeline.set_point_position(self.active_point, position),
            "Aktiver Punkt {:?} existiert nicht",
            self.active_point
        );
        Ok(())
    }

    // ── Strukturen hinzufügen ───────────────────────────────────

    /// Fügt ein Rohr vom aktiven Punkt um `deltas` versetzt hinzu.
    ///
    /// Ohne explizites Delta wird der zuletzt gesetzte Delta-Vektor verwendet.
    /// Der neue Endpunkt wird aktiver Punkt.
    pub fn add_pipe(&mut self, deltas: Option<DVec3>) -> anyhow::Result<StructureId> {
        if let Some(deltas) = deltas {
            self.deltas = deltas;
        }

        let current = self.active_position()?;
        let first_point = self.pipeline.next_point_id();
        let next_point = self.pipeline.add_point(current + self.deltas);
        let pipe = Pipe::new(self.active_point, next_point)
            .with_diameter(self.options.default_diameter)
            .with_color(self.options.staged_color);

        let id = self.pipeline.add_structure(pipe);
        self.stage(id, first_point);
        self.update_control_points();
        self.active_point = next_point;

        log::info!(
            "Rohr {:?} hinzugefügt: ({:.3}, {:.3}, {:.3}) → ({:.3}, {:.3}, {:.3})",
            id,
            current.x,
            current.y,
            current.z,
            current.x + self.deltas.x,
            current.y + self.deltas.y,
            current.z + self.deltas.z
        );
        Ok(id)
    }

    /// Fügt am aktiven Punkt einen Bogen hinzu oder liefert den bestehenden.
    ///
    /// Ist der aktive Punkt bereits Ecke eines Bogens, wird dieser unverändert
    /// zurückgegeben. Sonst entstehen Ecke und Ende als Kopien des aktiven
    /// Punktes; das Ende wird neuer aktiver Punkt.
    pub fn add_bend(&mut self, curvature_radius: f64) -> anyhow::Result<StructureId> {
        if let Some(existing) = self.pipeline.find_bend_at_corner(self.active_point) {
            log::debug!("Bogen {:?} an aktiver Ecke wiederverwendet", existing);
            return Ok(existing);
        }

        let start = self.active_point;
        let first_point = self.pipeline.next_point_id();
        let end = self
            .pipeline
            .duplicate_point(start)
            .with_context(|| format!("Aktiver Punkt {:?} existiert nicht", start))?;
        let corner = self
            .pipeline
            .duplicate_point(start)
            .with_context(|| format!("Aktiver Punkt {:?} existiert nicht", start))?;

        let bend = Bend::new(start, end, corner, curvature_radius)
            .with_diameter(self.options.default_diameter)
            .with_color(self.options.staged_color);

        let id = self.pipeline.add_structure(bend);
        self.stage(id, first_point);
        self.update_joints();
        self.update_control_points();
        self.active_point = end;

        log::info!("Bogen {:?} hinzugefügt (r = {})", id, curvature_radius);
        Ok(id)
    }

    /// Bogen + Rohr + Gelenk-Neuberechnung: die "abbiegen und weiter"-Geste.
    pub fn add_bent_pipe(
        &mut self,
        deltas: Option<DVec3>,
        curvature_radius: f64,
    ) -> anyhow::Result<(StructureId, StructureId)> {
        let bend = self.add_bend(curvature_radius)?;
        let pipe = self.add_pipe(deltas)?;
        self.update_joints();
        Ok((bend, pipe))
    }

    /// Setzt einen Flansch an den aktiven Punkt.
    ///
    /// Die Normale zeigt vom angrenzenden Rohr weg; ohne Rohr in Richtung des
    /// Delta-Vektors, sonst +X.
    pub fn add_flange(&mut self) -> anyhow::Result<StructureId> {
        let position = self.active_position()?;
        let normal = self.flange_normal(position);

        let flange = Flange::new(self.active_point, normal)
            .with_diameter(self.options.default_diameter)
            .with_color(self.options.staged_color);

        let first_point = self.pipeline.next_point_id();
        let id = self.pipeline.add_structure(flange);
        self.stage(id, first_point);
        self.update_control_points();

        log::info!("Flansch {:?} hinzugefügt, Normale {:?}", id, normal);
        Ok(id)
    }

    fn flange_normal(&self, position: DVec3) -> DVec3 {
        let from_pipe = self
            .pipeline
            .pipe_touching(self.active_point)
            .and_then(|pipe| pipe.opposite(self.active_point))
            .and_then(|other| self.pipeline.point_position(other))
            .map(|other| (position - other).normalize());

        [from_pipe, Some(self.deltas.normalize())]
            .into_iter()
            .flatten()
            .find(|n| n.is_finite())
            .unwrap_or(DVec3::X)
    }

    /// Setzt den Durchmesser für neue Strukturen und alle Strukturen am aktiven Punkt.
    pub fn change_diameter(&mut self, diameter: f64) {
        self.options.default_diameter = diameter;

        let active = self.active_point;
        let touching: Vec<StructureId> = self
            .pipeline
            .structures()
            .filter(|(_, s)| s.references(active))
            .map(|(id, _)| id)
            .collect();

        for id in &touching {
            if let Some(structure) = self.pipeline.structure_mut(*id) {
                structure.set_diameter(diameter, Some(active));
            }
        }
        log::info!(
            "Durchmesser {} gesetzt ({} Strukturen am aktiven Punkt)",
            diameter,
            touching.len()
        );
    }

    /// Entfernt eine Struktur; Bögen werden vorher kollabiert.
    pub fn remove_structure(&mut self, id: StructureId) -> anyhow::Result<Structure> {
        self.pipeline.collapse_bend(id);
        self.pipeline
            .remove_structure(id)
            .ok_or_else(|| anyhow!("Struktur {:?} existiert nicht", id))
    }

    // ── Neuberechnung ───────────────────────────────────────────

    /// Löst alle Bögen gegen die aktuelle Nachbarschaft neu auf.
    pub fn update_joints(&mut self) {
        self.pipeline.update_joints();
    }

    /// Leitet die Kontrollpunkt-Liste neu ab.
    ///
    /// Eine leere Pipeline bietet den aktiven Punkt als einzigen Handle an.
    pub fn update_control_points(&mut self) {
        let mut control_points = self.pipeline.control_points();
        if control_points.is_empty() {
            control_points.push(self.active_point);
        }
        log::debug!("{} Kontrollpunkte abgeleitet", control_points.len());
        self.control_points = control_points;
    }

    /// Gelenke und Kontrollpunkte nach externer Befüllung neu berechnen.
    pub fn refresh(&mut self) {
        self.update_joints();
        self.update_control_points();
    }

    // ── Staging ─────────────────────────────────────────────────

    fn stage(&mut self, id: StructureId, first_point: PointId) {
        match &mut self.state {
            EditState::Clean => {
                self.state = EditState::Staged {
                    anchor: self.active_point,
                    first_point,
                    structures: vec![id],
                };
            }
            EditState::Staged { structures, .. } => structures.push(id),
        }
    }

    /// Bestätigt alle gestagten Strukturen (Farbwechsel) → Clean.
    pub fn commit(&mut self) {
        self.update_control_points();

        let EditState::Staged { structures, .. } = std::mem::take(&mut self.state) else {
            return;
        };
        let color = self.options.committed_color;
        for id in &structures {
            if let Some(structure) = self.pipeline.structure_mut(*id) {
                structure.set_color(color);
            }
        }
        log::info!("{} Strukturen bestätigt", structures.len());
    }

    /// Verwirft alle gestagten Strukturen → Clean.
    ///
    /// Stellt den aktiven Punkt vom Beginn des Stagings wieder her und
    /// entfernt die seitdem erzeugten, nicht mehr referenzierten Punkte.
    /// Ältere freie Punkte (z.B. aus einem Import) bleiben erhalten.
    pub fn dismiss(&mut self) {
        if let EditState::Staged {
            anchor,
            first_point,
            structures,
        } = std::mem::take(&mut self.state)
        {
            for id in &structures {
                if let Err(e) = self.remove_structure(*id) {
                    log::warn!("Verwerfen übersprungen: {}", e);
                }
            }
            self.active_point = anchor;
            self.pipeline.prune_points_created_since(first_point);
            self.update_joints();
            log::info!("{} Strukturen verworfen", structures.len());
        }
        self.update_control_points();
    }
}

//! Die zentrale Pipeline-Datenstruktur: Strukturen, Punkt-Store und Topologie-Abfragen.

use super::{Bend, Pipe, PointId, PointStore, Structure, StructureId};
use glam::DVec3;
use indexmap::IndexMap;
use std::collections::HashSet;

/// Geordnete Sammlung aller Strukturen inkl. der geteilten Punkte
#[derive(Debug, Clone, Default)]
pub struct Pipeline {
    /// Alle Strukturen in Erstellungsreihenfolge
    structures: IndexMap<StructureId, Structure>,
    /// Alle Punkte, auf die Strukturen oder der Editor verweisen
    points: PointStore,
    next_structure_id: u64,
}

/// Statistik eines Gelenk-Durchlaufs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct JointUpdate {
    /// Bögen mit aufgelösten Tangentenpunkten
    pub resolved: usize,
    /// Kollabierte Bögen
    pub collapsed: usize,
}

impl Pipeline {
    /// Erstellt eine leere Pipeline.
    pub fn new() -> Self {
        Self::default()
    }

    // ── Punkte ──────────────────────────────────────────────────

    /// Legt einen neuen Punkt an.
    pub fn add_point(&mut self, position: DVec3) -> PointId {
        self.points.insert(position)
    }

    /// Legt eine Kopie eines bestehenden Punktes als neuen Vertex an.
    pub fn duplicate_point(&mut self, id: PointId) -> Option<PointId> {
        self.points.duplicate(id)
    }

    /// Read-only Zugriff auf den Punkt-Store.
    pub fn points(&self) -> &PointStore {
        &self.points
    }

    /// Position eines Punktes.
    pub fn point_position(&self, id: PointId) -> Option<DVec3> {
        self.points.position(id)
    }

    /// Verschiebt einen Punkt; alle Strukturen mit diesem Handle sehen die Änderung.
    pub(crate) fn set_point_position(&mut self, id: PointId, position: DVec3) -> bool {
        self.points.set_position(id, position)
    }

    /// Anzahl der Punkte im Store.
    pub fn point_count(&self) -> usize {
        self.points.len()
    }

    /// Alle von mindestens einer Struktur referenzierten Punkte.
    pub fn referenced_points(&self) -> HashSet<PointId> {
        self.structures
            .values()
            .flat_map(|s| s.points())
            .collect()
    }

    /// Handle des nächsten angelegten Punktes (Handles steigen monoton).
    pub fn next_point_id(&self) -> PointId {
        self.points.next_id()
    }

    /// Entfernt unreferenzierte Punkte mit Handle `>= first`.
    ///
    /// Ältere Punkte bleiben auch ohne Struktur erhalten (z.B. frei importierte).
    pub fn prune_points_created_since(&mut self, first: PointId) -> usize {
        let referenced = self.referenced_points();
        let removed = self
            .points
            .retain(|id| id < first || referenced.contains(&id));
        if removed > 0 {
            log::debug!("{} unreferenzierte Punkte entfernt", removed);
        }
        removed
    }

    // ── Strukturen ──────────────────────────────────────────────

    /// Hängt eine Struktur an und gibt ihr Handle zurück.
    pub fn add_structure(&mut self, structure: impl Into<Structure>) -> StructureId {
        self.next_structure_id += 1;
        let id = StructureId(self.next_structure_id);
        self.structures.insert(id, structure.into());
        id
    }

    /// Entfernt eine Struktur unter Beibehaltung der Reihenfolge der übrigen.
    pub fn remove_structure(&mut self, id: StructureId) -> Option<Structure> {
        self.structures.shift_remove(&id)
    }

    /// Read-only Zugriff auf eine Struktur.
    pub fn structure(&self, id: StructureId) -> Option<&Structure> {
        self.structures.get(&id)
    }

    /// Mutierbarer Zugriff auf eine Struktur.
    pub fn structure_mut(&mut self, id: StructureId) -> Option<&mut Structure> {
        self.structures.get_mut(&id)
    }

    /// Prüft ob eine Struktur existiert.
    pub fn contains_structure(&self, id: StructureId) -> bool {
        self.structures.contains_key(&id)
    }

    /// Iterator über alle Strukturen mit Handle (Erstellungsreihenfolge).
    pub fn structures(&self) -> impl Iterator<Item = (StructureId, &Structure)> {
        self.structures.iter().map(|(id, s)| (*id, s))
    }

    /// Iterator über alle Strukturen ohne Handle.
    pub fn components(&self) -> impl Iterator<Item = &Structure> {
        self.structures.values()
    }

    /// Iterator über alle Bögen.
    pub fn bends(&self) -> impl Iterator<Item = (StructureId, &Bend)> {
        self.structures
            .iter()
            .filter_map(|(id, s)| s.as_bend().map(|bend| (*id, bend)))
    }

    /// Iterator über alle Rohre.
    pub fn pipes(&self) -> impl Iterator<Item = (StructureId, &Pipe)> {
        self.structures
            .iter()
            .filter_map(|(id, s)| s.as_pipe().map(|pipe| (*id, pipe)))
    }

    /// Anzahl der Strukturen.
    pub fn structure_count(&self) -> usize {
        self.structures.len()
    }

    /// Kollabiert einen Bogen (start = end = corner). `false` wenn `id` kein Bogen ist.
    pub fn collapse_bend(&mut self, id: StructureId) -> bool {
        let Some(Structure::Bend(bend)) = self.structures.get_mut(&id) else {
            return false;
        };
        bend.collapse(&mut self.points);
        bend.divide(&self.points);
        true
    }

    /// Findet den Bogen, dessen Ecke der gegebene Punkt ist.
    pub fn find_bend_at_corner(&self, corner: PointId) -> Option<StructureId> {
        self.bends()
            .find(|(_, bend)| bend.corner == corner)
            .map(|(id, _)| id)
    }

    /// Findet ein Rohr, das am gegebenen Punkt endet oder beginnt.
    pub fn pipe_touching(&self, point: PointId) -> Option<&Pipe> {
        self.pipes()
            .map(|(_, pipe)| pipe)
            .find(|pipe| pipe.opposite(point).is_some())
    }

    // ── Topologie ───────────────────────────────────────────────

    /// Gegenüberliegende Endpunkte aller Rohre, die `point` per Identität berühren.
    pub fn connected_points(&self, point: PointId) -> Vec<PointId> {
        self.pipes()
            .filter_map(|(_, pipe)| pipe.opposite(point))
            .collect()
    }

    /// Nachbarpunkte eines Bogens über angrenzende Rohre (start, end, corner).
    ///
    /// Punkte, die selbst zum Bogen gehören, zählen nicht als Nachbarn.
    pub fn bend_neighbors(&self, bend: &Bend) -> Vec<PointId> {
        bend.points()
            .into_iter()
            .flat_map(|p| self.connected_points(p))
            .filter(|p| !bend.contains(*p))
            .collect()
    }

    /// Löst alle Bögen gegen ihre aktuelle Nachbarschaft neu auf (voller Rescan).
    ///
    /// Genau zwei Nachbarn → Tangentenpunkte berechnen, sonst kollabieren.
    /// Bögen werden in Pipeline-Reihenfolge nacheinander aufgelöst: ein
    /// späterer Bogen sieht die bereits verschobenen Tangentenpunkte früherer
    /// Bögen als Nachbarn. Der Hilfspunkt-Cache jedes Bogens wird mit aktualisiert.
    pub fn update_joints(&mut self) -> JointUpdate {
        let bend_ids: Vec<StructureId> = self.bends().map(|(id, _)| id).collect();

        let mut summary = JointUpdate::default();
        for id in bend_ids {
            let Some(bend) = self.structures.get(&id).and_then(Structure::as_bend) else {
                continue;
            };
            let plan = match self.bend_neighbors(bend).as_slice() {
                [a, b] => self.points.position(*a).zip(self.points.position(*b)),
                _ => None,
            };

            let Some(Structure::Bend(bend)) = self.structures.get_mut(&id) else {
                continue;
            };
            let collapsed = match plan {
                Some((start_neighbor, end_neighbor)) => bend
                    .normalize_values(&mut self.points, start_neighbor, end_neighbor)
                    .is_collapsed(),
                None => {
                    bend.collapse(&mut self.points);
                    true
                }
            };
            bend.divide(&self.points);

            if collapsed {
                summary.collapsed += 1;
            } else {
                summary.resolved += 1;
            }
        }

        log::debug!(
            "Gelenke neu berechnet: {} aufgelöst, {} kollabiert",
            summary.resolved,
            summary.collapsed
        );
        summary
    }

    /// Leitet die deduplizierte Liste der ziehbaren Kontrollpunkte ab.
    ///
    /// 1. Punkte aller Nicht-Bogen-Strukturen, von Bögen nur die Ecke
    /// 2. Start/End jedes Bogens: bereits vorhanden → entfernen, sonst anhängen
    pub fn control_points(&self) -> Vec<PointId> {
        let mut control_points = Vec::new();
        let mut collected = HashSet::new();

        for structure in self.structures.values() {
            let candidates = match structure {
                Structure::Bend(bend) => vec![bend.corner],
                other => other.points(),
            };
            for point in candidates {
                if collected.insert(point) {
                    control_points.push(point);
                }
            }
        }

        let mut merged = HashSet::new();
        let mut appended = HashSet::new();
        for (_, bend) in self.bends() {
            for point in [bend.start, bend.end] {
                if collected.contains(&point) {
                    merged.insert(point);
                } else if appended.insert(point) {
                    control_points.push(point);
                }
            }
        }

        control_points.retain(|p| !merged.contains(p));
        control_points
    }
}

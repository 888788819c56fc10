//! Geteilte 3D-Punkte mit Identität.
//!
//! Strukturen halten nur `PointId`-Handles. Topologie-Vergleiche laufen über
//! die ID ("derselbe Vertex"), Koordinaten-Vergleiche über [`Point::coincides`].

use glam::DVec3;
use std::collections::HashMap;

/// Identitäts-Handle eines Punktes im [`PointStore`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PointId(pub u64);

/// Ein veränderbarer Punkt im Raum.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    /// Weltposition
    pub position: DVec3,
}

impl Point {
    /// Erstellt einen Punkt an der gegebenen Position.
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self {
            position: DVec3::new(x, y, z),
        }
    }

    /// Gibt die Koordinaten als Tupel zurück.
    pub fn coordinates(&self) -> (f64, f64, f64) {
        (self.position.x, self.position.y, self.position.z)
    }

    /// Setzt die Koordinaten in-place. Keine Validierung (NaN wird übernommen).
    pub fn set_coordinates(&mut self, x: f64, y: f64, z: f64) {
        self.position = DVec3::new(x, y, z);
    }

    /// Koordinaten-Gleichheit (nicht Identität).
    pub fn coincides(&self, other: &Point) -> bool {
        self.position == other.position
    }
}

impl From<DVec3> for Point {
    fn from(position: DVec3) -> Self {
        Self { position }
    }
}

/// Speicher aller Punkte einer Pipeline, indexiert nach ihrer ID.
#[derive(Debug, Clone, Default)]
pub struct PointStore {
    points: HashMap<PointId, Point>,
    next_id: u64,
}

impl PointStore {
    /// Erstellt einen leeren Store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Legt einen neuen Punkt an und gibt sein Handle zurück.
    pub fn insert(&mut self, position: DVec3) -> PointId {
        self.next_id += 1;
        let id = PointId(self.next_id);
        self.points.insert(id, Point::from(position));
        id
    }

    /// Handle, das der nächste `insert` vergibt.
    pub fn next_id(&self) -> PointId {
        PointId(self.next_id + 1)
    }

    /// Legt eine Kopie des Punktes als neuen, eigenständigen Vertex an.
    pub fn duplicate(&mut self, id: PointId) -> Option<PointId> {
        let position = self.position(id)?;
        Some(self.insert(position))
    }

    /// Read-only Zugriff auf einen Punkt.
    pub fn get(&self, id: PointId) -> Option<&Point> {
        self.points.get(&id)
    }

    /// Position eines Punktes.
    pub fn position(&self, id: PointId) -> Option<DVec3> {
        self.points.get(&id).map(|p| p.position)
    }

    /// Setzt die Position eines Punktes. Sichtbar für alle Halter des Handles.
    pub(crate) fn set_position(&mut self, id: PointId, position: DVec3) -> bool {
        let Some(point) = self.points.get_mut(&id) else {
            return false;
        };
        point.position = position;
        true
    }

    /// Prüft ob ein Handle im Store existiert.
    pub fn contains(&self, id: PointId) -> bool {
        self.points.contains_key(&id)
    }

    /// Koordinaten-Gleichheit zweier Punkte (fehlende Punkte sind nie gleich).
    pub fn coincide(&self, a: PointId, b: PointId) -> bool {
        match (self.get(a), self.get(b)) {
            (Some(pa), Some(pb)) => pa.coincides(pb),
            _ => false,
        }
    }

    /// Entfernt alle Punkte, für die `keep` false liefert. Gibt die Anzahl zurück.
    pub(crate) fn retain(&mut self, mut keep: impl FnMut(PointId) -> bool) -> usize {
        let before = self.points.len();
        self.points.retain(|id, _| keep(*id));
        before - self.points.len()
    }

    /// Anzahl der Punkte.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// `true` wenn keine Punkte vorhanden sind.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

//! Builder für Render-Szenen aus dem Editor-Zustand.

use crate::app::PipelineEditor;
use crate::core::{PointStore, Structure};
use crate::shared::{PipelineScene, StructureSnapshot};
use std::collections::HashSet;

/// Baut eine PipelineScene aus dem aktuellen Editor-Zustand.
pub fn build(editor: &PipelineEditor) -> PipelineScene {
    let pipeline = editor.pipeline();
    let staged: HashSet<_> = editor.staged_structures().iter().copied().collect();

    let structures = pipeline
        .structures()
        .map(|(id, structure)| StructureSnapshot {
            id,
            kind: structure.kind(),
            points: positions(pipeline.points(), structure),
            diameters: structure.diameters(),
            color: structure.color(),
            curvature: structure.as_bend().map(|bend| bend.curvature),
            center: structure
                .as_bend()
                .and_then(|bend| bend.center(pipeline.points())),
            normal: structure.as_flange().map(|flange| flange.normal),
            staged: staged.contains(&id),
        })
        .collect();

    PipelineScene {
        structures,
        control_points: editor.control_point_positions(),
        active_point: editor.active_position().ok(),
    }
}

fn positions(points: &PointStore, structure: &Structure) -> Vec<glam::DVec3> {
    structure
        .points()
        .into_iter()
        .filter_map(|id| points.position(id))
        .collect()
}

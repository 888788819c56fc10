//! Geteilte Typen für layer-übergreifende Verträge.
//!
//! Enthält Typen, die zwischen `app` und einem externen Renderer geteilt werden,
//! um direkte Abhängigkeiten zu vermeiden.

pub mod options;
mod render_scene;

pub use options::EditorOptions;
pub use options::{COMMITTED_COLOR, OPTIONS_FILE_NAME, STAGED_COLOR};
pub use render_scene::{PipelineScene, StructureSnapshot};

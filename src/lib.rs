//! Pipeline Route Editor Library.
//! Topologie-Modell und Bogen-Auflösung als Library exportiert für Tests und Wiederverwendung.

pub mod app;
pub mod core;
pub mod shared;

pub use app::{
    EditState, EditorConfig, EditorSession, OperationMode, PipelineEditor, SelectionMode,
    SessionCommand, SessionController, SessionIntent,
};
pub use core::{
    Bend, CornerResolution, Flange, JointUpdate, Pipe, Pipeline, Point, PointId, Structure,
    StructureId, StructureKind,
};
pub use shared::{EditorOptions, PipelineScene, StructureSnapshot};

//! Application-Layer: Editor, Sitzung, Controller und Events.

pub mod controller;
pub mod editor;
pub mod events;
mod intent_mapping;
pub mod render_scene;
/// Interaktions-Schicht über dem Editor
///
/// Hält Auswahl-/Bedienmodus und den Anker einer laufenden Delta-Geste.
pub mod session;

pub use controller::SessionController;
pub use editor::{EditState, PipelineEditor};
pub use events::{SessionCommand, SessionIntent};
pub use render_scene::build as build_render_scene;
pub use session::{EditorConfig, EditorSession, OperationMode, SelectionMode};

//! Session-Controller für zentrale Event-Verarbeitung.

use super::render_scene;
use super::{EditorSession, SessionCommand, SessionIntent};
use crate::shared::PipelineScene;

/// Orchestriert Viewport-Events und Editor-Operationen auf der Sitzung.
#[derive(Default)]
pub struct SessionController;

impl SessionController {
    /// Erstellt einen neuen Controller.
    pub fn new() -> Self {
        Self
    }

    /// Verarbeitet einen Intent über Intent->Command Mapping.
    pub fn handle_intent(
        &mut self,
        session: &mut EditorSession,
        intent: SessionIntent,
    ) -> anyhow::Result<()> {
        let commands = super::intent_mapping::map_intent_to_commands(session, intent);
        for command in commands {
            self.handle_command(session, command)?;
        }

        Ok(())
    }

    /// Führt mutierende Commands auf der Sitzung aus.
    pub fn handle_command(
        &mut self,
        session: &mut EditorSession,
        command: SessionCommand,
    ) -> anyhow::Result<()> {
        log::debug!("Command: {:?}", command);

        match command {
            // === Picking ===
            SessionCommand::PickControlPoint { index } => session.on_point_picked(index)?,
            SessionCommand::PickStructure { id } => session.on_structure_picked(id),

            // === Geste ===
            SessionCommand::StagePipeDeltas { deltas } => session.stage_pipe_deltas(deltas)?,
            SessionCommand::UnstageStructure => session.unstage_structure(),
            SessionCommand::CommitStructure => session.commit_structure()?,
            SessionCommand::AddFlange => session.add_flange()?,
            SessionCommand::UpdateDiameter { diameter } => session.update_diameter(diameter),

            // === Modi & Optionen ===
            SessionCommand::SetSelectionMode { mode } => session.set_selection_mode(mode),
            SessionCommand::SetOperationMode { mode } => session.set_operation_mode(mode),
            SessionCommand::ApplyOptions { options } => session.editor.set_options(options),
        }

        Ok(())
    }

    /// Baut die Render-Szene aus der aktuellen Sitzung.
    pub fn build_render_scene(&self, session: &EditorSession) -> PipelineScene {
        render_scene::build(&session.editor)
    }
}

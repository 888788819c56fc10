//! Mapping von Session-Intents auf mutierende Session-Commands.

use super::{EditorSession, OperationMode, SessionCommand, SessionIntent};
use glam::DVec3;

/// Übersetzt einen `SessionIntent` in eine Sequenz ausführbarer `SessionCommand`s.
pub fn map_intent_to_commands(
    session: &EditorSession,
    intent: SessionIntent,
) -> Vec<SessionCommand> {
    match intent {
        SessionIntent::ControlPointPicked { index } => {
            vec![SessionCommand::PickControlPoint { index }]
        }
        SessionIntent::StructurePicked { id } => vec![SessionCommand::PickStructure { id }],
        SessionIntent::PipeDeltasChanged { deltas } if deltas == DVec3::ZERO => {
            vec![SessionCommand::UnstageStructure]
        }
        SessionIntent::PipeDeltasChanged { deltas } => {
            vec![SessionCommand::StagePipeDeltas { deltas }]
        }
        SessionIntent::DiameterChanged { diameter } => {
            vec![SessionCommand::UpdateDiameter { diameter }]
        }
        SessionIntent::FlangeRequested => vec![SessionCommand::AddFlange],
        SessionIntent::CommitRequested => vec![SessionCommand::CommitStructure],
        SessionIntent::CancelRequested => vec![SessionCommand::UnstageStructure],
        SessionIntent::SelectionModeChanged { mode } => {
            vec![SessionCommand::SetSelectionMode { mode }]
        }
        // Verlassen des Erstellmodus verwirft eine offene Geste
        SessionIntent::OperationModeChanged { mode } => {
            let leaving_creation = session.config.operation_mode == OperationMode::Creation
                && mode != OperationMode::Creation;
            if leaving_creation && session.editor.is_staged() {
                vec![
                    SessionCommand::UnstageStructure,
                    SessionCommand::SetOperationMode { mode },
                ]
            } else {
                vec![SessionCommand::SetOperationMode { mode }]
            }
        }
        SessionIntent::OptionsChanged { options } => {
            vec![SessionCommand::ApplyOptions { options }]
        }
    }
}

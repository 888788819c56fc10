//! Pipeline Route Editor.
//!
//! Baut eine Beispiel-Rohrleitung über den Session-Controller auf und
//! protokolliert die resultierende Render-Szene.

use glam::DVec3;
use pipeline_route_editor::{
    EditorOptions, EditorSession, PipelineScene, SessionController, SessionIntent,
};

fn main() -> anyhow::Result<()> {
    AppRunner::run()
}

struct AppRunner;

impl AppRunner {
    fn run() -> anyhow::Result<()> {
        // Logger initialisieren
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Info)
            .init();

        log::info!(
            "Pipeline Route Editor v{} startet...",
            env!("CARGO_PKG_VERSION")
        );

        // Optionen aus TOML laden (oder Standardwerte)
        let config_path = EditorOptions::config_path();
        let options = EditorOptions::load_from_file(&config_path);

        let mut session = EditorSession::with_options(options);
        let mut controller = SessionController::new();

        for intent in Self::demo_route() {
            controller.handle_intent(&mut session, intent)?;
        }

        let scene = controller.build_render_scene(&session);
        Self::log_scene(&scene);
        log::info!(
            "{} Strukturen, {} Kontrollpunkte",
            scene.structures.len(),
            scene.control_points.len()
        );
        Ok(())
    }

    /// Vier Schenkel mit Bögen und einer Flanschverbindung im letzten Schenkel.
    fn demo_route() -> Vec<SessionIntent> {
        vec![
            SessionIntent::PipeDeltasChanged {
                deltas: DVec3::new(2.0, 0.0, 0.0),
            },
            SessionIntent::CommitRequested,
            SessionIntent::PipeDeltasChanged {
                deltas: DVec3::new(0.0, 1.5, 0.0),
            },
            SessionIntent::CommitRequested,
            SessionIntent::DiameterChanged { diameter: 0.15 },
            SessionIntent::PipeDeltasChanged {
                deltas: DVec3::new(0.0, 0.0, 1.0),
            },
            SessionIntent::CommitRequested,
            SessionIntent::FlangeRequested,
            SessionIntent::CommitRequested,
        ]
    }

    fn log_scene(scene: &PipelineScene) {
        for structure in &scene.structures {
            log::info!(
                "{:?} {:?}: {} Punkte, Durchmesser {:?}",
                structure.id,
                structure.kind,
                structure.points.len(),
                structure.diameters
            );
        }
        for (index, point) in scene.control_points.iter().enumerate() {
            log::info!(
                "Kontrollpunkt #{}: ({:.3}, {:.3}, {:.3})",
                index,
                point.x,
                point.y,
                point.z
            );
        }
    }
}

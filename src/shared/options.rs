//! Zentrale Konfiguration für den Pipeline-Editor.
//!
//! `EditorOptions` enthält alle zur Laufzeit änderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use crate::core::{Color, DEFAULT_CURVATURE_RADIUS, DEFAULT_DIAMETER};
use anyhow::Context;
use glam::DVec3;
use serde::{Deserialize, Serialize};

// ── Farben ──────────────────────────────────────────────────────────

/// Farbe noch nicht bestätigter Strukturen (RGB: Rot).
pub const STAGED_COLOR: Color = [255, 0, 0];
/// Farbe bestätigter Strukturen (RGB: Weiß).
pub const COMMITTED_COLOR: Color = [255, 255, 255];

// ── Laufzeit-Optionen (serialisierbar) ─────────────────────────────

/// Alle zur Laufzeit änderbaren Editor-Optionen.
/// Wird als `pipeline_route_editor.toml` neben der Binary gespeichert.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EditorOptions {
    // ── Strukturen ──────────────────────────────────────────────
    /// Durchmesser neuer Rohre, Bögen und Flansche
    pub default_diameter: f64,
    /// Krümmungsradius neuer Bögen
    pub default_curvature_radius: f64,
    /// Start-Versatz für `add_pipe` ohne expliziten Delta-Vektor
    #[serde(default)]
    pub initial_deltas: DVec3,

    // ── Farben ──────────────────────────────────────────────────
    /// Farbe gestagter Strukturen
    pub staged_color: Color,
    /// Farbe nach `commit`
    pub committed_color: Color,
}

impl Default for EditorOptions {
    fn default() -> Self {
        Self {
            default_diameter: DEFAULT_DIAMETER,
            default_curvature_radius: DEFAULT_CURVATURE_RADIUS,
            initial_deltas: DVec3::ZERO,

            staged_color: STAGED_COLOR,
            committed_color: COMMITTED_COLOR,
        }
    }
}

/// Dateiname der Editor-Optionen neben der Binary.
pub const OPTIONS_FILE_NAME: &str = "pipeline_route_editor.toml";

impl EditorOptions {
    /// Lädt Durchmesser, Krümmungsradius und Farben aus einer TOML-Datei.
    ///
    /// Fehlende oder fehlerhafte Dateien liefern Standardwerte; ungültige
    /// Maße werden einzeln auf ihren Standardwert zurückgesetzt.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) => {
                log::info!(
                    "Keine Editor-Optionen unter {} ({}), verwende Durchmesser {} / Radius {}",
                    path.display(),
                    e,
                    DEFAULT_DIAMETER,
                    DEFAULT_CURVATURE_RADIUS
                );
                return Self::default();
            }
        };

        match toml::from_str::<Self>(&content) {
            Ok(options) => {
                let options = options.validated();
                log::info!(
                    "Editor-Optionen geladen aus {}: Durchmesser {}, Krümmungsradius {}",
                    path.display(),
                    options.default_diameter,
                    options.default_curvature_radius
                );
                options
            }
            Err(e) => {
                log::warn!(
                    "Editor-Optionen in {} nicht lesbar, verwende Standard-Rohrmaße: {}",
                    path.display(),
                    e
                );
                Self::default()
            }
        }
    }

    /// Ersetzt nicht verwendbare Rohrmaße durch die Standardwerte.
    ///
    /// Der Durchmesser muss endlich und positiv sein, der Krümmungsradius
    /// endlich und nicht negativ.
    pub fn validated(mut self) -> Self {
        if !(self.default_diameter.is_finite() && self.default_diameter > 0.0) {
            log::warn!(
                "Ungültiger Standard-Durchmesser {}, verwende {}",
                self.default_diameter,
                DEFAULT_DIAMETER
            );
            self.default_diameter = DEFAULT_DIAMETER;
        }
        if !(self.default_curvature_radius.is_finite() && self.default_curvature_radius >= 0.0) {
            log::warn!(
                "Ungültiger Krümmungsradius {}, verwende {}",
                self.default_curvature_radius,
                DEFAULT_CURVATURE_RADIUS
            );
            self.default_curvature_radius = DEFAULT_CURVATURE_RADIUS;
        }
        if !self.initial_deltas.is_finite() {
            log::warn!("Ungültiger Start-Versatz {:?}, verwende (0, 0, 0)", self.initial_deltas);
            self.initial_deltas = DVec3::ZERO;
        }
        self
    }

    /// Speichert die Editor-Optionen als TOML-Datei.
    pub fn save_to_file(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)
            .context("Editor-Optionen nicht serialisierbar")?;
        std::fs::write(path, content)
            .with_context(|| format!("Editor-Optionen nach {} nicht schreibbar", path.display()))?;
        log::info!(
            "Editor-Optionen gespeichert nach {}: Durchmesser {}, Krümmungsradius {}",
            path.display(),
            self.default_diameter,
            self.default_curvature_radius
        );
        Ok(())
    }

    /// Pfad der Editor-Optionen neben der Binary, sonst im Arbeitsverzeichnis.
    pub fn config_path() -> std::path::PathBuf {
        let dir = std::env::current_exe()
            .ok()
            .and_then(|exe| exe.parent().map(std::path::Path::to_path_buf))
            .unwrap_or_else(|| std::path::PathBuf::from("."));
        dir.join(OPTIONS_FILE_NAME)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toml_roundtrip_preserves_values() {
        let options = EditorOptions {
            default_diameter: 0.25,
            default_curvature_radius: 0.5,
            initial_deltas: DVec3::new(1.0, 0.0, 0.0),
            ..EditorOptions::default()
        };

        let text = toml::to_string_pretty(&options).expect("serialisierbar");
        let parsed: EditorOptions = toml::from_str(&text).expect("parsebar");
        assert_eq!(parsed, options);
    }

    #[test]
    fn missing_optional_fields_fall_back_to_defaults() {
        let text = r#"
            default_diameter = 0.2
            default_curvature_radius = 0.4
            staged_color = [255, 0, 0]
            committed_color = [255, 255, 255]
        "#;
        let parsed: EditorOptions = toml::from_str(text).expect("parsebar");

        assert_eq!(parsed.initial_deltas, DVec3::ZERO);
        assert_eq!(parsed.staged_color, STAGED_COLOR);
    }

    #[test]
    fn save_then_load_returns_saved_options() {
        let path = std::env::temp_dir().join(format!(
            "pipeline_route_editor_options_{}.toml",
            std::process::id()
        ));
        let options = EditorOptions {
            default_diameter: 0.3,
            committed_color: [1, 2, 3],
            ..EditorOptions::default()
        };

        options.save_to_file(&path).expect("speicherbar");
        let loaded = EditorOptions::load_from_file(&path);
        let _ = std::fs::remove_file(&path);

        assert_eq!(loaded, options);
    }

    #[test]
    fn load_from_missing_file_returns_defaults() {
        let path = std::path::Path::new("/nonexistent/pipeline_route_editor.toml");
        assert_eq!(EditorOptions::load_from_file(path), EditorOptions::default());
    }

    #[test]
    fn load_resets_unusable_dimensions_to_defaults() {
        let path = std::env::temp_dir().join(format!(
            "pipeline_route_editor_invalid_{}.toml",
            std::process::id()
        ));
        let text = r#"
            default_diameter = -0.5
            default_curvature_radius = 0.4
            staged_color = [255, 0, 0]
            committed_color = [255, 255, 255]
        "#;
        std::fs::write(&path, text).expect("schreibbar");
        let loaded = EditorOptions::load_from_file(&path);
        let _ = std::fs::remove_file(&path);

        assert_eq!(loaded.default_diameter, DEFAULT_DIAMETER);
        assert_eq!(loaded.default_curvature_radius, 0.4);
    }

    #[test]
    fn validated_keeps_zero_radius_and_rejects_nan() {
        let options = EditorOptions {
            default_diameter: f64::NAN,
            default_curvature_radius: 0.0,
            ..EditorOptions::default()
        }
        .validated();

        assert_eq!(options.default_diameter, DEFAULT_DIAMETER);
        assert_eq!(options.default_curvature_radius, 0.0);
    }

    #[test]
    fn config_path_ends_with_options_file_name() {
        assert!(EditorOptions::config_path().ends_with(OPTIONS_FILE_NAME));
    }
}

//! Zentrale Konfiguration für den Bezier Handle Editor.
//!
//! `EditorOptions` enthält alle zur Laufzeit änderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use serde::{Deserialize, Serialize};

// ── Selektion ───────────────────────────────────────────────────────

/// Pick-Radius in Pixeln (strikt: Abstand muss kleiner sein).
pub const PICK_RADIUS: f32 = 6.0;

// ── Kurven-Rasterung ────────────────────────────────────────────────

/// Relative Toleranz des Geradheitstests (Kontrollpolygon vs. Sehne).
pub const STRAIGHTNESS_TOLERANCE: f32 = 0.001;
/// Maximale Teilungstiefe der adaptiven Rasterung.
pub const MAX_FLATTEN_DEPTH: u32 = 24;

// ── Darstellung ─────────────────────────────────────────────────────

/// Halbgröße der Marker für Anker und Griffe.
pub const MARKER_RADIUS: f32 = 3.0;
/// Halbgröße der Linien-Pixel (0 = 1×1).
pub const LINE_RADIUS: f32 = 0.0;
/// Zeichenfarbe (RGBA: Schwarz).
pub const POINT_COLOR: [f32; 4] = [0.0, 0.0, 0.0, 1.0];
/// Hintergrundfarbe (RGBA: Weiß).
pub const BACKGROUND_COLOR: [f32; 4] = [1.0, 1.0, 1.0, 1.0];

// ── Laufzeit-Optionen (serialisierbar) ─────────────────────────────

/// Alle zur Laufzeit änderbaren Editor-Optionen.
/// Wird als `bezier_handle_editor.toml` neben der Binary gelesen.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EditorOptions {
    // ── Selektion ───────────────────────────────────────────────
    /// Pick-Radius für Anker und Griffe in Pixeln
    #[serde(default = "default_pick_radius")]
    pub pick_radius: f32,

    // ── Kurven-Rasterung ────────────────────────────────────────
    /// Relative Toleranz des Geradheitstests
    #[serde(default = "default_straightness_tolerance")]
    pub straightness_tolerance: f32,
    /// Maximale Rekursionstiefe der Teilung
    #[serde(default = "default_max_flatten_depth")]
    pub max_flatten_depth: u32,

    // ── Darstellung ─────────────────────────────────────────────
    /// Halbgröße der Punkt-Marker
    #[serde(default = "default_marker_radius")]
    pub marker_radius: f32,
    /// Halbgröße der Linien-Pixel
    #[serde(default)]
    pub line_radius: f32,
    /// Zeichenfarbe für Marker und Linien (RGBA)
    #[serde(default = "default_point_color")]
    pub point_color: [f32; 4],
    /// Hintergrundfarbe (RGBA)
    #[serde(default = "default_background_color")]
    pub background_color: [f32; 4],
}

impl Default for EditorOptions {
    fn default() -> Self {
        Self {
            pick_radius: PICK_RADIUS,
            straightness_tolerance: STRAIGHTNESS_TOLERANCE,
            max_flatten_depth: MAX_FLATTEN_DEPTH,
            marker_radius: MARKER_RADIUS,
            line_radius: LINE_RADIUS,
            point_color: POINT_COLOR,
            background_color: BACKGROUND_COLOR,
        }
    }
}

fn default_pick_radius() -> f32 {
    PICK_RADIUS
}

fn default_straightness_tolerance() -> f32 {
    STRAIGHTNESS_TOLERANCE
}

fn default_max_flatten_depth() -> u32 {
    MAX_FLATTEN_DEPTH
}

fn default_marker_radius() -> f32 {
    MARKER_RADIUS
}

fn default_point_color() -> [f32; 4] {
    POINT_COLOR
}

fn default_background_color() -> [f32; 4] {
    BACKGROUND_COLOR
}

impl EditorOptions {
    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(opts) => {
                    log::info!("Optionen geladen aus: {}", path.display());
                    opts
                }
                Err(e) => {
                    log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Speichert Optionen als TOML-Datei.
    pub fn save_to_file(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        log::info!("Optionen gespeichert nach: {}", path.display());
        Ok(())
    }

    /// Ermittelt den Pfad zur Optionen-Datei neben der Binary.
    pub fn config_path() -> std::path::PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| std::path::PathBuf::from("bezier_handle_editor"))
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join("bezier_handle_editor.toml")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_path(name: &str) -> std::path::PathBuf {
        std::env::temp_dir().join(format!(
            "bezier_handle_editor_{}_{}.toml",
            name,
            std::process::id()
        ))
    }

    #[test]
    fn test_defaults_match_constants() {
        let opts = EditorOptions::default();
        assert_eq!(opts.pick_radius, 6.0);
        assert_eq!(opts.straightness_tolerance, 0.001);
        assert_eq!(opts.max_flatten_depth, 24);
        assert_eq!(opts.marker_radius, 3.0);
        assert_eq!(opts.line_radius, 0.0);
    }

    #[test]
    fn test_save_and_load_roundtrip() {
        let path = temp_path("roundtrip");
        let opts = EditorOptions {
            pick_radius: 9.5,
            max_flatten_depth: 12,
            ..EditorOptions::default()
        };
        opts.save_to_file(&path).expect("Speichern muss gelingen");
        let loaded = EditorOptions::load_from_file(&path);
        let _ = std::fs::remove_file(&path);
        assert_eq!(loaded, opts);
    }

    #[test]
    fn test_missing_file_yields_defaults() {
        let loaded = EditorOptions::load_from_file(&temp_path("does_not_exist"));
        assert_eq!(loaded, EditorOptions::default());
    }

    #[test]
    fn test_malformed_file_yields_defaults() {
        let path = temp_path("malformed");
        std::fs::write(&path, "pick_radius = \"groß\"").expect("Schreiben muss gelingen");
        let loaded = EditorOptions::load_from_file(&path);
        let _ = std::fs::remove_file(&path);
        assert_eq!(loaded, EditorOptions::default());
    }

    #[test]
    fn test_partial_file_fills_missing_fields() {
        let opts: EditorOptions =
            toml::from_str("pick_radius = 10.0\n").expect("Teil-TOML muss parsen");
        assert_eq!(opts.pick_radius, 10.0);
        assert_eq!(opts.max_flatten_depth, MAX_FLATTEN_DEPTH);
        assert_eq!(opts.background_color, BACKGROUND_COLOR);
    }
}

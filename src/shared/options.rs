//! Zentrale Konfiguration für den PathShape-Editor.
//!
//! `EditorOptions` enthält alle zur Laufzeit änderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use anyhow::Context;
use glam::Vec2;
use serde::{Deserialize, Serialize};

// ── Tessellierung ───────────────────────────────────────────────────

/// Samples pro Bézier-Bogen für neu angelegte Segmente.
pub const SEGMENTS_PER_CURVE: usize = 12;

// ── Hit-Radien ──────────────────────────────────────────────────────

/// Radius für Treffer auf Ankerpunkte.
pub const POINT_HIT_RADIUS: f32 = 5.0;
/// Radius für Treffer auf Handles.
pub const HANDLE_HIT_RADIUS: f32 = 6.5;
/// Radius für Treffer auf den abgeflachten Umriss.
pub const PATH_HIT_RADIUS: f32 = 3.0;
/// Radius für Treffer auf offene Endpunkte (Weiterzeichnen, Schließen).
pub const END_POINT_HIT_RADIUS: f32 = 5.5;

// ── Handles ─────────────────────────────────────────────────────────

/// Abstand, um den `OneHandle`/`Handles` die Handles herausziehen.
pub const HANDLE_OFFSET: f32 = 30.0;

// ── Objekte ─────────────────────────────────────────────────────────

/// Zusätzlicher Rand um die Bounding-Box für "über Objekt".
pub const BOUNDING_BOX_BUFFER: f32 = 5.0;
/// Radius für Treffer auf die acht Skalier-Griffe.
pub const BOUNDING_BOX_HANDLE_RADIUS: f32 = 5.0;
/// Verschiebung duplizierter Formen.
pub const DUPLICATE_OFFSET: [f32; 2] = [10.0, -10.0];

// ── Laufzeit-Optionen (serialisierbar) ─────────────────────────────

/// Alle zur Laufzeit änderbaren Editor-Optionen.
/// Wird als `path_shape_editor.toml` neben der Binary gespeichert.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EditorOptions {
    // ── Tessellierung ───────────────────────────────────────────
    /// Samples pro Bogen für neue Segmente
    pub segments_per_curve: usize,
    // ── Hit-Radien ──────────────────────────────────────────────
    /// Treffer-Radius Ankerpunkte
    pub point_hit_radius: f32,
    /// Treffer-Radius Handles
    pub handle_hit_radius: f32,
    /// Treffer-Radius Umriss
    pub path_hit_radius: f32,
    /// Treffer-Radius offene Endpunkte
    #[serde(default = "default_end_point_hit_radius")]
    pub end_point_hit_radius: f32,
    // ── Handles ─────────────────────────────────────────────────
    /// Handle-Abstand für OneHandle/Handles
    pub handle_offset: f32,
    // ── Objekte ─────────────────────────────────────────────────
    /// Rand um die Bounding-Box
    #[serde(default = "default_bounding_box_buffer")]
    pub bounding_box_buffer: f32,
    /// Treffer-Radius Skalier-Griffe
    #[serde(default = "default_bounding_box_handle_radius")]
    pub bounding_box_handle_radius: f32,
    /// Versatz beim Duplizieren
    #[serde(default = "default_duplicate_offset")]
    pub duplicate_offset: [f32; 2],
    // ── Editierbereich ──────────────────────────────────────────
    /// Editierbares Rechteck [min, max]; `None` = unbegrenzt
    #[serde(default)]
    pub editor_area: Option<[[f32; 2]; 2]>,
}

impl Default for EditorOptions {
    fn default() -> Self {
        Self {
            segments_per_curve: SEGMENTS_PER_CURVE,
            point_hit_radius: POINT_HIT_RADIUS,
            handle_hit_radius: HANDLE_HIT_RADIUS,
            path_hit_radius: PATH_HIT_RADIUS,
            end_point_hit_radius: END_POINT_HIT_RADIUS,
            handle_offset: HANDLE_OFFSET,
            bounding_box_buffer: BOUNDING_BOX_BUFFER,
            bounding_box_handle_radius: BOUNDING_BOX_HANDLE_RADIUS,
            duplicate_offset: DUPLICATE_OFFSET,
            editor_area: None,
        }
    }
}

/// Serde-Default für `end_point_hit_radius` (Abwärtskompatibilität bestehender TOML-Dateien).
fn default_end_point_hit_radius() -> f32 {
    END_POINT_HIT_RADIUS
}

fn default_bounding_box_buffer() -> f32 {
    BOUNDING_BOX_BUFFER
}

fn default_bounding_box_handle_radius() -> f32 {
    BOUNDING_BOX_HANDLE_RADIUS
}

fn default_duplicate_offset() -> [f32; 2] {
    DUPLICATE_OFFSET
}

impl EditorOptions {
    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str::<Self>(&content) {
                Ok(opts) => match opts.validate() {
                    Ok(()) => {
                        log::info!("Optionen geladen aus: {}", path.display());
                        opts
                    }
                    Err(e) => {
                        log::warn!("Optionen ungültig, verwende Standardwerte: {}", e);
                        Self::default()
                    }
                },
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
        let content = toml::to_string_pretty(self).context("Optionen nicht serialisierbar")?;
        std::fs::write(path, content)
            .with_context(|| format!("Optionen nicht schreibbar: {}", path.display()))?;
        log::info!("Optionen gespeichert nach: {}", path.display());
        Ok(())
    }

    /// Ermittelt den Pfad zur Optionen-Datei neben der Binary.
    pub fn config_path() -> std::path::PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| std::path::PathBuf::from("path_shape_editor"))
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join("path_shape_editor.toml")
    }

    /// Prüft Wertebereiche (Auflösung ≥ 1, Radien und Abstände endlich und positiv).
    pub fn validate(&self) -> anyhow::Result<()> {
        anyhow::ensure!(
            self.segments_per_curve >= 1,
            "segments_per_curve muss mindestens 1 sein"
        );
        let positive = [
            ("point_hit_radius", self.point_hit_radius),
            ("handle_hit_radius", self.handle_hit_radius),
            ("path_hit_radius", self.path_hit_radius),
            ("end_point_hit_radius", self.end_point_hit_radius),
            ("handle_offset", self.handle_offset),
            ("bounding_box_buffer", self.bounding_box_buffer),
            ("bounding_box_handle_radius", self.bounding_box_handle_radius),
        ];
        for (name, value) in positive {
            anyhow::ensure!(
                value.is_finite() && value > 0.0,
                "{name} muss endlich und größer 0 sein (ist {value})"
            );
        }
        anyhow::ensure!(
            self.duplicate_offset.iter().all(|v| v.is_finite()),
            "duplicate_offset muss endlich sein"
        );
        Ok(())
    }

    /// Versatz beim Duplizieren als Vektor.
    pub fn duplicate_offset(&self) -> Vec2 {
        Vec2::from(self.duplicate_offset)
    }

    /// Liegt `pos` im editierbaren Bereich?
    pub fn in_editor_area(&self, pos: Vec2) -> bool {
        match self.editor_area {
            None => true,
            Some([min, max]) => {
                let (min, max) = (Vec2::from(min), Vec2::from(max));
                pos.cmpge(min.min(max)).all() && pos.cmple(max.max(min)).all()
            }
        }
    }
}

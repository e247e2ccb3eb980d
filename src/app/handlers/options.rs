//! Handler für Laufzeit-Optionen.

use crate::app::AppState;
use crate::shared::EditorOptions;
use anyhow::Context;
use std::path::Path;

/// Übernimmt neue Optionen nach erfolgreicher Prüfung.
pub fn apply(state: &mut AppState, options: EditorOptions) -> anyhow::Result<()> {
    options
        .validate()
        .context("Optionen wurden nicht übernommen")?;
    state.options = options;
    log::info!("Optionen übernommen");
    Ok(())
}

/// Setzt alle Optionen auf Standardwerte zurück.
pub fn reset(state: &mut AppState) {
    state.options = EditorOptions::default();
    log::info!("Optionen auf Standard zurückgesetzt");
}

/// Speichert die aktuellen Optionen.
pub fn save(state: &AppState, path: &Path) -> anyhow::Result<()> {
    state.options.save_to_file(path)
}

//! Use-Case-Funktionen für Selektions-Modi und Gummiband.

use crate::app::selection_modes::PanelEnablement;
use crate::app::state::RubberBand;
use crate::app::AppState;
use crate::shared::{ObjectSelectionMode, PointSelectionMode, SelectionModes};
use glam::Vec2;

/// Setzt die Modi und benachrichtigt das Panel bei einer Änderung.
pub fn set_modes(state: &mut AppState, modes: SelectionModes) {
    if state.selection.modes == modes {
        return;
    }
    state.selection.modes = modes;
    log::debug!("Selektions-Modi: {:?}", modes);

    if let Some(panel) = state.panel.as_mut() {
        panel.notify_selection_mode(modes);
        panel.notify_colorable(PanelEnablement::for_modes(modes).colorable);
    }
}

/// Setzt nur den Punkt-Modus.
pub fn set_point_mode(state: &mut AppState, point: PointSelectionMode) {
    let modes = SelectionModes {
        point,
        ..state.selection.modes
    };
    set_modes(state, modes);
}

/// Setzt nur den Objekt-Modus.
pub fn set_object_mode(state: &mut AppState, object: ObjectSelectionMode) {
    let modes = SelectionModes {
        object,
        ..state.selection.modes
    };
    set_modes(state, modes);
}

/// Hebt jede Selektion auf und gibt die Zeichensperre frei.
pub fn deselect_all(state: &mut AppState) {
    state.drawing.unselect_all();
    state.editor.drawing_lock = None;
    state.editor.rubber_band = None;
    state.editor.interaction = None;
    set_modes(state, SelectionModes::default());
    log::debug!("Selektion aufgehoben");
}

/// Startet ein Gummiband an `pos`.
pub fn start_rubber_band(state: &mut AppState, pos: Vec2) {
    state.editor.rubber_band = Some(RubberBand {
        start: pos,
        end: pos,
    });
}

/// Zieht das Gummiband auf `pos`.
pub fn update_rubber_band(state: &mut AppState, pos: Vec2) {
    if let Some(band) = state.editor.rubber_band.as_mut() {
        band.end = pos;
    }
}

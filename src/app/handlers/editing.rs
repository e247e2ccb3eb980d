//! Handler für Kontextwechsel, Handle-Stile, Löschen und Duplizieren.

use crate::app::editmodes::EditContext;
use crate::app::use_cases::{object_editing, point_editing, selection};
use crate::app::AppState;
use crate::core::{HandleSide, ShapeStyle};

/// Wechselt den Editier-Kontext; Selektion und Zeichensperre werden aufgehoben.
pub fn set_edit_context(state: &mut AppState, context: EditContext) {
    state.hover.clear(&mut state.drawing);
    selection::deselect_all(state);
    state.editor.active = None;
    state.editor.context = context;
    log::info!("Editier-Kontext: {:?}", context);
}

/// Rechte Taste: alles abwählen.
pub fn deselect_all(state: &mut AppState) {
    selection::deselect_all(state);
}

pub fn set_conjunct(state: &mut AppState, conjunct: bool) {
    point_editing::set_conjunct(state, conjunct);
}

pub fn one_handle(state: &mut AppState, side: HandleSide) {
    point_editing::one_handle(state, side);
}

pub fn no_handles(state: &mut AppState) {
    point_editing::no_handles(state);
}

pub fn handles(state: &mut AppState) {
    point_editing::handles(state);
}

/// Löscht alle selektierten Ankerpunkte.
pub fn delete_selected_points(state: &mut AppState) {
    point_editing::delete_selected_points(state);
}

/// Löscht alle selektierten Formen.
pub fn delete_selected_objects(state: &mut AppState) {
    object_editing::delete_selected(state);
}

/// Dupliziert alle selektierten Formen.
pub fn duplicate_selected(state: &mut AppState) {
    object_editing::duplicate_selected(state);
}

/// Setzt Farben und Konturbreite der selektierten Formen.
pub fn set_colors(state: &mut AppState, style: ShapeStyle) -> anyhow::Result<()> {
    anyhow::ensure!(
        style.is_valid(),
        "Ungültige Farbwerte oder Konturbreite: {:?}",
        style
    );
    object_editing::set_style(state, style);
    Ok(())
}

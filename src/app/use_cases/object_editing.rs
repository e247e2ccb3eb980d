//! Use-Case: ganze Formen selektieren, verschieben, skalieren, duplizieren, einfärben.

use crate::app::selection_modes::object_mode_for_count;
use crate::app::state::{Interaction, RubberBand};
use crate::app::AppState;
use crate::core::ShapeStyle;
use crate::shared::{HoverTarget, ObjectSelectionMode};
use glam::Vec2;

use super::path_drawing::remove_object;
use super::selection::set_object_mode;

/// Beginnt die Skalierung über den getroffenen Box-Griff.
pub fn start_scale(state: &mut AppState, interaction: &Interaction) {
    let Some(HoverTarget::BoundingBoxHandle { object, handle }) = interaction.target else {
        return;
    };
    if let Some(obj) = state.drawing.get_mut(object) {
        obj.start_scale(handle);
        log::debug!("Skalierung von {:?} über {:?}", object, handle);
    }
}

/// Skaliert die Form der Interaktion um das Zeiger-Delta.
pub fn scale(state: &mut AppState, interaction: &Interaction, delta: Vec2) {
    let Some(target) = interaction.target else {
        return;
    };
    if let Some(obj) = state.drawing.get_mut(target.object()) {
        obj.scale(delta);
    }
}

/// Beendet die Skalierung.
pub fn end_scale(state: &mut AppState, interaction: &Interaction) {
    let Some(target) = interaction.target else {
        return;
    };
    if let Some(obj) = state.drawing.get_mut(target.object()) {
        obj.end_scale();
    }
}

/// Selektiert die getroffene Form; eine bestehende Mehrfachselektion bleibt erhalten.
pub fn select_object(state: &mut AppState, interaction: &Interaction) {
    let Some(target) = interaction.target else {
        return;
    };
    let object = target.object();
    let already = state.drawing.get(object).is_some_and(|o| o.selected);

    if !already {
        state.drawing.unselect_all();
        if let Some(obj) = state.drawing.get_mut(object) {
            obj.selected = true;
        }
    }
    state.editor.current_object = Some(object);
    let count = state.drawing.selected_ids().len();
    set_object_mode(state, object_mode_for_count(count));
}

/// Verschiebt alle selektierten Formen.
pub fn move_selected(state: &mut AppState, delta: Vec2) {
    if delta == Vec2::ZERO {
        return;
    }
    for obj in state.drawing.iter_mut().filter(|o| o.selected) {
        obj.translate(delta);
    }
}

/// Selektiert alle Formen, deren Bounding-Box das Gummiband überlappt.
pub fn select_objects_in_band(state: &mut AppState, band: RubberBand) {
    state.drawing.unselect_all();
    let hits = state.drawing.objects_in_rect(band.start, band.end);
    for &id in &hits {
        if let Some(obj) = state.drawing.get_mut(id) {
            obj.selected = true;
        }
    }
    state.editor.current_object = hits.last().copied();
    set_object_mode(state, object_mode_for_count(hits.len()));
}

/// Löscht alle selektierten Formen.
pub fn delete_selected(state: &mut AppState) {
    let selected = state.drawing.selected_ids();
    if selected.is_empty() {
        log::debug!("Löschen ohne selektierte Formen ignoriert");
        return;
    }
    state.hover.clear(&mut state.drawing);
    for &id in &selected {
        remove_object(state, id);
    }
    set_object_mode(state, ObjectSelectionMode::NoObject);
}

/// Dupliziert alle selektierten Formen; die Kopien werden zur neuen Selektion.
pub fn duplicate_selected(state: &mut AppState) {
    let selected = state.drawing.selected_ids();
    if selected.is_empty() {
        return;
    }
    let offset = state.options.duplicate_offset();
    let copies: Vec<_> = selected
        .iter()
        .filter_map(|&id| state.drawing.duplicate(id, offset))
        .collect();

    state.drawing.unselect_all();
    for &id in &copies {
        if let Some(obj) = state.drawing.get_mut(id) {
            obj.selected = true;
        }
    }
    state.editor.current_object = copies.last().copied();
    set_object_mode(state, object_mode_for_count(copies.len()));
    log::info!("{} Formen dupliziert", copies.len());
}

/// Übernimmt Farben und Konturbreite für alle selektierten Formen.
pub fn set_style(state: &mut AppState, style: ShapeStyle) {
    let mut count = 0;
    for object in state.drawing.iter_mut().filter(|o| o.selected) {
        object.style = style;
        count += 1;
    }
    log::info!("Stil von {} Formen geändert", count);
}

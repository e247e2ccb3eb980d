//! Use-Case: Ankerpunkte und Handles bearbeiten (Handle/Punkt-Kontext).

use crate::app::selection_modes::point_mode_for_count;
use crate::app::state::{selected_points, Interaction, RubberBand};
use crate::app::AppState;
use crate::core::{HandleSide, PathCurve, SegmentId};
use crate::shared::{HoverTarget, PointSelectionMode};
use glam::Vec2;
use indexmap::IndexMap;

use super::path_drawing::remove_object;
use super::selection::set_point_mode;

/// Greift einen Handle: Sein Segment wird alleiniger selektierter Punkt.
pub fn grab_handle(state: &mut AppState, interaction: &Interaction) {
    let Some(HoverTarget::Handle { object, segment, .. }) = interaction.target else {
        return;
    };
    unselect_all_points(state);
    if let Some(seg) = state
        .drawing
        .get_mut(object)
        .and_then(|o| o.curve_flags_mut().segment_mut(segment))
    {
        seg.point_selected = true;
    }
    set_point_mode(state, PointSelectionMode::Handle);
}

/// Setzt den gegriffenen Handle auf `pos` (Spiegelung nach Conjunct-Regel).
pub fn move_handle(state: &mut AppState, interaction: &Interaction, pos: Vec2) {
    let Some(HoverTarget::Handle {
        object,
        segment,
        side,
    }) = interaction.target
    else {
        return;
    };
    if let Some(obj) = state.drawing.get_mut(object) {
        obj.edit(|curve| curve.move_handle(segment, pos, side, false));
    }
}

/// Einzelklick auf einen Punkt.
///
/// Ein bereits selektierter Punkt behält die Mehrfachselektion (zum
/// gemeinsamen Verschieben), sonst wird nur dieser Punkt selektiert.
pub fn select_point(state: &mut AppState, interaction: &Interaction) {
    let Some(HoverTarget::Point { object, segment }) = interaction.target else {
        return;
    };
    let already = state
        .drawing
        .get(object)
        .and_then(|o| o.curve().segment(segment))
        .is_some_and(|seg| seg.point_selected);

    if already {
        let count = selected_points(&state.drawing).len();
        set_point_mode(state, point_mode_for_count(count));
        return;
    }

    unselect_all_points(state);
    if let Some(seg) = state
        .drawing
        .get_mut(object)
        .and_then(|o| o.curve_flags_mut().segment_mut(segment))
    {
        seg.point_selected = true;
    }
    set_point_mode(state, PointSelectionMode::Point);
}

/// Verschiebt alle selektierten Punkte samt Handles.
pub fn move_selected_points(state: &mut AppState, delta: Vec2) {
    if delta == Vec2::ZERO {
        return;
    }
    edit_selected(state, |curve, segment| curve.move_points(segment, delta));
}

/// Selektiert alle Anker im Gummiband-Rechteck.
pub fn select_points_in_band(state: &mut AppState, band: RubberBand) {
    unselect_all_points(state);
    let mut count = 0;
    for object in state.drawing.ids() {
        for segment in state.drawing.points_in_rect(object, band.start, band.end) {
            if let Some(seg) = state
                .drawing
                .get_mut(object)
                .and_then(|o| o.curve_flags_mut().segment_mut(segment))
            {
                seg.point_selected = true;
                count += 1;
            }
        }
    }
    set_point_mode(state, point_mode_for_count(count));
}

// ── Handle-Stile ────────────────────────────────────────────────────

/// Schaltet die Handle-Spiegelung aller selektierten Punkte.
pub fn set_conjunct(state: &mut AppState, conjunct: bool) {
    let count = edit_selected(state, |curve, segment| curve.set_conjunct(segment, conjunct));
    log::debug!("Conjunct={} für {} Punkte", conjunct, count);
}

/// Behält nur den Handle `side`.
pub fn one_handle(state: &mut AppState, side: HandleSide) {
    let offset = state.options.handle_offset;
    edit_selected(state, |curve, segment| curve.one_handle(segment, side, offset));
}

/// Klappt beide Handles ein.
pub fn no_handles(state: &mut AppState) {
    edit_selected(state, |curve, segment| curve.no_handles(segment));
}

/// Zieht beide Handles entlang der Tangente heraus.
pub fn handles(state: &mut AppState) {
    let offset = state.options.handle_offset;
    edit_selected(state, |curve, segment| curve.handles(segment, offset));
}

/// Löscht alle selektierten Punkte; leere Formen werden entfernt.
pub fn delete_selected_points(state: &mut AppState) {
    let selected = selected_points(&state.drawing);
    if selected.is_empty() {
        log::debug!("Löschen ohne selektierte Punkte ignoriert");
        return;
    }
    state.hover.clear(&mut state.drawing);

    let mut by_object: IndexMap<_, Vec<SegmentId>> = IndexMap::new();
    for (object, segment) in selected.iter().copied() {
        by_object.entry(object).or_default().push(segment);
    }

    for (object, segments) in by_object {
        let Some(obj) = state.drawing.get_mut(object) else {
            continue;
        };
        obj.edit(|curve| {
            for segment in segments {
                if let Some(index) = curve.index_of(segment) {
                    curve.delete_at(index);
                }
            }
        });
        if obj.curve().is_empty() {
            remove_object(state, object);
        }
    }
    set_point_mode(state, PointSelectionMode::NoSelection);
    log::info!("{} Punkte gelöscht", selected.len());
}

/// Hebt nur die Punktselektion auf (Objektselektion bleibt).
fn unselect_all_points(state: &mut AppState) {
    for object in state.drawing.iter_mut() {
        object.curve_flags_mut().unselect_all_points();
    }
}

/// Wendet `f` auf jeden selektierten Punkt an; gibt die Anzahl zurück.
fn edit_selected(state: &mut AppState, mut f: impl FnMut(&mut PathCurve, SegmentId)) -> usize {
    let selected = selected_points(&state.drawing);
    for &(object, segment) in &selected {
        if let Some(obj) = state.drawing.get_mut(object) {
            obj.edit(|curve| f(curve, segment));
        }
    }
    selected.len()
}

//! Handler für Zeiger-Events: Polling, Press, Drag, Release.
//!
//! Die Aktion der beim Drücken aktiven Bindung bestimmt, welcher Use-Case
//! für Press, Drag und Release läuft. Während einer Interaktion wird nicht
//! neu gepollt.

use crate::app::editmodes::{EditAction, Poll};
use crate::app::state::Interaction;
use crate::app::use_cases::{object_editing, path_drawing, point_editing, selection};
use crate::app::AppState;
use glam::Vec2;

/// Wählt die Bindung für `pos` und setzt das Hover-Token.
pub fn update_hover(state: &mut AppState, pos: Vec2) {
    if state.editor.is_dragging() {
        return;
    }
    let matched = Poll {
        drawing: &state.drawing,
        options: &state.options,
        context: state.editor.context,
        modes: state.selection.modes,
        drawing_lock: state.editor.drawing_lock,
    }
    .select_binding(pos);

    state.editor.active = Some(matched);
    if let Some(change) = state.hover.set(&mut state.drawing, matched.target) {
        log::debug!(
            "Hover {:?} → {:?} ({:?})",
            change.previous,
            change.current,
            matched.action
        );
    }
}

/// Press: startet die Interaktion der aktiven Bindung.
pub fn begin_interaction(state: &mut AppState, pos: Vec2) {
    let (action, target) = match state.editor.active {
        Some(active) => (active.action, active.target),
        None => (state.editor.context.free_space_action(), None),
    };
    let mut interaction = Interaction {
        action,
        target,
        last_pos: pos,
    };

    match action {
        EditAction::DrawPoint => path_drawing::draw_point(state, &mut interaction, pos),
        EditAction::SelectEndPoint => path_drawing::select_end_point(state, &interaction),
        EditAction::ClosePath => path_drawing::close_path(state, &interaction),
        EditAction::InsertPoint => path_drawing::insert_point(state, &mut interaction),
        EditAction::DeletePoint => path_drawing::delete_point(state, &mut interaction),
        EditAction::MoveHandle => point_editing::grab_handle(state, &interaction),
        EditAction::SelectMovePoints => point_editing::select_point(state, &interaction),
        EditAction::RubberBandPoints | EditAction::RubberBandObjects => {
            selection::start_rubber_band(state, pos)
        }
        EditAction::ScaleObject => object_editing::start_scale(state, &interaction),
        EditAction::SelectMoveObject => object_editing::select_object(state, &interaction),
        EditAction::MoveSelection => {}
    }

    state.editor.interaction = Some(interaction);
}

/// Drag: führt die laufende Interaktion bis `pos` fort.
pub fn drag_interaction(state: &mut AppState, pos: Vec2) {
    let Some(mut interaction) = state.editor.interaction.take() else {
        return;
    };
    drag_step(state, &mut interaction, pos);
    state.editor.interaction = Some(interaction);
}

/// Release: schließt die laufende Interaktion ab.
pub fn end_interaction(state: &mut AppState, pos: Vec2) {
    let Some(mut interaction) = state.editor.interaction.take() else {
        return;
    };
    drag_step(state, &mut interaction, pos);

    match interaction.action {
        EditAction::RubberBandPoints => {
            if let Some(band) = state.editor.rubber_band.take() {
                point_editing::select_points_in_band(state, band);
            }
        }
        EditAction::RubberBandObjects => {
            if let Some(band) = state.editor.rubber_band.take() {
                object_editing::select_objects_in_band(state, band);
            }
        }
        EditAction::ScaleObject => object_editing::end_scale(state, &interaction),
        EditAction::DrawPoint
        | EditAction::SelectEndPoint
        | EditAction::ClosePath
        | EditAction::InsertPoint
        | EditAction::DeletePoint
        | EditAction::MoveHandle
        | EditAction::SelectMovePoints
        | EditAction::SelectMoveObject
        | EditAction::MoveSelection => {}
    }
}

fn drag_step(state: &mut AppState, interaction: &mut Interaction, pos: Vec2) {
    if pos == interaction.last_pos {
        return;
    }
    let delta = pos - interaction.last_pos;

    match interaction.action {
        EditAction::DrawPoint => path_drawing::drag_new_handle(state, interaction, pos),
        EditAction::InsertPoint => path_drawing::drag_point(state, interaction, delta),
        EditAction::MoveHandle => point_editing::move_handle(state, interaction, pos),
        EditAction::SelectMovePoints => point_editing::move_selected_points(state, delta),
        EditAction::RubberBandPoints | EditAction::RubberBandObjects => {
            selection::update_rubber_band(state, pos)
        }
        EditAction::ScaleObject => object_editing::scale(state, interaction, delta),
        EditAction::SelectMoveObject | EditAction::MoveSelection => {
            object_editing::move_selected(state, delta)
        }
        EditAction::SelectEndPoint | EditAction::ClosePath | EditAction::DeletePoint => {}
    }

    interaction.last_pos = pos;
}

//! Use-Case: Formen zeichnen (Pfad-Kontext).
//!
//! Ein Klick auf Freifläche beginnt eine neue Form oder hängt, solange die
//! Zeichensperre gilt, am selektierten Endpunkt an. Das anschließende Ziehen
//! setzt den Handle des neuen Punkts (gespiegelt).

use crate::app::state::Interaction;
use crate::app::AppState;
use crate::core::{HandleSide, ObjectId, SegmentId};
use crate::shared::HoverTarget;
use glam::Vec2;

/// Setzt einen neuen Punkt (neue Form oder Verlängerung am selektierten Ende).
pub fn draw_point(state: &mut AppState, interaction: &mut Interaction, pos: Vec2) {
    let lock = state.editor.drawing_lock;
    let continued = lock.and_then(|object| continue_at_end_point(state, object, pos));

    let (object, segment, side) = match continued {
        Some(hit) => hit,
        None => {
            state.drawing.unselect_all();
            let object = state.drawing.add_object(state.options.segments_per_curve);
            let Some(segment) = state
                .drawing
                .get_mut(object)
                .and_then(|o| o.edit(|curve| curve.append_tail(pos)))
            else {
                return;
            };
            log::info!("Neue Form {:?} begonnen", object);
            (object, segment, HandleSide::Second)
        }
    };

    if let Some(obj) = state.drawing.get_mut(object) {
        obj.curve_flags_mut().select_end_point(segment);
    }
    state.editor.drawing_lock = Some(object);
    state.editor.current_object = Some(object);
    interaction.target = Some(HoverTarget::Handle {
        object,
        segment,
        side,
    });
}

/// Hängt am selektierten offenen Ende an; Kopf oder Ende je nach Selektion.
fn continue_at_end_point(
    state: &mut AppState,
    object: ObjectId,
    pos: Vec2,
) -> Option<(ObjectId, SegmentId, HandleSide)> {
    let obj = state.drawing.get_mut(object)?;
    let curve = obj.curve();
    if curve.is_closed() {
        return None;
    }
    let end = curve.selected_end_point()?;
    let at_head = Some(end) == curve.first_id() && curve.len() > 1;

    let segment = obj.edit(|curve| {
        if at_head {
            curve.append_head(pos)
        } else {
            curve.append_tail(pos)
        }
    })?;
    log::debug!(
        "Punkt an {} von {:?} angehängt",
        if at_head { "Kopf" } else { "Ende" },
        object
    );

    let side = if at_head {
        HandleSide::First
    } else {
        HandleSide::Second
    };
    Some((object, segment, side))
}

/// Zieht den Handle des gerade gesetzten Punkts; der Gegenhandle wird gespiegelt.
pub fn drag_new_handle(state: &mut AppState, interaction: &Interaction, pos: Vec2) {
    let Some(HoverTarget::Handle {
        object,
        segment,
        side,
    }) = interaction.target
    else {
        return;
    };
    if let Some(obj) = state.drawing.get_mut(object) {
        obj.edit(|curve| curve.move_handle(segment, pos, side, true));
    }
}

/// Selektiert einen offenen Endpunkt zum Weiterzeichnen.
pub fn select_end_point(state: &mut AppState, interaction: &Interaction) {
    let Some(HoverTarget::Point { object, segment }) = interaction.target else {
        return;
    };
    state.drawing.unselect_all();
    let Some(obj) = state.drawing.get_mut(object) else {
        return;
    };
    obj.curve_flags_mut().select_end_point(segment);
    state.editor.drawing_lock = Some(object);
    state.editor.current_object = Some(object);
}

/// Schließt die Form am gegenüberliegenden Endpunkt.
pub fn close_path(state: &mut AppState, interaction: &Interaction) {
    let Some(target) = interaction.target else {
        return;
    };
    let object = target.object();
    let Some(obj) = state.drawing.get_mut(object) else {
        return;
    };
    obj.edit(|curve| curve.close());
    obj.curve_flags_mut().unselect_all_points();
    if state.editor.drawing_lock == Some(object) {
        state.editor.drawing_lock = None;
    }
    log::info!("Kurve {:?} geschlossen", object);
}

/// Fügt am getroffenen Sample einen Punkt ein; der neue Punkt wird Ziel des Drags.
pub fn insert_point(state: &mut AppState, interaction: &mut Interaction) {
    let Some(HoverTarget::PathSample {
        object,
        segment,
        split,
    }) = interaction.target
    else {
        return;
    };
    let Some(obj) = state.drawing.get_mut(object) else {
        return;
    };
    match obj.edit(|curve| curve.insert_at(segment, split)) {
        Some(inserted) => {
            log::debug!("Punkt in {:?} eingefügt (Split {})", object, split);
            interaction.target = Some(HoverTarget::Point {
                object,
                segment: inserted,
            });
        }
        None => {
            log::debug!("Einfügen bei Split {} verworfen", split);
            interaction.target = None;
        }
    }
}

/// Verschiebt den Punkt, auf den die Interaktion zeigt.
pub fn drag_point(state: &mut AppState, interaction: &Interaction, delta: Vec2) {
    let Some(HoverTarget::Point { object, segment }) = interaction.target else {
        return;
    };
    if let Some(obj) = state.drawing.get_mut(object) {
        obj.edit(|curve| curve.move_points(segment, delta));
    }
}

/// Löscht den getroffenen Punkt; eine leere Form wird entfernt.
pub fn delete_point(state: &mut AppState, interaction: &mut Interaction) {
    let Some(HoverTarget::Point { object, segment }) = interaction.target.take() else {
        return;
    };
    state.hover.clear(&mut state.drawing);

    let Some(obj) = state.drawing.get_mut(object) else {
        return;
    };
    let removed = obj.edit(|curve| {
        let index = curve.index_of(segment)?;
        curve.delete_at(index)
    });
    if removed.is_none() {
        return;
    }
    log::info!("Punkt aus {:?} gelöscht", object);

    if obj.curve().is_empty() {
        remove_object(state, object);
    }
}

/// Entfernt eine Form samt Sperre und Bezügen.
pub(crate) fn remove_object(state: &mut AppState, object: ObjectId) {
    state.drawing.remove(object);
    if state.editor.drawing_lock == Some(object) {
        state.editor.drawing_lock = None;
    }
    if state.editor.current_object == Some(object) {
        state.editor.current_object = None;
    }
    log::info!("Form {:?} entfernt", object);
}

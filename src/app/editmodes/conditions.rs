//! Auswertung einzelner Bedingungen gegen eine Form.

use super::Condition;
use crate::core::{PathObject, SegmentId};
use crate::shared::{EditorOptions, HoverTarget};
use glam::Vec2;

/// Prüft `condition` an `pos` und liefert das getroffene Element.
pub fn evaluate(
    condition: Condition,
    object: &PathObject,
    pos: Vec2,
    options: &EditorOptions,
) -> Option<HoverTarget> {
    let id = object.id();
    let curve = object.curve();
    match condition {
        Condition::CloseToPath => curve.segments().find_map(|(segment, seg)| {
            curve.neighbor(segment)?;
            let index = seg.hit_sample(pos, options.path_hit_radius)?;
            // Ein Split auf dem letzten Sample wäre der Anker selbst
            (index + 1 < seg.segment_count()).then_some(HoverTarget::PathSample {
                object: id,
                segment,
                split: index + 1,
            })
        }),
        Condition::CloseToPathPoints => curve
            .segments()
            .find(|(_, seg)| seg.hits_point(pos, options.point_hit_radius))
            .map(|(segment, _)| HoverTarget::Point {
                object: id,
                segment,
            }),
        Condition::CloseToPathHandles => curve.segments().find_map(|(segment, seg)| {
            let side = seg.hit_handle(pos, options.handle_hit_radius)?;
            // Eingeklappte Handles liegen auf dem Anker und sind nicht greifbar
            (seg.handle(side) != seg.point()).then_some(HoverTarget::Handle {
                object: id,
                segment,
                side,
            })
        }),
        Condition::CloseToEndPoints => curve
            .close_to_end_points(pos, options.end_point_hit_radius)
            .map(|segment| HoverTarget::Point {
                object: id,
                segment,
            }),
        Condition::CloseToOtherEndPoint => {
            if !curve.close_to_other_end_point(pos, options.end_point_hit_radius) {
                return None;
            }
            other_end_point(object).map(|segment| HoverTarget::Point {
                object: id,
                segment,
            })
        }
        Condition::OverPathObject => object
            .mouse_over_shape(pos, options.path_hit_radius)
            .then_some(HoverTarget::Object { object: id }),
        Condition::OverBoundingBox => (object.selected
            && object.mouse_over_object(pos, options.bounding_box_buffer))
        .then_some(HoverTarget::Object { object: id }),
        Condition::CloseToBoundingBoxHandle => {
            if !object.selected {
                return None;
            }
            object
                .close_to_bounding_box_handle(pos, options.bounding_box_handle_radius)
                .map(|handle| HoverTarget::BoundingBoxHandle { object: id, handle })
        }
    }
}

/// Endpunkt gegenüber dem selektierten Endpunkt.
fn other_end_point(object: &PathObject) -> Option<SegmentId> {
    let curve = object.curve();
    let selected = curve.selected_end_point()?;
    if Some(selected) == curve.first_id() {
        curve.last_id()
    } else {
        curve.first_id()
    }
}

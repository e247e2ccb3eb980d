//! Builder für Render-Szenen aus dem AppState.

use crate::app::AppState;
use crate::core::PathObject;
use crate::shared::{AnchorMarker, RenderScene, ShapeView};

/// Baut eine RenderScene aus dem aktuellen AppState.
pub fn build(state: &AppState) -> RenderScene {
    RenderScene {
        shapes: state.drawing.iter().map(shape_view).collect(),
        rubber_band: state.editor.rubber_band.map(|band| (band.start, band.end)),
        selection: state.selection.modes,
        hovered: state.hover.current(),
        options: state.options.clone(),
    }
}

fn shape_view(object: &PathObject) -> ShapeView {
    let curve = object.curve();
    let anchors = curve
        .segments()
        .map(|(segment, seg)| AnchorMarker {
            segment,
            point: seg.point(),
            first_handle: seg.first_handle(),
            second_handle: seg.second_handle(),
            selected: seg.point_selected,
            point_hovered: seg.point_hovered(),
            first_handle_hovered: seg.first_handle_hovered(),
            second_handle_hovered: seg.second_handle_hovered(),
        })
        .collect();

    // Der Kopf einer offenen Kette trägt nur seinen Anker als Sample
    let stroke = curve
        .segments()
        .filter(|(_, seg)| seg.segment_points().len() > 1)
        .map(|(_, seg)| seg.segment_points().to_vec())
        .collect();

    ShapeView {
        id: object.id(),
        closed: curve.is_closed(),
        selected: object.selected,
        hovered: object.hovered(),
        style: object.style,
        stroke,
        fill: object.fill_quads().to_vec(),
        anchors,
        bounding_box: object.bounding_box(),
        bounding_box_handles: if object.selected {
            object.bounding_box_handles()
        } else {
            Vec::new()
        },
        hovered_handle: object.hovered_handle(),
    }
}

use approx::assert_relative_eq;
use glam::Vec2;
use path_shape_editor::shared::PointSelectionMode;
use path_shape_editor::{
    AppController, AppIntent, AppState, BezierSegment, EditContext, HandleSide, ObjectId,
    PathCurve, PointerButton,
};

fn line(state: &mut AppState, points: &[(f32, f32)], closed: bool) -> ObjectId {
    let segments = points
        .iter()
        .map(|&(x, y)| BezierSegment::new(Vec2::new(x, y), 4))
        .collect();
    state
        .drawing
        .add_curve(PathCurve::from_segments(segments, closed, 4))
}

fn send(controller: &mut AppController, state: &mut AppState, intents: Vec<AppIntent>) {
    for intent in intents {
        controller
            .handle_intent(state, intent)
            .expect("Intent sollte ohne Fehler durchlaufen");
    }
}

fn press_drag_release(from: Vec2, to: Vec2) -> Vec<AppIntent> {
    vec![
        AppIntent::PointerMoved { pos: from },
        AppIntent::PointerPressed {
            pos: from,
            button: PointerButton::Primary,
        },
        AppIntent::PointerDragged {
            pos: to,
            button: PointerButton::Primary,
        },
        AppIntent::PointerReleased {
            pos: to,
            button: PointerButton::Primary,
        },
    ]
}

fn points_of(state: &AppState, id: ObjectId) -> Vec<Vec2> {
    state
        .drawing
        .get(id)
        .expect("Form sollte existieren")
        .curve()
        .segments()
        .map(|(_, seg)| seg.point())
        .collect()
}

#[test]
fn test_insert_on_path_then_drag_new_point() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    let id = line(&mut state, &[(0.0, 0.0), (40.0, 0.0), (80.0, 0.0)], false);

    send(
        &mut controller,
        &mut state,
        press_drag_release(Vec2::new(20.0, 0.5), Vec2::new(20.0, 10.0)),
    );

    let points = points_of(&state, id);
    assert_eq!(points.len(), 4);
    // Neuer Anker auf dem getroffenen Sample, danach um das Drag-Delta verschoben
    assert_relative_eq!(points[1].x, 20.0, epsilon = 1e-4);
    assert_relative_eq!(points[1].y, 9.5, epsilon = 1e-4);
}

#[test]
fn test_click_on_end_point_continues_drawing_there() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    let id = line(&mut state, &[(0.0, 0.0), (40.0, 0.0)], false);

    send(
        &mut controller,
        &mut state,
        press_drag_release(Vec2::new(40.0, 0.0), Vec2::new(40.0, 0.0)),
    );
    assert_eq!(state.editor.drawing_lock, Some(id));

    send(
        &mut controller,
        &mut state,
        press_drag_release(Vec2::new(80.0, 0.0), Vec2::new(80.0, 0.0)),
    );

    assert_eq!(state.object_count(), 1);
    let points = points_of(&state, id);
    assert_eq!(points.len(), 3);
    assert_eq!(points[2], Vec2::new(80.0, 0.0));
}

#[test]
fn test_click_on_anchor_of_closed_shape_deletes_it() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    let id = line(
        &mut state,
        &[(100.0, 0.0), (100.0, 40.0), (140.0, 40.0), (140.0, 0.0)],
        true,
    );

    send(
        &mut controller,
        &mut state,
        press_drag_release(Vec2::new(140.0, 40.0), Vec2::new(140.0, 40.0)),
    );

    let points = points_of(&state, id);
    assert_eq!(points.len(), 3);
    assert!(!points.contains(&Vec2::new(140.0, 40.0)));
}

#[test]
fn test_deleting_last_point_removes_shape() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    let id = line(&mut state, &[(0.0, 0.0)], false);
    send(
        &mut controller,
        &mut state,
        vec![AppIntent::EditContextSelected {
            context: EditContext::HandlesPoints,
        }],
    );
    send(
        &mut controller,
        &mut state,
        press_drag_release(Vec2::ZERO, Vec2::ZERO),
    );

    send(&mut controller, &mut state, vec![AppIntent::DeleteSelectedRequested]);

    assert!(state.drawing.get(id).is_none());
    assert!(state.hover.current().is_none());
}

#[test]
fn test_move_selected_points_in_handle_context() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    let id = line(&mut state, &[(0.0, 0.0), (40.0, 0.0), (80.0, 0.0)], false);
    send(
        &mut controller,
        &mut state,
        vec![AppIntent::EditContextSelected {
            context: EditContext::HandlesPoints,
        }],
    );

    send(
        &mut controller,
        &mut state,
        press_drag_release(Vec2::new(40.0, 0.0), Vec2::new(45.0, 10.0)),
    );

    assert_eq!(state.selection.modes.point, PointSelectionMode::Point);
    let points = points_of(&state, id);
    assert_relative_eq!(points[1].x, 45.0);
    assert_relative_eq!(points[1].y, 10.0);
    assert_relative_eq!(points[0].x, 0.0);
}

#[test]
fn test_handle_style_commands_apply_to_selection() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    let id = line(&mut state, &[(0.0, 0.0), (40.0, 0.0), (80.0, 0.0)], false);
    send(
        &mut controller,
        &mut state,
        vec![AppIntent::EditContextSelected {
            context: EditContext::HandlesPoints,
        }],
    );
    send(
        &mut controller,
        &mut state,
        press_drag_release(Vec2::new(40.0, 0.0), Vec2::new(40.0, 0.0)),
    );

    send(&mut controller, &mut state, vec![AppIntent::HandlesRequested]);

    let offset = state.options.handle_offset;
    let shape = state.drawing.get(id).expect("Form sollte existieren");
    let middle = shape.curve().ids()[1];
    let seg = shape.curve().segment(middle).expect("Segment sollte existieren");
    assert_relative_eq!(
        seg.handle(HandleSide::First).distance(seg.point()),
        offset,
        epsilon = 1e-3
    );
    assert_relative_eq!(
        seg.handle(HandleSide::Second).distance(seg.point()),
        offset,
        epsilon = 1e-3
    );

    send(&mut controller, &mut state, vec![AppIntent::NoHandlesRequested]);
    let shape = state.drawing.get(id).expect("Form sollte existieren");
    let seg = shape.curve().segment(middle).expect("Segment sollte existieren");
    assert_eq!(seg.handle(HandleSide::First), seg.point());
    assert_eq!(seg.handle(HandleSide::Second), seg.point());
}

#[test]
fn test_rubber_band_selects_points_across_shapes() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    line(&mut state, &[(0.0, 0.0), (40.0, 0.0)], false);
    line(&mut state, &[(0.0, 20.0), (40.0, 20.0)], false);
    send(
        &mut controller,
        &mut state,
        vec![AppIntent::EditContextSelected {
            context: EditContext::HandlesPoints,
        }],
    );

    send(
        &mut controller,
        &mut state,
        press_drag_release(Vec2::new(-10.0, -10.0), Vec2::new(10.0, 30.0)),
    );

    assert_eq!(
        state.selection.modes.point,
        PointSelectionMode::MultiplePoints
    );
    let selected: usize = state
        .drawing
        .iter()
        .map(|o| o.curve().segments().filter(|(_, s)| s.point_selected).count())
        .sum();
    assert_eq!(selected, 2);
}

#[test]
fn test_conjunct_toggle_applies_to_grabbed_handle_segment() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    let segments = vec![
        BezierSegment::new(Vec2::ZERO, 4),
        BezierSegment::with_handles(
            Vec2::new(100.0, 0.0),
            Vec2::new(100.0, -20.0),
            Vec2::new(100.0, 20.0),
            4,
        ),
    ];
    let id = state
        .drawing
        .add_curve(PathCurve::from_segments(segments, false, 4));
    send(
        &mut controller,
        &mut state,
        vec![AppIntent::EditContextSelected {
            context: EditContext::HandlesPoints,
        }],
    );

    // Anker A selektieren, danach den Handle von B greifen
    send(
        &mut controller,
        &mut state,
        press_drag_release(Vec2::ZERO, Vec2::ZERO),
    );
    send(
        &mut controller,
        &mut state,
        press_drag_release(Vec2::new(100.0, 20.0), Vec2::new(100.0, 20.0)),
    );
    assert_eq!(state.selection.modes.point, PointSelectionMode::Handle);

    send(
        &mut controller,
        &mut state,
        vec![AppIntent::ConjunctToggled { conjunct: false }],
    );

    let shape = state.drawing.get(id).expect("Form sollte existieren");
    let ids = shape.curve().ids().to_vec();
    let a = shape.curve().segment(ids[0]).expect("Segment A");
    let b = shape.curve().segment(ids[1]).expect("Segment B");
    assert!(!a.point_selected);
    assert!(a.conjunct);
    assert!(b.point_selected);
    assert!(!b.conjunct);

    send(
        &mut controller,
        &mut state,
        press_drag_release(Vec2::new(100.0, 20.0), Vec2::new(110.0, 30.0)),
    );

    let shape = state.drawing.get(id).expect("Form sollte existieren");
    let b = shape.curve().segment(ids[1]).expect("Segment B");
    assert_eq!(b.handle(HandleSide::Second), Vec2::new(110.0, 30.0));
    assert_eq!(b.handle(HandleSide::First), Vec2::new(100.0, -20.0));
}

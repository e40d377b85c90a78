use bezier_handle_editor::{service_redraw, DrawSurface, RecordingSurface};
use bezier_handle_editor::{AppCommand, AppController, AppIntent, AppState, EditState};
use bezier_handle_editor::{PointField, PointRef, Spline};
use glam::Vec2;

/// Startzustand mit Demo-Spline, bereits einmal gezeichnet.
fn settled_state() -> AppState {
    let mut state = AppState::new();
    state.view.viewport_size = [1024, 768];
    let mut surface = RecordingSurface::new(0, 0);
    service_redraw(&mut state, &mut surface).expect("Erster Frame muss anstehen");
    state
}

fn send(controller: &mut AppController, state: &mut AppState, intent: AppIntent) {
    controller
        .handle_intent(state, intent)
        .expect("Intent sollte ohne Fehler durchlaufen");
}

#[test]
fn test_drag_anchor_moves_node_and_redraws() {
    let mut controller = AppController::new();
    let mut state = settled_state();

    send(
        &mut controller,
        &mut state,
        AppIntent::PointerPressed {
            pos: Vec2::new(602.0, 401.0),
        },
    );
    assert_eq!(
        state.edit,
        EditState::Dragging(PointRef::new(1, PointField::Position))
    );
    // Greifen allein verändert nichts
    assert!(!state.is_redraw_requested());

    send(
        &mut controller,
        &mut state,
        AppIntent::PointerMoved {
            pos: Vec2::new(700.0, 450.0),
        },
    );
    assert_eq!(state.spline.nodes[1].position, Vec2::new(700.0, 450.0));
    assert!(state.is_redraw_requested());

    send(&mut controller, &mut state, AppIntent::PointerReleased);
    assert_eq!(state.edit, EditState::Idle);
    assert_eq!(state.spline.nodes[1].position, Vec2::new(700.0, 450.0));

    let mut surface = RecordingSurface::new(1024, 768);
    service_redraw(&mut state, &mut surface).expect("Redraw nach Drag erwartet");
    let markers = surface.centers_with_radius(state.options.marker_radius);
    assert!(markers.contains(&Vec2::new(700.0, 450.0)));
    assert!(!markers.contains(&Vec2::new(600.0, 400.0)));
}

#[test]
fn test_idle_pointer_move_is_ignored() {
    let mut controller = AppController::new();
    let mut state = settled_state();
    let before = state.spline.clone();

    send(
        &mut controller,
        &mut state,
        AppIntent::PointerMoved {
            pos: Vec2::new(300.0, 300.0),
        },
    );

    assert_eq!(state.spline, before);
    assert!(!state.is_redraw_requested());
    assert!(state.command_log.is_empty());
}

#[test]
fn test_press_on_empty_canvas_stays_idle() {
    let mut controller = AppController::new();
    let mut state = settled_state();

    send(
        &mut controller,
        &mut state,
        AppIntent::PointerPressed {
            pos: Vec2::new(900.0, 50.0),
        },
    );
    assert_eq!(state.edit, EditState::Idle);

    send(
        &mut controller,
        &mut state,
        AppIntent::PointerMoved {
            pos: Vec2::new(950.0, 80.0),
        },
    );
    assert_eq!(state.spline, Spline::demo());
    assert!(!state.is_redraw_requested());
}

#[test]
fn test_resize_requests_single_redraw() {
    let mut controller = AppController::new();
    let mut state = settled_state();

    send(
        &mut controller,
        &mut state,
        AppIntent::ViewportResized {
            width: 800,
            height: 600,
        },
    );
    assert_eq!(state.view.viewport_size, [800, 600]);

    let mut surface = RecordingSurface::new(1024, 768);
    assert!(service_redraw(&mut state, &mut surface).is_some());
    assert!(service_redraw(&mut state, &mut surface).is_none());
    assert_eq!(surface.clears, 1);
    assert_eq!((surface.width(), surface.height()), (800, 600));
}

#[test]
fn test_dragging_control_in_reshapes_mirrored_push() {
    let mut controller = AppController::new();
    let mut state = settled_state();

    send(
        &mut controller,
        &mut state,
        AppIntent::PointerPressed {
            pos: Vec2::new(501.0, 101.0),
        },
    );
    assert_eq!(
        state.edit,
        EditState::Dragging(PointRef::new(1, PointField::ControlIn))
    );

    send(
        &mut controller,
        &mut state,
        AppIntent::PointerMoved {
            pos: Vec2::new(550.0, 150.0),
        },
    );
    send(&mut controller, &mut state, AppIntent::PointerReleased);

    let node = state.spline.nodes[1];
    assert_eq!(node.control_in, Some(Vec2::new(550.0, 150.0)));
    assert_eq!(node.push(), Some(Vec2::new(650.0, 650.0)));

    let incoming = state.spline.segment(0).expect("Segment 0 existiert");
    let outgoing = state.spline.segment(1).expect("Segment 1 existiert");
    assert_eq!(incoming.c, Vec2::new(550.0, 150.0));
    assert_eq!(outgoing.b, Vec2::new(650.0, 650.0));
}

#[test]
fn test_command_log_records_drag_sequence() {
    let mut controller = AppController::new();
    let mut state = settled_state();

    send(
        &mut controller,
        &mut state,
        AppIntent::PointerPressed {
            pos: Vec2::new(602.0, 401.0),
        },
    );
    send(
        &mut controller,
        &mut state,
        AppIntent::PointerMoved {
            pos: Vec2::new(700.0, 450.0),
        },
    );
    send(&mut controller, &mut state, AppIntent::PointerReleased);

    let target = PointRef::new(1, PointField::Position);
    let entries: Vec<AppCommand> = state.command_log.entries().copied().collect();
    assert_eq!(
        entries,
        vec![
            AppCommand::BeginDrag {
                pos: Vec2::new(602.0, 401.0),
                max_distance: state.options.pick_radius,
            },
            AppCommand::MovePoint {
                target,
                pos: Vec2::new(700.0, 450.0),
            },
            AppCommand::EndDrag,
        ]
    );
}

#[test]
fn test_stale_point_ref_ends_drag_with_error() {
    let mut controller = AppController::new();
    let mut state = settled_state();
    state.edit = EditState::Dragging(PointRef::new(9, PointField::Position));

    let result = controller.handle_intent(
        &mut state,
        AppIntent::PointerMoved {
            pos: Vec2::new(1.0, 1.0),
        },
    );

    assert!(result.is_err());
    assert_eq!(state.edit, EditState::Idle);
    assert_eq!(state.spline, Spline::demo());
    assert!(!state.is_redraw_requested());
}

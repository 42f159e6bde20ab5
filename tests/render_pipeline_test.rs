use std::f32::consts::PI;

use osc_wireframe::core::{tumble, Camera, Mesh, MessageLog, Rotation};
use osc_wireframe::term::{insert_text, Cell, FrameBuffer, FrameState, SceneView};
use osc_wireframe::types::{Arg, Record, BLANK_GLYPH, DEPTH_FAR, WIRE_GLYPH};

fn triangle() -> Mesh {
    Mesh::from_flat(
        &[0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0, 0.0],
        3,
        &[1, 2, 3],
        3,
    )
    .unwrap()
}

fn cube() -> Mesh {
    #[rustfmt::skip]
    let positions = [
        -1.0, -1.0, -1.0,
         1.0, -1.0, -1.0,
         1.0,  1.0, -1.0,
        -1.0,  1.0, -1.0,
        -1.0, -1.0,  1.0,
         1.0, -1.0,  1.0,
         1.0,  1.0,  1.0,
        -1.0,  1.0,  1.0,
    ];
    #[rustfmt::skip]
    let faces = [
        1, 2, 3, 4,
        5, 6, 7, 8,
        1, 2, 6, 5,
        2, 3, 7, 6,
        3, 4, 8, 7,
        4, 1, 5, 8,
    ];
    Mesh::from_flat(&positions, 3, &faces, 4).unwrap()
}

fn bd_record() -> Record {
    Record::from_pairs(
        "/dirt/play",
        [
            ("orbit", Arg::Int(2)),
            ("s", Arg::Str("bd".into())),
            ("n", Arg::Int(5)),
            ("cycle", Arg::Float(1.25)),
            ("gain", Arg::Float(0.8)),
        ],
    )
}

#[test]
fn triangle_at_angle_zero_projects_to_distinct_points_and_draws_all_edges() {
    let camera = Camera::default();
    assert_eq!(camera.scale, 20.0);
    assert_eq!(camera.distance, 4.0);

    let mesh = triangle();
    let pts: Vec<_> = mesh
        .positions()
        .iter()
        .map(|&p| camera.transform(p, 0.0).unwrap())
        .collect();
    assert_eq!((pts[0].x, pts[0].y), (60, 17));
    assert_eq!((pts[1].x, pts[1].y), (65, 17));
    assert_eq!((pts[2].x, pts[2].y), (60, 22));

    let fb = SceneView::default().render(&mesh, &MessageLog::new(), 0.0);

    // Bottom edge (v1 -> v2) along row 17.
    for x in 60..=65 {
        let cell = fb.get(x, 17).unwrap();
        assert_eq!(cell.ch, WIRE_GLYPH);
        assert!(cell.depth.is_finite());
    }
    // Left edge (v3 -> v1) along column 60.
    for y in 17..=22 {
        let cell = fb.get(60, y).unwrap();
        assert_eq!(cell.ch, WIRE_GLYPH);
        assert!(cell.depth.is_finite());
    }
    // Hypotenuse (v2 -> v3) passes through the diagonal cells between them.
    for (x, y) in [(64, 18), (63, 19), (62, 20), (61, 21)] {
        assert_eq!(fb.get(x, y).unwrap().ch, WIRE_GLYPH, "({x},{y})");
    }
}

#[test]
fn every_cell_is_blank_wire_or_overlay_after_a_full_pass() {
    let view = SceneView::default();
    let mut state = FrameState::new(&view);
    let mesh = cube();

    state.compose(&view, &mesh, Some(&bd_record()));
    for angle in [0.0, 0.4, 1.3, 2.9] {
        state.rotation = Rotation::new(angle);
        state.compose(&view, &mesh, None);
        for cell in state.fb.cells() {
            let ok = cell.is_text
                || (cell.ch == BLANK_GLYPH && cell.depth == DEPTH_FAR)
                || (cell.ch == WIRE_GLYPH && cell.depth.is_finite());
            assert!(ok, "unexpected cell {cell:?} at angle {angle}");
        }
        assert!(state.fb.cells().iter().any(|c| c.ch == WIRE_GLYPH));
        assert!(state.fb.cells().iter().any(|c| c.is_text));
    }
}

#[test]
fn tumble_repeats_after_twenty_pi() {
    // The horizontal axis turns at 0.7x, so both axes line up again after 20π.
    let camera = Camera::default();
    for &p in cube().positions() {
        for theta in [0.0f32, 0.35, 1.7] {
            let a = tumble(p, theta);
            let b = tumble(p, theta + 20.0 * PI);
            assert!((a - b).abs().max_element() < 1e-3, "{a:?} vs {b:?}");

            let pa = camera.project(a).unwrap();
            let pb = camera.project(b).unwrap();
            assert!((pa.x - pb.x).abs() <= 1 && (pa.y - pb.y).abs() <= 1);
            assert!((pa.depth - pb.depth).abs() < 1e-3);
        }
    }
}

#[test]
fn message_scenario_populates_slot_two_row() {
    let view = SceneView::default();
    let mut state = FrameState::new(&view);
    let mesh = triangle();

    state.compose(&view, &mesh, Some(&bd_record()));

    let slot = state.log.slot(2).unwrap();
    assert!(slot.active);
    assert_eq!(slot.label.as_str(), "bd");
    assert_eq!(slot.count, 5);
    assert_eq!(slot.cycle_fraction(), 0.25);
    assert_eq!(state.total_messages(), 1);

    // Slot 2 lives on row 3 + 2 * 3; the triangle never reaches it.
    let row: Vec<char> = state.fb.row(9).unwrap().iter().map(|c| c.ch).collect();
    let at = |x: usize, len: usize| row[x..x + len].iter().collect::<String>();
    assert_eq!(at(5, 3), "[2]");
    assert_eq!(at(10, 2), "bd");
    assert_eq!(at(25, 3), "n:5");
    assert_eq!(at(33, 12), "[##--------]");
    assert_eq!(at(46, 6), "g:0.80");
}

#[test]
fn overlay_shifts_wireframe_cells_as_whole_units() {
    let mut fb = FrameBuffer::new(20, 1);
    let wire = Cell {
        ch: WIRE_GLYPH,
        depth: 0.625,
        is_text: false,
    };
    fb.set(6, 0, wire);

    insert_text(&mut fb, 4, 0, "abc");

    let read: String = (4..7).map(|x| fb.get(x, 0).unwrap().ch).collect();
    assert_eq!(read, "abc");
    assert!((4..7).all(|x| fb.get(x, 0).unwrap().is_text));
    assert_eq!(fb.get(9, 0), Some(wire));
    assert_eq!(fb.get(6, 0).unwrap().ch, 'c');
}

#[test]
fn text_composited_after_mesh_is_not_overdrawn_in_the_same_frame() {
    let view = SceneView::default();
    let mut fb = FrameBuffer::new(120, 35);
    insert_text(&mut fb, 58, 17, "XXXXXXXXXX");
    view.render_mesh_into(&triangle(), 0.0, &mut fb);
    for x in 58..68 {
        assert_eq!(fb.get(x, 17).unwrap().ch, 'X');
    }
    // The left edge below the text row is still drawn.
    assert_eq!(fb.get(60, 18).unwrap().ch, WIRE_GLYPH);
}

#[test]
fn rotation_advances_between_frames() {
    let view = SceneView::default();
    let mut state = FrameState::new(&view);
    let mesh = triangle();

    state.compose(&view, &mesh, None);
    let first = state.fb.clone();
    for _ in 0..20 {
        state.advance();
    }
    state.compose(&view, &mesh, None);

    assert!((state.rotation.angle() - 0.4).abs() < 1e-4);
    assert_ne!(state.fb, first);
}

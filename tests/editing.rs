use rasterpad::config::KeybindingsConfig;
use rasterpad::draw::{BLACK, BLUE, Canvas, PixelBuffer, Point, RED, Rgba, WHITE, flood_fill};
use rasterpad::input::{EditorState, MouseButton, Tool, ToolState};

const WHITE_PX: [u8; 4] = [255, 255, 255, 255];

fn editor(width: u32, height: u32) -> EditorState {
    let action_map = KeybindingsConfig::default().build_action_map().unwrap();
    let tool = ToolState {
        color: BLACK,
        stroke_width: 1,
        ..ToolState::default()
    };
    EditorState::new(Canvas::new(width, height, 30).unwrap(), tool, action_map)
}

/// A white canvas with a closed black square outline from (2,2) to (7,7).
fn boxed_buffer() -> PixelBuffer {
    let mut buffer = PixelBuffer::new(10, 10, WHITE).unwrap();
    for i in 2..=7 {
        buffer.set(i, 2, BLACK).unwrap();
        buffer.set(i, 7, BLACK).unwrap();
        buffer.set(2, i, BLACK).unwrap();
        buffer.set(7, i, BLACK).unwrap();
    }
    buffer
}

#[test]
fn snapshot_mutate_undo_restores_pixels() {
    let mut state = editor(32, 24);
    state.set_tool(Tool::Circle);
    state.on_mouse_press(MouseButton::Left, 16, 12).unwrap();
    state.on_mouse_release(MouseButton::Left, 20, 12);
    let before = state.buffer().pixels().to_vec();

    state.set_tool(Tool::Pen);
    state.set_stroke_width(5);
    state.on_mouse_press(MouseButton::Left, 0, 0).unwrap();
    state.on_mouse_motion(31, 23);
    state.on_mouse_release(MouseButton::Left, 31, 23);
    assert_ne!(state.buffer().pixels(), before.as_slice());

    assert!(state.undo());
    assert_eq!(state.buffer().pixels(), before.as_slice());
}

#[test]
fn history_never_exceeds_thirty_steps() {
    let mut canvas = Canvas::new(8, 8, 30).unwrap();
    for i in 0..40 {
        let color = if i % 2 == 0 { RED } else { BLUE };
        canvas.fill_at(Point::new(0, 0), color).unwrap();
        assert!(canvas.history().undo_len() <= 30);
    }

    for _ in 0..30 {
        assert!(canvas.undo());
    }
    let settled = canvas.copy_pixels();
    assert!(!canvas.undo());
    assert_eq!(canvas.copy_pixels(), settled);
}

#[test]
fn new_mutation_after_undo_drops_redo() {
    let mut canvas = Canvas::new(8, 8, 30).unwrap();
    canvas.fill_at(Point::new(0, 0), RED).unwrap();
    assert!(canvas.undo());
    assert!(canvas.can_redo());

    canvas.clear();
    assert!(!canvas.can_redo());
    assert!(!canvas.redo());
}

#[test]
fn fill_with_existing_color_is_noop() {
    let mut buffer = boxed_buffer();
    let before = buffer.clone();
    let changed = flood_fill(&mut buffer, Point::new(0, 0), WHITE).unwrap();
    assert_eq!(changed, 0);
    assert_eq!(buffer, before);
}

#[test]
fn fill_covers_enclosed_region_only() {
    let mut buffer = boxed_buffer();
    let before = buffer.clone();
    flood_fill(&mut buffer, Point::new(4, 5), RED).unwrap();

    for y in 0..10 {
        for x in 0..10 {
            let inside = (3..=6).contains(&x) && (3..=6).contains(&y);
            let expected = if inside {
                RED
            } else {
                before.get(x, y).unwrap()
            };
            assert_eq!(buffer.get(x, y).unwrap(), expected, "pixel ({x}, {y})");
        }
    }
}

#[test]
fn growing_resize_preserves_content_and_pads_white() {
    let mut canvas = Canvas::new(10, 10, 30).unwrap();
    canvas.fill_at(Point::new(0, 0), Rgba::new(10, 20, 30, 40)).unwrap();
    let original = canvas.buffer().clone();

    canvas.resize(16, 12).unwrap();
    let buffer = canvas.buffer();
    for y in 0..12 {
        for x in 0..16 {
            let expected = if x < 10 && y < 10 {
                original.get(x, y).unwrap()
            } else {
                WHITE
            };
            assert_eq!(buffer.get(x, y).unwrap(), expected);
        }
    }
}

#[test]
fn ten_by_ten_fill_scenario() {
    let mut buffer = PixelBuffer::new(10, 10, WHITE).unwrap();
    assert_eq!(flood_fill(&mut buffer, Point::new(5, 5), RED).unwrap(), 100);
    assert!(buffer.pixels().chunks_exact(4).all(|px| px == [255, 0, 0, 255]));

    let filled = buffer.clone();
    assert_eq!(flood_fill(&mut buffer, Point::new(0, 0), RED).unwrap(), 0);
    assert_eq!(buffer, filled);
}

#[test]
fn diagonal_line_then_undo_scenario() {
    let mut state = editor(10, 10);
    state.set_tool(Tool::Line);
    state.on_mouse_press(MouseButton::Left, 0, 0).unwrap();
    state.on_mouse_motion(9, 9);
    state.on_mouse_release(MouseButton::Left, 9, 9);
    assert_eq!(state.buffer().get(5, 5).unwrap(), BLACK);

    assert!(state.undo());
    assert!(state.buffer().pixels().chunks_exact(4).all(|px| px == WHITE_PX));
}

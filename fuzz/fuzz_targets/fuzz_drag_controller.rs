#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use rubberband_core::{KeyCode, PointerButton, Rect, SelectConfig};
use rubberband_harness::{Harness, SimulatedSurface};
use rubberband_runtime::DragPhase;

#[derive(Debug, Arbitrary)]
enum Input {
    Press { button: u8, x: i16, y: i16 },
    Move { x: i16, y: i16 },
    Release,
    Key(u8),
    Scroll { x: i16, y: i16 },
    Frames(u8),
    Unmount,
}

#[derive(Debug, Arbitrary)]
struct Script {
    columns: u8,
    rows: u8,
    inputs: Vec<Input>,
}

fuzz_target!(|script: Script| {
    let columns = u32::from(script.columns % 16) + 1;
    let rows = u32::from(script.rows % 32) + 1;
    let surface = SimulatedSurface::grid(Rect::new(8.0, 8.0, 240.0, 160.0), columns, rows, 24.0, 4.0);
    let mut h = Harness::new(surface, SelectConfig::default());

    for input in script.inputs.iter().take(256) {
        match *input {
            Input::Press { button, x, y } => {
                let button = PointerButton::from_index(u16::from(button % 5))
                    .unwrap_or(PointerButton::Primary);
                h.press_with(button, f64::from(x), f64::from(y));
            }
            Input::Move { x, y } => {
                h.move_to(f64::from(x), f64::from(y));
            }
            Input::Release => {
                h.release();
            }
            Input::Key(code) => {
                let key = if code % 4 == 0 {
                    KeyCode::Escape
                } else {
                    KeyCode::Char(char::from(code))
                };
                h.key(key);
            }
            Input::Scroll { x, y } => {
                h.scroll_to(f64::from(x), f64::from(y));
            }
            Input::Frames(n) => {
                h.advance_frames(usize::from(n % 8));
            }
            Input::Unmount => {
                h.unmount();
                assert_eq!(h.controller.phase(), DragPhase::Idle);
                h.host.surface.set_mounted(true);
            }
        }

        // Post-conditions that must always hold:
        assert!(h.host.clock.pending_count() <= 1, "more than one frame pending");
        if !h.controller.is_dragging() {
            assert_eq!(h.host.clock.pending_count(), 0, "frame pending while not dragging");
        }
        if let Some(rect) = h.selection_rect() {
            assert!(rect.width >= 0.0 && rect.height >= 0.0, "negative selection size");
        }
    }
});

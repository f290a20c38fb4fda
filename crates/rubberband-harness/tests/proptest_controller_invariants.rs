//! Property-based invariants of the drag controller under arbitrary input
//! sequences.
//!
//! 1. A frame request is pending exactly while a drag is active
//! 2. A selection rectangle exists only while dragging, with non-negative size
//! 3. Escape always lands in Idle with an empty selection
//! 4. A release always lands in Idle
//! 5. Selected items are all labeled items of the surface
//! 6. Without crossing the threshold the selection stays empty

use proptest::prelude::*;
use rubberband_core::{ItemId, KeyCode, Rect, SelectConfig, Size};
use rubberband_harness::{Harness, SimulatedSurface};
use rubberband_runtime::DragPhase;

#[derive(Debug, Clone)]
enum Op {
    Press(f64, f64),
    Move(f64, f64),
    Release,
    Escape,
    Key,
    Scroll(f64),
    Frame,
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        (0.0f64..320.0, 0.0f64..240.0).prop_map(|(x, y)| Op::Press(x, y)),
        (-60.0f64..380.0, -60.0f64..300.0).prop_map(|(x, y)| Op::Move(x, y)),
        (-60.0f64..380.0, -60.0f64..300.0).prop_map(|(x, y)| Op::Move(x, y)),
        Just(Op::Release),
        Just(Op::Escape),
        Just(Op::Key),
        (0.0f64..800.0).prop_map(Op::Scroll),
        Just(Op::Frame),
    ]
}

fn harness() -> Harness {
    let surface = SimulatedSurface::grid(Rect::new(16.0, 24.0, 320.0, 240.0), 6, 12, 40.0, 12.0)
        .with_unlabeled_item(Rect::new(30.0, 30.0, 20.0, 20.0));
    Harness::new(surface, SelectConfig::default())
}

fn labeled(h: &Harness) -> Vec<ItemId> {
    h.host
        .surface
        .items()
        .iter()
        .filter_map(|item| item.id.clone())
        .collect()
}

fn apply(h: &mut Harness, op: &Op) {
    match *op {
        Op::Press(x, y) => {
            h.press(x, y);
        }
        Op::Move(x, y) => {
            h.move_to(x, y);
        }
        Op::Release => {
            h.release();
            assert_eq!(h.controller.phase(), DragPhase::Idle);
        }
        Op::Escape => {
            h.key(KeyCode::Escape);
            assert_eq!(h.controller.phase(), DragPhase::Idle);
            assert!(h.controller.selected().is_empty());
        }
        Op::Key => {
            h.key(KeyCode::Char('z'));
        }
        Op::Scroll(y) => {
            h.scroll_to(0.0, y);
        }
        Op::Frame => {
            h.advance_frame();
        }
    }
}

proptest! {
    #[test]
    fn invariants_hold_for_any_sequence(ops in proptest::collection::vec(op_strategy(), 1..60)) {
        let mut h = harness();
        let labeled = labeled(&h);
        for op in &ops {
            apply(&mut h, op);

            let dragging = h.controller.is_dragging();
            prop_assert_eq!(h.host.clock.pending_count(), usize::from(dragging));
            prop_assert_eq!(h.controller.is_auto_scrolling(), dragging);

            if let Some(rect) = h.selection_rect() {
                prop_assert!(dragging);
                prop_assert!(rect.width >= 0.0 && rect.height >= 0.0);
            }

            for id in h.selected_ids() {
                prop_assert!(labeled.contains(&id));
            }
        }
    }

    #[test]
    fn tiny_wiggles_never_select(
        x in 20.0f64..300.0,
        y in 20.0f64..220.0,
        wiggles in proptest::collection::vec((-7.0f64..7.0, -7.0f64..7.0), 1..20),
    ) {
        let mut h = harness();
        h.press(x, y);
        for (dx, dy) in wiggles {
            h.move_to(x + dx, y + dy);
            prop_assert!(!h.controller.is_dragging());
            prop_assert!(h.controller.selected().is_empty());
        }
        h.release();
        prop_assert!(h.controller.selected().is_empty());
        prop_assert_eq!(h.host.clock.requested_total(), 0);
    }
}

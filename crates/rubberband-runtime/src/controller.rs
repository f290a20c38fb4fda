#![forbid(unsafe_code)]

//! Drag-to-select controller.
//!
//! [`DragController`] turns pointer, keyboard and scroll notifications into a
//! live selection. It owns the gesture's drag vector, the scroll-adjustment
//! vector, the dragging flag, the committed [`SelectionMap`] and the
//! auto-scroll loop.
//!
//! # State Machine
//!
//! ```text
//! Idle -> Pending -> Dragging -> Idle
//!    \------> Idle (click: release below the activation threshold)
//! ```
//!
//! - **Pending**: the primary button is down but the gesture is still shorter
//!   than the activation threshold, so a plain click never flashes a
//!   selection rectangle.
//! - **Dragging**: the threshold was crossed. Every pointer move and every
//!   container scroll recomputes the selection, and the auto-scroll loop runs.
//!
//! # Invariants
//!
//! 1. Below the activation threshold pointer moves never set `is_dragging`
//!    and never touch the selection.
//! 2. Releasing without having dragged clears the selection.
//! 3. Escape returns to Idle with an empty selection and no pending frame.
//! 4. A new selection is committed only when it differs from the current one.
//! 5. The auto-scroll loop has a pending frame only while dragging.
//!
//! # Failure Modes
//!
//! - If the surface reports no metrics (unmounted), handlers do nothing and
//!   return [`DragEffect::Ignored`] with [`NoopReason::SurfaceUnavailable`].
//! - Items without an identifier are skipped during recomputation.

use std::fmt;

use rubberband_core::{
    DragVector, KeyCode, KeyDisposition, KeyScrollReset, Point, PointerEvent, Rect, SelectConfig,
    SelectionMap, intersects, mappings_equal,
};

use crate::autoscroll::{AutoScroller, FrameTick};
use crate::frame::{FrameHandle, SelectionHost};
use crate::surface::ScrollSurface;

/// Coarse lifecycle phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragPhase {
    Idle,
    Pending,
    Dragging,
}

/// Why a handler left the state untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoopReason {
    SurfaceUnavailable,
    NonPrimaryButton,
    NoActiveGesture,
    BelowActivationThreshold,
}

/// Outcome of one handler call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DragEffect {
    /// Pointer down accepted; gesture is Pending. `anchor` is
    /// container-relative.
    Armed { anchor: Point },
    Ignored(NoopReason),
    /// Pending -> Dragging.
    DragStarted { selection_changed: bool },
    DragUpdated { selection_changed: bool },
    Scrolled { selection_changed: bool },
    /// Released without dragging; selection cleared.
    Clicked,
    /// Released after dragging; selection kept.
    DragEnded { selected: usize },
    /// Escape: gesture and selection discarded.
    Canceled,
    /// A non-Escape key cleared the scroll-adjustment vector.
    ScrollReset,
    KeyIgnored,
}

impl DragEffect {
    /// Anchor of an [`Armed`](Self::Armed) effect.
    #[must_use]
    pub const fn anchor(&self) -> Option<Point> {
        match *self {
            Self::Armed { anchor } => Some(anchor),
            _ => None,
        }
    }

    /// Whether the committed selection changed.
    #[must_use]
    pub const fn selection_changed(&self) -> bool {
        matches!(
            self,
            Self::DragStarted {
                selection_changed: true
            } | Self::DragUpdated {
                selection_changed: true
            } | Self::Scrolled {
                selection_changed: true
            }
        )
    }
}

/// Rubber-band selection state machine for one interaction surface.
pub struct DragController {
    config: SelectConfig,
    drag_vector: Option<DragVector>,
    scroll_vector: Option<DragVector>,
    is_dragging: bool,
    selected: SelectionMap,
    auto_scroll: AutoScroller,
}

impl fmt::Debug for DragController {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DragController")
            .field("phase", &self.phase())
            .field("selected", &self.selected.len())
            .field("auto_scrolling", &self.auto_scroll.is_running())
            .finish()
    }
}

impl Default for DragController {
    fn default() -> Self {
        Self::new(SelectConfig::default())
    }
}

impl DragController {
    #[must_use]
    pub fn new(config: SelectConfig) -> Self {
        Self {
            config,
            drag_vector: None,
            scroll_vector: None,
            is_dragging: false,
            selected: SelectionMap::new(),
            auto_scroll: AutoScroller::new(),
        }
    }

    // -----------------------------------------------------------------------
    // Accessors
    // -----------------------------------------------------------------------

    #[must_use]
    pub fn phase(&self) -> DragPhase {
        if self.is_dragging {
            DragPhase::Dragging
        } else if self.drag_vector.is_some() {
            DragPhase::Pending
        } else {
            DragPhase::Idle
        }
    }

    #[inline]
    #[must_use]
    pub const fn is_dragging(&self) -> bool {
        self.is_dragging
    }

    /// The committed selection.
    #[inline]
    #[must_use]
    pub fn selected(&self) -> &SelectionMap {
        &self.selected
    }

    #[inline]
    #[must_use]
    pub const fn drag_vector(&self) -> Option<DragVector> {
        self.drag_vector
    }

    #[inline]
    #[must_use]
    pub const fn scroll_vector(&self) -> Option<DragVector> {
        self.scroll_vector
    }

    #[inline]
    #[must_use]
    pub fn config(&self) -> &SelectConfig {
        &self.config
    }

    /// Whether the auto-scroll loop has a frame pending.
    #[inline]
    #[must_use]
    pub const fn is_auto_scrolling(&self) -> bool {
        self.auto_scroll.is_running()
    }

    /// The rubber-band rectangle to render, in content coordinates.
    ///
    /// Derived on every call: only while dragging with both vectors present
    /// and a mounted surface. The far edge is capped to the content size.
    #[must_use]
    pub fn selection_rect<S: ScrollSurface + ?Sized>(&self, surface: &S) -> Option<Rect> {
        if !self.is_dragging {
            return None;
        }
        let drag = self.drag_vector?;
        let scroll = self.scroll_vector?;
        let metrics = surface.metrics()?;
        Some(
            drag.add(&scroll)
                .clamp_to(&metrics.content_bounds())
                .to_rect(),
        )
    }

    // -----------------------------------------------------------------------
    // Handlers
    // -----------------------------------------------------------------------

    /// Primary-button press inside the container.
    pub fn on_pointer_down<H: SelectionHost + ?Sized>(
        &mut self,
        host: &mut H,
        event: PointerEvent,
    ) -> DragEffect {
        if !event.button.is_primary() {
            return DragEffect::Ignored(NoopReason::NonPrimaryButton);
        }
        let Some(metrics) = host.metrics() else {
            return DragEffect::Ignored(NoopReason::SurfaceUnavailable);
        };

        let anchor = event.position.offset_from(metrics.viewport.origin());
        self.drag_vector = Some(DragVector::anchored_at(anchor));
        host.capture_pointer(event.pointer_id);
        self.scroll_vector = Some(DragVector::anchored_at(metrics.scroll));

        tracing::debug!(
            pointer_id = event.pointer_id,
            x = anchor.x,
            y = anchor.y,
            "gesture armed"
        );
        DragEffect::Armed { anchor }
    }

    /// Pointer moved (while captured) to `position` in viewport coordinates.
    pub fn on_pointer_move<H: SelectionHost + ?Sized>(
        &mut self,
        host: &mut H,
        position: Point,
    ) -> DragEffect {
        let (Some(drag), Some(scroll)) = (self.drag_vector, self.scroll_vector) else {
            return DragEffect::Ignored(NoopReason::NoActiveGesture);
        };
        let Some(metrics) = host.metrics() else {
            return DragEffect::Ignored(NoopReason::SurfaceUnavailable);
        };

        let next = drag.with_terminal(position.offset_from(metrics.viewport.origin()));
        if !self.is_dragging && next.diagonal_length() < self.config.activation_threshold {
            return DragEffect::Ignored(NoopReason::BelowActivationThreshold);
        }

        let started = !self.is_dragging;
        if started {
            self.is_dragging = true;
            host.focus();
            self.auto_scroll.start(host);
            tracing::debug!(
                length = next.diagonal_length(),
                threshold = self.config.activation_threshold,
                "drag started"
            );
        }

        self.drag_vector = Some(next);
        let selection_changed = self.update_selection(&*host, &next, &scroll);

        if started {
            DragEffect::DragStarted { selection_changed }
        } else {
            DragEffect::DragUpdated { selection_changed }
        }
    }

    /// The container scrolled to `offsets`, whatever caused it.
    pub fn on_scroll<H: SelectionHost + ?Sized>(
        &mut self,
        host: &mut H,
        offsets: Point,
    ) -> DragEffect {
        let (Some(drag), Some(scroll)) = (self.drag_vector, self.scroll_vector) else {
            return DragEffect::Ignored(NoopReason::NoActiveGesture);
        };
        if host.metrics().is_none() {
            return DragEffect::Ignored(NoopReason::SurfaceUnavailable);
        }

        let next = scroll.with_terminal(offsets);
        self.scroll_vector = Some(next);
        let selection_changed = self.update_selection(&*host, &drag, &next);
        DragEffect::Scrolled { selection_changed }
    }

    /// Pointer released.
    pub fn on_pointer_up<H: SelectionHost + ?Sized>(&mut self, host: &mut H) -> DragEffect {
        let effect = if self.is_dragging {
            self.drag_vector = None;
            self.is_dragging = false;
            self.auto_scroll.stop(host);
            tracing::debug!(selected = self.selected.len(), "drag ended");
            DragEffect::DragEnded {
                selected: self.selected.len(),
            }
        } else {
            self.selected = SelectionMap::new();
            self.drag_vector = None;
            tracing::debug!("click cleared selection");
            DragEffect::Clicked
        };
        self.scroll_vector = None;
        effect
    }

    /// Key pressed while the container has focus.
    pub fn on_key_down<H: SelectionHost + ?Sized>(
        &mut self,
        host: &mut H,
        key: KeyCode,
    ) -> (KeyDisposition, DragEffect) {
        if key == KeyCode::Escape {
            self.selected = SelectionMap::new();
            self.drag_vector = None;
            self.scroll_vector = None;
            self.is_dragging = false;
            self.auto_scroll.stop(host);
            tracing::debug!("gesture canceled");
            return (KeyDisposition::PreventDefault, DragEffect::Canceled);
        }

        if self.config.key_scroll_reset == KeyScrollReset::AnyKey
            && self.scroll_vector.take().is_some()
        {
            tracing::debug!(key = ?key, "key press reset scroll adjustment");
            return (KeyDisposition::PassThrough, DragEffect::ScrollReset);
        }

        (KeyDisposition::PassThrough, DragEffect::KeyIgnored)
    }

    /// A frame requested by the auto-scroll loop fired.
    pub fn on_animation_frame<H: SelectionHost + ?Sized>(
        &mut self,
        host: &mut H,
        handle: FrameHandle,
    ) -> FrameTick {
        self.auto_scroll
            .on_frame(handle, self.drag_vector.as_ref(), &self.config, host)
    }

    /// The surface is going away: revoke the pending frame and reset to Idle.
    pub fn teardown<H: SelectionHost + ?Sized>(&mut self, host: &mut H) {
        self.auto_scroll.stop(host);
        self.drag_vector = None;
        self.scroll_vector = None;
        self.is_dragging = false;
        self.selected = SelectionMap::new();
        tracing::debug!("controller torn down");
    }

    // -----------------------------------------------------------------------
    // Selection
    // -----------------------------------------------------------------------

    /// Rebuild the selection for `(drag, scroll)` and commit it if it differs.
    fn update_selection<S: ScrollSurface + ?Sized>(
        &mut self,
        surface: &S,
        drag: &DragVector,
        scroll: &DragVector,
    ) -> bool {
        let Some(metrics) = surface.metrics() else {
            return false;
        };

        let combined = drag.add(scroll).to_rect();
        let mut next = SelectionMap::new();
        let mut candidates = 0usize;
        surface.for_each_item(&mut |id, rect| {
            candidates += 1;
            if !intersects(&combined, &metrics.to_content(rect)) {
                return;
            }
            if let Some(id) = id {
                next.select(id.clone());
            }
        });

        let changed = !mappings_equal(&next, &self.selected);
        tracing::trace!(
            candidates,
            selected = next.len(),
            changed,
            "selection recomputed"
        );
        if changed {
            self.selected = next;
        }
        changed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frame::FrameScheduler;
    use crate::surface::SurfaceMetrics;
    use rubberband_core::{ItemId, PointerButton, Size};

    /// Minimal host: a 400x300 viewport at (100, 50) over 400x1000 content.
    #[derive(Default)]
    struct FakeHost {
        mounted: bool,
        scroll: Point,
        items: Vec<(Option<ItemId>, Rect)>,
        focus_calls: usize,
        captured: Option<u32>,
        scrolls: Vec<(f64, f64)>,
        next_frame: u64,
        pending: Vec<FrameHandle>,
    }

    impl FakeHost {
        fn new() -> Self {
            Self {
                mounted: true,
                // content-space A = (0,0,50,50), B = (100,100,50,50)
                items: vec![
                    (Some(ItemId::from("a")), Rect::new(100.0, 50.0, 50.0, 50.0)),
                    (Some(ItemId::from("b")), Rect::new(200.0, 150.0, 50.0, 50.0)),
                ],
                ..Self::default()
            }
        }

        fn at(x: f64, y: f64) -> Point {
            Point::new(100.0 + x, 50.0 + y)
        }
    }

    impl ScrollSurface for FakeHost {
        fn metrics(&self) -> Option<SurfaceMetrics> {
            self.mounted.then(|| SurfaceMetrics {
                viewport: Rect::new(100.0, 50.0, 400.0, 300.0),
                scroll: self.scroll,
                content: Size::new(400.0, 1_000.0),
            })
        }

        fn for_each_item(&self, visit: &mut dyn FnMut(Option<&ItemId>, Rect)) {
            for (id, rect) in &self.items {
                visit(id.as_ref(), rect.translate(-self.scroll.x, -self.scroll.y));
            }
        }

        fn scroll_by(&mut self, dx: f64, dy: f64) {
            self.scrolls.push((dx, dy));
        }

        fn focus(&mut self) {
            self.focus_calls += 1;
        }

        fn capture_pointer(&mut self, pointer_id: u32) {
            self.captured = Some(pointer_id);
        }
    }

    impl FrameScheduler for FakeHost {
        fn request_frame(&mut self) -> FrameHandle {
            self.next_frame += 1;
            let handle = FrameHandle(self.next_frame);
            self.pending.push(handle);
            handle
        }

        fn cancel_frame(&mut self, handle: FrameHandle) {
            self.pending.retain(|h| *h != handle);
        }
    }

    fn down(ctrl: &mut DragController, host: &mut FakeHost, x: f64, y: f64) -> DragEffect {
        ctrl.on_pointer_down(host, PointerEvent::primary(FakeHost::at(x, y)))
    }

    #[test]
    fn pointer_down_arms_gesture() {
        let mut host = FakeHost::new();
        let mut ctrl = DragController::default();
        let effect = down(&mut ctrl, &mut host, 10.0, 10.0);

        assert_eq!(effect.anchor(), Some(Point::new(10.0, 10.0)));
        assert_eq!(ctrl.phase(), DragPhase::Pending);
        assert_eq!(host.captured, Some(1));
        assert_eq!(
            ctrl.drag_vector(),
            Some(DragVector::new(10.0, 10.0, 0.0, 0.0))
        );
        assert_eq!(ctrl.scroll_vector(), Some(DragVector::default()));
        assert!(ctrl.selection_rect(&host).is_none());
    }

    #[test]
    fn non_primary_button_is_ignored() {
        let mut host = FakeHost::new();
        let mut ctrl = DragController::default();
        let event = PointerEvent::primary(FakeHost::at(10.0, 10.0))
            .with_button(PointerButton::Secondary);
        assert_eq!(
            ctrl.on_pointer_down(&mut host, event),
            DragEffect::Ignored(NoopReason::NonPrimaryButton)
        );
        assert_eq!(ctrl.phase(), DragPhase::Idle);
        assert_eq!(host.captured, None);
    }

    #[test]
    fn small_move_stays_pending() {
        let mut host = FakeHost::new();
        let mut ctrl = DragController::default();
        down(&mut ctrl, &mut host, 10.0, 10.0);

        let effect = ctrl.on_pointer_move(&mut host, FakeHost::at(15.0, 15.0));
        assert_eq!(
            effect,
            DragEffect::Ignored(NoopReason::BelowActivationThreshold)
        );
        assert!(!ctrl.is_dragging());
        assert!(ctrl.selected().is_empty());
        assert_eq!(host.focus_calls, 0);
        assert!(host.pending.is_empty());
        // The committed vector is untouched.
        assert_eq!(
            ctrl.drag_vector(),
            Some(DragVector::new(10.0, 10.0, 0.0, 0.0))
        );
    }

    #[test]
    fn crossing_threshold_starts_drag_and_selects() {
        let mut host = FakeHost::new();
        let mut ctrl = DragController::default();
        down(&mut ctrl, &mut host, 10.0, 10.0);

        let effect = ctrl.on_pointer_move(&mut host, FakeHost::at(40.0, 40.0));
        assert_eq!(
            effect,
            DragEffect::DragStarted {
                selection_changed: true
            }
        );
        assert_eq!(ctrl.phase(), DragPhase::Dragging);
        assert_eq!(host.focus_calls, 1);
        assert!(ctrl.is_auto_scrolling());
        assert_eq!(ctrl.selected().sorted_ids(), vec![ItemId::from("a")]);
        assert_eq!(
            ctrl.selection_rect(&host),
            Some(Rect::new(10.0, 10.0, 30.0, 30.0))
        );

        // Further moves update, without refocusing.
        let effect = ctrl.on_pointer_move(&mut host, FakeHost::at(120.0, 120.0));
        assert_eq!(
            effect,
            DragEffect::DragUpdated {
                selection_changed: true
            }
        );
        assert_eq!(host.focus_calls, 1);
        assert_eq!(
            ctrl.selected().sorted_ids(),
            vec![ItemId::from("a"), ItemId::from("b")]
        );

        // Same selection again: nothing committed.
        let effect = ctrl.on_pointer_move(&mut host, FakeHost::at(125.0, 125.0));
        assert!(!effect.selection_changed());
    }

    #[test]
    fn release_after_drag_keeps_selection() {
        let mut host = FakeHost::new();
        let mut ctrl = DragController::default();
        down(&mut ctrl, &mut host, 10.0, 10.0);
        ctrl.on_pointer_move(&mut host, FakeHost::at(40.0, 40.0));

        assert_eq!(
            ctrl.on_pointer_up(&mut host),
            DragEffect::DragEnded { selected: 1 }
        );
        assert_eq!(ctrl.phase(), DragPhase::Idle);
        assert_eq!(ctrl.selected().len(), 1);
        assert!(ctrl.scroll_vector().is_none());
        assert!(!ctrl.is_auto_scrolling());
        assert!(host.pending.is_empty());
    }

    #[test]
    fn click_clears_previous_selection() {
        let mut host = FakeHost::new();
        let mut ctrl = DragController::default();
        down(&mut ctrl, &mut host, 10.0, 10.0);
        ctrl.on_pointer_move(&mut host, FakeHost::at(40.0, 40.0));
        ctrl.on_pointer_up(&mut host);
        assert!(!ctrl.selected().is_empty());

        down(&mut ctrl, &mut host, 300.0, 250.0);
        assert_eq!(ctrl.on_pointer_up(&mut host), DragEffect::Clicked);
        assert!(ctrl.selected().is_empty());
        assert_eq!(ctrl.phase(), DragPhase::Idle);
    }

    #[test]
    fn escape_cancels_everything() {
        let mut host = FakeHost::new();
        let mut ctrl = DragController::default();
        down(&mut ctrl, &mut host, 10.0, 10.0);
        ctrl.on_pointer_move(&mut host, FakeHost::at(40.0, 40.0));

        let (disposition, effect) = ctrl.on_key_down(&mut host, KeyCode::Escape);
        assert_eq!(disposition, KeyDisposition::PreventDefault);
        assert_eq!(effect, DragEffect::Canceled);
        assert_eq!(ctrl.phase(), DragPhase::Idle);
        assert!(ctrl.selected().is_empty());
        assert!(ctrl.drag_vector().is_none());
        assert!(ctrl.scroll_vector().is_none());
        assert!(host.pending.is_empty());

        // Moves after cancel are ignored until the next press.
        assert_eq!(
            ctrl.on_pointer_move(&mut host, FakeHost::at(120.0, 120.0)),
            DragEffect::Ignored(NoopReason::NoActiveGesture)
        );
    }

    #[test]
    fn any_key_resets_scroll_vector_by_default() {
        let mut host = FakeHost::new();
        let mut ctrl = DragController::default();
        down(&mut ctrl, &mut host, 10.0, 10.0);
        ctrl.on_pointer_move(&mut host, FakeHost::at(40.0, 40.0));

        let (disposition, effect) = ctrl.on_key_down(&mut host, KeyCode::Char('a'));
        assert_eq!(disposition, KeyDisposition::PassThrough);
        assert_eq!(effect, DragEffect::ScrollReset);
        assert!(ctrl.scroll_vector().is_none());
        assert!(ctrl.selection_rect(&host).is_none());
        assert_eq!(
            ctrl.on_pointer_move(&mut host, FakeHost::at(120.0, 120.0)),
            DragEffect::Ignored(NoopReason::NoActiveGesture)
        );
    }

    #[test]
    fn escape_only_policy_leaves_gesture_alone() {
        let mut host = FakeHost::new();
        let config = SelectConfig::default().with_key_scroll_reset(KeyScrollReset::EscapeOnly);
        let mut ctrl = DragController::new(config);
        down(&mut ctrl, &mut host, 10.0, 10.0);
        ctrl.on_pointer_move(&mut host, FakeHost::at(40.0, 40.0));

        let (_, effect) = ctrl.on_key_down(&mut host, KeyCode::Enter);
        assert_eq!(effect, DragEffect::KeyIgnored);
        assert!(ctrl.scroll_vector().is_some());
        assert!(ctrl.selection_rect(&host).is_some());
    }

    #[test]
    fn scroll_recomputes_with_content_offset() {
        let mut host = FakeHost::new();
        let mut ctrl = DragController::default();
        down(&mut ctrl, &mut host, 10.0, 10.0);
        ctrl.on_pointer_move(&mut host, FakeHost::at(40.0, 40.0));

        host.scroll = Point::new(0.0, 30.0);
        let effect = ctrl.on_scroll(&mut host, Point::new(0.0, 30.0));
        assert_eq!(
            effect,
            DragEffect::Scrolled {
                selection_changed: false
            }
        );
        assert_eq!(
            ctrl.scroll_vector(),
            Some(DragVector::new(0.0, 0.0, 0.0, 30.0))
        );
        assert_eq!(
            ctrl.selection_rect(&host),
            Some(Rect::new(10.0, 10.0, 30.0, 60.0))
        );
    }

    #[test]
    fn unmounted_surface_is_a_noop() {
        let mut host = FakeHost::new();
        let mut ctrl = DragController::default();
        down(&mut ctrl, &mut host, 10.0, 10.0);
        host.mounted = false;

        assert_eq!(
            ctrl.on_pointer_move(&mut host, FakeHost::at(40.0, 40.0)),
            DragEffect::Ignored(NoopReason::SurfaceUnavailable)
        );
        assert_eq!(
            ctrl.on_scroll(&mut host, Point::new(0.0, 10.0)),
            DragEffect::Ignored(NoopReason::SurfaceUnavailable)
        );
        assert!(ctrl.selected().is_empty());
    }

    #[test]
    fn malformed_ids_are_skipped() {
        let mut host = FakeHost::new();
        host.items.push((None, Rect::new(110.0, 60.0, 10.0, 10.0)));
        let mut ctrl = DragController::default();
        down(&mut ctrl, &mut host, 10.0, 10.0);
        ctrl.on_pointer_move(&mut host, FakeHost::at(40.0, 40.0));
        assert_eq!(ctrl.selected().sorted_ids(), vec![ItemId::from("a")]);
    }

    #[test]
    fn animation_frame_scrolls_near_edge_and_reschedules() {
        let mut host = FakeHost::new();
        let mut ctrl = DragController::default();
        down(&mut ctrl, &mut host, 200.0, 150.0);
        ctrl.on_pointer_move(&mut host, FakeHost::at(200.0, 295.0));

        let handle = host.pending[0];
        let tick = ctrl.on_animation_frame(&mut host, handle);
        assert!(matches!(tick, FrameTick::Scrolled(step) if step.dy == 15.0 && step.dx == 0.0));
        assert_eq!(host.scrolls, vec![(0.0, 15.0)]);
        assert!(ctrl.is_auto_scrolling());

        // The consumed handle is now stale.
        assert_eq!(ctrl.on_animation_frame(&mut host, handle), FrameTick::Stale);
    }

    #[test]
    fn teardown_revokes_pending_frame() {
        let mut host = FakeHost::new();
        let mut ctrl = DragController::default();
        down(&mut ctrl, &mut host, 10.0, 10.0);
        ctrl.on_pointer_move(&mut host, FakeHost::at(40.0, 40.0));
        assert_eq!(host.pending.len(), 1);

        ctrl.teardown(&mut host);
        assert!(host.pending.is_empty());
        assert_eq!(ctrl.phase(), DragPhase::Idle);
        assert!(ctrl.selected().is_empty());
    }
}

#![forbid(unsafe_code)]

//! In-memory host for driving a [`DragController`] without a UI toolkit.
//!
//! [`SimulatedSurface`] models one scrollable container: a viewport rectangle
//! placed somewhere on screen, a content size, a scroll offset, and items laid
//! out in content space. [`ManualFrameClock`] hands out frame handles and
//! only fires them when the test says so. [`Harness`] wires both to a
//! controller and forwards scroll notifications the way a real host's scroll
//! listener would.
//!
//! Points passed to the `Harness` input helpers are container-relative; the
//! harness adds the viewport origin before dispatching, so tests can reason
//! in content coordinates while the controller still sees screen positions.

use std::collections::{BTreeSet, VecDeque};

use rubberband_core::{
    ItemId, KeyCode, KeyDisposition, Point, PointerButton, PointerEvent, Rect, SelectConfig, Size,
};
use rubberband_runtime::{
    DragController, DragEffect, FrameHandle, FrameScheduler, FrameTick, ScrollSurface,
    SurfaceMetrics,
};

// ---------------------------------------------------------------------------
// Surface
// ---------------------------------------------------------------------------

/// A command the engine issued against the surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SurfaceCommand {
    ScrollBy { dx: f64, dy: f64 },
    Focus,
    CapturePointer(u32),
}

/// An item in content coordinates.
#[derive(Debug, Clone, PartialEq)]
pub struct SimItem {
    pub id: Option<ItemId>,
    pub rect: Rect,
}

/// A scrollable container held entirely in memory.
#[derive(Debug, Clone)]
pub struct SimulatedSurface {
    viewport: Rect,
    content: Size,
    scroll: Point,
    items: Vec<SimItem>,
    mounted: bool,
    commands: Vec<SurfaceCommand>,
    scroll_events: VecDeque<Point>,
}

impl SimulatedSurface {
    /// An empty container. `viewport` is its on-screen rectangle.
    #[must_use]
    pub fn new(viewport: Rect, content: Size) -> Self {
        Self {
            viewport,
            content,
            scroll: Point::default(),
            items: Vec::new(),
            mounted: true,
            commands: Vec::new(),
            scroll_events: VecDeque::new(),
        }
    }

    /// A `columns x rows` grid of square cells named `item-{index}`.
    ///
    /// Each cell is `cell` pixels wide with `gap` pixels between cells and
    /// around the edge. The content grows to fit the grid.
    #[must_use]
    pub fn grid(viewport: Rect, columns: u32, rows: u32, cell: f64, gap: f64) -> Self {
        let width = (f64::from(columns) * (cell + gap) + gap).max(viewport.width);
        let height = (f64::from(rows) * (cell + gap) + gap).max(viewport.height);
        let mut surface = Self::new(viewport, Size::new(width, height));
        for row in 0..rows {
            for col in 0..columns {
                let index = u64::from(row) * u64::from(columns) + u64::from(col);
                let rect = Rect::new(
                    gap + f64::from(col) * (cell + gap),
                    gap + f64::from(row) * (cell + gap),
                    cell,
                    cell,
                );
                surface.items.push(SimItem {
                    id: Some(ItemId::Name(format!("item-{index}"))),
                    rect,
                });
            }
        }
        surface
    }

    #[must_use]
    pub fn with_item(mut self, id: impl Into<ItemId>, rect: Rect) -> Self {
        self.items.push(SimItem {
            id: Some(id.into()),
            rect,
        });
        self
    }

    /// Add an item with no usable identifier.
    #[must_use]
    pub fn with_unlabeled_item(mut self, rect: Rect) -> Self {
        self.items.push(SimItem { id: None, rect });
        self
    }

    #[must_use]
    pub const fn viewport(&self) -> Rect {
        self.viewport
    }

    #[must_use]
    pub const fn scroll(&self) -> Point {
        self.scroll
    }

    #[must_use]
    pub fn items(&self) -> &[SimItem] {
        &self.items
    }

    #[must_use]
    pub const fn is_mounted(&self) -> bool {
        self.mounted
    }

    pub fn set_mounted(&mut self, mounted: bool) {
        self.mounted = mounted;
    }

    /// Every command issued so far, oldest first.
    #[must_use]
    pub fn commands(&self) -> &[SurfaceCommand] {
        &self.commands
    }

    /// Count of `Focus` commands received.
    #[must_use]
    pub fn focus_count(&self) -> usize {
        self.commands
            .iter()
            .filter(|c| matches!(c, SurfaceCommand::Focus))
            .count()
    }

    /// Largest scroll offset the content allows on each axis.
    #[must_use]
    pub fn max_scroll(&self) -> Point {
        Point::new(
            (self.content.width - self.viewport.width).max(0.0),
            (self.content.height - self.viewport.height).max(0.0),
        )
    }

    /// Move the scroll offset to `target` (clamped). A change queues a scroll
    /// notification.
    pub fn scroll_to(&mut self, target: Point) {
        let max = self.max_scroll();
        let next = Point::new(
            target.x.max(0.0).min(max.x),
            target.y.max(0.0).min(max.y),
        );
        if next != self.scroll {
            self.scroll = next;
            self.scroll_events.push_back(next);
        }
    }

    /// Drain pending scroll notifications.
    pub fn take_scroll_events(&mut self) -> Vec<Point> {
        self.scroll_events.drain(..).collect()
    }
}

impl ScrollSurface for SimulatedSurface {
    fn metrics(&self) -> Option<SurfaceMetrics> {
        self.mounted.then_some(SurfaceMetrics {
            viewport: self.viewport,
            scroll: self.scroll,
            content: self.content,
        })
    }

    fn for_each_item(&self, visit: &mut dyn FnMut(Option<&ItemId>, Rect)) {
        let dx = self.viewport.x - self.scroll.x;
        let dy = self.viewport.y - self.scroll.y;
        for item in &self.items {
            visit(item.id.as_ref(), item.rect.translate(dx, dy));
        }
    }

    fn scroll_by(&mut self, dx: f64, dy: f64) {
        self.commands.push(SurfaceCommand::ScrollBy { dx, dy });
        self.scroll_to(Point::new(self.scroll.x + dx, self.scroll.y + dy));
    }

    fn focus(&mut self) {
        self.commands.push(SurfaceCommand::Focus);
    }

    fn capture_pointer(&mut self, pointer_id: u32) {
        self.commands.push(SurfaceCommand::CapturePointer(pointer_id));
    }
}

// ---------------------------------------------------------------------------
// Frame clock
// ---------------------------------------------------------------------------

/// Frame source that only advances when told to.
#[derive(Debug, Default, Clone)]
pub struct ManualFrameClock {
    next_id: u64,
    pending: BTreeSet<FrameHandle>,
    requested: u64,
    canceled: u64,
}

impl ManualFrameClock {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Handles requested and not yet fired or canceled.
    #[must_use]
    pub fn pending(&self) -> Vec<FrameHandle> {
        self.pending.iter().copied().collect()
    }

    #[must_use]
    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }

    #[must_use]
    pub const fn requested_total(&self) -> u64 {
        self.requested
    }

    #[must_use]
    pub const fn canceled_total(&self) -> u64 {
        self.canceled
    }

    /// Fire the current frame: drain every pending handle.
    pub fn take_due(&mut self) -> Vec<FrameHandle> {
        std::mem::take(&mut self.pending).into_iter().collect()
    }
}

impl FrameScheduler for ManualFrameClock {
    fn request_frame(&mut self) -> FrameHandle {
        self.next_id += 1;
        self.requested += 1;
        let handle = FrameHandle(self.next_id);
        self.pending.insert(handle);
        handle
    }

    fn cancel_frame(&mut self, handle: FrameHandle) {
        if self.pending.remove(&handle) {
            self.canceled += 1;
        }
    }
}

// ---------------------------------------------------------------------------
// Host
// ---------------------------------------------------------------------------

/// Surface plus frame clock, the pair a controller needs.
#[derive(Debug, Clone)]
pub struct SimHost {
    pub surface: SimulatedSurface,
    pub clock: ManualFrameClock,
}

impl SimHost {
    #[must_use]
    pub fn new(surface: SimulatedSurface) -> Self {
        Self {
            surface,
            clock: ManualFrameClock::new(),
        }
    }
}

impl ScrollSurface for SimHost {
    fn metrics(&self) -> Option<SurfaceMetrics> {
        self.surface.metrics()
    }

    fn for_each_item(&self, visit: &mut dyn FnMut(Option<&ItemId>, Rect)) {
        self.surface.for_each_item(visit);
    }

    fn scroll_by(&mut self, dx: f64, dy: f64) {
        self.surface.scroll_by(dx, dy);
    }

    fn focus(&mut self) {
        self.surface.focus();
    }

    fn capture_pointer(&mut self, pointer_id: u32) {
        self.surface.capture_pointer(pointer_id);
    }
}

impl FrameScheduler for SimHost {
    fn request_frame(&mut self) -> FrameHandle {
        self.clock.request_frame()
    }

    fn cancel_frame(&mut self, handle: FrameHandle) {
        self.clock.cancel_frame(handle);
    }
}

// ---------------------------------------------------------------------------
// Harness
// ---------------------------------------------------------------------------

/// A controller bound to a simulated host.
#[derive(Debug)]
pub struct Harness {
    pub host: SimHost,
    pub controller: DragController,
}

impl Harness {
    #[must_use]
    pub fn new(surface: SimulatedSurface, config: SelectConfig) -> Self {
        Self {
            host: SimHost::new(surface),
            controller: DragController::new(config),
        }
    }

    fn screen(&self, x: f64, y: f64) -> Point {
        let origin = self.host.surface.viewport().origin();
        Point::new(origin.x + x, origin.y + y)
    }

    /// Primary-button press at container-relative `(x, y)`.
    pub fn press(&mut self, x: f64, y: f64) -> DragEffect {
        self.press_with(PointerButton::Primary, x, y)
    }

    pub fn press_with(&mut self, button: PointerButton, x: f64, y: f64) -> DragEffect {
        let event = PointerEvent::primary(self.screen(x, y)).with_button(button);
        self.controller.on_pointer_down(&mut self.host, event)
    }

    pub fn move_to(&mut self, x: f64, y: f64) -> DragEffect {
        let position = self.screen(x, y);
        self.controller.on_pointer_move(&mut self.host, position)
    }

    pub fn release(&mut self) -> DragEffect {
        self.controller.on_pointer_up(&mut self.host)
    }

    pub fn key(&mut self, key: KeyCode) -> (KeyDisposition, DragEffect) {
        self.controller.on_key_down(&mut self.host, key)
    }

    /// User-initiated scroll (wheel, scrollbar): move the container and
    /// deliver the resulting notification.
    pub fn scroll_to(&mut self, x: f64, y: f64) -> Vec<DragEffect> {
        self.host.surface.scroll_to(Point::new(x, y));
        self.flush_scroll_events()
    }

    /// Deliver queued scroll notifications to the controller.
    pub fn flush_scroll_events(&mut self) -> Vec<DragEffect> {
        self.host
            .surface
            .take_scroll_events()
            .into_iter()
            .map(|offsets| self.controller.on_scroll(&mut self.host, offsets))
            .collect()
    }

    /// Fire one frame: run every due handle, then deliver the scroll
    /// notifications the frame produced.
    pub fn advance_frame(&mut self) -> Vec<FrameTick> {
        let due = self.host.clock.take_due();
        let ticks = due
            .into_iter()
            .map(|handle| self.controller.on_animation_frame(&mut self.host, handle))
            .collect();
        self.flush_scroll_events();
        ticks
    }

    /// Fire `count` frames.
    pub fn advance_frames(&mut self, count: usize) -> Vec<FrameTick> {
        (0..count).flat_map(|_| self.advance_frame()).collect()
    }

    /// Tear the controller down and unmount the surface.
    pub fn unmount(&mut self) {
        self.controller.teardown(&mut self.host);
        self.host.surface.set_mounted(false);
    }

    /// Currently selected identifiers, sorted.
    #[must_use]
    pub fn selected_ids(&self) -> Vec<ItemId> {
        self.controller.selected().sorted_ids()
    }

    #[must_use]
    pub fn selection_rect(&self) -> Option<Rect> {
        self.controller.selection_rect(&self.host)
    }
}

//! Drag gesture tracking and click suppression.
//!
//! # Design
//! - A gesture is either idle or dragging; stray moves and releases are no-ops.
//! - Releasing a drag that moved arms a one-shot flag that swallows the click
//!   the browser dispatches at the end of the same gesture. Any other
//!   interaction clears it.

/// Phase of the scrollbar drag gesture.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum GesturePhase {
    /// No pointer is held on the thumb.
    #[default]
    Idle,
    /// The thumb is held.
    Dragging {
        /// Whether at least one pointer move was applied.
        moved: bool,
    },
}

/// How a gesture finished.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GestureEnd {
    /// Pointer released normally.
    Released,
    /// Gesture interrupted by the host (touch cancel, teardown).
    Cancelled,
}

/// Drag state plus the click-suppression flag.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DragTracker {
    phase: GesturePhase,
    suppress_next_click: bool,
}

impl DragTracker {
    /// Current gesture phase.
    #[must_use]
    pub const fn phase(&self) -> GesturePhase {
        self.phase
    }

    /// Whether a drag is in progress.
    #[must_use]
    pub const fn is_dragging(&self) -> bool {
        matches!(self.phase, GesturePhase::Dragging { .. })
    }

    /// Whether the next track click will be swallowed.
    #[must_use]
    pub const fn suppresses_next_click(&self) -> bool {
        self.suppress_next_click
    }

    /// Start a drag. Returns `false` when one is already active.
    pub fn begin(&mut self) -> bool {
        if self.is_dragging() {
            return false;
        }
        self.phase = GesturePhase::Dragging { moved: false };
        self.suppress_next_click = false;
        true
    }

    /// Record a pointer move. Returns `false` without an active drag.
    pub fn record_move(&mut self) -> bool {
        match &mut self.phase {
            GesturePhase::Dragging { moved } => {
                *moved = true;
                true
            }
            GesturePhase::Idle => false,
        }
    }

    /// Finish the drag. Returns `false` without an active drag.
    pub fn finish(&mut self, end: GestureEnd) -> bool {
        let GesturePhase::Dragging { moved } = self.phase else {
            return false;
        };
        self.phase = GesturePhase::Idle;
        self.suppress_next_click = moved && end == GestureEnd::Released;
        true
    }

    /// Consume the suppression flag; `true` means the click must be ignored.
    pub fn take_click_suppression(&mut self) -> bool {
        std::mem::take(&mut self.suppress_next_click)
    }

    /// Forget a pending suppression without touching the gesture phase.
    pub const fn clear_click_suppression(&mut self) {
        self.suppress_next_click = false;
    }

    /// Drop any gesture and pending suppression.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

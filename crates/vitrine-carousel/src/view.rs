//! Declarative render output of the carousel.
//!
//! # Design
//! - The view is a pure function of controller state; equal state yields an
//!   equal view.
//! - The view owns plain data so hosts can diff it, serialise it or hand it to
//!   a component framework.

use serde::Serialize;

use crate::geometry::{ThumbGeometry, thumb_geometry};
use crate::layout::CarouselLayout;
use crate::policy::BoundaryPolicy;

/// Position of an image slot.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SlotKind {
    /// Image before the current one.
    Previous,
    /// Current image.
    Center,
    /// Image after the current one.
    Next,
}

impl SlotKind {
    /// Slots in display order.
    #[must_use]
    pub const fn all() -> [Self; 3] {
        [Self::Previous, Self::Center, Self::Next]
    }

    /// Whether the slot flanks the center image.
    #[must_use]
    pub const fn is_side(self) -> bool {
        !matches!(self, Self::Center)
    }
}

/// Image shown in a slot.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SlotImage {
    /// Index of the image in the loaded list.
    pub index: usize,
    /// Media reference.
    pub src: String,
    /// Alternate text.
    pub alt: String,
}

/// One of the three rendered positions.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Slot {
    /// Slot position tag.
    pub kind: SlotKind,
    /// Image to show; `None` renders an empty slot.
    pub image: Option<SlotImage>,
    /// Whether the layout shows this slot at all.
    pub visible: bool,
}

/// Direction of a paging control.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// Towards lower indices.
    Previous,
    /// Towards higher indices.
    Next,
}

/// Paging control state.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Control {
    /// Paging direction.
    pub direction: Direction,
    /// Whether the control is inert at the current index.
    pub disabled: bool,
}

/// Scrollbar thumb state.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Scrollbar {
    /// Thumb size and offset.
    pub thumb: ThumbGeometry,
    /// Whether the thumb animates between positions.
    pub animated: bool,
}

/// Full carousel render description.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct CarouselView {
    /// Current index.
    pub index: usize,
    /// Number of loaded images.
    pub len: usize,
    /// Active layout.
    pub layout: CarouselLayout,
    /// Previous, center and next slots, in that order.
    pub slots: [Slot; 3],
    /// Control for [`Direction::Previous`].
    pub previous: Control,
    /// Control for [`Direction::Next`].
    pub next: Control,
    /// Scrollbar state.
    pub scrollbar: Scrollbar,
}

impl CarouselView {
    /// Slot with the given position.
    #[must_use]
    pub fn slot(&self, kind: SlotKind) -> &Slot {
        match kind {
            SlotKind::Previous => &self.slots[0],
            SlotKind::Center => &self.slots[1],
            SlotKind::Next => &self.slots[2],
        }
    }

    /// Media reference shown in the given slot, if any.
    #[must_use]
    pub fn src(&self, kind: SlotKind) -> Option<&str> {
        self.slot(kind).image.as_ref().map(|image| image.src.as_str())
    }
}

/// Cheap thumb-only update emitted while dragging.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct ThumbPreview {
    /// Index the thumb now represents.
    pub index: usize,
    /// Thumb size and offset.
    pub thumb: ThumbGeometry,
    /// Whether the thumb animates between positions.
    pub animated: bool,
}

/// Inputs for [`render_view`].
#[derive(Clone, Copy, Debug)]
pub struct RenderInput<'a> {
    /// Loaded images.
    pub images: &'a [String],
    /// Current index.
    pub index: usize,
    /// Boundary policy.
    pub policy: BoundaryPolicy,
    /// Minimum thumb width in percent.
    pub min_thumb_percent: f64,
    /// Active layout.
    pub layout: CarouselLayout,
    /// Whether a drag is in progress.
    pub dragging: bool,
}

/// Build the view for the supplied state, `None` when no images are loaded.
#[must_use]
pub fn render_view(input: &RenderInput<'_>) -> Option<CarouselView> {
    let len = input.images.len();
    let index = input.index.min(len.checked_sub(1)?);
    let thumb = thumb_geometry(len, index, input.min_thumb_percent)?;

    let slot = |kind: SlotKind| {
        let target = match kind {
            SlotKind::Previous => input.policy.before(index, len),
            SlotKind::Center => Some(index),
            SlotKind::Next => input.policy.after(index, len),
        };
        Slot {
            kind,
            image: target.map(|target| SlotImage {
                index: target,
                src: input.images[target].clone(),
                alt: format!("Image {target}"),
            }),
            visible: !kind.is_side() || input.layout.shows_side_slots(),
        }
    };

    Some(CarouselView {
        index,
        len,
        layout: input.layout,
        slots: SlotKind::all().map(slot),
        previous: Control {
            direction: Direction::Previous,
            disabled: !input.policy.can_go_back(index, len),
        },
        next: Control {
            direction: Direction::Next,
            disabled: !input.policy.can_go_forward(index, len),
        },
        scrollbar: Scrollbar {
            thumb,
            animated: !input.dragging,
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn images(names: &[&str]) -> Vec<String> {
        names.iter().map(|name| (*name).to_string()).collect()
    }

    fn input(images: &[String], index: usize, policy: BoundaryPolicy) -> RenderInput<'_> {
        RenderInput {
            images,
            index,
            policy,
            min_thumb_percent: 10.0,
            layout: CarouselLayout::Wide,
            dragging: false,
        }
    }

    #[test]
    fn wrap_resolves_neighbours_at_edges() {
        let list = images(&["a", "b", "c", "d"]);
        let view = render_view(&input(&list, 0, BoundaryPolicy::Wrap)).expect("view");
        assert_eq!(view.src(SlotKind::Previous), Some("d"));
        assert_eq!(view.src(SlotKind::Center), Some("a"));
        assert_eq!(view.src(SlotKind::Next), Some("b"));
        assert!(!view.previous.disabled);
        assert!(!view.next.disabled);
        assert_eq!(
            view.slot(SlotKind::Previous).image.as_ref().map(|img| img.alt.as_str()),
            Some("Image 3")
        );
    }

    #[test]
    fn clamp_leaves_edge_slots_empty_and_disables_controls() {
        let list = images(&["a", "b", "c"]);
        let first = render_view(&input(&list, 0, BoundaryPolicy::Clamp)).expect("view");
        assert_eq!(first.src(SlotKind::Previous), None);
        assert!(first.previous.disabled);
        assert!(!first.next.disabled);

        let last = render_view(&input(&list, 2, BoundaryPolicy::Clamp)).expect("view");
        assert_eq!(last.src(SlotKind::Next), None);
        assert!(last.next.disabled);
        assert!(!last.previous.disabled);
    }

    #[test]
    fn compact_layout_hides_side_slots() {
        let list = images(&["a", "b", "c"]);
        let mut compact = input(&list, 1, BoundaryPolicy::Wrap);
        compact.layout = CarouselLayout::Compact;
        let view = render_view(&compact).expect("view");
        assert!(!view.slot(SlotKind::Previous).visible);
        assert!(view.slot(SlotKind::Center).visible);
        assert!(!view.slot(SlotKind::Next).visible);
        assert_eq!(view.src(SlotKind::Previous), Some("a"));
    }

    #[test]
    fn dragging_disables_thumb_animation() {
        let list = images(&["a", "b"]);
        let mut dragging = input(&list, 1, BoundaryPolicy::Wrap);
        dragging.dragging = true;
        let view = render_view(&dragging).expect("view");
        assert!(!view.scrollbar.animated);
    }

    #[test]
    fn rendering_is_idempotent() {
        let list = images(&["a", "b", "c", "d", "e"]);
        let state = input(&list, 2, BoundaryPolicy::Clamp);
        assert_eq!(render_view(&state), render_view(&state));
    }

    #[test]
    fn empty_list_renders_nothing() {
        let list: Vec<String> = Vec::new();
        assert!(render_view(&input(&list, 0, BoundaryPolicy::Wrap)).is_none());
    }
}

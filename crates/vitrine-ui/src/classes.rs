//! Class and inline-style helpers shared by the carousel component.
//!
//! # Design
//! - Kept free of DOM types so the mapping from view state to markup can be
//!   tested on native targets.
//! - Thumb styles use three decimals; the track width never needs more.

use vitrine_carousel::{CarouselLayout, Control, Direction, Slot, SlotKind, ThumbGeometry};

/// Class list for the carousel root.
#[must_use]
pub fn root_classes(layout: CarouselLayout, dragging: bool) -> String {
    let mut classes = String::from("vitrine");
    classes.push_str(match layout {
        CarouselLayout::Wide => " vitrine--wide",
        CarouselLayout::Compact => " vitrine--compact",
    });
    if dragging {
        classes.push_str(" is-dragging");
    }
    classes
}

/// Class list for an image slot.
#[must_use]
pub fn slot_classes(slot: &Slot) -> String {
    let mut classes = String::from("vitrine-slot ");
    classes.push_str(match slot.kind {
        SlotKind::Previous => "vitrine-slot--previous",
        SlotKind::Center => "vitrine-slot--center",
        SlotKind::Next => "vitrine-slot--next",
    });
    if !slot.visible {
        classes.push_str(" is-hidden");
    }
    if slot.image.is_none() {
        classes.push_str(" is-empty");
    }
    classes
}

/// Class list for a paging control.
#[must_use]
pub fn control_classes(control: &Control) -> String {
    let mut classes = String::from("vitrine-control ");
    classes.push_str(match control.direction {
        Direction::Previous => "vitrine-control--previous",
        Direction::Next => "vitrine-control--next",
    });
    if control.disabled {
        classes.push_str(" is-disabled");
    }
    classes
}

/// Accessible label for a paging control.
#[must_use]
pub const fn control_label(direction: Direction) -> &'static str {
    match direction {
        Direction::Previous => "Previous image",
        Direction::Next => "Next image",
    }
}

/// Inline style positioning the scrollbar thumb.
///
/// Transitions are switched off while the thumb follows the pointer.
#[must_use]
pub fn thumb_style(thumb: &ThumbGeometry, animated: bool) -> String {
    let mut style = format!(
        "width: {:.3}%; left: {:.3}%;",
        thumb.width_percent, thumb.left_percent
    );
    if !animated {
        style.push_str(" transition: none;");
    }
    style
}

#[cfg(test)]
mod tests {
    use super::*;
    use vitrine_carousel::SlotImage;

    fn slot(kind: SlotKind, image: Option<&str>, visible: bool) -> Slot {
        Slot {
            kind,
            image: image.map(|src| SlotImage {
                index: 0,
                src: src.to_string(),
                alt: "Image 0".to_string(),
            }),
            visible,
        }
    }

    #[test]
    fn root_classes_reflect_layout_and_drag() {
        assert_eq!(
            root_classes(CarouselLayout::Wide, false),
            "vitrine vitrine--wide"
        );
        assert_eq!(
            root_classes(CarouselLayout::Compact, true),
            "vitrine vitrine--compact is-dragging"
        );
    }

    #[test]
    fn slot_classes_mark_hidden_and_empty_slots() {
        assert_eq!(
            slot_classes(&slot(SlotKind::Center, Some("a.jpg"), true)),
            "vitrine-slot vitrine-slot--center"
        );
        assert_eq!(
            slot_classes(&slot(SlotKind::Previous, None, false)),
            "vitrine-slot vitrine-slot--previous is-hidden is-empty"
        );
    }

    #[test]
    fn disabled_controls_are_flagged() {
        let control = Control {
            direction: Direction::Next,
            disabled: true,
        };
        assert_eq!(
            control_classes(&control),
            "vitrine-control vitrine-control--next is-disabled"
        );
        assert_eq!(control_label(Direction::Previous), "Previous image");
    }

    #[test]
    fn thumb_style_drops_transition_while_dragging() {
        let thumb = ThumbGeometry {
            width_percent: 20.0,
            left_percent: 40.0,
        };
        assert_eq!(thumb_style(&thumb, true), "width: 20.000%; left: 40.000%;");
        assert!(thumb_style(&thumb, false).ends_with("transition: none;"));
    }
}

use std::rc::Rc;

use gloo::events::EventListener;
use vitrine_carousel::GestureEnd;
use wasm_bindgen::JsCast;
use web_sys::{Event, MouseEvent, TouchEvent};

/// Document-level listeners that live for exactly one drag gesture.
///
/// Dropping the value unregisters every listener. A subscription must not be
/// dropped from inside one of its own callbacks; release it from a spawned
/// task instead.
pub(crate) struct DragSubscription {
    _listeners: Vec<EventListener>,
}

impl DragSubscription {
    pub(crate) fn attach(
        on_move: impl Fn(f64) + 'static,
        on_end: impl Fn(GestureEnd) + 'static,
    ) -> Self {
        let document = gloo::utils::document();
        let window = gloo::utils::window();
        let on_move: Rc<dyn Fn(f64)> = Rc::new(on_move);
        let on_end: Rc<dyn Fn(GestureEnd)> = Rc::new(on_end);

        let mut listeners = Vec::with_capacity(6);
        for kind in ["mousemove", "touchmove"] {
            let on_move = on_move.clone();
            listeners.push(EventListener::new(&document, kind, move |event| {
                if let Some(x) = pointer_x(event) {
                    on_move(x);
                }
            }));
        }
        for (kind, end) in [
            ("mouseup", GestureEnd::Released),
            ("touchend", GestureEnd::Released),
            ("touchcancel", GestureEnd::Cancelled),
        ] {
            let on_end = on_end.clone();
            listeners.push(EventListener::new(&document, kind, move |_event| {
                on_end(end);
            }));
        }
        listeners.push(EventListener::new(&window, "blur", move |_event| {
            on_end(GestureEnd::Cancelled);
        }));

        Self {
            _listeners: listeners,
        }
    }
}

/// Horizontal client coordinate of a mouse or touch event.
fn pointer_x(event: &Event) -> Option<f64> {
    if let Some(mouse) = event.dyn_ref::<MouseEvent>() {
        return Some(f64::from(mouse.client_x()));
    }
    let touch = event.dyn_ref::<TouchEvent>()?;
    touch
        .touches()
        .get(0)
        .or_else(|| touch.changed_touches().get(0))
        .map(|point| f64::from(point.client_x()))
}

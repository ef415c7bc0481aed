use std::cell::RefCell;
use std::rc::Rc;

use gloo::console;
use gloo::events::EventListener;
use gloo::timers::callback::Timeout;
use vitrine_carousel::{
    CarouselConfig, CarouselController, CarouselView, GestureEnd, ThumbGeometry, TrackGeometry,
    Update, Viewport,
};
use web_sys::{Element, HtmlElement, MouseEvent, TouchEvent};
use yew::prelude::*;

use crate::classes::{control_classes, control_label, root_classes, slot_classes, thumb_style};
use crate::components::gesture::DragSubscription;
use crate::prefetch::ImagePrefetcher;

type SharedController = Rc<RefCell<CarouselController<ImagePrefetcher>>>;
type SharedDrag = Rc<RefCell<Option<DragSubscription>>>;

/// Properties for [`ImageCarousel`].
#[derive(Properties, PartialEq)]
pub struct CarouselProps {
    /// Image list as a JSON array of strings.
    pub images: AttrValue,
    /// Paging and prefetch options.
    #[prop_or_default]
    pub config: CarouselConfig,
    /// Extra classes for the root element.
    #[prop_or_default]
    pub class: Classes,
}

/// Three-slot image carousel with paging controls and a draggable scrollbar.
#[function_component(ImageCarousel)]
pub fn image_carousel(props: &CarouselProps) -> Html {
    let controller: SharedController = {
        let config = props.config.clone();
        use_mut_ref(move || CarouselController::with_prefetcher(config, ImagePrefetcher))
    };
    let view = use_state(|| None::<CarouselView>);
    let drag: SharedDrag = use_mut_ref(|| None);
    let track_ref = use_node_ref();
    let thumb_ref = use_node_ref();

    {
        let controller = controller.clone();
        let view = view.clone();
        let thumb_ref = thumb_ref.clone();
        use_effect_with_deps(
            move |config| {
                let result = controller.borrow_mut().configure(config.clone());
                match result {
                    Ok(update) => apply_update(update, &view, &thumb_ref),
                    Err(err) => console::error!(format!("vitrine: {err}")),
                }
                || ()
            },
            props.config.clone(),
        );
    }
    {
        let controller = controller.clone();
        let view = view.clone();
        let thumb_ref = thumb_ref.clone();
        use_effect_with_deps(
            move |raw| {
                let result = controller.borrow_mut().apply_images_attribute(raw);
                match result {
                    Ok(update) => apply_update(update, &view, &thumb_ref),
                    Err(err) => console::error!(format!("vitrine: {err}")),
                }
                if controller.borrow().is_inert() && view.is_some() {
                    view.set(None);
                }
                || ()
            },
            props.images.clone(),
        );
    }
    {
        let controller = controller.clone();
        let view = view.clone();
        let thumb_ref = thumb_ref.clone();
        use_effect_with_deps(
            move |_| {
                let resize = move || {
                    if let Some(viewport) = current_viewport() {
                        let update = controller.borrow_mut().set_viewport(viewport);
                        apply_update(update, &view, &thumb_ref);
                    }
                };
                resize();
                let handler = EventListener::new(&gloo::utils::window(), "resize", move |_event| {
                    resize();
                });
                move || drop(handler)
            },
            (),
        );
    }
    {
        let drag = drag.clone();
        use_effect_with_deps(
            move |_| {
                move || {
                    drag.borrow_mut().take();
                }
            },
            (),
        );
    }

    let start_drag: Rc<dyn Fn()> = {
        let controller = controller.clone();
        let view = view.clone();
        let thumb_ref = thumb_ref.clone();
        let track_ref = track_ref.clone();
        Rc::new(move || {
            let update = controller.borrow_mut().begin_drag();
            if update.is_unchanged() {
                return;
            }
            apply_update(update, &view, &thumb_ref);

            let on_move = {
                let controller = controller.clone();
                let view = view.clone();
                let thumb_ref = thumb_ref.clone();
                let track_ref = track_ref.clone();
                move |x: f64| {
                    if let Some(track) = track_geometry(&track_ref) {
                        let update = controller.borrow_mut().drag_to(x, track);
                        apply_update(update, &view, &thumb_ref);
                    }
                }
            };
            let on_end = {
                let controller = controller.clone();
                let view = view.clone();
                let thumb_ref = thumb_ref.clone();
                let drag = drag.clone();
                move |end: GestureEnd| {
                    let update = match end {
                        GestureEnd::Released => controller.borrow_mut().end_drag(),
                        GestureEnd::Cancelled => controller.borrow_mut().cancel_drag(),
                    };
                    apply_update(update, &view, &thumb_ref);
                    let released = drag.borrow_mut().take();
                    if let Some(subscription) = released {
                        wasm_bindgen_futures::spawn_local(async move {
                            drop(subscription);
                        });
                    }
                    // The click closing this gesture is dispatched before the next task.
                    let controller = controller.clone();
                    let _ = Timeout::new(0, move || {
                        controller.borrow_mut().clear_click_suppression();
                    })
                    .forget();
                }
            };
            *drag.borrow_mut() = Some(DragSubscription::attach(on_move, on_end));
        })
    };

    let on_previous = {
        let controller = controller.clone();
        let view = view.clone();
        let thumb_ref = thumb_ref.clone();
        Callback::from(move |_event: MouseEvent| {
            let update = controller.borrow_mut().previous();
            apply_update(update, &view, &thumb_ref);
        })
    };
    let on_next = {
        let controller = controller.clone();
        let view = view.clone();
        let thumb_ref = thumb_ref.clone();
        Callback::from(move |_event: MouseEvent| {
            let update = controller.borrow_mut().next();
            apply_update(update, &view, &thumb_ref);
        })
    };
    let on_track_click = {
        let controller = controller.clone();
        let view = view.clone();
        let thumb_ref = thumb_ref.clone();
        let track_ref = track_ref.clone();
        Callback::from(move |event: MouseEvent| {
            if let Some(track) = track_geometry(&track_ref) {
                let update = controller
                    .borrow_mut()
                    .click_track(f64::from(event.client_x()), track);
                apply_update(update, &view, &thumb_ref);
            }
        })
    };
    let on_thumb_mouse_down = {
        let start_drag = start_drag.clone();
        Callback::from(move |event: MouseEvent| {
            event.prevent_default();
            start_drag();
        })
    };
    let on_thumb_touch_start = Callback::from(move |_event: TouchEvent| start_drag());

    let Some(current) = (*view).clone() else {
        return html! {};
    };
    let dragging = controller.borrow().is_dragging();

    html! {
        <div class={classes!(root_classes(current.layout, dragging), props.class.clone())}>
            <div class="vitrine-stage">
                <button
                    type="button"
                    class={control_classes(&current.previous)}
                    disabled={current.previous.disabled}
                    aria-label={control_label(current.previous.direction)}
                    onclick={on_previous}
                >
                    {"\u{2039}"}
                </button>
                {for current.slots.iter().map(|slot| html! {
                    <div class={slot_classes(slot)}>
                        {slot.image.as_ref().map_or_else(Html::default, |image| html! {
                            <img
                                src={image.src.clone()}
                                alt={image.alt.clone()}
                                draggable="false"
                            />
                        })}
                    </div>
                })}
                <button
                    type="button"
                    class={control_classes(&current.next)}
                    disabled={current.next.disabled}
                    aria-label={control_label(current.next.direction)}
                    onclick={on_next}
                >
                    {"\u{203a}"}
                </button>
            </div>
            <div class="vitrine-scrollbar" ref={track_ref} onclick={on_track_click}>
                <div
                    class="vitrine-thumb"
                    ref={thumb_ref}
                    style={thumb_style(&current.scrollbar.thumb, current.scrollbar.animated)}
                    onmousedown={on_thumb_mouse_down}
                    ontouchstart={on_thumb_touch_start}
                />
            </div>
        </div>
    }
}

/// Push an update to the DOM.
///
/// The thumb is styled directly for both variants so drag previews never
/// leave the virtual DOM out of step with the element.
fn apply_update(update: Update, view: &UseStateHandle<Option<CarouselView>>, thumb_ref: &NodeRef) {
    match update {
        Update::Unchanged => {}
        Update::Preview(preview) => set_thumb_style(thumb_ref, &preview.thumb, preview.animated),
        Update::Render(next) => {
            set_thumb_style(thumb_ref, &next.scrollbar.thumb, next.scrollbar.animated);
            view.set(Some(next));
        }
    }
}

fn set_thumb_style(thumb_ref: &NodeRef, thumb: &ThumbGeometry, animated: bool) {
    if let Some(element) = thumb_ref.cast::<HtmlElement>() {
        let _ = element.set_attribute("style", &thumb_style(thumb, animated));
    }
}

fn track_geometry(track_ref: &NodeRef) -> Option<TrackGeometry> {
    let rect = track_ref.cast::<Element>()?.get_bounding_client_rect();
    Some(TrackGeometry::new(rect.left(), rect.width()))
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn current_viewport() -> Option<Viewport> {
    let window = gloo::utils::window();
    let width = window.inner_width().ok()?.as_f64()?;
    let height = window.inner_height().ok()?.as_f64()?;
    Some(Viewport {
        width: width.max(0.0) as u32,
        height: height.max(0.0) as u32,
    })
}

//! Carousel controller: paging, seek and drag over an image list.
//!
//! # Design
//! - Every operation returns an [`Update`] telling the host what to redraw.
//! - Thumb previews during a drag are distinct from full renders; the index is
//!   committed on every preview so an interrupted gesture stays consistent.
//! - With no images loaded every operation is a no-op.

use std::collections::HashSet;

use tracing::{debug, trace, warn};

use crate::attributes::parse_image_list;
use crate::config::CarouselConfig;
use crate::error::CarouselResult;
use crate::geometry::{TrackGeometry, index_for_pointer, thumb_geometry};
use crate::gesture::{DragTracker, GestureEnd};
use crate::layout::{CarouselLayout, Viewport};
use crate::prefetch::{NoPrefetch, Prefetch};
use crate::view::{CarouselView, RenderInput, ThumbPreview, render_view};

/// What the host must do after an operation.
#[derive(Clone, Debug, PartialEq)]
pub enum Update {
    /// Nothing changed.
    Unchanged,
    /// Move the thumb only; slots are resynchronised by a later render.
    Preview(ThumbPreview),
    /// Replace the whole rendered output.
    Render(CarouselView),
}

impl Update {
    /// Whether the host has nothing to do.
    #[must_use]
    pub const fn is_unchanged(&self) -> bool {
        matches!(self, Self::Unchanged)
    }

    /// The full view, when this is a render.
    #[must_use]
    pub const fn view(&self) -> Option<&CarouselView> {
        match self {
            Self::Render(view) => Some(view),
            Self::Unchanged | Self::Preview(_) => None,
        }
    }
}

/// Image carousel state machine.
#[derive(Debug)]
pub struct CarouselController<P = NoPrefetch> {
    config: CarouselConfig,
    images: Vec<String>,
    index: usize,
    layout: CarouselLayout,
    drag: DragTracker,
    last_attribute: Option<String>,
    prefetched: HashSet<String>,
    prefetcher: P,
}

impl Default for CarouselController<NoPrefetch> {
    fn default() -> Self {
        Self::new(CarouselConfig::default())
    }
}

impl CarouselController<NoPrefetch> {
    /// Controller without a prefetcher.
    #[must_use]
    pub fn new(config: CarouselConfig) -> Self {
        Self::with_prefetcher(config, NoPrefetch)
    }
}

impl<P: Prefetch> CarouselController<P> {
    /// Controller that hands loaded references to `prefetcher`.
    #[must_use]
    pub fn with_prefetcher(config: CarouselConfig, prefetcher: P) -> Self {
        Self {
            config,
            images: Vec::new(),
            index: 0,
            layout: CarouselLayout::default(),
            drag: DragTracker::default(),
            last_attribute: None,
            prefetched: HashSet::new(),
            prefetcher,
        }
    }

    /// Active configuration.
    #[must_use]
    pub const fn config(&self) -> &CarouselConfig {
        &self.config
    }

    /// Loaded images.
    #[must_use]
    pub fn images(&self) -> &[String] {
        &self.images
    }

    /// Current index (meaningless while no images are loaded).
    #[must_use]
    pub const fn current_index(&self) -> usize {
        self.index
    }

    /// Active layout.
    #[must_use]
    pub const fn layout(&self) -> CarouselLayout {
        self.layout
    }

    /// Whether a thumb drag is in progress.
    #[must_use]
    pub const fn is_dragging(&self) -> bool {
        self.drag.is_dragging()
    }

    /// Whether the controller has nothing to show.
    #[must_use]
    pub fn is_inert(&self) -> bool {
        self.images.is_empty()
    }

    /// Prefetcher handed to the constructor.
    #[must_use]
    pub const fn prefetcher(&self) -> &P {
        &self.prefetcher
    }

    /// Replace the image list and reset the index.
    ///
    /// Forgets the last image attribute, so re-applying it replaces this list.
    pub fn load_images(&mut self, images: Vec<String>) -> Update {
        self.images = images;
        self.last_attribute = None;
        self.drag.reset();
        self.prefetched.retain(|src| self.images.contains(src));
        self.index = self.config.start_index(self.images.len()).unwrap_or(0);
        debug!(
            count = self.images.len(),
            index = self.index,
            "carousel images loaded"
        );
        if self.config.prefetch {
            self.prefetch_all();
        }
        self.render_update()
    }

    /// Apply the serialized image attribute.
    ///
    /// Identical attribute values are ignored. A malformed value is logged and
    /// leaves the current state untouched.
    ///
    /// # Errors
    ///
    /// Returns the parse error from [`parse_image_list`].
    pub fn apply_images_attribute(&mut self, raw: &str) -> CarouselResult<Update> {
        if self.last_attribute.as_deref() == Some(raw) {
            return Ok(Update::Unchanged);
        }
        let images = parse_image_list(raw).inspect_err(|err| {
            warn!(error = %err, "rejected carousel image attribute");
        })?;
        let update = self.load_images(images);
        self.last_attribute = Some(raw.to_string());
        Ok(update)
    }

    /// Validate and replace the configuration, then re-render.
    ///
    /// # Errors
    ///
    /// Returns [`crate::CarouselError::InvalidConfig`] and keeps the current
    /// configuration when `config` fails validation.
    pub fn configure(&mut self, config: CarouselConfig) -> CarouselResult<Update> {
        config.validate().inspect_err(|err| {
            warn!(error = %err, "rejected carousel configuration");
        })?;
        self.config = config;
        self.drag.clear_click_suppression();
        if self.config.prefetch {
            self.prefetch_all();
        }
        Ok(self.render_update())
    }

    /// Re-select the layout for a resized viewport.
    pub fn set_viewport(&mut self, viewport: Viewport) -> Update {
        let layout = CarouselLayout::for_viewport(viewport);
        if layout == self.layout {
            return Update::Unchanged;
        }
        self.layout = layout;
        self.drag.clear_click_suppression();
        self.render_update()
    }

    /// Page forward.
    pub fn next(&mut self) -> Update {
        let target = self.config.policy.after(self.index, self.images.len());
        self.move_to(target)
    }

    /// Page backward.
    pub fn previous(&mut self) -> Update {
        let target = self.config.policy.before(self.index, self.images.len());
        self.move_to(target)
    }

    /// Jump to the index nearest `pointer_x` over `track`.
    ///
    /// During a drag this yields a thumb preview, otherwise a full render.
    pub fn seek_to_pointer(&mut self, pointer_x: f64, track: TrackGeometry) -> Update {
        let Some(target) = index_for_pointer(pointer_x, track, self.images.len()) else {
            return Update::Unchanged;
        };
        if target == self.index {
            return Update::Unchanged;
        }
        self.index = target;
        trace!(index = target, dragging = self.is_dragging(), "carousel seek");
        if self.is_dragging() {
            self.preview_update()
        } else {
            self.render_update()
        }
    }

    /// Handle a click on the scrollbar track.
    ///
    /// The click that closes a drag gesture is swallowed.
    pub fn click_track(&mut self, pointer_x: f64, track: TrackGeometry) -> Update {
        if self.drag.take_click_suppression() {
            debug!("ignored track click after drag");
            return Update::Unchanged;
        }
        self.seek_to_pointer(pointer_x, track)
    }

    /// Forget a pending click suppression.
    ///
    /// Hosts call this once the event that closes a drag gesture has been
    /// dispatched, so a release away from the track does not swallow a later
    /// click.
    pub fn clear_click_suppression(&mut self) {
        self.drag.clear_click_suppression();
    }

    /// Pointer pressed on the thumb.
    pub fn begin_drag(&mut self) -> Update {
        if self.is_inert() || !self.drag.begin() {
            return Update::Unchanged;
        }
        self.preview_update()
    }

    /// Pointer moved while the thumb is held.
    pub fn drag_to(&mut self, pointer_x: f64, track: TrackGeometry) -> Update {
        if !self.drag.record_move() {
            debug!("ignored pointer move without drag");
            return Update::Unchanged;
        }
        self.seek_to_pointer(pointer_x, track)
    }

    /// Pointer released; resynchronises all slots with one render.
    pub fn end_drag(&mut self) -> Update {
        self.finish_drag(GestureEnd::Released)
    }

    /// Gesture interrupted; resynchronises all slots with one render.
    pub fn cancel_drag(&mut self) -> Update {
        self.finish_drag(GestureEnd::Cancelled)
    }

    /// Current view, `None` while no images are loaded.
    #[must_use]
    pub fn render(&self) -> Option<CarouselView> {
        render_view(&RenderInput {
            images: &self.images,
            index: self.index,
            policy: self.config.policy,
            min_thumb_percent: self.config.min_thumb_percent,
            layout: self.layout,
            dragging: self.is_dragging(),
        })
    }

    fn finish_drag(&mut self, end: GestureEnd) -> Update {
        if !self.drag.finish(end) {
            debug!(?end, "ignored drag end without drag");
            return Update::Unchanged;
        }
        self.render_update()
    }

    fn move_to(&mut self, target: Option<usize>) -> Update {
        self.drag.clear_click_suppression();
        match target {
            Some(target) if target != self.index => {
                self.index = target;
                trace!(index = target, "carousel paged");
                self.render_update()
            }
            _ => Update::Unchanged,
        }
    }

    fn render_update(&self) -> Update {
        self.render().map_or(Update::Unchanged, Update::Render)
    }

    fn preview_update(&self) -> Update {
        thumb_geometry(self.images.len(), self.index, self.config.min_thumb_percent).map_or(
            Update::Unchanged,
            |thumb| {
                Update::Preview(ThumbPreview {
                    index: self.index,
                    thumb,
                    animated: !self.is_dragging(),
                })
            },
        )
    }

    fn prefetch_all(&mut self) {
        for src in &self.images {
            if self.prefetched.insert(src.clone()) {
                debug!(%src, "prefetching carousel image");
                self.prefetcher.prefetch(src);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CarouselError;
    use crate::policy::BoundaryPolicy;
    use crate::view::SlotKind;

    const TRACK: TrackGeometry = TrackGeometry::new(0.0, 400.0);

    fn images(names: &[&str]) -> Vec<String> {
        names.iter().map(|name| (*name).to_string()).collect()
    }

    fn loaded(policy: BoundaryPolicy, names: &[&str]) -> CarouselController {
        let mut controller = CarouselController::new(CarouselConfig::with_policy(policy));
        controller.load_images(images(names));
        controller
    }

    fn center(update: &Update) -> Option<&str> {
        update.view().and_then(|view| view.src(SlotKind::Center))
    }

    #[test]
    fn paging_scenario_under_wrap() {
        let mut controller = CarouselController::default();
        let update = controller.load_images(images(&["a", "b", "c", "d"]));
        assert_eq!(controller.current_index(), 1);
        let view = update.view().expect("render after load");
        assert_eq!(view.src(SlotKind::Previous), Some("a"));
        assert_eq!(view.src(SlotKind::Center), Some("b"));
        assert_eq!(view.src(SlotKind::Next), Some("c"));

        assert_eq!(center(&controller.next()), Some("c"));
        assert_eq!(controller.current_index(), 2);

        controller.previous();
        let update = controller.previous();
        assert_eq!(controller.current_index(), 0);
        let view = update.view().expect("render");
        assert_eq!(view.src(SlotKind::Center), Some("a"));
        assert_eq!(view.src(SlotKind::Previous), Some("d"));
    }

    #[test]
    fn wrap_returns_home_after_len_steps() {
        for len in 1..=7 {
            let names: Vec<String> = (0..len).map(|i| format!("img-{i}")).collect();
            let mut controller = CarouselController::default();
            controller.load_images(names);
            for _ in 0..len {
                let start = controller.current_index();
                for _ in 0..len {
                    controller.next();
                }
                assert_eq!(controller.current_index(), start, "len {len}");
                controller.next();
            }
        }
    }

    #[test]
    fn clamp_edges_are_no_ops() {
        let mut controller = loaded(BoundaryPolicy::Clamp, &["a", "b", "c"]);
        assert!(controller.previous().view().is_some());
        assert_eq!(controller.current_index(), 0);
        assert!(controller.previous().is_unchanged());
        assert_eq!(controller.current_index(), 0);

        controller.next();
        controller.next();
        assert_eq!(controller.current_index(), 2);
        assert!(controller.next().is_unchanged());
        assert_eq!(controller.current_index(), 2);
    }

    #[test]
    fn empty_list_is_inert() {
        let mut controller = CarouselController::default();
        assert!(controller.load_images(Vec::new()).is_unchanged());
        assert!(controller.is_inert());
        assert!(controller.next().is_unchanged());
        assert!(controller.previous().is_unchanged());
        assert!(controller.click_track(200.0, TRACK).is_unchanged());
        assert!(controller.begin_drag().is_unchanged());
        assert!(!controller.is_dragging());
        assert!(controller.end_drag().is_unchanged());
        assert!(controller.render().is_none());
    }

    #[test]
    fn single_image_starts_at_zero() {
        let controller = loaded(BoundaryPolicy::Wrap, &["solo"]);
        assert_eq!(controller.current_index(), 0);
        let view = controller.render().expect("view");
        assert!((view.scrollbar.thumb.width_percent - 100.0).abs() < f64::EPSILON);
        assert!(view.scrollbar.thumb.left_percent.abs() < f64::EPSILON);
    }

    #[test]
    fn drag_scenario_previews_then_renders_once() {
        let mut controller = loaded(BoundaryPolicy::Wrap, &["a", "b", "c", "d"]);
        assert_eq!(controller.current_index(), 1);

        match controller.begin_drag() {
            Update::Preview(preview) => assert!(!preview.animated),
            other => panic!("expected preview, got {other:?}"),
        }
        assert!(controller.is_dragging());

        match controller.drag_to(0.9 * 400.0, TRACK) {
            Update::Preview(preview) => {
                assert_eq!(preview.index, 3);
                assert!(!preview.animated);
            }
            other => panic!("expected preview, got {other:?}"),
        }
        assert_eq!(controller.current_index(), 3);
        assert!(controller.drag_to(0.95 * 400.0, TRACK).is_unchanged());

        let update = controller.end_drag();
        let view = update.view().expect("render after release");
        assert_eq!(view.index, 3);
        assert!(view.scrollbar.animated);
        assert!(controller.end_drag().is_unchanged());
    }

    #[test]
    fn click_after_drag_release_does_not_seek_again() {
        let mut controller = loaded(BoundaryPolicy::Wrap, &["a", "b", "c", "d"]);
        controller.begin_drag();
        controller.drag_to(360.0, TRACK);
        controller.end_drag();
        assert_eq!(controller.current_index(), 3);

        assert!(controller.click_track(0.0, TRACK).is_unchanged());
        assert_eq!(controller.current_index(), 3);

        let update = controller.click_track(0.0, TRACK);
        assert_eq!(update.view().map(|view| view.index), Some(0));
    }

    #[test]
    fn paging_after_release_restores_track_clicks() {
        let mut controller = loaded(BoundaryPolicy::Wrap, &["a", "b", "c", "d"]);
        controller.begin_drag();
        controller.drag_to(360.0, TRACK);
        controller.end_drag();
        assert_eq!(controller.current_index(), 3);

        controller.previous();
        controller.next();
        controller.previous();
        assert_eq!(controller.current_index(), 2);

        let update = controller.click_track(0.0, TRACK);
        assert_eq!(update.view().map(|view| view.index), Some(0));
    }

    #[test]
    fn host_can_drop_pending_click_suppression() {
        let mut controller = loaded(BoundaryPolicy::Wrap, &["a", "b", "c", "d"]);
        controller.begin_drag();
        controller.drag_to(360.0, TRACK);
        controller.end_drag();
        controller.clear_click_suppression();
        assert_eq!(
            controller.click_track(0.0, TRACK).view().map(|view| view.index),
            Some(0)
        );
    }

    #[test]
    fn cancelled_drag_keeps_index_and_clicks() {
        let mut controller = loaded(BoundaryPolicy::Clamp, &["a", "b", "c", "d", "e"]);
        controller.begin_drag();
        controller.drag_to(400.0, TRACK);
        let update = controller.cancel_drag();
        assert_eq!(update.view().map(|view| view.index), Some(4));
        assert_eq!(
            controller.click_track(200.0, TRACK).view().map(|view| view.index),
            Some(2)
        );
    }

    #[test]
    fn stray_gesture_events_are_ignored() {
        let mut controller = loaded(BoundaryPolicy::Wrap, &["a", "b", "c"]);
        assert!(controller.drag_to(400.0, TRACK).is_unchanged());
        assert_eq!(controller.current_index(), 1);
        assert!(controller.end_drag().is_unchanged());
        assert!(controller.cancel_drag().is_unchanged());
    }

    #[test]
    fn click_seeks_only_on_change() {
        let mut controller = loaded(BoundaryPolicy::Wrap, &["a", "b", "c", "d", "e"]);
        let update = controller.click_track(200.0, TRACK);
        assert_eq!(update.view().map(|view| view.index), Some(2));
        let thumb = update.view().map(|view| view.scrollbar.thumb).expect("thumb");
        assert!((thumb.width_percent - 20.0).abs() < 1e-9);
        assert!((thumb.left_percent - 40.0).abs() < 1e-9);
        assert!(controller.click_track(210.0, TRACK).is_unchanged());
        assert!(
            controller
                .click_track(200.0, TrackGeometry::new(0.0, 0.0))
                .is_unchanged()
        );
    }

    #[test]
    fn malformed_attribute_keeps_previous_state() {
        let mut controller = CarouselController::default();
        controller
            .apply_images_attribute(r#"["a","b","c"]"#)
            .expect("valid attribute");
        controller.next();
        assert_eq!(controller.current_index(), 2);

        let err = controller.apply_images_attribute("not json").unwrap_err();
        assert!(matches!(err, CarouselError::MalformedImageList { .. }));
        assert_eq!(controller.images(), images(&["a", "b", "c"]).as_slice());
        assert_eq!(controller.current_index(), 2);
    }

    #[test]
    fn identical_attribute_is_ignored() {
        let mut controller = CarouselController::default();
        let raw = r#"["a","b","c"]"#;
        assert!(controller.apply_images_attribute(raw).expect("valid").view().is_some());
        controller.next();
        assert!(controller.apply_images_attribute(raw).expect("valid").is_unchanged());
        assert_eq!(controller.current_index(), 2);

        let update = controller
            .apply_images_attribute(r#"["x","y"]"#)
            .expect("valid");
        assert_eq!(update.view().map(|view| view.index), Some(1));
    }

    #[test]
    fn attribute_applies_again_after_direct_load() {
        let mut controller = CarouselController::default();
        let raw = r#"["a","b","c"]"#;
        controller.apply_images_attribute(raw).expect("valid");
        controller.load_images(images(&["x", "y"]));

        let update = controller.apply_images_attribute(raw).expect("valid");
        assert!(update.view().is_some());
        assert_eq!(controller.images(), images(&["a", "b", "c"]).as_slice());
        assert!(controller.apply_images_attribute(raw).expect("valid").is_unchanged());
    }

    #[test]
    fn reload_resets_index_and_gesture() {
        let mut controller = loaded(BoundaryPolicy::Wrap, &["a", "b", "c", "d"]);
        controller.begin_drag();
        controller.drag_to(400.0, TRACK);
        controller.load_images(images(&["x"]));
        assert_eq!(controller.current_index(), 0);
        assert!(!controller.is_dragging());
        assert!(controller.click_track(0.0, TRACK).is_unchanged());
    }

    #[test]
    fn prefetch_runs_once_per_reference() {
        let mut seen = Vec::new();
        {
            let mut controller = CarouselController::with_prefetcher(
                CarouselConfig::default(),
                |src: &str| seen.push(src.to_string()),
            );
            controller.load_images(images(&["a", "b"]));
            controller.load_images(images(&["b", "c"]));
        }
        assert_eq!(seen, images(&["a", "b", "c"]));
    }

    #[test]
    fn prefetch_memory_follows_the_current_list() {
        let mut seen = Vec::new();
        {
            let mut controller = CarouselController::with_prefetcher(
                CarouselConfig::default(),
                |src: &str| seen.push(src.to_string()),
            );
            controller.load_images(images(&["a", "b"]));
            controller.load_images(images(&["c"]));
            controller.load_images(images(&["a"]));
        }
        assert_eq!(seen, images(&["a", "b", "c", "a"]));
    }

    #[test]
    fn prefetch_can_be_disabled() {
        let mut count = 0usize;
        {
            let config = CarouselConfig {
                prefetch: false,
                ..CarouselConfig::default()
            };
            let mut controller =
                CarouselController::with_prefetcher(config, |_src: &str| count += 1);
            controller.load_images(images(&["a", "b"]));
        }
        assert_eq!(count, 0);
    }

    #[test]
    fn viewport_changes_render_only_on_layout_switch() {
        let mut controller = loaded(BoundaryPolicy::Wrap, &["a", "b", "c"]);
        assert_eq!(controller.layout(), CarouselLayout::Wide);
        assert!(
            controller
                .set_viewport(Viewport {
                    width: 1600,
                    height: 900
                })
                .is_unchanged()
        );
        let update = controller.set_viewport(Viewport {
            width: 800,
            height: 900,
        });
        let view = update.view().expect("layout switch renders");
        assert_eq!(view.layout, CarouselLayout::Compact);
        assert!(!view.slot(SlotKind::Previous).visible);
    }

    #[test]
    fn configure_switches_policy() {
        let mut controller = loaded(BoundaryPolicy::Wrap, &["a", "b", "c"]);
        controller.previous();
        let update = controller
            .configure(CarouselConfig::with_policy(BoundaryPolicy::Clamp))
            .expect("valid config");
        let view = update.view().expect("render");
        assert!(view.previous.disabled);
        assert!(controller.previous().is_unchanged());
    }

    #[test]
    fn invalid_configuration_is_rejected() {
        let mut controller = loaded(BoundaryPolicy::Clamp, &["a", "b", "c"]);
        let invalid = CarouselConfig {
            min_thumb_percent: f64::NAN,
            ..CarouselConfig::default()
        };
        let err = controller.configure(invalid).unwrap_err();
        assert!(matches!(
            err,
            CarouselError::InvalidConfig {
                field: "min_thumb_percent",
                ..
            }
        ));
        assert_eq!(controller.config().policy, BoundaryPolicy::Clamp);
        assert!(controller.previous().view().is_some());
        assert!(controller.previous().is_unchanged());
    }

    #[test]
    fn render_is_idempotent() {
        let controller = loaded(BoundaryPolicy::Clamp, &["a", "b", "c", "d", "e"]);
        assert_eq!(controller.render(), controller.render());
    }
}

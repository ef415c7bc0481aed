#![forbid(unsafe_code)]
#![deny(
    warnings,
    dead_code,
    unused,
    unused_imports,
    unused_must_use,
    unreachable_pub,
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    rustdoc::broken_intra_doc_links,
    rustdoc::bare_urls,
    missing_docs
)]
#![allow(clippy::module_name_repetitions)]

//! DOM-free image carousel controller.
//!
//! Layout: `controller.rs` (state machine and [`Update`] outcomes), `view.rs`
//! (pure render contract), `geometry.rs` (thumb and pointer math), `policy.rs`
//! (wrap/clamp arithmetic), `gesture.rs` (drag tracking), `layout.rs`
//! (responsive slot arrangement), `config.rs` and `attributes.rs` (boundary
//! parsing), `prefetch.rs` (media prefetch seam).

pub mod attributes;
pub mod config;
pub mod controller;
pub mod error;
pub mod geometry;
pub mod gesture;
pub mod layout;
pub mod policy;
pub mod prefetch;
pub mod view;

pub use attributes::parse_image_list;
pub use config::{CarouselConfig, DEFAULT_INITIAL_INDEX, DEFAULT_MIN_THUMB_PERCENT};
pub use controller::{CarouselController, Update};
pub use error::{CarouselError, CarouselResult};
pub use geometry::{ThumbGeometry, TrackGeometry, index_for_pointer, thumb_geometry};
pub use gesture::{DragTracker, GestureEnd, GesturePhase};
pub use layout::{COMPACT_MAX_WIDTH, CarouselLayout, Viewport};
pub use policy::BoundaryPolicy;
pub use prefetch::{NoPrefetch, Prefetch};
pub use view::{
    CarouselView, Control, Direction, RenderInput, Scrollbar, Slot, SlotImage, SlotKind,
    ThumbPreview, render_view,
};

//! Yew components for the carousel.

pub mod carousel;
mod gesture;

pub use carousel::{CarouselProps, ImageCarousel};

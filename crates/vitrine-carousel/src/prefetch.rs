//! Fire-and-forget media prefetch seam.

/// Starts loading a media reference ahead of display.
///
/// Implementations must not block and report nothing back; a failed prefetch
/// simply falls back to lazy loading when the image is displayed.
pub trait Prefetch {
    /// Begin fetching `src`.
    fn prefetch(&mut self, src: &str);
}

/// Prefetcher that does nothing.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoPrefetch;

impl Prefetch for NoPrefetch {
    fn prefetch(&mut self, _src: &str) {}
}

impl<F> Prefetch for F
where
    F: FnMut(&str),
{
    fn prefetch(&mut self, src: &str) {
        self(src);
    }
}

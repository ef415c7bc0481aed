use gloo::console;
use vitrine_carousel::Prefetch;
use web_sys::HtmlImageElement;

/// Warms the browser cache by pointing a detached image element at each source.
#[derive(Clone, Copy, Debug, Default)]
pub(crate) struct ImagePrefetcher;

impl Prefetch for ImagePrefetcher {
    fn prefetch(&mut self, src: &str) {
        match HtmlImageElement::new() {
            Ok(image) => image.set_src(src),
            Err(err) => console::warn!(format!("vitrine: image prefetch unavailable for {src}"), err),
        }
    }
}

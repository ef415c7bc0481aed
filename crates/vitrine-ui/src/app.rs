use gloo::console;
use vitrine_carousel::CarouselConfig;
use yew::prelude::*;

use crate::components::ImageCarousel;
use crate::styles::CAROUSEL_CSS;

const ROOT_ID: &str = "vitrine";
const DEMO_IMAGES: &str = r#"["https://picsum.photos/id/1015/1200/900","https://picsum.photos/id/1016/1200/900","https://picsum.photos/id/1018/1200/900","https://picsum.photos/id/1019/1200/900"]"#;

#[derive(Properties, PartialEq)]
struct HostProps {
    images: AttrValue,
    config: CarouselConfig,
}

#[function_component(VitrineHost)]
fn vitrine_host(props: &HostProps) -> Html {
    html! {
        <>
            <style>{CAROUSEL_CSS}</style>
            <ImageCarousel images={props.images.clone()} config={props.config.clone()} />
        </>
    }
}

/// Entrypoint invoked by Trunk for wasm32 builds.
///
/// Mounts into `#vitrine` when present, reading `data-images` (JSON string
/// array) and `data-config` (JSON object) from it; otherwise mounts a demo
/// carousel on the document body.
pub fn run_app() {
    console_error_panic_hook::set_once();
    let Some(root) = gloo::utils::document().get_element_by_id(ROOT_ID) else {
        yew::Renderer::<VitrineHost>::with_props(HostProps {
            images: AttrValue::Static(DEMO_IMAGES),
            config: CarouselConfig::default(),
        })
        .render();
        return;
    };

    let images = root
        .get_attribute("data-images")
        .map_or(AttrValue::Static(DEMO_IMAGES), AttrValue::from);
    let config = root
        .get_attribute("data-config")
        .map_or_else(
            || Ok(CarouselConfig::default()),
            |raw| CarouselConfig::from_json(&raw),
        )
        .unwrap_or_else(|err| {
            console::error!(format!("vitrine: {err}; using default configuration"));
            CarouselConfig::default()
        });
    yew::Renderer::<VitrineHost>::with_root_and_props(root, HostProps { images, config }).render();
}

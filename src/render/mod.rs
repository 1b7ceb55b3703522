pub mod ascii;
pub mod geometry;
pub mod outline;

pub use ascii::AsciiRenderer;
pub use outline::OutlineRenderer;

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, HtmlElement};

/// Create an absolutely-positioned canvas child of `host`, sized to its
/// offset box.
fn layer_canvas(host: &HtmlElement, z_index: &str) -> Option<HtmlCanvasElement> {
    let document = web_sys::window()?.document()?;
    let canvas: HtmlCanvasElement = document.create_element("canvas").ok()?.dyn_into().ok()?;
    canvas.set_width(host.offset_width().max(0) as u32);
    canvas.set_height(host.offset_height().max(0) as u32);
    let style = canvas.style();
    style.set_property("position", "absolute").ok()?;
    style.set_property("top", "0").ok()?;
    style.set_property("left", "0").ok()?;
    style.set_property("pointer-events", "none").ok()?;
    style.set_property("z-index", z_index).ok()?;
    host.append_child(&canvas).ok()?;
    Some(canvas)
}

fn context_2d(canvas: &HtmlCanvasElement) -> Option<CanvasRenderingContext2d> {
    canvas
        .get_context("2d")
        .ok()
        .flatten()
        .and_then(|c| c.dyn_into::<CanvasRenderingContext2d>().ok())
}

/// Window-resize listener keeping the canvas matched to the host's
/// offset box. The caller registers and removes it.
fn resize_to_host(
    canvas: &HtmlCanvasElement,
    host: &HtmlElement,
) -> Closure<dyn FnMut(web_sys::Event)> {
    let canvas = canvas.clone();
    let host = host.clone();
    Closure::wrap(Box::new(move |_e: web_sys::Event| {
        canvas.set_width(host.offset_width().max(0) as u32);
        canvas.set_height(host.offset_height().max(0) as u32);
    }) as Box<dyn FnMut(_)>)
}

#[cfg(all(test, target_arch = "wasm32"))]
mod dom_tests {
    use super::*;
    use crate::state::Pointer;
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::JsCast;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn host() -> HtmlElement {
        let document = web_sys::window().unwrap().document().unwrap();
        let el: HtmlElement = document
            .create_element("header")
            .unwrap()
            .dyn_into()
            .unwrap();
        el.style().set_property("width", "640px").unwrap();
        el.style().set_property("height", "64px").unwrap();
        el.style().set_property("position", "relative").unwrap();
        document.body().unwrap().append_child(&el).unwrap();
        el
    }

    #[wasm_bindgen_test]
    fn outline_mounts_and_disposes_a_canvas() {
        let host = host();
        let renderer = OutlineRenderer::mount(&host, Rc::new(RefCell::new(false))).unwrap();
        let canvas: HtmlCanvasElement = host
            .query_selector("canvas")
            .unwrap()
            .unwrap()
            .dyn_into()
            .unwrap();
        assert_eq!(canvas.width(), 640);
        assert_eq!(canvas.height(), 64);
        renderer.dispose();
        assert!(host.query_selector("canvas").unwrap().is_none());
        host.remove();
    }

    #[wasm_bindgen_test]
    fn ascii_canvas_carries_a_pointer_mask() {
        let host = host();
        let renderer = AsciiRenderer::mount(&host, Rc::new(RefCell::new(false))).unwrap();
        let canvas: HtmlCanvasElement = host
            .query_selector("canvas")
            .unwrap()
            .unwrap()
            .dyn_into()
            .unwrap();
        assert_eq!(
            canvas.style().get_property_value("mask-size").unwrap(),
            "100px 100px"
        );
        renderer.set_mask_position(&Pointer { x: 300.0, y: 80.0 });
        assert_eq!(
            canvas.style().get_property_value("mask-position").unwrap(),
            "250px 30px"
        );
        renderer.dispose();
        assert!(host.query_selector("canvas").unwrap().is_none());
        host.remove();
    }
}

// Outline layer: strokes five mirrored ellipse pairs every animation
// frame, flattening toward the collapse target.

use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, HtmlElement};

use crate::render::geometry::{CollapseAnim, EllipseSpec, RING_PAIRS, ring_spec};

pub struct OutlineRenderer {
    canvas: HtmlCanvasElement,
    raf_id: Rc<RefCell<Option<i32>>>,
    frame_cb: Rc<RefCell<Option<Closure<dyn FnMut()>>>>,
    resize_cb: Closure<dyn FnMut(web_sys::Event)>,
}

impl OutlineRenderer {
    /// Attach a canvas to `host` and start the draw loop. Returns `None`
    /// when any part of the DOM surface is unavailable.
    pub fn mount(host: &HtmlElement, collapse_on: Rc<RefCell<bool>>) -> Option<Self> {
        let window = web_sys::window()?;
        let canvas = super::layer_canvas(host, "1")?;

        let anim = Rc::new(RefCell::new(CollapseAnim::default()));
        let draw: Rc<dyn Fn()> = {
            let canvas = canvas.clone();
            Rc::new(move || {
                if !canvas.is_connected() {
                    return;
                }
                let Some(ctx) = super::context_2d(&canvas) else {
                    return;
                };
                let w = canvas.width() as f64;
                let h = canvas.height() as f64;
                ctx.clear_rect(0.0, 0.0, w, h);
                let on = *collapse_on.borrow();
                let progress = anim.borrow_mut().advance(on);
                let alpha = if on { 80.0 / 255.0 } else { 1.0 };
                ctx.set_stroke_style_str(&format!("rgba(0,0,0,{alpha:.3})"));
                let cx = w / 2.0;
                let cy = h / 2.0;
                for i in 0..RING_PAIRS {
                    let spec = ring_spec(i, w, h, progress);
                    stroke_ellipse(&ctx, cx + spec.offset, cy, &spec);
                    stroke_ellipse(&ctx, cx - spec.offset, cy, &spec);
                }
            })
        };

        // Self-rescheduling animation frame loop.
        let raf_id = Rc::new(RefCell::new(None));
        let frame_cb: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
        {
            let raf_id = raf_id.clone();
            let frame_cb_inner = frame_cb.clone();
            let window_loop = window.clone();
            *frame_cb.borrow_mut() = Some(Closure::wrap(Box::new(move || {
                draw();
                if let Ok(id) = window_loop.request_animation_frame(
                    frame_cb_inner
                        .borrow()
                        .as_ref()
                        .unwrap()
                        .as_ref()
                        .unchecked_ref(),
                ) {
                    *raf_id.borrow_mut() = Some(id);
                }
            }) as Box<dyn FnMut()>));
        }
        if let Ok(id) = window
            .request_animation_frame(frame_cb.borrow().as_ref().unwrap().as_ref().unchecked_ref())
        {
            *raf_id.borrow_mut() = Some(id);
        }

        let resize_cb = super::resize_to_host(&canvas, host);
        window
            .add_event_listener_with_callback("resize", resize_cb.as_ref().unchecked_ref())
            .ok()?;

        Some(Self {
            canvas,
            raf_id,
            frame_cb,
            resize_cb,
        })
    }

    pub fn dispose(self) {
        if let Some(window) = web_sys::window() {
            if let Some(id) = self.raf_id.borrow_mut().take() {
                let _ = window.cancel_animation_frame(id);
            }
            let _ = window.remove_event_listener_with_callback(
                "resize",
                self.resize_cb.as_ref().unchecked_ref(),
            );
        }
        let _ = self.frame_cb.borrow_mut().take();
        self.canvas.remove();
    }
}

fn stroke_ellipse(ctx: &CanvasRenderingContext2d, cx: f64, cy: f64, spec: &EllipseSpec) {
    ctx.begin_path();
    let _ = ctx.ellipse(
        cx,
        cy,
        (spec.width / 2.0).max(0.0),
        (spec.height / 2.0).max(0.0),
        0.0,
        0.0,
        std::f64::consts::TAU,
    );
    ctx.stroke();
}

// Glyph layer: stamps random symbols along each ellipse outline at a
// capped frame rate. A CSS mask keeps it visible only near the pointer.

use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, HtmlElement};

use crate::render::geometry::{CollapseAnim, RING_PAIRS, glyph_steps, ring_spec, step_angle};
use crate::state::pointer::{MASK_SIZE, Pointer};

const GLYPHS: [&str; 7] = ["%", "@", "!", "*", "&", "^", "#"];
/// Random text layout is costly, so this layer redraws at 24 fps instead
/// of every refresh.
const FRAME_MS: i32 = 1000 / 24;

pub struct AsciiRenderer {
    canvas: HtmlCanvasElement,
    interval_id: i32,
    _tick: Closure<dyn FnMut()>,
    resize_cb: Closure<dyn FnMut(web_sys::Event)>,
}

impl AsciiRenderer {
    /// Same contract as `OutlineRenderer::mount`, with the interval loop
    /// and pointer mask on top.
    pub fn mount(host: &HtmlElement, collapse_on: Rc<RefCell<bool>>) -> Option<Self> {
        let window = web_sys::window()?;
        let canvas = super::layer_canvas(host, "2")?;
        apply_mask_styles(&canvas)?;

        let anim = Rc::new(RefCell::new(CollapseAnim::default()));
        let tick = {
            let canvas = canvas.clone();
            Closure::wrap(Box::new(move || {
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
                let alpha = if on { 100.0 / 255.0 } else { 1.0 };
                ctx.set_fill_style_str(&format!("rgba(0,0,0,{alpha:.3})"));
                ctx.set_font("8px monospace");
                ctx.set_text_align("center");
                ctx.set_text_baseline("middle");
                let cx = w / 2.0;
                let cy = h / 2.0;
                for i in 0..RING_PAIRS {
                    let spec = ring_spec(i, w, h, progress);
                    stamp_ring(&ctx, cx + spec.offset, cy, spec.width, spec.height);
                    stamp_ring(&ctx, cx - spec.offset, cy, spec.width, spec.height);
                }
            }) as Box<dyn FnMut()>)
        };
        let interval_id = window
            .set_interval_with_callback_and_timeout_and_arguments_0(
                tick.as_ref().unchecked_ref(),
                FRAME_MS,
            )
            .ok()?;

        let resize_cb = super::resize_to_host(&canvas, host);
        window
            .add_event_listener_with_callback("resize", resize_cb.as_ref().unchecked_ref())
            .ok()?;

        Some(Self {
            canvas,
            interval_id,
            _tick: tick,
            resize_cb,
        })
    }

    /// Recenter the pointer-follow mask; called on every pointer move.
    pub fn set_mask_position(&self, pointer: &Pointer) {
        let (mx, my) = pointer.mask_origin();
        let pos = format!("{mx}px {my}px");
        let style = self.canvas.style();
        let _ = style.set_property("mask-position", &pos);
        let _ = style.set_property("-webkit-mask-position", &pos);
    }

    pub fn dispose(self) {
        if let Some(window) = web_sys::window() {
            window.clear_interval_with_handle(self.interval_id);
            let _ = window.remove_event_listener_with_callback(
                "resize",
                self.resize_cb.as_ref().unchecked_ref(),
            );
        }
        self.canvas.remove();
    }
}

fn apply_mask_styles(canvas: &HtmlCanvasElement) -> Option<()> {
    let style = canvas.style();
    let size = format!("{MASK_SIZE}px {MASK_SIZE}px");
    let origin = Pointer::default().mask_origin();
    let pos = format!("{}px {}px", origin.0, origin.1);
    for prefix in ["mask", "-webkit-mask"] {
        style
            .set_property(
                &format!("{prefix}-image"),
                "radial-gradient(circle, black 40%, transparent 70%)",
            )
            .ok()?;
        style.set_property(&format!("{prefix}-size"), &size).ok()?;
        style
            .set_property(&format!("{prefix}-repeat"), "no-repeat")
            .ok()?;
        style.set_property(&format!("{prefix}-position"), &pos).ok()?;
    }
    Some(())
}

fn stamp_ring(ctx: &CanvasRenderingContext2d, cx: f64, cy: f64, width: f64, height: f64) {
    let a = (width / 2.0).max(0.0);
    let b = (height / 2.0).max(0.0);
    let steps = glyph_steps(a * 2.0, b * 2.0);
    for i in 0..steps {
        let angle = step_angle(i, steps);
        let x = cx + a * angle.cos();
        let y = cy + b * angle.sin();
        let glyph = GLYPHS[(js_sys::Math::random() * GLYPHS.len() as f64) as usize];
        let _ = ctx.fill_text(glyph, x, y);
    }
}

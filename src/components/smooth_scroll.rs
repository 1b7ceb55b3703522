use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{AddEventListenerOptions, ScrollToOptions};
use yew::prelude::*;

use crate::state::Glide;

/// Line-mode wheel deltas (deltaMode 1) arrive in rows, not pixels.
const LINE_HEIGHT_PX: f64 = 16.0;

#[derive(Properties, PartialEq)]
pub struct SmoothScrollProps {
    #[prop_or_default]
    pub children: Html,
}

/// Wraps the page in wheel-eased scrolling: wheel deltas accumulate into
/// a clamped target and an animation-frame loop glides the window toward
/// it. While resting the loop adopts the real scroll position, so native
/// smooth scrolling (nav clicks, keyboard, touch) passes through.
#[function_component(SmoothScroll)]
pub fn smooth_scroll(props: &SmoothScrollProps) -> Html {
    let glide = use_mut_ref(Glide::default);

    {
        let glide = glide.clone();
        use_effect_with((), move |_| {
            let window = web_sys::window().expect("window");
            glide.borrow_mut().sync(window.scroll_y().unwrap_or(0.0));

            // Wheel must be non-passive to take over from the browser.
            let wheel_cb = {
                let glide = glide.clone();
                let window = window.clone();
                Closure::wrap(Box::new(move |e: web_sys::WheelEvent| {
                    e.prevent_default();
                    let delta = match e.delta_mode() {
                        web_sys::WheelEvent::DOM_DELTA_LINE => e.delta_y() * LINE_HEIGHT_PX,
                        _ => e.delta_y(),
                    };
                    glide.borrow_mut().push(delta, max_scroll(&window));
                }) as Box<dyn FnMut(_)>)
            };
            let wheel_opts = AddEventListenerOptions::new();
            wheel_opts.set_passive(false);
            window
                .add_event_listener_with_callback_and_add_event_listener_options(
                    "wheel",
                    wheel_cb.as_ref().unchecked_ref(),
                    &wheel_opts,
                )
                .ok();

            // Self-rescheduling animation frame loop.
            let raf_id = Rc::new(RefCell::new(None));
            let frame_cb: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
            {
                let raf_id = raf_id.clone();
                let frame_cb_inner = frame_cb.clone();
                let glide = glide.clone();
                let window_loop = window.clone();
                *frame_cb.borrow_mut() = Some(Closure::wrap(Box::new(move || {
                    {
                        let mut g = glide.borrow_mut();
                        if g.resting() {
                            g.sync(window_loop.scroll_y().unwrap_or(0.0));
                        } else {
                            let y = g.advance();
                            let opts = ScrollToOptions::new();
                            opts.set_top(y);
                            window_loop.scroll_to_with_scroll_to_options(&opts);
                        }
                    }
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
            if let Ok(id) = window.request_animation_frame(
                frame_cb.borrow().as_ref().unwrap().as_ref().unchecked_ref(),
            ) {
                *raf_id.borrow_mut() = Some(id);
            }

            move || {
                let _ = window.remove_event_listener_with_callback(
                    "wheel",
                    wheel_cb.as_ref().unchecked_ref(),
                );
                if let Some(id) = raf_id.borrow_mut().take() {
                    let _ = window.cancel_animation_frame(id);
                }
                let _ = frame_cb.borrow_mut().take();
                let _keep_alive = &wheel_cb;
            }
        });
    }

    html! { <>{ props.children.clone() }</> }
}

fn max_scroll(window: &web_sys::Window) -> f64 {
    let page = window
        .document()
        .and_then(|d| d.document_element())
        .map(|root| root.scroll_height() as f64)
        .unwrap_or(0.0);
    let view = window
        .inner_height()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);
    (page - view).max(0.0)
}

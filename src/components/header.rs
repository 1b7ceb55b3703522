use std::cell::Cell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{AddEventListenerOptions, HtmlElement, ScrollBehavior, ScrollIntoViewOptions};
use yew::platform::spawn_local;
use yew::prelude::*;

use crate::render::{AsciiRenderer, OutlineRenderer};
use crate::state::{Pointer, ScrollTracker};
use crate::util::clog;

use super::nav_link::NavLink;

const NAV_ITEMS: [(&str, &str); 3] = [
    ("ABOUT ME", "aboutme"),
    ("WORKS", "works"),
    ("CONTACT", "footer"),
];

struct Renderers {
    outline: OutlineRenderer,
    ascii: AsciiRenderer,
}

#[function_component(Header)]
pub fn header() -> Html {
    let header_ref = use_node_ref();
    let tracker = use_mut_ref(ScrollTracker::default);
    // Collapse signal: written only by the scroll handler, read by both
    // renderer draw loops.
    let collapse_on = use_mut_ref(|| false);
    let pointer = use_mut_ref(Pointer::default);
    let renderers = use_mut_ref(|| None::<Renderers>);
    let dimmed = use_state(|| false);

    {
        let header_ref = header_ref.clone();
        let tracker = tracker.clone();
        let collapse_on = collapse_on.clone();
        let pointer = pointer.clone();
        let renderers = renderers.clone();
        let dimmed = dimmed.clone();
        use_effect_with((), move |_| {
            let window = web_sys::window().expect("window");
            let mounted = Rc::new(Cell::new(true));

            // Passive scroll listener; must never block scrolling.
            let scroll_cb = {
                let tracker = tracker.clone();
                let collapse_on = collapse_on.clone();
                let dimmed = dimmed.clone();
                let window = window.clone();
                Closure::wrap(Box::new(move |_e: web_sys::Event| {
                    let y = window.scroll_y().unwrap_or(0.0);
                    if let Some(signal) = tracker.borrow_mut().observe(y) {
                        *collapse_on.borrow_mut() = signal;
                        dimmed.set(signal);
                    }
                }) as Box<dyn FnMut(_)>)
            };
            let scroll_opts = AddEventListenerOptions::new();
            scroll_opts.set_passive(true);
            window
                .add_event_listener_with_callback_and_add_event_listener_options(
                    "scroll",
                    scroll_cb.as_ref().unchecked_ref(),
                    &scroll_opts,
                )
                .ok();

            // Pointer moves drive the glyph-layer mask.
            let mousemove_cb = {
                let pointer = pointer.clone();
                let renderers = renderers.clone();
                Closure::wrap(Box::new(move |e: web_sys::MouseEvent| {
                    let mut p = pointer.borrow_mut();
                    p.x = e.client_x() as f64;
                    p.y = e.client_y() as f64;
                    if let Some(r) = &*renderers.borrow() {
                        r.ascii.set_mask_position(&p);
                    }
                }) as Box<dyn FnMut(_)>)
            };
            window
                .add_event_listener_with_callback(
                    "mousemove",
                    mousemove_cb.as_ref().unchecked_ref(),
                )
                .ok();

            // Renderers attach asynchronously; the `mounted` cell is
            // captured before the hop so a late resolution after unmount
            // never touches the detached anchor.
            {
                let mounted = mounted.clone();
                let header_ref = header_ref.clone();
                let collapse_on = collapse_on.clone();
                let renderers = renderers.clone();
                spawn_local(async move {
                    if !mounted.get() {
                        clog("header unmounted before renderers attached");
                        return;
                    }
                    let Some(host) = header_ref.cast::<HtmlElement>() else {
                        return;
                    };
                    let outline = OutlineRenderer::mount(&host, collapse_on.clone());
                    let ascii = AsciiRenderer::mount(&host, collapse_on);
                    if let (Some(outline), Some(ascii)) = (outline, ascii) {
                        *renderers.borrow_mut() = Some(Renderers { outline, ascii });
                    }
                });
            }

            move || {
                mounted.set(false);
                let _ = window.remove_event_listener_with_callback(
                    "scroll",
                    scroll_cb.as_ref().unchecked_ref(),
                );
                let _ = window.remove_event_listener_with_callback(
                    "mousemove",
                    mousemove_cb.as_ref().unchecked_ref(),
                );
                if let Some(r) = renderers.borrow_mut().take() {
                    r.outline.dispose();
                    r.ascii.dispose();
                }
                let _keep_alive = (&scroll_cb, &mousemove_cb);
            }
        });
    }

    let on_select = Callback::from(|target: &'static str| {
        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            return;
        };
        let el = if target == "footer" {
            document.query_selector("footer").ok().flatten()
        } else {
            document.get_element_by_id(target)
        };
        if let Some(el) = el {
            let opts = ScrollIntoViewOptions::new();
            opts.set_behavior(ScrollBehavior::Smooth);
            el.scroll_into_view_with_scroll_into_view_options(&opts);
        }
    });

    html! {
        <header ref={header_ref} style="position:fixed; top:0; left:0; z-index:50; width:100%; height:64px; display:flex; align-items:center;">
            <ul style="display:flex; width:100%; justify-content:space-between; padding:0 32px; margin:0; list-style:none; cursor:pointer;">
                { for NAV_ITEMS.into_iter().map(|(label, target)| html! {
                    <NavLink {label} {target} dimmed={*dimmed} on_select={on_select.clone()} />
                }) }
            </ul>
        </header>
    }
}

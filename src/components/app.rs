use yew::prelude::*;

use super::header::Header;
use super::smooth_scroll::SmoothScroll;

#[function_component(App)]
pub fn app() -> Html {
    // Header mounts one render late so the first paint never waits on it.
    let header_ready = use_state(|| false);
    {
        let header_ready = header_ready.clone();
        use_effect_with((), move |_| {
            header_ready.set(true);
            || ()
        });
    }

    html! {
        <SmoothScroll>
            if *header_ready {
                <Header />
            }
            <main>
                <section id="aboutme" style="min-height:100vh; display:flex; align-items:center; justify-content:center; background:#f9dce2;">
                    <p>{ "about me" }</p>
                </section>
                <section id="works" style="min-height:100vh; display:flex; align-items:center; justify-content:center; background:#f3c9d4;">
                    <p>{ "works" }</p>
                </section>
            </main>
            <footer style="min-height:60vh; display:flex; align-items:center; justify-content:center; background:#111; color:#eee;">
                <p>{ "contact" }</p>
            </footer>
        </SmoothScroll>
    }
}

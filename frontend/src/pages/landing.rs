use yew::prelude::*;

use crate::sections::{CallToAction, Demo, Faq, Features, Footer, Hero, Testimonials};

#[function_component(Landing)]
pub fn landing() -> Html {
    // Scroll to top only on initial mount
    {
        use_effect_with_deps(
            move |_| {
                if let Some(window) = web_sys::window() {
                    window.scroll_to_with_x_and_y(0.0, 0.0);
                }
                || ()
            },
            (),
        );
    }

    html! {
        <div class="landing-page">
            <Hero />
            <main>
                <Features />
                <Demo />
                <Testimonials />
                <Faq />
                <CallToAction />
            </main>
            <Footer />
        </div>
    }
}

use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::Button;
use crate::Route;

#[function_component(CallToAction)]
pub fn call_to_action() -> Html {
    let navigator = use_navigator();
    let onclick = Callback::from(move |_: MouseEvent| {
        if let Some(navigator) = &navigator {
            navigator.push(&Route::Upload);
        }
    });

    html! {
        <section class="cta-section">
            <h2>{"Your next meeting could take care of itself"}</h2>
            <p>{"Three free hours every month. No card, no setup."}</p>
            <Button icon="microphone" onclick={onclick}>{"Try it with a recording"}</Button>
        </section>
    }
}

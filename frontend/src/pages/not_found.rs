use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::Button;
use crate::Route;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    let navigator = use_navigator();
    let go_home = Callback::from(move |_: MouseEvent| {
        if let Some(navigator) = &navigator {
            navigator.push(&Route::Landing);
        }
    });

    html! {
        <div class="not-found-page">
            <h1 class="not-found-code">{"404"}</h1>
            <p>{"This page wandered off mid-meeting."}</p>
            <Button icon="home" onclick={go_home}>{"Go home"}</Button>
        </div>
    }
}

use yew::prelude::*;
use yew_router::prelude::*;

mod components;
mod config;
mod content;
mod hooks;
mod icons;
mod pages;
mod sections;
mod timers;

use pages::{landing::Landing, not_found::NotFound, upload::Upload};

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Landing,
    #[at("/upload")]
    Upload,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Landing => html! { <Landing /> },
        Route::Upload => html! { <Upload /> },
        Route::NotFound => html! { <NotFound /> },
    }
}

#[function_component(App)]
fn app() -> Html {
    html! {
        <BrowserRouter>
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}

fn main() {
    tracing_wasm::set_as_global_default();
    yew::Renderer::<App>::new().render();
}

use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::{LoadingSpinner, SpinnerSize};
use crate::Route;

/// Placeholder for the upload flow, which isn't served from this site yet.
#[function_component(Upload)]
pub fn upload() -> Html {
    html! {
        <div class="upload-page">
            <h1>{"Getting your workspace ready"}</h1>
            <LoadingSpinner size={SpinnerSize::Large} label="Preparing the uploader" />
            <p>{"Uploads are opening to everyone soon. We'll email you the moment yours is ready."}</p>
            <Link<Route> to={Route::Landing} classes="back-link">
                {"Back to the homepage"}
            </Link<Route>>
        </div>
    }
}

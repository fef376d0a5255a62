use yew::prelude::*;

use crate::content::{Feature, FEATURES};
use crate::icons::Icon;

fn feature_card(feature: &Feature) -> Html {
    html! {
        <article class="feature-card">
            <div class="feature-icon"><Icon name={feature.icon} /></div>
            <h3>{feature.title}</h3>
            <p>{feature.description}</p>
        </article>
    }
}

#[function_component(Features)]
pub fn features() -> Html {
    html! {
        <section id="features" class="features-section">
            <h2>{"Everything you need after the call ends"}</h2>
            <div class="feature-grid">
                { for FEATURES.iter().map(feature_card) }
            </div>
        </section>
    }
}

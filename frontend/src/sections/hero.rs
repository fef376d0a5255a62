use wasm_bindgen::prelude::Closure;
use wasm_bindgen::JsCast;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::Button;
use crate::config;
use crate::content::HERO_WORDS;
use crate::hooks::use_rotation;
use crate::Route;

fn dim_factor(scroll_y: f64) -> f64 {
    (scroll_y / config::HERO_DIM_DISTANCE).min(1.0) * config::HERO_DIM_MAX
}

#[function_component(Hero)]
pub fn hero() -> Html {
    let dim_opacity = use_state(|| 0.0);
    let rotation = use_rotation(HERO_WORDS.len(), config::WORD_ROTATION_PERIOD);
    let navigator = use_navigator();

    // Dim the hero as the page scrolls away from it
    {
        let dim_opacity = dim_opacity.clone();
        use_effect_with_deps(
            move |_| {
                let destructor: Box<dyn FnOnce()> = if let Some(window) = web_sys::window() {
                    let callback = Closure::<dyn Fn()>::new({
                        let dim_opacity = dim_opacity.clone();
                        move || {
                            if let Some(win) = web_sys::window() {
                                if let Ok(scroll_y) = win.scroll_y() {
                                    dim_opacity.set(dim_factor(scroll_y));
                                }
                            }
                        }
                    });
                    let attached = window
                        .add_event_listener_with_callback("scroll", callback.as_ref().unchecked_ref())
                        .is_ok();
                    if !attached {
                        gloo_console::error!("could not attach hero scroll listener");
                    }
                    if let Ok(scroll_y) = window.scroll_y() {
                        dim_opacity.set(dim_factor(scroll_y));
                    }
                    Box::new(move || {
                        if let Some(win) = web_sys::window() {
                            let _ = win.remove_event_listener_with_callback(
                                "scroll",
                                callback.as_ref().unchecked_ref(),
                            );
                        }
                    })
                } else {
                    Box::new(|| ())
                };
                move || {
                    destructor();
                }
            },
            (),
        );
    }

    let word = HERO_WORDS
        .get(rotation.state.active_index)
        .copied()
        .unwrap_or_default();

    let open_upload = Callback::from(move |_: MouseEvent| {
        if let Some(navigator) = &navigator {
            navigator.push(&Route::Upload);
        }
    });

    html! {
        <header class="hero">
            <div class="hero-background"></div>
            <div class="hero-overlay" style={format!("opacity: {};", *dim_opacity)}></div>
            <div class="hero-content">
                <h1 class="hero-title">
                    {"Perfect notes for your "}
                    <span class="hero-word">{word}</span>
                </h1>
                <p class="hero-subtitle">
                    {"Upload a recording and get a transcript, a summary and the action items in minutes."}
                </p>
                <div class="hero-cta-group">
                    <Button icon="upload" onclick={open_upload}>{"Upload a recording"}</Button>
                    <a href="#demo" class="btn btn-ghost">{"See the demo"}</a>
                </div>
            </div>
        </header>
    }
}

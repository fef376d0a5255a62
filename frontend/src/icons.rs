use yew::prelude::*;

const FALLBACK: &str = "fas fa-circle";

/// Maps a symbolic icon name to its Font Awesome classes.
pub fn glyph(name: &str) -> &'static str {
    match name {
        "microphone" => "fas fa-microphone",
        "upload" => "fas fa-cloud-arrow-up",
        "transcript" => "fas fa-file-lines",
        "summary" => "fas fa-list-check",
        "search" => "fas fa-magnifying-glass",
        "speakers" => "fas fa-users",
        "languages" => "fas fa-language",
        "lock" => "fas fa-lock",
        "bolt" => "fas fa-bolt",
        "quote" => "fas fa-quote-left",
        "chevron-left" => "fas fa-chevron-left",
        "chevron-right" => "fas fa-chevron-right",
        "chevron-down" => "fas fa-chevron-down",
        "pause" => "fas fa-pause",
        "play" => "fas fa-play",
        "home" => "fas fa-house",
        "github" => "fab fa-github",
        "twitter" => "fab fa-x-twitter",
        "linkedin" => "fab fa-linkedin",
        _ => FALLBACK,
    }
}

#[derive(Properties, PartialEq)]
pub struct IconProps {
    pub name: AttrValue,
    #[prop_or_default]
    pub class: Classes,
}

#[function_component(Icon)]
pub fn icon(props: &IconProps) -> Html {
    html! {
        <i class={classes!(glyph(&props.name), props.class.clone())} aria-hidden="true"></i>
    }
}

use yew::prelude::*;

#[derive(Clone, Copy, PartialEq, Default)]
pub enum SpinnerSize {
    #[default]
    Medium,
    Large,
}

#[derive(Properties, PartialEq)]
pub struct LoadingSpinnerProps {
    #[prop_or_default]
    pub size: SpinnerSize,
    #[prop_or_default]
    pub label: Option<AttrValue>,
}

#[function_component(LoadingSpinner)]
pub fn loading_spinner(props: &LoadingSpinnerProps) -> Html {
    let size = match props.size {
        SpinnerSize::Medium => "spinner-md",
        SpinnerSize::Large => "spinner-lg",
    };
    let label = props
        .label
        .clone()
        .unwrap_or_else(|| AttrValue::from("Loading"));
    html! {
        <div class="spinner-wrapper" role="status" aria-live="polite">
            <div class={classes!("spinner", size)} aria-hidden="true"></div>
            <span class="spinner-label">{label}</span>
        </div>
    }
}

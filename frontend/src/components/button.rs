use web_sys::MouseEvent;
use yew::prelude::*;

use crate::icons::Icon;

#[derive(Clone, Copy, PartialEq, Default)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Secondary,
    Ghost,
}

impl ButtonVariant {
    fn class(self) -> &'static str {
        match self {
            ButtonVariant::Primary => "btn-primary",
            ButtonVariant::Secondary => "btn-secondary",
            ButtonVariant::Ghost => "btn-ghost",
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct ButtonProps {
    #[prop_or_default]
    pub variant: ButtonVariant,
    #[prop_or_default]
    pub icon: Option<AttrValue>,
    #[prop_or_default]
    pub aria_label: Option<AttrValue>,
    #[prop_or_default]
    pub pressed: Option<bool>,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub onclick: Callback<MouseEvent>,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(Button)]
pub fn button(props: &ButtonProps) -> Html {
    let pressed = props.pressed.map(|p| AttrValue::from(if p { "true" } else { "false" }));
    html! {
        <button
            type="button"
            class={classes!("btn", props.variant.class(), props.class.clone())}
            aria-label={props.aria_label.clone()}
            aria-pressed={pressed}
            onclick={props.onclick.clone()}
        >
            if let Some(icon) = props.icon.clone() {
                <Icon name={icon} />
            }
            { for props.children.iter() }
        </button>
    }
}

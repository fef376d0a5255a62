use yew::prelude::*;

use crate::content::{DemoTab, DEMO_TABS};
use crate::hooks::use_disclosure;
use crate::icons::Icon;

fn demo_panel(tab: &DemoTab) -> Html {
    html! {
        <div class="demo-panel" role="tabpanel">
            <h3>{tab.heading}</h3>
            <ul class="demo-lines">
                { for tab.lines.iter().map(|line| html! { <li>{*line}</li> }) }
            </ul>
            <p class="demo-note">{"Sample output. Upload your own recording to see real notes."}</p>
        </div>
    }
}

#[function_component(Demo)]
pub fn demo() -> Html {
    let tabs = use_disclosure(DEMO_TABS.len(), Some(0));

    html! {
        <section id="demo" class="demo-section">
            <h2>{"One recording, three views"}</h2>
            <div class="demo-tabs" role="tablist">
                { for DEMO_TABS.iter().enumerate().map(|(index, tab)| {
                    let selected = tabs.is_open(index);
                    let toggle = tabs.toggle.clone();
                    html! {
                        <button
                            type="button"
                            role="tab"
                            class={classes!("demo-tab", selected.then_some("active"))}
                            aria-selected={if selected { "true" } else { "false" }}
                            onclick={Callback::from(move |_: MouseEvent| toggle.emit(index))}
                        >
                            <Icon name={tab.icon} />
                            <span>{tab.label}</span>
                        </button>
                    }
                }) }
            </div>
            {
                match tabs.open_index().and_then(|index| DEMO_TABS.get(index)) {
                    Some(tab) => demo_panel(tab),
                    None => html! {
                        <p class="demo-empty">{"Pick a view above to see what Noteflow produces."}</p>
                    },
                }
            }
        </section>
    }
}

use yew::prelude::*;

use crate::content::FAQ;
use crate::hooks::use_disclosure;
use crate::icons::Icon;

#[function_component(Faq)]
pub fn faq() -> Html {
    let disclosure = use_disclosure(FAQ.len(), None);

    html! {
        <section id="faq" class="faq-section">
            <h2>{"Frequently asked questions"}</h2>
            <div class="faq-list">
                { for FAQ.iter().enumerate().map(|(index, entry)| {
                    let is_open = disclosure.is_open(index);
                    let toggle = disclosure.toggle.clone();
                    let onclick = Callback::from(move |e: MouseEvent| {
                        e.prevent_default();
                        toggle.emit(index);
                    });
                    let answer_id = format!("faq-answer-{}", index);
                    html! {
                        <div class={classes!("faq-item", is_open.then_some("open"))}>
                            <button
                                type="button"
                                class="faq-question"
                                aria-expanded={if is_open { "true" } else { "false" }}
                                aria-controls={answer_id.clone()}
                                onclick={onclick}
                            >
                                <span class="question-text">{entry.question}</span>
                                <Icon name="chevron-down" class={classes!("toggle-icon")} />
                            </button>
                            if is_open {
                                <div id={answer_id} class="faq-answer">
                                    <p>{entry.answer}</p>
                                </div>
                            }
                        </div>
                    }
                }) }
            </div>
        </section>
    }
}

use yew::prelude::*;

use crate::components::{Button, ButtonVariant};
use crate::config;
use crate::content::TESTIMONIALS;
use crate::hooks::use_rotation;
use crate::icons::Icon;

#[function_component(Testimonials)]
pub fn testimonials() -> Html {
    let rotation = use_rotation(TESTIMONIALS.len(), config::TESTIMONIAL_ROTATION_PERIOD);
    let active = rotation.state.active_index;
    let Some(testimonial) = TESTIMONIALS.get(active) else {
        return html! {};
    };

    let on_previous = rotation.previous.reform(|_: MouseEvent| ());
    let on_next = rotation.next.reform(|_: MouseEvent| ());
    let on_toggle = rotation.toggle_auto.reform(|_: MouseEvent| ());
    let auto = rotation.state.auto_advance;

    html! {
        <section id="testimonials" class="testimonials-section" aria-roledescription="carousel">
            <h2>{"Loved by people who hate taking notes"}</h2>
            <div class="testimonial-stage">
                <Button
                    variant={ButtonVariant::Ghost}
                    class={classes!("carousel-arrow")}
                    icon="chevron-left"
                    aria_label="Previous testimonial"
                    onclick={on_previous}
                />
                <figure class="testimonial-card" aria-live={if auto { "off" } else { "polite" }}>
                    <Icon name="quote" class={classes!("testimonial-quote-mark")} />
                    <blockquote>{testimonial.quote}</blockquote>
                    <figcaption>
                        <span class="testimonial-avatar" aria-hidden="true">{testimonial.initials()}</span>
                        <div>
                            <strong>{testimonial.author}</strong>
                            <span>{testimonial.role}</span>
                        </div>
                    </figcaption>
                </figure>
                <Button
                    variant={ButtonVariant::Ghost}
                    class={classes!("carousel-arrow")}
                    icon="chevron-right"
                    aria_label="Next testimonial"
                    onclick={on_next}
                />
            </div>
            <div class="carousel-controls">
                <div class="carousel-dots" role="tablist">
                    { for (0..TESTIMONIALS.len()).map(|index| {
                        let go_to = rotation.go_to.clone();
                        let onclick = Callback::from(move |_: MouseEvent| go_to.emit(index));
                        html! {
                            <button
                                type="button"
                                role="tab"
                                class={classes!("carousel-dot", (index == active).then_some("active"))}
                                aria-label={format!("Show testimonial {}", index + 1)}
                                aria-selected={if index == active { "true" } else { "false" }}
                                onclick={onclick}
                            ></button>
                        }
                    }) }
                </div>
                <Button
                    variant={ButtonVariant::Secondary}
                    class={classes!("carousel-toggle")}
                    icon={if auto { "pause" } else { "play" }}
                    aria_label={if auto { "Pause testimonials" } else { "Play testimonials" }}
                    pressed={!auto}
                    onclick={on_toggle}
                />
            </div>
        </section>
    }
}

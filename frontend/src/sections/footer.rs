use yew::prelude::*;
use yew_router::prelude::*;

use crate::content::{FOOTER_LINKS, SOCIAL_LINKS};
use crate::icons::Icon;
use crate::Route;

#[function_component(Footer)]
pub fn footer() -> Html {
    html! {
        <footer class="site-footer">
            <div class="footer-brand">
                <Link<Route> to={Route::Landing} classes="footer-logo">
                    {"noteflow"}
                </Link<Route>>
                <p>{"Notes that write themselves."}</p>
            </div>
            <nav class="footer-links">
                { for FOOTER_LINKS.iter().map(|link| html! {
                    <a href={link.href}>{link.label}</a>
                }) }
            </nav>
            <div class="footer-social">
                { for SOCIAL_LINKS.iter().map(|(icon, href)| html! {
                    <a href={*href} target="_blank" rel="noopener noreferrer" aria-label={*icon}>
                        <Icon name={*icon} />
                    </a>
                }) }
            </div>
            <p class="footer-legal">{"© Noteflow. All rights reserved."}</p>
        </footer>
    }
}

use yew::prelude::*;

use crate::hooks::use_clock::use_clock;

#[derive(Properties, PartialEq)]
pub struct HeaderProps {
    pub title: AttrValue,
}

/// Top bar with the page title and a live clock
#[function_component(Header)]
pub fn header(props: &HeaderProps) -> Html {
    let now = use_clock();

    html! {
        <header class="app-header">
            <h1>{&props.title}</h1>
            <div class="header-clock" title="Local time">
                <span class="clock-date">{now.format("%a %d %b %Y").to_string()}</span>
                <span class="clock-time">{now.format("%H:%M:%S").to_string()}</span>
            </div>
        </header>
    }
}

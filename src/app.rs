use yew::prelude::*;

use crate::components::{Header, Sidebar};
use crate::hooks::use_page::use_page;

#[function_component(App)]
pub fn app() -> Html {
    let page = use_page();

    html! {
        <div class="app-container">
            <Sidebar active={page.page} on_select={page.set_page.clone()} />

            <div class="app-body">
                <Header title={page.page.title()} />
                <main class="app-main">
                    {page.page.view()}
                </main>
            </div>

            <style>
                {include_str!("style.css")}
            </style>
        </div>
    }
}

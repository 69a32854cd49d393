use yew::prelude::*;

use crate::pages::Page;

#[derive(Properties, PartialEq)]
pub struct SidebarProps {
    pub active: Page,
    pub on_select: Callback<Page>,
}

#[function_component(Sidebar)]
pub fn sidebar(props: &SidebarProps) -> Html {
    html! {
        <nav class="sidebar" aria-label="Dashboard pages">
            <div class="sidebar-brand">{"SolarFlux"}</div>
            <ul>
                {
                    Page::all().iter().map(|&page| {
                        let onclick = {
                            let on_select = props.on_select.clone();
                            Callback::from(move |_: MouseEvent| on_select.emit(page))
                        };
                        let class = classes!(
                            "sidebar-link",
                            (page == props.active).then_some("active")
                        );
                        html! {
                            <li>
                                <button {class} {onclick} title={page.description()}>
                                    <span class="sidebar-icon">{page.icon()}</span>
                                    <span>{page.title()}</span>
                                </button>
                            </li>
                        }
                    }).collect::<Html>()
                }
            </ul>
        </nav>
    }
}

use crate::hooks::use_analytics::FetchStatus;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct StatusProps {
    pub status: FetchStatus,
    #[prop_or_else(|| "Choose filters and press Generate".to_string())]
    pub idle_hint: String,
}

#[function_component(Status)]
pub fn status(props: &StatusProps) -> Html {
    match &props.status {
        FetchStatus::Idle => html! {
            <div class="status idle">
                <p>{&props.idle_hint}</p>
            </div>
        },
        FetchStatus::Loading => html! {
            <div class="status loading">
                <div class="spinner"></div>
                <p>{"Loading data..."}</p>
            </div>
        },
        FetchStatus::Loaded => html! {},
        FetchStatus::Error(msg) => html! {
            <div class="status error">
                <p>{"Error: "}{msg}</p>
            </div>
        },
    }
}

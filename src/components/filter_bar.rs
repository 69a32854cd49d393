use chrono::NaiveDate;
use std::rc::Rc;
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

use crate::config::Config;
use crate::hooks::use_plants::load_plant_preference;
use crate::models::filters::{FilterUpdate, Filters, parse_cluster_count};
use crate::models::plant::{Plant, find_plant};

/// Which optional pickers a page shows. Plant and dates are always shown.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Pickers {
    pub inverter: bool,
    pub mppt: bool,
    pub string: bool,
    pub clusters: bool,
}

impl Pickers {
    pub const NONE: Self = Self {
        inverter: false,
        mppt: false,
        string: false,
        clusters: false,
    };
}

#[derive(Properties, PartialEq)]
pub struct FilterBarProps {
    pub plants: Option<Rc<Vec<Plant>>>,
    pub draft: Filters,
    pub pickers: Pickers,
    pub on_update: Callback<FilterUpdate>,
    pub on_submit: Callback<()>,
    #[prop_or_default]
    pub error: Option<String>,
}

/// Empty option value means "no selection"
fn selected_value(e: &Event) -> Option<String> {
    let target: HtmlSelectElement = e.target_unchecked_into();
    let value = target.value();
    (!value.is_empty()).then_some(value)
}

fn date_value(e: &Event) -> Option<NaiveDate> {
    let target: HtmlInputElement = e.target_unchecked_into();
    NaiveDate::parse_from_str(&target.value(), "%Y-%m-%d").ok()
}

fn options(values: &[&str], selected: Option<&str>, empty_label: &str) -> Html {
    let empty = html! { <option value="" selected={selected.is_none()}>{empty_label}</option> };
    std::iter::once(empty)
        .chain(values.iter().map(|&v| {
            html! { <option value={v.to_string()} selected={selected == Some(v)}>{v}</option> }
        }))
        .collect()
}

#[function_component(FilterBar)]
pub fn filter_bar(props: &FilterBarProps) -> Html {
    let draft = &props.draft;

    // Pick a plant as soon as the list arrives
    {
        let on_update = props.on_update.clone();
        use_effect_with(
            (props.plants.clone(), draft.plant_id.clone()),
            move |(plants, plant_id)| {
                if let Some(plants) = plants {
                    let known = plant_id
                        .as_deref()
                        .is_some_and(|id| find_plant(plants, id).is_some());
                    if !known {
                        let preferred = load_plant_preference()
                            .filter(|id| find_plant(plants, id).is_some())
                            .or_else(|| plants.first().map(|p| p.plant_id.clone()));
                        if preferred.is_some() {
                            on_update.emit(FilterUpdate::Plant(preferred));
                        }
                    }
                }
                || ()
            },
        );
    }

    let plant = props
        .plants
        .as_ref()
        .zip(draft.plant_id.as_deref())
        .and_then(|(plants, id)| find_plant(plants, id));
    let inverter = plant.zip(draft.inverter_id.as_deref()).and_then(|(p, id)| p.inverter(id));
    let mppt = inverter.zip(draft.mppt_id.as_deref()).and_then(|(inv, id)| inv.mppt(id));

    let on_plant = {
        let on_update = props.on_update.clone();
        Callback::from(move |e: Event| on_update.emit(FilterUpdate::Plant(selected_value(&e))))
    };
    let on_start = {
        let on_update = props.on_update.clone();
        Callback::from(move |e: Event| {
            if let Some(date) = date_value(&e) {
                on_update.emit(FilterUpdate::Start(date));
            }
        })
    };
    let on_end = {
        let on_update = props.on_update.clone();
        Callback::from(move |e: Event| {
            if let Some(date) = date_value(&e) {
                on_update.emit(FilterUpdate::End(date));
            }
        })
    };
    let on_inverter = {
        let on_update = props.on_update.clone();
        Callback::from(move |e: Event| on_update.emit(FilterUpdate::Inverter(selected_value(&e))))
    };
    let on_mppt = {
        let on_update = props.on_update.clone();
        Callback::from(move |e: Event| on_update.emit(FilterUpdate::Mppt(selected_value(&e))))
    };
    let on_string = {
        let on_update = props.on_update.clone();
        Callback::from(move |e: Event| on_update.emit(FilterUpdate::String(selected_value(&e))))
    };
    let on_clusters = {
        let on_update = props.on_update.clone();
        Callback::from(move |e: Event| {
            let target: HtmlInputElement = e.target_unchecked_into();
            if let Some(count) = parse_cluster_count(&target.value()) {
                // Show the clamped value even when the draft is unchanged
                target.set_value(&count.to_string());
                on_update.emit(FilterUpdate::ClusterCount(count));
            }
        })
    };
    let on_generate = {
        let on_submit = props.on_submit.clone();
        Callback::from(move |_: MouseEvent| on_submit.emit(()))
    };

    let plant_options = match &props.plants {
        Some(plants) => plants
            .iter()
            .map(|p| {
                let selected = draft.plant_id.as_deref() == Some(p.plant_id.as_str());
                html! { <option value={p.plant_id.clone()} {selected}>{p.label()}</option> }
            })
            .collect::<Html>(),
        None => html! { <option value="" selected=true>{"Loading plants..."}</option> },
    };

    let inverter_ids: Vec<&str> = plant
        .map(|p| p.inverters.iter().map(|i| i.inverter_id.as_str()).collect())
        .unwrap_or_default();
    let mppt_ids: Vec<&str> = inverter
        .map(|inv| inv.mppts.iter().map(|m| m.mppt_id.as_str()).collect())
        .unwrap_or_default();
    let string_ids: Vec<&str> = mppt
        .map(|m| m.strings.iter().map(String::as_str).collect())
        .unwrap_or_default();

    html! {
        <div class="filter-bar">
            <label class="filter-field">
                <span>{"Plant"}</span>
                <select onchange={on_plant} aria-label="Select plant">
                    {plant_options}
                </select>
            </label>

            <label class="filter-field">
                <span>{"From"}</span>
                <input
                    type="date"
                    value={draft.range.start.format("%Y-%m-%d").to_string()}
                    onchange={on_start}
                />
            </label>
            <label class="filter-field">
                <span>{"To"}</span>
                <input
                    type="date"
                    value={draft.range.end.format("%Y-%m-%d").to_string()}
                    onchange={on_end}
                />
            </label>

            if props.pickers.inverter {
                <label class="filter-field">
                    <span>{"Inverter"}</span>
                    <select onchange={on_inverter} disabled={inverter_ids.is_empty()}>
                        {options(&inverter_ids, draft.inverter_id.as_deref(), "All inverters")}
                    </select>
                </label>
            }
            if props.pickers.mppt {
                <label class="filter-field">
                    <span>{"MPPT"}</span>
                    <select onchange={on_mppt} disabled={mppt_ids.is_empty()}>
                        {options(&mppt_ids, draft.mppt_id.as_deref(), "All MPPTs")}
                    </select>
                </label>
            }
            if props.pickers.string {
                <label class="filter-field">
                    <span>{"String"}</span>
                    <select onchange={on_string} disabled={string_ids.is_empty()}>
                        {options(&string_ids, draft.string_id.as_deref(), "All strings")}
                    </select>
                </label>
            }
            if props.pickers.clusters {
                <label class="filter-field">
                    <span>{"Clusters"}</span>
                    <input
                        type="number"
                        min={Config::MIN_CLUSTER_COUNT.to_string()}
                        max={Config::MAX_CLUSTER_COUNT.to_string()}
                        value={draft.cluster_count.unwrap_or(Config::DEFAULT_CLUSTER_COUNT).to_string()}
                        onchange={on_clusters}
                    />
                </label>
            }

            <div class="filter-actions">
                <span class="filter-range" title="Selected period">
                    {draft.range.label_with_days()}
                </span>
                <button class="generate-button" onclick={on_generate}>{"Generate"}</button>
            </div>

            if let Some(error) = &props.error {
                <p class="filter-error">{error}</p>
            }
        </div>
    }
}

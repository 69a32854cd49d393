use yew::prelude::*;

use super::{filter_section, initial_filters};
use crate::components::Pickers;
use crate::components::charts::TemperatureChart;
use crate::hooks::use_filters::use_filters;
use crate::hooks::use_plants::use_plants;

#[function_component(HealthPage)]
pub fn health_page() -> Html {
    let plants = use_plants();
    let filters = use_filters(initial_filters());
    let pickers = Pickers {
        inverter: true,
        mppt: true,
        ..Pickers::NONE
    };

    html! {
        <div class="page">
            {filter_section(&plants, &filters, pickers)}
            <TemperatureChart request={filters.submitted.clone()} generation={filters.generation} />
        </div>
    }
}

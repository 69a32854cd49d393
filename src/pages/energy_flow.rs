use yew::prelude::*;

use super::{filter_section, initial_filters};
use crate::components::Pickers;
use crate::components::charts::SankeyChart;
use crate::hooks::use_filters::use_filters;
use crate::hooks::use_plants::use_plants;

#[function_component(EnergyFlowPage)]
pub fn energy_flow_page() -> Html {
    let plants = use_plants();
    let filters = use_filters(initial_filters());

    html! {
        <div class="page">
            {filter_section(&plants, &filters, Pickers::NONE)}
            <SankeyChart request={filters.submitted.clone()} generation={filters.generation} />
        </div>
    }
}

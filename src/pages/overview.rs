use yew::prelude::*;

use super::{filter_section, initial_filters};
use crate::components::Pickers;
use crate::components::charts::ActivePowerChart;
use crate::hooks::use_filters::use_filters;
use crate::hooks::use_plants::use_plants;

#[function_component(OverviewPage)]
pub fn overview_page() -> Html {
    let plants = use_plants();
    let filters = use_filters(initial_filters());
    let pickers = Pickers {
        inverter: true,
        ..Pickers::NONE
    };

    html! {
        <div class="page">
            {filter_section(&plants, &filters, pickers)}
            <ActivePowerChart request={filters.submitted.clone()} generation={filters.generation} />
        </div>
    }
}

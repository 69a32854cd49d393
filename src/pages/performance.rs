use yew::prelude::*;

use super::{filter_section, initial_filters};
use crate::components::Pickers;
use crate::components::charts::{EfficiencyTable, SuppressionChart};
use crate::hooks::use_filters::use_filters;
use crate::hooks::use_plants::use_plants;

#[function_component(PerformancePage)]
pub fn performance_page() -> Html {
    let plants = use_plants();
    let filters = use_filters(initial_filters());

    html! {
        <div class="page">
            {filter_section(&plants, &filters, Pickers::NONE)}
            <SuppressionChart request={filters.submitted.clone()} generation={filters.generation} />
            <EfficiencyTable request={filters.submitted.clone()} generation={filters.generation} />
        </div>
    }
}

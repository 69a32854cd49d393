use yew::prelude::*;

use super::{filter_section, initial_filters};
use crate::components::Pickers;
use crate::components::charts::{HourlyProfileChart, WeeklyHeatmapChart};
use crate::hooks::use_filters::use_filters;
use crate::hooks::use_plants::use_plants;

#[function_component(AnalyticsPage)]
pub fn analytics_page() -> Html {
    let plants = use_plants();
    let filters = use_filters(initial_filters());
    let pickers = Pickers {
        inverter: true,
        mppt: true,
        string: true,
        clusters: false,
    };

    html! {
        <div class="page">
            {filter_section(&plants, &filters, pickers)}
            <div class="chart-grid">
                <HourlyProfileChart request={filters.submitted.clone()} generation={filters.generation} />
                <WeeklyHeatmapChart request={filters.submitted.clone()} generation={filters.generation} />
            </div>
        </div>
    }
}

use yew::prelude::*;

use super::{filter_section, initial_filters};
use crate::components::Pickers;
use crate::components::charts::ClusterChart;
use crate::config::Config;
use crate::hooks::use_filters::use_filters;
use crate::hooks::use_plants::use_plants;

#[function_component(ClusteringPage)]
pub fn clustering_page() -> Html {
    let plants = use_plants();
    let filters = use_filters(initial_filters().with_clusters(Config::DEFAULT_CLUSTER_COUNT));
    let pickers = Pickers {
        clusters: true,
        ..Pickers::NONE
    };

    html! {
        <div class="page">
            {filter_section(&plants, &filters, pickers)}
            <ClusterChart request={filters.submitted.clone()} generation={filters.generation} />
        </div>
    }
}

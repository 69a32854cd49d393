pub mod analytics;
pub mod clustering;
pub mod energy_flow;
pub mod health;
pub mod overview;
pub mod performance;

use chrono::Local;
use serde::{Deserialize, Serialize};
use yew::prelude::*;

use crate::components::{FilterBar, Pickers, Status};
use crate::hooks::use_analytics::DataState;
use crate::hooks::use_filters::FilterHandle;
use crate::hooks::use_plants::load_plant_preference;
use crate::models::filters::Filters;
use crate::models::plant::Plant;

pub use analytics::AnalyticsPage;
pub use clustering::ClusteringPage;
pub use energy_flow::EnergyFlowPage;
pub use health::HealthPage;
pub use overview::OverviewPage;
pub use performance::PerformancePage;

/// Sidebar destinations
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Page {
    #[default]
    Overview,
    Analytics,
    Clustering,
    EnergyFlow,
    Health,
    Performance,
}

impl Page {
    pub fn all() -> &'static [Page] {
        &[
            Page::Overview,
            Page::Analytics,
            Page::Clustering,
            Page::EnergyFlow,
            Page::Health,
            Page::Performance,
        ]
    }

    pub fn title(self) -> &'static str {
        match self {
            Page::Overview => "Overview",
            Page::Analytics => "Analytics",
            Page::Clustering => "Clustering",
            Page::EnergyFlow => "Energy Flow",
            Page::Health => "Health",
            Page::Performance => "Performance",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            Page::Overview => "\u{26A1}",
            Page::Analytics => "\u{1F4C8}",
            Page::Clustering => "\u{2B55}",
            Page::EnergyFlow => "\u{1F500}",
            Page::Health => "\u{1F321}",
            Page::Performance => "\u{1F3AF}",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Page::Overview => "Inverter active power and daily KPIs",
            Page::Analytics => "Hourly profiles and weekday patterns",
            Page::Clustering => "Group devices with similar behaviour",
            Page::EnergyFlow => "Where the generated energy went",
            Page::Health => "Inverter and MPPT temperatures",
            Page::Performance => "Yield suppression and conversion efficiency",
        }
    }

    pub fn view(self) -> Html {
        match self {
            Page::Overview => html! { <OverviewPage /> },
            Page::Analytics => html! { <AnalyticsPage /> },
            Page::Clustering => html! { <ClusteringPage /> },
            Page::EnergyFlow => html! { <EnergyFlowPage /> },
            Page::Health => html! { <HealthPage /> },
            Page::Performance => html! { <PerformancePage /> },
        }
    }
}

/// Default filters: last week for the remembered plant
pub(crate) fn initial_filters() -> Filters {
    Filters::new(Local::now().date_naive(), load_plant_preference())
}

/// Filter bar plus, when the plant list failed, its error banner
pub(crate) fn filter_section(
    plants: &DataState<Vec<Plant>>,
    filters: &FilterHandle,
    pickers: Pickers,
) -> Html {
    html! {
        <>
            if matches!(plants, DataState::Error(_)) {
                <Status status={plants.status()} />
            }
            <FilterBar
                plants={plants.data().cloned()}
                draft={filters.draft.clone()}
                {pickers}
                on_update={filters.update.clone()}
                on_submit={filters.submit.clone()}
                error={filters.error.clone()}
            />
        </>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_titles_unique() {
        let mut titles: Vec<&str> = Page::all().iter().map(|p| p.title()).collect();
        titles.sort_unstable();
        titles.dedup();
        assert_eq!(titles.len(), Page::all().len());
    }

    #[test]
    fn test_page_round_trips_through_storage_format() {
        let json = serde_json::to_string(&Page::EnergyFlow).unwrap();
        assert_eq!(json, "\"EnergyFlow\"");
        assert_eq!(serde_json::from_str::<Page>(&json).unwrap(), Page::EnergyFlow);
        assert_eq!(Page::default(), Page::Overview);
    }
}

use std::rc::Rc;
use yew::prelude::*;

use super::{ChartProps, line_chart, subtitle};
use crate::components::chart_frame::{ChartFrame, ChartOption};
use crate::components::status::Status;
use crate::hooks::use_analytics::use_analytics;
use crate::models::analytics::DailyProfile;
use crate::models::table::hourly_pivot;
use crate::services::api::Endpoint;

const CHART_ID: &str = "hourly-profile";

/// Hour-of-day generation, one line per day
#[function_component(HourlyProfileChart)]
pub fn hourly_profile_chart(props: &ChartProps) -> Html {
    let state = use_analytics::<Vec<DailyProfile>>(
        Endpoint::HourlyProfile,
        props.request.clone(),
        props.generation,
    );

    let view = use_memo(state.data().cloned(), |profiles| {
        profiles.as_ref().map(|profiles| {
            let table = hourly_pivot(profiles);
            let chart = (!table.is_empty()).then(|| ChartOption::new(line_chart(&table, "kWh", true)));
            (chart, Rc::new(table.to_export()))
        })
    });

    let chart = (*view).as_ref().and_then(|(chart, _)| chart.clone());
    let export = (*view).as_ref().map(|(_, export)| export.clone());
    let empty = state.data().is_some_and(|profiles| profiles.is_empty());

    html! {
        <ChartFrame
            id={CHART_ID}
            title="Hourly Generation Profile"
            subtitle={subtitle(props.request.as_ref())}
            {chart}
            {export}
        >
            <Status status={state.status()} />
            if empty {
                <p class="empty-state">{"No generation recorded for the selected period"}</p>
            }
        </ChartFrame>
    }
}

use std::rc::Rc;
use yew::prelude::*;

use super::{ChartProps, line_chart, subtitle};
use crate::components::chart_frame::{ChartFrame, ChartOption};
use crate::components::status::Status;
use crate::hooks::use_analytics::use_analytics;
use crate::models::table::temperature_pivot;
use crate::models::telemetry::TemperatureSample;
use crate::services::api::Endpoint;

const CHART_ID: &str = "device-temperature";

#[function_component(TemperatureChart)]
pub fn temperature_chart(props: &ChartProps) -> Html {
    let state = use_analytics::<Vec<TemperatureSample>>(
        Endpoint::Temperature,
        props.request.clone(),
        props.generation,
    );

    let view = use_memo(state.data().cloned(), |samples| {
        samples.as_ref().map(|samples| {
            let table = temperature_pivot(samples);
            let chart = (!table.is_empty()).then(|| ChartOption::new(line_chart(&table, "°C", true)));
            (chart, Rc::new(table.to_export()))
        })
    });

    let chart = (*view).as_ref().and_then(|(chart, _)| chart.clone());
    let export = (*view).as_ref().map(|(_, export)| export.clone());
    let empty = state.data().is_some_and(|samples| samples.is_empty());

    html! {
        <ChartFrame
            id={CHART_ID}
            title="Device Temperature"
            subtitle={subtitle(props.request.as_ref())}
            {chart}
            {export}
        >
            <Status status={state.status()} />
            if empty {
                <p class="empty-state">{"No temperature readings for the selected devices"}</p>
            }
        </ChartFrame>
    }
}

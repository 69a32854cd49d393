use std::rc::Rc;
use yew::prelude::*;

use super::{ChartProps, line_chart, subtitle};
use crate::components::chart_frame::{ChartFrame, ChartOption};
use crate::components::status::Status;
use crate::hooks::use_analytics::use_analytics;
use crate::models::table::power_pivot;
use crate::models::telemetry::{PowerSample, PowerStats};
use crate::services::api::Endpoint;

const CHART_ID: &str = "active-power";

#[function_component(ActivePowerChart)]
pub fn active_power_chart(props: &ChartProps) -> Html {
    let state = use_analytics::<Vec<PowerSample>>(
        Endpoint::ActivePower,
        props.request.clone(),
        props.generation,
    );

    let view = use_memo(state.data().cloned(), |samples| {
        samples.as_ref().map(|samples| {
            let table = power_pivot(samples);
            let chart = (!table.is_empty()).then(|| ChartOption::new(line_chart(&table, "kW", false)));
            (chart, Rc::new(table.to_export()), PowerStats::from_samples(samples))
        })
    });

    let (chart, export, stats) = match &*view {
        Some((chart, export, stats)) => (chart.clone(), Some(export.clone()), stats.clone().ok()),
        None => (None, None, None),
    };
    let empty = state.data().is_some_and(|samples| samples.is_empty());

    html! {
        <ChartFrame
            id={CHART_ID}
            title="Active Power"
            subtitle={subtitle(props.request.as_ref())}
            {chart}
            {export}
        >
            <Status status={state.status()} />
            if empty {
                <p class="empty-state">{"No power data for the selected period"}</p>
            }
            if let Some(stats) = stats {
                <div class="summary-grid">
                    <div class="summary-item">
                        <h3>{"Peak Power"}</h3>
                        <p class="summary-value">{format!("{:.1} kW", stats.peak)}</p>
                        <p class="summary-note">{stats.peak_at.format("%d %b %H:%M").to_string()}</p>
                    </div>
                    <div class="summary-item">
                        <h3>{"Average Power"}</h3>
                        <p class="summary-value">{format!("{:.1} kW", stats.average)}</p>
                    </div>
                    <div class="summary-item">
                        <h3>{"Energy"}</h3>
                        <p class="summary-value">{format!("{:.1} kWh", stats.energy_kwh)}</p>
                    </div>
                    <div class="summary-item">
                        <h3>{"Samples"}</h3>
                        <p class="summary-value">{stats.samples}</p>
                    </div>
                </div>
            }
        </ChartFrame>
    }
}

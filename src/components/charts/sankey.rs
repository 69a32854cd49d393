use charming::{
    Chart as CharmingChart,
    element::{Emphasis, EmphasisFocus, Tooltip, Trigger},
    series::Sankey,
};
use std::rc::Rc;
use yew::prelude::*;

use super::{ChartProps, palette, subtitle};
use crate::components::chart_frame::{ChartFrame, ChartOption};
use crate::components::status::Status;
use crate::hooks::use_analytics::use_analytics;
use crate::models::sankey::SankeyData;
use crate::models::table::ExportTable;
use crate::services::api::Endpoint;

const CHART_ID: &str = "energy-flow";

/// Energy distribution from sources to loads
#[function_component(SankeyChart)]
pub fn sankey_chart(props: &ChartProps) -> Html {
    let state = use_analytics::<SankeyData>(Endpoint::Sankey, props.request.clone(), props.generation);

    let view = use_memo(state.data().cloned(), |data| {
        data.as_ref().map(|data| {
            let clean = data.sanitized();
            let dropped = data.links.len() - clean.links.len();
            if dropped > 0 {
                gloo::console::warn!(format!("Dropped {dropped} unusable sankey links"));
            }
            let chart = (!clean.is_empty()).then(|| ChartOption::new(build_chart(&clean)));
            (chart, Rc::new(export_table(&clean)), clean.source_total())
        })
    });

    let (chart, export, total) = match &*view {
        Some((chart, export, total)) => (chart.clone(), Some(export.clone()), Some(*total)),
        None => (None, None, None),
    };

    html! {
        <ChartFrame
            id={CHART_ID}
            title="Energy Flow"
            subtitle={subtitle(props.request.as_ref())}
            {chart}
            {export}
            height={520}
        >
            <Status status={state.status()} />
            if let Some(total) = total {
                if total > 0.0 {
                    <p class="chart-note">{format!("Total source energy: {total:.1} kWh")}</p>
                } else {
                    <p class="empty-state">{"No energy flow for the selected period"}</p>
                }
            }
        </ChartFrame>
    }
}

fn build_chart(data: &SankeyData) -> CharmingChart {
    CharmingChart::new()
        .color(palette())
        .tooltip(Tooltip::new().trigger(Trigger::Item))
        .series(
            Sankey::new()
                .emphasis(Emphasis::new().focus(EmphasisFocus::Adjacency))
                .data(
                    data.nodes
                        .iter()
                        .map(|n| n.name.clone())
                        .collect::<Vec<String>>(),
                )
                .links(
                    data.links
                        .iter()
                        .map(|l| (l.source.clone(), l.target.clone(), l.value))
                        .collect::<Vec<(String, String, f64)>>(),
                ),
        )
}

fn export_table(data: &SankeyData) -> ExportTable {
    let mut table = ExportTable::new(&["Source", "Target", "Energy (kWh)"]);
    for link in &data.links {
        table.push_row(vec![
            link.source.clone(),
            link.target.clone(),
            link.value.to_string(),
        ]);
    }
    table
}

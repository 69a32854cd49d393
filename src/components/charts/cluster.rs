use charming::{
    Chart as CharmingChart,
    component::{Axis, Grid, Legend},
    element::{AxisType, Tooltip, Trigger},
    series::Scatter,
};
use std::rc::Rc;
use yew::prelude::*;

use super::{ChartProps, dashed_split_line, palette, subtitle};
use crate::components::chart_frame::{ChartFrame, ChartOption};
use crate::components::status::Status;
use crate::hooks::use_analytics::use_analytics;
use crate::models::analytics::ClusterResult;
use crate::models::table::ExportTable;
use crate::services::api::Endpoint;

const CHART_ID: &str = "device-clusters";

#[function_component(ClusterChart)]
pub fn cluster_chart(props: &ChartProps) -> Html {
    let state = use_analytics::<ClusterResult>(Endpoint::Cluster, props.request.clone(), props.generation);

    let view = use_memo(state.data().cloned(), |result| {
        result.as_ref().map(|result| {
            let chart = (!result.points.is_empty()).then(|| ChartOption::new(build_chart(result)));
            (chart, Rc::new(export_table(result)))
        })
    });

    let chart = (*view).as_ref().and_then(|(chart, _)| chart.clone());
    let export = (*view).as_ref().map(|(_, export)| export.clone());
    let empty = state.data().is_some_and(|result| result.points.is_empty());

    html! {
        <ChartFrame
            id={CHART_ID}
            title="Device Clusters"
            subtitle={subtitle(props.request.as_ref())}
            {chart}
            {export}
            height={480}
        >
            <Status status={state.status()} />
            if empty {
                <p class="empty-state">{"The service returned no clustered devices"}</p>
            }
        </ChartFrame>
    }
}

fn build_chart(result: &ClusterResult) -> CharmingChart {
    let chart = CharmingChart::new()
        .color(palette())
        .tooltip(Tooltip::new().trigger(Trigger::Item))
        .legend(Legend::new().top("bottom"))
        .grid(
            Grid::new()
                .left("3%")
                .right("6%")
                .bottom("12%")
                .contain_label(true),
        )
        .x_axis(
            Axis::new()
                .type_(AxisType::Value)
                .name(result.x_label.clone())
                .split_line(dashed_split_line()),
        )
        .y_axis(
            Axis::new()
                .type_(AxisType::Value)
                .name(result.y_label.clone())
                .split_line(dashed_split_line()),
        );

    result.groups().into_iter().fold(chart, |chart, group| {
        chart.series(
            Scatter::new()
                .name(group.name())
                .symbol_size(10.0)
                .data(group.coordinates()),
        )
    })
}

fn export_table(result: &ClusterResult) -> ExportTable {
    let mut table = ExportTable::new(&["Device", "Cluster", result.x_label.as_str(), result.y_label.as_str()]);
    for point in &result.points {
        table.push_row(vec![
            point.id.clone(),
            point.cluster.to_string(),
            point.x.to_string(),
            point.y.to_string(),
        ]);
    }
    table
}

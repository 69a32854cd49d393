use charming::{
    Chart as CharmingChart,
    component::{Axis, Grid, VisualMap},
    datatype::{DataFrame, DataPoint},
    element::{AxisType, Orient, SplitArea, Tooltip, Trigger},
    series::Heatmap,
};
use std::rc::Rc;
use yew::prelude::*;

use super::{ChartProps, subtitle};
use crate::components::chart_frame::{ChartFrame, ChartOption};
use crate::components::status::Status;
use crate::hooks::use_analytics::use_analytics;
use crate::models::analytics::{WEEKDAY_LABELS, WeeklyCell};
use crate::models::table::{HeatmapGrid, hour_labels};
use crate::services::api::Endpoint;

const CHART_ID: &str = "weekly-heatmap";

#[function_component(WeeklyHeatmapChart)]
pub fn weekly_heatmap_chart(props: &ChartProps) -> Html {
    let state = use_analytics::<Vec<WeeklyCell>>(
        Endpoint::WeeklyHeatmap,
        props.request.clone(),
        props.generation,
    );

    let view = use_memo(state.data().cloned(), |cells| {
        cells.as_ref().map(|cells| {
            let grid = HeatmapGrid::from_cells(cells);
            (ChartOption::new(build_chart(&grid)), Rc::new(grid.to_export()))
        })
    });

    let chart = (*view).as_ref().map(|(chart, _)| chart.clone());
    let export = (*view).as_ref().map(|(_, export)| export.clone());

    html! {
        <ChartFrame
            id={CHART_ID}
            title="Weekday x Hour Yield"
            subtitle={subtitle(props.request.as_ref())}
            {chart}
            {export}
            height={360}
        >
            <Status status={state.status()} />
        </ChartFrame>
    }
}

/// `[hour, weekday, value]` rows as heatmap data frames
fn heatmap_frames(grid: &HeatmapGrid) -> Vec<DataFrame> {
    grid.points()
        .into_iter()
        .map(|point| point.into_iter().map(DataPoint::from).collect())
        .collect()
}

fn build_chart(grid: &HeatmapGrid) -> CharmingChart {
    CharmingChart::new()
        .tooltip(Tooltip::new().trigger(Trigger::Item))
        .grid(
            Grid::new()
                .left("3%")
                .right("4%")
                .top("4%")
                .bottom("18%")
                .contain_label(true),
        )
        .x_axis(
            Axis::new()
                .type_(AxisType::Category)
                .data(hour_labels())
                .split_area(SplitArea::new().show(true)),
        )
        .y_axis(
            Axis::new()
                .type_(AxisType::Category)
                .data(WEEKDAY_LABELS.to_vec())
                .split_area(SplitArea::new().show(true)),
        )
        .visual_map(
            VisualMap::new()
                .min(grid.min)
                .max(grid.max)
                .calculable(true)
                .orient(Orient::Horizontal)
                .left("center")
                .bottom("2%"),
        )
        .series(Heatmap::new().name("Yield").data(heatmap_frames(grid)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frames_cover_every_cell() {
        let grid = HeatmapGrid::from_cells(&[WeeklyCell {
            weekday: 2,
            hour: 9,
            value: 3.5,
        }]);
        let frames = heatmap_frames(&grid);
        assert_eq!(frames.len(), 7 * 24);
        assert!(frames.iter().all(|frame| frame.len() == 3));
    }

    #[test]
    fn test_chart_builds_for_grid() {
        let grid = HeatmapGrid::from_cells(&[]);
        let chart = build_chart(&grid);
        assert!(chart.to_string().contains("heatmap"));
    }
}

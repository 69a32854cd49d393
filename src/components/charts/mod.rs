pub mod active_power;
pub mod cluster;
pub mod efficiency;
pub mod hourly_profile;
pub mod sankey;
pub mod suppression;
pub mod temperature;
pub mod weekly_heatmap;

use charming::{
    Chart as CharmingChart,
    component::{Axis, Grid, Legend},
    element::{AxisLabel, AxisType, Color, LineStyle, LineStyleType, SplitLine, Tooltip, Trigger},
    series::Line,
};
use std::rc::Rc;
use yew::prelude::*;

use crate::models::filters::{DateRange, FilterRequest};
use crate::models::table::WideTable;

pub use active_power::ActivePowerChart;
pub use cluster::ClusterChart;
pub use efficiency::EfficiencyTable;
pub use hourly_profile::HourlyProfileChart;
pub use sankey::SankeyChart;
pub use suppression::SuppressionChart;
pub use temperature::TemperatureChart;
pub use weekly_heatmap::WeeklyHeatmapChart;

const AXIS_COLOR: &str = "#6b7280";
const GRID_COLOR: &str = "#e5e7eb";

/// Props shared by every chart that posts the page filters
#[derive(Properties, PartialEq)]
pub struct ChartProps {
    pub request: Option<Rc<FilterRequest>>,
    pub generation: u32,
}

pub(crate) fn palette() -> Vec<Color> {
    [
        "#00b4a0", // teal
        "#648fff", // blue
        "#785ef0", // purple
        "#dc267f", // magenta
        "#fe6100", // orange
        "#ffb000", // yellow
    ]
    .into_iter()
    .map(Color::from)
    .collect()
}

/// "P01 | 01 Oct 2025 - 07 Oct 2025"
pub(crate) fn subtitle(request: Option<&Rc<FilterRequest>>) -> Option<AttrValue> {
    request.map(|r| {
        let range = DateRange::new(r.start_date, r.end_date);
        AttrValue::from(format!("{} | {}", r.plant_id, range.label()))
    })
}

pub(crate) fn dashed_split_line() -> SplitLine {
    SplitLine::new().line_style(LineStyle::new().color(GRID_COLOR).type_(LineStyleType::Dashed))
}

/// One line per table column over the table index
pub(crate) fn line_chart(table: &WideTable, unit: &str, smooth: bool) -> CharmingChart {
    let chart = CharmingChart::new()
        .color(palette())
        .tooltip(Tooltip::new().trigger(Trigger::Axis))
        .legend(Legend::new().top("bottom"))
        .grid(
            Grid::new()
                .left("3%")
                .right("4%")
                .bottom("12%")
                .contain_label(true),
        )
        .x_axis(
            Axis::new()
                .type_(AxisType::Category)
                .data(table.index.clone())
                .axis_label(AxisLabel::new().color(AXIS_COLOR)),
        )
        .y_axis(
            Axis::new()
                .type_(AxisType::Value)
                .name(unit)
                .axis_label(AxisLabel::new().color(AXIS_COLOR))
                .split_line(dashed_split_line()),
        );

    table.series().into_iter().fold(chart, |chart, (name, values)| {
        chart.series(
            Line::new()
                .name(name)
                .data(values)
                .show_symbol(false)
                .smooth(smooth),
        )
    })
}

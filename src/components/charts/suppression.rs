use charming::{
    Chart as CharmingChart,
    component::{Axis, Grid},
    element::{AxisLabel, AxisType, Color, Tooltip, Trigger},
    series::Bar,
};
use std::rc::Rc;
use yew::prelude::*;

use super::{AXIS_COLOR, ChartProps, dashed_split_line, subtitle};
use crate::components::chart_frame::{ChartFrame, ChartOption};
use crate::components::data_table::DataTable;
use crate::components::status::Status;
use crate::hooks::use_analytics::use_analytics;
use crate::models::analytics::{SuppressionRecord, sorted_by_suppression};
use crate::models::table::ExportTable;
use crate::services::api::Endpoint;

const CHART_ID: &str = "suppression";

/// Devices ranked by how far their yield fell short of expectation
#[function_component(SuppressionChart)]
pub fn suppression_chart(props: &ChartProps) -> Html {
    let state = use_analytics::<Vec<SuppressionRecord>>(
        Endpoint::Suppression,
        props.request.clone(),
        props.generation,
    );

    let view = use_memo(state.data().cloned(), |records| {
        records.as_ref().map(|records| {
            let sorted = sorted_by_suppression(records);
            let chart = (!sorted.is_empty()).then(|| ChartOption::new(build_chart(&sorted)));
            (chart, Rc::new(export_table(&sorted)))
        })
    });

    let chart = (*view).as_ref().and_then(|(chart, _)| chart.clone());
    let export = (*view).as_ref().map(|(_, export)| export.clone());
    let details = export.clone();

    html! {
        <ChartFrame
            id={CHART_ID}
            title="Yield Suppression"
            subtitle={subtitle(props.request.as_ref())}
            {chart}
            {export}
        >
            <Status status={state.status()} />
            if let Some(table) = details {
                <details class="chart-details">
                    <summary>{"Device breakdown"}</summary>
                    <DataTable {table} />
                </details>
            }
        </ChartFrame>
    }
}

fn build_chart(records: &[SuppressionRecord]) -> CharmingChart {
    let ranked: Vec<&SuppressionRecord> = records
        .iter()
        .filter(|r| r.suppression_pct.is_finite())
        .collect();

    CharmingChart::new()
        .color(vec![Color::from("#dc267f")])
        .tooltip(Tooltip::new().trigger(Trigger::Axis))
        .grid(
            Grid::new()
                .left("3%")
                .right("4%")
                .bottom("6%")
                .contain_label(true),
        )
        .x_axis(
            Axis::new()
                .type_(AxisType::Category)
                .data(ranked.iter().map(|r| r.device_id.clone()).collect::<Vec<_>>())
                .axis_label(AxisLabel::new().color(AXIS_COLOR).rotate(45)),
        )
        .y_axis(
            Axis::new()
                .type_(AxisType::Value)
                .name("%")
                .axis_label(AxisLabel::new().color(AXIS_COLOR))
                .split_line(dashed_split_line()),
        )
        .series(
            Bar::new()
                .name("Suppression")
                .data(ranked.iter().map(|r| r.suppression_pct).collect::<Vec<f64>>()),
        )
}

fn export_table(records: &[SuppressionRecord]) -> ExportTable {
    let mut table = ExportTable::new(&[
        "Device",
        "Expected (kWh)",
        "Actual (kWh)",
        "Suppression (%)",
    ]);
    for record in records {
        table.push_row(vec![
            record.device_id.clone(),
            format!("{:.1}", record.expected_energy),
            format!("{:.1}", record.actual_energy),
            format!("{:.1}", record.suppression_pct),
        ]);
    }
    table
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(device: &str, pct: f64) -> SuppressionRecord {
        SuppressionRecord {
            device_id: device.to_string(),
            expected_energy: 100.0,
            actual_energy: 100.0 - pct,
            suppression_pct: pct,
        }
    }

    #[test]
    fn test_chart_uses_finite_records_only() {
        let records = sorted_by_suppression(&[record("INV-01", 4.0), record("INV-02", f64::NAN)]);
        let option = build_chart(&records).to_string();
        assert!(option.contains("INV-01"));
        assert!(!option.contains("INV-02"));
        assert!(option.contains("#dc267f"));
    }

    #[test]
    fn test_export_keeps_every_record() {
        let table = export_table(&[record("INV-01", 4.0), record("INV-02", 12.5)]);
        assert_eq!(table.rows.len(), 2);
        assert_eq!(table.rows[1][3], "12.5");
    }
}

use std::rc::Rc;
use yew::prelude::*;

use super::{ChartProps, subtitle};
use crate::components::chart_frame::ChartFrame;
use crate::components::data_table::DataTable;
use crate::components::status::Status;
use crate::config::Config;
use crate::hooks::use_analytics::use_analytics;
use crate::models::analytics::EfficiencyRecord;
use crate::models::table::ExportTable;
use crate::services::api::Endpoint;

const TABLE_ID: &str = "inverter-efficiency";

/// Conversion efficiency per inverter, flagging those below threshold
#[function_component(EfficiencyTable)]
pub fn efficiency_table(props: &ChartProps) -> Html {
    let state = use_analytics::<Vec<EfficiencyRecord>>(
        Endpoint::Efficiency,
        props.request.clone(),
        props.generation,
    );

    let view = use_memo(state.data().cloned(), |records| {
        records.as_ref().map(|records| {
            let highlighted: Vec<usize> = records
                .iter()
                .enumerate()
                .filter_map(|(i, r)| r.is_low().then_some(i))
                .collect();
            (Rc::new(export_table(records)), highlighted)
        })
    });

    let low_count = (*view).as_ref().map_or(0, |(_, low)| low.len());

    html! {
        <ChartFrame
            id={TABLE_ID}
            title="Inverter Efficiency"
            subtitle={subtitle(props.request.as_ref())}
            export={(*view).as_ref().map(|(table, _)| table.clone())}
        >
            <Status status={state.status()} />
            if let Some((table, highlighted)) = &*view {
                if low_count > 0 {
                    <p class="chart-note warning">
                        {format!(
                            "{low_count} inverter(s) below {:.0}% efficiency",
                            Config::LOW_EFFICIENCY_PERCENT
                        )}
                    </p>
                }
                <DataTable table={table.clone()} highlighted={highlighted.clone()} />
            }
        </ChartFrame>
    }
}

fn export_table(records: &[EfficiencyRecord]) -> ExportTable {
    let mut table = ExportTable::new(&[
        "Inverter",
        "DC energy (kWh)",
        "AC energy (kWh)",
        "Loss (kWh)",
        "Efficiency (%)",
    ]);
    for record in records {
        table.push_row(vec![
            record.inverter_id.clone(),
            format!("{:.1}", record.dc_energy),
            format!("{:.1}", record.ac_energy),
            format!("{:.1}", record.loss()),
            format!("{:.2}", record.efficiency),
        ]);
    }
    table
}

use std::rc::Rc;
use yew::prelude::*;

use crate::models::table::ExportTable;

#[derive(Properties, PartialEq)]
pub struct DataTableProps {
    pub table: Rc<ExportTable>,
    /// Row indices rendered with the warning style
    #[prop_or_default]
    pub highlighted: Vec<usize>,
}

#[function_component(DataTable)]
pub fn data_table(props: &DataTableProps) -> Html {
    if props.table.is_empty() {
        return html! { <p class="empty-state">{"No rows for the selected period"}</p> };
    }

    html! {
        <div class="table-scroll">
            <table class="data-table">
                <thead>
                    <tr>
                        { for props.table.headers.iter().map(|h| html! { <th>{h}</th> }) }
                    </tr>
                </thead>
                <tbody>
                    { for props.table.rows.iter().enumerate().map(|(i, row)| {
                        let warn = props.highlighted.contains(&i);
                        html! {
                            <tr class={classes!(warn.then_some("row-warning"))}>
                                { for row.iter().map(|cell| html! { <td>{cell}</td> }) }
                            </tr>
                        }
                    }) }
                </tbody>
            </table>
        </div>
    }
}

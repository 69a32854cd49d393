use charming::{Chart as CharmingChart, renderer::WasmRenderer};
use gloo::events::EventListener;
use std::rc::Rc;
use web_sys::{Element, HtmlElement};
use yew::prelude::*;

use crate::config::Config;
use crate::models::table::ExportTable;
use crate::services::{echarts, export, fullscreen};
use crate::utils::debounce::on_window_resize;

/// A built chart, compared by identity so memoized charts don't re-render
#[derive(Clone)]
pub struct ChartOption(Rc<CharmingChart>);

impl ChartOption {
    pub fn new(chart: CharmingChart) -> Self {
        Self(Rc::new(chart))
    }
}

impl PartialEq for ChartOption {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

#[derive(Properties, PartialEq)]
pub struct ChartFrameProps {
    /// DOM id of the chart canvas, also the export file stem
    pub id: AttrValue,
    pub title: AttrValue,
    #[prop_or_default]
    pub subtitle: Option<AttrValue>,
    #[prop_or_default]
    pub chart: Option<ChartOption>,
    #[prop_or_default]
    pub export: Option<Rc<ExportTable>>,
    #[prop_or(420)]
    pub height: u32,
    #[prop_or_default]
    pub children: Html,
}

/// Card with a title, an export/fullscreen toolbar and either a chart
/// canvas or whatever children are passed (status banners, tables).
#[function_component(ChartFrame)]
pub fn chart_frame(props: &ChartFrameProps) -> Html {
    let frame_ref = use_node_ref();
    let container_ref = use_node_ref();
    let is_fullscreen = use_state(|| false);

    // Track fullscreen so the chart is redrawn at the new size
    {
        let frame_ref = frame_ref.clone();
        let is_fullscreen = is_fullscreen.clone();
        use_effect_with(frame_ref, move |frame_ref| {
            let frame_ref = frame_ref.clone();
            let listener = web_sys::window().and_then(|w| w.document()).map(|document| {
                EventListener::new(&document, "fullscreenchange", move |_| {
                    let active = frame_ref
                        .cast::<Element>()
                        .is_some_and(|frame| fullscreen::is_fullscreen(&frame));
                    is_fullscreen.set(active);
                })
            });
            move || drop(listener)
        });
    }

    {
        let container_ref = container_ref.clone();
        let id = props.id.clone();

        use_effect_with(
            (props.chart.clone(), container_ref, *is_fullscreen),
            move |(chart, container_ref, _)| {
                let listener = chart.clone().zip(container_ref.cast::<HtmlElement>()).and_then(
                    |(chart, container)| {
                        render_chart(&container, &id, &chart);

                        let id = id.clone();
                        on_window_resize(Config::RESIZE_DEBOUNCE_MS, move || {
                            render_chart(&container, &id, &chart);
                        })
                    },
                );

                move || {
                    drop(listener);
                    echarts::dispose(&id);
                }
            },
        );
    }

    let on_png = {
        let id = props.id.clone();
        Callback::from(move |_: MouseEvent| {
            if let Err(e) = export::download_png(&id) {
                gloo::console::error!(format!("PNG export failed: {e}"));
            }
        })
    };

    let on_csv = {
        let id = props.id.clone();
        let table = props.export.clone();
        Callback::from(move |_: MouseEvent| {
            if let Some(table) = &table {
                if let Err(e) = export::download_csv(&id, table) {
                    gloo::console::error!(format!("CSV export failed: {e}"));
                }
            }
        })
    };

    let on_fullscreen = {
        let frame_ref = frame_ref.clone();
        Callback::from(move |_: MouseEvent| {
            if let Some(frame) = frame_ref.cast::<Element>() {
                if let Err(e) = fullscreen::toggle(&frame) {
                    gloo::console::warn!(format!("{e}"));
                }
            }
        })
    };

    let can_export_csv = props.export.as_ref().is_some_and(|t| !t.is_empty());
    let fullscreen_label = if *is_fullscreen {
        "Exit fullscreen"
    } else {
        "Fullscreen"
    };
    let container_style = if *is_fullscreen {
        "height: calc(100vh - 6rem);".to_string()
    } else {
        format!("height: {}px;", props.height)
    };

    html! {
        <section class={classes!("chart-card", is_fullscreen.then_some("fullscreen"))} ref={frame_ref}>
            <div class="chart-card-header">
                <div>
                    <h2>{&props.title}</h2>
                    if let Some(subtitle) = &props.subtitle {
                        <p class="chart-subtitle">{subtitle}</p>
                    }
                </div>
                <div class="chart-toolbar">
                    if props.chart.is_some() {
                        <button onclick={on_png} title="Download as PNG">{"PNG"}</button>
                    }
                    <button onclick={on_csv} disabled={!can_export_csv} title="Download as spreadsheet">
                        {"CSV"}
                    </button>
                    <button onclick={on_fullscreen} title={fullscreen_label} aria-label={fullscreen_label}>
                        {if *is_fullscreen { "\u{2715}" } else { "\u{26F6}" }}
                    </button>
                </div>
            </div>

            {props.children.clone()}

            if props.chart.is_some() {
                <div class="chart-container" ref={container_ref} style={container_style}>
                    <div id={props.id.clone()} class="chart-canvas" />
                </div>
            }
        </section>
    }
}

fn render_chart(container: &HtmlElement, id: &str, chart: &ChartOption) {
    let width = container.client_width().cast_unsigned();
    let height = container.client_height().cast_unsigned();

    if width == 0 || height == 0 {
        return;
    }

    // One live instance per canvas
    echarts::dispose(id);
    if let Err(e) = WasmRenderer::new(width, height).render(id, &chart.0) {
        gloo::console::error!(format!("Render error for {id}: {e:?}"));
    }
}

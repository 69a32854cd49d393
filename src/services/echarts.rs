//! The few ECharts calls `charming` does not expose: instance lookup,
//! disposal and image export.

use crate::models::error::AppError;
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
extern "C" {
    /// Handle to a live ECharts instance
    pub type EchartsInstance;

    #[wasm_bindgen(js_namespace = echarts, js_name = getInstanceByDom)]
    fn get_instance_by_dom(dom: &web_sys::Element) -> Option<EchartsInstance>;

    #[wasm_bindgen(js_namespace = echarts, js_name = dispose)]
    fn dispose_dom(dom: &web_sys::Element);

    #[wasm_bindgen(method, js_name = getDataURL)]
    fn get_data_url(this: &EchartsInstance, opts: &JsValue) -> String;
}

fn chart_element(chart_id: &str) -> Option<web_sys::Element> {
    web_sys::window()?.document()?.get_element_by_id(chart_id)
}

/// Disposes the chart mounted on `chart_id`, if any
pub fn dispose(chart_id: &str) {
    if let Some(element) = chart_element(chart_id) {
        if get_instance_by_dom(&element).is_some() {
            dispose_dom(&element);
        }
    }
}

/// Renders the chart mounted on `chart_id` as a PNG data URL
pub fn png_data_url(chart_id: &str, pixel_ratio: u32) -> Result<String, AppError> {
    let element = chart_element(chart_id)
        .ok_or_else(|| AppError::ExportError(format!("No element with id '{chart_id}'")))?;
    let instance = get_instance_by_dom(&element)
        .ok_or_else(|| AppError::ExportError(format!("No chart rendered in '{chart_id}'")))?;

    let opts = serde_json::json!({
        "type": "png",
        "pixelRatio": pixel_ratio,
        "backgroundColor": "#ffffff",
    });
    let opts = web_sys::js_sys::JSON::parse(&opts.to_string())
        .map_err(|e| AppError::ExportError(format!("Invalid export options: {e:?}")))?;

    Ok(instance.get_data_url(&opts))
}

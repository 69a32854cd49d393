use crate::config::Config;
use crate::models::{error::AppError, table::ExportTable};
use crate::services::echarts;
use chrono::NaiveDate;
use wasm_bindgen::JsCast;
use web_sys::{Blob, BlobPropertyBag, HtmlAnchorElement, Url};

/// Byte order mark so spreadsheet programs read the file as UTF-8
const UTF8_BOM: &str = "\u{feff}";

/// File name for an export, e.g. `active-power_20251007.csv`
pub fn export_file_name(stem: &str, date: NaiveDate, extension: &str) -> String {
    format!("{stem}_{}.{extension}", date.format("%Y%m%d"))
}

fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

/// Downloads the chart on `chart_id` as a PNG image
pub fn download_png(chart_id: &str) -> Result<(), AppError> {
    let data_url = echarts::png_data_url(chart_id, Config::EXPORT_PIXEL_RATIO)?;
    trigger_download(&data_url, &export_file_name(chart_id, today(), "png"))
}

/// Downloads the table as a CSV spreadsheet
pub fn download_csv(stem: &str, table: &ExportTable) -> Result<(), AppError> {
    let csv = format!("{UTF8_BOM}{}", table.to_csv()?);

    let parts = web_sys::js_sys::Array::of1(&csv.into());
    let options = BlobPropertyBag::new();
    options.set_type("text/csv;charset=utf-8");
    let blob = Blob::new_with_str_sequence_and_options(&parts, &options)
        .map_err(|e| AppError::ExportError(format!("Failed to create blob: {e:?}")))?;

    let url = Url::create_object_url_with_blob(&blob)
        .map_err(|e| AppError::ExportError(format!("Failed to create object URL: {e:?}")))?;
    let result = trigger_download(&url, &export_file_name(stem, today(), "csv"));

    if let Err(e) = Url::revoke_object_url(&url) {
        gloo::console::warn!(format!("Failed to revoke object URL: {e:?}"));
    }

    result
}

fn trigger_download(href: &str, file_name: &str) -> Result<(), AppError> {
    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| AppError::ExportError("No document available".to_string()))?;

    let anchor: HtmlAnchorElement = document
        .create_element("a")
        .map_err(|e| AppError::ExportError(format!("Failed to create link: {e:?}")))?
        .dyn_into()
        .map_err(|_| AppError::ExportError("Created element is not a link".to_string()))?;

    anchor.set_href(href);
    anchor.set_download(file_name);
    anchor.click();

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_export_file_name() {
        let date = NaiveDate::from_ymd_opt(2025, 10, 7).unwrap();
        assert_eq!(
            export_file_name("hourly-profile", date, "csv"),
            "hourly-profile_20251007.csv"
        );
    }
}

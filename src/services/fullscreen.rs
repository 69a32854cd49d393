use crate::models::error::AppError;
use web_sys::Element;

fn document() -> Option<web_sys::Document> {
    web_sys::window()?.document()
}

/// Whether `element` is the current fullscreen element
pub fn is_fullscreen(element: &Element) -> bool {
    document()
        .and_then(|d| d.fullscreen_element())
        .is_some_and(|current| current.is_same_node(Some(element)))
}

/// Enters fullscreen on `element`, or leaves it if already there
pub fn toggle(element: &Element) -> Result<(), AppError> {
    if is_fullscreen(element) {
        if let Some(document) = document() {
            document.exit_fullscreen();
        }
        return Ok(());
    }

    element
        .request_fullscreen()
        .map_err(|e| AppError::ConfigError(format!("Fullscreen request rejected: {e:?}")))
}

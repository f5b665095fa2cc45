//! Browser helpers.

use web_sys::{Element, ScrollBehavior, ScrollIntoViewOptions};

/// Blocking `window.alert`.
pub fn alert(message: &str) {
    if let Err(e) = gloo_utils::window().alert_with_message(message) {
        log::error!("Failed to show alert {:?}: {:?}", message, e);
    }
}

/// Smoothly scroll `element` into view.
pub fn scroll_into_view_smooth(element: &Element) {
    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    element.scroll_into_view_with_scroll_into_view_options(&options);
}

use web_sys::{window, ScrollBehavior, ScrollIntoViewOptions};

use crate::models::contact::OrderAction;

/// Smooth-scrolls the element with `id` into view. Missing elements are ignored.
pub fn scroll_to_section(id: &str) {
    let Some(element) = window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(id))
    else {
        log::warn!("⚠️ [NAV] Section #{} not found", id);
        return;
    };

    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    element.scroll_into_view_with_scroll_into_view_options(&options);
}

/// Hands the order off to the phone, WhatsApp or a delivery site. Fire and forget.
pub fn open_order_action(action: &OrderAction) {
    let href = action.href();
    log::info!("📞 [ORDER] Opening {}", href);
    if let Some(win) = window() {
        if win.open_with_url(&href).is_err() {
            log::error!("❌ [ORDER] Could not open {}", href);
        }
    }
}

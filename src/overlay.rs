use crate::dom;
use web_sys as web;

#[inline]
pub fn show(document: &web::Document) {
    if let Some(el) = document.get_element_by_id("start-overlay") {
        let cl = el.class_list();
        _ = cl.remove_1("hidden");
        // fallback for environments without CSS class
        _ = el.set_attribute("style", "");
    }
}

#[inline]
pub fn hide(document: &web::Document) {
    if let Some(el) = document.get_element_by_id("start-overlay") {
        let cl = el.class_list();
        _ = cl.add_1("hidden");
        // fallback
        _ = el.set_attribute("style", "display:none");
    }
}

/// Load-progress text beside the start overlay. Best-effort; a missing
/// element is tolerated.
#[inline]
pub fn set_progress(document: &web::Document, text: &str) {
    dom::set_text(document, "load-progress", text);
}

/// Update the hint overlay with the current panel values.
pub fn update_hint(document: &web::Document, distortion_power: f32, volume_scale: f32) {
    if let Some(el) = document.get_element_by_id("hint-overlay") {
        let hint_html = format!(
            "<div style='color: #cfe7ff; font: 13px system-ui; background: rgba(10, 14, 24, 0.8); padding: 8px 12px; border-radius: 6px; border: 1px solid rgba(80, 110, 150, 0.35);'>Distortion: {:.2} \u{2022} Volume: {:.2}</div>",
            distortion_power, volume_scale
        );
        el.set_inner_html(&hint_html);
    }
}

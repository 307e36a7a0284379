//! Direct DOM access for the chart mount node via `web-sys`.
//!
//! The mount node is rendered empty by Dioxus and its children are owned by
//! the chart: every redraw replaces them wholesale with fresh SVG markup.

use web_sys::Element;

fn mount_element(container_id: &str) -> Option<Element> {
    web_sys::window()?
        .document()?
        .get_element_by_id(container_id)
}

/// Clear the mount node and insert `markup` in its place.
///
/// Returns false when the node is not in the document yet.
pub fn replace_mount_content(container_id: &str, markup: &str) -> bool {
    match mount_element(container_id) {
        Some(el) => {
            el.set_inner_html(markup);
            true
        }
        None => {
            log::warn!("dom_bridge: mount node #{} not found", container_id);
            false
        }
    }
}

/// Remove everything drawn into the mount node.
pub fn clear_mount(container_id: &str) {
    if let Some(el) = mount_element(container_id) {
        el.set_inner_html("");
    }
}

/// Top-left corner of the mount node in client (viewport) coordinates.
pub fn mount_origin(container_id: &str) -> Option<(f64, f64)> {
    let rect = mount_element(container_id)?.get_bounding_client_rect();
    Some((rect.left(), rect.top()))
}

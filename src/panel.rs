use crate::constants::{
    CLOSING_OVERLAY_ID, CONNECTOR_ATTR, DOT_ATTR, ENTRY_ATTR, HERO_ID, SCROLL_HINT_ID,
    TIMELINE_PANEL_ID, TIMELINE_RAIL_ID, TRANSITION_MS,
};
use crate::dom;
use crate::styles;
use globe_core::{PageCues, TimelineView};
use web_sys as web;

/// Push timeline reveal values onto the panel rows.
///
/// Every row keeps its layout slot; unrevealed rows sit at zero opacity so
/// the CSS transitions have something to ease from.
pub fn apply_timeline(document: &web::Document, view: &TimelineView) {
    let gate = styles::opacity(view.opacity, TRANSITION_MS);
    dom::set_style_by_id(document, TIMELINE_PANEL_ID, &gate);
    dom::set_style_by_id(document, TIMELINE_RAIL_ID, &gate);

    for entry in &view.entries {
        dom::set_style_by_attr(
            document,
            ENTRY_ATTR,
            &entry.id,
            &styles::entry_row(&entry.style, TRANSITION_MS),
        );
        dom::set_style_by_attr(
            document,
            DOT_ATTR,
            &entry.id,
            &styles::entry_dot(&entry.style, &entry.accent, TRANSITION_MS),
        );
        if let Some(css) = styles::entry_connector(&entry.style, TRANSITION_MS) {
            dom::set_style_by_attr(document, CONNECTOR_ATTR, &entry.id, &css);
        }
    }
}

pub fn apply_cues(document: &web::Document, cues: &PageCues) {
    dom::set_style_by_id(document, HERO_ID, &styles::hero(cues, TRANSITION_MS));
    dom::set_style_by_id(
        document,
        CLOSING_OVERLAY_ID,
        &styles::visibility(cues.closing_overlay_visible, TRANSITION_MS),
    );
    dom::set_style_by_id(
        document,
        SCROLL_HINT_ID,
        &styles::visibility(cues.scroll_hint_visible, TRANSITION_MS),
    );
}

// Inline style declarations for progress-driven page elements.
// Pure builders so they can be exercised on the host. Each builder names only
// the properties it drives; everything else on the element is left alone.

use globe_core::{EntryStyle, PageCues};

/// One inline style property and its value.
pub type Declaration = (&'static str, String);

#[inline]
pub fn opacity(value: f32, transition_ms: u32) -> Vec<Declaration> {
    vec![
        ("opacity", format!("{:.3}", value.clamp(0.0, 1.0))),
        ("transition-duration", format!("{}ms", transition_ms)),
    ]
}

#[inline]
pub fn visibility(visible: bool, transition_ms: u32) -> Vec<Declaration> {
    opacity(if visible { 1.0 } else { 0.0 }, transition_ms)
}

pub fn hero(cues: &PageCues, transition_ms: u32) -> Vec<Declaration> {
    let pointer = if cues.hero_interactive { "auto" } else { "none" };
    let mut decls = opacity(cues.hero_opacity, transition_ms);
    decls.push(("pointer-events", pointer.to_owned()));
    decls
}

pub fn entry_row(style: &EntryStyle, transition_ms: u32) -> Vec<Declaration> {
    let mut decls = opacity(style.opacity, transition_ms);
    decls.push((
        "transform",
        format!("translateX({:.1}px)", style.translate_x_px),
    ));
    decls
}

/// Glow is cleared explicitly so a dot that dims loses it.
pub fn entry_dot(style: &EntryStyle, accent: &str, transition_ms: u32) -> Vec<Declaration> {
    let background = if style.dot_filled { accent } else { "transparent" };
    let glow = if style.dot_glow {
        format!("0 0 10px {}", accent)
    } else {
        "none".to_owned()
    };
    vec![
        ("border-color", accent.to_owned()),
        ("background", background.to_owned()),
        ("box-shadow", glow),
        ("transition-duration", format!("{}ms", transition_ms)),
    ]
}

/// Connector below a row; `None` for the last row, which has no connector.
pub fn entry_connector(style: &EntryStyle, transition_ms: u32) -> Option<Vec<Declaration>> {
    style
        .connector_opacity
        .map(|o| opacity(o, transition_ms))
}

/// Drag cursor for the canvas; vertical touch panning still scrolls the page.
pub fn cursor(dragging: bool) -> Vec<Declaration> {
    let cursor = if dragging { "grabbing" } else { "grab" };
    vec![
        ("cursor", cursor.to_owned()),
        ("touch-action", "pan-y".to_owned()),
    ]
}

/// `[attr="value"]` with `value` escaped as a CSS string.
pub fn attr_selector(attr: &str, value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '"' => escaped.push_str("\\\""),
            '\\' => escaped.push_str("\\\\"),
            '\n' => escaped.push_str("\\a "),
            _ => escaped.push(ch),
        }
    }
    format!("[{}=\"{}\"]", attr, escaped)
}

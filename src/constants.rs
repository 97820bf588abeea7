// DOM hooks and presentation tuning for the web front-end.
// Element ids and data attributes are the contract with the host page; the
// page markup only has to provide the ones it wants driven.

// Elements
pub const SECTION_ID: &str = "globe-section";
pub const CANVAS_ID: &str = "globe-canvas";
pub const CONFIG_SCRIPT_ID: &str = "globe-config";
pub const TIMELINE_PANEL_ID: &str = "timeline-panel";
pub const TIMELINE_RAIL_ID: &str = "timeline-rail";
pub const HERO_ID: &str = "hero";
pub const CLOSING_OVERLAY_ID: &str = "closing-overlay";
pub const SCROLL_HINT_ID: &str = "scroll-hint";

// Data attributes carrying timeline entry ids
pub const ENTRY_ATTR: &str = "data-timeline-entry";
pub const DOT_ATTR: &str = "data-timeline-dot";
pub const CONNECTOR_ATTR: &str = "data-timeline-connector";

// Events dispatched on the canvas for the host renderer
pub const READY_EVENT: &str = "globe-ready";
pub const FRAME_EVENT: &str = "globe-frame";

// CSS transition for content driven by progress (milliseconds)
pub const TRANSITION_MS: u32 = 700;

// Device pixel ratio caps either side of the mobile breakpoint
pub const MOBILE_BREAKPOINT_PX: f64 = 768.0;
pub const DPR_CAP_MOBILE: f64 = 1.2;
pub const DPR_CAP_DESKTOP: f64 = 1.5;

// Frames longer than this (tab hidden, debugger) snap the camera instead of easing
pub const MAX_FRAME_GAP_SEC: f32 = 0.5;

// Shared scene tuning constants used by the web front-end and the trace tool.
// `SceneConfig::default()` is built from these values.

// Anchors (degrees)
pub const ORIGIN_LAT: f32 = 21.0278; // Hanoi
pub const ORIGIN_LON: f32 = 105.8342;
pub const DESTINATION_LAT: f32 = -37.8136; // Melbourne
pub const DESTINATION_LON: f32 = 144.9631;

// Globe
pub const GLOBE_RADIUS: f32 = 2.0;

// Camera distances as multiples of the globe radius
pub const CAMERA_START_DISTANCE_FACTOR: f32 = 3.5;
pub const CAMERA_END_DISTANCE_FACTOR: f32 = 3.8;

// Radial distance keyframes, relative to the start (or end) distance
pub const ZOOM_IN_FROM: f32 = 1.05;
pub const ZOOM_IN_TO: f32 = 0.85;
pub const FOCUS_TO: f32 = 0.90;
pub const ARRIVE_TO: f32 = 0.90;

// Camera zoom factor
pub const ZOOM_BASE: f32 = 1.5;
pub const ZOOM_FOCUSED: f32 = 2.75;

// Stage boundaries (progress)
pub const ZOOM_END: f32 = 0.25;
pub const FOCUS_END: f32 = 0.35;
pub const TRANSIT_END: f32 = 0.65;

// Camera smoothing: fraction of the remaining distance covered per reference frame
pub const CAMERA_SMOOTHING: f32 = 0.1;
pub const REFERENCE_FPS: f32 = 60.0;

// Flight path
pub const FLIGHT_SURFACE_LIFT: f32 = 0.1; // anchor height above the surface
pub const FLIGHT_ARC_LIFT: f32 = 1.2; // midpoint height above the surface
pub const FLIGHT_ARC_SEGMENTS: usize = 256;
pub const FLIGHT_ARC_LENGTH_DIVISIONS: usize = 200;
pub const FLIGHT_MARKER_VISIBLE_MAX: f32 = 0.99; // hide just before touchdown
pub const FLIGHT_HEADING_LOOKBACK: f32 = 0.01;

// Markers
pub const ORIGIN_MARKER_WINDOW: [f32; 2] = [0.05, 0.55];
pub const DESTINATION_MARKER_WINDOW: [f32; 2] = [0.45, 1.0];
pub const MARKER_HALO_OPACITY: f32 = 0.25;
pub const MARKER_EMISSIVE_INTENSITY: f32 = 0.5;

// Timeline
pub const ORIGIN_TIMELINE_WINDOW: [f32; 2] = [0.05, 0.25];
pub const DESTINATION_TIMELINE_WINDOW: [f32; 2] = [0.60, 0.80];
pub const HEADER_LEAD: f32 = 1.2; // header reveals slightly ahead of its entries
pub const ENTRY_SLIDE_PX: f32 = 20.0;
pub const ENTRY_HIGHLIGHT_THRESHOLD: f32 = 0.6;
pub const CONNECTOR_MIN_OPACITY: f32 = 0.1;

// Page cues
pub const HERO_FADE_RATE: f32 = 11.0;
pub const HERO_INTERACTIVE_MIN_OPACITY: f32 = 0.05;
pub const CLOSING_OVERLAY_AFTER: f32 = 0.9;
pub const SCROLL_HINT_UNTIL: f32 = 0.1;
pub const FLIGHT_ARC_AFTER: f32 = 0.1;

// Star field
pub const STAR_COUNT: usize = 2000;
pub const STAR_RADIUS_MIN: f32 = 50.0;
pub const STAR_RADIUS_MAX: f32 = 100.0;
pub const STAR_SEED: u64 = 42;

// Manual rotation
pub const DRAG_SENSITIVITY: f32 = 0.004; // radians per CSS pixel

// Smallest denominator used for window ratios
pub const RATIO_EPSILON: f32 = 1e-4;

use crate::constants::{DPR_CAP_DESKTOP, DPR_CAP_MOBILE, MOBILE_BREAKPOINT_PX};
use glam::Vec2;

/// Client-space pointer position; drag deltas are measured in CSS pixels.
#[inline]
pub fn client_pos(client_x: i32, client_y: i32) -> Vec2 {
    Vec2::new(client_x as f32, client_y as f32)
}

#[inline]
pub fn is_mobile_width(viewport_width: f64) -> bool {
    viewport_width < MOBILE_BREAKPOINT_PX
}

/// Device pixel ratio to render at: the real ratio, capped lower on narrow screens.
#[inline]
pub fn capped_dpr(device_pixel_ratio: f64, viewport_width: f64) -> f64 {
    let cap = if is_mobile_width(viewport_width) {
        DPR_CAP_MOBILE
    } else {
        DPR_CAP_DESKTOP
    };
    device_pixel_ratio.clamp(1.0, cap)
}

/// Canvas backing size in device pixels for a CSS size, never zero.
#[inline]
pub fn backing_size(css_width: f64, css_height: f64, dpr: f64) -> (u32, u32) {
    let w = (css_width * dpr) as u32;
    let h = (css_height * dpr) as u32;
    (w.max(1), h.max(1))
}

/// `innerHeight` arrives as a `JsValue`; anything non-numeric reads as zero.
#[inline]
pub fn viewport_height(value: Option<f64>) -> f32 {
    value.filter(|v| v.is_finite()).unwrap_or(0.0) as f32
}

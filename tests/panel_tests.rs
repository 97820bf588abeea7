// Host-side tests for markers, the timeline panel, page cues and the star field.

use globe_core::*;

fn approx(a: f32, b: f32) -> bool {
    (a - b).abs() < 1e-4
}

fn default_markers() -> MarkerLayer {
    let cfg = SceneConfig::default();
    MarkerLayer::new(&cfg.markers, cfg.globe_radius, cfg.flight.surface_lift)
}

fn visible_labels(layer: &MarkerLayer, progress: f32) -> Vec<String> {
    layer
        .evaluate(progress)
        .into_iter()
        .filter(|m| m.visible)
        .map(|m| m.label)
        .collect()
}

#[test]
fn markers_sit_just_above_surface() {
    let layer = default_markers();
    assert_eq!(layer.len(), 2);
    for (_, p) in layer.positions() {
        assert!(approx(p.length(), 2.1));
    }
}

#[test]
fn marker_windows_are_inclusive() {
    let layer = default_markers();
    assert!(visible_labels(&layer, 0.0).is_empty());
    assert!(visible_labels(&layer, 0.04).is_empty());
    assert_eq!(visible_labels(&layer, 0.05), ["Hanoi"]);
    assert_eq!(visible_labels(&layer, 0.3), ["Hanoi"]);
    assert_eq!(visible_labels(&layer, 0.5), ["Hanoi", "Melbourne"]);
    assert_eq!(visible_labels(&layer, 0.55), ["Hanoi", "Melbourne"]);
    assert_eq!(visible_labels(&layer, 0.56), ["Melbourne"]);
    assert_eq!(visible_labels(&layer, 1.0), ["Melbourne"]);
}

#[test]
fn hidden_markers_have_no_glow() {
    let layer = default_markers();
    let states = layer.evaluate(0.8);
    let hanoi = &states[0];
    assert!(!hanoi.visible);
    assert_eq!(hanoi.halo_opacity, 0.0);
    assert_eq!(hanoi.emissive, 0.0);
    let melbourne = &states[1];
    assert!(melbourne.visible);
    assert!(melbourne.halo_opacity > 0.0);
}

#[test]
fn reveal_formulas() {
    assert!(approx(header_reveal(0.5), 0.6));
    assert_eq!(header_reveal(0.9), 1.0);
    assert!(approx(experience_reveal(0.5, 0, 3), 1.0));
    assert!(approx(experience_reveal(0.5, 1, 3), 0.5));
    assert_eq!(experience_reveal(0.5, 2, 3), 0.0);
}

#[test]
fn entries_are_flattened_in_order() {
    let panel = TimelinePanel::new(default_sections());
    let ids: Vec<_> = panel.entries().iter().map(|e| e.id().to_owned()).collect();
    assert_eq!(
        ids,
        [
            "hanoi-header",
            "hanoi-exp-0",
            "hanoi-exp-1",
            "hanoi-exp-2",
            "melbourne-header",
            "melbourne-exp-0",
            "melbourne-exp-1",
        ]
    );
    let entries = panel.entries();
    assert!(entries[0].is_header());
    assert_eq!(entries[5].section().id, "melbourne");
}

#[test]
fn section_progress_by_id() {
    let panel = TimelinePanel::new(default_sections());
    assert!(approx(panel.section_progress("hanoi", 0.15).unwrap(), 0.5));
    assert_eq!(panel.section_progress("melbourne", 0.15), Some(0.0));
    assert_eq!(panel.section_progress("sydney", 0.15), None);
}

#[test]
fn reveal_is_monotonic_in_progress() {
    let panel = TimelinePanel::new(default_sections());
    let mut last: Option<TimelineView> = None;
    for i in 0..=200 {
        let view = panel.evaluate(i as f32 / 200.0);
        if let Some(prev) = &last {
            for (a, b) in prev.entries.iter().zip(&view.entries) {
                assert!(b.reveal >= a.reveal, "{} went backwards", b.id);
            }
        }
        last = Some(view);
    }
    let end = last.unwrap();
    assert!(end.entries.iter().all(|e| e.reveal == 1.0));
}

#[test]
fn experiences_reveal_one_after_another() {
    let panel = TimelinePanel::new(default_sections());
    for i in 0..=400 {
        let view = panel.evaluate(i as f32 / 400.0);
        for pair in view.entries.windows(2) {
            let (a, b) = (&pair[0], &pair[1]);
            if a.section_id == b.section_id && !a.id.ends_with("header") && b.reveal > 0.0 {
                assert!(a.reveal >= 1.0 - 1e-5, "{} started before {} finished", b.id, a.id);
            }
        }
    }
}

#[test]
fn panel_opacity_is_max_section_progress() {
    let panel = TimelinePanel::new(default_sections());
    assert_eq!(panel.opacity(0.0), 0.0);
    assert!(approx(panel.opacity(0.15), 0.5));
    assert_eq!(panel.opacity(0.7), 1.0);
}

#[test]
fn entry_style_values() {
    let s = EntryStyle::new(0.7, false, false);
    assert!(approx(s.opacity, 0.7));
    assert!(approx(s.translate_x_px, 6.0));
    assert!(s.dot_filled && s.dot_glow);
    assert_eq!(s.connector_opacity, Some(0.7));

    let header = EntryStyle::new(0.0, true, false);
    assert!(header.dot_filled);
    assert!(!header.dot_glow);
    assert_eq!(header.translate_x_px, 20.0);
    assert_eq!(header.connector_opacity, Some(0.1));

    let last = EntryStyle::new(1.0, false, true);
    assert_eq!(last.connector_opacity, None);

    let dim = EntryStyle::new(0.6, false, false);
    assert!(!dim.dot_filled && !dim.dot_glow);
}

#[test]
fn evaluated_view_marks_only_last_row() {
    let panel = TimelinePanel::new(default_sections());
    let view = panel.evaluate(0.7);
    let last = view.entries.len() - 1;
    for (i, e) in view.entries.iter().enumerate() {
        assert_eq!(e.style.connector_opacity.is_none(), i == last, "{}", e.id);
    }
    let exp = view
        .entries
        .iter()
        .find(|e| e.id == "melbourne-exp-0")
        .unwrap();
    assert_eq!(exp.section_id, "melbourne");
    assert_eq!(exp.accent, "#38bdf8");
}

#[test]
fn empty_section_list_is_fine() {
    let panel = TimelinePanel::new(Vec::new());
    let view = panel.evaluate(0.5);
    assert_eq!(view.opacity, 0.0);
    assert!(view.entries.is_empty());
}

#[test]
fn page_cues_thresholds() {
    let cues = CueConfig::default();

    let top = cues.evaluate(0.0);
    assert_eq!(top.hero_opacity, 1.0);
    assert!(top.hero_interactive);
    assert!(top.scroll_hint_visible);
    assert!(!top.flight_arc_visible);
    assert!(!top.closing_overlay_visible);

    let fading = cues.evaluate(0.05);
    assert!(approx(fading.hero_opacity, 0.45));

    let gone = cues.evaluate(0.1);
    assert_eq!(gone.hero_opacity, 0.0);
    assert!(!gone.hero_interactive);
    assert!(gone.scroll_hint_visible);
    assert!(!gone.flight_arc_visible);

    let mid = cues.evaluate(0.5);
    assert!(!mid.scroll_hint_visible);
    assert!(mid.flight_arc_visible);
    assert!(!mid.closing_overlay_visible);

    assert!(cues.evaluate(0.95).closing_overlay_visible);
}

#[test]
fn star_field_is_seeded() {
    let cfg = StarFieldConfig::default();
    let a = cfg.generate();
    let b = cfg.generate();
    assert_eq!(a.len(), 2000);
    assert_eq!(a, b);
    for p in &a {
        let r = p.length();
        assert!((49.99..=100.01).contains(&r), "radius {r}");
    }

    let other = StarFieldConfig { seed: 7, ..cfg }.generate();
    assert_ne!(a, other);
}

#[test]
fn star_field_covers_both_hemispheres() {
    let stars = StarFieldConfig::default().generate();
    let above = stars.iter().filter(|p| p.z > 0.0).count();
    assert!(above > 800 && above < 1200, "{above} of {}", stars.len());
}

#![allow(clippy::float_cmp)]

use super::*;

const VIEWPORT: f64 = 1000.0;

// =============================================================
// Animations
// =============================================================

#[test]
fn section_animation_fades_up_from_fifty_px() {
    let anim = EntranceAnimation::section();
    assert_eq!(anim.from_opacity, 0.0);
    assert_eq!(anim.from_translate_y_px, 50.0);
    assert_eq!(anim.duration_ms, 800.0);
    assert_eq!(anim.delay_ms, 0.0);
    assert_eq!(anim.easing, Easing::PowerTwoOut);
    assert_eq!(anim.from_transform(), "translateY(50px) scale(1)");
}

#[test]
fn staggered_animation_scales_from_point_eight() {
    let anim = EntranceAnimation::staggered(3, 100.0);
    assert_eq!(anim.from_scale, 0.8);
    assert_eq!(anim.duration_ms, 600.0);
    assert_eq!(anim.delay_ms, 300.0);
    assert_eq!(anim.from_transform(), "translateY(0px) scale(0.8)");
}

#[test]
fn negative_stagger_step_collapses_to_zero() {
    assert_eq!(stagger_delay_ms(4, -100.0), 0.0);
    assert_eq!(stagger_delay_ms(4, f64::NAN), 0.0);
}

#[test]
fn stagger_delay_is_linear_and_non_decreasing() {
    let delays: Vec<f64> = (0..8).map(|i| stagger_delay_ms(i, 100.0)).collect();
    assert_eq!(delays[0], 0.0);
    assert_eq!(delays[1], 100.0);
    assert!(delays.windows(2).all(|w| w[0] <= w[1]));
}

#[test]
fn easing_css_is_a_cubic_bezier() {
    assert_eq!(Easing::PowerTwoOut.css(), "cubic-bezier(0.25, 0.46, 0.45, 0.94)");
    let back = Easing::BackOut(1.2).css();
    assert!(back.starts_with("cubic-bezier(0.175, 0.885, 0.32, 1.19"));
}

// =============================================================
// RevealTrigger
// =============================================================

#[test]
fn trigger_waits_until_top_reaches_start_line() {
    let mut trigger = RevealTrigger::new(0.85);
    assert!(!trigger.check(900.0, VIEWPORT));
    assert!(!trigger.is_played());
    assert!(trigger.check(850.0, VIEWPORT));
    assert!(trigger.is_played());
}

#[test]
fn trigger_fires_for_content_already_scrolled_past() {
    let mut trigger = RevealTrigger::new(0.75);
    assert!(trigger.check(-400.0, VIEWPORT));
}

#[test]
fn trigger_fires_at_most_once() {
    let mut trigger = RevealTrigger::new(0.85);
    assert!(trigger.check(100.0, VIEWPORT));
    // Scroll back up past it and down again.
    assert!(!trigger.check(2000.0, VIEWPORT));
    assert!(!trigger.check(100.0, VIEWPORT));
}

// =============================================================
// RevealSet
// =============================================================

fn at(top_px: f64) -> SourceSighting {
    SourceSighting { top_px, viewport_height_px: VIEWPORT, intersecting: false }
}

#[test]
fn sections_fire_once_and_leave_the_pending_set() {
    let mut set = RevealSet::new();
    set.add_section("about");
    set.add_section("projects");

    assert!(set.fire(&"projects", RevealKind::Section, at(1800.0)).is_empty());
    let fired = set.fire(&"about", RevealKind::Section, at(500.0));
    assert_eq!(fired.len(), 1);
    assert_eq!(fired[0].target, "about");
    assert_eq!(set.pending().len(), 1);
    assert!(!set.has_pending(&"about", RevealKind::Section));

    // Scrolling back past "about" and down again does nothing.
    assert!(set.fire(&"about", RevealKind::Section, at(2000.0)).is_empty());
    assert!(set.fire(&"about", RevealKind::Section, at(0.0)).is_empty());
    assert!(set.has_pending(&"projects", RevealKind::Section));
}

#[test]
fn fire_only_touches_entries_of_the_reported_kind() {
    let mut set = RevealSet::new();
    set.add_section("skills");
    set.add_marked(["badge"], 100.0, |_| Some("skills"));

    // Top at 80%: past the section line (85%) but not the marked line (75%).
    let fired = set.fire(&"skills", RevealKind::Marked, at(800.0));
    assert!(fired.is_empty());
    let fired = set.fire(&"skills", RevealKind::Section, at(800.0));
    assert_eq!(fired.len(), 1);
    assert_eq!(fired[0].kind, RevealKind::Section);
    assert!(set.has_pending(&"skills", RevealKind::Marked));
}

#[test]
fn observer_intersection_fires_even_when_geometry_lags() {
    let mut set = RevealSet::new();
    set.add_section("contact");
    let sighting = SourceSighting { top_px: 851.0, viewport_height_px: VIEWPORT, intersecting: true };
    assert_eq!(set.fire(&"contact", RevealKind::Section, sighting).len(), 1);
    assert!(set.is_empty());
}

#[test]
fn sources_are_distinct_per_kind() {
    let mut set = RevealSet::new();
    set.add_section("projects");
    set.add_marked(["a", "b", "loose"], 100.0, |el| if *el == "loose" { None } else { Some("projects") });
    assert_eq!(set.sources(RevealKind::Section), vec![&"projects"]);
    assert_eq!(set.sources(RevealKind::Marked), vec![&"projects", &"loose"]);
}

#[test]
fn root_margin_ends_at_the_start_line() {
    assert_eq!(RevealKind::Section.root_margin(), "100000% 0px -15% 0px");
    assert_eq!(RevealKind::Marked.root_margin(), "100000% 0px -25% 0px");
}

#[test]
fn latch_reports_only_the_first_play() {
    let mut trigger = RevealTrigger::new(0.5);
    assert!(trigger.latch());
    assert!(!trigger.latch());
    assert!(trigger.is_played());
}

#[test]
fn marked_elements_use_enclosing_section_as_source() {
    let mut set = RevealSet::new();
    set.add_marked(["card-a", "card-b", "loose"], 100.0, |el| {
        if el.starts_with("card") { Some("projects") } else { None }
    });

    let sources: Vec<_> = set.pending().iter().map(|e| e.source).collect();
    assert_eq!(sources, vec!["projects", "projects", "loose"]);
    assert!(set.pending().iter().all(|e| e.trigger.start_fraction == 0.75));
}

#[test]
fn marked_delays_follow_document_order() {
    let mut set = RevealSet::new();
    set.add_marked(0..5_usize, 100.0, |_| Some(99));
    let delays: Vec<f64> = set.pending().iter().map(|e| e.animation.delay_ms).collect();
    assert_eq!(delays, vec![0.0, 100.0, 200.0, 300.0, 400.0]);
}

#[test]
fn group_fires_together_when_section_crosses() {
    let mut set = RevealSet::new();
    set.add_marked(["a", "b", "c"], 100.0, |_| Some("skills"));
    assert!(set.fire(&"skills", RevealKind::Marked, at(800.0)).is_empty());
    let fired = set.fire(&"skills", RevealKind::Marked, at(700.0));
    let targets: Vec<_> = fired.iter().map(|e| e.target).collect();
    assert_eq!(targets, vec!["a", "b", "c"]);
    assert!(set.is_empty());
}

//! One-shot entrance animations triggered by scroll position.
//!
//! DESIGN
//! ======
//! Each animated element gets a [`RevealTrigger`] keyed to a source element
//! (the section itself, or the section enclosing a marked element). The
//! browser layer watches sources with one intersection observer per
//! [`RevealKind`] and reports each sighting to [`RevealSet::fire`]; a trigger
//! fires the first time its source reaches the start line and is then dropped
//! from the set, so scrolling back past it never replays the animation.

#[cfg(test)]
#[path = "reveal_test.rs"]
mod reveal_test;

use crate::consts::*;

/// Timing curve for an entrance animation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Easing {
    /// Quadratic ease-out.
    PowerTwoOut,
    /// Ease-out with overshoot; the payload is the overshoot strength.
    BackOut(f64),
}

impl Easing {
    /// CSS timing function passed to the Web Animations API.
    #[must_use]
    pub fn css(self) -> String {
        match self {
            Self::PowerTwoOut => "cubic-bezier(0.25, 0.46, 0.45, 0.94)".to_owned(),
            // 1.70158 (the classic back constant) maps to y2 = 1.275.
            Self::BackOut(overshoot) => {
                let y2 = 1.0 + overshoot.max(0.0) * 0.1617;
                format!("cubic-bezier(0.175, 0.885, 0.32, {y2:.3})")
            }
        }
    }
}

/// Start values and timing for a "from" tween back to the element's natural style.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EntranceAnimation {
    pub from_opacity: f64,
    pub from_translate_y_px: f64,
    pub from_scale: f64,
    pub duration_ms: f64,
    pub delay_ms: f64,
    pub easing: Easing,
}

impl EntranceAnimation {
    /// Fade in from 50px below.
    #[must_use]
    pub fn section() -> Self {
        Self {
            from_opacity: 0.0,
            from_translate_y_px: SECTION_FROM_Y_PX,
            from_scale: 1.0,
            duration_ms: SECTION_DURATION_MS,
            delay_ms: 0.0,
            easing: Easing::PowerTwoOut,
        }
    }

    /// Scale/fade in, delayed by `index` stagger steps.
    #[must_use]
    pub fn staggered(index: usize, step_ms: f64) -> Self {
        Self {
            from_opacity: 0.0,
            from_translate_y_px: 0.0,
            from_scale: ELEMENT_FROM_SCALE,
            duration_ms: ELEMENT_DURATION_MS,
            delay_ms: stagger_delay_ms(index, step_ms),
            easing: Easing::BackOut(ELEMENT_BACK_OVERSHOOT),
        }
    }

    /// CSS `transform` for the starting keyframe.
    #[must_use]
    pub fn from_transform(&self) -> String {
        format!("translateY({}px) scale({})", self.from_translate_y_px, self.from_scale)
    }
}

/// Linear stagger: element `index` (document order) waits `index * step_ms`.
/// Negative or NaN steps collapse to zero so delays never decrease.
#[must_use]
pub fn stagger_delay_ms(index: usize, step_ms: f64) -> f64 {
    f64::from(u32::try_from(index).unwrap_or(u32::MAX)) * step_ms.max(0.0)
}

/// Which start line a reveal waits for.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RevealKind {
    /// A section animating itself, keyed to its own top edge.
    Section,
    /// A marked element, keyed to its enclosing section's top edge.
    Marked,
}

impl RevealKind {
    pub const ALL: [Self; 2] = [Self::Section, Self::Marked];

    /// Start line as a fraction of the viewport height, from the top.
    #[must_use]
    pub fn start_fraction(self) -> f64 {
        match self {
            Self::Section => SECTION_START_FRACTION,
            Self::Marked => ELEMENT_START_FRACTION,
        }
    }

    /// `rootMargin` for an `IntersectionObserver` whose root box spans from
    /// far above the viewport down to the start line. A source intersects it
    /// once its top has reached the line, even if a fast scroll carried it
    /// past the viewport between frames.
    #[must_use]
    pub fn root_margin(self) -> String {
        let bottom_pct = (1.0 - self.start_fraction()) * 100.0;
        format!("{REVEAL_LOOKBACK_PCT}% 0px -{bottom_pct:.0}% 0px")
    }
}

/// Fires once, the first time the source's top reaches `start_fraction` of
/// the viewport height.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RevealTrigger {
    pub start_fraction: f64,
    played: bool,
}

impl RevealTrigger {
    #[must_use]
    pub fn new(start_fraction: f64) -> Self {
        Self { start_fraction, played: false }
    }

    #[must_use]
    pub fn is_played(&self) -> bool {
        self.played
    }

    /// Whether a source top at `source_top_px` is on or above the start line.
    #[must_use]
    pub fn reached(&self, source_top_px: f64, viewport_height_px: f64) -> bool {
        source_top_px <= viewport_height_px * self.start_fraction
    }

    /// Mark played. Returns `true` only the first time.
    pub fn latch(&mut self) -> bool {
        !std::mem::replace(&mut self.played, true)
    }

    /// Returns `true` exactly once: on the first call where the condition holds.
    pub fn check(&mut self, source_top_px: f64, viewport_height_px: f64) -> bool {
        !self.played && self.reached(source_top_px, viewport_height_px) && self.latch()
    }
}

/// Where a source sits when its observer reports it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SourceSighting {
    pub top_px: f64,
    pub viewport_height_px: f64,
    /// The observer already judged the source past the start line.
    pub intersecting: bool,
}

#[derive(Clone, Debug)]
pub struct RevealEntry<T> {
    /// Element whose style is animated.
    pub target: T,
    /// Element whose position drives the trigger.
    pub source: T,
    pub kind: RevealKind,
    pub animation: EntranceAnimation,
    pub trigger: RevealTrigger,
}

/// Pending (not yet played) reveal entries, in registration order.
#[derive(Clone, Debug)]
pub struct RevealSet<T> {
    pending: Vec<RevealEntry<T>>,
}

impl<T> Default for RevealSet<T> {
    fn default() -> Self {
        Self { pending: Vec::new() }
    }
}

impl<T> RevealSet<T> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a section that animates itself.
    pub fn add_section(&mut self, section: T)
    where
        T: Clone,
    {
        self.pending.push(RevealEntry {
            target: section.clone(),
            source: section,
            kind: RevealKind::Section,
            animation: EntranceAnimation::section(),
            trigger: RevealTrigger::new(RevealKind::Section.start_fraction()),
        });
    }

    /// Register marked elements in document order. `enclosing` yields the
    /// nearest containing section, or `None` to use the element itself.
    pub fn add_marked<I, F>(&mut self, elements: I, step_ms: f64, mut enclosing: F)
    where
        T: Clone,
        I: IntoIterator<Item = T>,
        F: FnMut(&T) -> Option<T>,
    {
        for (index, element) in elements.into_iter().enumerate() {
            let source = enclosing(&element).unwrap_or_else(|| element.clone());
            self.pending.push(RevealEntry {
                target: element,
                source,
                kind: RevealKind::Marked,
                animation: EntranceAnimation::staggered(index, step_ms),
                trigger: RevealTrigger::new(RevealKind::Marked.start_fraction()),
            });
        }
    }

    #[must_use]
    pub fn pending(&self) -> &[RevealEntry<T>] {
        &self.pending
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Distinct sources still waiting on `kind`, in registration order.
    #[must_use]
    pub fn sources(&self, kind: RevealKind) -> Vec<&T>
    where
        T: PartialEq,
    {
        let mut out: Vec<&T> = Vec::new();
        for entry in self.pending.iter().filter(|e| e.kind == kind) {
            if !out.contains(&&entry.source) {
                out.push(&entry.source);
            }
        }
        out
    }

    #[must_use]
    pub fn has_pending(&self, source: &T, kind: RevealKind) -> bool
    where
        T: PartialEq,
    {
        self.pending.iter().any(|e| e.kind == kind && e.source == *source)
    }

    /// Handle an observer report for `source`: every pending `kind` entry
    /// keyed to it whose start line is reached fires and leaves the set.
    /// Returned entries keep registration order.
    pub fn fire(&mut self, source: &T, kind: RevealKind, sighting: SourceSighting) -> Vec<RevealEntry<T>>
    where
        T: PartialEq,
    {
        let mut fired = Vec::new();
        let mut still_pending = Vec::with_capacity(self.pending.len());
        for mut entry in self.pending.drain(..) {
            let matches = entry.kind == kind && entry.source == *source;
            let hit = matches
                && if sighting.intersecting {
                    entry.trigger.latch()
                } else {
                    entry.trigger.check(sighting.top_px, sighting.viewport_height_px)
                };
            if hit {
                fired.push(entry);
            } else {
                still_pending.push(entry);
            }
        }
        self.pending = still_pending;
        fired
    }
}

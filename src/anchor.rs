//! Same-page anchor navigation with a fixed-header offset.

#[cfg(test)]
#[path = "anchor_test.rs"]
mod anchor_test;

/// What a click on a scroll link should do.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum AnchorPlan {
    /// Not an in-page link; leave the browser's navigation alone.
    Passthrough,
    /// In-page link whose target does not exist. Default is prevented and
    /// nothing else happens.
    Ignore,
    /// Smooth-scroll to `top` and collapse the mobile nav panel.
    Scroll { top: f64 },
}

impl AnchorPlan {
    /// Whether the click's default navigation must be suppressed.
    #[must_use]
    pub fn prevents_default(self) -> bool {
        !matches!(self, Self::Passthrough)
    }
}

/// Fragment id of an in-page href (`"#about"` → `Some("about")`).
#[must_use]
pub fn fragment_id(href: &str) -> Option<&str> {
    href.strip_prefix('#')
}

/// Document position of an element from its bounding-rect top and the
/// current vertical scroll offset.
#[must_use]
pub fn document_top(element_top_in_viewport: f64, scroll_y: f64) -> f64 {
    element_top_in_viewport + scroll_y
}

/// Decide how to handle a click on a link with `href`.
///
/// `resolve_top` resolves a fragment id to the target element's document
/// position, or `None` when no element has that id. Empty fragments never
/// resolve.
pub fn plan_anchor_click<F>(href: &str, header_offset_px: f64, resolve_top: F) -> AnchorPlan
where
    F: FnOnce(&str) -> Option<f64>,
{
    let Some(id) = fragment_id(href) else {
        return AnchorPlan::Passthrough;
    };
    if id.is_empty() {
        return AnchorPlan::Ignore;
    }
    match resolve_top(id) {
        Some(top) => AnchorPlan::Scroll { top: top - header_offset_px },
        None => AnchorPlan::Ignore,
    }
}

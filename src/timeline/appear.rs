//! Synthesized start and end outlines for shapes without a partner.

use serde::{Deserialize, Serialize};

use crate::geom::bounds::Bounds;
use crate::geom::outline::{circle_outline, rect_outline};

const COLLAPSE_MIN_RADIUS: f64 = 0.01;
const COLLAPSE_RELATIVE_RADIUS: f64 = 0.05;
const BBOX_CORNER_RATIO: f64 = 0.1;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AppearStyle {
    #[default]
    CollapseToCentroid,
    BboxToShape,
}

/// Small circle at the outline's bounds center.
pub fn collapse_outline(outline: &str) -> String {
    let b = Bounds::from_outline(outline);
    if b.empty {
        return outline.to_owned();
    }
    let r = (b.width().min(b.height()) * COLLAPSE_RELATIVE_RADIUS).max(COLLAPSE_MIN_RADIUS);
    let c = b.center();
    circle_outline(c.x, c.y, r)
}

/// Rounded rectangle covering the outline's bounds.
pub fn bbox_outline(outline: &str) -> String {
    let b = Bounds::from_outline(outline);
    if b.empty {
        return outline.to_owned();
    }
    let r = b.width().min(b.height()) * BBOX_CORNER_RATIO;
    rect_outline(b.min_x, b.min_y, b.width(), b.height(), r)
}

/// Start outline for a shape appearing into `end_outline`.
pub fn appear_outline(end_outline: &str, style: AppearStyle) -> String {
    match style {
        AppearStyle::CollapseToCentroid => collapse_outline(end_outline),
        AppearStyle::BboxToShape => bbox_outline(end_outline),
    }
}

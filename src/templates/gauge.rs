use std::f64::consts::PI;

use crate::verdict::{format_score, gauge_fraction, GAUGE_MAX, GAUGE_MIN};

const CX: f64 = 100.0;
const CY: f64 = 100.0;
const RADIUS: f64 = 80.0;
const NEEDLE: f64 = 70.0;

/// Point on the dial `fraction` of the way from the left end to the right.
pub fn dial_point(fraction: f64, radius: f64) -> (f64, f64) {
    let theta = PI * (1.0 - fraction);
    (CX + radius * theta.cos(), CY - radius * theta.sin())
}

/// Half-dial SVG with a needle at `score`, pinned to the display range.
pub fn render(score: f64) -> String {
    let fraction = gauge_fraction(score);
    let (arc_x, arc_y) = dial_point(fraction, RADIUS);
    let (needle_x, needle_y) = dial_point(fraction, NEEDLE);
    let color = if fraction >= 0.1 { "#16a34a" } else { "#dc2626" };

    format!(
        r##"<svg xmlns="http://www.w3.org/2000/svg" width="200" height="120" viewBox="0 0 200 120" role="img" aria-label="Rigor gauge: {label}">
  <title>Rigor gauge: {label}</title>
  <path d="M {left_x} {cy} A {r} {r} 0 0 1 {right_x} {cy}" fill="none" stroke="#e8ebf0" stroke-width="14"/>
  <path d="M {left_x} {cy} A {r} {r} 0 0 1 {arc_x:.2} {arc_y:.2}" fill="none" stroke="{color}" stroke-width="14"/>
  <line x1="{cx}" y1="{cy}" x2="{needle_x:.2}" y2="{needle_y:.2}" stroke="#111827" stroke-width="3" stroke-linecap="round"/>
  <circle cx="{cx}" cy="{cy}" r="5" fill="#111827"/>
  <text x="{left_x}" y="116" text-anchor="middle" font-size="10" fill="#9ca3af">{min}</text>
  <text x="{right_x}" y="116" text-anchor="middle" font-size="10" fill="#9ca3af">{max}</text>
</svg>"##,
        label = format_score(score),
        left_x = CX - RADIUS,
        right_x = CX + RADIUS,
        cx = CX,
        cy = CY,
        r = RADIUS,
        arc_x = arc_x,
        arc_y = arc_y,
        needle_x = needle_x,
        needle_y = needle_y,
        color = color,
        min = GAUGE_MIN,
        max = GAUGE_MAX,
    )
}

//! Shared ellipse geometry for both header layers.
//!
//! Everything here is pure: the renderers feed in canvas dimensions and
//! the interpolated collapse factor, and only perform the draw calls
//! specific to their visual style.

use crate::util::lerp;

/// Inset between the outermost ellipse and the canvas edge (px).
pub const PADDING: f64 = 10.0;
/// Upper bound of the collapse factor (fully flattened header).
pub const MAX_COLLAPSE: f64 = 0.3;
/// Per-frame interpolation factor toward the collapse target.
pub const COLLAPSE_EASE: f64 = 0.1;
/// Mirrored ellipse pairs drawn per frame.
pub const RING_PAIRS: usize = 5;
/// Arc-length distance between stamped glyphs (px).
pub const GLYPH_GAP: f64 = 12.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EllipseSpec {
    pub width: f64,
    pub height: f64,
    pub offset: f64,
}

/// Layout for ring `i`: width and center offset grow by `1.7^i`, height
/// is the padded canvas height scaled by the collapse factor, and the
/// width is clamped to half the canvas (always at the outermost ring)
/// with the offset rescaled to match.
pub fn ring_spec(i: usize, canvas_w: f64, canvas_h: f64, collapse: f64) -> EllipseSpec {
    let size_factor = 1.7_f64.powi(i as i32);
    let mut width = 100.0 * size_factor;
    let mut offset = 50.0 * size_factor;
    let height = (canvas_h - PADDING) * (1.0 - collapse);
    let max_width = canvas_w / 2.0 - PADDING;
    if width > max_width || i == RING_PAIRS - 1 {
        width = max_width;
        offset = 50.0 * (width / 100.0);
    }
    EllipseSpec { width, height, offset }
}

/// Ramanujan's second circumference approximation.
pub fn perimeter(width: f64, height: f64) -> f64 {
    let a = width / 2.0;
    let b = height / 2.0;
    std::f64::consts::PI * (3.0 * (a + b) - ((3.0 * a + b) * (a + 3.0 * b)).sqrt())
}

/// Number of glyphs stamped along one ellipse outline.
pub fn glyph_steps(width: f64, height: f64) -> usize {
    (perimeter(width, height) / GLYPH_GAP).floor() as usize
}

/// Angle for sample `i` of `steps`, sweeping the full ellipse.
pub fn step_angle(i: usize, steps: usize) -> f64 {
    lerp(0.0, std::f64::consts::TAU, i as f64 / steps as f64)
}

/// Exponentially smoothed collapse factor; each renderer keeps its own.
#[derive(Default, Debug, Clone)]
pub struct CollapseAnim {
    current: f64,
}

impl CollapseAnim {
    /// Move one frame toward the target implied by the collapse signal.
    pub fn advance(&mut self, collapse_on: bool) -> f64 {
        let target = if collapse_on { MAX_COLLAPSE } else { 0.0 };
        self.current = lerp(self.current, target, COLLAPSE_EASE);
        self.current
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx_eq(a: f64, b: f64, eps: f64) -> bool {
        (a - b).abs() < eps
    }

    #[test]
    fn collapse_stays_bounded_and_approaches_without_overshoot() {
        let mut anim = CollapseAnim::default();
        let mut prev = 0.0;
        for _ in 0..500 {
            let v = anim.advance(true);
            assert!(v >= prev && v <= MAX_COLLAPSE);
            prev = v;
        }
        for _ in 0..500 {
            let v = anim.advance(false);
            assert!(v <= prev && v >= 0.0);
            prev = v;
        }
    }

    #[test]
    fn collapse_progress_after_ten_frames() {
        let mut anim = CollapseAnim::default();
        let mut v = 0.0;
        for _ in 0..10 {
            v = anim.advance(true);
        }
        let expected = MAX_COLLAPSE * (1.0 - 0.9_f64.powi(10));
        assert!(approx_eq(v, expected, 1e-12));
        assert!(v >= MAX_COLLAPSE * 0.65);
    }

    #[test]
    fn ring_width_never_exceeds_half_canvas() {
        let w = 800.0;
        let max_width = w / 2.0 - PADDING;
        for i in 0..RING_PAIRS {
            assert!(ring_spec(i, w, 64.0, 0.0).width <= max_width);
        }
        let outer = ring_spec(RING_PAIRS - 1, w, 64.0, 0.0);
        assert_eq!(outer.width, max_width);
    }

    #[test]
    fn clamped_rings_rescale_their_offset() {
        let w = 800.0;
        // 1.7^3 -> width 491.3 exceeds 390 and gets clamped
        let spec = ring_spec(3, w, 64.0, 0.0);
        assert_eq!(spec.width, w / 2.0 - PADDING);
        assert_eq!(spec.offset, spec.width / 2.0);
        let inner = ring_spec(1, w, 64.0, 0.0);
        assert!(approx_eq(inner.width, 170.0, 1e-9));
        assert!(approx_eq(inner.offset, 85.0, 1e-9));
    }

    #[test]
    fn height_scales_with_collapse() {
        let spec = ring_spec(0, 800.0, 64.0, 0.0);
        assert!(approx_eq(spec.height, 54.0, 1e-9));
        let flat = ring_spec(0, 800.0, 64.0, MAX_COLLAPSE);
        assert!(approx_eq(flat.height, 54.0 * 0.7, 1e-9));
    }

    #[test]
    fn circle_steps_match_the_exact_circumference() {
        for r in [6.0, 24.0, 100.0, 333.0] {
            let exact = (std::f64::consts::TAU * r / GLYPH_GAP).floor() as usize;
            assert_eq!(glyph_steps(2.0 * r, 2.0 * r), exact);
        }
    }

    #[test]
    fn step_angles_sweep_the_full_turn() {
        let steps = 10;
        assert_eq!(step_angle(0, steps), 0.0);
        assert!(approx_eq(step_angle(5, steps), std::f64::consts::PI, 1e-12));
        assert!(step_angle(steps - 1, steps) < std::f64::consts::TAU);
    }
}

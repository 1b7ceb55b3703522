// Collapse signal derived from the window scroll offset.

/// Downward scroll distance (px) before the header may collapse.
pub const COLLAPSE_SCROLL_MIN: f64 = 10.0;

#[derive(Default, Debug, Clone)]
pub struct ScrollTracker {
    last_y: f64,
    collapsed: bool,
}

impl ScrollTracker {
    /// Feed the current vertical offset. Returns the new collapse signal
    /// only when it changed; `last_y` advances either way.
    pub fn observe(&mut self, y: f64) -> Option<bool> {
        let scrolling_down = y > self.last_y && y > COLLAPSE_SCROLL_MIN;
        let changed = scrolling_down != self.collapsed;
        self.collapsed = scrolling_down;
        self.last_y = y;
        changed.then_some(scrolling_down)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collapses_only_past_threshold_while_moving_down() {
        let mut t = ScrollTracker::default();
        assert_eq!(t.observe(5.0), None);
        assert_eq!(t.observe(8.0), None);
        assert_eq!(t.observe(20.0), Some(true));
    }

    #[test]
    fn signal_flips_once_per_transition() {
        let mut t = ScrollTracker::default();
        assert_eq!(t.observe(20.0), Some(true));
        assert_eq!(t.observe(40.0), None);
        assert_eq!(t.observe(60.0), None);
        assert_eq!(t.observe(50.0), Some(false));
        assert_eq!(t.observe(45.0), None);
        assert_eq!(t.observe(55.0), Some(true));
    }

    #[test]
    fn last_y_advances_even_without_a_signal_change() {
        let mut t = ScrollTracker::default();
        assert_eq!(t.observe(8.0), None);
        // 9 > 8 but still under the threshold
        assert_eq!(t.observe(9.0), None);
        // 12 > 9 only because last_y kept advancing
        assert_eq!(t.observe(12.0), Some(true));
    }

    #[test]
    fn upward_moves_never_collapse() {
        let mut t = ScrollTracker::default();
        assert_eq!(t.observe(100.0), Some(true));
        assert_eq!(t.observe(90.0), Some(false));
        assert_eq!(t.observe(80.0), None);
        assert_eq!(t.observe(70.0), None);
    }
}

use crate::config::{REVEAL_STAGGER_SECS, SCROLL_THRESHOLD};

const HEADER_BACKGROUND: &str = "rgba(255, 255, 255, 0.95)";
const HEADER_BACKGROUND_SCROLLED: &str = "rgba(255, 255, 255, 0.98)";
const HEADER_SHADOW: &str = "0 2px 20px rgba(0, 0, 0, 0.1)";
const HEADER_SHADOW_SCROLLED: &str = "0 2px 20px rgba(0, 0, 0, 0.15)";

/// Tracks which side of the scroll threshold the header is on. Only a
/// crossing counts as a change, so repeated scroll events on the same side
/// are free.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct HeaderLatch {
    scrolled: bool,
}

impl HeaderLatch {
    pub fn is_scrolled(&self) -> bool {
        self.scrolled
    }

    /// Feeds a vertical offset. Returns true when the threshold was crossed.
    pub fn observe(&mut self, offset: f64) -> bool {
        if offset > SCROLL_THRESHOLD && !self.scrolled {
            self.scrolled = true;
            true
        } else if offset <= SCROLL_THRESHOLD && self.scrolled {
            self.scrolled = false;
            true
        } else {
            false
        }
    }

    pub fn header_style(&self) -> String {
        let (background, shadow) = if self.scrolled {
            (HEADER_BACKGROUND_SCROLLED, HEADER_SHADOW_SCROLLED)
        } else {
            (HEADER_BACKGROUND, HEADER_SHADOW)
        };
        format!("background: {}; box-shadow: {};", background, shadow)
    }
}

/// Later floating cards move faster.
pub fn parallax_speed(index: usize) -> f64 {
    0.5 + index as f64 * 0.1
}

pub fn parallax_offset(scroll_offset: f64, index: usize) -> f64 {
    -(scroll_offset * parallax_speed(index))
}

pub fn parallax_transform(scroll_offset: f64, index: usize) -> String {
    format!("transform: translateY({}px);", parallax_offset(scroll_offset, index))
}

/// Animation delay for the n-th member of a card grid.
pub fn reveal_delay(sibling_index: usize) -> String {
    format!("animation-delay: {:.1}s;", sibling_index as f64 * REVEAL_STAGGER_SECS)
}

/// One-shot reveal: the first intersection wins, scrolling away never hides
/// the element again.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RevealLatch {
    revealed: bool,
}

impl RevealLatch {
    #[cfg(test)]
    pub fn is_revealed(&self) -> bool {
        self.revealed
    }

    /// Returns true only for the intersection that reveals the element.
    pub fn observe(&mut self, intersecting: bool) -> bool {
        if intersecting && !self.revealed {
            self.revealed = true;
            return true;
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn latch_fires_once_per_crossing() {
        let mut latch = HeaderLatch::default();
        assert!(!latch.observe(50.0));
        assert!(!latch.observe(100.0));
        assert!(latch.observe(101.0));
        assert!(!latch.observe(400.0));
        assert!(!latch.observe(250.0));
        assert!(latch.is_scrolled());
        assert!(latch.observe(100.0));
        assert!(!latch.is_scrolled());
        assert!(!latch.observe(0.0));
    }

    #[test]
    fn header_style_follows_latch() {
        let mut latch = HeaderLatch::default();
        assert!(latch.header_style().contains("0.95"));
        latch.observe(200.0);
        assert!(latch.header_style().contains("0.98"));
        assert!(latch.header_style().contains("0.15"));
    }

    #[test]
    fn parallax_grows_with_index() {
        assert_eq!(parallax_offset(0.0, 3), 0.0);
        assert!((parallax_offset(100.0, 0) + 50.0).abs() < 1e-9);
        assert!((parallax_offset(100.0, 2) + 70.0).abs() < 1e-9);
        assert!(parallax_offset(100.0, 3) < parallax_offset(100.0, 1));
    }

    #[test]
    fn reveal_delay_is_staggered_by_position() {
        assert_eq!(reveal_delay(0), "animation-delay: 0.0s;");
        assert_eq!(reveal_delay(3), "animation-delay: 0.3s;");
    }

    #[test]
    fn reveal_is_one_shot() {
        let mut latch = RevealLatch::default();
        assert!(!latch.observe(false));
        assert!(latch.observe(true));
        assert!(!latch.observe(false));
        assert!(!latch.observe(true));
        assert!(latch.is_revealed());
    }
}

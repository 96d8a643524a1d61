//! State machines for the two stateful widgets on the page.
//!
//! Both are kept free of browser types so the transition logic runs under
//! plain `cargo test` on the host. The components in [`crate::components`]
//! wrap one of these in a signal and forward every control event to a
//! method here; rendering is a pure function of the resulting state.

/// Rotation state of the media carousel.
///
/// `current` is always a valid index into the slide sequence: navigation
/// wraps at both ends and never leaves `[0, len)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CarouselState {
    len: usize,
    current: usize,
    autoplay: bool,
}

impl CarouselState {
    /// A fresh carousel over `len` slides: first slide showing, autoplay on.
    ///
    /// The carousel assumes at least one slide.
    pub fn new(len: usize) -> Self {
        debug_assert!(len >= 1, "carousel needs at least one slide");
        Self {
            len,
            current: 0,
            autoplay: true,
        }
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn autoplay(&self) -> bool {
        self.autoplay
    }

    /// Timer-driven advancement. Inert while autoplay is off, so a stray
    /// callback firing after cancellation cannot move the index.
    pub fn tick(&mut self) {
        if self.autoplay {
            self.advance();
        }
    }

    /// Manual advancement; leaves the autoplay flag untouched.
    pub fn next(&mut self) {
        self.advance();
    }

    pub fn previous(&mut self) {
        self.current = (self.current + self.len - 1) % self.len;
    }

    /// Jump straight to slide `i`. Callers hold `i < len`; the page renders
    /// one jump control per slide, so it cannot produce anything else.
    pub fn jump_to(&mut self, i: usize) {
        debug_assert!(i < self.len, "slide index out of range");
        self.current = i;
    }

    pub fn toggle_autoplay(&mut self) {
        self.autoplay = !self.autoplay;
    }

    fn advance(&mut self) {
        self.current = (self.current + 1) % self.len;
    }
}

/// Disclosure state of the FAQ list: at most one entry open at a time.
///
/// Modeled as a single optional index rather than per-entry booleans, so
/// the single-selection rule holds by construction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AccordionState {
    len: usize,
    open: Option<usize>,
}

impl AccordionState {
    pub fn new(len: usize, open: Option<usize>) -> Self {
        debug_assert!(
            open.is_none_or(|i| i < len),
            "default open index out of range"
        );
        Self { len, open }
    }

    pub fn open(&self) -> Option<usize> {
        self.open
    }

    pub fn is_open(&self, i: usize) -> bool {
        self.open == Some(i)
    }

    /// Collapse entry `i` if it is the open one, otherwise open it,
    /// implicitly closing whatever else was open.
    pub fn toggle(&mut self, i: usize) {
        debug_assert!(i < self.len, "entry index out of range");
        self.open = if self.open == Some(i) { None } else { Some(i) };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_navigation_stays_in_range() {
        for len in 1..=5 {
            let mut c = CarouselState::new(len);
            for step in 0..len * 3 {
                c.next();
                assert!(c.current() < len, "next #{step} left range for len {len}");
            }
            for step in 0..len * 3 {
                c.previous();
                assert!(
                    c.current() < len,
                    "previous #{step} left range for len {len}"
                );
            }
        }
    }

    #[test]
    fn test_next_and_previous_are_inverses() {
        let mut c = CarouselState::new(4);
        for start in 0..4 {
            c.jump_to(start);
            c.next();
            c.previous();
            assert_eq!(c.current(), start);
            c.previous();
            c.next();
            assert_eq!(c.current(), start);
        }
    }

    #[test]
    fn test_previous_wraps_from_first_slide() {
        let mut c = CarouselState::new(4);
        c.previous();
        assert_eq!(c.current(), 3);
    }

    #[test]
    fn test_autoplay_toggle_parity() {
        let mut c = CarouselState::new(3);
        assert!(c.autoplay(), "autoplay starts enabled");
        c.toggle_autoplay();
        assert!(!c.autoplay());
        c.toggle_autoplay();
        assert!(c.autoplay());
    }

    #[test]
    fn test_ticks_are_inert_while_paused() {
        let mut c = CarouselState::new(4);
        c.toggle_autoplay();
        for _ in 0..10 {
            c.tick();
        }
        assert_eq!(c.current(), 0, "paused carousel must not advance");
    }

    #[test]
    fn test_k_ticks_advance_k_slides() {
        let mut c = CarouselState::new(4);
        for k in 1..=9 {
            c.tick();
            assert_eq!(c.current(), k % 4);
        }
    }

    #[test]
    fn test_three_ticks_then_previous() {
        // 4 slides, autoplay on: after 3 ticks the last slide is showing.
        let mut c = CarouselState::new(4);
        for _ in 0..3 {
            c.tick();
        }
        assert_eq!(c.current(), 3);
        c.previous();
        assert_eq!(c.current(), 2);
    }

    #[test]
    fn test_manual_navigation_keeps_autoplay() {
        let mut c = CarouselState::new(4);
        c.next();
        c.previous();
        c.jump_to(2);
        assert!(c.autoplay(), "navigation must not touch the autoplay flag");
        assert_eq!(c.current(), 2);
    }

    #[test]
    fn test_single_slide_carousel() {
        let mut c = CarouselState::new(1);
        c.next();
        c.previous();
        c.tick();
        assert_eq!(c.current(), 0);
    }

    #[test]
    fn test_accordion_toggle_twice_restores() {
        let mut a = AccordionState::new(4, None);
        a.toggle(2);
        assert_eq!(a.open(), Some(2));
        a.toggle(2);
        assert_eq!(a.open(), None);

        let mut a = AccordionState::new(4, Some(1));
        a.toggle(1);
        assert_eq!(a.open(), None);
        a.toggle(1);
        assert_eq!(a.open(), Some(1));
    }

    #[test]
    fn test_accordion_single_selection() {
        let mut a = AccordionState::new(4, None);
        a.toggle(0);
        a.toggle(3);
        assert_eq!(a.open(), Some(3), "opening one entry closes the other");
        assert!(!a.is_open(0));
    }

    #[test]
    fn test_accordion_walkthrough() {
        // 4 entries, first one open by default.
        let mut a = AccordionState::new(4, Some(0));
        a.toggle(0);
        assert_eq!(a.open(), None);
        a.toggle(2);
        assert_eq!(a.open(), Some(2));
        a.toggle(1);
        assert_eq!(a.open(), Some(1));
        assert!(!a.is_open(2));
    }
}

//! Focus trap for the open drawer

use super::effects::FocusTarget;

/// Keeps keyboard focus cycling inside the drawer panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FocusTrap {
    count: usize,
    current: Option<usize>,
}

impl FocusTrap {
    /// Trap over `count` focusable elements (close button first).
    pub fn new(count: usize) -> Self {
        Self {
            count,
            current: None,
        }
    }

    pub fn current(&self) -> Option<FocusTarget> {
        self.current.map(FocusTarget::from_trap_index)
    }

    /// Focus `target` if it is inside the panel.
    pub fn set(&mut self, target: FocusTarget) {
        self.current = target.trap_index().filter(|&i| i < self.count);
    }

    pub fn release(&mut self) {
        self.current = None;
    }

    /// Tab: next element, wrapping from the last to the first.
    pub fn next(&mut self) -> Option<FocusTarget> {
        if self.count == 0 {
            return None;
        }
        let next = match self.current {
            Some(i) if i + 1 < self.count => i + 1,
            Some(_) => 0,
            None => 0,
        };
        self.current = Some(next);
        self.current()
    }

    /// Shift+Tab: previous element, wrapping from the first to the last.
    pub fn prev(&mut self) -> Option<FocusTarget> {
        if self.count == 0 {
            return None;
        }
        let prev = match self.current {
            Some(0) | None => self.count - 1,
            Some(i) => i - 1,
        };
        self.current = Some(prev);
        self.current()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tab_from_last_wraps_to_first() {
        let mut trap = FocusTrap::new(3);
        trap.set(FocusTarget::NavItem(1));
        assert_eq!(trap.next(), Some(FocusTarget::CloseButton));
    }

    #[test]
    fn test_shift_tab_from_first_wraps_to_last() {
        let mut trap = FocusTrap::new(3);
        trap.set(FocusTarget::CloseButton);
        assert_eq!(trap.prev(), Some(FocusTarget::NavItem(1)));
    }

    #[test]
    fn test_focus_never_leaves_over_many_tabs() {
        let mut trap = FocusTrap::new(4);
        trap.set(FocusTarget::CloseButton);
        for _ in 0..17 {
            assert!(trap.next().and_then(|t| t.trap_index()).is_some());
        }
        for _ in 0..11 {
            assert!(trap.prev().and_then(|t| t.trap_index()).is_some());
        }
    }

    #[test]
    fn test_outside_target_is_not_trapped() {
        let mut trap = FocusTrap::new(2);
        trap.set(FocusTarget::Toggle);
        assert_eq!(trap.current(), None);
        trap.set(FocusTarget::NavItem(5));
        assert_eq!(trap.current(), None);
    }

    #[test]
    fn test_empty_trap() {
        let mut trap = FocusTrap::new(0);
        assert_eq!(trap.next(), None);
        assert_eq!(trap.prev(), None);
    }
}

//! Page scroll lock while the drawer is shown

/// Captures the page offset on lock and hands it back on unlock.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScrollLock {
    captured: Option<u32>,
}

impl ScrollLock {
    /// Freeze at `offset`. Locking twice keeps the first capture.
    pub fn lock(&mut self, offset: u32) -> u32 {
        *self.captured.get_or_insert(offset)
    }

    /// Release, returning the offset to restore.
    pub fn unlock(&mut self) -> Option<u32> {
        self.captured.take()
    }

    pub fn is_locked(&self) -> bool {
        self.captured.is_some()
    }

    pub fn captured(&self) -> Option<u32> {
        self.captured
    }
}

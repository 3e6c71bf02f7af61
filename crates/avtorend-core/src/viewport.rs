//! Viewport and capability detection
//!
//! [`detect`] is a pure function from [`EnvironmentSignals`] to a
//! [`ViewportClass`] snapshot. Callers replace their snapshot wholesale on
//! every recomputation; nothing here keeps state.

/// Named viewport-width bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Breakpoint {
    Xs,
    Sm,
    Md,
    Lg,
    Xl,
    Xxl,
}

/// Breakpoints with their inclusive minimum width in px, widest last.
pub const BREAKPOINTS: [(Breakpoint, u32); 6] = [
    (Breakpoint::Xs, 0),
    (Breakpoint::Sm, 640),
    (Breakpoint::Md, 768),
    (Breakpoint::Lg, 1024),
    (Breakpoint::Xl, 1280),
    (Breakpoint::Xxl, 1536),
];

/// Widths below this are mobile.
pub const TABLET_MIN_WIDTH: u32 = 768;
/// Widths at or above this are desktop.
pub const DESKTOP_MIN_WIDTH: u32 = 1024;

impl Breakpoint {
    /// Find the widest breakpoint whose minimum width fits.
    pub fn for_width(width_px: u32) -> Self {
        BREAKPOINTS
            .iter()
            .rev()
            .find(|(_, min)| width_px >= *min)
            .map(|(bp, _)| *bp)
            .unwrap_or(Breakpoint::Xs)
    }

    pub fn name(&self) -> &'static str {
        match self {
            Breakpoint::Xs => "xs",
            Breakpoint::Sm => "sm",
            Breakpoint::Md => "md",
            Breakpoint::Lg => "lg",
            Breakpoint::Xl => "xl",
            Breakpoint::Xxl => "2xl",
        }
    }
}

impl std::fmt::Display for Breakpoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Coarse device class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DeviceTier {
    #[default]
    Mobile,
    Tablet,
    Desktop,
}

impl DeviceTier {
    pub fn for_width(width_px: u32) -> Self {
        if width_px >= DESKTOP_MIN_WIDTH {
            DeviceTier::Desktop
        } else if width_px >= TABLET_MIN_WIDTH {
            DeviceTier::Tablet
        } else {
            DeviceTier::Mobile
        }
    }

    pub fn is_desktop(&self) -> bool {
        matches!(self, DeviceTier::Desktop)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    Portrait,
    Landscape,
}

/// Raw environment readings fed to [`detect`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EnvironmentSignals {
    pub width_px: u32,
    pub height_px: u32,
    pub is_touch: bool,
    pub reduced_motion: bool,
}

impl EnvironmentSignals {
    pub fn orientation(&self) -> Orientation {
        if self.width_px >= self.height_px {
            Orientation::Landscape
        } else {
            Orientation::Portrait
        }
    }
}

/// Immutable snapshot of the current viewport classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewportClass {
    pub device_tier: DeviceTier,
    pub breakpoint: Breakpoint,
    pub is_touch: bool,
    pub reduced_motion: bool,
}

impl Default for ViewportClass {
    fn default() -> Self {
        detect(&EnvironmentSignals::default())
    }
}

/// Classify the environment.
pub fn detect(signals: &EnvironmentSignals) -> ViewportClass {
    ViewportClass {
        device_tier: DeviceTier::for_width(signals.width_px),
        breakpoint: Breakpoint::for_width(signals.width_px),
        is_touch: signals.is_touch,
        reduced_motion: signals.reduced_motion,
    }
}

/// Capability hints read from the process environment.
///
/// `AVTOREND_TOUCH=1` marks the device as touch-capable.
/// `AVTOREND_REDUCED_MOTION=1` or the presence of `NO_MOTION` requests
/// reduced motion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CapabilityHints {
    pub is_touch: bool,
    pub reduced_motion: bool,
}

pub fn capability_hints_from_env() -> CapabilityHints {
    CapabilityHints {
        is_touch: env_flag("AVTOREND_TOUCH"),
        reduced_motion: env_flag("AVTOREND_REDUCED_MOTION") || std::env::var_os("NO_MOTION").is_some(),
    }
}

fn env_flag(name: &str) -> bool {
    std::env::var(name)
        .map(|v| matches!(v.trim().to_ascii_lowercase().as_str(), "1" | "true" | "yes" | "on"))
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn signals(width_px: u32) -> EnvironmentSignals {
        EnvironmentSignals {
            width_px,
            height_px: 800,
            ..Default::default()
        }
    }

    #[test]
    fn test_breakpoint_boundaries() {
        assert_eq!(Breakpoint::for_width(0), Breakpoint::Xs);
        assert_eq!(Breakpoint::for_width(639), Breakpoint::Xs);
        assert_eq!(Breakpoint::for_width(640), Breakpoint::Sm);
        assert_eq!(Breakpoint::for_width(767), Breakpoint::Sm);
        assert_eq!(Breakpoint::for_width(768), Breakpoint::Md);
        assert_eq!(Breakpoint::for_width(1024), Breakpoint::Lg);
        assert_eq!(Breakpoint::for_width(1280), Breakpoint::Xl);
        assert_eq!(Breakpoint::for_width(1536), Breakpoint::Xxl);
        assert_eq!(Breakpoint::for_width(4000), Breakpoint::Xxl);
    }

    #[test]
    fn test_breakpoint_names() {
        assert_eq!(Breakpoint::Xxl.name(), "2xl");
        assert_eq!(Breakpoint::Md.to_string(), "md");
    }

    #[test]
    fn test_device_tier_boundaries() {
        assert_eq!(detect(&signals(767)).device_tier, DeviceTier::Mobile);
        assert_eq!(detect(&signals(768)).device_tier, DeviceTier::Tablet);
        assert_eq!(detect(&signals(1023)).device_tier, DeviceTier::Tablet);
        assert_eq!(detect(&signals(1024)).device_tier, DeviceTier::Desktop);
    }

    #[test]
    fn test_detect_carries_capabilities() {
        let class = detect(&EnvironmentSignals {
            width_px: 400,
            height_px: 800,
            is_touch: true,
            reduced_motion: true,
        });
        assert!(class.is_touch);
        assert!(class.reduced_motion);
        assert_eq!(class.breakpoint, Breakpoint::Xs);
    }

    #[test]
    fn test_orientation() {
        assert_eq!(signals(1200).orientation(), Orientation::Landscape);
        assert_eq!(signals(400).orientation(), Orientation::Portrait);
    }

    #[test]
    #[serial]
    fn test_capability_hints_from_env() {
        std::env::set_var("AVTOREND_TOUCH", "1");
        std::env::remove_var("AVTOREND_REDUCED_MOTION");
        std::env::remove_var("NO_MOTION");
        let hints = capability_hints_from_env();
        assert!(hints.is_touch);
        assert!(!hints.reduced_motion);
        std::env::remove_var("AVTOREND_TOUCH");
    }

    #[test]
    #[serial]
    fn test_no_motion_env_requests_reduced_motion() {
        std::env::remove_var("AVTOREND_TOUCH");
        std::env::set_var("NO_MOTION", "");
        let hints = capability_hints_from_env();
        assert!(hints.reduced_motion);
        assert!(!hints.is_touch);
        std::env::remove_var("NO_MOTION");
    }
}

use crate::config::ViewConfig;

/// Scroll-derived flags for the page chrome.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ChromeFlags {
    pub nav_opaque: bool,
    pub show_scroll_top: bool,
}

impl ChromeFlags {
    pub fn at(offset: u32, config: &ViewConfig) -> Self {
        Self {
            nav_opaque: offset > config.nav_opaque_after,
            show_scroll_top: offset > config.scroll_top_after,
        }
    }
}

/// Mobile navigation drawer.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MenuState {
    open: bool,
}

impl MenuState {
    pub fn is_open(self) -> bool {
        self.open
    }

    pub fn toggled(self) -> Self {
        Self { open: !self.open }
    }

    /// Following any drawer link closes the drawer.
    pub fn navigated(self) -> Self {
        Self { open: false }
    }
}

/// Hero decoration transforms for the current scroll offset.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Parallax {
    pub rise_px: f64,
    pub sink_px: f64,
    pub opacity: f64,
}

impl Parallax {
    pub fn at(offset: u32, config: &ViewConfig) -> Self {
        let travel = progress(offset, config.parallax_range) * config.parallax_travel_px;
        Self {
            rise_px: travel,
            sink_px: -travel,
            opacity: 1.0 - progress(offset, config.parallax_fade_range),
        }
    }
}

/// `offset / range`, clamped to `0.0..=1.0`.
fn progress(offset: u32, range: u32) -> f64 {
    if range == 0 {
        return 1.0;
    }
    (f64::from(offset) / f64::from(range)).min(1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nav_opaque_is_strict() {
        let config = ViewConfig::default();
        assert!(!ChromeFlags::at(0, &config).nav_opaque);
        assert!(!ChromeFlags::at(20, &config).nav_opaque);
        assert!(ChromeFlags::at(21, &config).nav_opaque);
    }

    #[test]
    fn test_scroll_top_is_strict() {
        let config = ViewConfig::default();
        assert!(!ChromeFlags::at(500, &config).show_scroll_top);
        assert!(ChromeFlags::at(501, &config).show_scroll_top);
    }

    #[test]
    fn test_menu_toggle_and_navigate() {
        let menu = MenuState::default();
        assert!(!menu.is_open());
        let menu = menu.toggled();
        assert!(menu.is_open());
        assert!(!menu.navigated().is_open());
        assert!(!MenuState::default().navigated().is_open());
    }

    #[test]
    fn test_parallax_endpoints() {
        let config = ViewConfig::default();
        let top = Parallax::at(0, &config);
        assert_eq!(top.rise_px, 0.0);
        assert_eq!(top.opacity, 1.0);

        let mid = Parallax::at(250, &config);
        assert!((mid.rise_px - 50.0).abs() < 1e-9);
        assert!((mid.sink_px + 50.0).abs() < 1e-9);

        let far = Parallax::at(10_000, &config);
        assert_eq!(far.rise_px, 100.0);
        assert_eq!(far.sink_px, -100.0);
        assert_eq!(far.opacity, 0.0);
    }
}

use log::Level;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug  // Verbose console output when running locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

/// Thresholds and timings shared by the scroll tracker, the reveal
/// coordinator and the page chrome.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewConfig {
    /// Added to the scroll offset before testing which section is active,
    /// compensating for the fixed header.
    pub activation_band: u32,
    /// Nav background turns opaque strictly above this offset.
    pub nav_opaque_after: u32,
    /// Scroll-to-top button shows strictly above this offset.
    pub scroll_top_after: u32,
    /// Fraction of a section that must intersect the viewport to reveal it.
    pub reveal_threshold: f64,
    pub entry_duration_secs: f64,
    pub entry_offset_px: f64,
    pub side_offset_px: f64,
    pub stagger_secs: f64,
    /// Scroll distance over which the hero blobs travel `parallax_travel_px`.
    pub parallax_range: u32,
    pub parallax_travel_px: f64,
    /// Scroll distance over which the hero blobs fade out.
    pub parallax_fade_range: u32,
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            activation_band: 100,
            nav_opaque_after: 20,
            scroll_top_after: 500,
            reveal_threshold: 0.1,
            entry_duration_secs: 0.6,
            entry_offset_px: 20.0,
            side_offset_px: 50.0,
            stagger_secs: 0.2,
            parallax_range: 500,
            parallax_travel_px: 100.0,
            parallax_fade_range: 300,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_thresholds() {
        let config = ViewConfig::default();
        assert_eq!(config.activation_band, 100);
        assert_eq!(config.nav_opaque_after, 20);
        assert_eq!(config.scroll_top_after, 500);
        assert!((config.reveal_threshold - 0.1).abs() < f64::EPSILON);
    }

    #[test]
    fn test_debug_builds_log_verbosely() {
        if cfg!(debug_assertions) {
            assert_eq!(log_level(), Level::Debug);
        } else {
            assert_eq!(log_level(), Level::Info);
        }
    }
}

//! Section geometry and active-section lookup.

/// Vertical extent of a rendered section, in document pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Extent {
    pub top: u32,
    pub height: u32,
}

impl Extent {
    pub const fn new(top: u32, height: u32) -> Self {
        Self { top, height }
    }

    /// Half-open containment: `top <= y < top + height`.
    pub fn contains(&self, y: u32) -> bool {
        y >= self.top && (y - self.top) < self.height
    }
}

/// One `<section>` as seen by the last layout measurement.
///
/// `extent` is `None` while the section has not been laid out yet; such
/// sections are skipped and picked up again on the next measurement.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SectionExtent {
    pub id: String,
    pub extent: Option<Extent>,
}

impl SectionExtent {
    pub fn measured(id: impl Into<String>, top: u32, height: u32) -> Self {
        Self {
            id: id.into(),
            extent: Some(Extent::new(top, height)),
        }
    }

    pub fn unmeasured(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            extent: None,
        }
    }
}

/// Point tested against section extents for a given scroll offset.
pub fn activation_point(offset: u32, activation_band: u32) -> u32 {
    offset.saturating_add(activation_band)
}

/// First section, in document order, whose extent contains the activation point.
pub fn section_at(sections: &[SectionExtent], point: u32) -> Option<&str> {
    sections
        .iter()
        .find(|section| section.extent.map_or(false, |extent| extent.contains(point)))
        .map(|section| section.id.as_str())
}

/// Active section after a scroll to `offset`.
///
/// Falls back to `previous` when the activation point lands outside every measured
/// section, so the nav highlight stays put at the page extremes.
pub fn resolve_active(
    sections: &[SectionExtent],
    offset: u32,
    activation_band: u32,
    previous: Option<&str>,
) -> Option<String> {
    section_at(sections, activation_point(offset, activation_band))
        .or(previous)
        .map(str::to_owned)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn three_sections() -> Vec<SectionExtent> {
        vec![
            SectionExtent::measured("home", 0, 800),
            SectionExtent::measured("about", 800, 800),
            SectionExtent::measured("skills", 1600, 800),
        ]
    }

    #[test]
    fn test_extent_is_half_open() {
        let extent = Extent::new(800, 800);
        assert!(!extent.contains(799));
        assert!(extent.contains(800));
        assert!(extent.contains(1599));
        assert!(!extent.contains(1600));
    }

    #[test]
    fn test_zero_height_extent_contains_nothing() {
        assert!(!Extent::new(100, 0).contains(100));
    }

    #[test]
    fn test_top_of_page_is_home() {
        let sections = three_sections();
        assert_eq!(resolve_active(&sections, 0, 100, None).as_deref(), Some("home"));
    }

    #[test]
    fn test_activation_point_crosses_into_next_section_early() {
        let sections = three_sections();
        // 750 + 100 = 850 lies inside about
        assert_eq!(resolve_active(&sections, 750, 100, None).as_deref(), Some("about"));
        assert_eq!(resolve_active(&sections, 699, 100, None).as_deref(), Some("home"));
        assert_eq!(resolve_active(&sections, 700, 100, None).as_deref(), Some("about"));
    }

    #[test]
    fn test_repeated_queries_are_stable() {
        let sections = three_sections();
        for offset in [0, 450, 1499, 1500, 2299] {
            let first = resolve_active(&sections, offset, 100, None);
            let second = resolve_active(&sections, offset, 100, first.as_deref());
            assert_eq!(first, second);
        }
    }

    #[test]
    fn test_past_last_section_keeps_previous() {
        let sections = three_sections();
        assert_eq!(
            resolve_active(&sections, 5000, 100, Some("skills")).as_deref(),
            Some("skills")
        );
    }

    #[test]
    fn test_nothing_active_before_any_match() {
        let sections = vec![SectionExtent::measured("about", 1000, 500)];
        assert_eq!(resolve_active(&sections, 0, 100, None), None);
    }

    #[test]
    fn test_first_match_wins_on_overlap() {
        let sections = vec![
            SectionExtent::measured("a", 0, 1000),
            SectionExtent::measured("b", 500, 1000),
        ];
        assert_eq!(section_at(&sections, 700), Some("a"));
    }

    #[test]
    fn test_unmeasured_sections_are_skipped() {
        let sections = vec![
            SectionExtent::unmeasured("home"),
            SectionExtent::measured("about", 0, 800),
        ];
        assert_eq!(section_at(&sections, 100), Some("about"));
    }

    #[test]
    fn test_activation_point_saturates() {
        assert_eq!(activation_point(u32::MAX - 10, 100), u32::MAX);
    }
}

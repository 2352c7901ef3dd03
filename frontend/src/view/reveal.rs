//! One-shot entry animations.
//!
//! Every mounted section owns a [`RevealState`]. The first visibility sample at
//! or above the threshold moves it to [`RevealState::Revealed`], and nothing
//! moves it back while the section stays mounted.

use std::collections::HashMap;

use crate::config::ViewConfig;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RevealState {
    #[default]
    NotRevealed,
    Revealed,
}

impl RevealState {
    pub fn is_revealed(self) -> bool {
        matches!(self, RevealState::Revealed)
    }

    /// Feed one visibility sample. Returns the next state.
    pub fn observe(self, fraction: f64, threshold: f64) -> RevealState {
        match self {
            RevealState::Revealed => RevealState::Revealed,
            RevealState::NotRevealed if fraction >= threshold => RevealState::Revealed,
            RevealState::NotRevealed => RevealState::NotRevealed,
        }
    }

    /// Animation target selected by the rendering layer.
    pub fn class(self) -> &'static str {
        match self {
            RevealState::NotRevealed => "hidden",
            RevealState::Revealed => "visible",
        }
    }
}

/// How a revealed element travels into place.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Entrance {
    #[default]
    FadeUp,
    FadeLeft,
    FadeRight,
}

impl Entrance {
    pub fn class(self) -> &'static str {
        match self {
            Entrance::FadeUp => "entrance-up",
            Entrance::FadeLeft => "entrance-left",
            Entrance::FadeRight => "entrance-right",
        }
    }

    /// Starting translation `(x, y)` in pixels while hidden.
    pub fn hidden_offset(self, config: &ViewConfig) -> (f64, f64) {
        match self {
            Entrance::FadeUp => (0.0, config.entry_offset_px),
            Entrance::FadeLeft => (-config.side_offset_px, 0.0),
            Entrance::FadeRight => (config.side_offset_px, 0.0),
        }
    }
}

/// Transition delay for the `index`-th child of a staggered group.
pub fn stagger_delay(index: usize, config: &ViewConfig) -> f64 {
    index as f64 * config.stagger_secs
}

/// Reveal states of all mounted sections, keyed by section id.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RevealCoordinator {
    sections: HashMap<String, RevealState>,
}

impl RevealCoordinator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start tracking a section. Re-mounting an already tracked id keeps its
    /// current state.
    pub fn mount(&mut self, id: &str) {
        self.sections.entry(id.to_owned()).or_default();
    }

    /// Forget a section; a later mount starts again from `NotRevealed`.
    pub fn unmount(&mut self, id: &str) {
        self.sections.remove(id);
    }

    /// Apply a visibility sample. Returns `true` only on the sample that
    /// revealed the section. Samples for unknown ids are dropped.
    pub fn observe(&mut self, id: &str, fraction: f64, threshold: f64) -> bool {
        match self.sections.get_mut(id) {
            Some(state) => {
                let before = *state;
                *state = before.observe(fraction, threshold);
                !before.is_revealed() && state.is_revealed()
            }
            None => false,
        }
    }

    pub fn state(&self, id: &str) -> RevealState {
        self.sections.get(id).copied().unwrap_or_default()
    }

    pub fn revealed_count(&self) -> usize {
        self.sections.values().filter(|state| state.is_revealed()).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reveals_on_first_sample_over_threshold() {
        let mut reveals = RevealCoordinator::new();
        reveals.mount("projects");

        let fired: Vec<bool> = [0.0, 0.05, 0.12, 0.3]
            .iter()
            .map(|fraction| reveals.observe("projects", *fraction, 0.1))
            .collect();

        assert_eq!(fired, vec![false, false, true, false]);
        assert_eq!(reveals.state("projects"), RevealState::Revealed);
    }

    #[test]
    fn test_threshold_is_inclusive() {
        assert_eq!(
            RevealState::NotRevealed.observe(0.1, 0.1),
            RevealState::Revealed
        );
    }

    #[test]
    fn test_never_hides_again() {
        let mut reveals = RevealCoordinator::new();
        reveals.mount("about");
        reveals.observe("about", 1.0, 0.1);
        for fraction in [0.0, 0.09, 0.0, 0.5, 0.0] {
            reveals.observe("about", fraction, 0.1);
            assert!(reveals.state("about").is_revealed());
        }
    }

    #[test]
    fn test_visible_at_mount_fires_on_first_sample() {
        let mut reveals = RevealCoordinator::new();
        reveals.mount("home");
        assert!(reveals.observe("home", 0.8, 0.1));
    }

    #[test]
    fn test_unknown_section_is_ignored() {
        let mut reveals = RevealCoordinator::new();
        assert!(!reveals.observe("ghost", 1.0, 0.1));
        assert_eq!(reveals.state("ghost"), RevealState::NotRevealed);
        assert_eq!(reveals.revealed_count(), 0);

        // The dropped sample must not carry over into a later mount
        reveals.mount("ghost");
        assert_eq!(reveals.state("ghost"), RevealState::NotRevealed);
    }

    #[test]
    fn test_remount_keeps_state_but_unmount_resets() {
        let mut reveals = RevealCoordinator::new();
        reveals.mount("skills");
        reveals.observe("skills", 0.5, 0.1);
        reveals.mount("skills");
        assert!(reveals.state("skills").is_revealed());

        reveals.unmount("skills");
        reveals.mount("skills");
        assert_eq!(reveals.state("skills"), RevealState::NotRevealed);
    }

    #[test]
    fn test_revealed_count() {
        let mut reveals = RevealCoordinator::new();
        for id in ["a", "b", "c"] {
            reveals.mount(id);
        }
        reveals.observe("a", 1.0, 0.1);
        reveals.observe("c", 0.2, 0.1);
        assert_eq!(reveals.revealed_count(), 2);
    }

    #[test]
    fn test_stagger_delay_grows_per_child() {
        let config = ViewConfig::default();
        assert_eq!(stagger_delay(0, &config), 0.0);
        assert!((stagger_delay(3, &config) - 0.6).abs() < 1e-9);
    }

    #[test]
    fn test_entrance_offsets() {
        let config = ViewConfig::default();
        assert_eq!(Entrance::FadeUp.hidden_offset(&config), (0.0, 20.0));
        assert_eq!(Entrance::FadeLeft.hidden_offset(&config), (-50.0, 0.0));
        assert_eq!(Entrance::FadeRight.hidden_offset(&config), (50.0, 0.0));
    }
}

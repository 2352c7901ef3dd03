//! The page's view store.
//!
//! All scroll-driven state lives in one [`ViewState`] held by `use_reducer`
//! in the page component and handed down as props. Browser glue in
//! [`crate::view::dom`] only dispatches [`ViewAction`]s; everything that is
//! derived from them is computed here.

use std::rc::Rc;

use log::{debug, info};
use yew::prelude::*;

use crate::config::ViewConfig;
use crate::view::chrome::{ChromeFlags, MenuState, Parallax};
use crate::view::layout::{resolve_active, SectionExtent};
use crate::view::reveal::{RevealCoordinator, RevealState};

/// Current vertical scroll offset of the window.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ScrollState {
    pub offset: u32,
}

pub enum ViewAction {
    /// A (frame-coalesced) scroll or resize sample with fresh measurements.
    Scrolled {
        offset: u32,
        sections: Vec<SectionExtent>,
    },
    SectionMounted(String),
    SectionUnmounted(String),
    Visibility {
        id: String,
        fraction: f64,
    },
    ToggleMenu,
    /// A navigation link was followed.
    Navigate,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ViewState {
    config: ViewConfig,
    scroll: ScrollState,
    active: Option<String>,
    chrome: ChromeFlags,
    menu: MenuState,
    reveals: RevealCoordinator,
}

impl ViewState {
    pub fn new(config: ViewConfig) -> Self {
        Self {
            config,
            scroll: ScrollState::default(),
            active: None,
            chrome: ChromeFlags::at(0, &config),
            menu: MenuState::default(),
            reveals: RevealCoordinator::new(),
        }
    }

    pub fn config(&self) -> &ViewConfig {
        &self.config
    }

    pub fn active_section(&self) -> Option<&str> {
        self.active.as_deref()
    }

    pub fn is_active(&self, id: &str) -> bool {
        self.active_section() == Some(id)
    }

    pub fn chrome(&self) -> ChromeFlags {
        self.chrome
    }

    pub fn menu_open(&self) -> bool {
        self.menu.is_open()
    }

    pub fn reveal_state(&self, id: &str) -> RevealState {
        self.reveals.state(id)
    }

    pub fn parallax(&self) -> Parallax {
        Parallax::at(self.scroll.offset, &self.config)
    }
}

impl Default for ViewState {
    fn default() -> Self {
        Self::new(ViewConfig::default())
    }
}

impl Reducible for ViewState {
    type Action = ViewAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();

        match action {
            ViewAction::Scrolled { offset, sections } => {
                next.scroll = ScrollState { offset };
                next.active = resolve_active(
                    &sections,
                    offset,
                    next.config.activation_band,
                    self.active.as_deref(),
                );
                next.chrome = ChromeFlags::at(offset, &next.config);
                if next.active != self.active {
                    debug!("Active section: {:?} -> {:?}", self.active, next.active);
                }
            }
            ViewAction::SectionMounted(id) => next.reveals.mount(&id),
            ViewAction::SectionUnmounted(id) => next.reveals.unmount(&id),
            ViewAction::Visibility { id, fraction } => {
                let threshold = next.config.reveal_threshold;
                if next.reveals.observe(&id, fraction, threshold) {
                    info!(
                        "Revealing section {} at {:.2} visible ({} revealed)",
                        id,
                        fraction,
                        next.reveals.revealed_count()
                    );
                }
            }
            ViewAction::ToggleMenu => {
                next.menu = next.menu.toggled();
                debug!("Mobile menu open: {}", next.menu.is_open());
            }
            ViewAction::Navigate => {
                next.menu = next.menu.navigated();
            }
        }

        if next == *self {
            self
        } else {
            Rc::new(next)
        }
    }
}

/// Store handle shared with every component on the page.
pub type ViewContext = UseReducerHandle<ViewState>;

#[cfg(test)]
mod tests {
    use super::*;

    fn reduce_all(actions: Vec<ViewAction>) -> Rc<ViewState> {
        actions
            .into_iter()
            .fold(Rc::new(ViewState::default()), |state, action| state.reduce(action))
    }

    fn layout() -> Vec<SectionExtent> {
        vec![
            SectionExtent::measured("home", 0, 800),
            SectionExtent::measured("about", 800, 800),
            SectionExtent::measured("skills", 1600, 800),
        ]
    }

    fn scrolled(offset: u32) -> ViewAction {
        ViewAction::Scrolled {
            offset,
            sections: layout(),
        }
    }

    #[test]
    fn test_nothing_active_before_first_measurement() {
        let state = ViewState::default();
        assert_eq!(state.active_section(), None);
        assert!(!state.menu_open());
        assert_eq!(state.chrome(), ChromeFlags::default());
    }

    #[test]
    fn test_scroll_updates_active_and_chrome() {
        let state = reduce_all(vec![scrolled(750)]);
        assert_eq!(state.active_section(), Some("about"));
        assert!(state.chrome().nav_opaque);
        assert!(state.chrome().show_scroll_top);
        assert_eq!(state.parallax(), Parallax::at(750, state.config()));

        let state = state.reduce(scrolled(0));
        assert!(state.is_active("home"));
        assert!(!state.chrome().nav_opaque);
    }

    #[test]
    fn test_active_is_sticky_past_the_end() {
        let state = reduce_all(vec![scrolled(1700), scrolled(9000)]);
        assert_eq!(state.active_section(), Some("skills"));
        assert!(state.chrome().show_scroll_top);
        assert_eq!(state.parallax().opacity, 0.0);
    }

    #[test]
    fn test_unmeasured_layout_keeps_previous_active() {
        let state = reduce_all(vec![
            scrolled(0),
            ViewAction::Scrolled {
                offset: 900,
                sections: vec![SectionExtent::unmeasured("about")],
            },
        ]);
        assert_eq!(state.active_section(), Some("home"));
    }

    #[test]
    fn test_link_closes_open_drawer_in_one_step() {
        let state = reduce_all(vec![ViewAction::ToggleMenu]);
        assert!(state.menu_open());
        let state = state.reduce(ViewAction::Navigate);
        assert!(!state.menu_open());
    }

    #[test]
    fn test_link_with_closed_drawer_stays_closed() {
        let state = reduce_all(vec![ViewAction::Navigate]);
        assert!(!state.menu_open());
    }

    #[test]
    fn test_reveal_sequence_through_store() {
        let mut state = reduce_all(vec![ViewAction::SectionMounted("projects".into())]);
        let mut seen = Vec::new();
        for fraction in [0.0, 0.05, 0.12, 0.3] {
            state = state.reduce(ViewAction::Visibility {
                id: "projects".into(),
                fraction,
            });
            seen.push(state.reveal_state("projects").is_revealed());
        }
        assert_eq!(seen, vec![false, false, true, true]);
    }

    #[test]
    fn test_unmount_resets_reveal() {
        let state = reduce_all(vec![
            ViewAction::SectionMounted("about".into()),
            ViewAction::Visibility {
                id: "about".into(),
                fraction: 1.0,
            },
            ViewAction::SectionUnmounted("about".into()),
            ViewAction::SectionMounted("about".into()),
        ]);
        assert_eq!(state.reveal_state("about"), RevealState::NotRevealed);
    }

    #[test]
    fn test_unchanged_state_is_not_reallocated() {
        let state = reduce_all(vec![scrolled(300)]);
        let again = state.clone().reduce(scrolled(300));
        assert!(Rc::ptr_eq(&state, &again));
    }

    #[test]
    fn test_scrolling_leaves_section_props_unchanged() {
        let before = reduce_all(vec![
            ViewAction::SectionMounted("about".into()),
            ViewAction::Visibility {
                id: "about".into(),
                fraction: 0.5,
            },
            scrolled(100),
        ]);
        let after = before.clone().reduce(scrolled(750));

        assert!(!Rc::ptr_eq(&before, &after));
        assert_eq!(before.reveal_state("about"), after.reveal_state("about"));
        assert_eq!(before.reveal_state("skills"), after.reveal_state("skills"));
        assert_eq!(before.config(), after.config());
    }

    #[test]
    fn test_parallax_follows_offset() {
        let state = reduce_all(vec![scrolled(250)]);
        assert!((state.parallax().rise_px - 50.0).abs() < 1e-9);
    }
}

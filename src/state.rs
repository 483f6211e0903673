use std::fmt;
use std::rc::Rc;
use std::str::FromStr;

use log::debug;
use serde::Serialize;
use yew::prelude::*;

use crate::theme::Theme;

/// Top-level content panels, in keyboard traversal order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum SectionId {
    Home,
    About,
    Programs,
    Impact,
    GetInvolved,
    Contact,
}

impl SectionId {
    pub const ALL: [SectionId; 6] = [
        SectionId::Home,
        SectionId::About,
        SectionId::Programs,
        SectionId::Impact,
        SectionId::GetInvolved,
        SectionId::Contact,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            SectionId::Home => "home",
            SectionId::About => "about",
            SectionId::Programs => "programs",
            SectionId::Impact => "impact",
            SectionId::GetInvolved => "get-involved",
            SectionId::Contact => "contact",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            SectionId::Home => "ThinkBit Edge Corp - Empowering Youth Through Technology",
            SectionId::About => "About Us - ThinkBit Edge Corp",
            SectionId::Programs => "Our Programs - ThinkBit Edge Corp",
            SectionId::Impact => "Our Impact - ThinkBit Edge Corp",
            SectionId::GetInvolved => "Get Involved - ThinkBit Edge Corp",
            SectionId::Contact => "Contact Us - ThinkBit Edge Corp",
        }
    }

    /// Label used in the navigation bar.
    pub fn label(self) -> &'static str {
        match self {
            SectionId::Home => "Home",
            SectionId::About => "About",
            SectionId::Programs => "Programs",
            SectionId::Impact => "Impact",
            SectionId::GetInvolved => "Get Involved",
            SectionId::Contact => "Contact",
        }
    }

    fn index(self) -> usize {
        match self {
            SectionId::Home => 0,
            SectionId::About => 1,
            SectionId::Programs => 2,
            SectionId::Impact => 3,
            SectionId::GetInvolved => 4,
            SectionId::Contact => 5,
        }
    }

    /// Neighbour in the cyclic order; wraps at both ends.
    pub fn step(self, direction: Direction) -> SectionId {
        let len = Self::ALL.len();
        let index = match direction {
            Direction::Next => (self.index() + 1) % len,
            Direction::Prev => (self.index() + len - 1) % len,
        };
        Self::ALL[index]
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownSection(pub String);

impl fmt::Display for UnknownSection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "no section with id {:?}", self.0)
    }
}

impl std::error::Error for UnknownSection {}

impl FromStr for SectionId {
    type Err = UnknownSection;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SectionId::ALL
            .into_iter()
            .find(|section| section.as_str() == s)
            .ok_or_else(|| UnknownSection(s.to_string()))
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Next,
    Prev,
}

#[derive(Clone, Debug, PartialEq)]
pub struct AppState {
    pub current_section: SectionId,
    pub menu_open: bool,
    pub theme: Theme,
    /// Set once the about/impact counters ran this session.
    pub counters_animated: bool,
    /// Bumped on every successful navigation.
    pub section_entry: u32,
    /// Bumped whenever counters should run again.
    pub counter_epoch: u32,
    pub online: bool,
    /// Text for the screen reader live region.
    pub announcement: Option<String>,
}

impl AppState {
    /// Page start counts as entering home, so counters run on first render.
    pub fn new(theme: Theme) -> Self {
        Self {
            current_section: SectionId::Home,
            menu_open: false,
            theme,
            counters_animated: false,
            section_entry: 1,
            counter_epoch: 1,
            online: true,
            announcement: None,
        }
    }

    pub fn is_active(&self, section: SectionId) -> bool {
        self.current_section == section
    }

    fn entered(&self, section: SectionId) -> AppState {
        let mut next = self.clone();
        next.current_section = section;
        next.section_entry = next.section_entry.wrapping_add(1);
        match section {
            SectionId::About | SectionId::Impact if !next.counters_animated => {
                next.counter_epoch = next.counter_epoch.wrapping_add(1);
                next.counters_animated = true;
            }
            // Home replays counters on every visit, regardless of the one-shot flag.
            SectionId::Home => {
                next.counter_epoch = next.counter_epoch.wrapping_add(1);
            }
            _ => {}
        }
        next
    }
}

/// Handle to the app state, shared with components through context.
pub type AppContext = UseReducerHandle<AppState>;

#[derive(Clone, Debug, PartialEq)]
pub enum Action {
    /// Raw fragment id from an anchor; unknown ids are dropped.
    NavigateTo(String),
    Navigate(SectionId),
    NavigateRelative(Direction),
    ToggleMenu,
    CloseMenu,
    SetTheme(Theme),
    SetOnline(bool),
    ClearAnnouncement,
}

impl Reducible for AppState {
    type Action = Action;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            Action::NavigateTo(id) => match id.parse::<SectionId>() {
                Ok(section) => self.reduce(Action::Navigate(section)),
                Err(err) => {
                    debug!("Ignoring navigation: {}", err);
                    self
                }
            },
            Action::Navigate(section) => Rc::new(self.entered(section)),
            Action::NavigateRelative(direction) => {
                let target = self.current_section.step(direction);
                let mut next = self.entered(target);
                next.announcement = Some(format!("Navigated to {} section", target));
                Rc::new(next)
            }
            Action::ToggleMenu => {
                let mut next = (*self).clone();
                next.menu_open = !next.menu_open;
                Rc::new(next)
            }
            Action::CloseMenu => {
                if !self.menu_open {
                    return self;
                }
                let mut next = (*self).clone();
                next.menu_open = false;
                Rc::new(next)
            }
            Action::SetTheme(theme) => {
                if self.theme == theme {
                    return self;
                }
                let mut next = (*self).clone();
                next.theme = theme;
                Rc::new(next)
            }
            Action::SetOnline(online) => {
                if self.online == online {
                    return self;
                }
                let mut next = (*self).clone();
                next.online = online;
                Rc::new(next)
            }
            Action::ClearAnnouncement => {
                if self.announcement.is_none() {
                    return self;
                }
                let mut next = (*self).clone();
                next.announcement = None;
                Rc::new(next)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn start() -> Rc<AppState> {
        Rc::new(AppState::new(Theme::Light))
    }

    #[test]
    fn section_ids_round_trip_through_their_fragment() {
        for section in SectionId::ALL {
            assert_eq!(section.as_str().parse::<SectionId>(), Ok(section));
        }
        assert!("blog".parse::<SectionId>().is_err());
        assert!("Home".parse::<SectionId>().is_err());
    }

    #[test]
    fn navigation_makes_exactly_one_section_active() {
        for target in SectionId::ALL {
            let state = start().reduce(Action::NavigateTo(target.as_str().to_string()));
            assert_eq!(state.current_section, target);
            let active: Vec<_> = SectionId::ALL
                .into_iter()
                .filter(|s| state.is_active(*s))
                .collect();
            assert_eq!(active, vec![target]);
        }
    }

    #[test]
    fn unknown_section_leaves_state_untouched() {
        let before = start().reduce(Action::Navigate(SectionId::Programs));
        for id in ["", "#about", "blog", "get_involved", "CONTACT"] {
            let after = before.clone().reduce(Action::NavigateTo(id.to_string()));
            assert!(Rc::ptr_eq(&before, &after), "{id:?} changed state");
        }
    }

    #[test]
    fn every_navigation_bumps_section_entry() {
        let state = start();
        let again = state.clone().reduce(Action::Navigate(SectionId::Home));
        assert_eq!(again.section_entry, state.section_entry + 1);
    }

    #[test]
    fn about_and_impact_animate_counters_once() {
        let state = start();
        let epoch = state.counter_epoch;

        let state = state.reduce(Action::Navigate(SectionId::Impact));
        assert!(state.counters_animated);
        assert_eq!(state.counter_epoch, epoch + 1);

        let state = state.reduce(Action::Navigate(SectionId::About));
        assert_eq!(state.counter_epoch, epoch + 1);
        let state = state.reduce(Action::Navigate(SectionId::Programs));
        assert_eq!(state.counter_epoch, epoch + 1);
    }

    #[test]
    fn home_always_replays_counters() {
        let state = start()
            .reduce(Action::Navigate(SectionId::About))
            .reduce(Action::Navigate(SectionId::Home));
        let epoch = state.counter_epoch;
        let state = state
            .reduce(Action::Navigate(SectionId::Contact))
            .reduce(Action::Navigate(SectionId::Home));
        assert_eq!(state.counter_epoch, epoch + 1);
        assert!(state.counters_animated);
    }

    #[test]
    fn relative_navigation_wraps_both_ways() {
        let last = start().reduce(Action::Navigate(SectionId::Contact));
        let wrapped = last.reduce(Action::NavigateRelative(Direction::Next));
        assert_eq!(wrapped.current_section, SectionId::Home);

        let back = wrapped.reduce(Action::NavigateRelative(Direction::Prev));
        assert_eq!(back.current_section, SectionId::Contact);
        assert_eq!(back.announcement.as_deref(), Some("Navigated to contact section"));

        let cleared = back.reduce(Action::ClearAnnouncement);
        assert_eq!(cleared.announcement, None);
    }

    #[test]
    fn close_menu_is_a_no_op_when_closed() {
        let state = start();
        let same = state.clone().reduce(Action::CloseMenu);
        assert!(Rc::ptr_eq(&state, &same));

        let open = state.reduce(Action::ToggleMenu);
        assert!(open.menu_open);
        assert!(!open.reduce(Action::CloseMenu).menu_open);
    }
}

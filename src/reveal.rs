//! One-way hidden → visible transitions for cards, metrics and timeline items.

use std::rc::Rc;

use yew::Reducible;

/// Fraction of the element that must be on screen.
pub const THRESHOLD: f64 = 0.1;
/// Shrinks the trigger area 50px from the bottom of the viewport.
pub const ROOT_MARGIN: &str = "0px 0px -50px 0px";

pub const SECTION_STAGGER_MS: u32 = 100;
pub const TIMELINE_STAGGER_MS: u32 = 200;

const TRANSITION: &str = "transition: opacity 0.6s ease, transform 0.6s ease;";

/// Injected once at the app root; the timeline reveal refers to `slideInLeft`.
pub const KEYFRAMES: &str = r#"
    @keyframes slideInLeft {
        from { opacity: 0; transform: translateX(-30px); }
        to { opacity: 1; transform: translateX(0); }
    }
    @keyframes fadeInUp {
        from { opacity: 0; transform: translateY(30px); }
        to { opacity: 1; transform: translateY(0); }
    }
    @keyframes scaleIn {
        from { opacity: 0; transform: scale(0.8); }
        to { opacity: 1; transform: scale(1); }
    }
"#;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RevealRole {
    ProgramCard,
    Metric,
    StoryCard,
    InvolvementCard,
    ValueCard,
    TeamMember,
    MissionVisionItem,
    TimelineItem,
    ImpactStat,
}

impl RevealRole {
    pub fn class(self) -> &'static str {
        match self {
            RevealRole::ProgramCard => "program-card",
            RevealRole::Metric => "metric",
            RevealRole::StoryCard => "story-card",
            RevealRole::InvolvementCard => "involvement-card",
            RevealRole::ValueCard => "value-card",
            RevealRole::TeamMember => "team-member",
            RevealRole::MissionVisionItem => "mission-vision__item",
            RevealRole::TimelineItem => "timeline__item",
            RevealRole::ImpactStat => "impact-stat",
        }
    }

    /// Cards are exposed to assistive tech as articles.
    pub fn aria_role(self) -> Option<&'static str> {
        match self {
            RevealRole::ProgramCard
            | RevealRole::StoryCard
            | RevealRole::InvolvementCard
            | RevealRole::ValueCard => Some("article"),
            _ => None,
        }
    }
}

pub fn section_entry_delay(index: usize) -> u32 {
    (index as u32).saturating_mul(SECTION_STAGGER_MS)
}

pub fn timeline_delay(index: usize) -> u32 {
    (index as u32).saturating_mul(TIMELINE_STAGGER_MS)
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RevealState {
    visible: bool,
    slide_in: bool,
}

impl RevealState {
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// First viewport intersection; timeline items also get the slide-in.
    pub fn intersected(self, role: RevealRole) -> Self {
        Self {
            visible: true,
            slide_in: self.slide_in || role == RevealRole::TimelineItem,
        }
    }

    /// Forced reveal when the containing section becomes active.
    pub fn section_entered(self) -> Self {
        Self {
            visible: true,
            ..self
        }
    }

    /// Inline style for the element at `index` among its siblings.
    pub fn style(&self, index: usize) -> String {
        if !self.visible {
            return format!("opacity: 0; transform: translateY(20px); {}", TRANSITION);
        }
        let mut style = format!("opacity: 1; transform: translateY(0); {}", TRANSITION);
        if self.slide_in {
            style.push_str(&format!(
                " animation: slideInLeft 0.6s ease forwards; animation-delay: {}ms;",
                timeline_delay(index)
            ));
        }
        style
    }
}

pub enum RevealEvent {
    Intersected(RevealRole),
    SectionEntered,
}

impl Reducible for RevealState {
    type Action = RevealEvent;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let next = match action {
            RevealEvent::Intersected(role) => self.intersected(role),
            RevealEvent::SectionEntered => self.section_entered(),
        };
        if next == *self {
            self
        } else {
            Rc::new(next)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_hidden_and_never_rehides() {
        let hidden = RevealState::default();
        assert!(!hidden.is_visible());
        assert!(hidden.style(0).starts_with("opacity: 0;"));

        let shown = hidden.section_entered();
        assert!(shown.is_visible());
        assert!(shown.intersected(RevealRole::Metric).is_visible());
        assert!(shown.section_entered().section_entered().is_visible());
    }

    #[test]
    fn both_paths_converge_on_the_same_visible_state() {
        let via_scroll = RevealState::default()
            .intersected(RevealRole::ValueCard)
            .section_entered();
        let via_section = RevealState::default()
            .section_entered()
            .intersected(RevealRole::ValueCard);
        assert_eq!(via_scroll, via_section);
    }

    #[test]
    fn timeline_items_slide_in_with_sibling_stagger() {
        let state = RevealState::default().intersected(RevealRole::TimelineItem);
        let style = state.style(3);
        assert!(style.contains("slideInLeft"));
        assert!(style.contains("animation-delay: 600ms;"));

        let card = RevealState::default().intersected(RevealRole::ProgramCard);
        assert!(!card.style(3).contains("animation"));
    }

    #[test]
    fn reducer_keeps_the_slide_in_after_a_late_section_entry() {
        let state = Rc::new(RevealState::default())
            .reduce(RevealEvent::Intersected(RevealRole::TimelineItem));
        let same = state.clone().reduce(RevealEvent::SectionEntered);
        assert!(Rc::ptr_eq(&state, &same));
        assert!(same.style(1).contains("animation-delay: 200ms;"));
    }

    #[test]
    fn section_stagger_is_per_index() {
        assert_eq!(section_entry_delay(0), 0);
        assert_eq!(section_entry_delay(4), 400);
    }
}
